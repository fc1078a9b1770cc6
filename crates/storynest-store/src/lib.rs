//! # storynest-store
//!
//! Durable key/value storage backends implementing
//! [`storynest_core::traits::KeyValueStore`]. The file-backed store is the
//! production backend (one JSON file, the console's stand-in for browser
//! local storage); the in-memory store backs tests.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;
