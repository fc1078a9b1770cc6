//! Shared traits implemented across Storynest crates.

pub mod keyvalue;

pub use keyvalue::KeyValueStore;
