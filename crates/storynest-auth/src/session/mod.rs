//! Session lifecycle: login, restore from storage, logout.

pub mod keys;
pub mod store;

pub use store::{Session, SessionStore};
