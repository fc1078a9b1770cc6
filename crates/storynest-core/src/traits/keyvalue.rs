//! Durable key/value storage trait for session persistence.

use crate::result::AppResult;

/// Trait for local durable key/value backends (file-backed or in-memory).
///
/// All values are plain strings; structured values are serialized as JSON by
/// the caller. Operations are synchronous: this is local storage, not a
/// network-bound cache, and callers rely on every write being visible to the
/// next read.
pub trait KeyValueStore: Send + Sync + std::fmt::Debug + 'static {
    /// Get a value by key. Returns `None` if the key does not exist.
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Set a value, overwriting any existing value.
    fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove a key. Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> AppResult<()>;

    /// Check whether a key exists.
    fn contains(&self, key: &str) -> AppResult<bool> {
        Ok(self.get(key)?.is_some())
    }
}
