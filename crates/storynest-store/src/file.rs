//! JSON-file-backed key/value store.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::warn;

use storynest_core::AppResult;
use storynest_core::traits::KeyValueStore;

/// Key/value store persisted as a single JSON object in a file.
///
/// Every mutation rewrites the whole file through a temp-file-then-rename
/// sequence, so readers never observe a partially written state. The full
/// map is also held in memory; reads never touch the filesystem after
/// construction.
#[derive(Debug)]
pub struct FileStore {
    /// Path of the backing file.
    path: PathBuf,
    /// In-memory view of the persisted map.
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open a store backed by the given file, creating parent directories
    /// as needed. A missing file is an empty store; an unreadable or
    /// corrupt file is treated as empty and overwritten on the next write.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let entries = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(map) => map,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Session store file is corrupt, starting empty");
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Serialize the map and atomically replace the backing file.
    fn persist(&self, entries: &BTreeMap<String, String>) -> AppResult<()> {
        let json = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let entries = self.entries.lock().expect("store lock poisoned");
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut entries = self.entries.lock().expect("store lock poisoned");
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let mut entries = self.entries.lock().expect("store lock poisoned");
        if entries.remove(key).is_some() {
            self.persist(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("session.json")).unwrap();

        assert_eq!(store.get("admin_token").unwrap(), None);
        store.set("admin_token", "tok-1").unwrap();
        assert_eq!(store.get("admin_token").unwrap(), Some("tok-1".to_string()));

        store.remove("admin_token").unwrap();
        assert_eq!(store.get("admin_token").unwrap(), None);
        // Removing again is a no-op.
        store.remove("admin_token").unwrap();
    }

    #[test]
    fn test_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        {
            let store = FileStore::open(&path).unwrap();
            store.set("admin_token", "tok-1").unwrap();
            store.set("admin_refresh_token", "ref-1").unwrap();
        }

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(
            reopened.get("admin_token").unwrap(),
            Some("tok-1".to_string())
        );
        assert_eq!(
            reopened.get("admin_refresh_token").unwrap(),
            Some("ref-1".to_string())
        );
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{not json").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("admin_token").unwrap(), None);

        store.set("admin_token", "tok-1").unwrap();
        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(
            reopened.get("admin_token").unwrap(),
            Some("tok-1".to_string())
        );
    }

    #[test]
    fn test_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/dir/session.json");
        let store = FileStore::open(&path).unwrap();
        store.set("k", "v").unwrap();
        assert!(path.exists());
    }
}
