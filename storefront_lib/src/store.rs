//! Persisted client-side state: the local-storage analog.
//!
//! Two entries exist today, the cart identifier and the bearer token. There
//! is no schema versioning; values are plain strings.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use dashmap::DashMap;

/// Key under which the active cart identifier is stored.
pub const CART_ID_KEY: &str = "cart_id";
/// Key under which the bearer token is stored.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Durable string key-value state. Read and written only by sessions.
pub trait StateStore {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
    /// Inserts or overwrites an entry.
    fn set(&self, key: &str, value: &str);
    /// Removes an entry. Removing a missing key is a no-op.
    fn remove(&self, key: &str);
}

impl<T: StateStore + ?Sized> StateStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

/// In-memory store for tests and throwaway sessions.
#[derive(Default)]
pub struct MemoryStore {
    entries: DashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.remove(key);
    }
}

/// Store backed by a JSON object on disk, written through on every mutation.
///
/// A corrupt state file is discarded with a warning rather than failing the
/// session. A write failure keeps the in-memory view and logs the error; the
/// next mutation retries the write.
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl FileStore {
    /// Opens the store at `path`, loading any existing entries.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(
                    "state file {} is corrupt, starting fresh: {}",
                    path.display(),
                    e
                );
                BTreeMap::new()
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e),
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    fn persist(&self, entries: &BTreeMap<String, String>) {
        match serde_json::to_string_pretty(entries) {
            Ok(raw) => {
                if let Err(e) = fs::write(&self.path, raw) {
                    tracing::error!("failed to write state file {}: {}", self.path.display(), e);
                }
            }
            Err(e) => tracing::error!("failed to serialize state: {}", e),
        }
    }
}

impl StateStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.remove(key);
        self.persist(&entries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_set_and_get() {
        let store = MemoryStore::new();
        store.set(CART_ID_KEY, "c-1");
        assert_eq!(store.get(CART_ID_KEY), Some("c-1".to_string()));
    }

    #[test]
    fn memory_miss() {
        let store = MemoryStore::new();
        assert_eq!(store.get("nonexistent"), None);
    }

    #[test]
    fn memory_overwrite() {
        let store = MemoryStore::new();
        store.set(CART_ID_KEY, "old");
        store.set(CART_ID_KEY, "new");
        assert_eq!(store.get(CART_ID_KEY), Some("new".to_string()));
    }

    #[test]
    fn memory_remove() {
        let store = MemoryStore::new();
        store.set(AUTH_TOKEN_KEY, "tok");
        store.remove(AUTH_TOKEN_KEY);
        assert_eq!(store.get(AUTH_TOKEN_KEY), None);
    }

    #[test]
    fn file_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let store = FileStore::open(&path).unwrap();
        store.set(CART_ID_KEY, "c-42");
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get(CART_ID_KEY), Some("c-42".to_string()));
    }

    #[test]
    fn file_store_remove_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let store = FileStore::open(&path).unwrap();
        store.set(CART_ID_KEY, "c-42");
        store.remove(CART_ID_KEY);
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get(CART_ID_KEY), None);
    }

    #[test]
    fn file_store_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deep").join("state.json");

        let store = FileStore::open(&path).unwrap();
        store.set(AUTH_TOKEN_KEY, "tok");
        assert!(path.exists());
    }

    #[test]
    fn corrupt_state_file_starts_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "{definitely not json").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get(CART_ID_KEY), None);
    }
}
