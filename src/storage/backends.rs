//! Key-value store implementations
//!
//! `FileStore` keeps one JSON file per key, `MemoryStore` keeps blobs in a
//! map, and `NullStore` stands in where there is no durable storage at all.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{TrackerError, TrackerResult};

use super::file_io::{read_string, remove_file, write_atomic};
use super::KeyValueStore;

/// Stores each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a file store rooted at a directory (created on first write)
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Directory holding the key files
    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    /// Path of the file backing a key
    pub fn path_for(&self, key: &str) -> TrackerResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(TrackerError::Storage(format!("Invalid storage key: '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> TrackerResult<Option<String>> {
        read_string(self.path_for(key)?)
    }

    fn write(&self, key: &str, value: &str) -> TrackerResult<()> {
        write_atomic(self.path_for(key)?, value)
    }

    fn remove(&self, key: &str) -> TrackerResult<()> {
        remove_file(self.path_for(key)?)
    }
}

/// In-process store
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with blobs
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            blobs: RwLock::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> TrackerResult<Option<String>> {
        let blobs = self
            .blobs
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(blobs.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> TrackerResult<()> {
        let mut blobs = self
            .blobs
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> TrackerResult<()> {
        let mut blobs = self
            .blobs
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        blobs.remove(key);
        Ok(())
    }
}

/// Store that remembers nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStore;

impl KeyValueStore for NullStore {
    fn read(&self, _key: &str) -> TrackerResult<Option<String>> {
        Ok(None)
    }

    fn write(&self, _key: &str, _value: &str) -> TrackerResult<()> {
        Ok(())
    }

    fn remove(&self, _key: &str) -> TrackerResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("data"));

        assert_eq!(store.read("expenses").unwrap(), None);

        store.write("expenses", "[]").unwrap();
        assert!(temp_dir.path().join("data").join("expenses.json").exists());
        assert_eq!(store.read("expenses").unwrap().as_deref(), Some("[]"));

        store.remove("expenses").unwrap();
        assert_eq!(store.read("expenses").unwrap(), None);
    }

    #[test]
    fn test_file_store_rejects_path_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf());

        assert!(store.write("../escape", "{}").is_err());
        assert!(store.read("").is_err());
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::with_entries([("alerts", "{}")]);
        assert_eq!(store.read("alerts").unwrap().as_deref(), Some("{}"));

        store.write("alerts", r#"{"Food":true}"#).unwrap();
        assert_eq!(
            store.read("alerts").unwrap().as_deref(),
            Some(r#"{"Food":true}"#)
        );

        store.remove("alerts").unwrap();
        assert_eq!(store.read("alerts").unwrap(), None);
    }

    #[test]
    fn test_null_store_forgets() {
        let store = NullStore;
        store.write("budgets", "[]").unwrap();
        assert_eq!(store.read("budgets").unwrap(), None);
    }
}
