//! Storage layer for the expense tracker
//!
//! Persistence is a string-keyed blob store. The record store and the alert
//! tracker serialize their collections to JSON and hand the text to a
//! [`KeyValueStore`]; which backend sits behind it is decided when the
//! application is wired together.

pub mod backends;
pub mod file_io;

pub use backends::{FileStore, MemoryStore, NullStore};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{TrackerError, TrackerResult};

/// Key of the serialized expense collection
pub const EXPENSES_KEY: &str = "expenses";

/// Key of the serialized budget collection
pub const BUDGETS_KEY: &str = "budgets";

/// Key of the serialized alert-shown map
pub const ALERTS_KEY: &str = "alerts";

/// Durable string-keyed blob storage
pub trait KeyValueStore: Send + Sync {
    /// Read the blob stored under `key`, if any
    fn read(&self, key: &str) -> TrackerResult<Option<String>>;

    /// Replace the blob stored under `key`
    fn write(&self, key: &str, value: &str) -> TrackerResult<()>;

    /// Drop the blob stored under `key`; missing keys are not an error
    fn remove(&self, key: &str) -> TrackerResult<()>;
}

/// Load a JSON value from the store, falling back to the default
///
/// A missing key yields the default silently. A blob that fails to parse
/// yields the default together with a recoverable
/// [`TrackerError::Deserialization`]; a backend that fails to read yields the
/// default together with a [`TrackerError::Storage`].
pub fn load_json<T>(store: &dyn KeyValueStore, key: &str) -> (T, Option<TrackerError>)
where
    T: DeserializeOwned + Default,
{
    let raw = match store.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return (T::default(), None),
        Err(e) => {
            let warning = TrackerError::Storage(format!("Failed to read '{}': {}", key, e));
            return (T::default(), Some(warning));
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => (value, None),
        Err(e) => (T::default(), Some(TrackerError::deserialization(key, e))),
    }
}

/// Serialize a value and write it under `key`
///
/// Any failure is reported as [`TrackerError::PersistenceWrite`].
pub fn save_json<T>(store: &dyn KeyValueStore, key: &str, value: &T) -> TrackerResult<()>
where
    T: Serialize + ?Sized,
{
    let json =
        serde_json::to_string(value).map_err(|e| TrackerError::persistence_write(key, e))?;
    store
        .write(key, &json)
        .map_err(|e| TrackerError::persistence_write(key, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_load_missing_key_is_silent() {
        let store = MemoryStore::new();
        let (value, warning): (Vec<u32>, _) = load_json(&store, "numbers");
        assert!(value.is_empty());
        assert!(warning.is_none());
    }

    #[test]
    fn test_load_malformed_falls_back() {
        let store = MemoryStore::with_entries([("numbers", "{not json")]);
        let (value, warning): (Vec<u32>, _) = load_json(&store, "numbers");
        assert!(value.is_empty());

        let warning = warning.unwrap();
        assert!(warning.is_recoverable());
        assert!(matches!(
            warning,
            TrackerError::Deserialization { ref key, .. } if key == "numbers"
        ));
    }

    struct UnreadableStore;

    impl KeyValueStore for UnreadableStore {
        fn read(&self, _key: &str) -> TrackerResult<Option<String>> {
            Err(TrackerError::Io("permission denied".into()))
        }

        fn write(&self, _key: &str, _value: &str) -> TrackerResult<()> {
            Ok(())
        }

        fn remove(&self, _key: &str) -> TrackerResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_load_read_failure_is_storage_error() {
        let (value, warning): (Vec<u32>, _) = load_json(&UnreadableStore, "numbers");
        assert!(value.is_empty());

        let warning = warning.unwrap();
        assert!(matches!(warning, TrackerError::Storage(ref msg) if msg.contains("permission denied")));
        assert_eq!(
            warning.to_string(),
            "Storage error: Failed to read 'numbers': I/O error: permission denied"
        );
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::new();
        let mut map = BTreeMap::new();
        map.insert("Food".to_string(), true);

        save_json(&store, ALERTS_KEY, &map).unwrap();
        assert_eq!(
            store.read(ALERTS_KEY).unwrap().as_deref(),
            Some(r#"{"Food":true}"#)
        );

        let (loaded, warning): (BTreeMap<String, bool>, _) = load_json(&store, ALERTS_KEY);
        assert_eq!(loaded, map);
        assert!(warning.is_none());
    }
}
