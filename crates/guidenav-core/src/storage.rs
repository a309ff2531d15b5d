//! Key/value backends for reader preferences.
//!
//! The preference layer never talks to a concrete store; it receives a
//! [`KeyValueStore`] handle at construction. Backends:
//! - [`MemoryStore`]: in-process map, optionally with a byte quota
//! - [`RedbStore`]: ACID file-backed store (redb)
//! - [`DisabledStore`]: storage switched off; every call fails

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::StorageError;

mod redb_store;

pub use redb_store::RedbStore;

/// String key/value persistence, shared across threads
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// All entries whose key starts with `prefix`, in key order
    fn scan_prefix(&self, prefix: &str) -> Result<Vec<(String, String)>, StorageError>;
}

/// Shared handle to a backend
pub type SharedStore = Arc<dyn KeyValueStore>;

/// In-memory backend
///
/// With a quota, a write that would grow the stored bytes past the limit
/// fails with [`StorageError::QuotaExceeded`], like a full browser store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
            quota_bytes: Some(quota_bytes),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    fn used_bytes(entries: &BTreeMap<String, String>) -> usize {
        entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write();
        if let Some(quota) = self.quota_bytes {
            let current = Self::used_bytes(&entries);
            let replaced = entries.get(key).map(|v| key.len() + v.len()).unwrap_or(0);
            if current - replaced + key.len() + value.len() > quota {
                return Err(StorageError::QuotaExceeded);
            }
        }
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn scan_prefix(&self, prefix: &str) -> Result<Vec<(String, String)>, StorageError> {
        Ok(self
            .entries
            .read()
            .range(prefix.to_string()..)
            .take_while(|(k, _)| k.starts_with(prefix))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }
}

/// Backend for environments where persistence is switched off
#[derive(Debug, Clone, Default)]
pub struct DisabledStore;

impl KeyValueStore for DisabledStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("storage disabled".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("storage disabled".to_string()))
    }

    fn scan_prefix(&self, _prefix: &str) -> Result<Vec<(String, String)>, StorageError> {
        Err(StorageError::Unavailable("storage disabled".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.get("k").unwrap().is_none());
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        store.set("k", "w").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("w"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_store_quota() {
        let store = MemoryStore::with_quota(10);
        store.set("ab", "cdef").unwrap();
        // overwrite within quota
        store.set("ab", "cdefgh").unwrap();
        assert_eq!(store.set("xyz", "12345"), Err(StorageError::QuotaExceeded));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_store_scan_prefix() {
        let store = MemoryStore::new();
        store.set("p:a", "1").unwrap();
        store.set("p:b", "2").unwrap();
        store.set("q:a", "3").unwrap();
        let found = store.scan_prefix("p:").unwrap();
        assert_eq!(
            found,
            vec![
                ("p:a".to_string(), "1".to_string()),
                ("p:b".to_string(), "2".to_string())
            ]
        );
    }

    #[test]
    fn test_disabled_store_fails_everything() {
        let store = DisabledStore;
        assert!(matches!(store.get("k"), Err(StorageError::Unavailable(_))));
        assert!(matches!(store.set("k", "v"), Err(StorageError::Unavailable(_))));
        assert!(store.scan_prefix("").is_err());
    }
}
