//! The pluggable key/value backend behind the store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::StorageError;

/// String key/value storage the tape store loads from and persists through.
///
/// Implementations must tolerate concurrent use: the persist queue calls
/// `set` from its worker thread while `get` runs wherever the store lives.
pub trait StorageBackend: Send + Sync {
    /// Read the payload stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the payload stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key` if present. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory backend used by tests and previews. Clones share one map, so
/// a test can hold a handle and inspect what the store wrote.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self.entries.read() {
            Ok(guard) => Ok(guard.get(key).cloned()),
            Err(poisoned) => {
                log::error!("MemoryBackend lock poisoned on read; recovering");
                Ok(poisoned.into_inner().get(key).cloned())
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self.entries.write() {
            Ok(mut guard) => {
                guard.insert(key.to_string(), value.to_string());
                Ok(())
            }
            Err(poisoned) => {
                log::error!("MemoryBackend lock poisoned on write; recovering");
                poisoned
                    .into_inner()
                    .insert(key.to_string(), value.to_string());
                Ok(())
            }
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match self.entries.write() {
            Ok(mut guard) => {
                guard.remove(key);
                Ok(())
            }
            Err(poisoned) => {
                log::error!("MemoryBackend lock poisoned on remove; recovering");
                poisoned.into_inner().remove(key);
                Ok(())
            }
        }
    }
}
