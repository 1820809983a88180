//! The persistence boundary for the favorites collection.
//!
//! The collection treats storage as an opaque key-value interface addressed
//! by a single fixed key. Production code backs it with a file on disk; the
//! [`InMemoryStore`] in this module is the deterministic substitute used in
//! tests.

use std::collections::HashMap;
use std::sync::Mutex;

#[cfg(test)]
#[path = "storage_tests.rs"]
mod tests;

/// Errors that can occur at the storage boundary.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The stored value could not be read.
    #[error("Failed to read from the store: {0}")]
    Read(String),

    /// The value could not be written.
    #[error("Failed to write to the store: {0}")]
    Write(String),
}

/// Trait for the key-value store backing the favorites collection.
///
/// Implementations hold no independent copy of the collection between
/// calls: the value is read once at construction of the collection and
/// rewritten in full on every mutation. Writes are last-writer-wins; no
/// transactional guarantees are provided.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if the key has
    /// never been written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

// Allows a store to be shared between an owner and observers (tests,
// multiple collections over one backend).
impl<T: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// A key-value store held entirely in memory.
///
/// Used as the test substitute for the file-backed store, per the
/// injected-persistence design of the collection.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let values = self
            .values
            .lock()
            .map_err(|_| StorageError::Read("store mutex poisoned".to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| StorageError::Write("store mutex poisoned".to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
