//! File-backed key-value store.
//!
//! The CLI's stand-in for the browser-local storage of the original: each
//! key maps to one JSON file under a data directory. Reads of a key that
//! was never written yield `None`; writes replace the whole file.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use favorites_core::{KeyValueStore, StorageError};
use tracing::debug;

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;

/// A key-value store keeping one file per key under a root directory.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at the given directory.
    ///
    /// The directory does not have to exist yet; it is created on the
    /// first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        debug!(path = ?path, "Reading stored value");

        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read(format!(
                "Failed to read {:?}: {}",
                path, e
            ))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        debug!(path = ?path, "Writing stored value");

        fs::create_dir_all(&self.root).map_err(|e| {
            StorageError::Write(format!("Failed to create {:?}: {}", self.root, e))
        })?;
        fs::write(&path, value)
            .map_err(|e| StorageError::Write(format!("Failed to write {:?}: {}", path, e)))
    }
}
