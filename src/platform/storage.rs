//! File-backed preference storage
//!
//! Persists preference keys as a single JSON object (string keys to string
//! values) in one file. The file is read in full on every access; the store
//! holds one theme identifier, so there is nothing worth caching.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::prefs::traits::{PreferenceStorage, StorageError};

/// Preference store backed by a JSON file on local disk
///
/// A missing file reads as an empty store; the first write creates it.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Creates a store over the given file path
    ///
    /// The path is not touched until the first read or write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn load(&self) -> Result<HashMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(HashMap::new()),
            Err(err) => Err(err.into()),
        }
    }
}

impl PreferenceStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.load().unwrap_or_default();
        values.insert(key.to_string(), value.to_string());
        let contents = serde_json::to_string_pretty(&values)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}
