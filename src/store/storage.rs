//! Key/value document storage backends.
//!
//! The ledger is persisted as one JSON document under a single key. The
//! [`DocumentStorage`] trait abstracts where that document lives.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{LedgerError, LedgerResult};

/// A place the ledger document can be read from and written to.
pub trait DocumentStorage {
    /// Reads the document stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::StorageError`] if the backend fails. A missing
    /// document is `Ok(None)`, not an error.
    fn read(&self, key: &str) -> LedgerResult<Option<String>>;

    /// Replaces the document stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::StorageError`] if the backend fails.
    fn write(&mut self, key: &str, contents: &str) -> LedgerResult<()>;
}

/// Stores each document as `<directory>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    directory: PathBuf,
}

impl FileStorage {
    /// Creates storage rooted at `directory`. The directory is created on
    /// the first write.
    pub fn new<P: AsRef<Path>>(directory: P) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    /// The file a key is stored in.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.directory.join(format!("{}.json", key))
    }

    fn storage_error(key: &str, error: std::io::Error) -> LedgerError {
        LedgerError::StorageError {
            key: key.to_string(),
            message: error.to_string(),
        }
    }
}

impl DocumentStorage for FileStorage {
    fn read(&self, key: &str) -> LedgerResult<Option<String>> {
        let path = self.path_for(key);
        debug!(path = %path.display(), "reading ledger document");

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Self::storage_error(key, e)),
        }
    }

    fn write(&mut self, key: &str, contents: &str) -> LedgerResult<()> {
        let path = self.path_for(key);
        let staging = self.directory.join(format!("{}.json.tmp", key));
        debug!(path = %path.display(), bytes = contents.len(), "writing ledger document");

        fs::create_dir_all(&self.directory).map_err(|e| Self::storage_error(key, e))?;

        // Write then rename so a crash never leaves a half-written document.
        fs::write(&staging, contents)
            .and_then(|()| fs::rename(&staging, &path))
            .map_err(|e| {
                if let Err(cleanup) = fs::remove_file(&staging) {
                    debug!(path = %staging.display(), error = %cleanup, "staging file not removed");
                }
                Self::storage_error(key, e)
            })
    }
}

/// Keeps documents in memory. Used for tests and throwaway ledgers.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    documents: HashMap<String, String>,
}

impl MemoryStorage {
    /// Creates empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage already holding `contents` under `key`.
    pub fn with_document(key: &str, contents: &str) -> Self {
        let mut storage = Self::new();
        storage
            .documents
            .insert(key.to_string(), contents.to_string());
        storage
    }

    /// The raw document under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.documents.get(key).map(String::as_str)
    }
}

impl DocumentStorage for MemoryStorage {
    fn read(&self, key: &str) -> LedgerResult<Option<String>> {
        Ok(self.documents.get(key).cloned())
    }

    fn write(&mut self, key: &str, contents: &str) -> LedgerResult<()> {
        self.documents.insert(key.to_string(), contents.to_string());
        Ok(())
    }
}
