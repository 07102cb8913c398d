//! The blob store trait and its backends.
//!
//! A blob store maps string keys to whole serialized values. Reads
//! return the entire blob or nothing; writes replace the entire blob in
//! a single synchronous operation. The engine's load-mutate-save cycle
//! relies on that whole-value replacement for its de-facto atomicity.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use crate::error::StorageError;

// ---------------------------------------------------------------------------
// BlobStore
// ---------------------------------------------------------------------------

/// Whole-value key/value persistence for serialized state blobs.
pub trait BlobStore {
    /// Read the blob stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend read fails for any
    /// reason other than the key being absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the blob stored under `key` in one synchronous write.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend write fails.
    fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: BlobStore + ?Sized> BlobStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).put(key, value)
    }
}

// ---------------------------------------------------------------------------
// FileStore
// ---------------------------------------------------------------------------

/// Filesystem-backed blob store: one `<key>.json` file per key under a
/// data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `data_dir`, creating the directory if
    /// it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the directory cannot be created.
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;
        debug!(dir = %data_dir.display(), "Blob store initialized");
        Ok(Self { data_dir })
    }

    /// The directory this store reads and writes under.
    pub fn data_dir(&self) -> &std::path::Path {
        &self.data_dir
    }

    /// Map a key to its backing file, rejecting keys that cannot form
    /// a plain file name (path separators would escape the data dir).
    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let plain = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !plain {
            return Err(StorageError::InvalidKey(String::from(key)));
        }
        Ok(self.data_dir.join(format!("{key}.json")))
    }
}

impl BlobStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Io(err)),
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::write(&path, value)?;
        debug!(key, bytes = value.len(), "Blob written");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// In-memory blob store for tests and ephemeral sessions.
///
/// Uses interior mutability so it satisfies the same `&self` contract
/// as the filesystem backend. Not `Sync`; the engine is
/// single-threaded by design.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    pub const fn new() -> Self {
        Self {
            entries: RefCell::new(BTreeMap::new()),
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns `true` if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl BlobStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(String::from(key), String::from(value));
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
