//! Key-value blob stores backing the category store
//!
//! The category list is written as one blob under one key. Backends only move
//! bytes; encoding lives in the store.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use super::file_io::{read_bytes, write_atomic};
use crate::error::CategoriesError;

/// A place to put whole blobs by key
pub trait BlobStore {
    /// Read the blob under `key`, or `None` if nothing was ever written
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CategoriesError>;

    /// Replace the blob under `key`. Readers see the old or the new value,
    /// never a mix.
    fn set(&self, key: &str, bytes: &[u8]) -> Result<(), CategoriesError>;
}

/// Stores each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    /// Create a store rooted at `dir`; the directory is not created here
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File that holds the blob for `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CategoriesError> {
        read_bytes(self.path_for(key))
    }

    fn set(&self, key: &str, bytes: &[u8]) -> Result<(), CategoriesError> {
        write_atomic(self.path_for(key), bytes)
    }
}

/// In-memory blob store; clones share the same map
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryBlobStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.blobs.read().map(|b| b.len()).unwrap_or(0)
    }

    /// True if nothing has been stored yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CategoriesError> {
        let blobs = self
            .blobs
            .read()
            .map_err(|e| CategoriesError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(blobs.get(key).cloned())
    }

    fn set(&self, key: &str, bytes: &[u8]) -> Result<(), CategoriesError> {
        let mut blobs = self
            .blobs
            .write()
            .map_err(|e| CategoriesError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        blobs.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}

impl<B: BlobStore + ?Sized> BlobStore for &B {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CategoriesError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, bytes: &[u8]) -> Result<(), CategoriesError> {
        (**self).set(key, bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_missing_key() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileBlobStore::new(temp_dir.path());
        assert!(store.get("categories").unwrap().is_none());
    }

    #[test]
    fn test_file_store_set_get() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileBlobStore::new(temp_dir.path());

        store.set("categories", b"[]").unwrap();

        assert!(temp_dir.path().join("categories.json").exists());
        assert_eq!(store.get("categories").unwrap().unwrap(), b"[]");
    }

    #[test]
    fn test_memory_store_clones_share_data() {
        let store = MemoryBlobStore::new();
        let other = store.clone();

        store.set("categories", b"[]").unwrap();

        assert_eq!(other.get("categories").unwrap().unwrap(), b"[]");
        assert_eq!(other.len(), 1);
        assert!(other.get("missing").unwrap().is_none());
    }

    #[test]
    fn test_reference_is_a_blob_store() {
        fn write_through<B: BlobStore>(backend: B) {
            backend.set("k", b"v").unwrap();
        }

        let store = MemoryBlobStore::new();
        write_through(&store);
        assert_eq!(store.get("k").unwrap().unwrap(), b"v");
    }
}
