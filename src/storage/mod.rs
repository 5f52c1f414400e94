//! Storage layer
//!
//! Blob backends (file and in-memory) plus the atomic file writes the file
//! backend is built on.

pub mod blob;
pub mod file_io;

pub use blob::{BlobStore, FileBlobStore, MemoryBlobStore};
pub use file_io::{read_bytes, write_atomic};
