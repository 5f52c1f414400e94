//! Error types for the categories store
//!
//! Every fallible store operation returns [`CategoriesResult`]. Save and load
//! failures carry a typed reason so the caller can decide whether to log,
//! retry, or tell the user.

use thiserror::Error;

/// The main error type for category store operations
#[derive(Error, Debug)]
pub enum CategoriesError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors outside the blob store
    #[error("I/O error: {0}")]
    Io(String),

    /// The category list could not be serialized on save
    #[error("Failed to encode categories: {0}")]
    Encode(String),

    /// The persisted blob could not be decoded on load
    #[error("Failed to decode categories: {0}")]
    Decode(String),

    /// Income or expense text that does not parse as an amount
    #[error("Invalid {field} amount: '{input}'")]
    InvalidAmount { field: &'static str, input: String },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A position that does not exist in the list being edited
    #[error("Position {index} is out of bounds for {len} item(s)")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Blob backend errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CategoriesError {
    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for entries
    pub fn entry_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Entry",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error came from rejected user input
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidAmount { .. })
    }
}

/// Result type alias for category store operations
pub type CategoriesResult<T> = Result<T, CategoriesError>;
