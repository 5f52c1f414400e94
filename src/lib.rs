//! Categories - personal-finance categorization
//!
//! Users create named categories, attach dated income/expense entries to each
//! one, and view per-category totals. All state lives in one [`DataStore`],
//! which is persisted as a single JSON blob through a [`BlobStore`] backend.
//!
//! # Architecture
//!
//! - `config`: Path resolution and user settings
//! - `error`: Error types
//! - `models`: Categories, entries, ids and money
//! - `storage`: Blob backends (file and in-memory)
//! - `store`: The category store with its mutation and save/load operations
//! - `display` / `cli`: Terminal presentation on top of the store
//!
//! # Example
//!
//! ```rust
//! use categories::models::{Entry, Money};
//! use categories::storage::MemoryBlobStore;
//! use categories::store::DataStore;
//! use chrono::NaiveDate;
//!
//! let backend = MemoryBlobStore::new();
//! let mut store = DataStore::open(backend.clone());
//!
//! let groceries = store.add_category("Groceries");
//! let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! store
//!     .add_entry(groceries, Entry::new("Milk", Money::zero(), Money::from_cents(350), date))
//!     .unwrap();
//! store.save().unwrap();
//!
//! let reloaded = DataStore::open(backend);
//! assert_eq!(reloaded.category(groceries).unwrap().total_expense().cents(), 350);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reorder;
pub mod storage;
pub mod store;

pub use error::{CategoriesError, CategoriesResult};
pub use storage::BlobStore;
pub use store::{DataStore, LoadStatus, STORAGE_KEY};
