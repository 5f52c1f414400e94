//! Core data models: categories, their entries, and the amounts they carry.

pub mod category;
pub mod entry;
pub mod ids;
pub mod money;
pub mod sort;

pub use category::{Category, CategoryTotals};
pub use entry::{Entry, EntryDraft};
pub use ids::{CategoryId, EntryId};
pub use money::{Money, MoneyParseError};
pub use sort::SortOption;
