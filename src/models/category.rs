//! Category model
//!
//! A category is a named group of entries. Entries are kept in the order they
//! were added; display ordering goes through [`Category::sorted_entries`],
//! which never touches the stored list.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;

use super::entry::Entry;
use super::ids::{CategoryId, EntryId};
use super::money::Money;
use super::sort::SortOption;
use crate::error::{CategoriesError, CategoriesResult};
use crate::reorder;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

/// Income, expense and profit for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryTotals {
    pub income: Money,
    pub expense: Money,
    pub profit: Money,
}

impl Category {
    /// Create an empty category. The name is taken as-is.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Sum of income over every entry
    pub fn total_income(&self) -> Money {
        self.entries.iter().map(|e| e.income).sum()
    }

    /// Sum of expense over every entry
    pub fn total_expense(&self) -> Money {
        self.entries.iter().map(|e| e.expense).sum()
    }

    /// Total income minus total expense; negative when spending wins
    pub fn total_profit(&self) -> Money {
        self.total_income() - self.total_expense()
    }

    /// All three totals in one pass over the entries
    pub fn totals(&self) -> CategoryTotals {
        let income = self.total_income();
        let expense = self.total_expense();
        CategoryTotals {
            income,
            expense,
            profit: income - expense,
        }
    }

    /// Entries in display order. Ties keep insertion order.
    pub fn sorted_entries(&self, option: SortOption) -> Vec<&Entry> {
        let mut sorted: Vec<&Entry> = self.entries.iter().collect();
        match option {
            SortOption::Name => sorted.sort_by(|a, b| a.name.cmp(&b.name)),
            SortOption::Income => sorted.sort_by_key(|e| Reverse(e.income)),
            SortOption::Expense => sorted.sort_by_key(|e| Reverse(e.expense)),
            SortOption::Date => sorted.sort_by_key(|e| Reverse(e.date)),
        }
        sorted
    }

    /// Get an entry by id
    pub fn entry(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Find an entry by full or short id
    pub fn find_entry(&self, identifier: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id.matches(identifier))
    }

    /// Append an entry at the end of the stored order
    pub fn add_entry(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Remove entries by their stored position
    pub fn remove_entries(&mut self, positions: &[usize]) -> CategoriesResult<Vec<Entry>> {
        reorder::remove_positions(&mut self.entries, positions)
    }

    /// Remove entries by id; every id must belong to this category
    pub fn remove_entries_by_id(&mut self, ids: &[EntryId]) -> CategoriesResult<Vec<Entry>> {
        let positions = ids
            .iter()
            .map(|id| {
                self.entries
                    .iter()
                    .position(|e| e.id == *id)
                    .ok_or_else(|| CategoriesError::entry_not_found(id.to_string()))
            })
            .collect::<CategoriesResult<Vec<usize>>>()?;

        self.remove_entries(&positions)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
