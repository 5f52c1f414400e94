//! Entry model
//!
//! An entry is one dated income/expense record inside a category. Entries are
//! never edited after creation, only removed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::EntryId;
use super::money::Money;
use crate::error::{CategoriesError, CategoriesResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub name: String,
    pub income: Money,
    pub expense: Money,
    pub date: NaiveDate,
}

impl Entry {
    /// Create a new entry with a fresh id
    pub fn new(name: impl Into<String>, income: Money, expense: Money, date: NaiveDate) -> Self {
        Self {
            id: EntryId::new(),
            name: name.into(),
            income,
            expense,
            date,
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Raw "add entry" form input, before the amounts are parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub name: String,
    pub income: String,
    pub expense: String,
    pub date: NaiveDate,
}

impl EntryDraft {
    /// Capture raw form text; nothing is parsed until [`EntryDraft::parse`]
    pub fn new(
        name: impl Into<String>,
        income: impl Into<String>,
        expense: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            income: income.into(),
            expense: expense.into(),
            date,
        }
    }

    /// Turn the draft into an entry
    ///
    /// Fails with [`CategoriesError::InvalidAmount`] if either amount does not
    /// parse. The draft is left as-is so the form can keep its fields.
    pub fn parse(&self) -> CategoriesResult<Entry> {
        let income = parse_amount("income", &self.income)?;
        let expense = parse_amount("expense", &self.expense)?;
        Ok(Entry::new(self.name.clone(), income, expense, self.date))
    }
}

fn parse_amount(field: &'static str, input: &str) -> CategoriesResult<Money> {
    Money::parse(input).map_err(|_| CategoriesError::InvalidAmount {
        field,
        input: input.to_string(),
    })
}
