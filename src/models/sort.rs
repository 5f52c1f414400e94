//! Display sort keys for a category's entries

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How to order entries for display
///
/// Name sorts ascending; income, expense and date sort largest/newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOption {
    #[default]
    Name,
    Income,
    Expense,
    Date,
}

impl SortOption {
    /// Every sort key, in menu order
    pub fn all() -> &'static [Self] {
        &[Self::Name, Self::Income, Self::Expense, Self::Date]
    }

    /// Lowercase key used on the command line and in settings
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Income => "income",
            Self::Expense => "expense",
            Self::Date => "date",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|option| option.as_str() == lower)
            .ok_or_else(|| {
                format!(
                    "unknown sort option '{}' (expected one of: name, income, expense, date)",
                    s
                )
            })
    }
}
