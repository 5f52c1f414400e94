//! Entry display formatting

use std::fmt::Write;

use chrono::NaiveDate;

use crate::config::Settings;
use crate::models::Entry;

/// Format a single entry as a register row
pub fn format_entry_row(entry: &Entry, settings: &Settings) -> String {
    let symbol = settings.currency_symbol.as_str();
    format!(
        "{:10} {:24} {:>12} {:>12}  {}",
        format_date(entry.date, &settings.date_format),
        truncate(&entry.name, 24),
        entry.income.format_with_symbol(symbol),
        entry.expense.format_with_symbol(symbol),
        entry.id
    )
}

/// Format entries (already in display order) as a register
pub fn format_entry_register(entries: &[&Entry], settings: &Settings) -> String {
    if entries.is_empty() {
        return "No entries yet.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:24} {:>12} {:>12}  {}\n",
        "Date", "Name", "Income", "Expense", "ID"
    ));
    output.push_str(&"-".repeat(76));
    output.push('\n');

    for entry in entries {
        output.push_str(&format_entry_row(entry, settings));
        output.push('\n');
    }

    output
}

/// Format a date with a user-supplied strftime pattern, falling back to ISO
/// when the pattern is invalid
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_err() {
        return date.format("%Y-%m-%d").to_string();
    }
    out
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn milk() -> Entry {
        Entry::new(
            "Milk",
            Money::zero(),
            Money::from_cents(350),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_format_row() {
        let entry = milk();
        let row = format_entry_row(&entry, &Settings::default());

        assert!(row.starts_with("2024-01-01 Milk"));
        assert!(row.contains("$0.00"));
        assert!(row.contains("$3.50"));
        assert!(row.ends_with(&entry.id.to_string()));
    }

    #[test]
    fn test_row_uses_date_format() {
        let settings = Settings {
            date_format: "%d/%m/%Y".into(),
            ..Settings::default()
        };
        let row = format_entry_row(&milk(), &settings);
        assert!(row.starts_with("01/01/2024"));
    }

    #[test]
    fn test_invalid_date_format_falls_back() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(format_date(date, "%Q"), "2024-01-01");
    }

    #[test]
    fn test_empty_register() {
        assert_eq!(format_entry_register(&[], &Settings::default()), "No entries yet.\n");
    }

    #[test]
    fn test_register_lists_every_entry() {
        let a = milk();
        let b = milk();
        let output = format_entry_register(&[&a, &b], &Settings::default());
        assert_eq!(output.lines().count(), 4);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long entry name", 10), "a very lo…");
    }
}
