//! Entry CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_entry_row;
use crate::error::{CategoriesError, CategoriesResult};
use crate::models::{EntryDraft, EntryId};
use crate::storage::BlobStore;
use crate::store::DataStore;

/// Entry subcommands
#[derive(Subcommand)]
pub enum EntryCommands {
    /// Add an entry to a category
    Add {
        /// Category name or ID
        category: String,
        /// Entry name
        #[arg(short, long)]
        name: String,
        /// Income amount (e.g., "12" or "12.50")
        #[arg(short, long, allow_hyphen_values = true)]
        income: String,
        /// Expense amount (e.g., "3.5")
        #[arg(short, long, allow_hyphen_values = true)]
        expense: String,
        /// Entry date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Delete entries from a category
    Delete {
        /// Category name or ID
        category: String,
        /// Entry IDs (short `ent-…` form or full UUID)
        #[arg(required = true)]
        entries: Vec<String>,
    },
}

/// Handle an entry command
pub fn handle_entry_command<B: BlobStore>(
    store: &mut DataStore<B>,
    settings: &Settings,
    cmd: EntryCommands,
) -> CategoriesResult<()> {
    match cmd {
        EntryCommands::Add {
            category,
            name,
            income,
            expense,
            date,
        } => {
            let category_id = store
                .find_category(&category)
                .map(|c| c.id)
                .ok_or_else(|| CategoriesError::category_not_found(&category))?;

            let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
            let draft = EntryDraft::new(name, income, expense, date);
            let entry_id = store.submit_entry(category_id, &draft)?;
            store.save()?;

            if let Some(entry) = store
                .category(category_id)
                .and_then(|c| c.entry(entry_id))
            {
                println!("Added entry:");
                println!("  {}", format_entry_row(entry, settings));
            }
        }

        EntryCommands::Delete { category, entries } => {
            let cat = store
                .find_category(&category)
                .ok_or_else(|| CategoriesError::category_not_found(&category))?;
            let category_id = cat.id;

            let ids = entries
                .iter()
                .map(|identifier| {
                    cat.find_entry(identifier)
                        .map(|e| e.id)
                        .ok_or_else(|| CategoriesError::entry_not_found(identifier))
                })
                .collect::<CategoriesResult<Vec<EntryId>>>()?;

            let removed = store.remove_entries_by_id(category_id, &ids)?;
            store.save()?;

            for entry in removed {
                println!("Deleted entry: {} ({})", entry.name, entry.id);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBlobStore;

    fn store() -> DataStore<MemoryBlobStore> {
        let mut store = DataStore::new(MemoryBlobStore::new());
        store.add_category("Groceries");
        store.save().unwrap();
        store
    }

    fn add(name: &str, income: &str, expense: &str) -> EntryCommands {
        EntryCommands::Add {
            category: "groceries".into(),
            name: name.into(),
            income: income.into(),
            expense: expense.into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1),
        }
    }

    #[test]
    fn test_add_entry() {
        let mut store = store();
        handle_entry_command(&mut store, &Settings::default(), add("Milk", "0", "3.5")).unwrap();

        let category = store.category_at(0).unwrap();
        assert_eq!(category.entries.len(), 1);
        assert_eq!(category.entries[0].expense.cents(), 350);
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_add_entry_with_bad_amount() {
        let mut store = store();
        let err = handle_entry_command(&mut store, &Settings::default(), add("Milk", "x", "1"))
            .unwrap_err();

        assert!(err.is_validation());
        assert!(store.category_at(0).unwrap().entries.is_empty());
    }

    #[test]
    fn test_delete_entry_by_short_id() {
        let mut store = store();
        handle_entry_command(&mut store, &Settings::default(), add("Milk", "0", "3.5")).unwrap();
        handle_entry_command(&mut store, &Settings::default(), add("Milk", "0", "4")).unwrap();

        let first = store.category_at(0).unwrap().entries[0].id;
        handle_entry_command(
            &mut store,
            &Settings::default(),
            EntryCommands::Delete {
                category: "Groceries".into(),
                entries: vec![first.short()],
            },
        )
        .unwrap();

        let entries = &store.category_at(0).unwrap().entries;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].expense.cents(), 400);
    }

    #[test]
    fn test_delete_unknown_entry() {
        let mut store = store();
        let err = handle_entry_command(
            &mut store,
            &Settings::default(),
            EntryCommands::Delete {
                category: "Groceries".into(),
                entries: vec!["ent-00000000".into()],
            },
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }
}
