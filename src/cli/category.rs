//! Category CLI commands
//!
//! Every mutating command saves the store before returning.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_category_details, format_category_list};
use crate::error::{CategoriesError, CategoriesResult};
use crate::models::SortOption;
use crate::storage::BlobStore;
use crate::store::DataStore;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories with their totals
    List,

    /// Create a new category
    Add {
        /// Category name (need not be unique)
        name: String,
    },

    /// Show a category's entries and totals
    Show {
        /// Category name or ID
        category: String,
        /// Sort entries by name, income, expense or date
        #[arg(short, long)]
        sort: Option<SortOption>,
    },

    /// Delete one or more categories
    Delete {
        /// Category names or IDs; repeat a name to reach later categories
        /// that share it
        #[arg(required = true)]
        categories: Vec<String>,
    },

    /// Move categories to a new position
    Move {
        /// Category names or IDs, moved together as one block; repeat a name
        /// to reach later categories that share it
        #[arg(required = true)]
        categories: Vec<String>,
        /// Position of the block once the moved categories are taken out
        #[arg(short, long)]
        to: usize,
    },
}

/// Handle a category command
pub fn handle_category_command<B: BlobStore>(
    store: &mut DataStore<B>,
    settings: &Settings,
    cmd: CategoryCommands,
) -> CategoriesResult<()> {
    match cmd {
        CategoryCommands::List => {
            print!("{}", format_category_list(store.categories(), settings));
        }

        CategoryCommands::Add { name } => {
            let id = store.add_category(name.as_str());
            store.save()?;

            println!("Created category: {}", name);
            println!("  ID: {}", id);
        }

        CategoryCommands::Show { category, sort } => {
            let cat = store
                .find_category(&category)
                .ok_or_else(|| CategoriesError::category_not_found(&category))?;

            let sort = sort.unwrap_or(settings.default_sort);
            print!("{}", format_category_details(cat, sort, settings));
        }

        CategoryCommands::Delete { categories } => {
            let positions = resolve_positions(store, &categories)?;
            let removed = store.remove_categories(&positions)?;
            store.save()?;

            for category in removed {
                println!("Deleted category: {}", category.name);
            }
        }

        CategoryCommands::Move { categories, to } => {
            let positions = resolve_positions(store, &categories)?;
            store.move_categories(&positions, to)?;
            store.save()?;

            println!("Moved {} category(ies) to position {}", positions.len(), to);
        }
    }

    Ok(())
}

/// Turn category names or IDs into list positions
///
/// Names match case-insensitively. A name given more than once picks the
/// next category with that name each time, so `Food Food` targets the first
/// two categories called "Food".
pub fn resolve_positions<B: BlobStore>(
    store: &DataStore<B>,
    identifiers: &[String],
) -> CategoriesResult<Vec<usize>> {
    let mut positions: Vec<usize> = Vec::with_capacity(identifiers.len());

    for identifier in identifiers {
        let name_lower = identifier.trim().to_lowercase();
        let position = store
            .categories()
            .enumerate()
            .filter(|(i, _)| !positions.contains(i))
            .find(|(_, c)| c.name.to_lowercase() == name_lower)
            .or_else(|| {
                store
                    .categories()
                    .enumerate()
                    .find(|(_, c)| c.id.matches(identifier))
            })
            .map(|(i, _)| i)
            .ok_or_else(|| CategoriesError::category_not_found(identifier))?;

        positions.push(position);
    }

    Ok(positions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBlobStore;

    fn store() -> DataStore<MemoryBlobStore> {
        let mut store = DataStore::new(MemoryBlobStore::new());
        for name in ["A", "B", "C", "D"] {
            store.add_category(name);
        }
        store
    }

    fn names(store: &DataStore<MemoryBlobStore>) -> Vec<String> {
        store.categories().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn test_resolve_positions() {
        let store = store();
        let positions = resolve_positions(&store, &["c".into(), "A".into()]).unwrap();
        assert_eq!(positions, vec![2, 0]);

        let err = resolve_positions(&store, &["Z".into()]).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_resolve_repeated_name_takes_successive_matches() {
        let mut store = DataStore::new(MemoryBlobStore::new());
        for name in ["Food", "Rent", "food", "Food"] {
            store.add_category(name);
        }

        let positions =
            resolve_positions(&store, &["Food".into(), "Food".into(), "FOOD".into()]).unwrap();
        assert_eq!(positions, vec![0, 2, 3]);

        let err = resolve_positions(&store, &["Rent".into(), "Rent".into()]).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_delete_duplicate_names() {
        let mut store = DataStore::new(MemoryBlobStore::new());
        for name in ["Food", "Rent", "Food"] {
            store.add_category(name);
        }

        handle_category_command(
            &mut store,
            &Settings::default(),
            CategoryCommands::Delete {
                categories: vec!["Food".into(), "Food".into()],
            },
        )
        .unwrap();

        assert_eq!(names(&store), ["Rent"]);
    }

    #[test]
    fn test_add_saves() {
        let mut store = store();
        handle_category_command(
            &mut store,
            &Settings::default(),
            CategoryCommands::Add { name: "E".into() },
        )
        .unwrap();

        assert!(!store.is_dirty());
        let reloaded = DataStore::open(store.backend().clone());
        assert_eq!(reloaded.len(), 5);
    }

    #[test]
    fn test_move_command() {
        let mut store = store();
        handle_category_command(
            &mut store,
            &Settings::default(),
            CategoryCommands::Move {
                categories: vec!["A".into()],
                to: 2,
            },
        )
        .unwrap();

        assert_eq!(names(&store), ["B", "C", "A", "D"]);
    }

    #[test]
    fn test_delete_command() {
        let mut store = store();
        handle_category_command(
            &mut store,
            &Settings::default(),
            CategoryCommands::Delete {
                categories: vec!["B".into(), "D".into()],
            },
        )
        .unwrap();

        assert_eq!(names(&store), ["A", "C"]);
    }

    #[test]
    fn test_show_unknown_category() {
        let mut store = store();
        let err = handle_category_command(
            &mut store,
            &Settings::default(),
            CategoryCommands::Show {
                category: "Nope".into(),
                sort: None,
            },
        )
        .unwrap_err();
        assert!(err.is_not_found());
    }
}
