//! CLI command handlers
//!
//! Bridges clap argument parsing with the category store.

pub mod category;
pub mod entry;

pub use category::{handle_category_command, CategoryCommands};
pub use entry::{handle_entry_command, EntryCommands};
