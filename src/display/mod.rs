//! Display formatting for terminal output

pub mod category;
pub mod entry;

pub use category::{format_category_details, format_category_list, format_totals};
pub use entry::{format_entry_register, format_entry_row};
