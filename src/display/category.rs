//! Category display formatting
//!
//! Formats the category list and a single category's detail view.

use crate::config::Settings;
use crate::models::{Category, CategoryTotals, SortOption};

use super::entry::format_entry_register;

/// Format all categories, in user order, with their totals
pub fn format_category_list<'a, I>(categories: I, settings: &Settings) -> String
where
    I: IntoIterator<Item = &'a Category>,
{
    let categories: Vec<&Category> = categories.into_iter().collect();
    if categories.is_empty() {
        return "No categories found.\n\nRun 'categories category add <name>' to create one.\n"
            .to_string();
    }

    let symbol = settings.currency_symbol.as_str();
    let name_width = categories
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>3}  {:<width$}  {:>7}  {:>12}  {:>12}  {:>12}  {}\n",
        "#",
        "Category",
        "Entries",
        "Income",
        "Expense",
        "Profit",
        "ID",
        width = name_width
    ));
    output.push_str(&format!(
        "{:->3}  {:-<width$}  {:->7}  {:->12}  {:->12}  {:->12}  {:-<12}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        width = name_width
    ));

    for (position, category) in categories.iter().enumerate() {
        let totals = category.totals();
        output.push_str(&format!(
            "{:>3}  {:<width$}  {:>7}  {:>12}  {:>12}  {:>12}  {}\n",
            position,
            category.name,
            category.entries.len(),
            totals.income.format_with_symbol(symbol),
            totals.expense.format_with_symbol(symbol),
            totals.profit.format_with_symbol(symbol),
            category.id,
            width = name_width
        ));
    }

    output
}

/// Format one category: header, sorted entries, then totals
pub fn format_category_details(
    category: &Category,
    sort: SortOption,
    settings: &Settings,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Category: {}\n", category.name));
    output.push_str(&format!("  ID:      {}\n", category.id));
    output.push_str(&format!("  Entries: {}\n", category.entries.len()));
    output.push_str(&format!("  Sort:    {}\n", sort));
    output.push('\n');

    output.push_str(&format_entry_register(
        &category.sorted_entries(sort),
        settings,
    ));
    output.push('\n');
    output.push_str(&format_totals(&category.totals(), settings));

    output
}

/// Format the income/expense/profit footer
pub fn format_totals(totals: &CategoryTotals, settings: &Settings) -> String {
    let symbol = settings.currency_symbol.as_str();
    format!(
        "Total Income:  {:>12}\nTotal Expense: {:>12}\nTotal Profit:  {:>12}\n",
        totals.income.format_with_symbol(symbol),
        totals.expense.format_with_symbol(symbol),
        totals.profit.format_with_symbol(symbol),
    )
}
