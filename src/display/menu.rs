//! Menu display formatting
//!
//! Formats the catalog for terminal output.

use crate::models::MenuItem;

/// Format menu items as a table
///
/// Callers pass the catalog's listed items, so placeholders never get here.
pub fn format_menu_list<'a, I>(items: I, currency_symbol: &str) -> String
where
    I: IntoIterator<Item = &'a MenuItem>,
{
    let items: Vec<&MenuItem> = items.into_iter().collect();

    if items.is_empty() {
        return "The menu is empty!".to_string();
    }

    // Calculate column widths
    let name_width = items
        .iter()
        .map(|item| item.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:<name_width$}  {:>10}  {}\n",
        "ID",
        "Name",
        "Price",
        "Description",
        name_width = name_width,
    ));

    output.push_str(&format!(
        "{:->4}  {:-<name_width$}  {:->10}  {:-<11}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for item in items {
        output.push_str(&format!(
            "{:>4}  {:<name_width$}  {:>10}  {}\n",
            item.id.to_string(),
            item.name,
            item.price.format_with_symbol(currency_symbol),
            item.description,
            name_width = name_width,
        ));
    }

    output
}

/// Format a single menu item's details
pub fn format_menu_item(item: &MenuItem, currency_symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("ID: {}\n", item.id));
    output.push_str(&format!("Name: {}\n", item.name));
    output.push_str(&format!("Description: {}\n", item.description));
    output.push_str(&format!(
        "Price: {}\n",
        item.price.format_with_symbol(currency_symbol)
    ));
    output
}
