//! Terminal views over item data.
//!
//! Everything here is pure: commands fetch data through the client and hand
//! it to these functions, which return the text to print.

use std::fmt::Write as _;

use inventory_core::ItemDto;

/// Shown when there is nothing to list and no search is active.
pub const EMPTY_LIST_MESSAGE: &str = "No items found.";

/// Shown when nothing matches an active search.
pub const NO_MATCHES_MESSAGE: &str = "No items found matching your search.";

/// Shown when a form is submitted with a blank field.
pub const BLANK_FIELDS_MESSAGE: &str = "Please enter both name and description";

/// Delete confirmation prompt.
pub const DELETE_PROMPT: &str = "Are you sure to delete this item?";

/// Items whose name or description contains `search`, ignoring case.
///
/// The term is used as typed, so surrounding spaces take part in the match.
/// An empty search matches everything.
#[must_use]
pub fn filter_items<'a>(items: &'a [ItemDto], search: &str) -> Vec<&'a ItemDto> {
    if search.is_empty() {
        return items.iter().collect();
    }
    let needle = search.to_lowercase();

    items
        .iter()
        .filter(|item| {
            item.name.to_lowercase().contains(&needle)
                || item.description.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Item table, with a result count when searching and a search-aware empty
/// state.
#[must_use]
pub fn render_item_list(items: &[ItemDto], search: Option<&str>) -> String {
    let search = search.unwrap_or_default();
    let shown = filter_items(items, search);

    if shown.is_empty() {
        return if search.is_empty() {
            EMPTY_LIST_MESSAGE.to_string()
        } else {
            NO_MATCHES_MESSAGE.to_string()
        };
    }

    let id_width = shown
        .iter()
        .map(|item| item.id.to_string().len())
        .max()
        .unwrap_or(1)
        .max("ID".len());
    let name_width = shown
        .iter()
        .map(|item| item.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("NAME".len());

    let mut out = String::new();
    if !search.is_empty() {
        let _ = writeln!(out, "Found {} of {} items\n", shown.len(), items.len());
    }
    let _ = writeln!(out, "{:<id_width$}  {:<name_width$}  DESCRIPTION", "ID", "NAME");
    for item in shown {
        let _ = writeln!(
            out,
            "{:<id_width$}  {:<name_width$}  {}",
            item.id, item.name, item.description
        );
    }
    out
}

/// Detail view of a single item.
#[must_use]
pub fn render_item(item: &ItemDto) -> String {
    format!(
        "Id:          {}\nName:        {}\nDescription: {}\n",
        item.id, item.name, item.description
    )
}

/// Check the add form: both fields must hold more than whitespace.
///
/// # Errors
///
/// Returns [`BLANK_FIELDS_MESSAGE`] if `name` or `description` is empty or
/// only whitespace.
pub fn validate_new_item(name: &str, description: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() || description.trim().is_empty() {
        return Err(BLANK_FIELDS_MESSAGE);
    }
    Ok(())
}

/// Check the edit form: both fields must be non-empty. Whitespace is kept.
///
/// # Errors
///
/// Returns [`BLANK_FIELDS_MESSAGE`] if `name` or `description` is empty.
pub fn validate_item_update(name: &str, description: &str) -> Result<(), &'static str> {
    if name.is_empty() || description.is_empty() {
        return Err(BLANK_FIELDS_MESSAGE);
    }
    Ok(())
}

/// Whether a confirmation answer means yes.
#[must_use]
pub fn is_confirmed(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
