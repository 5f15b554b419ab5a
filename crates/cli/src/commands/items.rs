//! Item views: list, detail, add, edit, delete.
//!
//! # Usage
//!
//! ```bash
//! inv items list --search widget
//! inv items show 4
//! inv items add --name Widget --description "A small widget"
//! inv items update 4 --name Widget --description "A larger widget"
//! inv items delete 4 --yes
//! ```
//!
//! Every view requires a logged-in session; run `inv login` first.

use std::io::{BufRead, Write};

use thiserror::Error;

use inventory_client::{ApiClient, AuthState, ClientError};
use inventory_core::ItemId;

use crate::views;

/// Errors from the item views.
#[derive(Debug, Error)]
pub enum ItemsError {
    #[error("Not logged in. Run `inv login` first.")]
    NotLoggedIn,

    #[error("{0}")]
    InvalidForm(&'static str),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Refuse to render a view without a session.
async fn require_login(api: &ApiClient) -> Result<(), ItemsError> {
    match api.auth().state().await? {
        AuthState::Authenticated(_) => Ok(()),
        AuthState::Unauthenticated => Err(ItemsError::NotLoggedIn),
    }
}

/// List items, optionally filtered by a case-insensitive search.
///
/// # Errors
///
/// Returns `ItemsError` if not logged in or the fetch fails.
#[allow(clippy::print_stdout)]
pub async fn list(api: &ApiClient, search: Option<&str>) -> Result<(), ItemsError> {
    require_login(api).await?;
    let items = api.items().list().await?;
    print!("{}", ensure_newline(views::render_item_list(&items, search)));
    Ok(())
}

/// Show a single item.
///
/// # Errors
///
/// Returns `ItemsError` if not logged in or the item does not exist.
#[allow(clippy::print_stdout)]
pub async fn show(api: &ApiClient, id: ItemId) -> Result<(), ItemsError> {
    require_login(api).await?;
    let item = api.items().get(id).await?;
    print!("{}", views::render_item(&item));
    Ok(())
}

/// Create an item from the add form.
///
/// # Errors
///
/// Returns `ItemsError::InvalidForm` if a field is blank, before any request
/// is sent.
#[allow(clippy::print_stdout)]
pub async fn add(api: &ApiClient, name: &str, description: &str) -> Result<(), ItemsError> {
    require_login(api).await?;
    views::validate_new_item(name, description).map_err(ItemsError::InvalidForm)?;

    let item = api.items().create(name, description).await?;
    println!("Item added");
    print!("{}", views::render_item(&item));
    Ok(())
}

/// Replace an item from the edit form.
///
/// # Errors
///
/// Returns `ItemsError::InvalidForm` if a field is blank, or
/// `ClientError::NotFound` if the item does not exist.
#[allow(clippy::print_stdout)]
pub async fn update(
    api: &ApiClient,
    id: ItemId,
    name: &str,
    description: &str,
) -> Result<(), ItemsError> {
    require_login(api).await?;
    views::validate_item_update(name, description).map_err(ItemsError::InvalidForm)?;

    let item = api.items().update(id, name, description).await?;
    println!("Item updated");
    print!("{}", views::render_item(&item));
    Ok(())
}

/// Delete an item after confirmation. `assume_yes` skips the prompt.
///
/// # Errors
///
/// Returns `ItemsError` if not logged in, stdin cannot be read, or the
/// request fails.
#[allow(clippy::print_stdout)]
pub async fn delete(api: &ApiClient, id: ItemId, assume_yes: bool) -> Result<(), ItemsError> {
    require_login(api).await?;

    if !assume_yes && !confirm(views::DELETE_PROMPT)? {
        println!("Cancelled");
        return Ok(());
    }

    api.items().delete(id).await?;
    println!("Item deleted");
    Ok(())
}

#[allow(clippy::print_stdout)]
fn confirm(prompt: &str) -> Result<bool, std::io::Error> {
    print!("{prompt} [y/N] ");
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(views::is_confirmed(&answer))
}

fn ensure_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
