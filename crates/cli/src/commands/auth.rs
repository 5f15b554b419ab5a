//! Login, logout and session status.
//!
//! # Usage
//!
//! ```bash
//! inv login -u admin -p admin123
//! inv status
//! inv logout
//! ```
//!
//! The password may also come from `INVENTORY_PASSWORD`.

use inventory_client::{ApiClient, AuthState, ClientError};

/// Log in and persist the session.
///
/// # Errors
///
/// Returns `ClientError::InvalidCredentials` with the server's message if the
/// login is rejected.
#[allow(clippy::print_stdout)]
pub async fn login(api: &ApiClient, username: &str, password: &str) -> Result<(), ClientError> {
    api.auth().login(username, password).await?;
    println!("Login successful");
    Ok(())
}

/// Forget the stored session.
///
/// # Errors
///
/// Returns `ClientError::Session` if the session file cannot be removed.
#[allow(clippy::print_stdout)]
pub async fn logout(api: &ApiClient) -> Result<(), ClientError> {
    api.auth().logout().await?;
    println!("Logged out");
    Ok(())
}

/// Print the current authentication state.
///
/// # Errors
///
/// Returns `ClientError::Session` if the session file is unreadable.
#[allow(clippy::print_stdout)]
pub async fn status(api: &ApiClient) -> Result<(), ClientError> {
    match api.auth().state().await? {
        AuthState::Authenticated(session) => {
            println!("Logged in as {} ({})", session.username, api.base_url());
        }
        AuthState::Unauthenticated => println!("Not logged in"),
    }
    Ok(())
}
