//! Client error types.

use thiserror::Error;

use crate::session::SessionError;

/// Errors that can occur when calling the inventory API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Base URL could not be parsed or joined.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Login was rejected.
    #[error("{0}")]
    InvalidCredentials(String),

    /// The server answered 404.
    #[error("not found: {0}")]
    NotFound(String),

    /// The server answered 401 outside of login.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Any other non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Local session storage failed.
    #[error("session storage error: {0}")]
    Session(#[from] SessionError),
}
