//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! responding to the client. All route handlers should return `Result<T, AppError>`.
//! Every error body is JSON `{ "message": ... }`.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use inventory_core::MessageResponse;

use crate::services::auth::{AuthError, LOGIN_FAILURE_MESSAGE};
use crate::services::items::ItemError;

/// Application-level error type for the server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Item operation failed.
    #[error("Item error: {0}")]
    Item(#[from] ItemError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl AppError {
    const fn is_server_error(&self) -> bool {
        matches!(self, Self::Item(ItemError::Repository(_)))
    }

    const fn status(&self) -> StatusCode {
        match self {
            Self::Item(ItemError::Repository(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Item(ItemError::NotFound(_)) | Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Auth(AuthError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if self.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = self.status();

        // Don't expose internal error details to clients
        let message = match &self {
            _ if self.is_server_error() => "Internal server error".to_string(),
            Self::Item(ItemError::NotFound(id)) => format!("Item with Id {id} not found."),
            Self::Auth(AuthError::InvalidCredentials) => LOGIN_FAILURE_MESSAGE.to_string(),
            Self::NotFound(what) => format!("{what} not found"),
            Self::BadRequest(reason) => reason.clone(),
            _ => self.to_string(),
        };

        (status, Json(MessageResponse::new(message))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
