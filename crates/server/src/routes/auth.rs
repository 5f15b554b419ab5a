//! Authentication route handlers.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use inventory_core::{Credentials, MessageResponse};

use crate::db::ItemRepository;
use crate::error::Result;
use crate::services::auth::LOGIN_SUCCESS_MESSAGE;
use crate::state::AppState;

/// `POST /auth/login`
///
/// Returns a confirmation message only; no token or session is created.
///
/// # Errors
///
/// Returns 401 for a rejected credential, 400 for a malformed body.
pub async fn login<R: ItemRepository>(
    State(state): State<AppState<R>>,
    body: std::result::Result<Json<Credentials>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let Json(credentials) = body?;

    let principal = state.verifier().verify(&credentials).inspect_err(|_| {
        tracing::warn!(username = %credentials.username, "Login rejected");
    })?;

    tracing::info!(username = %principal.username, "Login successful");
    Ok(Json(MessageResponse::new(LOGIN_SUCCESS_MESSAGE)))
}
