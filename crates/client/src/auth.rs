//! Login state and the login data client.
//!
//! # State machine
//!
//! ```text
//! Unauthenticated --login succeeds--> Authenticated
//! Authenticated   --logout-------->   Unauthenticated
//! ```
//!
//! There is no expiry and no server-side check of the authenticated state:
//! the server issues no token, so "authenticated" only means a login call
//! succeeded from this client.

use reqwest::Method;
use serde::Deserialize;

use inventory_core::Credentials;

use crate::api::{ApiClient, check};
use crate::error::ClientError;
use crate::session::Session;

/// Client-side authentication state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    Authenticated(Session),
}

impl AuthState {
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// The logged-in session, if any.
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            Self::Unauthenticated => None,
        }
    }
}

impl From<Option<Session>> for AuthState {
    fn from(session: Option<Session>) -> Self {
        session.map_or(Self::Unauthenticated, Self::Authenticated)
    }
}

/// Login response body.
///
/// The server currently sends only `message`; a `token` is kept if a server
/// ever provides one.
#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    token: Option<String>,
}

/// Login/logout operations.
pub struct AuthClient<'a> {
    api: &'a ApiClient,
}

impl<'a> AuthClient<'a> {
    pub(crate) const fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Current state, read from the session store.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Session` if the session file is unreadable.
    pub async fn state(&self) -> Result<AuthState, ClientError> {
        Ok(self.api.session().load().await?.into())
    }

    /// Submit credentials. Any success response moves to `Authenticated` and
    /// persists the session.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidCredentials` if the server rejects the
    /// credentials, or another `ClientError` if the call fails.
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthState, ClientError> {
        let response = self
            .api
            .anonymous(Method::POST, "auth/login")?
            .json(&Credentials::new(username, password))
            .send()
            .await?;

        let response = check(response).await.map_err(|e| match e {
            ClientError::Unauthorized(message) => ClientError::InvalidCredentials(message),
            other => other,
        })?;

        // Success is decided by status alone; an unexpected body still logs in.
        let token = match response.json::<LoginResponse>().await {
            Ok(body) => body.token,
            Err(e) => {
                tracing::debug!(error = %e, "Login response body not understood");
                None
            }
        };

        let session = Session {
            username: username.to_string(),
            token,
        };
        self.api.session().save(&session).await?;
        tracing::info!(username, "Logged in");

        Ok(AuthState::Authenticated(session))
    }

    /// Forget the local session. Makes no server call.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Session` if the session file cannot be removed.
    pub async fn logout(&self) -> Result<AuthState, ClientError> {
        self.api.session().clear().await?;
        tracing::info!("Logged out");
        Ok(AuthState::Unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_from_session() {
        assert_eq!(AuthState::from(None), AuthState::Unauthenticated);

        let session = Session {
            username: "admin".to_string(),
            token: None,
        };
        let state = AuthState::from(Some(session.clone()));
        assert!(state.is_authenticated());
        assert_eq!(state.session(), Some(&session));
    }

    #[test]
    fn test_unauthenticated_has_no_session() {
        assert!(!AuthState::Unauthenticated.is_authenticated());
        assert_eq!(AuthState::Unauthenticated.session(), None);
    }
}
