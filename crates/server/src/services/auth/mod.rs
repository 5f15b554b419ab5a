//! Authentication service.
//!
//! Login is a stateless credential check. A successful check resolves to a
//! [`Principal`] but issues no token and creates no session: the bearer
//! header clients send afterwards is not verified by any endpoint.

mod error;

pub use error::AuthError;

use secrecy::{ExposeSecret, SecretString};

use inventory_core::{Credentials, Principal};

use crate::config::AdminCredentialConfig;

/// Message returned by a successful login.
pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful";

/// Message returned by a rejected login.
pub const LOGIN_FAILURE_MESSAGE: &str = "Invalid credentials";

/// Verifies submitted credentials.
///
/// Implementations decide where credentials live; handlers only see the
/// resulting principal or `AuthError::InvalidCredentials`.
pub trait CredentialVerifier: Send + Sync {
    /// Check `credentials`, returning the authenticated principal.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the credentials are rejected.
    fn verify(&self, credentials: &Credentials) -> Result<Principal, AuthError>;
}

/// Accepts exactly one configured username/password pair.
///
/// Comparison is exact and case-sensitive; there is no hashing, rate
/// limiting, or lockout.
pub struct StaticCredentialVerifier {
    username: String,
    password: SecretString,
}

impl StaticCredentialVerifier {
    /// Create a verifier for a single credential pair.
    #[must_use]
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }

    /// Create a verifier from server configuration.
    #[must_use]
    pub fn from_config(config: &AdminCredentialConfig) -> Self {
        Self::new(config.username.clone(), config.password.clone())
    }
}

impl CredentialVerifier for StaticCredentialVerifier {
    fn verify(&self, credentials: &Credentials) -> Result<Principal, AuthError> {
        if credentials.username == self.username
            && credentials.password == self.password.expose_secret()
        {
            Ok(Principal {
                username: credentials.username.clone(),
            })
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_verifier() -> StaticCredentialVerifier {
        StaticCredentialVerifier::from_config(&AdminCredentialConfig::default())
    }

    #[test]
    fn test_exact_match_succeeds() {
        let principal = default_verifier()
            .verify(&Credentials::new("admin", "admin123"))
            .ok();

        assert_eq!(
            principal,
            Some(Principal {
                username: "admin".to_string()
            })
        );
    }

    #[test]
    fn test_any_other_combination_fails() {
        let verifier = default_verifier();
        let rejected = [
            ("admin", "wrong"),
            ("root", "admin123"),
            ("Admin", "admin123"),
            ("admin", "ADMIN123"),
            ("admin ", "admin123"),
            ("", ""),
        ];

        for (username, password) in rejected {
            let result = verifier.verify(&Credentials::new(username, password));
            assert!(
                matches!(result, Err(AuthError::InvalidCredentials)),
                "{username:?}/{password:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_configured_credentials_replace_default() {
        let verifier =
            StaticCredentialVerifier::new("operator", SecretString::from("s3cr3t-pass"));

        assert!(
            verifier
                .verify(&Credentials::new("operator", "s3cr3t-pass"))
                .is_ok()
        );
        assert!(
            verifier
                .verify(&Credentials::new("admin", "admin123"))
                .is_err()
        );
    }
}
