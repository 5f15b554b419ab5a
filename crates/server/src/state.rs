//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::db::ItemRepository;
use crate::services::auth::{CredentialVerifier, StaticCredentialVerifier};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the item store and configuration. It is generic
/// over the item store so the same router serves `PostgreSQL` and the
/// in-memory store.
pub struct AppState<R> {
    inner: Arc<AppStateInner<R>>,
}

struct AppStateInner<R> {
    config: ServerConfig,
    items: R,
    verifier: Box<dyn CredentialVerifier>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: ItemRepository> AppState<R> {
    /// Create a new application state.
    ///
    /// Login is checked against the credential in `config.admin`.
    #[must_use]
    pub fn new(config: ServerConfig, items: R) -> Self {
        let verifier = StaticCredentialVerifier::from_config(&config.admin);
        Self::with_verifier(config, items, verifier)
    }

    /// Create a new application state with a custom credential verifier.
    #[must_use]
    pub fn with_verifier(
        config: ServerConfig,
        items: R,
        verifier: impl CredentialVerifier + 'static,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                items,
                verifier: Box::new(verifier),
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the item repository.
    #[must_use]
    pub fn items(&self) -> &R {
        &self.inner.items
    }

    /// Get a reference to the credential verifier.
    #[must_use]
    pub fn verifier(&self) -> &dyn CredentialVerifier {
        self.inner.verifier.as_ref()
    }
}
