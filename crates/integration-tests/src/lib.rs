//! Integration tests for the inventory service.
//!
//! # Running Tests
//!
//! ```bash
//! # API and client tests (in-memory store, no database needed)
//! cargo test -p inventory-integration-tests
//!
//! # Include the PostgreSQL store tests
//! INVENTORY_TEST_DATABASE_URL=postgres://... cargo test -p inventory-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `items_api` - Item CRUD through the HTTP API and the item client
//! - `auth_flow` - Login, logout and the client authentication state
//! - `postgres_store` - `PostgreSQL` repository against a real database

use std::net::SocketAddr;
use std::path::PathBuf;

use inventory_client::{ApiClient, SessionStore};
use inventory_server::app;
use inventory_server::config::ServerConfig;
use inventory_server::db::MemoryItemRepository;
use inventory_server::state::AppState;

/// A server on an ephemeral port plus a client pointed at it.
pub struct TestContext {
    pub addr: SocketAddr,
    pub api: ApiClient,
    pub items: MemoryItemRepository,
    session_dir: PathBuf,
}

impl TestContext {
    /// Start a server backed by a fresh in-memory store.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound or the client cannot be built.
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    /// Start a server after adjusting the default configuration.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound or the client cannot be built.
    pub async fn with_config(configure: impl FnOnce(&mut ServerConfig)) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");

        let mut config = ServerConfig::in_memory(addr);
        configure(&mut config);

        let items = MemoryItemRepository::new();
        let router = app::router(AppState::new(config, items.clone()));
        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Test server failed");
        });

        let session_dir =
            std::env::temp_dir().join(format!("inventory-it-{}", uuid::Uuid::new_v4()));
        let api = ApiClient::new(
            &format!("http://{addr}"),
            SessionStore::new(session_dir.join("session.json")),
        )
        .expect("Failed to build API client");

        Self {
            addr,
            api,
            items,
            session_dir,
        }
    }

    /// Absolute URL for `path` on the test server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Log in with the default credential.
    ///
    /// # Panics
    ///
    /// Panics if the login is rejected.
    pub async fn login(&self) {
        self.api
            .auth()
            .login("admin", "admin123")
            .await
            .expect("Default login failed");
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.session_dir);
    }
}
