//! Inventory client - HTTP data clients for the inventory API.
//!
//! Thin callers mirroring the server's five item operations and login. Every
//! request carries `Authorization: Bearer <token>` with the token read from
//! the local session file (an empty token when none is stored).
//!
//! # Example
//!
//! ```rust,ignore
//! use inventory_client::{ApiClient, SessionStore};
//!
//! let api = ApiClient::new("http://127.0.0.1:3000", SessionStore::default_location())?;
//! api.auth().login("admin", "admin123").await?;
//! let items = api.items().list().await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod auth;
pub mod error;
pub mod items;
pub mod session;

pub use api::ApiClient;
pub use auth::{AuthClient, AuthState};
pub use error::ClientError;
pub use items::ItemClient;
pub use session::{Session, SessionError, SessionStore};
