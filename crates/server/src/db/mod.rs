//! Item storage.
//!
//! # Database: `inventory`
//!
//! ## Tables
//!
//! - `inventory.item` - Inventory items (identity column, ids never reused)
//!
//! # Stores
//!
//! [`ItemRepository`] is the only seam that touches storage. Two stores
//! implement it:
//!
//! - [`PgItemRepository`] - `PostgreSQL`, the production store
//! - [`MemoryItemRepository`] - process-local, for tests and local demos
//!
//! # Migrations
//!
//! Migrations are stored in `crates/server/migrations/` and run via:
//! ```bash
//! cargo run -p inventory-cli -- migrate
//! ```

pub mod items;
pub mod memory;

use std::future::Future;
use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use inventory_core::{Item, ItemId, NewItem};

pub use items::PgItemRepository;
pub use memory::MemoryItemRepository;

/// Embedded migrations for the item store.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation.
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Storage operations for items.
///
/// Implementations must assign unique, never-reused ids on create and make
/// every write visible to the next read. Concurrent writers are
/// last-write-wins; there is no conflict detection.
pub trait ItemRepository: Clone + Send + Sync + 'static {
    /// Every stored item, ascending by id.
    fn list(&self) -> impl Future<Output = Result<Vec<Item>, RepositoryError>> + Send;

    /// The item with `id`, or `None` if it does not exist.
    fn get_by_id(
        &self,
        id: ItemId,
    ) -> impl Future<Output = Result<Option<Item>, RepositoryError>> + Send;

    /// Persist a new item and return it with its assigned id.
    fn create(&self, item: NewItem) -> impl Future<Output = Result<Item, RepositoryError>> + Send;

    /// Overwrite name and description of an existing item.
    ///
    /// Returns `RepositoryError::NotFound` if no item has `item.id`.
    fn update(&self, item: &Item) -> impl Future<Output = Result<(), RepositoryError>> + Send;

    /// Remove the item with `id`. Succeeds whether or not it existed.
    fn delete(&self, id: ItemId) -> impl Future<Output = Result<(), RepositoryError>> + Send;

    /// Check that the store is reachable.
    fn ping(&self) -> impl Future<Output = Result<(), RepositoryError>> + Send;
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Apply any pending migrations.
///
/// # Errors
///
/// Returns `MigrateError` if a migration fails or the applied history diverges.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}
