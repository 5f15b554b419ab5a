//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! inv migrate
//! ```
//!
//! # Environment Variables
//!
//! - `INVENTORY_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)
//!
//! # Migration Files
//!
//! Migrations live in `crates/server/migrations/` and are embedded into the
//! binary at compile time.

use secrecy::SecretString;
use thiserror::Error;

use inventory_server::db;

/// Errors that can occur while migrating.
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Run item store migrations.
///
/// # Errors
///
/// Returns `MigrationError` if the database URL is missing, the connection
/// fails, or a migration fails.
pub async fn run() -> Result<(), MigrationError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("INVENTORY_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| MigrationError::MissingEnvVar("INVENTORY_DATABASE_URL"))?;

    tracing::info!("Connecting to inventory database...");
    let pool = db::create_pool(&database_url).await?;

    tracing::info!("Running inventory migrations...");
    db::run_migrations(&pool).await?;

    tracing::info!("Inventory migrations complete!");
    Ok(())
}
