//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `INVENTORY_DATABASE_URL` - `PostgreSQL` connection string (falls back to
//!   `DATABASE_URL`); only required when `INVENTORY_STORE=postgres`
//!
//! ## Optional
//! - `INVENTORY_HOST` - Bind address (default: 127.0.0.1)
//! - `INVENTORY_PORT` - Listen port (default: 3000)
//! - `INVENTORY_STORE` - `postgres` or `memory` (default: postgres)
//! - `INVENTORY_ADMIN_USERNAME` - Login username (default: admin)
//! - `INVENTORY_ADMIN_PASSWORD` - Login password (default: admin123)
//! - `INVENTORY_CORS_ORIGINS` - Comma-separated browser origins, or `*`
//!   (default: `http://localhost:3000,http://localhost:5173`)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use axum::http::HeaderValue;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Backing item store
    pub store: StoreConfig,
    /// The single login credential
    pub admin: AdminCredentialConfig,
    /// Browser origins allowed by CORS
    pub cors_origins: CorsOrigins,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

/// Which item store the server runs against.
#[derive(Debug, Clone)]
pub enum StoreConfig {
    /// `PostgreSQL` (connection URL contains the password).
    Postgres { database_url: SecretString },
    /// Process-local store; contents are lost on shutdown.
    Memory,
}

/// Login credential configuration.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct AdminCredentialConfig {
    pub username: String,
    pub password: SecretString,
}

impl std::fmt::Debug for AdminCredentialConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentialConfig")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Default for AdminCredentialConfig {
    fn default() -> Self {
        Self {
            username: DEFAULT_ADMIN_USERNAME.to_string(),
            password: SecretString::from(DEFAULT_ADMIN_PASSWORD),
        }
    }
}

impl AdminCredentialConfig {
    /// Whether the well-known default password is still in use.
    #[must_use]
    pub fn uses_default_password(&self) -> bool {
        self.password.expose_secret() == DEFAULT_ADMIN_PASSWORD
    }
}

/// CORS origin policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// `*` - any origin.
    Any,
    /// An explicit allow-list.
    List(Vec<HeaderValue>),
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("INVENTORY_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("INVENTORY_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("INVENTORY_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("INVENTORY_PORT".to_string(), e.to_string()))?;

        let store = StoreConfig::from_env()?;
        let admin = AdminCredentialConfig::from_env();
        let cors_origins = parse_cors_origins(&get_env_or_default(
            "INVENTORY_CORS_ORIGINS",
            DEFAULT_CORS_ORIGINS,
        ))?;

        Ok(Self {
            host,
            port,
            store,
            admin,
            cors_origins,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
        })
    }

    /// Configuration for a server backed by the in-memory store.
    ///
    /// Uses the default credential and CORS policy; Sentry is disabled.
    #[must_use]
    pub fn in_memory(addr: SocketAddr) -> Self {
        Self {
            host: addr.ip(),
            port: addr.port(),
            store: StoreConfig::Memory,
            admin: AdminCredentialConfig::default(),
            cors_origins: CorsOrigins::Any,
            sentry_dsn: None,
            sentry_environment: None,
        }
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::in_memory(SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3000))
    }
}

impl StoreConfig {
    fn from_env() -> Result<Self, ConfigError> {
        match get_env_or_default("INVENTORY_STORE", "postgres").as_str() {
            "postgres" => Ok(Self::Postgres {
                database_url: get_database_url("INVENTORY_DATABASE_URL")?,
            }),
            "memory" => Ok(Self::Memory),
            other => Err(ConfigError::InvalidEnvVar(
                "INVENTORY_STORE".to_string(),
                format!("expected 'postgres' or 'memory', got '{other}'"),
            )),
        }
    }
}

impl AdminCredentialConfig {
    fn from_env() -> Self {
        Self {
            username: get_env_or_default("INVENTORY_ADMIN_USERNAME", DEFAULT_ADMIN_USERNAME),
            password: SecretString::from(get_env_or_default(
                "INVENTORY_ADMIN_PASSWORD",
                DEFAULT_ADMIN_PASSWORD,
            )),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get database URL with fallback to generic `DATABASE_URL`.
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a comma-separated origin list. `*` allows any origin.
fn parse_cors_origins(raw: &str) -> Result<CorsOrigins, ConfigError> {
    let raw = raw.trim();
    if raw == "*" {
        return Ok(CorsOrigins::Any);
    }

    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| {
                ConfigError::InvalidEnvVar("INVENTORY_CORS_ORIGINS".to_string(), e.to_string())
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CorsOrigins::List)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cors_origins_any() {
        assert_eq!(parse_cors_origins("*").unwrap(), CorsOrigins::Any);
        assert_eq!(parse_cors_origins("  * ").unwrap(), CorsOrigins::Any);
    }

    #[test]
    fn test_parse_cors_origins_list() {
        let origins = parse_cors_origins("http://localhost:3000, http://localhost:5173,").unwrap();
        assert_eq!(
            origins,
            CorsOrigins::List(vec![
                HeaderValue::from_static("http://localhost:3000"),
                HeaderValue::from_static("http://localhost:5173"),
            ])
        );
    }

    #[test]
    fn test_parse_cors_origins_rejects_invalid_header() {
        let result = parse_cors_origins("http://ok.example\n");
        assert!(result.is_ok(), "trailing whitespace is trimmed");

        let result = parse_cors_origins("http://bad\u{7f}.example");
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }

    #[test]
    fn test_default_admin_credential() {
        let admin = AdminCredentialConfig::default();
        assert_eq!(admin.username, "admin");
        assert_eq!(admin.password.expose_secret(), "admin123");
        assert!(admin.uses_default_password());
    }

    #[test]
    fn test_admin_debug_redacts_password() {
        let admin = AdminCredentialConfig {
            username: "operator".to_string(),
            password: SecretString::from("super_secret_password"),
        };

        let debug_output = format!("{admin:?}");
        assert!(debug_output.contains("operator"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_password"));
        assert!(!admin.uses_default_password());
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig::in_memory("127.0.0.1:4000".parse().unwrap());

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 4000);
        assert!(matches!(config.store, StoreConfig::Memory));
    }
}
