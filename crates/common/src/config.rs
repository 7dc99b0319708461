//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config. Collaborator-specific
//! settings (JWT, notifications, users service) live in their own crates.

use anyhow::Result;
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use std::str::FromStr;

/// Default port of the posts service
const DEFAULT_PORT: u16 = 8083;

/// Default PostgreSQL port
const DEFAULT_POSTGRES_PORT: u16 = 5432;

/// Default size of the database connection pool
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Where the database lives
#[derive(Clone, PartialEq)]
pub enum DatabaseSettings {
    /// A full connection URL (`DATABASE_URL`)
    Url(String),
    /// Discrete `POSTGRES_*` parameters
    Params {
        host: String,
        port: u16,
        user: String,
        password: String,
        database: String,
    },
}

impl std::fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Url(_) => f.debug_tuple("Url").field(&"[REDACTED]").finish(),
            Self::Params {
                host,
                port,
                user,
                database,
                ..
            } => f
                .debug_struct("Params")
                .field("host", host)
                .field("port", port)
                .field("user", user)
                .field("password", &"[REDACTED]")
                .field("database", database)
                .finish(),
        }
    }
}

impl DatabaseSettings {
    /// Build sqlx connect options from these settings
    pub fn connect_options(&self) -> Result<PgConnectOptions> {
        match self {
            Self::Url(url) => PgConnectOptions::from_str(url)
                .map_err(|e| anyhow::anyhow!("Invalid DATABASE_URL: {}", e)),
            Self::Params {
                host,
                port,
                user,
                password,
                database,
            } => Ok(PgConnectOptions::new()
                .host(host)
                .port(*port)
                .username(user)
                .password(password)
                .database(database)
                .ssl_mode(PgSslMode::Disable)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Database connection settings
    pub database: DatabaseSettings,

    /// Upper bound on pooled connections
    pub database_max_connections: u32,

    /// Runtime configuration
    pub port: u16,
    pub log_format: String,

    /// Comma-separated allowed origins; `None` means permissive CORS
    pub cors_allowed_origins: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database = match lookup("DATABASE_URL").filter(|v| !v.is_empty()) {
            Some(url) => DatabaseSettings::Url(url),
            None => {
                let require = |key: &str| {
                    lookup(key)
                        .filter(|v| !v.is_empty())
                        .ok_or_else(|| anyhow::anyhow!("{} is required", key))
                };

                DatabaseSettings::Params {
                    host: require("POSTGRES_HOST")?,
                    port: lookup("POSTGRES_PORT")
                        .and_then(|p| p.parse().ok())
                        .unwrap_or(DEFAULT_POSTGRES_PORT),
                    user: require("POSTGRES_USER")?,
                    password: lookup("POSTGRES_PASSWORD").unwrap_or_default(),
                    database: require("POSTGRES_DB")?,
                }
            }
        };

        let config = Self {
            database,
            database_max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            log_format: lookup("LOG_FORMAT").unwrap_or_else(|| "pretty".to_string()),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS").filter(|v| !v.is_empty()),
        };

        Ok(config)
    }
}
