//! Shared database types for Pulse
//!
//! Connection pool construction and the error type shared by repositories.

use std::time::Duration;

use crate::config::DatabaseSettings;
use crate::error::Error;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;

/// Database-specific error types
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Database connection error: {0}")]
    Connection(#[from] sqlx::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<RepositoryError> for Error {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Connection(e) => Error::Database(e),
            RepositoryError::Unavailable(msg) => Error::Internal(msg),
            RepositoryError::InvalidData(msg) => Error::Internal(msg),
        }
    }
}

/// Open a connection pool for the given settings
pub async fn connect_pool(
    settings: &DatabaseSettings,
    max_connections: u32,
) -> anyhow::Result<PgPool> {
    let options = settings.connect_options()?;

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await?;

    Ok(pool)
}
