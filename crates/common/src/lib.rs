//! Shared utilities, configuration, and error handling for Pulse
//!
//! This crate provides common functionality used across the Pulse services:
//! - Configuration management following 12-factor principles
//! - Error types and handling
//! - Database pool construction
//! - Request extractors

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;

pub use config::{Config, DatabaseSettings};
pub use db::{connect_pool, RepositoryError};
pub use error::{Error, Result};
pub use extractors::{ValidatedJson, ValidatedJsonRejection};
