//! Pulse Identity Resolution
//!
//! Resolves user ids to display identities through the users service.

pub mod client;
pub mod mock;

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_TIMEOUT_MS: u64 = 5000;

#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("Identity configuration error: {0}")]
    Configuration(String),

    #[error("Identity request error: {0}")]
    Request(String),

    #[error("Identity response error: {0}")]
    Response(String),

    #[error("Identity decode error: {0}")]
    Decode(String),
}

/// Public profile returned by `GET /api/users/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
}

/// Users service configuration
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    /// Provider (http, mock)
    pub provider: String,
    pub base_url: Option<String>,
    pub timeout: Duration,
}

impl IdentityConfig {
    /// Create identity config from environment variables.
    pub fn from_env() -> Result<Self, IdentityError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// The provider defaults to `http`, which requires `USERS_SERVICE_URL`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, IdentityError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("USERS_SERVICE_URL").filter(|url| !url.is_empty());

        let provider = lookup("USERS_PROVIDER")
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| "http".to_string());

        let timeout_ms = lookup("USERS_TIMEOUT_MS")
            .and_then(|v| v.parse().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        Ok(Self {
            provider,
            base_url,
            timeout: Duration::from_millis(timeout_ms),
        })
    }
}

/// Identity lookup trait for different implementations
#[async_trait::async_trait]
pub trait IdentityService: Send + Sync {
    /// Fetch a user's profile. `bearer` is forwarded as the caller's token.
    async fn fetch_user(
        &self,
        user_id: i64,
        bearer: Option<&str>,
    ) -> Result<UserProfile, IdentityError>;
}

/// Factory for creating IdentityService implementations
pub struct IdentityServiceFactory;

impl IdentityServiceFactory {
    pub fn create(config: IdentityConfig) -> Result<Box<dyn IdentityService>, IdentityError> {
        match config.provider.as_str() {
            "http" => {
                tracing::info!("Creating HTTP identity client");
                Ok(Box::new(client::HttpIdentityClient::new(config)?))
            }
            "mock" => {
                tracing::warn!("Creating mock identity service; unknown users will not resolve");
                Ok(Box::new(mock::MockIdentityService::non_recording()))
            }
            provider => Err(IdentityError::Configuration(format!(
                "Unknown identity provider: {}. Supported providers: http, mock",
                provider
            ))),
        }
    }
}
