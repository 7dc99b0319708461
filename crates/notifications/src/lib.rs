//! Pulse Notification Dispatcher
//!
//! Records and withdraws "liked your post" events in the external
//! notifications service:
//! - HTTP client with a bounded per-call timeout for production
//! - Recording mock for tests and local development
//!
//! Delivery is best-effort. Callers decide what a failure means; this
//! crate only reports it.

pub mod client;
pub mod mock;

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default bound on a single call to the notifications service
const DEFAULT_TIMEOUT_MS: u64 = 3000;

#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("Notification configuration error: {0}")]
    Configuration(String),

    #[error("Notification request error: {0}")]
    Request(String),

    #[error("Notification response error: {0}")]
    Response(String),
}

/// Kind of notification. Only likes originate from this workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Like,
}

/// Wire body shared by the create and withdraw calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeNotification {
    /// Recipient: the author of the liked post
    pub user_id: i64,
    /// Actor: the user who liked
    pub liker_id: i64,
    pub post_id: i64,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LikeNotification {
    /// Body for recording a new like
    pub fn created(recipient_id: i64, actor_id: i64, post_id: i64) -> Self {
        Self {
            user_id: recipient_id,
            liker_id: actor_id,
            post_id,
            kind: NotificationKind::Like,
            message: Some(format!("User {} liked your post {}", actor_id, post_id)),
        }
    }

    /// Body for withdrawing a like. Carries no message.
    pub fn withdrawn(recipient_id: i64, actor_id: i64, post_id: i64) -> Self {
        Self {
            user_id: recipient_id,
            liker_id: actor_id,
            post_id,
            kind: NotificationKind::Like,
            message: None,
        }
    }
}

/// Notification service configuration
#[derive(Debug, Clone)]
pub struct NotificationConfig {
    /// Provider (http, mock)
    pub provider: String,
    /// Base URL of the notifications service
    pub base_url: Option<String>,
    /// Upper bound on a single call
    pub timeout: Duration,
}

impl NotificationConfig {
    /// Create notification config from environment variables.
    pub fn from_env() -> Result<Self, NotificationError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// The provider defaults to `http`, which requires
    /// `NOTIFICATIONS_SERVICE_URL`. The mock is only used when
    /// `NOTIFICATIONS_PROVIDER=mock` is set explicitly.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, NotificationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("NOTIFICATIONS_SERVICE_URL").filter(|url| !url.is_empty());

        let provider = lookup("NOTIFICATIONS_PROVIDER")
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| "http".to_string());

        let timeout_ms = lookup("NOTIFICATIONS_TIMEOUT_MS")
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

/// Notification service trait for different implementations
#[async_trait::async_trait]
pub trait NotificationService: Send + Sync {
    /// Record that `actor_id` liked `post_id`, owned by `recipient_id`
    async fn notify_liked(
        &self,
        recipient_id: i64,
        actor_id: i64,
        post_id: i64,
    ) -> Result<(), NotificationError>;

    /// Withdraw a previously recorded like notification
    async fn withdraw_like_notification(
        &self,
        recipient_id: i64,
        actor_id: i64,
        post_id: i64,
    ) -> Result<(), NotificationError>;
}

/// Factory for creating NotificationService implementations
pub struct NotificationServiceFactory;

impl NotificationServiceFactory {
    pub fn create(
        config: NotificationConfig,
    ) -> Result<Box<dyn NotificationService>, NotificationError> {
        match config.provider.as_str() {
            "http" => {
                tracing::info!("Creating HTTP notification client");
                Ok(Box::new(client::HttpNotificationClient::new(config)?))
            }
            "mock" => {
                tracing::warn!("Creating mock notification service; no notifications will be sent");
                Ok(Box::new(mock::MockNotificationService::non_recording()))
            }
            provider => Err(NotificationError::Configuration(format!(
                "Unknown notification provider: {}. Supported providers: http, mock",
                provider
            ))),
        }
    }
}
