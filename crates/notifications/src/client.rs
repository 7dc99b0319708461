//! Notifications HTTP Client Implementation
//!
//! Creates notifications with `POST {base_url}/notifications` and withdraws
//! them with `DELETE {base_url}/api/notifications`. Every call is bounded by
//! the configured timeout. Only `200` and `201` count as delivered.

use reqwest::StatusCode;

use crate::{LikeNotification, NotificationConfig, NotificationError, NotificationService};

/// Real HTTP client for the notifications service.
pub struct HttpNotificationClient {
    http: reqwest::Client,
    create_url: String,
    withdraw_url: String,
}

impl HttpNotificationClient {
    /// Create a new notifications client from configuration.
    pub fn new(config: NotificationConfig) -> Result<Self, NotificationError> {
        let base_url = config.base_url.ok_or_else(|| {
            NotificationError::Configuration(
                "NOTIFICATIONS_SERVICE_URL is required for the http provider".to_string(),
            )
        })?;
        let base_url = base_url.trim_end_matches('/');

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| NotificationError::Configuration(e.to_string()))?;

        Ok(Self {
            http,
            create_url: format!("{}/notifications", base_url),
            withdraw_url: format!("{}/api/notifications", base_url),
        })
    }

    async fn deliver(
        &self,
        request: reqwest::RequestBuilder,
        body: &LikeNotification,
    ) -> Result<(), NotificationError> {
        let response = request
            .json(body)
            .send()
            .await
            .map_err(|e| NotificationError::Request(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK && status != StatusCode::CREATED {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read response body".to_string());
            return Err(NotificationError::Response(format!(
                "Notifications service returned {}: {}",
                status, body
            )));
        }

        Ok(())
    }
}

#[async_trait::async_trait]
impl NotificationService for HttpNotificationClient {
    async fn notify_liked(
        &self,
        recipient_id: i64,
        actor_id: i64,
        post_id: i64,
    ) -> Result<(), NotificationError> {
        let body = LikeNotification::created(recipient_id, actor_id, post_id);
        self.deliver(self.http.post(&self.create_url), &body)
            .await?;

        tracing::debug!(recipient_id, actor_id, post_id, "Like notification created");
        Ok(())
    }

    async fn withdraw_like_notification(
        &self,
        recipient_id: i64,
        actor_id: i64,
        post_id: i64,
    ) -> Result<(), NotificationError> {
        let body = LikeNotification::withdrawn(recipient_id, actor_id, post_id);
        self.deliver(self.http.delete(&self.withdraw_url), &body)
            .await?;

        tracing::debug!(recipient_id, actor_id, post_id, "Like notification withdrawn");
        Ok(())
    }
}
