//! Mock Notification Service Implementation
//!
//! Records every dispatch attempt in memory for test assertions.
//! Thread-safe via `Arc<Mutex<>>`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::{LikeNotification, NotificationError, NotificationService};

/// Which call a recorded notification came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationAction {
    Created,
    Withdrawn,
}

/// A single recorded dispatch attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedNotification {
    pub action: NotificationAction,
    pub notification: LikeNotification,
}

/// Mock notification service that records attempts for test assertions.
///
/// Attempts are recorded even while `set_failing(true)` is in effect, so
/// tests can check that a dispatch was tried and that its failure was
/// tolerated.
///
/// Instances built by `NotificationServiceFactory` do not record, so a
/// long-running process never accumulates attempts.
#[derive(Debug, Clone)]
pub struct MockNotificationService {
    sent: Arc<Mutex<Vec<RecordedNotification>>>,
    failing: Arc<AtomicBool>,
    recording: bool,
}

impl MockNotificationService {
    /// Create a new mock notification service.
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            failing: Arc::new(AtomicBool::new(false)),
            recording: true,
        }
    }

    /// Create a mock that accepts calls without keeping them.
    pub fn non_recording() -> Self {
        Self {
            recording: false,
            ..Self::new()
        }
    }

    /// Make every subsequent call fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Return all recorded attempts.
    pub fn recorded(&self) -> Vec<RecordedNotification> {
        self.sent
            .lock()
            .expect("notifications lock poisoned, prior test panicked")
            .clone()
    }

    /// Clear all recorded attempts.
    pub fn reset(&self) {
        self.sent
            .lock()
            .expect("notifications lock poisoned, prior test panicked")
            .clear();
    }

    fn record(
        &self,
        action: NotificationAction,
        notification: LikeNotification,
    ) -> Result<(), NotificationError> {
        if self.recording {
            self.sent
                .lock()
                .map_err(|e| {
                    NotificationError::Request(format!("notifications lock poisoned: {e}"))
                })?
                .push(RecordedNotification {
                    action,
                    notification,
                });
        }

        if self.failing.load(Ordering::SeqCst) {
            return Err(NotificationError::Response(
                "Mock notification service configured to fail".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for MockNotificationService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl NotificationService for MockNotificationService {
    async fn notify_liked(
        &self,
        recipient_id: i64,
        actor_id: i64,
        post_id: i64,
    ) -> Result<(), NotificationError> {
        tracing::debug!(recipient_id, actor_id, post_id, "Mock notifications: recording like");
        self.record(
            NotificationAction::Created,
            LikeNotification::created(recipient_id, actor_id, post_id),
        )
    }

    async fn withdraw_like_notification(
        &self,
        recipient_id: i64,
        actor_id: i64,
        post_id: i64,
    ) -> Result<(), NotificationError> {
        tracing::debug!(recipient_id, actor_id, post_id, "Mock notifications: recording withdrawal");
        self.record(
            NotificationAction::Withdrawn,
            LikeNotification::withdrawn(recipient_id, actor_id, post_id),
        )
    }
}
