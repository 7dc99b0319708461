//! Domain entities for the Posts domain
//!
//! Likes are a relation between a user and a post. The liker list returned
//! to clients is resolved against the users service, so `Liker` carries the
//! display name rather than anything stored locally.

use serde::{Deserialize, Serialize};

use pulse_common::{Error, Result};

/// A user who has liked a post, as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Liker {
    pub id: i64,
    pub username: String,
}

/// Direction of a like toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LikeAction {
    Add,
    Remove,
}

impl std::fmt::Display for LikeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LikeAction::Add => write!(f, "add"),
            LikeAction::Remove => write!(f, "remove"),
        }
    }
}

/// Outcome of the best-effort notification that follows a like mutation.
///
/// A failure here never fails the toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationOutcome {
    Delivered,
    Failed { reason: String },
}

/// Result of a committed like toggle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// Likers of the post after the mutation
    pub likers: Vec<Liker>,
    /// What happened to the follow-up notification
    pub notification: NotificationOutcome,
}

/// Reject non-positive post and user ids
pub fn validate_ids(post_id: i64, user_id: i64) -> Result<()> {
    if post_id <= 0 {
        return Err(Error::Validation("Invalid post ID".to_string()));
    }
    if user_id <= 0 {
        return Err(Error::Validation("Invalid user ID".to_string()));
    }
    Ok(())
}
