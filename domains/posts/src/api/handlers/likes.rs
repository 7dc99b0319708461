//! Like toggle API handlers
//!
//! A toggle runs in a fixed order: validate ids, resolve the post owner,
//! mutate storage, attempt the notification, re-read likers, then resolve
//! each liker through the users service. The storage write always
//! happens before the notification attempt, and the notification outcome
//! never changes the response.

use axum::{
    extract::{Query, State},
    Json,
};
use pulse_auth::AuthUser;
use pulse_common::{Error, Result, ValidatedJson};
use serde::Deserialize;
use validator::Validate;

use crate::api::middleware::PostsState;
use crate::domain::entities::{
    validate_ids, LikeAction, Liker, NotificationOutcome, ToggleOutcome,
};

/// Request body for adding or removing a like
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LikeRequest {
    #[validate(range(min = 1, message = "Invalid post ID"))]
    pub post_id: i64,

    #[validate(range(min = 1, message = "Invalid user ID"))]
    pub user_id: i64,
}

/// Query params for listing likers
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikesQuery {
    pub post_id: Option<String>,
}

/// Apply a like toggle and report both the liker list and the notification
/// outcome.
///
/// `bearer` is forwarded to the users service on every identity lookup.
pub async fn toggle_like(
    state: &PostsState,
    action: LikeAction,
    post_id: i64,
    user_id: i64,
    bearer: Option<&str>,
) -> Result<ToggleOutcome> {
    validate_ids(post_id, user_id)?;

    let owner_id = state
        .likes
        .post_owner(post_id)
        .await?
        .ok_or_else(|| Error::NotFound("Post not found".to_string()))?;

    let dispatch = match action {
        LikeAction::Add => {
            state.likes.add(post_id, user_id).await?;
            tracing::info!(post_id, user_id, "Like added");
            state
                .notifications
                .notify_liked(owner_id, user_id, post_id)
                .await
        }
        LikeAction::Remove => {
            state.likes.remove(post_id, user_id).await?;
            tracing::info!(post_id, user_id, "Like removed");
            state
                .notifications
                .withdraw_like_notification(owner_id, user_id, post_id)
                .await
        }
    };

    let notification = match dispatch {
        Ok(()) => {
            tracing::debug!(
                post_id,
                user_id,
                recipient_id = owner_id,
                %action,
                "Like notification delivered"
            );
            NotificationOutcome::Delivered
        }
        Err(e) => {
            tracing::warn!(
                post_id,
                user_id,
                recipient_id = owner_id,
                %action,
                error = %e,
                "Like notification failed"
            );
            NotificationOutcome::Failed {
                reason: e.to_string(),
            }
        }
    };

    let liker_ids = state.likes.list_likers(post_id).await?;
    let likers = resolve_likers(state, &liker_ids, bearer).await?;

    Ok(ToggleOutcome {
        likers,
        notification,
    })
}

/// Current likers of a post. A post that does not exist simply has none.
pub async fn list_likes(
    state: &PostsState,
    post_id: i64,
    bearer: Option<&str>,
) -> Result<Vec<Liker>> {
    let liker_ids = state.likes.list_likers(post_id).await?;
    resolve_likers(state, &liker_ids, bearer).await
}

/// Look up each liker in order. The first failed lookup fails the whole
/// list.
async fn resolve_likers(
    state: &PostsState,
    liker_ids: &[i64],
    bearer: Option<&str>,
) -> Result<Vec<Liker>> {
    let mut likers = Vec::with_capacity(liker_ids.len());
    for &id in liker_ids {
        let profile = state
            .identity
            .fetch_user(id, bearer)
            .await
            .map_err(|e| Error::Internal(format!("Failed to resolve user {}: {}", id, e)))?;

        likers.push(Liker {
            id,
            username: profile.username,
        });
    }
    Ok(likers)
}

/// Add a like and return the post's likers
pub async fn add_like(
    AuthUser(ctx): AuthUser,
    State(state): State<PostsState>,
    ValidatedJson(req): ValidatedJson<LikeRequest>,
) -> Result<Json<Vec<Liker>>> {
    let outcome = toggle_like(
        &state,
        LikeAction::Add,
        req.post_id,
        req.user_id,
        Some(&ctx.token),
    )
    .await?;
    Ok(Json(outcome.likers))
}

/// Remove a like and return the post's likers
pub async fn remove_like(
    AuthUser(ctx): AuthUser,
    State(state): State<PostsState>,
    ValidatedJson(req): ValidatedJson<LikeRequest>,
) -> Result<Json<Vec<Liker>>> {
    let outcome = toggle_like(
        &state,
        LikeAction::Remove,
        req.post_id,
        req.user_id,
        Some(&ctx.token),
    )
    .await?;
    Ok(Json(outcome.likers))
}

/// List a post's likers
pub async fn get_likes(
    AuthUser(ctx): AuthUser,
    State(state): State<PostsState>,
    Query(query): Query<LikesQuery>,
) -> Result<Json<Vec<Liker>>> {
    let raw = query
        .post_id
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::Validation("Post ID is required".to_string()))?;

    let post_id: i64 = raw
        .parse()
        .map_err(|_| Error::Validation("Invalid post ID".to_string()))?;

    let likers = list_likes(&state, post_id, Some(&ctx.token)).await?;
    Ok(Json(likers))
}
