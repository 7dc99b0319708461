//! Route definitions for Posts domain API

use axum::{routing::get, Router};

use super::handlers::likes;
use super::middleware::PostsState;

/// Create all Posts domain API routes
pub fn routes() -> Router<PostsState> {
    Router::new().route(
        "/likes",
        get(likes::get_likes)
            .post(likes::add_like)
            .delete(likes::remove_like),
    )
}
