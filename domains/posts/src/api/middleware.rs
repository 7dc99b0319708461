//! Posts domain state and auth backend integration

use std::sync::Arc;

use axum::extract::FromRef;
use pulse_auth::AuthBackend;
use pulse_notifications::NotificationService;
use pulse_users::IdentityService;

use crate::repository::LikeStore;

/// Application state for the Posts domain
#[derive(Clone)]
pub struct PostsState {
    pub likes: Arc<dyn LikeStore>,
    pub auth: AuthBackend,
    pub notifications: Arc<dyn NotificationService>,
    pub identity: Arc<dyn IdentityService>,
}

impl FromRef<PostsState> for AuthBackend {
    fn from_ref(state: &PostsState) -> Self {
        state.auth.clone()
    }
}
