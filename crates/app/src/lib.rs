//! Pulse application composition root
//!
//! Builds the posts service router: the `/likes` domain routes plus the
//! unauthenticated health and readiness probes.

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::{routing::get, Router};
use pulse_auth::{AuthBackend, AuthConfig};
use pulse_notifications::{NotificationConfig, NotificationServiceFactory};
use pulse_posts::{PgLikeStore, PostsState};
use pulse_users::{IdentityConfig, IdentityServiceFactory};
use sqlx::PgPool;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Create the main application router with all routes
pub fn create_app(pool: PgPool) -> Result<Router, anyhow::Error> {
    let auth = AuthBackend::new(AuthConfig::from_env());

    let notification_config = NotificationConfig::from_env()?;
    let notifications = NotificationServiceFactory::create(notification_config)?;

    let identity_config = IdentityConfig::from_env()?;
    let identity = IdentityServiceFactory::create(identity_config)?;

    let state = PostsState {
        likes: Arc::new(PgLikeStore::new(pool)),
        auth,
        notifications: Arc::from(notifications),
        identity: Arc::from(identity),
    };

    Ok(build_router(state))
}

/// Compose the posts routes with the shared infrastructure routes
pub fn build_router(state: PostsState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .merge(pulse_posts::routes().with_state(state))
}

/// CORS policy from a comma-separated origin list. No list means
/// permissive CORS for local development.
pub fn build_cors_layer(allowed_origins: Option<&str>) -> CorsLayer {
    let Some(raw) = allowed_origins else {
        return CorsLayer::permissive();
    };

    let origins: Vec<HeaderValue> = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Readiness check endpoint
async fn readiness_check() -> &'static str {
    "Ready"
}
