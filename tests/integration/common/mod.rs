//! Common test utilities and fixtures for integration tests
//!
//! - `TestApp` wires the real router to an in-memory like store and
//!   mock notification and users services
//! - Request builders and response helpers

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, Response},
    Router,
};
use pulse_auth::{AuthBackend, AuthConfig};
use pulse_notifications::mock::MockNotificationService;
use pulse_posts::{InMemoryLikeStore, PostsState};
use pulse_users::mock::MockIdentityService;
use serde_json::Value;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Post seeded by `TestApp::new` and its author
pub const POST_ID: i64 = 1;
pub const POST_AUTHOR: i64 = 9;

/// Test application with handles on every collaborator
pub struct TestApp {
    pub store: InMemoryLikeStore,
    pub notifications: MockNotificationService,
    pub identity: MockIdentityService,
    pub auth: AuthBackend,
}

impl TestApp {
    /// Post 1 owned by user 9; users 2 (bob), 3 (carol) and 9 (author)
    /// are known to the users service.
    pub fn new() -> Self {
        Self::with_auth_config(AuthConfig::new(TEST_SECRET))
    }

    pub fn with_auth_config(config: AuthConfig) -> Self {
        Self {
            store: InMemoryLikeStore::new().with_post(POST_ID, POST_AUTHOR),
            notifications: MockNotificationService::new(),
            identity: MockIdentityService::new()
                .with_user(2, "bob")
                .with_user(3, "carol")
                .with_user(POST_AUTHOR, "author"),
            auth: AuthBackend::new(config),
        }
    }

    pub fn state(&self) -> PostsState {
        PostsState {
            likes: Arc::new(self.store.clone()),
            auth: self.auth.clone(),
            notifications: Arc::new(self.notifications.clone()),
            identity: Arc::new(self.identity.clone()),
        }
    }

    pub fn test_router(&self) -> Router {
        pulse_app::build_router(self.state())
    }

    /// A valid token for `user_id` signed with the test secret
    pub fn token_for(&self, user_id: i64) -> String {
        self.auth
            .issue_token(user_id, &format!("user{}@example.com", user_id))
            .unwrap()
    }
}

/// Build an authenticated request
pub fn authed_request(method: Method, uri: &str, jwt: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {}", jwt));
    with_body(builder, body)
}

/// Build a request with an arbitrary (or no) Authorization header
pub fn request_with_auth(
    method: Method,
    uri: &str,
    authorization: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(value) = authorization {
        builder = builder.header("authorization", value);
    }
    with_body(builder, body)
}

fn with_body(builder: axum::http::request::Builder, body: Option<Value>) -> Request<Body> {
    match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&b).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Parse response body as JSON
pub async fn parse_body(response: Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Read response body as text
pub async fn body_text(response: Response<Body>) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}
