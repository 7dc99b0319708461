//! Health and readiness probes are reachable without a token, even when
//! the service has no signing secret.

use axum::http::{Method, StatusCode};
use chrono::TimeDelta;
use pulse_auth::AuthConfig;
use tower::ServiceExt;

use crate::common::{body_text, request_with_auth, TestApp};

#[tokio::test]
async fn test_health_is_unauthenticated() {
    let app = TestApp::new();

    let resp = app
        .test_router()
        .oneshot(request_with_auth(Method::GET, "/health", None, None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, "OK");
}

#[tokio::test]
async fn test_ready_ignores_bad_token() {
    let app = TestApp::new();

    let resp = app
        .test_router()
        .oneshot(request_with_auth(
            Method::GET,
            "/ready",
            Some("Bearer garbage"),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, "Ready");
}

#[tokio::test]
async fn test_probes_work_without_secret() {
    let app = TestApp::with_auth_config(AuthConfig {
        jwt_secret: None,
        token_ttl: TimeDelta::hours(72),
    });

    for uri in ["/health", "/ready"] {
        let resp = app
            .test_router()
            .oneshot(request_with_auth(Method::GET, uri, None, None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK, "{uri}");
    }
}
