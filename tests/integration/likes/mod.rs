//! Like toggle endpoint integration tests
//!
//! - POST /likes - Add a like
//! - DELETE /likes - Remove a like
//! - GET /likes?postId= - List likers

use axum::http::{Method, StatusCode};
use pulse_notifications::mock::NotificationAction;
use pulse_posts::LikeStore;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::common::{authed_request, parse_body, TestApp, POST_AUTHOR, POST_ID};

async fn send(app: &TestApp, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let jwt = app.token_for(2);
    let req = authed_request(method, uri, &jwt, body);
    let resp = app.test_router().oneshot(req).await.unwrap();
    let status = resp.status();
    (status, parse_body(resp).await)
}

mod test_add_like {
    use super::*;

    #[tokio::test]
    async fn test_add_like_returns_resolved_likers() {
        let app = TestApp::new();

        let (status, body) = send(
            &app,
            Method::POST,
            "/likes",
            Some(json!({"postId": POST_ID, "userId": 2})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([{"id": 2, "username": "bob"}]));

        let sent = app.notifications.recorded();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].action, NotificationAction::Created);
        assert_eq!(sent[0].notification.user_id, POST_AUTHOR);
        assert_eq!(sent[0].notification.liker_id, 2);
    }

    #[tokio::test]
    async fn test_repeated_add_does_not_duplicate() {
        let app = TestApp::new();
        let body = json!({"postId": POST_ID, "userId": 2});

        let (first_status, first) = send(&app, Method::POST, "/likes", Some(body.clone())).await;
        let (second_status, second) = send(&app, Method::POST, "/likes", Some(body)).await;

        assert_eq!(first_status, StatusCode::OK);
        assert_eq!(second_status, StatusCode::OK);
        assert_eq!(first, second);
        assert_eq!(app.store.list_likers(POST_ID).await.unwrap(), vec![2]);
    }

    #[tokio::test]
    async fn test_notification_failure_still_succeeds() {
        let app = TestApp::new();
        app.notifications.set_failing(true);

        let (status, body) = send(
            &app,
            Method::POST,
            "/likes",
            Some(json!({"postId": POST_ID, "userId": 2})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([{"id": 2, "username": "bob"}]));
        assert_eq!(app.notifications.recorded().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_post_is_not_found() {
        let app = TestApp::new();

        let (status, body) = send(
            &app,
            Method::POST,
            "/likes",
            Some(json!({"postId": 999, "userId": 2})),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert_eq!(app.store.write_count(), 0);
        assert!(app.notifications.recorded().is_empty());
    }

    #[tokio::test]
    async fn test_storage_failure_is_opaque_server_error() {
        let app = TestApp::new();
        app.store.set_failing_writes(true);

        let (status, body) = send(
            &app,
            Method::POST,
            "/likes",
            Some(json!({"postId": POST_ID, "userId": 2})),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["message"], "Internal server error");
        assert!(app.notifications.recorded().is_empty());
    }

    #[tokio::test]
    async fn test_unresolvable_liker_fails_whole_response() {
        let app = TestApp::new();

        let (status, body) = send(
            &app,
            Method::POST,
            "/likes",
            Some(json!({"postId": POST_ID, "userId": 77})),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["message"], "Internal server error");
        // The like was committed before resolution failed.
        assert_eq!(app.store.list_likers(POST_ID).await.unwrap(), vec![77]);
    }

    #[tokio::test]
    async fn test_caller_token_is_forwarded_to_users_service() {
        let app = TestApp::new();
        let jwt = app.token_for(2);

        let req = authed_request(
            Method::POST,
            "/likes",
            &jwt,
            Some(json!({"postId": POST_ID, "userId": 2})),
        );
        let resp = app.test_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        assert_eq!(app.identity.lookups(), vec![(2, Some(jwt))]);
    }
}

mod test_remove_like {
    use super::*;

    #[tokio::test]
    async fn test_remove_like_drops_user() {
        let app = TestApp::new();
        let body = json!({"postId": POST_ID, "userId": 2});
        send(&app, Method::POST, "/likes", Some(body.clone())).await;

        let (status, likers) = send(&app, Method::DELETE, "/likes", Some(body)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(likers, json!([]));

        let sent = app.notifications.recorded();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[1].action, NotificationAction::Withdrawn);
    }

    #[tokio::test]
    async fn test_remove_missing_like_keeps_others() {
        let app = TestApp::new();
        send(
            &app,
            Method::POST,
            "/likes",
            Some(json!({"postId": POST_ID, "userId": 3})),
        )
        .await;

        let (status, likers) = send(
            &app,
            Method::DELETE,
            "/likes",
            Some(json!({"postId": POST_ID, "userId": 2})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(likers, json!([{"id": 3, "username": "carol"}]));
    }

    #[tokio::test]
    async fn test_remove_on_missing_post_is_not_found() {
        let app = TestApp::new();

        let (status, _) = send(
            &app,
            Method::DELETE,
            "/likes",
            Some(json!({"postId": 999, "userId": 2})),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(app.store.write_count(), 0);
    }
}

mod test_request_validation {
    use super::*;

    #[tokio::test]
    async fn test_invalid_bodies_are_bad_requests() {
        let app = TestApp::new();
        let bodies = vec![
            json!({"postId": 0, "userId": 2}),
            json!({"postId": POST_ID, "userId": -1}),
            json!({"postId": "one", "userId": 2}),
            json!({"postId": POST_ID}),
            json!({"postId": 1.5, "userId": 2}),
        ];

        for body in bodies {
            let (status, response) =
                send(&app, Method::POST, "/likes", Some(body.clone())).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
            assert_eq!(response["error"]["code"], "VALIDATION_ERROR");
        }
        assert_eq!(app.store.write_count(), 0);
    }

    #[tokio::test]
    async fn test_unsupported_method_is_rejected() {
        let app = TestApp::new();
        let jwt = app.token_for(2);

        let req = authed_request(Method::PUT, "/likes", &jwt, None);
        let resp = app.test_router().oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}

mod test_list_likes {
    use super::*;

    #[tokio::test]
    async fn test_lists_likers_in_like_order() {
        let app = TestApp::new();
        for user_id in [3, 2] {
            send(
                &app,
                Method::POST,
                "/likes",
                Some(json!({"postId": POST_ID, "userId": user_id})),
            )
            .await;
        }

        let (status, body) = send(&app, Method::GET, "/likes?postId=1", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([
                {"id": 3, "username": "carol"},
                {"id": 2, "username": "bob"},
            ])
        );
    }

    /// Known divergence: the toggle path answers 404 for a missing post,
    /// the read path answers with an empty list.
    #[tokio::test]
    async fn test_missing_post_lists_no_likers() {
        let app = TestApp::new();

        let (status, body) = send(&app, Method::GET, "/likes?postId=999", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_missing_post_id_is_bad_request() {
        let app = TestApp::new();

        let (status, body) = send(&app, Method::GET, "/likes", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"]["message"],
            "Validation error: Post ID is required"
        );
    }

    #[tokio::test]
    async fn test_non_numeric_post_id_is_bad_request() {
        let app = TestApp::new();

        let (status, _) = send(&app, Method::GET, "/likes?postId=abc", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
