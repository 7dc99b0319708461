//! Authentication errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Authentication error
#[derive(Debug)]
pub enum AuthError {
    MissingAuthorization,
    InvalidAuthorizationFormat,
    /// Bad signature, malformed structure or expired. Deliberately coarse.
    InvalidToken,
    /// No signing secret configured
    MissingSecret,
    TokenIssueFailed,
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingAuthorization
            | AuthError::InvalidAuthorizationFormat
            | AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
            AuthError::MissingSecret | AuthError::TokenIssueFailed => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let (code, message) = match self {
            AuthError::MissingAuthorization => {
                ("MISSING_AUTHORIZATION", "Authorization token missing")
            }
            AuthError::InvalidAuthorizationFormat => (
                "INVALID_AUTHORIZATION",
                "Invalid authorization header format",
            ),
            AuthError::InvalidToken => ("INVALID_TOKEN", "Invalid or expired token"),
            AuthError::MissingSecret | AuthError::TokenIssueFailed => {
                ("INTERNAL_ERROR", "Internal server error")
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}
