//! Axum extractors for authentication
//!
//! Generic over any state `S` where `AuthBackend: FromRef<S>`.
//! Routes that do not take `AuthUser` (health and readiness probes)
//! are never gated.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::backend::AuthBackend;
use crate::context::AuthContext;
use crate::error::AuthError;
use crate::jwt::extract_bearer_token;

/// Authenticated user extractor (JWT)
#[derive(Debug)]
pub struct AuthUser(pub AuthContext);

impl<S> FromRequestParts<S> for AuthUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let backend = AuthBackend::from_ref(state);

        let result = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingAuthorization)
            .and_then(extract_bearer_token)
            .and_then(|token| backend.authenticate_jwt(&token));

        match result {
            Ok(auth_context) => {
                tracing::info!(
                    user_id = auth_context.user_id,
                    path = %parts.uri.path(),
                    "Authorized request"
                );
                Ok(AuthUser(auth_context))
            }
            Err(e) => {
                tracing::warn!(
                    reason = ?e,
                    path = %parts.uri.path(),
                    "Rejected unauthenticated request"
                );
                Err(e)
            }
        }
    }
}
