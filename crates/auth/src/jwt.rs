//! JWT issuing, validation and token extraction helpers

use axum::http::HeaderValue;
use chrono::{TimeDelta, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::claims::IdentityClaims;
use crate::config::AuthConfig;
use crate::error::AuthError;

const BEARER_PREFIX: &str = "Bearer ";

/// Issue a signed token for `subject_id` that expires `ttl` from now
pub fn issue_token(
    subject_id: i64,
    email: &str,
    ttl: TimeDelta,
    config: &AuthConfig,
) -> Result<String, AuthError> {
    issue_token_at(subject_id, email, ttl, Utc::now().timestamp(), config)
}

/// Issue a signed token as if the current time were `now`
pub fn issue_token_at(
    subject_id: i64,
    email: &str,
    ttl: TimeDelta,
    now: i64,
    config: &AuthConfig,
) -> Result<String, AuthError> {
    let secret = config.secret().ok_or(AuthError::MissingSecret)?;

    let claims = IdentityClaims {
        user_id: subject_id,
        email: email.to_string(),
        iat: Some(now),
        exp: now + ttl.num_seconds(),
    };

    let header = Header::new(Algorithm::HS256);
    let encoding_key = EncodingKey::from_secret(secret.as_bytes());

    encode(&header, &claims, &encoding_key).map_err(|e| {
        tracing::error!(error = %e, user_id = subject_id, "Failed to sign token");
        AuthError::TokenIssueFailed
    })
}

/// Validate a token against the wall clock
pub fn validate_jwt_token(token: &str, config: &AuthConfig) -> Result<IdentityClaims, AuthError> {
    validate_jwt_token_at(token, config, Utc::now().timestamp())
}

/// Validate signature and structure, then check expiry against `now`.
///
/// Expiry is checked here rather than by `jsonwebtoken` so the boundary is
/// exact: a token is accepted while `now <= exp`, with no leeway.
pub fn validate_jwt_token_at(
    token: &str,
    config: &AuthConfig,
    now: i64,
) -> Result<IdentityClaims, AuthError> {
    let secret = config.secret().ok_or(AuthError::MissingSecret)?;

    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp"]);

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());

    let token_data = decode::<IdentityClaims>(token, &decoding_key, &validation).map_err(|e| {
        tracing::debug!(error = %e, "JWT validation failed");
        AuthError::InvalidToken
    })?;

    if !token_data.claims.is_valid_at(now) {
        tracing::debug!(exp = token_data.claims.exp, now, "JWT expired");
        return Err(AuthError::InvalidToken);
    }

    Ok(token_data.claims)
}

/// Extract the token candidate from an Authorization header.
///
/// A `"Bearer "` prefix is stripped when something follows it; any other
/// value is used as-is.
pub(crate) fn extract_bearer_token(header: &HeaderValue) -> Result<String, AuthError> {
    let header_str = header
        .to_str()
        .map_err(|_| AuthError::InvalidAuthorizationFormat)?;

    if header_str.is_empty() {
        return Err(AuthError::MissingAuthorization);
    }

    let token = match header_str.strip_prefix(BEARER_PREFIX) {
        Some(rest) if !rest.is_empty() => rest,
        _ => header_str,
    };

    Ok(token.to_string())
}
