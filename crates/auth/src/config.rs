//! Authentication configuration

use chrono::TimeDelta;

/// Lifetime of tokens minted at login (72 hours)
const DEFAULT_TOKEN_TTL_SECONDS: i64 = 72 * 60 * 60;

/// Authentication configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// Shared HMAC secret. `None` means the service is misconfigured.
    pub jwt_secret: Option<String>,
    /// Lifetime applied by `AuthBackend::issue_token`
    pub token_ttl: TimeDelta,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "[REDACTED]"))
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}

impl AuthConfig {
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: Some(jwt_secret.into()),
            token_ttl: TimeDelta::seconds(DEFAULT_TOKEN_TTL_SECONDS),
        }
    }

    /// Create auth config from environment variables.
    ///
    /// A missing `JWT_SECRET` is not an error here: requests fail with 500
    /// until the secret is provided.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let jwt_secret = std::env::var("JWT_SECRET").ok().filter(|s| !s.is_empty());

        let token_ttl = parse_token_ttl(std::env::var("JWT_TTL_SECONDS").ok());

        if jwt_secret.is_none() {
            tracing::error!("JWT_SECRET is not configured; protected endpoints will fail");
        }

        Self {
            jwt_secret,
            token_ttl,
        }
    }

    /// The configured secret, if any
    pub(crate) fn secret(&self) -> Option<&str> {
        self.jwt_secret.as_deref().filter(|s| !s.is_empty())
    }
}

/// Token lifetime from a raw seconds value. Anything unparseable,
/// non-positive or out of `TimeDelta` range yields the default.
fn parse_token_ttl(raw: Option<String>) -> TimeDelta {
    raw.and_then(|v| v.parse::<i64>().ok())
        .filter(|secs| *secs > 0)
        .and_then(TimeDelta::try_seconds)
        .unwrap_or_else(|| TimeDelta::seconds(DEFAULT_TOKEN_TTL_SECONDS))
}
