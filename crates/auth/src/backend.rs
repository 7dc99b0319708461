//! Concrete authentication backend
//!
//! Token verification is stateless: the backend holds only the shared
//! secret and token lifetime, so cloning it per request is cheap.

use crate::config::AuthConfig;
use crate::context::AuthContext;
use crate::error::AuthError;
use crate::jwt;

/// Concrete authentication backend.
///
/// Domain states expose this via `FromRef`:
/// ```ignore
/// impl FromRef<MyDomainState> for AuthBackend {
///     fn from_ref(state: &MyDomainState) -> Self {
///         state.auth.clone()
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthBackend {
    config: AuthConfig,
}

impl AuthBackend {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Mint a token for a user with the configured lifetime
    pub fn issue_token(&self, subject_id: i64, email: &str) -> Result<String, AuthError> {
        jwt::issue_token(subject_id, email, self.config.token_ttl, &self.config)
    }

    /// Verify a token candidate and build the request's auth context
    pub fn authenticate_jwt(&self, token: &str) -> Result<AuthContext, AuthError> {
        let claims = jwt::validate_jwt_token(token, &self.config)?;
        Ok(AuthContext::new(claims, token.to_string()))
    }
}
