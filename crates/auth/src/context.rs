//! Authorization context for authenticated requests

use crate::claims::IdentityClaims;

/// Verified identity of the caller, produced once per request by the gate.
///
/// Handlers receive this value directly and never look at the token's
/// payload themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: i64,
    pub email: String,
    /// The raw token as presented, without any `Bearer ` prefix
    pub token: String,
}

impl AuthContext {
    /// Create new auth context from verified claims and the token they came from
    pub fn new(claims: IdentityClaims, token: String) -> Self {
        Self {
            user_id: claims.user_id,
            email: claims.email,
            token,
        }
    }
}
