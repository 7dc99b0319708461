//! JWT claims types

use serde::{Deserialize, Serialize};

/// Identity claims carried by every token issued at login.
///
/// Field names match the tokens minted by the auth service, so tokens
/// issued elsewhere in the system verify here unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityClaims {
    /// Subject (numeric user ID)
    pub user_id: i64,
    /// Email
    #[serde(default)]
    pub email: String,
    /// Issued at (unix seconds). Older issuers omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Expires at (unix seconds)
    pub exp: i64,
}

impl IdentityClaims {
    /// Whether the claims are still valid at `now`. Expiry itself is valid.
    pub fn is_valid_at(&self, now: i64) -> bool {
        now <= self.exp
    }
}
