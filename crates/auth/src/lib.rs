//! Authentication gate for Pulse services
//!
//! Provides JWT issuing and validation plus an axum extractor that works
//! with any domain state implementing `FromRef<S>` for `AuthBackend`.

mod backend;
mod claims;
mod config;
mod context;
mod error;
mod extractors;
mod jwt;

pub use backend::AuthBackend;
pub use claims::IdentityClaims;
pub use config::AuthConfig;
pub use context::AuthContext;
pub use error::AuthError;
pub use extractors::AuthUser;
pub use jwt::{issue_token, issue_token_at, validate_jwt_token, validate_jwt_token_at};
