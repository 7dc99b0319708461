//! API layer for the Posts domain
//!
//! Contains HTTP handlers, routes, and domain state definition.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::PostsState;
pub use routes::routes;
