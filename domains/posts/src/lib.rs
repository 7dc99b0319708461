//! Posts domain: likes, like notifications, liker resolution

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{LikeAction, Liker, NotificationOutcome, ToggleOutcome};

// Re-export repository types
pub use repository::{InMemoryLikeStore, LikeStore, PgLikeStore};

// Re-export API types
pub use api::handlers::likes::{list_likes, toggle_like};
pub use api::routes;
pub use api::PostsState;
