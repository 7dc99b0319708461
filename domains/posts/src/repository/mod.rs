//! Like storage for the Posts domain

pub mod likes;
pub mod memory;

pub use likes::{LikeStore, PgLikeStore};
pub use memory::InMemoryLikeStore;
