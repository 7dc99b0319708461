//! In-memory like store for tests and local development

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use pulse_common::RepositoryError;

use super::likes::LikeStore;

#[derive(Debug, Default)]
struct Tables {
    /// post id -> author id
    posts: HashMap<i64, i64>,
    /// post id -> liker ids in insertion order
    likes: HashMap<i64, Vec<i64>>,
    writes: usize,
}

/// Mutex-guarded like store with the same semantics as `PgLikeStore`.
///
/// Two switches simulate storage outages: `set_unavailable` fails every
/// call, `set_failing_writes` fails only `add` and `remove`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLikeStore {
    tables: Arc<Mutex<Tables>>,
    unavailable: Arc<AtomicBool>,
    failing_writes: Arc<AtomicBool>,
}

impl InMemoryLikeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a post owned by `author_id`.
    pub fn with_post(self, post_id: i64, author_id: i64) -> Self {
        self.insert_post(post_id, author_id);
        self
    }

    pub fn insert_post(&self, post_id: i64, author_id: i64) {
        if let Ok(mut tables) = self.tables.lock() {
            tables.posts.insert(post_id, author_id);
        }
    }

    /// Delete a post together with its likes.
    pub fn delete_post(&self, post_id: i64) {
        if let Ok(mut tables) = self.tables.lock() {
            tables.posts.remove(&post_id);
            tables.likes.remove(&post_id);
        }
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn set_failing_writes(&self, failing: bool) {
        self.failing_writes.store(failing, Ordering::SeqCst);
    }

    /// Number of `add`/`remove` calls that reached storage
    pub fn write_count(&self) -> usize {
        self.tables.lock().map(|t| t.writes).unwrap_or_default()
    }

    fn tables(&self) -> Result<MutexGuard<'_, Tables>, RepositoryError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(RepositoryError::Unavailable(
                "like store is unavailable".to_string(),
            ));
        }
        self.tables
            .lock()
            .map_err(|e| RepositoryError::Unavailable(format!("like store lock poisoned: {e}")))
    }

    fn tables_for_write(&self) -> Result<MutexGuard<'_, Tables>, RepositoryError> {
        if self.failing_writes.load(Ordering::SeqCst) {
            return Err(RepositoryError::Unavailable(
                "like store rejected the write".to_string(),
            ));
        }
        let mut tables = self.tables()?;
        tables.writes += 1;
        Ok(tables)
    }
}

#[async_trait::async_trait]
impl LikeStore for InMemoryLikeStore {
    async fn post_owner(&self, post_id: i64) -> Result<Option<i64>, RepositoryError> {
        Ok(self.tables()?.posts.get(&post_id).copied())
    }

    async fn add(&self, post_id: i64, user_id: i64) -> Result<(), RepositoryError> {
        let mut tables = self.tables_for_write()?;
        if !tables.posts.contains_key(&post_id) {
            return Err(RepositoryError::InvalidData(format!(
                "post {} does not exist",
                post_id
            )));
        }

        let likers = tables.likes.entry(post_id).or_default();
        if !likers.contains(&user_id) {
            likers.push(user_id);
        }
        Ok(())
    }

    async fn remove(&self, post_id: i64, user_id: i64) -> Result<(), RepositoryError> {
        let mut tables = self.tables_for_write()?;
        if let Some(likers) = tables.likes.get_mut(&post_id) {
            likers.retain(|id| *id != user_id);
        }
        Ok(())
    }

    async fn list_likers(&self, post_id: i64) -> Result<Vec<i64>, RepositoryError> {
        Ok(self
            .tables()?
            .likes
            .get(&post_id)
            .cloned()
            .unwrap_or_default())
    }
}
