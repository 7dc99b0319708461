//! Like store backed by PostgreSQL

use pulse_common::RepositoryError;
use sqlx::PgPool;

/// Persistent (post, user) like relation.
///
/// `add` and `remove` are idempotent. Uniqueness is enforced by the
/// storage engine, so concurrent adds of the same pair leave one row.
#[async_trait::async_trait]
pub trait LikeStore: Send + Sync {
    /// Author of the post, or `None` when the post does not exist
    async fn post_owner(&self, post_id: i64) -> Result<Option<i64>, RepositoryError>;

    async fn add(&self, post_id: i64, user_id: i64) -> Result<(), RepositoryError>;

    async fn remove(&self, post_id: i64, user_id: i64) -> Result<(), RepositoryError>;

    /// User ids that like the post, oldest like first
    async fn list_likers(&self, post_id: i64) -> Result<Vec<i64>, RepositoryError>;
}

#[derive(Clone)]
pub struct PgLikeStore {
    pool: PgPool,
}

impl PgLikeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl LikeStore for PgLikeStore {
    async fn post_owner(&self, post_id: i64) -> Result<Option<i64>, RepositoryError> {
        let owner = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT author_id
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(owner)
    }

    async fn add(&self, post_id: i64, user_id: i64) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO likes (post_id, user_id)
            VALUES ($1, $2)
            ON CONFLICT (post_id, user_id) DO NOTHING
            "#,
        )
        .bind(post_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn remove(&self, post_id: i64, user_id: i64) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            DELETE FROM likes
            WHERE post_id = $1 AND user_id = $2
            "#,
        )
        .bind(post_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_likers(&self, post_id: i64) -> Result<Vec<i64>, RepositoryError> {
        let likers = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT user_id
            FROM likes
            WHERE post_id = $1
            ORDER BY created_at, user_id
            "#,
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(likers)
    }
}
