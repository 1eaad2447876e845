//! PostgreSQL implementation of ForumContentRepository
//!
//! Works against the forum's own `chatter_discussion` and `chatter_post`
//! tables. Those tables are owned by the forum, not by this crate's
//! migrations.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use chatter_core::traits::{ForumContentRepository, RepoResult};

use super::error::map_db_error;

/// PostgreSQL implementation of ForumContentRepository
#[derive(Clone)]
pub struct PgForumContentRepository {
    pool: PgPool,
}

impl PgForumContentRepository {
    /// Create a new PgForumContentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ForumContentRepository for PgForumContentRepository {
    #[instrument(skip(self))]
    async fn delete_discussion_and_replies(&self, discussion_id: i64) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let replies = sqlx::query("DELETE FROM chatter_post WHERE chatter_discussion_id = $1")
            .bind(discussion_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let discussion = sqlx::query("DELETE FROM chatter_discussion WHERE id = $1")
            .bind(discussion_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        debug!(
            replies = replies.rows_affected(),
            found = discussion.rows_affected() > 0,
            "Deleted discussion"
        );

        Ok(discussion.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete_post(&self, post_id: i64) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM chatter_post WHERE id = $1")
            .bind(post_id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
