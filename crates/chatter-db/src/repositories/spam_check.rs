//! PostgreSQL implementation of SpamCheckRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use chatter_core::entities::{SpamCheck, SubjectType};
use chatter_core::traits::{RepoResult, SpamCheckQuery, SpamCheckRepository};

use crate::mappers::{SpamCheckInsert, SpamCheckUpdate};
use crate::models::SpamCheckModel;

use super::error::{map_db_error, spam_check_not_found};

/// Upper bound for a single listing
const MAX_LIST_LIMIT: i64 = 200;

/// PostgreSQL implementation of SpamCheckRepository
#[derive(Clone)]
pub struct PgSpamCheckRepository {
    pool: PgPool,
}

impl PgSpamCheckRepository {
    /// Create a new PgSpamCheckRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn into_entities(rows: Vec<SpamCheckModel>) -> RepoResult<Vec<SpamCheck>> {
    rows.into_iter().map(SpamCheck::try_from).collect()
}

#[async_trait]
impl SpamCheckRepository for PgSpamCheckRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<SpamCheck>> {
        let result = sqlx::query_as::<_, SpamCheckModel>(
            r#"
            SELECT id, subject_type, subject_id, title, content, is_spam, spam_reason, status,
                   error, completed_at, processing_time_seconds, metadata, created_at, updated_at
            FROM chatter_spam_checks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(SpamCheck::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_subject(
        &self,
        subject_type: SubjectType,
        subject_id: i64,
    ) -> RepoResult<Vec<SpamCheck>> {
        let results = sqlx::query_as::<_, SpamCheckModel>(
            r#"
            SELECT id, subject_type, subject_id, title, content, is_spam, spam_reason, status,
                   error, completed_at, processing_time_seconds, metadata, created_at, updated_at
            FROM chatter_spam_checks
            WHERE subject_type = $1 AND subject_id = $2
            ORDER BY created_at DESC
            "#,
        )
        .bind(subject_type.as_str())
        .bind(subject_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        into_entities(results)
    }

    #[instrument(skip(self))]
    async fn list(&self, query: SpamCheckQuery) -> RepoResult<Vec<SpamCheck>> {
        let limit = query.limit.clamp(1, MAX_LIST_LIMIT);

        let results = sqlx::query_as::<_, SpamCheckModel>(
            r#"
            SELECT id, subject_type, subject_id, title, content, is_spam, spam_reason, status,
                   error, completed_at, processing_time_seconds, metadata, created_at, updated_at
            FROM chatter_spam_checks
            WHERE ($1::text IS NULL OR status = $1)
              AND ($2::boolean IS NULL OR is_spam = $2)
            ORDER BY created_at DESC
            LIMIT $3
            "#,
        )
        .bind(query.status.map(|s| s.as_str()))
        .bind(query.is_spam)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        into_entities(results)
    }

    #[instrument(skip(self, check), fields(check_id = %check.id))]
    async fn create(&self, check: &SpamCheck) -> RepoResult<()> {
        let insert = SpamCheckInsert::new(check);

        sqlx::query(
            r#"
            INSERT INTO chatter_spam_checks
                (id, subject_type, subject_id, title, content, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(insert.id)
        .bind(insert.subject_type)
        .bind(insert.subject_id)
        .bind(insert.title)
        .bind(insert.content)
        .bind(insert.status)
        .bind(insert.created_at)
        .bind(insert.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, check), fields(check_id = %check.id, status = %check.status))]
    async fn update(&self, check: &SpamCheck) -> RepoResult<()> {
        let update = SpamCheckUpdate::new(check);

        // Terminal rows are never rewritten
        let result = sqlx::query(
            r#"
            UPDATE chatter_spam_checks
            SET is_spam = $2, spam_reason = $3, status = $4, error = $5, completed_at = $6,
                processing_time_seconds = $7, metadata = $8, updated_at = $9
            WHERE id = $1 AND status = 'processing'
            "#,
        )
        .bind(update.id)
        .bind(update.is_spam)
        .bind(update.spam_reason)
        .bind(update.status)
        .bind(update.error)
        .bind(update.completed_at)
        .bind(update.processing_time_seconds)
        .bind(update.metadata)
        .bind(update.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(spam_check_not_found(check.id));
        }

        Ok(())
    }
}
