//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{SpamCheck, SpamCheckStatus, SubjectType};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Spam Check Repository
// ============================================================================

/// Filter for operational listings of spam checks
#[derive(Debug, Clone)]
pub struct SpamCheckQuery {
    pub status: Option<SpamCheckStatus>,
    pub is_spam: Option<bool>,
    pub limit: i64,
}

impl Default for SpamCheckQuery {
    fn default() -> Self {
        Self {
            status: None,
            is_spam: None,
            limit: 50,
        }
    }
}

#[async_trait]
pub trait SpamCheckRepository: Send + Sync {
    /// Find a check by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<SpamCheck>>;

    /// All checks recorded for one subject, newest first
    async fn find_by_subject(
        &self,
        subject_type: SubjectType,
        subject_id: i64,
    ) -> RepoResult<Vec<SpamCheck>>;

    /// Newest checks matching the filter
    async fn list(&self, query: SpamCheckQuery) -> RepoResult<Vec<SpamCheck>>;

    /// Insert a new check row
    async fn create(&self, check: &SpamCheck) -> RepoResult<()>;

    /// Persist a terminal transition.
    ///
    /// Only applies while the stored row is still `processing`; otherwise
    /// fails with `SpamCheckNotFound`.
    async fn update(&self, check: &SpamCheck) -> RepoResult<()>;
}

// ============================================================================
// Forum Content Repository
// ============================================================================

/// Deletion side of the forum's discussion/post store.
///
/// Both operations are idempotent and return `false` when the target was
/// already gone.
#[async_trait]
pub trait ForumContentRepository: Send + Sync {
    /// Delete every reply of a discussion, then the discussion itself
    async fn delete_discussion_and_replies(&self, discussion_id: i64) -> RepoResult<bool>;

    /// Delete a single reply
    async fn delete_post(&self, post_id: i64) -> RepoResult<bool>;
}
