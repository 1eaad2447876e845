//! Request DTOs for API endpoints

use chatter_core::entities::{SpamCheckJob, SpamCheckStatus, SubjectType};
use serde::Deserialize;
use validator::Validate;

/// Default page size for listings
pub const DEFAULT_LIST_LIMIT: i64 = 50;

/// Queue a spam check for newly created forum content
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EnqueueSpamCheckRequest {
    pub subject_type: SubjectType,

    #[validate(range(min = 1, message = "subject_id must be positive"))]
    pub subject_id: i64,

    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,

    pub title: Option<String>,
}

impl EnqueueSpamCheckRequest {
    /// Job descriptor for the queue. Posts carry no title.
    pub fn into_job(self) -> SpamCheckJob {
        let title = match self.subject_type {
            SubjectType::Discussion => self.title,
            SubjectType::Post => None,
        };
        SpamCheckJob::new(self.subject_type, self.subject_id, self.content, title)
    }
}

/// Query string of `GET /spam-checks`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListSpamChecksQuery {
    pub subject_type: Option<SubjectType>,
    pub subject_id: Option<i64>,
    pub status: Option<SpamCheckStatus>,
    pub is_spam: Option<bool>,
    pub limit: Option<i64>,
}

impl ListSpamChecksQuery {
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIST_LIMIT).clamp(1, 200)
    }
}
