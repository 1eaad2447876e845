//! Entity to DTO mappers

use chatter_core::entities::SpamCheck;

use super::responses::SpamCheckResponse;

impl From<SpamCheck> for SpamCheckResponse {
    fn from(check: SpamCheck) -> Self {
        Self {
            id: check.id,
            subject_type: check.subject_type,
            subject_id: check.subject_id,
            title: check.title,
            content: check.content,
            is_spam: check.is_spam,
            spam_reason: check.spam_reason,
            status: check.status,
            error: check.error,
            completed_at: check.completed_at,
            processing_time_seconds: check.processing_time_seconds,
            metadata: check.metadata,
            created_at: check.created_at,
            updated_at: check.updated_at,
        }
    }
}

impl From<&SpamCheck> for SpamCheckResponse {
    fn from(check: &SpamCheck) -> Self {
        Self::from(check.clone())
    }
}
