//! SpamCheck entity <-> model mapper

use chatter_core::entities::{SpamCheck, SpamCheckStatus, SubjectType};
use chatter_core::DomainError;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::SpamCheckModel;

/// Convert SpamCheckModel to SpamCheck entity
impl TryFrom<SpamCheckModel> for SpamCheck {
    type Error = DomainError;

    fn try_from(model: SpamCheckModel) -> Result<Self, Self::Error> {
        let subject_type = model
            .subject_type
            .parse::<SubjectType>()
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;
        let status = model.status.parse::<SpamCheckStatus>()?;

        Ok(SpamCheck {
            id: model.id,
            subject_type,
            subject_id: model.subject_id,
            title: model.title,
            content: model.content,
            is_spam: model.is_spam,
            spam_reason: model.spam_reason,
            status,
            error: model.error,
            completed_at: model.completed_at,
            processing_time_seconds: model.processing_time_seconds,
            metadata: model.metadata,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Values for inserting a new check row
pub struct SpamCheckInsert<'a> {
    pub id: Uuid,
    pub subject_type: &'static str,
    pub subject_id: i64,
    pub title: Option<&'a str>,
    pub content: &'a str,
    pub status: &'static str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> SpamCheckInsert<'a> {
    pub fn new(check: &'a SpamCheck) -> Self {
        Self {
            id: check.id,
            subject_type: check.subject_type.as_str(),
            subject_id: check.subject_id,
            title: check.title.as_deref(),
            content: &check.content,
            status: check.status.as_str(),
            created_at: check.created_at,
            updated_at: check.updated_at,
        }
    }
}

/// Values written by a terminal transition
pub struct SpamCheckUpdate<'a> {
    pub id: Uuid,
    pub is_spam: Option<bool>,
    pub spam_reason: Option<&'a str>,
    pub status: &'static str,
    pub error: Option<&'a str>,
    pub completed_at: Option<DateTime<Utc>>,
    pub processing_time_seconds: Option<f64>,
    pub metadata: Option<&'a serde_json::Value>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> SpamCheckUpdate<'a> {
    pub fn new(check: &'a SpamCheck) -> Self {
        Self {
            id: check.id,
            is_spam: check.is_spam,
            spam_reason: check.spam_reason.as_deref(),
            status: check.status.as_str(),
            error: check.error.as_deref(),
            completed_at: check.completed_at,
            processing_time_seconds: check.processing_time_seconds,
            metadata: check.metadata.as_ref(),
            updated_at: check.updated_at,
        }
    }
}
