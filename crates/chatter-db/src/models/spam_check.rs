//! Spam check database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the chatter_spam_checks table
#[derive(Debug, Clone, FromRow)]
pub struct SpamCheckModel {
    pub id: Uuid,
    pub subject_type: String,
    pub subject_id: i64,
    pub title: Option<String>,
    pub content: String,
    pub is_spam: Option<bool>,
    pub spam_reason: Option<String>,
    pub status: String,
    pub error: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,
    pub processing_time_seconds: Option<f64>,
    pub metadata: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
