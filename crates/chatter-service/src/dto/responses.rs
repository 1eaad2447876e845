//! Response DTOs for API endpoints

use chatter_core::entities::{SpamCheckStatus, SubjectType};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A recorded spam check
#[derive(Debug, Clone, Serialize)]
pub struct SpamCheckResponse {
    pub id: Uuid,
    pub subject_type: SubjectType,
    pub subject_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub content: String,
    pub is_spam: Option<bool>,
    pub spam_reason: Option<String>,
    pub status: SpamCheckStatus,
    pub error: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,
    pub processing_time_seconds: Option<f64>,
    pub metadata: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Health Check Responses
// ============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub queue: String,
}

impl ReadinessResponse {
    /// `database` is `None` when the service runs without a pool
    pub fn ready(database_healthy: Option<bool>, queue_open: bool) -> Self {
        let database = match database_healthy {
            Some(true) => "healthy",
            Some(false) => "unhealthy",
            None => "not_configured",
        };
        let all_healthy = database_healthy != Some(false) && queue_open;
        Self {
            status: if all_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: database.to_string(),
                queue: if queue_open { "open" } else { "closed" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
