//! SpamCheck entity - one classification attempt and its outcome

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use uuid::Uuid;

use super::job::SpamCheckJob;
use super::subject::{Subject, SubjectType};
use super::verdict::Verdict;
use crate::error::DomainError;

/// Lifecycle of a spam check.
///
/// Transitions run strictly `Pending -> Processing -> {Completed | Failed}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpamCheckStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Failed,
}

impl SpamCheckStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }

    /// `Completed` and `Failed` accept no further mutation
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

impl fmt::Display for SpamCheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpamCheckStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            other => Err(DomainError::ValidationError(format!(
                "invalid spam check status: {other}"
            ))),
        }
    }
}

/// SpamCheck entity
#[derive(Debug, Clone, PartialEq)]
pub struct SpamCheck {
    pub id: Uuid,
    pub subject_type: SubjectType,
    pub subject_id: i64,
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

impl SpamCheck {
    /// Create a pending check for a queued job
    pub fn new(job: &SpamCheckJob) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            subject_type: job.subject_type,
            subject_id: job.subject_id,
            title: job.title.clone(),
            content: job.content.clone(),
            is_spam: None,
            spam_reason: None,
            status: SpamCheckStatus::Pending,
            error: None,
            completed_at: None,
            processing_time_seconds: None,
            metadata: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn subject(&self) -> Subject {
        Subject::new(self.subject_type, self.subject_id)
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Move from `Pending` to `Processing`
    pub fn begin_processing(&mut self) -> Result<(), DomainError> {
        self.transition(SpamCheckStatus::Pending, SpamCheckStatus::Processing)?;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Record the verdict and close the check as `Completed`
    pub fn complete(
        &mut self,
        verdict: &Verdict,
        at: DateTime<Utc>,
        elapsed: Duration,
    ) -> Result<(), DomainError> {
        self.transition(SpamCheckStatus::Processing, SpamCheckStatus::Completed)?;
        self.is_spam = Some(verdict.is_spam);
        self.spam_reason = Some(verdict.reason.clone());
        self.metadata = verdict.metadata();
        self.stamp_terminal(at, elapsed);
        Ok(())
    }

    /// Record the failure message and close the check as `Failed`
    pub fn fail(
        &mut self,
        error: impl Into<String>,
        at: DateTime<Utc>,
        elapsed: Duration,
    ) -> Result<(), DomainError> {
        self.transition(SpamCheckStatus::Processing, SpamCheckStatus::Failed)?;
        self.error = Some(error.into());
        self.stamp_terminal(at, elapsed);
        Ok(())
    }

    fn transition(
        &mut self,
        expected: SpamCheckStatus,
        next: SpamCheckStatus,
    ) -> Result<(), DomainError> {
        if self.status != expected {
            return Err(DomainError::InvalidStatusTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }

    // completed_at never precedes created_at, even if the wall clock stepped back
    fn stamp_terminal(&mut self, at: DateTime<Utc>, elapsed: Duration) {
        let at = at.max(self.created_at);
        self.completed_at = Some(at);
        self.processing_time_seconds = Some(elapsed.as_secs_f64());
        self.updated_at = at;
    }
}
