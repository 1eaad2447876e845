//! Spam check job - the task descriptor handed from producer to worker

use serde::{Deserialize, Serialize};

use super::subject::{Subject, SubjectType};

/// One unit of queued work: a piece of forum content awaiting classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpamCheckJob {
    pub subject_type: SubjectType,
    pub subject_id: i64,
    pub content: String,
    pub title: Option<String>,
}

impl SpamCheckJob {
    pub fn new(
        subject_type: SubjectType,
        subject_id: i64,
        content: impl Into<String>,
        title: Option<String>,
    ) -> Self {
        Self {
            subject_type,
            subject_id,
            content: content.into(),
            title,
        }
    }

    /// Job for a freshly created discussion
    pub fn discussion(id: i64, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(SubjectType::Discussion, id, content, Some(title.into()))
    }

    /// Job for a freshly created reply
    pub fn post(id: i64, content: impl Into<String>) -> Self {
        Self::new(SubjectType::Post, id, content, None)
    }

    #[inline]
    pub fn subject(&self) -> Subject {
        Subject::new(self.subject_type, self.subject_id)
    }

    /// Text the classifier sees for this job
    pub fn check_text(&self) -> String {
        self.subject().check_text(self.title.as_deref(), &self.content)
    }
}
