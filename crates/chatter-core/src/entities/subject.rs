//! Subject - the forum content a spam check is about

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::traits::{ForumContentRepository, RepoResult};

/// Kind of forum content that can be checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectType {
    /// A discussion (thread opener with a title)
    Discussion,
    /// A reply posted inside a discussion
    Post,
}

impl SubjectType {
    /// Database / wire representation
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Discussion => "discussion",
            Self::Post => "post",
        }
    }
}

impl fmt::Display for SubjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a SubjectType from string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid subject type: {0}")]
pub struct SubjectTypeParseError(pub String);

impl FromStr for SubjectType {
    type Err = SubjectTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "discussion" => Ok(Self::Discussion),
            "post" => Ok(Self::Post),
            other => Err(SubjectTypeParseError(other.to_string())),
        }
    }
}

/// A concrete discussion or post, identified within its own table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    Discussion(i64),
    Post(i64),
}

impl Subject {
    /// Build a subject from its type tag and id
    pub const fn new(subject_type: SubjectType, id: i64) -> Self {
        match subject_type {
            SubjectType::Discussion => Self::Discussion(id),
            SubjectType::Post => Self::Post(id),
        }
    }

    #[inline]
    pub const fn subject_type(&self) -> SubjectType {
        match self {
            Self::Discussion(_) => SubjectType::Discussion,
            Self::Post(_) => SubjectType::Post,
        }
    }

    #[inline]
    pub const fn id(&self) -> i64 {
        match self {
            Self::Discussion(id) | Self::Post(id) => *id,
        }
    }

    /// Text submitted to the classifier.
    ///
    /// Discussions are classified on their title and body joined by a newline;
    /// posts on their body alone.
    pub fn check_text(&self, title: Option<&str>, content: &str) -> String {
        match self {
            Self::Discussion(_) => format!("{}\n{}", title.unwrap_or_default(), content),
            Self::Post(_) => content.to_string(),
        }
    }

    /// Remove the subject from the forum.
    ///
    /// A discussion takes all of its replies with it. Returns `false` when
    /// there was nothing left to delete.
    pub async fn delete_from(&self, content: &dyn ForumContentRepository) -> RepoResult<bool> {
        match *self {
            Self::Discussion(id) => content.delete_discussion_and_replies(id).await,
            Self::Post(id) => content.delete_post(id).await,
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.subject_type(), self.id())
    }
}
