//! # chatter-core
//!
//! Domain layer for forum spam checks: the check record and its status
//! machine, the subjects being checked, and the repository ports the
//! infrastructure layer implements. No database or HTTP dependencies.

pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{
    SpamCheck, SpamCheckJob, SpamCheckStatus, Subject, SubjectType, SubjectTypeParseError,
    TokenUsage, Verdict, UNPROCESSABLE_REASON,
};
pub use error::DomainError;
pub use traits::{ForumContentRepository, RepoResult, SpamCheckQuery, SpamCheckRepository};
