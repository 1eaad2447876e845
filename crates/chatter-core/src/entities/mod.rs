//! Domain entities - core business objects

mod job;
mod spam_check;
mod subject;
mod verdict;

pub use job::SpamCheckJob;
pub use spam_check::{SpamCheck, SpamCheckStatus};
pub use subject::{Subject, SubjectType, SubjectTypeParseError};
pub use verdict::{TokenUsage, Verdict, UNPROCESSABLE_REASON};
