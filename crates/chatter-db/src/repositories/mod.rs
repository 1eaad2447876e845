//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in chatter-core.

mod error;
mod forum_content;
mod spam_check;

pub use forum_content::PgForumContentRepository;
pub use spam_check::PgSpamCheckRepository;
