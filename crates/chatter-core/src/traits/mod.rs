//! Repository traits (ports)

mod repositories;

pub use repositories::{ForumContentRepository, RepoResult, SpamCheckQuery, SpamCheckRepository};
