//! Service context - dependency container for services
//!
//! Holds the repositories, the classification client and the error reporter
//! a spam check needs.

use std::sync::Arc;

use chatter_common::ErrorReporter;
use chatter_core::traits::{ForumContentRepository, SpamCheckRepository};
use chatter_db::PgPool;

use crate::ai::ChatCompletions;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Absent when the repositories are not database backed
    pool: Option<PgPool>,

    // Repositories
    spam_check_repo: Arc<dyn SpamCheckRepository>,
    content_repo: Arc<dyn ForumContentRepository>,

    // Classification
    completions: Arc<dyn ChatCompletions>,

    // Error channel
    reporter: Arc<dyn ErrorReporter>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: Option<PgPool>,
        spam_check_repo: Arc<dyn SpamCheckRepository>,
        content_repo: Arc<dyn ForumContentRepository>,
        completions: Arc<dyn ChatCompletions>,
        reporter: Arc<dyn ErrorReporter>,
    ) -> Self {
        Self {
            pool,
            spam_check_repo,
            content_repo,
            completions,
            reporter,
        }
    }

    /// Get the PostgreSQL connection pool, if any
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    /// Get the spam check repository
    pub fn spam_check_repo(&self) -> &dyn SpamCheckRepository {
        self.spam_check_repo.as_ref()
    }

    /// Get the forum content repository
    pub fn content_repo(&self) -> &dyn ForumContentRepository {
        self.content_repo.as_ref()
    }

    /// Get the chat-completion client
    pub fn completions(&self) -> &dyn ChatCompletions {
        self.completions.as_ref()
    }

    /// Get the error reporter
    pub fn reporter(&self) -> &dyn ErrorReporter {
        self.reporter.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("repositories", &"...")
            .field("completions", &"ChatCompletions")
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    spam_check_repo: Option<Arc<dyn SpamCheckRepository>>,
    content_repo: Option<Arc<dyn ForumContentRepository>>,
    completions: Option<Arc<dyn ChatCompletions>>,
    reporter: Option<Arc<dyn ErrorReporter>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn spam_check_repo(mut self, repo: Arc<dyn SpamCheckRepository>) -> Self {
        self.spam_check_repo = Some(repo);
        self
    }

    pub fn content_repo(mut self, repo: Arc<dyn ForumContentRepository>) -> Self {
        self.content_repo = Some(repo);
        self
    }

    pub fn completions(mut self, completions: Arc<dyn ChatCompletions>) -> Self {
        self.completions = Some(completions);
        self
    }

    pub fn reporter(mut self, reporter: Arc<dyn ErrorReporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::MissingDependency` naming the first one not provided
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool,
            self.spam_check_repo
                .ok_or(ServiceError::MissingDependency("spam_check_repo"))?,
            self.content_repo
                .ok_or(ServiceError::MissingDependency("content_repo"))?,
            self.completions
                .ok_or(ServiceError::MissingDependency("completions"))?,
            self.reporter
                .ok_or(ServiceError::MissingDependency("reporter"))?,
        ))
    }
}
