//! Spam check service
//!
//! Runs one classification attempt per job and answers operational queries
//! about recorded checks.

use std::time::Instant;

use chatter_core::entities::{SpamCheck, SpamCheckJob, Verdict};
use chatter_core::DomainError;
use chatter_core::traits::SpamCheckQuery;
use chrono::Utc;
use tracing::{info, instrument, Level};
use uuid::Uuid;

use crate::ai::classify;
use crate::dto::{ListSpamChecksQuery, SpamCheckResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Spam check service
pub struct SpamCheckService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SpamCheckService<'a> {
    /// Create a new SpamCheckService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Run a single spam check for a queued job.
    ///
    /// Every error is recorded on the check and handed to the error reporter;
    /// nothing is returned to the caller but the final record. `None` means
    /// the record itself could not be created or finalised.
    #[instrument(skip(self, job), fields(subject = %job.subject()))]
    pub async fn handle(&self, job: &SpamCheckJob) -> Option<SpamCheck> {
        let started = Instant::now();

        let mut check = SpamCheck::new(job);
        if let Err(e) = check.begin_processing() {
            self.report(&ServiceError::from(e), job);
            return None;
        }
        if let Err(e) = self.ctx.spam_check_repo().create(&check).await {
            self.report(&ServiceError::from(e), job);
            return None;
        }

        let outcome = match self.classify_and_enforce(job).await {
            Ok(verdict) => self
                .complete(&check, &verdict, started)
                .await
                .map_err(|e| {
                    if verdict.is_spam {
                        ServiceError::UnsavedRemoval {
                            subject: job.subject().to_string(),
                            source: Box::new(e),
                        }
                    } else {
                        e
                    }
                }),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(completed) => Some(completed),
            Err(e) => self.fail(check, &e, job, started).await,
        }
    }

    /// Classify the job's text and remove the subject if it is spam
    async fn classify_and_enforce(&self, job: &SpamCheckJob) -> ServiceResult<Verdict> {
        let verdict = classify(self.ctx.completions(), &job.check_text()).await?;

        if verdict.is_spam {
            let subject = job.subject();
            let removed = subject.delete_from(self.ctx.content_repo()).await?;
            info!(%subject, removed, reason = %verdict.reason, "Spam content deleted");
        }

        Ok(verdict)
    }

    async fn complete(
        &self,
        check: &SpamCheck,
        verdict: &Verdict,
        started: Instant,
    ) -> ServiceResult<SpamCheck> {
        let mut completed = check.clone();
        completed.complete(verdict, Utc::now(), started.elapsed())?;
        self.ctx.spam_check_repo().update(&completed).await?;

        info!(
            check_id = %completed.id,
            is_spam = verdict.is_spam,
            processing_time_seconds = completed.processing_time_seconds,
            "Spam check completed"
        );
        Ok(completed)
    }

    async fn fail(
        &self,
        mut check: SpamCheck,
        error: &ServiceError,
        job: &SpamCheckJob,
        started: Instant,
    ) -> Option<SpamCheck> {
        self.report(error, job);

        if let Err(e) = check.fail(error.to_string(), Utc::now(), started.elapsed()) {
            self.ctx.reporter().report(&e);
            return None;
        }
        match self.ctx.spam_check_repo().update(&check).await {
            Ok(()) => Some(check),
            Err(e) => {
                self.ctx.reporter().report(&e);
                None
            }
        }
    }

    fn report(&self, error: &ServiceError, job: &SpamCheckJob) {
        let reporter = self.ctx.reporter();
        reporter.log(
            Level::ERROR,
            &format!("Spam check failed for {}: {error}", job.subject()),
        );
        reporter.report(error);
    }

    /// Get a single check by id
    #[instrument(skip(self))]
    pub async fn get(&self, check_id: Uuid) -> ServiceResult<SpamCheckResponse> {
        let check = self
            .ctx
            .spam_check_repo()
            .find_by_id(check_id)
            .await?
            .ok_or(DomainError::SpamCheckNotFound(check_id))?;

        Ok(SpamCheckResponse::from(check))
    }

    /// List checks, either for one subject or across the table
    #[instrument(skip(self))]
    pub async fn list(&self, query: ListSpamChecksQuery) -> ServiceResult<Vec<SpamCheckResponse>> {
        let limit = query.limit();

        let checks = match (query.subject_type, query.subject_id) {
            (Some(subject_type), Some(subject_id)) => self
                .ctx
                .spam_check_repo()
                .find_by_subject(subject_type, subject_id)
                .await?
                .into_iter()
                .filter(|c| query.status.is_none_or(|s| c.status == s))
                .filter(|c| query.is_spam.is_none_or(|s| c.is_spam == Some(s)))
                .take(usize::try_from(limit).unwrap_or(usize::MAX))
                .collect(),
            (None, None) => {
                self.ctx
                    .spam_check_repo()
                    .list(SpamCheckQuery {
                        status: query.status,
                        is_spam: query.is_spam,
                        limit,
                    })
                    .await?
            }
            _ => {
                return Err(ServiceError::validation(
                    "subject_type and subject_id must be given together",
                ))
            }
        };

        Ok(checks.into_iter().map(SpamCheckResponse::from).collect())
    }
}
