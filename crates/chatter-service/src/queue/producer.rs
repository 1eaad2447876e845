//! Producer side of the queue

use chatter_core::entities::{SpamCheckJob, SubjectType};
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{debug, error};

/// Why a job could not be queued
#[derive(Debug, thiserror::Error)]
pub enum EnqueueError {
    #[error("Spam check queue is full")]
    Full,

    #[error("Spam check queue is closed")]
    Closed,
}

/// Cloneable handle used to submit jobs
#[derive(Debug, Clone)]
pub struct SpamCheckQueue {
    sender: mpsc::Sender<SpamCheckJob>,
}

/// Consumer end, owned by a single [`SpamCheckWorker`](super::SpamCheckWorker)
#[derive(Debug)]
pub struct SpamCheckReceiver {
    receiver: mpsc::Receiver<SpamCheckJob>,
}

/// Create a queue holding at most `capacity` waiting jobs
pub fn spam_check_queue(capacity: usize) -> (SpamCheckQueue, SpamCheckReceiver) {
    let (sender, receiver) = mpsc::channel(capacity.max(1));
    (SpamCheckQueue { sender }, SpamCheckReceiver { receiver })
}

impl SpamCheckQueue {
    /// Fire-and-forget submission of new forum content.
    ///
    /// A job that cannot be queued is logged and dropped.
    pub fn enqueue(
        &self,
        subject_type: SubjectType,
        subject_id: i64,
        content: impl Into<String>,
        title: Option<String>,
    ) {
        let job = SpamCheckJob::new(subject_type, subject_id, content, title);
        if let Err(e) = self.try_enqueue(job) {
            error!(%subject_type, subject_id, error = %e, "Dropping spam check job");
        }
    }

    /// Submit a job, telling the caller if it was not accepted
    pub fn try_enqueue(&self, job: SpamCheckJob) -> Result<(), EnqueueError> {
        let subject = job.subject();
        match self.sender.try_send(job) {
            Ok(()) => {
                debug!(%subject, "Spam check queued");
                Ok(())
            }
            Err(TrySendError::Full(_)) => Err(EnqueueError::Full),
            Err(TrySendError::Closed(_)) => Err(EnqueueError::Closed),
        }
    }

    /// Whether the worker side has gone away
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

impl SpamCheckReceiver {
    /// Next job, or `None` once every producer is dropped and the queue is empty
    pub async fn recv(&mut self) -> Option<SpamCheckJob> {
        self.receiver.recv().await
    }
}
