//! In-process spam check queue
//!
//! Producers hand a [`SpamCheckJob`](chatter_core::SpamCheckJob) to a bounded
//! channel and move on. A [`SpamCheckWorker`] consumes the channel and runs
//! each job once. Delivery is at most once: a job dropped on a full queue or
//! lost with the process is never retried.

mod producer;
mod worker;

pub use producer::{spam_check_queue, EnqueueError, SpamCheckQueue, SpamCheckReceiver};
pub use worker::SpamCheckWorker;
