//! Consumer side of the queue

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{error, info};

use crate::services::{ServiceContext, SpamCheckService};

use super::producer::SpamCheckReceiver;

/// Runs queued spam checks, at most `concurrency` at a time
pub struct SpamCheckWorker {
    ctx: Arc<ServiceContext>,
    concurrency: usize,
}

impl SpamCheckWorker {
    pub fn new(ctx: Arc<ServiceContext>, concurrency: usize) -> Self {
        Self {
            ctx,
            concurrency: concurrency.max(1),
        }
    }

    /// Consume jobs until every producer is dropped, then wait for in-flight
    /// checks to finish
    pub async fn run(self, mut receiver: SpamCheckReceiver) {
        let permits = Arc::new(Semaphore::new(self.concurrency));
        let mut tasks = JoinSet::new();

        info!(concurrency = self.concurrency, "Spam check worker started");

        while let Some(job) = receiver.recv().await {
            // Waiting here leaves further jobs in the channel
            let Ok(permit) = permits.clone().acquire_owned().await else {
                break;
            };
            let ctx = self.ctx.clone();
            tasks.spawn(async move {
                let _permit = permit;
                SpamCheckService::new(&ctx).handle(&job).await;
            });

            while let Some(joined) = tasks.try_join_next() {
                log_join(joined);
            }
        }

        info!(in_flight = tasks.len(), "Spam check queue closed, draining");
        while let Some(joined) = tasks.join_next().await {
            log_join(joined);
        }
        info!("Spam check worker stopped");
    }
}

fn log_join(joined: Result<(), tokio::task::JoinError>) {
    if let Err(e) = joined {
        error!(error = %e, "Spam check task aborted");
    }
}
