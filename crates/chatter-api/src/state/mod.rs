//! State shared by every handler

use std::fmt;
use std::sync::Arc;

use chatter_common::AppConfig;
use chatter_service::{ServiceContext, SpamCheckQueue};

/// Cheap to clone: the context and config sit behind `Arc`s and the queue
/// handle is a channel sender.
///
/// The worker pool stops once the last clone is dropped, because that
/// closes the queue.
#[derive(Clone)]
pub struct AppState {
    service_context: Arc<ServiceContext>,
    queue: SpamCheckQueue,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(
        service_context: Arc<ServiceContext>,
        queue: SpamCheckQueue,
        config: AppConfig,
    ) -> Self {
        Self {
            service_context,
            queue,
            config: Arc::new(config),
        }
    }

    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Producer side of the spam check queue
    pub fn queue(&self) -> &SpamCheckQueue {
        &self.queue
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &self.service_context)
            .field("queue_closed", &self.queue.is_closed())
            .field("app", &self.config.app.name)
            .finish_non_exhaustive()
    }
}
