//! # chatter-service
//!
//! Application layer: the chat-completion classification client, the spam
//! check orchestrator, the in-process job queue with its worker pool, and the
//! DTOs the HTTP layer exposes.

pub mod ai;
pub mod dto;
pub mod queue;
pub mod services;

pub use ai::{
    classify, parse_verdict, AiClientError, ChatCompletions, ChatMessage, ChatRole, OpenAiClient,
    SPAM_DETECTION_PROMPT,
};
pub use dto::{
    EnqueueSpamCheckRequest, HealthChecks, HealthResponse, ListSpamChecksQuery, ReadinessResponse,
    SpamCheckResponse,
};
pub use queue::{spam_check_queue, EnqueueError, SpamCheckQueue, SpamCheckReceiver, SpamCheckWorker};
pub use services::{
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, SpamCheckService,
};
