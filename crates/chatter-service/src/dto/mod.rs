//! Data transfer objects for API requests and responses

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{EnqueueSpamCheckRequest, ListSpamChecksQuery};
pub use responses::{HealthChecks, HealthResponse, ReadinessResponse, SpamCheckResponse};
