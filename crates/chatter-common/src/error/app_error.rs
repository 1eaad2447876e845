//! Application error types shared by the service binary and the HTTP layer

use chatter_core::DomainError;

/// Errors that can reach the edge of the process: start-up failures and
/// failures of an HTTP request.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(String),

    /// The spam check queue refused a job
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    Database(String),

    /// The chat-completion endpoint failed at the transport level
    #[error("Classifier unavailable: {0}")]
    ExternalService(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// HTTP status for a domain error.
///
/// Shared by every layer that turns a `DomainError` into a response.
pub fn domain_status(err: &DomainError) -> u16 {
    match err {
        DomainError::SpamCheckNotFound(_) => 404,
        DomainError::ValidationError(_) => 400,
        DomainError::InvalidStatusTransition { .. } => 409,
        DomainError::DatabaseError(_) => 500,
    }
}

impl AppError {
    /// HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::NotFound(_) => 404,
            Self::ExternalService(_) => 502,
            Self::Unavailable(_) => 503,
            Self::Database(_) | Self::Config(_) | Self::Internal(_) => 500,
            Self::Domain(e) => domain_status(e),
        }
    }

    /// Stable machine-readable code
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Unavailable(_) => "QUEUE_UNAVAILABLE",
            Self::Database(_) => "DATABASE_ERROR",
            Self::ExternalService(_) => "AI_TRANSPORT_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Domain(e) => e.code(),
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
