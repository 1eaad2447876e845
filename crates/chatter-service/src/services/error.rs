//! Service layer error types

use chatter_common::{domain_status, AppError};
use chatter_core::DomainError;

use crate::ai::AiClientError;

/// Errors raised while running or querying spam checks
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Rule violation, unknown check, or repository failure
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The classification endpoint could not be reached
    #[error(transparent)]
    Ai(#[from] AiClientError),

    /// Malformed query
    #[error("Validation error: {0}")]
    Validation(String),

    /// `ServiceContextBuilder::build` was missing a dependency
    #[error("Service context is missing {0}")]
    MissingDependency(&'static str),

    /// Spam was removed but the completed record could not be written
    #[error("{subject} was deleted but the result could not be saved: {source}")]
    UnsavedRemoval {
        subject: String,
        #[source]
        source: Box<ServiceError>,
    },
}

impl ServiceError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => domain_status(e),
            Self::Ai(_) => 502,
            Self::Validation(_) => 400,
            Self::MissingDependency(_) => 500,
            Self::UnsavedRemoval { source, .. } => source.status_code(),
        }
    }

    /// Stable machine-readable code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Domain(e) => e.code(),
            Self::Ai(e) => e.code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::MissingDependency(_) => "CONFIG_ERROR",
            Self::UnsavedRemoval { source, .. } => source.error_code(),
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::Ai(e) => AppError::ExternalService(e.to_string()),
            ServiceError::Validation(msg) => AppError::Validation(msg),
            ServiceError::MissingDependency(name) => {
                AppError::Config(format!("Service context is missing {name}"))
            }
            err @ ServiceError::UnsavedRemoval { .. } => AppError::Database(err.to_string()),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
