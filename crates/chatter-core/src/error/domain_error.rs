//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

use crate::entities::SpamCheckStatus;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Spam check not found: {0}")]
    SpamCheckNotFound(Uuid),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Invalid spam check transition: {from} -> {to}")]
    InvalidStatusTransition {
        from: SpamCheckStatus,
        to: SpamCheckStatus,
    },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::SpamCheckNotFound(_) => "UNKNOWN_SPAM_CHECK",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidStatusTransition { .. } => "INVALID_STATUS_TRANSITION",
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::SpamCheckNotFound(_))
    }
}
