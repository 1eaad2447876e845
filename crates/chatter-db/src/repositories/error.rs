//! Error handling utilities for repositories

use chatter_core::DomainError;
use sqlx::Error as SqlxError;
use uuid::Uuid;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Create a "spam check not found" error
pub fn spam_check_not_found(id: Uuid) -> DomainError {
    DomainError::SpamCheckNotFound(id)
}
