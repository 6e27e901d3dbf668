//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// No record exists with the requested identifier
    #[error("Resource not found. Id {id}")]
    NotFound { id: String },

    /// Constraint violation reported by storage (foreign keys, unique columns)
    #[error("Integrity violation: {0}")]
    Integrity(String),

    /// Validation error with message
    #[error("Validation error: {0}")]
    Validation(String),

    /// Database/persistence error
    #[error("Database error: {0}")]
    Database(String),

    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn not_found(id: impl ToString) -> Self {
        Self::NotFound { id: id.to_string() }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

// Conversion from SeaORM errors (used in infrastructure layer)
impl From<DbErr> for DomainError {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(msg))
            | Some(SqlErr::UniqueConstraintViolation(msg)) => DomainError::Integrity(msg),
            _ => {
                let msg = e.to_string();
                if msg.contains("FOREIGN KEY constraint failed") {
                    DomainError::Integrity(msg)
                } else {
                    DomainError::Database(msg)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_embeds_id() {
        let err = DomainError::not_found(42);
        assert_eq!(err.to_string(), "Resource not found. Id 42");
    }

    #[test]
    fn test_not_found_accepts_composite_ids() {
        let err = DomainError::not_found("1/3");
        assert!(err.to_string().starts_with("Resource not found. Id "));
        assert!(err.to_string().ends_with("1/3"));
    }

    #[test]
    fn test_foreign_key_failure_maps_to_integrity() {
        let err = DomainError::from(DbErr::Custom(
            "FOREIGN KEY constraint failed".to_string(),
        ));
        assert!(matches!(err, DomainError::Integrity(_)));
    }

    #[test]
    fn test_other_db_errors_map_to_database() {
        let err = DomainError::from(DbErr::Custom("disk I/O error".to_string()));
        assert!(matches!(err, DomainError::Database(_)));
    }
}
