use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Error kinds surfaced by store, validation and entity operations.
///
/// `Validation`, `Duplicate` and `NotFound` are raised before any write and
/// leave the store untouched. `Storage` comes from the write itself; the
/// surrounding transaction has been rolled back by the time the caller sees it.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Duplicate(String),
    #[error("{0}")]
    NotFound(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn email_taken() -> Self { Self::Duplicate("Email already registered".into()) }

    /// Machine-readable kind, stable across releases.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::Validation(_) => "validation_error",
            ServiceError::Duplicate(_) => "duplicate_error",
            ServiceError::NotFound(_) => "not_found",
            ServiceError::Storage(_) => "storage_error",
        }
    }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 1001,
            ServiceError::Duplicate(_) => 1002,
            ServiceError::NotFound(_) => 1003,
            ServiceError::Storage(_) => 1200,
        }
    }
}

impl From<DbErr> for ServiceError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            // the customers.email unique index is the only one besides primary keys
            Some(SqlErr::UniqueConstraintViolation(_)) => ServiceError::email_taken(),
            _ => ServiceError::Storage(err.to_string()),
        }
    }
}
