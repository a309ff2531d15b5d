//! Error types for the guide navigation engine

use thiserror::Error;

/// Main error type for guidenav operations
///
/// Only construction and I/O paths return this error. The scroll-driven
/// operations (indexing, tracking, progress, preference reads/writes) recover
/// locally and never surface an error to the UI.
#[derive(Error, Debug)]
pub enum GuideError {
    /// Article was not found among the loaded guides
    #[error("Article not found: {0}")]
    ArticleNotFound(String),

    /// Rating outside the 1..=5 star range
    #[error("Invalid rating: {0} (expected 1-5)")]
    InvalidRating(i64),

    /// Configuration value rejected by validation
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure reported by a [`KeyValueStore`](crate::storage::KeyValueStore) backend.
///
/// Kept separate from [`GuideError`] so backends stay cheap to implement and
/// the preference layer can match on the cause before swallowing it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Backend refused the write because it is full
    #[error("quota exceeded")]
    QuotaExceeded,

    /// Storage is disabled or cannot be reached
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Backend-specific failure
    #[error("backend failure: {0}")]
    Backend(String),
}

impl From<redb::TransactionError> for StorageError {
    fn from(e: redb::TransactionError) -> Self {
        StorageError::Backend(e.to_string())
    }
}

impl From<redb::TableError> for StorageError {
    fn from(e: redb::TableError) -> Self {
        StorageError::Backend(e.to_string())
    }
}

impl From<redb::StorageError> for StorageError {
    fn from(e: redb::StorageError) -> Self {
        StorageError::Backend(e.to_string())
    }
}

impl From<redb::CommitError> for StorageError {
    fn from(e: redb::CommitError) -> Self {
        StorageError::Backend(e.to_string())
    }
}

/// Result type alias using GuideError
pub type GuideResult<T> = Result<T, GuideError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GuideError::ArticleNotFound("lusail-stadium".to_string());
        assert_eq!(format!("{}", err), "Article not found: lusail-stadium");
    }

    #[test]
    fn test_invalid_rating_display() {
        let err = GuideError::InvalidRating(9);
        assert_eq!(format!("{}", err), "Invalid rating: 9 (expected 1-5)");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let guide_err: GuideError = io_err.into();
        assert!(matches!(guide_err, GuideError::Io(_)));
    }
}
