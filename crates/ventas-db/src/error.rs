//! # Database Error Types
//!
//! Error handling for all storage operations.
//!
//! ## Error Flow
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ sqlx::Error  │ ──► │   DbError    │ ──► │  API error   │
//! │ (low-level)  │     │ (this crate) │     │ (app layer)  │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! Low-level sqlx errors are converted into domain-meaningful variants so
//! callers can match on what went wrong without depending on sqlx directly.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur during database operations.
#[derive(Error, Debug)]
pub enum DbError {
    /// Failed to establish a database connection
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration execution failed
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// A query failed to execute
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Connection pool exhausted
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// The requested calendar day has no midnight in the store timezone
    #[error("Date {day} has no valid start of day in the store timezone")]
    InvalidDate { day: NaiveDate },

    /// Unexpected internal error
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => DbError::QueryFailed(db_err.to_string()),
            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,
            sqlx::Error::PoolClosed => {
                DbError::ConnectionFailed("Connection pool closed".to_string())
            }
            other => DbError::Internal(other.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Convenience result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
