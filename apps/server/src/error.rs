//! # API Error Envelope
//!
//! Every failure leaves the server as `{"code": …, "message": …}` with an
//! appropriate HTTP status.
//!
//! ## Error Flow
//!
//! ```text
//! ┌─────────────────┐
//! │ ValidationError │──┐
//! │   (core)        │  │    ┌──────────────┐     ┌─────────────────────┐
//! └─────────────────┘  ├──► │   ApiError   │ ──► │ 400 VALIDATION_ERROR│
//! ┌─────────────────┐  │    │ {code, msg}  │     │ 500 DATABASE_ERROR  │
//! │    DbError      │──┘    └──────────────┘     └─────────────────────┘
//! │   (storage)     │
//! └─────────────────┘
//! ```
//!
//! Validation failures carry their specific message to the caller. Storage
//! failures are logged in full and leave as a generic message, so internal
//! detail never reaches clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use ventas_core::ValidationError;
use ventas_db::DbError;

/// Machine-readable error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ValidationError,
    DatabaseError,
}

/// Error payload returned to API clients.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    /// Client-fault error (HTTP 400) with a specific message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::ValidationError,
            message: message.into(),
        }
    }

    /// Server-fault error (HTTP 500).
    pub fn database(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::DatabaseError,
            message: message.into(),
        }
    }

    fn status(&self) -> StatusCode {
        match self.code {
            ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
            ErrorCode::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::validation(err.to_string())
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            // A date the store timezone cannot represent is the caller's input
            err @ DbError::InvalidDate { .. } => Self::validation(err.to_string()),
            other => {
                tracing::error!(error = %other, "Database operation failed");
                Self::database("Database operation failed")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_error_codes_serialize_screaming_snake() {
        let err = ApiError::validation("missing price");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "missing price");

        let err = ApiError::database("boom");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "DATABASE_ERROR");
    }

    #[test]
    fn test_validation_error_keeps_message() {
        let err: ApiError = ValidationError::MissingFields {
            fields: vec!["price".to_string()],
        }
        .into();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.contains("price"));
    }

    #[test]
    fn test_db_error_message_is_generic() {
        let err: ApiError = DbError::QueryFailed("UNIQUE constraint failed: sales.id".into()).into();

        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.message, "Database operation failed");
    }

    #[test]
    fn test_invalid_date_is_client_fault() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let err: ApiError = DbError::InvalidDate { day }.into();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.message.contains("2024-03-10"));
    }
}
