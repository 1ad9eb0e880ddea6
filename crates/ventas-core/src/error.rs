//! # Error Types
//!
//! Domain-specific error types for ventas-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ventas-core errors (this file)                                        │
//! │  └── ValidationError  - Intake / input validation failures             │
//! │                                                                         │
//! │  ventas-db errors (separate crate)                                     │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  HTTP API errors (in apps/server)                                      │
//! │  └── ApiError         - What clients see (serialized JSON)             │
//! │                                                                         │
//! │  Flow: ValidationError ──┐                                             │
//! │                          ├──► ApiError ──► HTTP response              │
//! │        DbError ──────────┘                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field names, offending values)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a sale submission or a query parameter doesn't
/// meet requirements. They carry enough context to produce an actionable
/// message and are translated verbatim to API clients.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// One or more required fields are absent, null, or empty.
    ///
    /// All missing fields are collected into a single error so a client
    /// sees the full list in one round trip.
    #[error("Missing required fields: {}", fields.join(", "))]
    MissingFields { fields: Vec<String> },

    /// Value is not in the allowed set.
    #[error("{field} '{value}' must be one of: {}", allowed.join(", "))]
    NotAllowed {
        field: String,
        value: String,
        allowed: Vec<String>,
    },

    /// Price is present but cannot be read as a valid amount.
    #[error("price {reason}")]
    InvalidPrice { reason: String },

    /// Invalid format (e.g., a malformed date parameter).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
