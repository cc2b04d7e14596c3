//! # Error Types
//!
//! Domain-specific error types for zoo-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  zoo-core errors (this file)                                           │
//! │  ├── CoreError        - Graph, ledger and facility errors              │
//! │  │   └── kind()       - NotFound | InvariantViolation | Rejected        │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  zoo-shell errors (app)                                                │
//! │  └── ApiError         - What the command line sees                     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → stdout                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What is NOT an error
//! A refused payment or a refused animal is an everyday outcome. Those come
//! back as values (`PaymentStatus`, `AdmissionCode`), never as `Err`.

use thiserror::Error;

use crate::cash::Denomination;
use crate::types::AreaId;

// =============================================================================
// Error Kind
// =============================================================================

/// Coarse classification callers branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unknown area (or other) reference.
    NotFound,
    /// The operation would break a structural invariant of the facility.
    InvariantViolation,
    /// A business rule refused the request.
    Rejected,
}

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// All variants are recoverable. Nothing in zoo-core panics on bad input.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// Area id is not (or no longer) part of the facility.
    #[error("Area not found: {0}")]
    AreaNotFound(AreaId),

    /// A second entrance was offered. The facility keeps exactly one.
    ///
    /// ## User Workflow
    /// ```text
    /// add_area(Entrance)
    ///      │
    ///      ▼
    /// graph already holds AreaId(0)
    ///      │
    ///      ▼
    /// DuplicateOrigin { existing: 0 } ── facade returns 0, no id allocated
    /// ```
    #[error("Entrance already exists with id {existing}")]
    DuplicateOrigin { existing: AreaId },

    /// The entrance is permanent.
    #[error("Cannot remove the entrance")]
    CannotRemoveOrigin,

    /// A ledger count would become negative.
    #[error("Count for {denomination} cannot be negative (got {count})")]
    NegativeCount {
        denomination: Denomination,
        count: i64,
    },

    /// A ledger count would pass `u32::MAX`.
    #[error("Count for {denomination} would exceed {max}", max = u32::MAX)]
    CountOverflow { denomination: Denomination },

    /// The path breaks the one-way system somewhere along its length.
    #[error("Path {0:?} is not allowed by the one-way system")]
    InvalidPath(Vec<AreaId>),

    /// The id counter has nothing left to hand out.
    #[error("No area ids left to allocate")]
    IdsExhausted,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Classifies the error for callers that branch on category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::AreaNotFound(_) => ErrorKind::NotFound,
            CoreError::DuplicateOrigin { .. }
            | CoreError::CannotRemoveOrigin
            | CoreError::NegativeCount { .. }
            | CoreError::CountOverflow { .. }
            | CoreError::IdsExhausted => ErrorKind::InvariantViolation,
            CoreError::InvalidPath(_) | CoreError::Validation(_) => ErrorKind::Rejected,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., non-numeric id, malformed amount).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::NegativeCount {
            denomination: Denomination::Coin50p,
            count: -2,
        };
        assert_eq!(err.to_string(), "Count for 50p cannot be negative (got -2)");

        let err = CoreError::DuplicateOrigin {
            existing: AreaId::ENTRANCE,
        };
        assert_eq!(err.to_string(), "Entrance already exists with id 0");

        let err = CoreError::CountOverflow {
            denomination: Denomination::Coin10p,
        };
        assert_eq!(err.to_string(), "Count for 10p would exceed 4294967295");
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            CoreError::AreaNotFound(AreaId::new(3)).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            CoreError::CannotRemoveOrigin.kind(),
            ErrorKind::InvariantViolation
        );
        assert_eq!(
            CoreError::InvalidPath(vec![AreaId::ENTRANCE, AreaId::new(2)]).kind(),
            ErrorKind::Rejected
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "nickname".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
