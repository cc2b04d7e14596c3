//! # API Error Type
//!
//! Unified error type for shell commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Zoo Shell                          │
//! │                                                                         │
//! │  > visit 0 3                                                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Handler                                                 │  │
//! │  │  Result<Response, ApiError>                                      │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Bad token? ──── ValidationError ──────────────┐                 │  │
//! │  │         │                                      │                 │  │
//! │  │         ▼                                      ▼                 │  │
//! │  │  Facility refused? ── CoreError::InvalidPath ── ApiError ───────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ───────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  text:  Error [REJECTED]: Path [0, 3] is not allowed ...                │
//! │  json:  {"code":"REJECTED","message":"Path [0, 3] is not allowed ..."}  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A refused animal or a refunded payment is NOT an `ApiError`: those are
//! ordinary responses.

use serde::Serialize;
use tracing::error;
use zoo_core::{CoreError, ValidationError};

use crate::config::ConfigError;

/// Error returned from shell commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Area not found: 7"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for scripts
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unknown area
    NotFound,

    /// Input validation failed
    ValidationError,

    /// The request would break a facility invariant
    InvariantViolation,

    /// A facility rule refused the request
    Rejected,

    /// Command word not recognised
    UnknownCommand,

    /// Configuration could not be loaded
    ConfigError,

    /// Anything else
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn unknown_command(word: &str) -> Self {
        ApiError::new(
            ErrorCode::UnknownCommand,
            format!("Unknown command '{}'. Type 'help' for a list.", word),
        )
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let message = err.to_string();
        match err {
            CoreError::AreaNotFound(_) => ApiError::new(ErrorCode::NotFound, message),
            CoreError::DuplicateOrigin { .. }
            | CoreError::CannotRemoveOrigin
            | CoreError::NegativeCount { .. }
            | CoreError::CountOverflow { .. } => {
                ApiError::new(ErrorCode::InvariantViolation, message)
            }
            CoreError::InvalidPath(_) => ApiError::new(ErrorCode::Rejected, message),
            CoreError::IdsExhausted => {
                error!("Area id counter exhausted");
                ApiError::internal(message)
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = serde_json::to_value(self.code)
            .ok()
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_else(|| format!("{:?}", self.code));
        write!(f, "[{}] {}", code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use zoo_core::AreaId;

    #[test]
    fn test_core_error_codes() {
        let err: ApiError = CoreError::AreaNotFound(AreaId::new(7)).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Area not found: 7");

        let err: ApiError = CoreError::CannotRemoveOrigin.into();
        assert_eq!(err.code, ErrorCode::InvariantViolation);

        let err: ApiError = CoreError::InvalidPath(vec![AreaId::ENTRANCE]).into();
        assert_eq!(err.code, ErrorCode::Rejected);
    }

    #[test]
    fn test_validation_error_code() {
        let err: ApiError = ValidationError::Required {
            field: "nickname".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "nickname is required");
    }

    #[test]
    fn test_display_and_json() {
        let err = ApiError::new(ErrorCode::NotFound, "Area not found: 3");
        assert_eq!(err.to_string(), "[NOT_FOUND] Area not found: 3");

        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"code":"NOT_FOUND","message":"Area not found: 3"}"#);
    }
}
