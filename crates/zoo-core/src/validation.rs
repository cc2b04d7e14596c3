//! # Validation Module
//!
//! Input validation for values that reach the facility from outside:
//! shell arguments and configuration files.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Shell parsing                                                 │
//! │  ├── Token shape (is it a number? a known kind?)                        │
//! │  └── FromStr impls on AreaId, AnimalKind, Denomination                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  └── Range and length rules                                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Facility                                                      │
//! │  ├── Graph invariants (one entrance, ids never reused)                  │
//! │  └── Admission rules (habitat, capacity, compatibility)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use zoo_core::validation::{validate_nickname, validate_pence};
//!
//! validate_nickname("Simba").unwrap();
//! validate_pence(50).unwrap();
//! assert!(validate_pence(100).is_err());
//! ```

use crate::error::ValidationError;
use crate::{MAX_HABITAT_CAPACITY, MAX_NICKNAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an animal nickname.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most `MAX_NICKNAME_LEN` characters
///
/// ## Returns
/// The trimmed nickname.
pub fn validate_nickname(nickname: &str) -> ValidationResult<String> {
    let nickname = nickname.trim();

    if nickname.is_empty() {
        return Err(ValidationError::Required {
            field: "nickname".to_string(),
        });
    }

    if nickname.chars().count() > MAX_NICKNAME_LEN {
        return Err(ValidationError::TooLong {
            field: "nickname".to_string(),
            max: MAX_NICKNAME_LEN,
        });
    }

    Ok(nickname.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a habitat capacity.
///
/// Zero is allowed: such a habitat is permanently full.
pub fn validate_capacity(capacity: i64) -> ValidationResult<usize> {
    if !(0..=MAX_HABITAT_CAPACITY as i64).contains(&capacity) {
        return Err(ValidationError::OutOfRange {
            field: "capacity".to_string(),
            min: 0,
            max: MAX_HABITAT_CAPACITY as i64,
        });
    }

    Ok(capacity as usize)
}

/// Validates the pence part of a fee.
///
/// ## Rules
/// - Between 0 and 99 inclusive
///
/// ## Example
/// ```rust
/// use zoo_core::validation::validate_pence;
///
/// assert!(validate_pence(0).is_ok());
/// assert!(validate_pence(99).is_ok());
/// assert!(validate_pence(-1).is_err());
/// ```
pub fn validate_pence(pence: i64) -> ValidationResult<()> {
    if !(0..=99).contains(&pence) {
        return Err(ValidationError::OutOfRange {
            field: "pence".to_string(),
            min: 0,
            max: 99,
        });
    }

    Ok(())
}

/// Validates the pounds part of a fee. Free entry (0) is allowed.
pub fn validate_fee_pounds(pounds: i64) -> ValidationResult<()> {
    // Upper bound keeps `pounds * 100` inside i64.
    let max = i64::MAX / 100 - 1;
    if !(0..=max).contains(&pounds) {
        return Err(ValidationError::OutOfRange {
            field: "pounds".to_string(),
            min: 0,
            max,
        });
    }

    Ok(())
}

/// Validates a note or coin count.
///
/// ## User Workflow
/// ```text
/// supply 20=3 50p=-1
///              │
///              ▼
/// validate_count(-1) ← THIS FUNCTION
///              │
///              ├── n < 0?          → Error
///              ├── n > u32::MAX?   → Error
///              └── OK → ledger.set(..)
/// ```
pub fn validate_count(count: i64) -> ValidationResult<u32> {
    u32::try_from(count).map_err(|_| ValidationError::OutOfRange {
        field: "count".to_string(),
        min: 0,
        max: u32::MAX as i64,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_nickname() {
        assert_eq!(validate_nickname("  Simba ").unwrap(), "Simba");
        assert!(validate_nickname("Marty the Zebra").is_ok());

        assert!(validate_nickname("").is_err());
        assert!(validate_nickname("   ").is_err());
        assert!(validate_nickname(&"A".repeat(MAX_NICKNAME_LEN + 1)).is_err());
        assert!(validate_nickname(&"A".repeat(MAX_NICKNAME_LEN)).is_ok());
    }

    #[test]
    fn test_validate_capacity() {
        assert_eq!(validate_capacity(0).unwrap(), 0);
        assert_eq!(validate_capacity(4).unwrap(), 4);
        assert!(validate_capacity(-1).is_err());
        assert!(validate_capacity(MAX_HABITAT_CAPACITY as i64 + 1).is_err());
    }

    #[test]
    fn test_validate_pence() {
        assert!(validate_pence(0).is_ok());
        assert!(validate_pence(50).is_ok());
        assert!(validate_pence(99).is_ok());
        assert!(validate_pence(100).is_err());
        assert!(validate_pence(-5).is_err());
    }

    #[test]
    fn test_validate_fee_pounds() {
        assert!(validate_fee_pounds(0).is_ok());
        assert!(validate_fee_pounds(17).is_ok());
        assert!(validate_fee_pounds(-1).is_err());
        assert!(validate_fee_pounds(i64::MAX).is_err());
    }

    #[test]
    fn test_validate_count() {
        assert_eq!(validate_count(0).unwrap(), 0);
        assert_eq!(validate_count(12).unwrap(), 12);
        assert!(validate_count(-1).is_err());
        assert!(validate_count(u32::MAX as i64 + 1).is_err());
    }
}
