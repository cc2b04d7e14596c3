//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    17.50 - 0.10 * 3 = 17.199999999999999  ❌ WRONG!                     │
//! │                                                                         │
//! │  A ticket machine that is a penny out is a ticket machine that          │
//! │  either refuses change it could give or hands out coins it owes.        │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Pence                                            │
//! │    1750 - 10 * 3 = 1720   (exact, every time)                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use zoo_core::money::Money;
//!
//! let fee = Money::from_pounds_pence(17, 50);
//! assert_eq!(fee.pence(), 1750);
//!
//! let change = Money::from_pence(2000) - fee;
//! assert_eq!(change.to_string(), "£2.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (pence).
///
/// ## Design Decisions
/// - **i64 (signed)**: differences such as "still owed" can dip below zero
///   in intermediate arithmetic; ledgers themselves never hold negatives
/// - **Single field tuple struct**: Zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from pence.
    ///
    /// ## Example
    /// ```rust
    /// use zoo_core::money::Money;
    ///
    /// let note = Money::from_pence(2000); // £20.00
    /// assert_eq!(note.pence(), 2000);
    /// ```
    #[inline]
    pub const fn from_pence(pence: i64) -> Self {
        Money(pence)
    }

    /// Creates a Money value from pounds and pence.
    ///
    /// ## Example
    /// ```rust
    /// use zoo_core::money::Money;
    ///
    /// assert_eq!(Money::from_pounds_pence(17, 50).pence(), 1750);
    /// assert_eq!(Money::from_pounds_pence(-5, 50).pence(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the pounds should be negative.
    #[inline]
    pub const fn from_pounds_pence(pounds: i64, pence: i64) -> Self {
        if pounds < 0 {
            Money(pounds * 100 - pence)
        } else {
            Money(pounds * 100 + pence)
        }
    }

    /// Returns the value in pence.
    #[inline]
    pub const fn pence(&self) -> i64 {
        self.0
    }

    /// Returns the whole pounds portion.
    #[inline]
    pub const fn pounds(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the pence portion (always 0-99).
    #[inline]
    pub const fn pence_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// How many whole `unit`s fit into this amount. Zero for non-positive
    /// amounts or units.
    ///
    /// ## Example
    /// ```rust
    /// use zoo_core::money::Money;
    ///
    /// assert_eq!(Money::from_pence(250).units_of(Money::from_pence(200)), 1);
    /// assert_eq!(Money::from_pence(250).units_of(Money::from_pence(500)), 0);
    /// ```
    #[inline]
    pub const fn units_of(&self, unit: Money) -> u64 {
        if self.0 <= 0 || unit.0 <= 0 {
            0
        } else {
            (self.0 / unit.0) as u64
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display for logs and the shell. Sterling, two decimal places.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}£{}.{:02}", sign, self.pounds().abs(), self.pence_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: u32) -> Self {
        Money(self.0 * count as i64)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
