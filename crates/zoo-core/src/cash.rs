//! # Cash Module
//!
//! Notes and coins the ticket machine understands, and the `CashCount`
//! ledger used for machine stock, inserted payments and change.
//!
//! ## Denominations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Largest ───────────────────────────────────────────────────► Smallest  │
//! │                                                                         │
//! │   £20    £10    £5   │   £2    £1    50p    20p    10p                  │
//! │  2000   1000   500   │  200   100     50     20     10   (pence)       │
//! │  ──── notes ────     │  ───────────── coins ──────────                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The order of [`Denomination::ALL`] is load-bearing: the change engine
//! walks it front to back.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;

// =============================================================================
// Denomination
// =============================================================================

/// A note or coin accepted by the ticket machine.
///
/// Declaration order is descending value, so the derived `Ord` sorts
/// largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Denomination {
    #[serde(rename = "20")]
    Note20,
    #[serde(rename = "10")]
    Note10,
    #[serde(rename = "5")]
    Note5,
    #[serde(rename = "2")]
    Coin2,
    #[serde(rename = "1")]
    Coin1,
    #[serde(rename = "50p")]
    Coin50p,
    #[serde(rename = "20p")]
    Coin20p,
    #[serde(rename = "10p")]
    Coin10p,
}

impl Denomination {
    /// Every denomination, largest first.
    pub const ALL: [Denomination; 8] = [
        Denomination::Note20,
        Denomination::Note10,
        Denomination::Note5,
        Denomination::Coin2,
        Denomination::Coin1,
        Denomination::Coin50p,
        Denomination::Coin20p,
        Denomination::Coin10p,
    ];

    /// Face value in pence.
    pub const fn value(&self) -> Money {
        let pence = match self {
            Denomination::Note20 => 2000,
            Denomination::Note10 => 1000,
            Denomination::Note5 => 500,
            Denomination::Coin2 => 200,
            Denomination::Coin1 => 100,
            Denomination::Coin50p => 50,
            Denomination::Coin20p => 20,
            Denomination::Coin10p => 10,
        };
        Money::from_pence(pence)
    }

    #[inline]
    const fn index(&self) -> usize {
        *self as usize
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Denomination::Note20 => "£20",
            Denomination::Note10 => "£10",
            Denomination::Note5 => "£5",
            Denomination::Coin2 => "£2",
            Denomination::Coin1 => "£1",
            Denomination::Coin50p => "50p",
            Denomination::Coin20p => "20p",
            Denomination::Coin10p => "10p",
        }
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Denomination {
    type Err = ValidationError;

    /// Accepts `"20"`, `"£20"`, `"50p"`, `"0.50"` style spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim().to_lowercase();
        let raw = raw.trim_start_matches('£');
        let found = match raw {
            "20" | "20.00" => Some(Denomination::Note20),
            "10" | "10.00" => Some(Denomination::Note10),
            "5" | "5.00" => Some(Denomination::Note5),
            "2" | "2.00" => Some(Denomination::Coin2),
            "1" | "1.00" => Some(Denomination::Coin1),
            "50p" | "0.50" => Some(Denomination::Coin50p),
            "20p" | "0.20" => Some(Denomination::Coin20p),
            "10p" | "0.10" => Some(Denomination::Coin10p),
            _ => None,
        };
        found.ok_or_else(|| ValidationError::NotAllowed {
            field: "denomination".to_string(),
            allowed: Denomination::ALL
                .iter()
                .map(|d| d.label().to_string())
                .collect(),
        })
    }
}

// =============================================================================
// Cash Count
// =============================================================================

/// Count of each denomination in a pool of cash.
///
/// Counts are unsigned, so the ledger can never hold a negative amount.
/// Anything that tries to go below zero is refused with
/// [`CoreError::NegativeCount`] rather than clamped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<Denomination, u32>",
    into = "BTreeMap<Denomination, u32>"
)]
pub struct CashCount {
    counts: [u32; 8],
}

impl CashCount {
    /// An empty ledger.
    pub const fn new() -> Self {
        CashCount { counts: [0; 8] }
    }

    /// Builder-style setter for literals and tests.
    ///
    /// ## Example
    /// ```rust
    /// use zoo_core::cash::{CashCount, Denomination};
    ///
    /// let stock = CashCount::new()
    ///     .with(Denomination::Note10, 1)
    ///     .with(Denomination::Coin2, 1);
    /// assert_eq!(stock.total_value().pence(), 1200);
    /// ```
    pub fn with(mut self, denomination: Denomination, count: u32) -> Self {
        self.counts[denomination.index()] = count;
        self
    }

    #[inline]
    pub fn get(&self, denomination: Denomination) -> u32 {
        self.counts[denomination.index()]
    }

    /// Sets the count of one denomination.
    ///
    /// Negative counts are a caller error and leave the ledger unchanged.
    pub fn set(&mut self, denomination: Denomination, count: i64) -> CoreResult<()> {
        if count < 0 {
            return Err(CoreError::NegativeCount {
                denomination,
                count,
            });
        }
        let count = u32::try_from(count).map_err(|_| ValidationError::OutOfRange {
            field: format!("{} count", denomination),
            min: 0,
            max: u32::MAX as i64,
        })?;
        self.counts[denomination.index()] = count;
        Ok(())
    }

    #[inline]
    pub fn has_any(&self, denomination: Denomination) -> bool {
        self.get(denomination) > 0
    }

    /// Total value of every note and coin in the ledger.
    pub fn total_value(&self) -> Money {
        self.iter().map(|(d, n)| d.value() * n).sum()
    }

    /// Number of individual notes and coins.
    pub fn piece_count(&self) -> u64 {
        self.counts.iter().map(|&n| n as u64).sum()
    }

    /// Adds `other` into this ledger, denomination by denomination.
    ///
    /// Every slot is checked before any is written: if one count would pass
    /// `u32::MAX` the call fails with [`CoreError::CountOverflow`] and the
    /// ledger is unchanged.
    pub fn checked_merge(&mut self, other: &CashCount) -> CoreResult<()> {
        let mut merged = self.counts;
        for (denomination, slot) in Denomination::ALL.into_iter().zip(merged.iter_mut()) {
            *slot = slot
                .checked_add(other.get(denomination))
                .ok_or(CoreError::CountOverflow { denomination })?;
        }
        self.counts = merged;
        Ok(())
    }

    /// Adds `count` pieces of one denomination.
    ///
    /// A total past `u32::MAX` is refused and the ledger is unchanged.
    pub fn add(&mut self, denomination: Denomination, count: u32) -> CoreResult<()> {
        let slot = &mut self.counts[denomination.index()];
        *slot = slot
            .checked_add(count)
            .ok_or_else(|| ValidationError::OutOfRange {
                field: format!("{} count", denomination),
                min: 0,
                max: u32::MAX as i64,
            })?;
        Ok(())
    }

    /// Builds a ledger from `(denomination, count)` pairs. Repeated
    /// denominations add up, with the same overflow check as [`CashCount::add`].
    pub fn try_from_pairs<I>(pairs: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = (Denomination, u32)>,
    {
        let mut cash = CashCount::new();
        for (denomination, count) in pairs {
            cash.add(denomination, count)?;
        }
        Ok(cash)
    }

    /// Removes `count` pieces of one denomination.
    ///
    /// Refuses (and changes nothing) if fewer than `count` are held.
    pub fn deduct(&mut self, denomination: Denomination, count: u32) -> CoreResult<()> {
        let held = self.get(denomination);
        let left = held
            .checked_sub(count)
            .ok_or(CoreError::NegativeCount {
                denomination,
                count: held as i64 - count as i64,
            })?;
        self.counts[denomination.index()] = left;
        Ok(())
    }

    /// Removes as many pieces of `denomination` as held, up to `wanted`,
    /// and returns how many were taken.
    pub(crate) fn take_up_to(&mut self, denomination: Denomination, wanted: u64) -> u32 {
        let slot = &mut self.counts[denomination.index()];
        // `*slot` is a u32, so the min always fits.
        let taken = wanted.min(u64::from(*slot)) as u32;
        *slot -= taken;
        taken
    }

    /// A ledger with every count at zero.
    pub const fn zero() -> Self {
        CashCount::new()
    }

    /// Resets every count to zero in place.
    pub fn clear(&mut self) {
        self.counts = [0; 8];
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&n| n == 0)
    }

    /// Iterates `(denomination, count)` largest first, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (Denomination, u32)> + '_ {
        Denomination::ALL.iter().map(move |&d| (d, self.get(d)))
    }
}

impl fmt::Display for CashCount {
    /// `1 x £2, 1 x 50p`, or `nothing` for an empty ledger.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("nothing");
        }
        let parts: Vec<String> = self
            .iter()
            .filter(|(_, n)| *n > 0)
            .map(|(d, n)| format!("{} x {}", n, d))
            .collect();
        f.write_str(&parts.join(", "))
    }
}

impl From<BTreeMap<Denomination, u32>> for CashCount {
    fn from(map: BTreeMap<Denomination, u32>) -> Self {
        map.into_iter()
            .fold(CashCount::new(), |cash, (d, n)| cash.with(d, n))
    }
}

impl From<CashCount> for BTreeMap<Denomination, u32> {
    fn from(cash: CashCount) -> Self {
        cash.iter().filter(|(_, n)| *n > 0).collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
