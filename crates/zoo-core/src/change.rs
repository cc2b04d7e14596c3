//! # Change Engine
//!
//! Greedy, stock-constrained change making.
//!
//! ## Algorithm
//! ```text
//! owed = 250p    stock = { £10 x1, £2 x1, 50p x1 }
//!
//!   £20  250 / 2000 = 0        skip
//!   £10  250 / 1000 = 0        skip
//!   £5   250 /  500 = 0        skip
//!   £2   250 /  200 = 1  → take min(1, 1) = 1      owed = 50
//!   £1    50 /  100 = 0        skip
//!   50p   50 /   50 = 1  → take min(1, 1) = 1      owed = 0
//!   ...
//!
//! breakdown = { £2 x1, 50p x1 }   remaining = 0   ✓ fully satisfied
//! ```
//!
//! Greedy is optimal here only because the sterling denomination set is
//! canonical. There is no backtracking: a stock of `{20p x3}` cannot pay
//! `60p` if a `50p` is also present, since the `50p` is taken first.

use serde::Serialize;

use crate::cash::{CashCount, Denomination};
use crate::money::Money;

/// What the engine managed to hand out, and what it still owes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChangeOutcome {
    pub breakdown: CashCount,
    pub remaining: Money,
}

impl ChangeOutcome {
    /// True when the target was paid in full.
    pub fn fully_satisfied(&self) -> bool {
        self.remaining.is_zero()
    }
}

/// Allocates change for `target` from `stock`, largest denomination first.
///
/// Every piece placed in the breakdown is removed from `stock`; nothing else
/// in `stock` is touched. The breakdown never exceeds `target` in value, and
/// no count ever goes below zero. A negative `target` is treated as nothing
/// owed.
pub fn make_change(target: Money, stock: &mut CashCount) -> ChangeOutcome {
    let mut owed = if target.is_negative() {
        Money::zero()
    } else {
        target
    };
    let mut breakdown = CashCount::zero();

    for denomination in Denomination::ALL {
        let take = stock.take_up_to(denomination, owed.units_of(denomination.value()));
        if take == 0 {
            continue;
        }
        // Each denomination is visited once, so the slot is still empty.
        breakdown = breakdown.with(denomination, take);
        owed -= denomination.value() * take;
    }

    ChangeOutcome {
        breakdown,
        remaining: owed,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
