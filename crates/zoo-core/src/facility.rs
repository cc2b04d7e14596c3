//! # Facility
//!
//! The `Zoo` facade: one area graph, one ticket machine, one rule book.
//!
//! ## Payment Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  process_payment(inserted)           T = inserted total, F = fee        │
//! │       │                                                                 │
//! │       ├── T < F ───────────────────► Refunded(InsufficientPayment)      │
//! │       │                                                                 │
//! │       ├── T == F ──► stock += inserted ──► Exact (nothing returned)     │
//! │       │                                                                 │
//! │       └── T > F, D = T - F                                              │
//! │             │                                                           │
//! │             ├── D > stock total ───► Refunded(InsufficientStock)        │
//! │             │                                                           │
//! │             └── stock += inserted, make_change(D, stock)                │
//! │                   │                                                     │
//! │                   ├── satisfied ───► ChangeGiven                        │
//! │                   │                                                     │
//! │                   └── short ──┬─ Refund ─────► restore stock,           │
//! │                               │                Refunded(ChangeUnavail.) │
//! │                               └─ AcceptShortfall ─► ShortChanged        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The stock comparison uses the total held *before* the inserted cash is
//! added. The inserted notes themselves can still be handed back as change
//! once folded in.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cash::CashCount;
use crate::change::make_change;
use crate::error::{CoreError, CoreResult};
use crate::graph::AreaGraph;
use crate::money::Money;
use crate::rules::{HabitatRules, StandardRules};
use crate::types::{AdmissionCode, Animal, Area, AreaId};
use crate::validation::{validate_fee_pounds, validate_pence};

// =============================================================================
// Payment Types
// =============================================================================

/// What the machine does when it owes change it cannot fully make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShortChangePolicy {
    /// Undo the sale and hand the visitor's cash back.
    #[default]
    Refund,
    /// Keep the sale and hand out whatever change could be made.
    AcceptShortfall,
}

/// Why a payment was handed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RefundReason {
    /// Less than the fee was inserted.
    InsufficientPayment,
    /// The change owed exceeds everything the machine held.
    InsufficientStock,
    /// Enough value in stock, but not in denominations that add up.
    ChangeUnavailable,
    /// Taking the cash would push a stock count past its limit.
    StockOverflow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Inserted exactly the fee.
    Exact,
    /// Overpaid and the full difference was returned.
    ChangeGiven,
    /// Nothing taken, inserted cash returned.
    Refunded { reason: RefundReason },
    /// Sale kept, change short by `shortfall`.
    ShortChanged { shortfall: Money },
}

impl PaymentStatus {
    /// True when the machine kept the visitor's money.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, PaymentStatus::Refunded { .. })
    }
}

/// Cash handed back to the visitor, with the reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaymentReceipt {
    pub returned: CashCount,
    pub status: PaymentStatus,
}

impl PaymentReceipt {
    fn refund(inserted: CashCount, reason: RefundReason) -> Self {
        PaymentReceipt {
            returned: inserted,
            status: PaymentStatus::Refunded { reason },
        }
    }
}

// =============================================================================
// Zoo
// =============================================================================

/// The zoo facility.
///
/// ## Ownership
/// The zoo owns its graph, its stock and its rule book outright. Queries hand
/// out borrows or copies, so nothing outside can change the facility without
/// going through these methods.
#[derive(Debug, Clone)]
pub struct Zoo<R: HabitatRules = StandardRules> {
    graph: AreaGraph,
    stock: CashCount,
    fee: Money,
    short_change: ShortChangePolicy,
    rules: R,
}

impl Zoo<StandardRules> {
    /// A zoo with only an entrance, an empty machine and free entry.
    pub fn new() -> Self {
        Zoo::with_rules(StandardRules)
    }
}

impl Default for Zoo<StandardRules> {
    fn default() -> Self {
        Zoo::new()
    }
}

impl<R: HabitatRules> Zoo<R> {
    pub fn with_rules(rules: R) -> Self {
        Zoo {
            graph: AreaGraph::new(),
            stock: CashCount::new(),
            fee: Money::zero(),
            short_change: ShortChangePolicy::default(),
            rules,
        }
    }

    pub fn graph(&self) -> &AreaGraph {
        &self.graph
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    pub fn short_change_policy(&self) -> ShortChangePolicy {
        self.short_change
    }

    pub fn set_short_change_policy(&mut self, policy: ShortChangePolicy) {
        debug!(?policy, "Short change policy set");
        self.short_change = policy;
    }

    // =========================================================================
    // Areas
    // =========================================================================

    /// Adds an area and returns its id.
    ///
    /// Offering a second entrance is not an error here: the existing
    /// entrance id (0) comes back and nothing is added.
    pub fn add_area(&mut self, area: Area) -> CoreResult<AreaId> {
        match self.graph.add_area(area) {
            Err(CoreError::DuplicateOrigin { existing }) => {
                warn!(%existing, "Entrance already exists, not adding another");
                Ok(existing)
            }
            other => other,
        }
    }

    /// Removes an area. Unknown ids are ignored; the entrance is refused.
    pub fn remove_area(&mut self, id: AreaId) -> CoreResult<()> {
        match self.graph.remove_area(id) {
            Ok(_) => Ok(()),
            Err(err) => {
                warn!(%id, error = %err, "Area removal refused");
                Err(err)
            }
        }
    }

    pub fn area(&self, id: AreaId) -> Option<&Area> {
        self.graph.area(id)
    }

    // =========================================================================
    // Animals
    // =========================================================================

    /// Tries to house `animal` in the area `area_id`.
    ///
    /// Checks run in a fixed order and the first failure is reported:
    /// unknown area, not a habitat, wrong habitat, full, then any resident
    /// that won't tolerate the newcomer.
    pub fn add_animal(&mut self, area_id: AreaId, animal: Animal) -> AdmissionCode {
        let code = self.admit(area_id, animal);
        debug!(area = %area_id, ?code, "Animal admission");
        code
    }

    fn admit(&mut self, area_id: AreaId, animal: Animal) -> AdmissionCode {
        let Some(area) = self.graph.area_mut(area_id) else {
            return AdmissionCode::AreaNotFound;
        };
        let Some(habitat) = area.as_habitat_mut() else {
            return AdmissionCode::NotAHabitat;
        };
        if !self.rules.is_correct_habitat(animal.kind(), habitat.category()) {
            return AdmissionCode::WrongHabitat;
        }
        if habitat.is_full() {
            return AdmissionCode::HabitatFull;
        }
        let candidate = animal.kind();
        if habitat
            .inhabitants()
            .iter()
            .any(|resident| !self.rules.is_compatible(resident.kind(), candidate))
        {
            return AdmissionCode::IncompatibleInhabitants;
        }

        habitat.admit(animal);
        AdmissionCode::AnimalAdded
    }

    // =========================================================================
    // Paths
    // =========================================================================

    pub fn connect_areas(&mut self, from: AreaId, to: AreaId) -> CoreResult<()> {
        self.graph.connect(from, to)
    }

    pub fn is_path_allowed(&self, path: &[AreaId]) -> bool {
        self.graph.is_path_allowed(path)
    }

    pub fn find_unreachable_areas(&self) -> Vec<AreaId> {
        self.graph.unreachable_areas()
    }

    /// Walks `path` and collects the nickname of every animal seen.
    ///
    /// Nicknames come out in path order, then in order of arrival within
    /// each habitat. An area visited twice is seen twice.
    pub fn visit(&self, path: &[AreaId]) -> CoreResult<Vec<String>> {
        if !self.graph.is_path_allowed(path) {
            return Err(CoreError::InvalidPath(path.to_vec()));
        }

        let mut seen = Vec::new();
        for &id in path {
            let area = self.graph.area(id).ok_or(CoreError::AreaNotFound(id))?;
            if let Some(habitat) = area.as_habitat() {
                seen.extend(habitat.inhabitants().iter().map(|a| a.nickname().to_string()));
            }
        }
        Ok(seen)
    }

    // =========================================================================
    // Ticket Machine
    // =========================================================================

    pub fn set_entrance_fee(&mut self, pounds: i64, pence: i64) -> CoreResult<()> {
        validate_fee_pounds(pounds)?;
        validate_pence(pence)?;
        self.fee = Money::from_pounds_pence(pounds, pence);
        info!(fee = %self.fee, "Entrance fee set");
        Ok(())
    }

    pub fn entrance_fee(&self) -> Money {
        self.fee
    }

    /// Replaces the machine's stock.
    pub fn set_cash_supply(&mut self, stock: CashCount) {
        info!(total = %stock.total_value(), "Cash supply set");
        self.stock = stock;
    }

    /// A copy of the machine's stock.
    pub fn cash_supply(&self) -> CashCount {
        self.stock
    }

    /// Takes the entrance fee and returns the cash handed back.
    ///
    /// An empty ledger means the visitor paid exactly; any other ledger is
    /// either change or the visitor's own cash. Use [`Zoo::process_payment`]
    /// to tell those apart.
    pub fn pay_entrance_fee(&mut self, inserted: CashCount) -> CashCount {
        self.process_payment(inserted).returned
    }

    pub fn process_payment(&mut self, inserted: CashCount) -> PaymentReceipt {
        let paid = inserted.total_value();
        let fee = self.fee;
        debug!(%paid, %fee, "Processing payment");

        if paid < fee {
            info!(%paid, %fee, "Payment refused: underpaid");
            return PaymentReceipt::refund(inserted, RefundReason::InsufficientPayment);
        }

        if paid == fee {
            if let Err(err) = self.stock.checked_merge(&inserted) {
                warn!(%err, "Payment refused: machine cannot hold the cash");
                return PaymentReceipt::refund(inserted, RefundReason::StockOverflow);
            }
            info!(%paid, "Exact payment taken");
            return PaymentReceipt {
                returned: CashCount::zero(),
                status: PaymentStatus::Exact,
            };
        }

        let owed = paid - fee;
        if owed > self.stock.total_value() {
            info!(%owed, stock = %self.stock.total_value(), "Payment refused: not enough stock");
            return PaymentReceipt::refund(inserted, RefundReason::InsufficientStock);
        }

        let snapshot = self.stock;
        if let Err(err) = self.stock.checked_merge(&inserted) {
            warn!(%err, "Payment refused: machine cannot hold the cash");
            return PaymentReceipt::refund(inserted, RefundReason::StockOverflow);
        }
        let outcome = make_change(owed, &mut self.stock);

        if outcome.fully_satisfied() {
            info!(%paid, change = %outcome.breakdown, "Payment taken, change given");
            return PaymentReceipt {
                returned: outcome.breakdown,
                status: PaymentStatus::ChangeGiven,
            };
        }

        match self.short_change {
            ShortChangePolicy::Refund => {
                self.stock = snapshot;
                warn!(%owed, short = %outcome.remaining, "Change unavailable, payment refunded");
                PaymentReceipt::refund(inserted, RefundReason::ChangeUnavailable)
            }
            ShortChangePolicy::AcceptShortfall => {
                warn!(%owed, short = %outcome.remaining, "Payment taken, change short");
                PaymentReceipt {
                    returned: outcome.breakdown,
                    status: PaymentStatus::ShortChanged {
                        shortfall: outcome.remaining,
                    },
                }
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
