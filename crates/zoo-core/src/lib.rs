//! # zoo-core: Pure Business Logic for the Zoo Facility
//!
//! Everything the zoo knows how to do, as plain synchronous code with no
//! I/O. The shell in `apps/zoo-shell` is a thin layer on top.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Zoo Facility Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    zoo-shell (REPL / script)                    │   │
//! │  │    config ──► ZooState(Mutex<Zoo>) ──► command handlers         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ zoo-core (THIS CRATE) ★                         │   │
//! │  │                                                                 │   │
//! │  │                     ┌──────────────┐                            │   │
//! │  │                     │  facility    │  Zoo facade                │   │
//! │  │                     └──┬────────┬──┘                            │   │
//! │  │            ┌───────────┘        └───────────┐                   │   │
//! │  │   ┌────────▼──┐  ┌───────────┐  ┌───────────▼┐  ┌───────────┐  │   │
//! │  │   │   graph   │  │   rules   │  │   change   │  │   cash    │  │   │
//! │  │   │ AreaGraph │  │ Habitat-  │  │ make_change│─►│ CashCount │  │   │
//! │  │   │           │  │ Rules     │  │            │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO THREADS • NO PANICS ON BAD INPUT                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Areas, habitats, animals, admission codes
//! - [`graph`] - One-way area graph and reachability
//! - [`rules`] - Which habitat each kind needs, who tolerates whom
//! - [`money`] - Integer pence
//! - [`cash`] - Denominations and the `CashCount` ledger
//! - [`change`] - Greedy change making
//! - [`facility`] - The `Zoo` facade
//! - [`validation`] - Range and length checks on outside input
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use zoo_core::{Animal, AnimalKind, Area, AreaId, AdmissionCode, Zoo};
//! use zoo_core::cash::{CashCount, Denomination};
//!
//! let mut zoo = Zoo::new();
//! let savannah = zoo.add_area(Area::enclosure(4)).unwrap();
//! zoo.connect_areas(AreaId::ENTRANCE, savannah).unwrap();
//!
//! let code = zoo.add_animal(savannah, Animal::new(AnimalKind::Zebra, "Marty"));
//! assert_eq!(code, AdmissionCode::AnimalAdded);
//! assert_eq!(zoo.visit(&[AreaId::ENTRANCE, savannah]).unwrap(), vec!["Marty"]);
//!
//! zoo.set_entrance_fee(5, 0).unwrap();
//! let change = zoo.pay_entrance_fee(CashCount::new().with(Denomination::Note5, 1));
//! assert!(change.is_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cash;
pub mod change;
pub mod error;
pub mod facility;
pub mod graph;
pub mod money;
pub mod rules;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cash::{CashCount, Denomination};
pub use change::{make_change, ChangeOutcome};
pub use error::{CoreError, CoreResult, ErrorKind, ValidationError};
pub use facility::{PaymentReceipt, PaymentStatus, RefundReason, ShortChangePolicy, Zoo};
pub use graph::AreaGraph;
pub use money::Money;
pub use rules::{HabitatRules, StandardRules};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Longest nickname an animal may carry, in characters.
pub const MAX_NICKNAME_LEN: usize = 64;

/// Largest capacity a habitat may be built with.
///
/// ## Business Reason
/// Keeps typos like `4000` instead of `4` out of the layout.
pub const MAX_HABITAT_CAPACITY: usize = 1_000;
