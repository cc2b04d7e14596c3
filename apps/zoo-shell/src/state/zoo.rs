//! # Zoo State
//!
//! The single facility the shell drives, behind a mutex.
//!
//! ## Thread Safety
//! The zoo is wrapped in `Arc<Mutex<T>>` because:
//! 1. Every command reads or changes the facility
//! 2. Only one command may touch it at a time
//! 3. The state handle can be cloned into other threads (tests do this)
//!
//! ## Lock Discipline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Command                   Lock scope                                   │
//! │  ───────                   ──────────                                   │
//! │                                                                         │
//! │  pay 20=1 ───────────────► with_zoo(|zoo| zoo.process_payment(..))      │
//! │                            fee read, stock folded, change made,         │
//! │                            all under ONE lock                           │
//! │                                                                         │
//! │  visit 0 1 2 ────────────► with_zoo(|zoo| zoo.visit(..))                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A poisoned lock is recovered: every `Zoo` method either finishes its
//! change or makes none, so there is no half-written state to fear.

use std::sync::{Arc, Mutex};

use tracing::{info, warn};
use zoo_core::{Area, AreaId, AreaKind, CashCount, Zoo};

use crate::config::ShellConfig;
use crate::error::ApiError;

/// Shell-managed facility state.
#[derive(Debug, Clone, Default)]
pub struct ZooState {
    zoo: Arc<Mutex<Zoo>>,
}

impl ZooState {
    pub fn new(zoo: Zoo) -> Self {
        ZooState {
            zoo: Arc::new(Mutex::new(zoo)),
        }
    }

    /// Builds the facility described by `config`.
    ///
    /// ## Order
    /// 1. Short-change policy and entrance fee
    /// 2. Ticket-machine stock
    /// 3. Areas, ids assigned from 1 in file order
    /// 4. Connections, once every area exists
    pub fn from_config(config: &ShellConfig) -> Result<Self, ApiError> {
        let mut zoo = Zoo::new();
        zoo.set_short_change_policy(config.short_change);
        zoo.set_entrance_fee(config.fee.pounds, config.fee.pence)?;
        zoo.set_cash_supply(CashCount::try_from_pairs(config.cash_entries()?)?);

        for area in &config.areas {
            let kind: AreaKind = area.kind.parse()?;
            let capacity = zoo_core::validation::validate_capacity(area.capacity)?;
            zoo.add_area(Area::from_kind(kind, capacity))?;
        }

        for connection in &config.connections {
            zoo.connect_areas(AreaId::new(connection.from), AreaId::new(connection.to))?;
        }

        info!(
            areas = zoo.graph().len(),
            connections = config.connections.len(),
            fee = %zoo.entrance_fee(),
            "Facility built from config"
        );
        Ok(ZooState::new(zoo))
    }

    /// Runs `f` with exclusive access to the zoo.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let fee = state.with_zoo(|zoo| zoo.entrance_fee());
    /// ```
    pub fn with_zoo<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Zoo) -> R,
    {
        let mut zoo = self.zoo.lock().unwrap_or_else(|poisoned| {
            warn!("Zoo mutex was poisoned, recovering");
            poisoned.into_inner()
        });
        f(&mut zoo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AreaConfig, ConnectionConfig, FeeConfig};
    use zoo_core::{Denomination, Money};

    #[test]
    fn test_from_config_builds_layout() {
        let mut config = ShellConfig::default();
        config.fee = FeeConfig { pounds: 17, pence: 50 };
        config.cash.insert("10".to_string(), 1);
        config.cash.insert("£2".to_string(), 1);
        config.areas = vec![
            AreaConfig {
                kind: "enclosure".to_string(),
                capacity: 4,
            },
            AreaConfig {
                kind: "picnic".to_string(),
                capacity: 0,
            },
        ];
        config.connections = vec![
            ConnectionConfig { from: 0, to: 1 },
            ConnectionConfig { from: 1, to: 2 },
        ];

        let state = ZooState::from_config(&config).unwrap();

        state.with_zoo(|zoo| {
            assert_eq!(zoo.entrance_fee(), Money::from_pence(1750));
            assert_eq!(zoo.cash_supply().get(Denomination::Note10), 1);
            assert_eq!(zoo.cash_supply().get(Denomination::Coin2), 1);
            assert_eq!(zoo.graph().len(), 3);
            assert!(zoo.is_path_allowed(&[AreaId::ENTRANCE, AreaId::new(1), AreaId::new(2)]));
            assert!(zoo.find_unreachable_areas().is_empty());
        });
    }

    #[test]
    fn test_from_config_rejects_connection_from_missing_area() {
        let mut config = ShellConfig::default();
        config.connections = vec![ConnectionConfig { from: 4, to: 0 }];
        assert!(ZooState::from_config(&config).is_err());
    }

    #[test]
    fn test_with_zoo_mutates_shared_state() {
        let state = ZooState::default();
        let other = state.clone();
        state.with_zoo(|zoo| zoo.add_area(Area::PicnicArea)).unwrap();
        assert_eq!(other.with_zoo(|zoo| zoo.graph().len()), 2);
    }

    #[test]
    fn test_poisoned_lock_is_recovered() {
        let state = ZooState::default();
        let poisoner = state.clone();

        let result = std::thread::spawn(move || {
            poisoner.with_zoo(|_| panic!("boom"));
        })
        .join();
        assert!(result.is_err());

        assert_eq!(state.with_zoo(|zoo| zoo.graph().len()), 1);
    }
}
