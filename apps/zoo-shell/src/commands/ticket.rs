//! # Ticket Machine Commands
//!
//! Entrance fee, machine stock and payments.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  > fee 17 50                   Entrance fee: £17.50                     │
//! │  > supply 10=1 2=1 50p=1       Stock: 1 x £10, 1 x £2, 1 x 50p          │
//! │  > pay 20=1                                                             │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  with_zoo(|zoo| zoo.process_payment(..))                                │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  Change given: 1 x £2, 1 x 50p                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;
use zoo_core::{CashCount, Money, PaymentStatus, Zoo};

use crate::error::ApiError;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeView {
    pub fee: Money,
    pub display: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyView {
    pub stock: CashCount,
    pub pieces: u64,
    pub total: Money,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentView {
    pub paid: Money,
    pub fee: Money,
    pub returned: CashCount,
    pub returned_total: Money,
    pub status: PaymentStatus,
}

impl FeeView {
    fn of(zoo: &Zoo) -> Self {
        let fee = zoo.entrance_fee();
        FeeView {
            fee,
            display: fee.to_string(),
        }
    }
}

impl SupplyView {
    fn of(zoo: &Zoo) -> Self {
        let stock = zoo.cash_supply();
        SupplyView {
            stock,
            pieces: stock.piece_count(),
            total: stock.total_value(),
        }
    }
}

/// Shows the fee, or sets it when both parts are given.
pub fn fee(zoo: &mut Zoo, new_fee: Option<(i64, i64)>) -> Result<FeeView, ApiError> {
    if let Some((pounds, pence)) = new_fee {
        debug!(pounds, pence, "fee command");
        zoo.set_entrance_fee(pounds, pence)?;
    }
    Ok(FeeView::of(zoo))
}

/// Shows the stock, or replaces it when a ledger is given.
pub fn supply(zoo: &mut Zoo, new_stock: Option<CashCount>) -> SupplyView {
    if let Some(stock) = new_stock {
        debug!(%stock, "supply command");
        zoo.set_cash_supply(stock);
    }
    SupplyView::of(zoo)
}

pub fn pay(zoo: &mut Zoo, inserted: CashCount) -> PaymentView {
    debug!(%inserted, "pay command");
    let fee = zoo.entrance_fee();
    let receipt = zoo.process_payment(inserted);
    PaymentView {
        paid: inserted.total_value(),
        fee,
        returned: receipt.returned,
        returned_total: receipt.returned.total_value(),
        status: receipt.status,
    }
}
