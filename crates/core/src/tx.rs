//! Tx - Receipts for applied account operations
//!
//! Every successful mutation produces a `Tx` describing what happened
//! and the balance it left behind. Replaying receipts in order against
//! the same initial balance reproduces the account state.

use crate::account::AccountId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A receipt for one applied account operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Tx {
    Deposit {
        account: AccountId,
        amount: Decimal,
        balance_after: Decimal,
        timestamp: DateTime<Utc>,
    },
    Withdrawal {
        account: AccountId,
        amount: Decimal,
        balance_after: Decimal,
        timestamp: DateTime<Utc>,
    },
}

impl Tx {
    /// The account the operation was applied to
    pub fn account(&self) -> &AccountId {
        match self {
            Tx::Deposit { account, .. } | Tx::Withdrawal { account, .. } => account,
        }
    }

    /// The amount that was deposited or withdrawn
    pub fn amount(&self) -> Decimal {
        match self {
            Tx::Deposit { amount, .. } | Tx::Withdrawal { amount, .. } => *amount,
        }
    }

    /// The balance immediately after the operation was applied
    pub fn balance_after(&self) -> Decimal {
        match self {
            Tx::Deposit { balance_after, .. } | Tx::Withdrawal { balance_after, .. } => {
                *balance_after
            }
        }
    }
}

impl fmt::Display for Tx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tx::Deposit { amount, balance_after, .. } => {
                write!(f, "deposit {} (balance: {})", amount, balance_after)
            }
            Tx::Withdrawal { amount, balance_after, .. } => {
                write!(f, "withdrawal {} (balance: {})", amount, balance_after)
            }
        }
    }
}
