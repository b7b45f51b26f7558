//! Account operation errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur in account operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    /// The requested amount is zero or negative.
    ///
    /// Raised by both `deposit` and `withdraw`; neither accepts a
    /// non-positive amount.
    #[error("invalid amount: {0}")]
    InvalidAmount(Decimal),

    /// A withdrawal would take the balance below zero.
    #[error("insufficient balance: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },
}
