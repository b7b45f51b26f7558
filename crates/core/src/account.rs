//! Account - A single identifier plus a mutable decimal balance
//!
//! The account is the whole domain: deposits and withdrawals mutate the
//! balance in place and hand back a [`Tx`] receipt, queries are
//! read-only. There is no account registry and no shared ownership.

use crate::error::AccountError;
use crate::tx::Tx;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque account identifier
///
/// Assigned at creation and immutable thereafter. Any string is
/// accepted; the identifier carries no structure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(String);

impl AccountId {
    /// Create a new AccountId from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AccountId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for AccountId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A bank account: identifier + mutable currency balance.
///
/// # Invariant
/// `withdraw` never takes the balance below zero; the sufficiency
/// check happens before any mutation. The *initial* balance is
/// accepted verbatim, negative values included - the constructor
/// performs no validation.
///
/// # Example
/// ```
/// use minibank_core::Account;
/// use rust_decimal_macros::dec;
///
/// let mut account = Account::new("123456789", dec!(500.0));
/// account.deposit(dec!(200.0)).unwrap();
/// assert_eq!(account.balance(), dec!(700.0));
///
/// // Overdrawing is rejected and leaves the balance untouched
/// assert!(account.withdraw(dec!(900.0)).is_err());
/// assert_eq!(account.balance(), dec!(700.0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    balance: Decimal,
}

impl Account {
    /// Create a new account with an identifier and an initial balance.
    ///
    /// The initial balance is not validated; a caller may open an
    /// account already in the red.
    pub fn new(id: impl Into<AccountId>, initial_balance: Decimal) -> Self {
        Self {
            id: id.into(),
            balance: initial_balance,
        }
    }

    /// Deposit a strictly positive amount into the account.
    ///
    /// # Errors
    /// - `AccountError::InvalidAmount` if `amount <= 0`; the balance
    ///   is left unchanged.
    pub fn deposit(&mut self, amount: Decimal) -> Result<Tx, AccountError> {
        if amount <= Decimal::ZERO {
            return Err(AccountError::InvalidAmount(amount));
        }

        self.balance += amount;
        tracing::debug!(account = %self.id, %amount, balance = %self.balance, "deposit applied");

        Ok(Tx::Deposit {
            account: self.id.clone(),
            amount,
            balance_after: self.balance,
            timestamp: Utc::now(),
        })
    }

    /// Withdraw a strictly positive amount not exceeding the balance.
    ///
    /// # Errors
    /// - `AccountError::InvalidAmount` if `amount <= 0`;
    /// - `AccountError::InsufficientFunds` if `amount > balance`.
    ///
    /// Either way the balance is left unchanged.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Tx, AccountError> {
        if amount <= Decimal::ZERO {
            return Err(AccountError::InvalidAmount(amount));
        }
        if amount > self.balance {
            return Err(AccountError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }

        self.balance -= amount;
        tracing::debug!(account = %self.id, %amount, balance = %self.balance, "withdrawal applied");

        Ok(Tx::Withdrawal {
            account: self.id.clone(),
            amount,
            balance_after: self.balance,
            timestamp: Utc::now(),
        })
    }

    /// Current balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Account identifier
    pub fn id(&self) -> &AccountId {
        &self.id
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Account {} (balance: {})", self.id, self.balance)
    }
}
