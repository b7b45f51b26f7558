//! Minibank Core - Account domain
//!
//! This crate contains the single-account banking domain:
//! - `Account`: an identifier plus a mutable decimal balance
//! - `Tx`: structured receipts for applied operations
//! - `AccountError`: recoverable operation failures

pub mod account;
pub mod error;
pub mod tx;

pub use account::{Account, AccountId};
pub use error::AccountError;
pub use tx::Tx;
