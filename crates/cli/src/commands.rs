//! CLI commands
//!
//! Each command calls the core account API, renders the outcome on
//! stdout, and passes the structured result back to the caller. A
//! rejected operation is reported, never propagated - the
//! demonstration continues regardless.

use minibank_core::{Account, AccountError, AccountId, Tx};
use rust_decimal::Decimal;

/// Deposit funds into the account
pub fn deposit(account: &mut Account, amount: Decimal) -> Result<Tx, AccountError> {
    let result = account.deposit(amount);

    match &result {
        Ok(tx) => println!(
            "✅ Deposited {} to {} (balance: {})",
            tx.amount(),
            tx.account(),
            tx.balance_after()
        ),
        Err(e) => {
            tracing::warn!(account = %account.id(), %amount, error = %e, "deposit rejected");
            println!("❌ Deposit rejected: {}", e);
        }
    }

    result
}

/// Withdraw funds from the account
pub fn withdraw(account: &mut Account, amount: Decimal) -> Result<Tx, AccountError> {
    let result = account.withdraw(amount);

    match &result {
        Ok(tx) => println!(
            "✅ Withdrew {} from {} (balance: {})",
            tx.amount(),
            tx.account(),
            tx.balance_after()
        ),
        Err(e) => {
            tracing::warn!(account = %account.id(), %amount, error = %e, "withdrawal rejected");
            println!("❌ Withdrawal rejected: {}", e);
        }
    }

    result
}

/// Show the current balance
pub fn balance(account: &Account) -> Decimal {
    let balance = account.balance();
    println!("Balance for {}: {}", account.id(), balance);
    balance
}

/// Show the account identifier
pub fn identity(account: &Account) -> &AccountId {
    let id = account.id();
    println!("Account number: {}", id);
    id
}
