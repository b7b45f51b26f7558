//! Integration tests for the scripted demonstration
//!
//! These drive the same fixed sequence the binary runs, asserting on
//! the structured results the command layer passes through instead of
//! captured console output.

use minibank_cli::commands;
use minibank_core::{Account, AccountError, Tx};
use rust_decimal_macros::dec;

/// The full demonstration script: 500 → +200 → -150 → -600 (rejected)
#[test]
fn test_demonstration_sequence() {
    let mut account = Account::new("123456789", dec!(500.0));

    assert_eq!(commands::balance(&account), dec!(500.0));

    let tx = commands::deposit(&mut account, dec!(200.0)).unwrap();
    assert_eq!(tx.amount(), dec!(200.0));
    assert_eq!(tx.balance_after(), dec!(700.0));

    let tx = commands::withdraw(&mut account, dec!(150.0)).unwrap();
    assert_eq!(tx.amount(), dec!(150.0));
    assert_eq!(tx.balance_after(), dec!(550.0));

    // Overdraw: rejected with the insufficiency error, balance untouched
    let err = commands::withdraw(&mut account, dec!(600.0)).unwrap_err();
    assert_eq!(
        err,
        AccountError::InsufficientFunds {
            requested: dec!(600.0),
            available: dec!(550.0),
        }
    );
    assert!(err.to_string().starts_with("insufficient balance"));

    assert_eq!(commands::balance(&account), dec!(550.0));
    assert_eq!(commands::identity(&account).as_str(), "123456789");
}

/// A rejected operation must not derail the ones after it
#[test]
fn test_sequence_continues_after_rejection() {
    let mut account = Account::new("ACC_001", dec!(100.0));

    assert!(commands::deposit(&mut account, dec!(-50.0)).is_err());
    assert_eq!(account.balance(), dec!(100.0));

    assert!(commands::withdraw(&mut account, dec!(0)).is_err());
    assert_eq!(account.balance(), dec!(100.0));

    let tx = commands::withdraw(&mut account, dec!(100.0)).unwrap();
    assert_eq!(tx.balance_after(), dec!(0));
}

/// Receipts applied in order to the initial balance reproduce the
/// final account state
#[test]
fn test_receipts_replay_to_final_balance() {
    let initial = dec!(500.0);
    let mut account = Account::new("123456789", initial);

    let receipts = vec![
        account.deposit(dec!(200.0)).unwrap(),
        account.withdraw(dec!(150.0)).unwrap(),
        account.deposit(dec!(75.5)).unwrap(),
    ];

    let mut replayed = initial;
    for tx in &receipts {
        match tx {
            Tx::Deposit { amount, .. } => replayed += *amount,
            Tx::Withdrawal { amount, .. } => replayed -= *amount,
        }
    }

    assert_eq!(replayed, account.balance());
    assert_eq!(receipts.last().unwrap().balance_after(), account.balance());
}
