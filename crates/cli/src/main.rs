//! Minibank CLI - Main entry point

use clap::Parser;
use minibank_cli::commands;
use minibank_core::Account;
use rust_decimal_macros::dec;

#[derive(Parser)]
#[command(name = "minibank")]
#[command(about = "Minibank - single-account banking demonstration", long_about = None)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let _cli = Cli::parse();

    // Fixed demonstration sequence: the second withdrawal overdraws
    // and must leave the balance untouched.
    let mut account = Account::new("123456789", dec!(500.0));

    commands::balance(&account);
    let _ = commands::deposit(&mut account, dec!(200.0));
    let _ = commands::withdraw(&mut account, dec!(150.0));
    let _ = commands::withdraw(&mut account, dec!(600.0));
    commands::balance(&account);
    commands::identity(&account);

    Ok(())
}
