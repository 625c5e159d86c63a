//! Ledgercast CLI - balance projection over a synced expense ledger
//!
//! Usage:
//!   ledgercast init                       Initialize database
//!   ledgercast income --amount 2500       Record income
//!   ledgercast normalize                  Backfill reporting-currency amounts
//!   ledgercast project --balance 1800     Project the balance curve

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db),
        Commands::Income {
            amount,
            subcategory,
            date,
            cadence,
            description,
        } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_income(
                &db,
                amount,
                &subcategory,
                date.as_deref(),
                &cadence,
                description.as_deref(),
            )
        }
        Commands::Transactions { limit } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_transactions_list(&db, limit)
        }
        Commands::Status => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_status(&db)
        }
        Commands::Normalize { currency } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_normalize(&db, &currency).await
        }
        Commands::Reconcile {
            balance,
            net_debt,
            currency,
        } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_reconcile(&db, balance, net_debt, &currency)
        }
        Commands::Project {
            balance,
            years,
            from,
            currency,
            output,
        } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_project(&db, balance, years, from.as_deref(), &currency, output.as_deref())
        }
    }
}
