//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Ledgercast - project your balance from a synced expense ledger
#[derive(Parser)]
#[command(name = "ledgercast")]
#[command(about = "Shared-expense ledger with balance projection", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "ledgercast.db", global = true)]
    pub db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and seed categories
    Init,

    /// Record an income transaction
    Income {
        /// Amount in the reporting currency
        #[arg(short, long)]
        amount: f64,

        /// Income subcategory: salary, business, gifts, grants, other (or a numeric ID)
        #[arg(short, long, default_value = "other")]
        subcategory: String,

        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Repeat cadence: one-time, weekly, fortnightly, monthly, yearly
        #[arg(short, long, default_value = "one-time")]
        cadence: String,

        /// Description (defaults to the subcategory name)
        #[arg(long)]
        description: Option<String>,
    },

    /// List stored transactions
    Transactions {
        /// Maximum rows to show
        #[arg(short, long, default_value = "20")]
        limit: i64,
    },

    /// Show ledger status
    Status,

    /// Backfill reporting-currency base amounts via the Frankfurter API
    Normalize {
        /// Reporting currency
        #[arg(long, default_value = "EUR")]
        currency: String,
    },

    /// Reconcile the ledger against your actual account balance
    Reconcile {
        /// The balance your account actually shows, in the reporting currency
        #[arg(short, long)]
        balance: f64,

        /// Net debt on the sharing service, positive when you owe
        #[arg(long, default_value = "0.0")]
        net_debt: f64,

        /// Reporting currency
        #[arg(long, default_value = "EUR")]
        currency: String,
    },

    /// Project the daily balance over a future horizon
    Project {
        /// Opening balance at the start of the horizon
        #[arg(short, long)]
        balance: f64,

        /// Projection length in years (1-5)
        #[arg(short, long, default_value = "1")]
        years: i32,

        /// Horizon start date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        from: Option<String>,

        /// Reporting currency the ledger is normalized to
        #[arg(long, default_value = "EUR")]
        currency: String,

        /// Write the full daily series to a CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
