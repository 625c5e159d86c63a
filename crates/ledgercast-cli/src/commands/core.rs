//! Init command and shared utilities

use std::path::Path;

use anyhow::{Context, Result};
use ledgercast_core::Database;

/// Open the database, creating it if needed
pub fn open_db(db_path: &Path) -> Result<Database> {
    let path_str = db_path
        .to_str()
        .context("Database path is not valid UTF-8")?;
    Database::open(path_str).context("Failed to open database")
}

pub fn cmd_init(db_path: &Path) -> Result<()> {
    println!("🔧 Initializing database at {}...", db_path.display());

    let db = open_db(db_path)?;
    db.seed_categories().context("Failed to seed categories")?;
    println!("   Seeded income and reconciliation categories");

    println!("✅ Database initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. Record income: ledgercast income --amount 2500 --cadence monthly");
    println!("  2. Project your balance: ledgercast project --balance 1800 --years 3");

    Ok(())
}
