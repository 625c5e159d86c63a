//! Base-amount backfill command

use anyhow::Result;
use ledgercast_core::{Database, Normalizer};

pub async fn cmd_normalize(db: &Database, currency: &str) -> Result<()> {
    println!("💱 Backfilling {} base amounts...", currency);

    let mut normalizer = Normalizer::new(db, currency);
    let results = normalizer.run().await?;

    if results.updated == 0 {
        println!("✅ All transactions already normalized.");
    } else {
        println!(
            "✅ Updated {} transactions ({} already in {}).",
            results.updated, results.already_base, currency
        );
    }

    Ok(())
}
