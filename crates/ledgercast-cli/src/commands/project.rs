//! Balance projection command

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use tracing::warn;

use ledgercast_core::{
    daily_series_csv, project, select_summary, Database, Horizon, ProjectionYears,
    MAX_PROJECTION_YEARS,
};

pub fn cmd_project(
    db: &Database,
    opening_balance: f64,
    years: i32,
    from: Option<&str>,
    currency: &str,
    output: Option<&Path>,
) -> Result<()> {
    let years = ProjectionYears::new(years)?;
    if years.clamped() {
        warn!("Projection length limited to {} years", MAX_PROJECTION_YEARS);
        println!(
            "⚠️  Projection length limited to {} years.",
            MAX_PROJECTION_YEARS
        );
    }

    // The engine takes the horizon start as an input; "today" is resolved
    // here at the outermost layer.
    let start = match from {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .context("Invalid --from date format (use YYYY-MM-DD)")?,
        None => Utc::now().date_naive(),
    };
    let horizon = Horizon::from_years(start, years);

    let entries = db.load_snapshot(currency)?;
    let series = project(&entries, opening_balance, &horizon);
    let summary = select_summary(&series);

    println!();
    println!("📈 Balance Projection");
    println!(
        "   Horizon: {} to {} ({} ledger entries)",
        horizon.start,
        horizon.end,
        entries.len()
    );
    println!("   ─────────────┬────────────────");
    println!("   {:>10}   │ {:>14}", "Date", "Balance");
    println!("   ─────────────┼────────────────");

    for point in &summary {
        println!(
            "   {:>10}   │ {:>10.2} {}",
            point.date.to_string(),
            point.balance,
            currency
        );
    }

    if let Some(path) = output {
        let csv = daily_series_csv(&series)?;
        std::fs::write(path, csv)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!();
        println!("💾 Daily series written to {}", path.display());
    }

    Ok(())
}
