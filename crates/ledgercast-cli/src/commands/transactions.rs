//! Income entry and transaction listing

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, Utc};
use ledgercast_core::models::{Cadence, NewTransaction};
use ledgercast_core::Database;

use super::truncate;

/// Income subcategories accepted by name, as seeded by `init`
const INCOME_CHOICES: &[(&str, i64)] = &[
    ("salary", 101),
    ("business", 102),
    ("gifts", 103),
    ("grants", 104),
    ("other", 105),
];

/// Resolve an income subcategory argument (name or numeric ID)
pub fn resolve_income_subcategory(arg: &str) -> Result<i64> {
    if let Ok(id) = arg.parse::<i64>() {
        if INCOME_CHOICES.iter().any(|(_, known)| *known == id) {
            return Ok(id);
        }
        bail!("Unknown income subcategory ID: {} (valid: 101-105)", id);
    }

    let lower = arg.to_lowercase();
    INCOME_CHOICES
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, id)| *id)
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Unknown income subcategory: {} (valid: salary, business, gifts, grants, other)",
                arg
            )
        })
}

pub fn cmd_income(
    db: &Database,
    amount: f64,
    subcategory: &str,
    date: Option<&str>,
    cadence: &str,
    description: Option<&str>,
) -> Result<()> {
    if amount <= 0.0 {
        bail!("Income amount must be positive");
    }

    let subcategory_id = resolve_income_subcategory(subcategory)?;
    let date = match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .context("Invalid --date format (use YYYY-MM-DD)")?,
        None => Utc::now().date_naive(),
    };
    let cadence: Cadence = cadence.parse().map_err(|e: String| anyhow::anyhow!(e))?;

    let description = match description {
        Some(d) => d.to_string(),
        None => INCOME_CHOICES
            .iter()
            .find(|(_, id)| *id == subcategory_id)
            .map(|(name, _)| {
                let mut chars = name.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            })
            .unwrap_or_default(),
    };

    // Manual income is recorded directly in the reporting currency
    let id = db.insert_transaction(&NewTransaction {
        date,
        description: description.clone(),
        currency: "EUR".to_string(),
        subcategory_id,
        cadence,
        amount,
        base_amount: Some(amount),
    })?;

    println!(
        "✅ Recorded {} income of {:.2} EUR on {} (#{}, {})",
        description, amount, date, id, cadence
    );

    Ok(())
}

pub fn cmd_transactions_list(db: &Database, limit: i64) -> Result<()> {
    let transactions = db.list_transactions(limit)?;

    println!();
    println!("📒 Transactions");
    println!("   ─────────────────────────────────────────────────────────────────────");

    if transactions.is_empty() {
        println!("   No transactions stored yet.");
        return Ok(());
    }

    println!(
        "   {:>5} │ {:>10} │ {:25} │ {:>11} │ {:>10} │ {}",
        "ID", "Date", "Description", "Cadence", "Amount", "Base"
    );
    println!("   ──────┼────────────┼───────────────────────────┼─────────────┼────────────┼──────────");

    for tx in &transactions {
        let base = match tx.base_amount {
            Some(value) => format!("{:.2}", value),
            None => "-".to_string(),
        };
        println!(
            "   {:>5} │ {:>10} │ {:25} │ {:>11} │ {:>7.2} {} │ {:>8}",
            tx.id,
            tx.date.to_string(),
            truncate(&tx.description, 25),
            tx.cadence.as_str(),
            tx.amount,
            tx.currency,
            base
        );
    }

    Ok(())
}
