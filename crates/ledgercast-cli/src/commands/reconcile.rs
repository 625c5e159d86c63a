//! Reconciliation command

use anyhow::Result;
use chrono::Utc;
use ledgercast_core::{compute_unrecorded, record_unrecorded, Database};

pub fn cmd_reconcile(
    db: &Database,
    stated_balance: f64,
    net_debt: f64,
    currency: &str,
) -> Result<()> {
    let (income, expenses) = db.income_expense_totals()?;
    let report = compute_unrecorded(income, expenses, net_debt, stated_balance);

    println!();
    println!("🧾 Reconciliation Summary");
    println!("   ─────────────────────────────");
    println!("   Income:     {:>12.2} {}", report.income, currency);
    println!("   Expenses:   {:>12.2} {}", report.expenses, currency);
    println!("   Net debt:   {:>12.2} {}", report.net_debt, currency);
    println!("   Stated:     {:>12.2} {}", report.stated_balance, currency);
    println!("   Unrecorded: {:>12.2} {}", report.unrecorded, currency);
    println!();

    let today = Utc::now().date_naive();
    match record_unrecorded(db, &report, today, currency)? {
        Some(id) => println!("✅ Recorded compensating transaction #{}", id),
        None => println!("✅ Ledger already balanced; nothing to record."),
    }

    Ok(())
}
