//! Ledger status command

use anyhow::Result;
use ledgercast_core::Database;

pub fn cmd_status(db: &Database) -> Result<()> {
    let count = db.count_transactions()?;
    let (income, expenses) = db.income_expense_totals()?;
    let unnormalized = db.unnormalized_transactions()?.len();

    println!();
    println!("📒 Ledger Status");
    println!("   ─────────────────────────────");
    println!("   Transactions: {}", count);
    if let Some((first, last)) = db.date_range()? {
        println!("   Date range: {} to {}", first, last);
    }
    println!("   Recorded income: {:.2}", income);
    println!("   Recorded expenses: {:.2}", expenses);

    if unnormalized > 0 {
        println!();
        println!(
            "⚠️  {} transactions lack a base amount. Run 'ledgercast normalize'.",
            unnormalized
        );
    }

    Ok(())
}
