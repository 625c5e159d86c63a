//! Unrecorded-transaction reconciliation
//!
//! The synced ledger rarely captures everything. Comparing what the
//! ledger implies against the balance the user actually sees yields a
//! residual; recording that residual as a one-time transaction keeps
//! later projections anchored to reality.

use chrono::NaiveDate;
use tracing::info;

use crate::db::Database;
use crate::error::Result;
use crate::models::{
    round_cents, Cadence, NewTransaction, UNRECORDED_EXPENSE_SUBCATEGORY,
    UNRECORDED_INCOME_SUBCATEGORY,
};

/// Residual magnitudes below this count as a balanced ledger
const RECONCILE_THRESHOLD: f64 = 0.00001;

/// Inputs and computed residual of a reconciliation run
#[derive(Debug, Clone, PartialEq)]
pub struct ReconcileReport {
    /// Recorded income total, reporting currency
    pub income: f64,
    /// Recorded expense total, reporting currency
    pub expenses: f64,
    /// Net debt on the sharing service (positive = user owes)
    pub net_debt: f64,
    /// The balance the user actually sees on their account
    pub stated_balance: f64,
    /// Positive = spending missing from the ledger, negative = income
    pub unrecorded: f64,
}

impl ReconcileReport {
    /// True when the residual is too small to bother recording
    pub fn is_balanced(&self) -> bool {
        self.unrecorded.abs() < RECONCILE_THRESHOLD
    }
}

/// Compute the unrecorded amount: what the ledger says the user should
/// have, minus what they actually have.
pub fn compute_unrecorded(
    income: f64,
    expenses: f64,
    net_debt: f64,
    stated_balance: f64,
) -> ReconcileReport {
    ReconcileReport {
        income,
        expenses,
        net_debt,
        stated_balance,
        unrecorded: income - expenses + net_debt - stated_balance,
    }
}

/// Record the compensating one-time transaction for a reconciliation
/// residual, dated `today`. Returns the new row ID, or None when the
/// ledger is already balanced.
pub fn record_unrecorded(
    db: &Database,
    report: &ReconcileReport,
    today: NaiveDate,
    base_currency: &str,
) -> Result<Option<i64>> {
    if report.is_balanced() {
        return Ok(None);
    }

    let (description, subcategory_id) = if report.unrecorded < 0.0 {
        ("Unrecorded Income", UNRECORDED_INCOME_SUBCATEGORY)
    } else {
        ("Unrecorded Expense", UNRECORDED_EXPENSE_SUBCATEGORY)
    };
    let amount = round_cents(report.unrecorded.abs());

    let id = db.insert_transaction(&NewTransaction {
        date: today,
        description: description.to_string(),
        currency: base_currency.to_string(),
        subcategory_id,
        cadence: Cadence::OneTime,
        amount,
        base_amount: Some(amount),
    })?;

    info!(id, description, amount, "Recorded reconciliation transaction");
    Ok(Some(id))
}
