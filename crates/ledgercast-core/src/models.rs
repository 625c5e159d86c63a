//! Domain models for ledgercast

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// How often a transaction repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    /// A single occurrence on the transaction date
    OneTime,
    Weekly,
    Fortnightly,
    Monthly,
    Yearly,
}

impl Cadence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneTime => "one-time",
            Self::Weekly => "weekly",
            Self::Fortnightly => "fortnightly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl std::str::FromStr for Cadence {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "one-time" | "onetime" | "once" => Ok(Self::OneTime),
            "weekly" => Ok(Self::Weekly),
            "fortnightly" => Ok(Self::Fortnightly),
            "monthly" => Ok(Self::Monthly),
            "yearly" | "annual" => Ok(Self::Yearly),
            _ => Err(format!("Unknown cadence: {}", s)),
        }
    }
}

impl std::fmt::Display for Cadence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether an amount flows into or out of the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowKind {
    Income,
    Expense,
}

impl FlowKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::fmt::Display for FlowKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Subcategory IDs in this range are income; everything else is an expense.
/// Synced stores place expense subcategories in 1..=99 and income
/// subcategories from 100 up.
pub const INCOME_BAND: std::ops::RangeInclusive<i64> = 100..=200;

/// Subcategory recorded for a reconciliation residual on the expense side
pub const UNRECORDED_EXPENSE_SUBCATEGORY: i64 = 99;

/// Subcategory recorded for a reconciliation residual on the income side
pub const UNRECORDED_INCOME_SUBCATEGORY: i64 = 106;

/// Classify a subcategory as income or expense.
///
/// Total over all IDs: anything outside the income band is an expense,
/// including IDs no synced store would ever produce.
pub fn classify_subcategory(subcategory_id: i64) -> FlowKind {
    if INCOME_BAND.contains(&subcategory_id) {
        FlowKind::Income
    } else {
        FlowKind::Expense
    }
}

/// Round a monetary value to 2 decimal places for presentation
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A transaction category (synced from the sharing service)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// A transaction subcategory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: i64,
    pub name: String,
}

/// A stored ledger transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub date: NaiveDate,
    pub description: String,
    /// Currency the amount was recorded in
    pub currency: String,
    pub subcategory_id: i64,
    pub cadence: Cadence,
    /// Positive magnitude in the recorded currency
    pub amount: f64,
    /// Amount converted to the reporting currency; None until normalized
    pub base_amount: Option<f64>,
    pub updated_at: DateTime<Utc>,
}

/// A new transaction to be stored
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub description: String,
    pub currency: String,
    pub subcategory_id: i64,
    pub cadence: Cadence,
    pub amount: f64,
    pub base_amount: Option<f64>,
}

/// A read-only snapshot row handed to the projection engine: cadence
/// parsed, amount already normalized to the reporting currency.
#[derive(Debug, Clone)]
pub struct LedgerEntry {
    pub id: i64,
    /// Anchor date: the phase reference for all recurring cadences
    pub date: NaiveDate,
    pub subcategory_id: i64,
    /// Positive magnitude in the reporting currency; the sign applied to
    /// the balance comes from classification, not from the stored value
    pub amount: f64,
    pub cadence: Cadence,
}

/// One day of the projected balance curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    /// Sum of income occurrences on this day
    pub income: f64,
    /// Sum of expense occurrences on this day
    pub expenses: f64,
    /// Running balance after this day's flows
    pub balance: f64,
}

/// A sparse reporting row: horizon start, each 1st of month, horizon end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryPoint {
    pub date: NaiveDate,
    pub balance: f64,
}
