//! Ledgercast Core Library
//!
//! Shared functionality for the ledgercast balance-projection tool:
//! - SQLite ledger store and migrations
//! - Income/expense classification for synced subcategories
//! - Currency normalization via the Frankfurter API
//! - Unrecorded-transaction reconciliation
//! - The recurring-transaction projection engine
//! - CSV export of the projected daily series

pub mod db;
pub mod error;
pub mod export;
pub mod models;
pub mod projection;
pub mod rates;
pub mod reconcile;

pub use db::Database;
pub use error::{Error, Result};
pub use export::daily_series_csv;
pub use models::{
    classify_subcategory, round_cents, Cadence, Category, DailyPoint, FlowKind, LedgerEntry,
    NewTransaction, Subcategory, SummaryPoint, Transaction,
};
pub use projection::{
    expand, project, select_summary, Horizon, Occurrence, Occurrences, ProjectionYears,
    MAX_PROJECTION_YEARS,
};
pub use rates::{NormalizeResults, Normalizer, RateClient};
pub use reconcile::{compute_unrecorded, record_unrecorded, ReconcileReport};
