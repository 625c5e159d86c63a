//! Error types for ledgercast

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Database pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid projection horizon: {0} years (must be at least 1)")]
    InvalidHorizon(i32),

    #[error("Unknown cadence '{value}' on transaction {id}")]
    UnknownCadence { id: i64, value: String },

    #[error("No {target} rate available for {currency} on {date}")]
    MissingRate {
        currency: String,
        target: String,
        date: String,
    },

    #[error("{count} transactions have no base amount; run 'ledgercast normalize' first")]
    NotNormalized { count: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
