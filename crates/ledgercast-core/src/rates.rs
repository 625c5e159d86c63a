//! Frankfurter exchange-rate client and base-amount backfill
//!
//! Historical rates come from `https://api.frankfurter.app/{date}` with
//! `from`/`to` query parameters. Rates are cached per (currency, date)
//! so a backfill over many same-day transactions makes one call per
//! distinct pair.

use std::collections::HashMap;

use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::db::Database;
use crate::error::{Error, Result};
use crate::models::round_cents;

const DEFAULT_BASE_URL: &str = "https://api.frankfurter.app";

/// HTTP client for the Frankfurter currency API
pub struct RateClient {
    http_client: Client,
    base_url: String,
    cache: HashMap<(String, NaiveDate), f64>,
}

/// Response from the Frankfurter API
#[derive(Debug, Deserialize)]
struct RateResponse {
    rates: HashMap<String, f64>,
}

impl RateClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a different endpoint (for testing)
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            cache: HashMap::new(),
        }
    }

    /// Rate from `currency` into `target` on `date`.
    ///
    /// The identity conversion never hits the network; everything else is
    /// fetched once per (currency, date) and served from the cache after
    /// that. A currency the API has no `target` rate for is an error, not
    /// a skip.
    pub async fn historical(
        &mut self,
        date: NaiveDate,
        currency: &str,
        target: &str,
    ) -> Result<f64> {
        if currency == target {
            return Ok(1.0);
        }

        let key = (currency.to_string(), date);
        if let Some(rate) = self.cache.get(&key) {
            return Ok(*rate);
        }

        let url = format!("{}/{}", self.base_url, date.format("%Y-%m-%d"));
        debug!(%url, currency, target, "Fetching exchange rate");

        let response = self
            .http_client
            .get(&url)
            .query(&[("from", currency), ("to", target)])
            .send()
            .await?
            .error_for_status()?;

        let body: RateResponse = response.json().await?;
        let rate = body
            .rates
            .get(target)
            .copied()
            .ok_or_else(|| Error::MissingRate {
                currency: currency.to_string(),
                target: target.to_string(),
                date: date.to_string(),
            })?;

        self.cache.insert(key, rate);
        Ok(rate)
    }
}

impl Default for RateClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary of a base-amount backfill pass
#[derive(Debug, Default)]
pub struct NormalizeResults {
    /// Transactions that received a base amount
    pub updated: usize,
    /// Of those, how many were already in the reporting currency
    pub already_base: usize,
}

/// Recomputes base amounts for transactions that lack one
pub struct Normalizer<'a> {
    db: &'a Database,
    client: RateClient,
    base_currency: String,
}

impl<'a> Normalizer<'a> {
    pub fn new(db: &'a Database, base_currency: &str) -> Self {
        Self::with_client(db, base_currency, RateClient::new())
    }

    pub fn with_client(db: &'a Database, base_currency: &str, client: RateClient) -> Self {
        Self {
            db,
            client,
            base_currency: base_currency.to_string(),
        }
    }

    /// Fill in `base_amount` for every transaction missing one.
    ///
    /// Same-currency rows are stamped directly; anything else converts at
    /// the historical rate for the transaction's date. A missing rate
    /// aborts the pass so no row is silently left behind.
    pub async fn run(&mut self) -> Result<NormalizeResults> {
        let pending = self.db.unnormalized_transactions()?;
        let mut results = NormalizeResults::default();

        for tx in pending {
            let base_amount = if tx.currency == self.base_currency {
                results.already_base += 1;
                round_cents(tx.amount)
            } else {
                let rate = self
                    .client
                    .historical(tx.date, &tx.currency, &self.base_currency)
                    .await?;
                round_cents(tx.amount * rate)
            };

            self.db.set_base_amount(tx.id, base_amount)?;
            results.updated += 1;
        }

        info!(updated = results.updated, "Base amount backfill complete");
        Ok(results)
    }
}
