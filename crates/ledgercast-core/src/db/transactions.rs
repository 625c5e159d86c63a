//! Transaction operations and the projection snapshot

use chrono::NaiveDate;
use rusqlite::params;

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{Cadence, LedgerEntry, NewTransaction, Transaction, INCOME_BAND};

impl Database {
    /// Insert a transaction, returning its row ID
    pub fn insert_transaction(&self, tx: &NewTransaction) -> Result<i64> {
        let conn = self.conn()?;

        conn.execute(
            r#"
            INSERT INTO transactions (date, description, currency, subcategory_id, cadence, amount, base_amount)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
            params![
                tx.date.to_string(),
                tx.description,
                tx.currency,
                tx.subcategory_id,
                tx.cadence.as_str(),
                tx.amount,
                tx.base_amount,
            ],
        )?;

        Ok(conn.last_insert_rowid())
    }

    /// List transactions, newest first
    pub fn list_transactions(&self, limit: i64) -> Result<Vec<Transaction>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, date, description, currency, subcategory_id, cadence, amount, base_amount, updated_at
            FROM transactions
            ORDER BY date DESC, id DESC
            LIMIT ?
            "#,
        )?;

        let transactions = stmt
            .query_map(params![limit], |row| {
                let date_str: String = row.get(1)?;
                let cadence_str: String = row.get(5)?;
                let updated_at_str: String = row.get(8)?;

                Ok(Transaction {
                    id: row.get(0)?,
                    date: NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").unwrap_or_default(),
                    description: row.get(2)?,
                    currency: row.get(3)?,
                    subcategory_id: row.get(4)?,
                    cadence: cadence_str.parse().unwrap_or(Cadence::OneTime),
                    amount: row.get(6)?,
                    base_amount: row.get(7)?,
                    updated_at: parse_datetime(&updated_at_str),
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(transactions)
    }

    /// Load the read-only projection snapshot.
    ///
    /// Fails on the first transaction whose cadence string is
    /// unrecognized (a silently skipped row would corrupt the balance
    /// series) and when foreign-currency rows have not been normalized
    /// yet. Either a complete snapshot comes back or nothing does.
    pub fn load_snapshot(&self, base_currency: &str) -> Result<Vec<LedgerEntry>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, date, subcategory_id, cadence, amount, base_amount, currency
            FROM transactions
            ORDER BY date, id
            "#,
        )?;

        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, i64>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, f64>(4)?,
                    row.get::<_, Option<f64>>(5)?,
                    row.get::<_, String>(6)?,
                ))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut entries = Vec::with_capacity(rows.len());
        let mut unnormalized = 0usize;

        for (id, date_str, subcategory_id, cadence_str, amount, base_amount, currency) in rows {
            let cadence: Cadence = cadence_str.parse().map_err(|_| Error::UnknownCadence {
                id,
                value: cadence_str.clone(),
            })?;

            let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|e| {
                Error::InvalidData(format!("transaction {}: bad date '{}': {}", id, date_str, e))
            })?;

            let amount = match base_amount {
                Some(value) => value,
                None if currency == base_currency => amount,
                None => {
                    unnormalized += 1;
                    continue;
                }
            };

            entries.push(LedgerEntry {
                id,
                date,
                subcategory_id,
                amount,
                cadence,
            });
        }

        if unnormalized > 0 {
            return Err(Error::NotNormalized {
                count: unnormalized,
            });
        }

        Ok(entries)
    }

    /// Transactions still lacking a base amount, oldest first
    pub fn unnormalized_transactions(&self) -> Result<Vec<Transaction>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, date, description, currency, subcategory_id, cadence, amount, base_amount, updated_at
            FROM transactions
            WHERE base_amount IS NULL
            ORDER BY date, id
            "#,
        )?;

        let transactions = stmt
            .query_map([], |row| {
                let date_str: String = row.get(1)?;
                let cadence_str: String = row.get(5)?;
                let updated_at_str: String = row.get(8)?;

                Ok(Transaction {
                    id: row.get(0)?,
                    date: NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").unwrap_or_default(),
                    description: row.get(2)?,
                    currency: row.get(3)?,
                    subcategory_id: row.get(4)?,
                    cadence: cadence_str.parse().unwrap_or(Cadence::OneTime),
                    amount: row.get(6)?,
                    base_amount: row.get(7)?,
                    updated_at: parse_datetime(&updated_at_str),
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(transactions)
    }

    /// Stamp the reporting-currency value onto a transaction
    pub fn set_base_amount(&self, id: i64, base_amount: f64) -> Result<()> {
        let conn = self.conn()?;
        let updated = conn.execute(
            "UPDATE transactions SET base_amount = ? WHERE id = ?",
            params![base_amount, id],
        )?;
        if updated == 0 {
            return Err(Error::NotFound(format!("transaction {}", id)));
        }
        Ok(())
    }

    /// Total number of stored transactions
    pub fn count_transactions(&self) -> Result<i64> {
        let conn = self.conn()?;
        let count = conn.query_row("SELECT COUNT(*) FROM transactions", [], |row| row.get(0))?;
        Ok(count)
    }

    /// First and last transaction dates, if any rows exist
    pub fn date_range(&self) -> Result<Option<(NaiveDate, NaiveDate)>> {
        let conn = self.conn()?;
        let range: (Option<String>, Option<String>) = conn.query_row(
            "SELECT MIN(date), MAX(date) FROM transactions",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;

        match range {
            (Some(min), Some(max)) => {
                let first = NaiveDate::parse_from_str(&min, "%Y-%m-%d")
                    .map_err(|e| Error::InvalidData(format!("bad date '{}': {}", min, e)))?;
                let last = NaiveDate::parse_from_str(&max, "%Y-%m-%d")
                    .map_err(|e| Error::InvalidData(format!("bad date '{}': {}", max, e)))?;
                Ok(Some((first, last)))
            }
            _ => Ok(None),
        }
    }

    /// Sums of recorded income and expense values, preferring the
    /// normalized base amount and falling back to the raw amount
    pub fn income_expense_totals(&self) -> Result<(f64, f64)> {
        let conn = self.conn()?;

        let income: f64 = conn.query_row(
            r#"
            SELECT COALESCE(SUM(COALESCE(base_amount, amount)), 0.0)
            FROM transactions
            WHERE subcategory_id BETWEEN ?1 AND ?2
            "#,
            params![*INCOME_BAND.start(), *INCOME_BAND.end()],
            |row| row.get(0),
        )?;

        let expenses: f64 = conn.query_row(
            r#"
            SELECT COALESCE(SUM(COALESCE(base_amount, amount)), 0.0)
            FROM transactions
            WHERE subcategory_id NOT BETWEEN ?1 AND ?2
            "#,
            params![*INCOME_BAND.start(), *INCOME_BAND.end()],
            |row| row.get(0),
        )?;

        Ok((income, expenses))
    }
}
