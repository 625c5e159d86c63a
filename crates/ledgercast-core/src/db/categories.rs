//! Category and subcategory operations

use rusqlite::{params, OptionalExtension};

use super::Database;
use crate::error::Result;
use crate::models::{Category, Subcategory};

/// Income category head, as synced stores lay it out
const INCOME_CATEGORY: (i64, &str) = (100, "Income");

/// Income subcategories available for manual entry
pub const INCOME_SUBCATEGORIES: &[(i64, &str)] = &[
    (101, "Salary"),
    (102, "Business"),
    (103, "Gifts"),
    (104, "Grants"),
    (105, "Other"),
];

/// Subcategories used by reconciliation
const RECONCILE_SUBCATEGORIES: &[(i64, &str)] =
    &[(99, "Unrecorded Expense"), (106, "Unrecorded Income")];

impl Database {
    /// Seed the income category tree and the reconciliation
    /// subcategories. Idempotent; synced categories land alongside these.
    pub fn seed_categories(&self) -> Result<()> {
        let conn = self.conn()?;

        conn.execute(
            "INSERT OR IGNORE INTO categories (id, name) VALUES (?, ?)",
            params![INCOME_CATEGORY.0, INCOME_CATEGORY.1],
        )?;

        for (id, name) in INCOME_SUBCATEGORIES.iter().chain(RECONCILE_SUBCATEGORIES) {
            conn.execute(
                "INSERT OR IGNORE INTO subcategories (id, name) VALUES (?, ?)",
                params![id, name],
            )?;
        }

        Ok(())
    }

    /// Insert or update a synced category
    pub fn upsert_category(&self, id: i64, name: &str) -> Result<()> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO categories (id, name) VALUES (?, ?)
             ON CONFLICT(id) DO UPDATE SET name = excluded.name",
            params![id, name],
        )?;
        Ok(())
    }

    /// Insert or update a synced subcategory
    pub fn upsert_subcategory(&self, id: i64, name: &str) -> Result<()> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO subcategories (id, name) VALUES (?, ?)
             ON CONFLICT(id) DO UPDATE SET name = excluded.name",
            params![id, name],
        )?;
        Ok(())
    }

    /// List all categories, by ID
    pub fn list_categories(&self) -> Result<Vec<Category>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT id, name FROM categories ORDER BY id")?;
        let categories = stmt
            .query_map([], |row| {
                Ok(Category {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(categories)
    }

    /// List all subcategories, by ID
    pub fn list_subcategories(&self) -> Result<Vec<Subcategory>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT id, name FROM subcategories ORDER BY id")?;
        let subcategories = stmt
            .query_map([], |row| {
                Ok(Subcategory {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(subcategories)
    }

    /// Look up a subcategory name
    pub fn subcategory_name(&self, id: i64) -> Result<Option<String>> {
        let conn = self.conn()?;
        let name = conn
            .query_row(
                "SELECT name FROM subcategories WHERE id = ?",
                params![id],
                |row| row.get(0),
            )
            .optional()?;
        Ok(name)
    }
}
