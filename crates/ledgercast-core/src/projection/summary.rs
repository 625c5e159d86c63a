//! Sparse reporting selection over the daily series

use chrono::Datelike;

use crate::models::{round_cents, DailyPoint, SummaryPoint};

/// Select the reporting subset of a daily series: the first day, every
/// first-of-month, and the last day, ascending and de-duplicated, with
/// balances rounded to 2 decimal places.
pub fn select_summary(series: &[DailyPoint]) -> Vec<SummaryPoint> {
    let mut selected = Vec::new();
    for (i, point) in series.iter().enumerate() {
        let is_edge = i == 0 || i == series.len() - 1;
        if is_edge || point.date.day() == 1 {
            selected.push(SummaryPoint {
                date: point.date,
                balance: round_cents(point.balance),
            });
        }
    }
    selected
}
