//! CSV export of projection output
//!
//! The daily series is the hand-off format for external renderers
//! (charts, documents); ledgercast itself only writes the file.

use crate::error::{Error, Result};
use crate::models::DailyPoint;

/// Render the full daily series as CSV with a header row
pub fn daily_series_csv(series: &[DailyPoint]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(["date", "income", "expenses", "balance"])?;
    for point in series {
        writer.write_record(&[
            point.date.to_string(),
            format!("{:.2}", point.income),
            format!("{:.2}", point.expenses),
            format!("{:.2}", point.balance),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::InvalidData(format!("CSV buffer error: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| Error::InvalidData(format!("CSV encoding error: {}", e)))
}
