// File: crates/dashboard-core/src/record.rs
// Summary: Recorder that upserts a period row at the top of a table and writes it back as CSV.

use std::path::Path;

use chrono::{NaiveDate, Utc};
use tracing::debug;

use crate::bins::{histogram, ranges_from_header};
use crate::error::DashboardError;
use crate::table::RawTable;
use crate::types::PERIOD_DATE_FORMAT;

impl RawTable {
    /// Put `values` under period `label` as the most recent row. When row 1
    /// already holds `label` it is replaced, otherwise a new row is inserted
    /// above it.
    pub fn upsert_period(&mut self, label: &str, values: Vec<String>) -> Result<(), DashboardError> {
        let expected = self.series_count();
        if values.len() != expected {
            return Err(DashboardError::Record { expected, found: values.len() });
        }

        let mut row = Vec::with_capacity(values.len() + 1);
        row.push(label.to_owned());
        row.extend(values);

        let replace = self
            .period_rows()
            .first()
            .and_then(|r| r.first())
            .is_some_and(|first| first == label);
        if replace {
            debug!(period = label, "replacing most recent row");
            self.rows[1] = row;
        } else {
            debug!(period = label, "inserting new period");
            self.rows.insert(1, row);
        }
        Ok(())
    }

    /// Header plus period rows, `\n` terminated, quoting only when needed.
    pub fn to_csv_string(&self) -> Result<String, DashboardError> {
        let mut wtr = csv::WriterBuilder::new()
            .flexible(true)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());
        wtr.write_record(self.header())?;
        for row in self.period_rows() {
            wtr.write_record(row)?;
        }
        let bytes = wtr.into_inner().map_err(|e| csv::Error::from(e.into_error()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), DashboardError> {
        let path = path.as_ref();
        let text = self.to_csv_string()?;
        std::fs::write(path, text).map_err(|source| DashboardError::Io {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Upsert `values` under `date` formatted as `YYYY-MM-DD`.
pub fn record_on(table: &mut RawTable, date: NaiveDate, values: Vec<String>) -> Result<(), DashboardError> {
    let label = date.format(PERIOD_DATE_FORMAT).to_string();
    table.upsert_period(&label, values)
}

/// Bin `ages` (days since last status change) into the day ranges named by
/// the header and upsert the counts under `date`.
pub fn record_ages(
    table: &mut RawTable,
    date: NaiveDate,
    ages: &[i64],
    separator: char,
) -> Result<(), DashboardError> {
    let ranges = ranges_from_header(table.header(), separator)?;
    let counts = histogram(&ranges, ages).iter().map(u64::to_string).collect();
    record_on(table, date, counts)
}

/// Upsert `values` under today's UTC date.
pub fn record_today(table: &mut RawTable, values: Vec<String>) -> Result<(), DashboardError> {
    record_on(table, Utc::now().date_naive(), values)
}
