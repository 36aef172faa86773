// File: crates/dashboard-core/src/table.rs
// Summary: RawTable model with validated (csv crate) and lenient (split-based) parsers.
// Notes:
// - Row 0 is always the header. Data rows are stored most-recent-first; the
//   recorder inserts new periods at row 1 and the builder reads them back in
//   that order.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::ParseError;
use crate::types::PERIOD_DATE_FORMAT;

/// Ordered rows of string fields. Never empty: a header row always exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawTable {
    pub(crate) rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Build from already split rows; the first row is the header.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Result<Self, ParseError> {
        if rows.is_empty() {
            return Err(ParseError::Empty);
        }
        Ok(Self { rows })
    }

    /// Parse CSV text, rejecting rows whose width differs from the header.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(false)
            .from_reader(text.as_bytes());

        let mut rows = Vec::new();
        for rec in rdr.records() {
            let rec = rec.map_err(ragged_or_csv)?;
            rows.push(rec.iter().map(str::to_owned).collect::<Vec<_>>());
        }
        if rows.is_empty() {
            return Err(ParseError::Empty);
        }
        debug!(rows = rows.len(), columns = rows[0].len(), "parsed table");
        Ok(Self { rows })
    }

    /// Split on `\n`, then on `,`. No quoting, no validation; a trailing
    /// newline yields a final row holding one empty field.
    pub fn split_lenient(text: &str) -> Self {
        let rows = text
            .split('\n')
            .map(|line| line.split(',').map(str::to_owned).collect())
            .collect();
        Self { rows }
    }

    pub fn header(&self) -> &[String] {
        &self.rows[0]
    }

    /// All rows, header included.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of non-key columns, i.e. series a chart will carry.
    pub fn series_count(&self) -> usize {
        self.header().len().saturating_sub(1)
    }

    /// Data rows, most recent first. A trailing single-empty-field row (left
    /// by [`split_lenient`](Self::split_lenient) on a trailing newline) is
    /// not a period.
    pub fn period_rows(&self) -> &[Vec<String>] {
        let data = &self.rows[1..];
        match data.last() {
            Some(last) if last.len() == 1 && last[0].is_empty() => &data[..data.len() - 1],
            _ => data,
        }
    }

    /// Checks that ISO-dated period labels strictly decrease down the table.
    /// Rows whose label is not a date are ignored.
    pub fn is_most_recent_first(&self) -> bool {
        let dates: Vec<NaiveDate> = self
            .period_rows()
            .iter()
            .filter_map(|row| row.first())
            .filter_map(|label| NaiveDate::parse_from_str(label, PERIOD_DATE_FORMAT).ok())
            .collect();
        dates.windows(2).all(|w| w[0] > w[1])
    }
}

fn ragged_or_csv(err: csv::Error) -> ParseError {
    if let csv::ErrorKind::UnequalLengths { pos, expected_len, len } = err.kind() {
        return ParseError::Ragged {
            line: pos.as_ref().map_or(0, |p| p.line()),
            expected: *expected_len,
            found: *len,
        };
    }
    ParseError::Csv(err)
}
