// File: crates/dashboard-core/src/bins.rs
// Summary: Relative-day ranges from header parameters and the age histogram built on them.
// Notes:
// - Parameters read as search qualifiers on "date = today - N days", so
//   `>N` (updated after N days ago) means an age below N, and `<N` an age
//   above N.

use std::fmt;

use crate::error::BinError;
use crate::label::query_param;

/// Inclusive range of ages in days.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayRange {
    pub min: i64,
    pub max: i64,
}

impl DayRange {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Parse `"7..4"`, `">N"`, `">=N"`, `"<N"`, `"<=N"` or `"N"`. A
    /// `|Pretty Name` suffix is ignored.
    pub fn parse(param: &str, separator: char) -> Result<Self, BinError> {
        let value = query_param(param, separator).trim();
        if value.is_empty() {
            return Err(BinError::Empty);
        }

        if let Some((end, start)) = value.split_once("..") {
            let (a, b) = (days(end)?, days(start)?);
            return Ok(Self::new(a.min(b), a.max(b)));
        }
        if let Some(n) = value.strip_prefix(">=") {
            return Ok(Self::new(i64::MIN, days(n)?));
        }
        if let Some(n) = value.strip_prefix("<=") {
            return Ok(Self::new(days(n)?, i64::MAX));
        }
        if let Some(n) = value.strip_prefix('>') {
            return Ok(Self::new(i64::MIN, days(n)?.saturating_sub(1)));
        }
        if let Some(n) = value.strip_prefix('<') {
            return Ok(Self::new(days(n)?.saturating_add(1), i64::MAX));
        }
        let n = days(value)?;
        Ok(Self::new(n, n))
    }

    pub fn contains(&self, age: i64) -> bool {
        self.min <= age && age <= self.max
    }
}

impl fmt::Display for DayRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min, self.max) {
            (i64::MIN, max) => write!(f, "<={max}d"),
            (min, i64::MAX) => write!(f, ">={min}d"),
            (min, max) if min == max => write!(f, "{min}d"),
            (min, max) => write!(f, "{min}..{max}d"),
        }
    }
}

fn days(s: &str) -> Result<i64, BinError> {
    let s = s.trim();
    s.parse::<i64>().map_err(|_| BinError::InvalidNumber(s.to_owned()))
}

/// Count each age into the first range that contains it. Ages matching no
/// range are dropped.
pub fn histogram(ranges: &[DayRange], ages: &[i64]) -> Vec<u64> {
    let mut bins = vec![0u64; ranges.len()];
    for &age in ages {
        if let Some(i) = ranges.iter().position(|r| r.contains(age)) {
            bins[i] += 1;
        }
    }
    bins
}

/// Parse every non-key header field of a table as a day range.
pub fn ranges_from_header(header: &[String], separator: char) -> Result<Vec<DayRange>, BinError> {
    header.iter().skip(1).map(|p| DayRange::parse(p, separator)).collect()
}
