// File: crates/dashboard-core/src/series.rs
// Summary: Series model: one labeled, colored value sequence per non-key CSV column.
// Notes:
// - Values keep the raw text of non-numeric fields so a renderer that accepts
//   string-typed numbers sees exactly what the file held.

use serde::Serialize;

/// One cell of a series.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Datum {
    Number(f64),
    Text(String),
}

impl Datum {
    /// Interpret a CSV field: finite numbers become `Number`, anything else
    /// passes through as `Text`.
    pub fn from_field(field: &str) -> Self {
        match field.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Datum::Number(v),
            _ => Datum::Text(field.to_owned()),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Datum::Number(v) => Some(*v),
            Datum::Text(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartSeries {
    pub label: String,
    #[serde(rename = "data")]
    pub values: Vec<Datum>,
    #[serde(rename = "backgroundColor")]
    pub color: String,
    /// Hidden series (legend toggled off) are left out of period totals.
    pub hidden: bool,
}

impl ChartSeries {
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self { label: label.into(), values: Vec::new(), color: color.into(), hidden: false }
    }

    pub fn with_capacity(label: impl Into<String>, color: impl Into<String>, capacity: usize) -> Self {
        let mut s = Self::new(label, color);
        s.values.reserve(capacity);
        s
    }
}
