// File: crates/dashboard-core/src/chart.rs
// Summary: ChartData (period labels + aligned series) and tooltip footer totals.

use serde::Serialize;

use crate::series::ChartSeries;

/// Chart-ready data in the stacked line renderer's shape:
/// `{"labels": [...], "datasets": [...]}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    #[serde(rename = "datasets")]
    pub series: Vec<ChartSeries>,
}

impl ChartData {
    pub fn new() -> Self {
        Self { labels: Vec::new(), series: Vec::new() }
    }

    /// Number of periods on the X axis.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Sum of numeric values of visible series at period `index`.
    pub fn period_total(&self, index: usize) -> f64 {
        self.series
            .iter()
            .filter(|s| !s.hidden)
            .filter_map(|s| s.values.get(index).and_then(|d| d.as_f64()))
            .sum()
    }

    /// Tooltip footer for period `index`. Totals are meaningless for
    /// percentage shares, so relative charts get none.
    pub fn footer(&self, index: usize, relative: bool) -> Option<String> {
        if relative || index >= self.len() {
            return None;
        }
        Some(format!("Total: {}", self.period_total(index)))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Default for ChartData {
    fn default() -> Self { Self::new() }
}
