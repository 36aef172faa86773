// File: crates/dashboard-core/src/builder.rs
// Summary: Series builder turning a RawTable into windowed, aligned ChartData.
// Notes:
// - Tables are stored most-recent-first. Periods are walked from `window`
//   down to 1, so output runs oldest to newest, left to right.
// - Malformed cells never fail the build: text passes through in absolute
//   mode and becomes NaN in relative mode.

use tracing::{trace, warn};

use crate::chart::ChartData;
use crate::label::series_label;
use crate::series::{ChartSeries, Datum};
use crate::table::RawTable;
use crate::theme::Palette;
use crate::types::{LABEL_SEPARATOR, MAX_WINDOW};
use crate::view::DisplayParams;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BuilderOptions {
    pub palette: Palette,
    pub separator: char,
}

impl Default for BuilderOptions {
    fn default() -> Self {
        Self { palette: Palette::classic(), separator: LABEL_SEPARATOR }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SeriesBuilder {
    opts: BuilderOptions,
}

impl SeriesBuilder {
    pub fn new(opts: BuilderOptions) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &BuilderOptions {
        &self.opts
    }

    /// Build `params.window` periods of chart data from `table`.
    ///
    /// Periods older than the available history are padded with an empty
    /// label and zero for every series, so every sequence has exactly
    /// `params.window` entries. Windows above [`MAX_WINDOW`] are capped.
    pub fn build(&self, table: &RawTable, params: DisplayParams) -> ChartData {
        let window = params.window.min(MAX_WINDOW);
        let rows = table.period_rows();
        // Reserve only what the history can fill.
        let reserve = window.min(rows.len() + 1);
        let mut series: Vec<ChartSeries> = table
            .header()
            .iter()
            .skip(1)
            .enumerate()
            .map(|(i, field)| {
                ChartSeries::with_capacity(
                    series_label(field, self.opts.separator),
                    self.opts.palette.color(i),
                    reserve,
                )
            })
            .collect();

        let mut labels = Vec::with_capacity(reserve);

        for p in (1..=window).rev() {
            let Some(row) = rows.get(p - 1) else {
                labels.push(String::new());
                for s in series.iter_mut() {
                    s.values.push(Datum::Number(0.0));
                }
                continue;
            };

            let period = row.first().cloned().unwrap_or_default();
            if row.len() != series.len() + 1 {
                warn!(period = %period, expected = series.len() + 1, found = row.len(), "ragged row");
            }

            // Missing cells read as empty; extra cells are ignored.
            let fields = (1..=series.len()).map(|j| row.get(j).map(String::as_str).unwrap_or(""));
            if params.relative {
                let shares = relative_shares(fields);
                if shares.iter().any(|v| !v.is_finite()) {
                    warn!(period = %period, "relative share is not finite (zero or non-numeric row sum)");
                }
                for (s, v) in series.iter_mut().zip(shares) {
                    s.values.push(Datum::Number(v));
                }
            } else {
                for (s, f) in series.iter_mut().zip(fields) {
                    s.values.push(Datum::from_field(f));
                }
            }
            labels.push(period);
        }

        trace!(window, series = series.len(), available = rows.len(), "built chart data");
        ChartData { labels, series }
    }
}

/// Leading integer of a field: optional sign then digits, anything after is
/// ignored. `None` when there are no digits.
pub fn parse_count(field: &str) -> Option<f64> {
    let s = field.trim_start();
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => (-1.0, &s[1..]),
        Some(b'+') => (1.0, &s[1..]),
        _ => (1.0, s),
    };
    let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    rest[..end].parse::<f64>().ok().map(|v| sign * v)
}

/// Percentage share of each field in the row sum, rounded to two decimals.
/// A zero sum yields NaN/infinite shares.
pub fn relative_shares<'a>(fields: impl IntoIterator<Item = &'a str>) -> Vec<f64> {
    let values: Vec<f64> = fields
        .into_iter()
        .map(|f| parse_count(f).unwrap_or(f64::NAN))
        .collect();
    let sum: f64 = values.iter().sum();
    values.iter().map(|v| round2(v * 100.0 / sum)).collect()
}

#[inline]
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
