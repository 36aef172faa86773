// File: crates/dashboard-core/src/types.rs
// Summary: Shared constants (default window, separators, data layout).

/// Default number of most recent periods shown per chart.
pub const DEFAULT_WINDOW: usize = 30;

/// Largest window accepted anywhere; a century of daily periods.
pub const MAX_WINDOW: usize = 36_500;

/// Separates a query parameter from its display label in header fields,
/// e.g. `S-waiting-on-review|Waiting on review`.
pub const LABEL_SEPARATOR: char = '|';

/// Directory, relative to the dashboard root, holding one CSV per chart.
pub const DATA_DIR: &str = "data";

/// File extension of chart data files.
pub const DATA_EXT: &str = "csv";

/// Date format used for period labels written by the recorder.
pub const PERIOD_DATE_FORMAT: &str = "%Y-%m-%d";
