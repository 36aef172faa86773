// File: crates/dashboard-core/src/lib.rs
// Summary: Core library entry point; exports CSV tables, the series builder and dashboard state.

pub mod bins;
pub mod builder;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod gate;
pub mod label;
pub mod record;
pub mod series;
pub mod table;
pub mod theme;
pub mod toc;
pub mod types;
pub mod view;

pub use bins::{histogram, DayRange};
pub use builder::{BuilderOptions, SeriesBuilder};
pub use chart::ChartData;
pub use config::{DashboardConfig, GraphConfig};
pub use dashboard::Dashboard;
pub use error::{BinError, ConfigError, DashboardError, ParseError};
pub use gate::RedrawGate;
pub use label::{query_param, series_label};
pub use record::{record_ages, record_on, record_today};
pub use series::{ChartSeries, Datum};
pub use table::RawTable;
pub use theme::Palette;
pub use toc::{build_toc, TocEntry};
pub use view::DisplayParams;
