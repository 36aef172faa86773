// File: crates/dashboard-core/src/error.rs
// Summary: Error types for parsing, configuration, binning and dashboard operations.

use thiserror::Error;

/// Failure to turn raw CSV text into a [`RawTable`](crate::RawTable).
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("input has no header row")]
    Empty,

    #[error("line {line}: expected {expected} fields, found {found}")]
    Ragged { line: u64, expected: u64, found: u64 },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("duplicate graph id '{0}'")]
    DuplicateId(String),

    #[error("graph id must not be empty")]
    EmptyId,

    #[error("window must be positive")]
    ZeroWindow,

    #[error("window {0} exceeds the maximum of {max}", max = crate::types::MAX_WINDOW)]
    WindowTooLarge(usize),
}

/// A header parameter that does not describe a relative day range.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BinError {
    #[error("empty day range")]
    Empty,

    #[error("invalid day count '{0}'")]
    InvalidNumber(String),
}

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("chart '{id}': {source}")]
    Parse {
        id: String,
        #[source]
        source: ParseError,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Bin(#[from] BinError),

    #[error("unknown chart '{0}'")]
    UnknownChart(String),

    #[error("record has {found} values but the table has {expected} series")]
    Record { expected: usize, found: usize },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
