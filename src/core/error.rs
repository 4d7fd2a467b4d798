//! Error types for data loading and chart configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading the input data source.
///
/// A load failure is fatal to the render attempt: the caller shows the error
/// instead of a chart. There is no retry.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: csv::Error,
    },

    #[error("malformed record: {source}")]
    Record {
        #[from]
        source: csv::Error,
    },

    #[error("line {line}: column '{column}' is not a finite number: '{value}'")]
    BadNumber {
        /// 1-based file line, counting the header.
        line: usize,
        column: &'static str,
        value: String,
    },
}

/// Errors raised when a chart configuration cannot produce finite
/// coordinates. Rejected up front, before any geometry is computed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("inner plot area is not positive: {width}x{height} after margins")]
    NonPositiveInner { width: f32, height: f32 },

    #[error("degenerate {axis} domain: min == max == {value}")]
    DegenerateDomain { axis: &'static str, value: f64 },

    #[error("cannot derive a {axis} domain from an empty dataset")]
    EmptyDomain { axis: &'static str },

    #[error("invalid color stops: {reason}")]
    BadColorStops { reason: &'static str },
}
