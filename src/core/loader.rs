//! CSV data loader
//!
//! The renderer's single external collaborator: reads a comma-separated file
//! with a header row and returns either a full [`Dataset`] or a
//! [`LoadError`]. Numeric strings are converted here, so by the time the
//! renderer sees a point every field is already numeric.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use super::data::{DataPoint, Dataset};
use super::error::LoadError;

/// A CSV row as it arrives: named fields, all text. Only `x` and `y` are
/// required columns.
#[derive(Debug, Deserialize)]
struct RawRecord {
    x: String,
    y: String,
    #[serde(default)]
    score: Option<String>,
    #[serde(default)]
    label: Option<String>,
}

/// Load a dataset from a CSV file on disk.
pub fn load_csv(path: &Path) -> Result<Dataset, LoadError> {
    let reader = csv::Reader::from_path(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let data = read_records(reader)?;
    info!(path = %path.display(), points = data.len(), "dataset loaded");
    Ok(data)
}

/// Parse all records from an open CSV reader.
///
/// The first malformed record or non-numeric field aborts the whole load;
/// there is no partial dataset.
pub fn read_records<R: Read>(mut reader: csv::Reader<R>) -> Result<Dataset, LoadError> {
    let mut points = Vec::new();
    for (row, record) in reader.deserialize::<RawRecord>().enumerate() {
        // Errors report the file line: header on line 1, first record on 2.
        let line = row + 2;
        let raw = record?;
        let mut point = DataPoint::new(
            parse_field(line, "x", &raw.x)?,
            parse_field(line, "y", &raw.y)?,
        );
        point.score = match raw.score.as_deref() {
            Some(s) if !s.trim().is_empty() => Some(parse_field(line, "score", s)?),
            _ => None,
        };
        point.label = raw.label.filter(|l| !l.trim().is_empty());
        points.push(point);
    }
    debug!(points = points.len(), "records parsed");
    Ok(Dataset::new(points))
}

/// Parse a numeric field. Non-finite values (`inf`, `NaN`) parse as f64 but
/// would poison every coordinate downstream, so they are rejected here too.
fn parse_field(line: usize, column: &'static str, raw: &str) -> Result<f64, LoadError> {
    let bad = || LoadError::BadNumber {
        line,
        column,
        value: raw.to_string(),
    };
    let value = raw.trim().parse::<f64>().map_err(|_| bad())?;
    if !value.is_finite() {
        return Err(bad());
    }
    Ok(value)
}
