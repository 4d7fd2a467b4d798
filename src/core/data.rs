//! Dataset model for the scatterplot
//!
//! Points are immutable once loaded; the renderer only reads them.

/// One record of the input data: an XY pair, an optional third numeric
/// dimension used for color encoding, and optional tooltip text.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
    pub score: Option<f64>,
    pub label: Option<String>,
}

impl DataPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            score: None,
            label: None,
        }
    }
}

/// An immutable sequence of data points plus extent queries.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    points: Vec<DataPoint>,
}

impl Dataset {
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DataPoint> {
        self.points.iter()
    }

    /// `[min, max]` of the X values, `None` for an empty dataset.
    pub fn x_extent(&self) -> Option<(f64, f64)> {
        extent(self.points.iter().map(|p| p.x))
    }

    /// `[min, max]` of the Y values, `None` for an empty dataset.
    pub fn y_extent(&self) -> Option<(f64, f64)> {
        extent(self.points.iter().map(|p| p.y))
    }

    /// `[min, max]` of the score values, `None` if no point carries one.
    pub fn score_extent(&self) -> Option<(f64, f64)> {
        extent(self.points.iter().filter_map(|p| p.score))
    }
}

/// `[min, max]` of a sequence of values, ignoring non-finite entries.
pub fn extent(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut result: Option<(f64, f64)> = None;
    for v in values {
        if !v.is_finite() {
            continue;
        }
        result = Some(match result {
            Some((lo, hi)) => (lo.min(v), hi.max(v)),
            None => (v, v),
        });
    }
    result
}
