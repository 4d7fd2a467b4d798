//! Scatterplot rendering pipeline: data → scale → geometry → visual marks.

mod renderer;

pub use renderer::{build_frame, place_marks, AxisTick, ChartFrame, Mark, ScatterChart, Tooltip};

use crate::core::{ColorScale, ConfigError};

/// Margins that provide padding and space for the axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 20.0,
            bottom: 30.0,
            left: 30.0,
        }
    }
}

/// Outer drawing-surface size plus margins. The inner plotting area is
/// derived from it once per render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub width: f32,
    pub height: f32,
    pub margins: Margins,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 750.0,
            height: 750.0,
            margins: Margins::default(),
        }
    }
}

/// Inner plotting area; guaranteed positive by [`LayoutConfig::inner`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InnerArea {
    pub width: f32,
    pub height: f32,
}

impl LayoutConfig {
    /// `inner = outer − margins`, rejected if either dimension is not
    /// positive.
    pub fn inner(&self) -> Result<InnerArea, ConfigError> {
        let width = self.width - self.margins.left - self.margins.right;
        let height = self.height - self.margins.top - self.margins.bottom;
        if width <= 0.0 || height <= 0.0 {
            return Err(ConfigError::NonPositiveInner { width, height });
        }
        Ok(InnerArea { width, height })
    }
}

/// Per-chart options: the union of the original chart variants (fixed or
/// derived domains, color encoding, hover tooltips).
#[derive(Debug, Clone)]
pub struct ChartOptions {
    pub x_label: String,
    pub y_label: String,
    /// Fixed X domain; `None` derives it from the dataset extent with nice
    /// rounding.
    pub x_domain: Option<(f64, f64)>,
    /// Fixed Y domain; `None` derives it from the dataset extent with nice
    /// rounding.
    pub y_domain: Option<(f64, f64)>,
    /// Number of tick intervals per axis.
    pub tick_count: usize,
    pub point_radius: f32,
    /// Color encoding for the `score` dimension; `None` draws uniform marks.
    pub color: Option<ColorScale>,
    /// Attach hover handlers that drive the floating tooltip.
    pub tooltip: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            x_label: "X Value".to_string(),
            y_label: "Y Value".to_string(),
            x_domain: None,
            y_domain: None,
            tick_count: 10,
            point_radius: 3.5,
            color: None,
            tooltip: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_area_subtracts_margins() {
        let layout = LayoutConfig::default();
        let inner = layout.inner().unwrap();
        assert_eq!(inner.width, 700.0);
        assert_eq!(inner.height, 700.0);
    }

    #[test]
    fn non_positive_inner_rejected() {
        let layout = LayoutConfig {
            width: 40.0,
            height: 750.0,
            margins: Margins::default(),
        };
        let err = layout.inner().unwrap_err();
        assert!(matches!(err, ConfigError::NonPositiveInner { .. }));
    }

    #[test]
    fn exact_margin_sized_surface_rejected() {
        let layout = LayoutConfig {
            width: 50.0,
            height: 50.0,
            margins: Margins::default(),
        };
        assert!(layout.inner().is_err());
    }
}
