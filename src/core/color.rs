//! Piecewise-linear color scale for encoding a third numeric dimension.

use super::error::ConfigError;

/// An RGB color, 8 bits per channel. Kept egui-free so the core stays
/// platform-agnostic; the renderer converts to its surface's color type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
    pub const GREEN: Rgb = Rgb::new(0, 128, 0);

    /// Linear interpolation per channel, `t` in `[0, 1]`.
    fn lerp(a: Rgb, b: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb::new(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b))
    }
}

/// One anchor of a color scale: this value maps to exactly this color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub value: f64,
    pub color: Rgb,
}

impl ColorStop {
    pub const fn new(value: f64, color: Rgb) -> Self {
        Self { value, color }
    }
}

/// Piecewise-linear interpolation across a small number of anchor stops.
///
/// Values below the first stop clamp to its color, values above the last
/// stop clamp to its color.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    stops: Vec<ColorStop>,
}

impl ColorScale {
    /// Requires at least two stops with strictly ascending values.
    pub fn new(stops: Vec<ColorStop>) -> Result<Self, ConfigError> {
        if stops.len() < 2 {
            return Err(ConfigError::BadColorStops {
                reason: "at least two stops are required",
            });
        }
        if stops.windows(2).any(|w| w[0].value >= w[1].value) {
            return Err(ConfigError::BadColorStops {
                reason: "stop values must be strictly ascending",
            });
        }
        Ok(Self { stops })
    }

    /// The red/yellow/green ramp over `[0, 100]` used by the score-encoded
    /// charts.
    pub fn traffic_light() -> Self {
        Self {
            stops: vec![
                ColorStop::new(0.0, Rgb::RED),
                ColorStop::new(50.0, Rgb::YELLOW),
                ColorStop::new(100.0, Rgb::GREEN),
            ],
        }
    }

    /// Color for `value`, clamped at both ends of the stop list.
    pub fn color_at(&self, value: f64) -> Rgb {
        let first = self.stops[0];
        let last = self.stops[self.stops.len() - 1];
        if value <= first.value {
            return first.color;
        }
        if value >= last.value {
            return last.color;
        }
        for pair in self.stops.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if value <= hi.value {
                let t = (value - lo.value) / (hi.value - lo.value);
                return Rgb::lerp(lo.color, hi.color, t);
            }
        }
        last.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_map_exactly() {
        let scale = ColorScale::traffic_light();
        assert_eq!(scale.color_at(0.0), Rgb::RED);
        assert_eq!(scale.color_at(50.0), Rgb::YELLOW);
        assert_eq!(scale.color_at(100.0), Rgb::GREEN);
    }

    #[test]
    fn between_anchors_interpolates() {
        let scale = ColorScale::traffic_light();
        // Halfway between red and yellow: green channel at half intensity.
        let mid = scale.color_at(25.0);
        assert_eq!(mid.r, 255);
        assert_eq!(mid.g, 128);
        assert_eq!(mid.b, 0);
    }

    #[test]
    fn out_of_range_clamps() {
        let scale = ColorScale::traffic_light();
        assert_eq!(scale.color_at(-10.0), Rgb::RED);
        assert_eq!(scale.color_at(1000.0), Rgb::GREEN);
    }

    #[test]
    fn too_few_stops_rejected() {
        let err = ColorScale::new(vec![ColorStop::new(0.0, Rgb::RED)]).unwrap_err();
        assert!(matches!(err, ConfigError::BadColorStops { .. }));
    }

    #[test]
    fn non_ascending_stops_rejected() {
        let err = ColorScale::new(vec![
            ColorStop::new(10.0, Rgb::RED),
            ColorStop::new(10.0, Rgb::GREEN),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::BadColorStops { .. }));
    }
}
