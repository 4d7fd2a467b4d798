//! Linear value-to-pixel scales
//!
//! A scale is an explicit, side-effect-free function object built from a
//! `(domain, range)` pair. The mapping is affine and invertible; nothing is
//! clamped, so out-of-domain values map outside the range and the renderer
//! decides what to do with them.

use super::error::ConfigError;

/// Affine mapping from a data domain to a pixel range.
///
/// The range may be inverted (`r0 > r1`), which is how the Y axis places
/// larger values higher on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    /// Build a scale, rejecting a degenerate domain (`min == max`) up front
    /// so no NaN/Infinity coordinate can ever be produced. `axis` names the
    /// axis in the failure message.
    pub fn new(
        axis: &'static str,
        domain: (f64, f64),
        range: (f64, f64),
    ) -> Result<Self, ConfigError> {
        if domain.0 == domain.1 {
            return Err(ConfigError::DegenerateDomain {
                axis,
                value: domain.0,
            });
        }
        Ok(Self {
            d0: domain.0,
            d1: domain.1,
            r0: range.0,
            r1: range.1,
        })
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.d0, self.d1)
    }

    pub fn range(&self) -> (f64, f64) {
        (self.r0, self.r1)
    }

    /// Map a domain value to a pixel position.
    pub fn map(&self, value: f64) -> f64 {
        self.r0 + (value - self.d0) / (self.d1 - self.d0) * (self.r1 - self.r0)
    }

    /// Inverse of [`map`](Self::map); pixel position back to a domain value.
    pub fn invert(&self, pixel: f64) -> f64 {
        self.d0 + (pixel - self.r0) / (self.r1 - self.r0) * (self.d1 - self.d0)
    }

    /// `count` evenly spaced intervals across the domain, returned as
    /// `count + 1` boundary-inclusive tick values.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let count = count.max(1);
        let step = (self.d1 - self.d0) / count as f64;
        (0..=count).map(|i| self.d0 + step * i as f64).collect()
    }
}

/// Round `min` down and `max` up to a sensible step so axis ends land on
/// round numbers. The step is the smallest value on the 1/2/5 power-of-ten
/// ladder that keeps roughly ten intervals across the span.
///
/// Pure presentation nicety: a degenerate or non-finite span is returned
/// unchanged and left for scale construction to reject.
pub fn nice_bounds(min: f64, max: f64) -> (f64, f64) {
    let span = max - min;
    if !(span.is_finite() && span > 0.0) {
        return (min, max);
    }
    let step = nice_step(span / 10.0);
    ((min / step).floor() * step, (max / step).ceil() * step)
}

/// Smallest of 1, 2, 5 times a power of ten that is >= `raw`.
fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.abs().log10().floor());
    for mult in [1.0, 2.0, 5.0] {
        let candidate = mult * magnitude;
        if candidate >= raw {
            return candidate;
        }
    }
    10.0 * magnitude
}
