//! Interpolation methods for yield curve construction.
//!
//! # Available Methods
//!
//! - [`LinearInterpolator`]: piecewise-linear, the method every curve query uses
//! - [`CubicSpline`]: natural cubic spline for smoothed display curves
//!
//! | Method | Smoothness | Overshoot | Use Case |
//! |--------|------------|-----------|----------|
//! | Linear | C0 | Never | Reported yields, spreads, forwards |
//! | Cubic Spline | C2 | Possible | Smoothed charts |

mod cubic_spline;
mod linear;

pub use cubic_spline::CubicSpline;
pub use linear::LinearInterpolator;

use crate::error::MathResult;

/// Trait for interpolation methods.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated value at x.
    fn interpolate(&self, x: f64) -> MathResult<f64>;

    /// Returns the minimum x value in the data.
    fn min_x(&self) -> f64;

    /// Returns the maximum x value in the data.
    fn max_x(&self) -> f64;

    /// Checks if x is within the interpolation range.
    fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}

/// Finds the index i such that `xs[i] <= x < xs[i+1]`, clamped to the
/// first and last segments.
pub(crate) fn find_segment(xs: &[f64], x: f64) -> usize {
    let last = xs.len() - 2;
    match xs.binary_search_by(|probe| probe.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal)) {
        Ok(i) => i.min(last),
        Err(i) => i.saturating_sub(1).min(last),
    }
}
