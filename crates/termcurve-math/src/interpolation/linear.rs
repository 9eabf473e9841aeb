//! Linear interpolation.

use crate::error::{validate_knots, MathError, MathResult};
use crate::interpolation::{find_segment, Interpolator};

/// Linear interpolation between data points.
///
/// Consecutive knots are joined with straight lines:
/// `y = y1 + (y2 - y1) * (x - x1) / (x2 - x1)`.
///
/// # Example
///
/// ```rust
/// use termcurve_math::interpolation::{Interpolator, LinearInterpolator};
///
/// let maturities = vec![2.0, 10.0];
/// let yields = vec![3.52, 4.06];
///
/// let interp = LinearInterpolator::new(maturities, yields).unwrap();
/// let y = interp.interpolate(5.0).unwrap();
/// assert!((y - 3.7225).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl LinearInterpolator {
    /// Creates a new linear interpolator.
    ///
    /// # Arguments
    ///
    /// * `xs` - X coordinates (must be strictly increasing)
    /// * `ys` - Y coordinates
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points, if lengths differ,
    /// or if the knots are not finite and strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_knots(&xs, &ys, 2)?;
        Ok(Self { xs, ys })
    }

    fn check_range(&self, x: f64) -> MathResult<()> {
        if !self.in_range(x) {
            return Err(MathError::extrapolation_not_allowed(
                x,
                self.min_x(),
                self.max_x(),
            ));
        }
        Ok(())
    }
}

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        self.check_range(x)?;

        let i = find_segment(&self.xs, x);
        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (y0, y1) = (self.ys[i], self.ys[i + 1]);

        Ok(y0 + (y1 - y0) * (x - x0) / (x1 - x0))
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}
