//! Natural cubic spline interpolation.

use crate::error::{validate_knots, MathError, MathResult};
use crate::interpolation::{find_segment, Interpolator};

/// Natural cubic spline interpolation.
///
/// Piecewise cubic polynomials with continuous first and second derivatives.
/// "Natural" means the second derivative is zero at both endpoints.
///
/// # Example
///
/// ```rust
/// use termcurve_math::interpolation::{CubicSpline, Interpolator};
///
/// let maturities = vec![0.25, 2.0, 5.0, 10.0, 30.0];
/// let yields = vec![4.02, 3.52, 3.61, 4.06, 4.67];
///
/// let spline = CubicSpline::new(maturities, yields).unwrap();
/// let y = spline.interpolate(7.0).unwrap();
/// assert!(y > 3.5 && y < 4.2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Second derivatives at each knot
    y2s: Vec<f64>,
}

impl CubicSpline {
    /// Creates a natural cubic spline interpolator.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 3 points, if lengths differ,
    /// or if the knots are not finite and strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_knots(&xs, &ys, 3)?;
        let y2s = compute_second_derivatives(&xs, &ys);

        Ok(Self { xs, ys, y2s })
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

impl Interpolator for CubicSpline {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        self.check_range(x)?;

        let i = find_segment(&self.xs, x);
        let (x_lo, x_hi) = (self.xs[i], self.xs[i + 1]);
        let h = x_hi - x_lo;
        let a = (x_hi - x) / h;
        let b = (x - x_lo) / h;

        Ok(a * self.ys[i]
            + b * self.ys[i + 1]
            + ((a * a * a - a) * self.y2s[i] + (b * b * b - b) * self.y2s[i + 1]) * (h * h)
                / 6.0)
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}

/// Computes the knot second derivatives of a natural cubic spline
/// (tridiagonal decomposition and back-substitution).
fn compute_second_derivatives(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let n = xs.len();
    let mut y2s = vec![0.0; n];
    let mut u = vec![0.0; n - 1];

    for i in 1..n - 1 {
        let sig = (xs[i] - xs[i - 1]) / (xs[i + 1] - xs[i - 1]);
        let p = sig * y2s[i - 1] + 2.0;
        y2s[i] = (sig - 1.0) / p;
        let slope_change =
            (ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i]) - (ys[i] - ys[i - 1]) / (xs[i] - xs[i - 1]);
        u[i] = (6.0 * slope_change / (xs[i + 1] - xs[i - 1]) - sig * u[i - 1]) / p;
    }

    // y2[n-1] stays 0 (natural boundary)
    for i in (0..n - 1).rev() {
        y2s[i] = y2s[i] * y2s[i + 1] + u[i];
    }

    y2s
}
