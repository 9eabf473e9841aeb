//! Flat (constant) extrapolation.

use super::Extrapolator;

/// Flat extrapolation: the boundary value is held constant.
///
/// Applied on either side of a curve, so it works for the short end
/// (before the first knot) as well as the long end.
///
/// # Example
///
/// ```rust
/// use termcurve_math::extrapolation::{Extrapolator, FlatExtrapolator};
///
/// let extrap = FlatExtrapolator;
///
/// // 30Y observed at 4.67%: 50Y reads the same
/// let rate = extrap.extrapolate(50.0, 30.0, 4.67);
/// assert_eq!(rate, 4.67);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatExtrapolator;

impl Extrapolator for FlatExtrapolator {
    fn extrapolate(&self, _t: f64, _edge_t: f64, edge_value: f64) -> f64 {
        edge_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_flat_returns_edge_value() {
        let extrap = FlatExtrapolator;

        for t in [31.0, 50.0, 100.0] {
            assert_relative_eq!(extrap.extrapolate(t, 30.0, 4.67), 4.67, epsilon = 1e-15);
        }
        // short end
        assert_relative_eq!(extrap.extrapolate(0.01, 1.0 / 12.0, 4.20), 4.20, epsilon = 1e-15);
    }
}
