//! The in-memory yield curve and its query operations.
//!
//! A [`YieldCurve`] is an immutable snapshot: observations for one date,
//! sorted strictly ascending by maturity. Every query is total. An empty
//! curve answers `0.0` (or [`CurveShape::Insufficient`]) instead of failing,
//! and degenerate forward/duration math is absorbed to `0.0`. The `try_*`
//! variants expose the underlying [`CurveError::DegenerateInterval`].

use chrono::NaiveDate;
use termcurve_math::extrapolation::{Extrapolator, FlatExtrapolator};
use termcurve_math::interpolation::{CubicSpline, Interpolator, LinearInterpolator};
use tracing::warn;

use crate::catalog::MATURITY_TOLERANCE;
use crate::error::{CurveError, CurveResult};
use crate::observation::YieldObservation;
use crate::shape::{CurveShape, LONG_PILLAR, MEDIUM_PILLAR, MIN_SHAPE_OBSERVATIONS, SHORT_PILLAR};

/// Calendar date format used by rate releases.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A benchmark yield curve for a single date.
///
/// # Example
///
/// ```rust
/// use termcurve_curves::{YieldCurve, YieldObservation};
///
/// let curve = YieldCurve::new(
///     "2025-09-17",
///     vec![
///         YieldObservation::new(0.25, 4.02, "3MO").unwrap(),
///         YieldObservation::new(2.0, 3.52, "2Y").unwrap(),
///         YieldObservation::new(10.0, 4.06, "10Y").unwrap(),
///     ],
/// )
/// .unwrap();
///
/// assert!((curve.yield_at(5.0) - 3.7225).abs() < 1e-12);
/// assert!((curve.spread(2.0, 10.0) - 0.54).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct YieldCurve {
    date: String,
    observations: Vec<YieldObservation>,
    /// Present when there are at least two observations.
    linear: Option<LinearInterpolator>,
    /// Present when there are at least three observations.
    spline: Option<CubicSpline>,
}

impl YieldCurve {
    /// Builds a curve, sorting observations by maturity.
    ///
    /// Observations whose maturity duplicates an earlier one (within
    /// 1e-6 years) are dropped; the first occurrence is kept.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidObservation`] if any observation carries a
    /// non-finite or non-positive maturity, or a non-finite yield.
    pub fn new(date: impl Into<String>, observations: Vec<YieldObservation>) -> CurveResult<Self> {
        let date = date.into();
        let mut observations = observations
            .into_iter()
            .map(|o| YieldObservation::new(o.maturity_years(), o.yield_percent(), o.label()))
            .collect::<CurveResult<Vec<_>>>()?;

        observations.sort_by(|a, b| a.maturity_years().total_cmp(&b.maturity_years()));

        let before = observations.len();
        observations.dedup_by(|later, earlier| {
            (later.maturity_years() - earlier.maturity_years()).abs() < MATURITY_TOLERANCE
        });
        if observations.len() < before {
            warn!(
                date = %date,
                dropped = before - observations.len(),
                "dropped observations with duplicate maturities"
            );
        }

        let xs: Vec<f64> = observations.iter().map(YieldObservation::maturity_years).collect();
        let ys: Vec<f64> = observations.iter().map(YieldObservation::yield_percent).collect();
        let linear = (xs.len() >= 2)
            .then(|| LinearInterpolator::new(xs.clone(), ys.clone()).ok())
            .flatten();
        let spline = (xs.len() >= 3).then(|| CubicSpline::new(xs, ys).ok()).flatten();

        Ok(Self {
            date,
            observations,
            linear,
            spline,
        })
    }

    /// A curve with no observations. Every query returns its documented default.
    pub fn empty(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            observations: Vec::new(),
            linear: None,
            spline: None,
        }
    }

    /// Date identifier the curve was loaded for.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// The curve date parsed as `YYYY-MM-DD`, if it is in that format.
    pub fn as_of(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).ok()
    }

    /// Observations in ascending maturity order.
    pub fn observations(&self) -> &[YieldObservation] {
        &self.observations
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// True if no observations were loaded.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Shortest observed maturity.
    pub fn min_maturity(&self) -> Option<f64> {
        self.observations.first().map(YieldObservation::maturity_years)
    }

    /// Longest observed maturity.
    pub fn max_maturity(&self) -> Option<f64> {
        self.observations.last().map(YieldObservation::maturity_years)
    }

    /// Yield (percent) at an arbitrary maturity.
    ///
    /// - empty curve: `0.0`
    /// - within 1e-6 years of an observation: that observation's yield
    /// - outside the observed range: the nearest boundary yield
    /// - otherwise: linear interpolation between the bracketing observations
    pub fn yield_at(&self, maturity: f64) -> f64 {
        self.query(maturity, self.linear.as_ref())
    }

    /// Natural cubic spline yield through the observations.
    ///
    /// Same boundary behavior as [`yield_at`](Self::yield_at); falls back to
    /// linear interpolation for curves with fewer than three observations.
    pub fn smoothed_yield(&self, maturity: f64) -> f64 {
        match &self.spline {
            Some(spline) => self.query(maturity, Some(spline)),
            None => self.yield_at(maturity),
        }
    }

    fn query<I: Interpolator>(&self, maturity: f64, interpolator: Option<&I>) -> f64 {
        let (Some(first), Some(last)) = (self.observations.first(), self.observations.last()) else {
            return 0.0;
        };

        if let Some(exact) = self
            .observations
            .iter()
            .find(|o| (o.maturity_years() - maturity).abs() < MATURITY_TOLERANCE)
        {
            return exact.yield_percent();
        }

        if maturity <= first.maturity_years() {
            return FlatExtrapolator.extrapolate(
                maturity,
                first.maturity_years(),
                first.yield_percent(),
            );
        }
        if maturity >= last.maturity_years() {
            return FlatExtrapolator.extrapolate(
                maturity,
                last.maturity_years(),
                last.yield_percent(),
            );
        }

        interpolator
            .and_then(|i| i.interpolate(maturity).ok())
            .unwrap_or(0.0)
    }

    /// Implied annually-compounded forward rate (percent) between two maturities.
    ///
    /// `((1 + y2)^end / (1 + y1)^start)^(1 / (end - start)) - 1`
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::DegenerateInterval`] if `end <= start` or the
    /// result is not finite.
    pub fn try_forward_rate(&self, start: f64, end: f64) -> CurveResult<f64> {
        if start.is_nan() || end.is_nan() || end <= start {
            return Err(CurveError::degenerate_interval(
                start,
                end,
                "end must be after start",
            ));
        }

        let y1 = self.yield_at(start) / 100.0;
        let y2 = self.yield_at(end) / 100.0;
        let growth = (1.0 + y2).powf(end) / (1.0 + y1).powf(start);
        let forward = growth.powf(1.0 / (end - start)) - 1.0;

        if !forward.is_finite() {
            return Err(CurveError::degenerate_interval(
                start,
                end,
                "forward rate is not finite",
            ));
        }
        Ok(forward * 100.0)
    }

    /// Implied forward rate (percent), `0.0` when undefined.
    pub fn forward_rate(&self, start: f64, end: f64) -> f64 {
        self.try_forward_rate(start, end).unwrap_or(0.0)
    }

    /// Duration proxy (years).
    ///
    /// A zero coupon gives the maturity itself. Otherwise the approximate
    /// modified duration `maturity / (1 + yield)` at the curve yield.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::DegenerateInterval`] if the maturity is not finite,
    /// the yield is -100%, or the result is not finite.
    #[allow(clippy::float_cmp)]
    pub fn try_duration(&self, maturity: f64, coupon_rate: f64) -> CurveResult<f64> {
        if !maturity.is_finite() {
            return Err(CurveError::degenerate_interval(
                0.0,
                maturity,
                "maturity is not finite",
            ));
        }
        if coupon_rate == 0.0 {
            return Ok(maturity);
        }

        let denominator = 1.0 + self.yield_at(maturity) / 100.0;
        if denominator.abs() < f64::EPSILON {
            return Err(CurveError::degenerate_interval(
                0.0,
                maturity,
                "yield of -100% makes duration undefined",
            ));
        }

        let duration = maturity / denominator;
        if !duration.is_finite() {
            return Err(CurveError::degenerate_interval(
                0.0,
                maturity,
                "duration is not finite",
            ));
        }
        Ok(duration)
    }

    /// Duration proxy (years), `0.0` when undefined.
    pub fn duration(&self, maturity: f64, coupon_rate: f64) -> f64 {
        self.try_duration(maturity, coupon_rate).unwrap_or(0.0)
    }

    /// Yield spread `yield(m2) - yield(m1)` in percentage points.
    pub fn spread(&self, m1: f64, m2: f64) -> f64 {
        self.yield_at(m2) - self.yield_at(m1)
    }

    /// Classifies the curve from its 3M, 5Y and 30Y yields.
    pub fn classify_shape(&self) -> CurveShape {
        if self.observations.len() < MIN_SHAPE_OBSERVATIONS {
            return CurveShape::Insufficient;
        }
        CurveShape::classify(
            self.yield_at(SHORT_PILLAR),
            self.yield_at(MEDIUM_PILLAR),
            self.yield_at(LONG_PILLAR),
        )
    }
}

impl PartialEq for YieldCurve {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date && self.observations == other.observations
    }
}

impl Default for YieldCurve {
    fn default() -> Self {
        Self::empty("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn obs(m: f64, y: f64, label: &str) -> YieldObservation {
        YieldObservation::new(m, y, label).unwrap()
    }

    fn sample_curve() -> YieldCurve {
        YieldCurve::new(
            "2025-09-17",
            vec![
                obs(10.0, 4.06, "10Y"),
                obs(0.25, 4.02, "3MO"),
                obs(2.0, 3.52, "2Y"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_sorted_on_construction() {
        let curve = sample_curve();
        let maturities: Vec<f64> = curve.observations().iter().map(|o| o.maturity_years()).collect();
        assert_eq!(maturities, vec![0.25, 2.0, 10.0]);
        assert_eq!(curve.min_maturity(), Some(0.25));
        assert_eq!(curve.max_maturity(), Some(10.0));
    }

    #[test]
    fn test_duplicates_dropped_first_wins() {
        let curve = YieldCurve::new(
            "2025-09-17",
            vec![obs(2.0, 3.52, "2Y"), obs(2.0, 9.99, "24MO"), obs(5.0, 3.61, "5Y")],
        )
        .unwrap();
        assert_eq!(curve.len(), 2);
        assert_eq!(curve.yield_at(2.0), 3.52);
        assert_eq!(curve.observations()[0].label(), "2Y");
    }

    #[test]
    fn test_linear_interpolation() {
        let curve = sample_curve();
        assert_relative_eq!(curve.yield_at(5.0), 3.7225, epsilon = 1e-12);
    }

    #[test]
    fn test_exact_match_within_tolerance() {
        let curve = sample_curve();
        assert_eq!(curve.yield_at(2.0 + 5e-7), 3.52);
        assert_eq!(curve.yield_at(10.0), 4.06);
    }

    #[test]
    fn test_flat_extrapolation() {
        let curve = sample_curve();
        assert_eq!(curve.yield_at(0.01), 4.02);
        assert_eq!(curve.yield_at(30.0), 4.06);
        assert_eq!(curve.yield_at(100.0), 4.06);
    }

    #[test]
    fn test_single_observation_is_flat() {
        let curve = YieldCurve::new("2025-09-17", vec![obs(2.0, 3.52, "2Y")]).unwrap();
        assert_eq!(curve.yield_at(0.5), 3.52);
        assert_eq!(curve.yield_at(30.0), 3.52);
        assert_eq!(curve.smoothed_yield(7.0), 3.52);
    }

    #[test]
    fn test_empty_curve_defaults() {
        let curve = YieldCurve::empty("2025-09-17");
        assert!(curve.is_empty());
        assert_eq!(curve.yield_at(5.0), 0.0);
        assert_eq!(curve.smoothed_yield(5.0), 0.0);
        assert_eq!(curve.spread(2.0, 10.0), 0.0);
        assert_eq!(curve.forward_rate(1.0, 2.0), 0.0);
        assert_eq!(curve.classify_shape(), CurveShape::Insufficient);
        assert_eq!(curve.min_maturity(), None);
    }

    #[test]
    fn test_spread() {
        let curve = sample_curve();
        assert_relative_eq!(curve.spread(2.0, 10.0), 0.54, epsilon = 1e-12);
        assert_relative_eq!(curve.spread(10.0, 2.0), -0.54, epsilon = 1e-12);
    }

    #[test]
    fn test_forward_rate() {
        let curve = sample_curve();
        let y2 = 0.0352_f64;
        let y10 = 0.0406_f64;
        let expected = (((1.0 + y10).powf(10.0) / (1.0 + y2).powf(2.0)).powf(1.0 / 8.0) - 1.0) * 100.0;
        assert_relative_eq!(curve.forward_rate(2.0, 10.0), expected, epsilon = 1e-10);
        // flat segment beyond 10Y forwards at the 10Y yield
        assert_relative_eq!(curve.forward_rate(10.0, 20.0), 4.06, epsilon = 1e-10);
    }

    #[test]
    fn test_forward_rate_degenerate() {
        let curve = sample_curve();
        assert_eq!(curve.forward_rate(5.0, 5.0), 0.0);
        assert_eq!(curve.forward_rate(10.0, 2.0), 0.0);
        assert!(matches!(
            curve.try_forward_rate(10.0, 2.0),
            Err(CurveError::DegenerateInterval { .. })
        ));
        assert_eq!(curve.forward_rate(f64::NAN, 2.0), 0.0);
    }

    #[test]
    fn test_forward_rate_non_finite_absorbed() {
        // a -150% yield puts a negative base under a fractional power
        let curve = YieldCurve::new("x", vec![obs(1.0, -150.0, "1Y"), obs(2.0, 3.0, "2Y")]).unwrap();
        assert!(curve.try_forward_rate(0.5, 1.5).is_err());
        assert_eq!(curve.forward_rate(0.5, 1.5), 0.0);
    }

    #[test]
    fn test_duration() {
        let curve = sample_curve();
        assert_eq!(curve.duration(10.0, 0.0), 10.0);
        assert_relative_eq!(curve.duration(10.0, 4.0), 10.0 / 1.0406, epsilon = 1e-12);
        assert_relative_eq!(curve.duration(5.0, 3.0), 5.0 / 1.037225, epsilon = 1e-12);
    }

    #[test]
    fn test_duration_degenerate() {
        let curve = YieldCurve::new("x", vec![obs(1.0, -100.0, "1Y"), obs(2.0, 3.0, "2Y")]).unwrap();
        assert!(curve.try_duration(1.0, 5.0).is_err());
        assert_eq!(curve.duration(1.0, 5.0), 0.0);
        assert_eq!(curve.duration(f64::INFINITY, 0.0), 0.0);
    }

    #[test]
    fn test_classify_shape() {
        assert_eq!(sample_curve().classify_shape(), CurveShape::Normal);

        let two_points =
            YieldCurve::new("x", vec![obs(0.25, 4.0, "3MO"), obs(30.0, 5.0, "30Y")]).unwrap();
        assert_eq!(two_points.classify_shape(), CurveShape::Insufficient);

        let inverted = YieldCurve::new(
            "x",
            vec![obs(0.25, 5.30, "3MO"), obs(5.0, 4.60, "5Y"), obs(30.0, 4.40, "30Y")],
        )
        .unwrap();
        assert_eq!(inverted.classify_shape(), CurveShape::Inverted);
    }

    #[test]
    fn test_smoothed_yield_passes_through_observations() {
        let curve = sample_curve();
        assert_eq!(curve.smoothed_yield(2.0), 3.52);
        assert_eq!(curve.smoothed_yield(50.0), 4.06);
        // natural spline sags below the linear 3.7225 in the 2Y-10Y gap
        assert_relative_eq!(curve.smoothed_yield(5.0), 3.280_982_142_857, epsilon = 1e-9);
    }

    #[test]
    fn test_as_of() {
        assert_eq!(
            sample_curve().as_of(),
            NaiveDate::from_ymd_opt(2025, 9, 17)
        );
        assert_eq!(YieldCurve::empty("Sep 17").as_of(), None);
    }

    #[test]
    fn test_equality_ignores_interpolator_state() {
        assert_eq!(sample_curve(), sample_curve());
        assert_ne!(sample_curve(), YieldCurve::empty("2025-09-17"));
    }
}
