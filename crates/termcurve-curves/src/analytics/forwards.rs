//! Standard forward tenors.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::curve::YieldCurve;

/// Benchmark forwards quoted on every curve snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StandardForward {
    /// 1-year rate one year forward.
    OneYearOneYear,
    /// 1-year rate two years forward.
    TwoYearOneYear,
    /// 5-year rate five years forward.
    FiveYearFiveYear,
    /// 10-year rate ten years forward.
    TenYearTenYear,
}

impl StandardForward {
    /// All standard forwards in snapshot order.
    pub const ALL: [Self; 4] = [
        Self::OneYearOneYear,
        Self::TwoYearOneYear,
        Self::FiveYearFiveYear,
        Self::TenYearTenYear,
    ];

    /// `(start, end)` maturities in years.
    pub fn maturities(&self) -> (f64, f64) {
        match self {
            Self::OneYearOneYear => (1.0, 2.0),
            Self::TwoYearOneYear => (2.0, 3.0),
            Self::FiveYearFiveYear => (5.0, 10.0),
            Self::TenYearTenYear => (10.0, 20.0),
        }
    }

    /// Snapshot field name, e.g. `"5y5y"`.
    pub fn key(&self) -> &'static str {
        match self {
            Self::OneYearOneYear => "1y1y",
            Self::TwoYearOneYear => "2y1y",
            Self::FiveYearFiveYear => "5y5y",
            Self::TenYearTenYear => "10y10y",
        }
    }

    /// Implied forward rate in percent.
    pub fn rate(&self, curve: &YieldCurve) -> f64 {
        let (start, end) = self.maturities();
        curve.forward_rate(start, end)
    }
}

impl fmt::Display for StandardForward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observation::YieldObservation;
    use approx::assert_relative_eq;

    #[test]
    fn test_forward_rates() {
        let curve = YieldCurve::new(
            "2025-09-17",
            vec![
                YieldObservation::new(1.0, 3.64, "1Y").unwrap(),
                YieldObservation::new(2.0, 3.55, "2Y").unwrap(),
                YieldObservation::new(10.0, 4.09, "10Y").unwrap(),
            ],
        )
        .unwrap();

        let expected = ((1.0355_f64.powi(2) / 1.0364) - 1.0) * 100.0;
        assert_relative_eq!(
            StandardForward::OneYearOneYear.rate(&curve),
            expected,
            epsilon = 1e-10
        );
        // beyond the last observation the curve is flat
        assert_relative_eq!(StandardForward::TenYearTenYear.rate(&curve), 4.09, epsilon = 1e-10);
    }

    #[test]
    fn test_keys() {
        let keys: Vec<String> = StandardForward::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(keys, vec!["1y1y", "2y1y", "5y5y", "10y10y"]);
    }

    #[test]
    fn test_empty_curve_forward_is_zero() {
        assert_eq!(StandardForward::FiveYearFiveYear.rate(&YieldCurve::empty("")), 0.0);
    }
}
