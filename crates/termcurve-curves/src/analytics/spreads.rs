//! Standard curve spreads and the 2s10s recession gauges.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::curve::YieldCurve;

/// Percentage points to basis points.
pub const BPS_PER_PERCENT: f64 = 100.0;

/// 2s10s below this (pct points) is read as a recession warning.
pub const RECESSION_WARNING_THRESHOLD: f64 = -0.2;

/// The benchmark spreads quoted on every curve snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StandardSpread {
    /// 2Y to 10Y.
    TwosTens,
    /// 3M to 10Y.
    ThreeMonthTens,
    /// 5Y to 30Y.
    FivesThirties,
    /// 1M to 3M.
    OneMonthThreeMonth,
}

impl StandardSpread {
    /// All standard spreads in snapshot order.
    pub const ALL: [Self; 4] = [
        Self::TwosTens,
        Self::ThreeMonthTens,
        Self::FivesThirties,
        Self::OneMonthThreeMonth,
    ];

    /// `(from, to)` maturities in years.
    pub fn maturities(&self) -> (f64, f64) {
        match self {
            Self::TwosTens => (2.0, 10.0),
            Self::ThreeMonthTens => (0.25, 10.0),
            Self::FivesThirties => (5.0, 30.0),
            Self::OneMonthThreeMonth => (1.0 / 12.0, 0.25),
        }
    }

    /// Snapshot field name.
    pub fn key(&self) -> &'static str {
        match self {
            Self::TwosTens => "2s10s_bps",
            Self::ThreeMonthTens => "3m10y_bps",
            Self::FivesThirties => "5s30s_bps",
            Self::OneMonthThreeMonth => "1m3m_bps",
        }
    }

    /// Market shorthand, e.g. `"2s10s"`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::TwosTens => "2s10s",
            Self::ThreeMonthTens => "3m10y",
            Self::FivesThirties => "5s30s",
            Self::OneMonthThreeMonth => "1m3m",
        }
    }

    /// Spread in percentage points.
    pub fn spread(&self, curve: &YieldCurve) -> f64 {
        let (from, to) = self.maturities();
        curve.spread(from, to)
    }

    /// Spread in basis points (unrounded).
    pub fn bps(&self, curve: &YieldCurve) -> f64 {
        self.spread(curve) * BPS_PER_PERCENT
    }
}

impl fmt::Display for StandardSpread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reading of the 2s10s spread (percentage points).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TwosTensSignal {
    /// Below -20 bps.
    RecessionWarning,
    /// Negative.
    Inverted,
    /// Positive but under 50 bps.
    Flattening,
    /// 50 bps or more.
    Normal,
}

impl TwosTensSignal {
    /// Classifies a 2s10s spread in percentage points.
    pub fn from_spread(spread: f64) -> Self {
        if spread < RECESSION_WARNING_THRESHOLD {
            Self::RecessionWarning
        } else if spread < 0.0 {
            Self::Inverted
        } else if spread < 0.5 {
            Self::Flattening
        } else {
            Self::Normal
        }
    }

    /// Signal for a curve's 2s10s spread.
    pub fn from_curve(curve: &YieldCurve) -> Self {
        Self::from_spread(StandardSpread::TwosTens.spread(curve))
    }

    /// Human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::RecessionWarning => "RECESSION WARNING - deep inversion",
            Self::Inverted => "Inverted - economic slowdown risk",
            Self::Flattening => "Flattening - slowing growth",
            Self::Normal => "Normal - healthy expansion",
        }
    }
}

impl fmt::Display for TwosTensSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Coarse recession probability implied by the 2s10s spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecessionProbability {
    /// 2s10s below -20 bps.
    High,
    /// 2s10s negative.
    Elevated,
    /// 2s10s under 50 bps.
    LowModerate,
    /// 2s10s at or above 50 bps.
    Low,
}

impl RecessionProbability {
    /// Classifies a 2s10s spread given in basis points.
    pub fn from_bps(bps: f64) -> Self {
        if bps < -20.0 {
            Self::High
        } else if bps < 0.0 {
            Self::Elevated
        } else if bps < 50.0 {
            Self::LowModerate
        } else {
            Self::Low
        }
    }

    /// Probability bucket for a curve's 2s10s spread.
    pub fn from_curve(curve: &YieldCurve) -> Self {
        Self::from_bps(StandardSpread::TwosTens.bps(curve))
    }

    /// Human-readable label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Elevated => "ELEVATED",
            Self::LowModerate => "LOW-MODERATE",
            Self::Low => "LOW",
        }
    }
}

impl fmt::Display for RecessionProbability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observation::YieldObservation;
    use approx::assert_relative_eq;

    fn curve() -> YieldCurve {
        YieldCurve::new(
            "2025-09-17",
            vec![
                YieldObservation::new(1.0 / 12.0, 4.18, "1MO").unwrap(),
                YieldObservation::new(0.25, 4.00, "3MO").unwrap(),
                YieldObservation::new(2.0, 3.52, "2Y").unwrap(),
                YieldObservation::new(5.0, 3.64, "5Y").unwrap(),
                YieldObservation::new(10.0, 4.06, "10Y").unwrap(),
                YieldObservation::new(30.0, 4.68, "30Y").unwrap(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_standard_spreads() {
        let curve = curve();
        assert_relative_eq!(StandardSpread::TwosTens.bps(&curve), 54.0, epsilon = 1e-9);
        assert_relative_eq!(StandardSpread::ThreeMonthTens.bps(&curve), 6.0, epsilon = 1e-9);
        assert_relative_eq!(StandardSpread::FivesThirties.bps(&curve), 104.0, epsilon = 1e-9);
        assert_relative_eq!(StandardSpread::OneMonthThreeMonth.bps(&curve), -18.0, epsilon = 1e-9);
    }

    #[test]
    fn test_keys() {
        let keys: Vec<&str> = StandardSpread::ALL.iter().map(StandardSpread::key).collect();
        assert_eq!(keys, vec!["2s10s_bps", "3m10y_bps", "5s30s_bps", "1m3m_bps"]);
        assert_eq!(StandardSpread::FivesThirties.to_string(), "5s30s");
    }

    #[test]
    fn test_twos_tens_signal() {
        assert_eq!(TwosTensSignal::from_spread(-0.3), TwosTensSignal::RecessionWarning);
        assert_eq!(TwosTensSignal::from_spread(-0.2), TwosTensSignal::Inverted);
        assert_eq!(TwosTensSignal::from_spread(0.0), TwosTensSignal::Flattening);
        assert_eq!(TwosTensSignal::from_spread(0.5), TwosTensSignal::Normal);
        assert_eq!(TwosTensSignal::from_curve(&curve()), TwosTensSignal::Normal);
    }

    #[test]
    fn test_recession_probability_uses_bps() {
        assert_eq!(RecessionProbability::from_bps(-25.0), RecessionProbability::High);
        assert_eq!(RecessionProbability::from_bps(-5.0), RecessionProbability::Elevated);
        assert_eq!(RecessionProbability::from_bps(30.0), RecessionProbability::LowModerate);
        assert_eq!(RecessionProbability::from_bps(54.0), RecessionProbability::Low);
        assert_eq!(RecessionProbability::from_curve(&curve()), RecessionProbability::Low);
    }

    #[test]
    fn test_empty_curve() {
        let empty = YieldCurve::empty("");
        assert_eq!(StandardSpread::TwosTens.bps(&empty), 0.0);
        assert_eq!(TwosTensSignal::from_curve(&empty), TwosTensSignal::Flattening);
    }
}
