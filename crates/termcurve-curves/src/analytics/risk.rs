//! Interest-rate risk by maturity.
//!
//! Duration here is the curve's zero-coupon proxy, so DV01 is expressed as
//! `duration * 100` per unit face rather than from a priced cash-flow schedule.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::curve::YieldCurve;

/// Maturities reported in a risk profile.
pub const KEY_RISK_MATURITIES: [(&str, f64); 4] =
    [("2Y", 2.0), ("5Y", 5.0), ("10Y", 10.0), ("30Y", 30.0)];

/// DV01 per year of duration.
pub const DV01_SCALE: f64 = 100.0;

/// Duration bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    /// Duration under 2 years.
    Low,
    /// Under 7 years.
    Moderate,
    /// Under 15 years.
    High,
    /// 15 years or more.
    VeryHigh,
}

impl RiskLevel {
    /// Buckets a duration in years.
    pub fn from_duration(duration: f64) -> Self {
        if duration < 2.0 {
            Self::Low
        } else if duration < 7.0 {
            Self::Moderate
        } else if duration < 15.0 {
            Self::High
        } else {
            Self::VeryHigh
        }
    }

    /// Upper-case code used in analysis tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Moderate => "MODERATE",
            Self::High => "HIGH",
            Self::VeryHigh => "VERY_HIGH",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Risk figures for one maturity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskProfile {
    /// Maturity label.
    pub label: String,
    /// Maturity in years.
    pub maturity_years: f64,
    /// Curve yield in percent.
    pub yield_percent: f64,
    /// Duration proxy in years.
    pub duration: f64,
    /// `duration * 100`.
    pub dv01: f64,
    /// Duration bucket.
    pub risk_level: RiskLevel,
}

impl RiskProfile {
    /// Risk figures at one maturity.
    pub fn at(curve: &YieldCurve, label: impl Into<String>, maturity_years: f64) -> Self {
        let duration = curve.duration(maturity_years, 0.0);
        Self {
            label: label.into(),
            maturity_years,
            yield_percent: curve.yield_at(maturity_years),
            duration,
            dv01: duration * DV01_SCALE,
            risk_level: RiskLevel::from_duration(duration),
        }
    }

    /// Profiles for the 2Y, 5Y, 10Y and 30Y points.
    pub fn key_maturities(curve: &YieldCurve) -> Vec<Self> {
        KEY_RISK_MATURITIES
            .iter()
            .map(|&(label, years)| Self::at(curve, label, years))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observation::YieldObservation;

    #[test]
    fn test_buckets() {
        assert_eq!(RiskLevel::from_duration(0.25), RiskLevel::Low);
        assert_eq!(RiskLevel::from_duration(2.0), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_duration(7.0), RiskLevel::High);
        assert_eq!(RiskLevel::from_duration(15.0), RiskLevel::VeryHigh);
        assert_eq!(RiskLevel::VeryHigh.to_string(), "VERY_HIGH");
        assert_eq!(serde_json::to_string(&RiskLevel::VeryHigh).unwrap(), "\"VERY_HIGH\"");
    }

    #[test]
    fn test_key_maturities() {
        let curve = YieldCurve::new(
            "2025-09-17",
            vec![
                YieldObservation::new(2.0, 3.52, "2Y").unwrap(),
                YieldObservation::new(10.0, 4.06, "10Y").unwrap(),
            ],
        )
        .unwrap();

        let profile = RiskProfile::key_maturities(&curve);
        assert_eq!(profile.len(), 4);

        let ten = &profile[2];
        assert_eq!(ten.label, "10Y");
        assert_eq!(ten.yield_percent, 4.06);
        assert_eq!(ten.duration, 10.0);
        assert_eq!(ten.dv01, 1000.0);
        assert_eq!(ten.risk_level, RiskLevel::High);

        let thirty = &profile[3];
        assert_eq!(thirty.yield_percent, 4.06);
        assert_eq!(thirty.risk_level, RiskLevel::VeryHigh);
    }
}
