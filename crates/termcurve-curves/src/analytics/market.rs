//! Market conditions and policy outlook read off the curve.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analytics::spreads::BPS_PER_PERCENT;
use crate::curve::YieldCurve;

/// Policy-rate proxy maturity (1 month).
pub const POLICY_MATURITY: f64 = 1.0 / 12.0;
/// Short-rate maturity (3 months).
pub const SHORT_MATURITY: f64 = 0.25;
/// Benchmark maturity (10 years).
pub const BENCHMARK_MATURITY: f64 = 10.0;
/// Long-rate maturity (30 years).
pub const LONG_MATURITY: f64 = 30.0;

/// Regime implied by the 3m10y slope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurveRegime {
    /// Slope below -50 bps.
    DeeplyInverted,
    /// Negative slope.
    Inverted,
    /// Under 50 bps.
    Flat,
    /// Above 200 bps.
    VerySteep,
    /// Between 50 and 200 bps.
    Normal,
}

impl CurveRegime {
    /// Classifies a 3m10y slope in percentage points.
    pub fn from_slope(slope: f64) -> Self {
        if slope < -0.5 {
            Self::DeeplyInverted
        } else if slope < 0.0 {
            Self::Inverted
        } else if slope < 0.5 {
            Self::Flat
        } else if slope > 2.0 {
            Self::VerySteep
        } else {
            Self::Normal
        }
    }

    /// One-line market reading.
    pub fn interpretation(&self) -> &'static str {
        match self {
            Self::DeeplyInverted => "Deeply inverted: strong recession signal",
            Self::Inverted => "Inverted: economic slowdown concerns",
            Self::Flat => "Flat: neutral policy stance",
            Self::VerySteep => "Very steep: expansionary conditions",
            Self::Normal => "Normal: healthy economic expectations",
        }
    }
}

impl fmt::Display for CurveRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DeeplyInverted => "DEEPLY INVERTED",
            Self::Inverted => "INVERTED",
            Self::Flat => "FLAT",
            Self::VerySteep => "VERY STEEP",
            Self::Normal => "NORMAL",
        };
        f.write_str(name)
    }
}

/// Key rates, regime and end-of-curve dispersion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketConditions {
    /// 1M yield.
    pub policy_rate: f64,
    /// 3M yield.
    pub short_rate: f64,
    /// 10Y yield.
    pub benchmark_rate: f64,
    /// 30Y yield.
    pub long_rate: f64,
    /// 10Y minus 3M, percentage points.
    pub slope: f64,
    /// Regime implied by the slope.
    pub regime: CurveRegime,
    /// `|3M - 1Y|` in basis points.
    pub short_end_dispersion_bps: f64,
    /// `|10Y - 30Y|` in basis points.
    pub long_end_dispersion_bps: f64,
}

impl MarketConditions {
    /// Reads market conditions off a curve.
    pub fn from_curve(curve: &YieldCurve) -> Self {
        let short_rate = curve.yield_at(SHORT_MATURITY);
        let benchmark_rate = curve.yield_at(BENCHMARK_MATURITY);
        let long_rate = curve.yield_at(LONG_MATURITY);
        let slope = curve.spread(SHORT_MATURITY, BENCHMARK_MATURITY);

        Self {
            policy_rate: curve.yield_at(POLICY_MATURITY),
            short_rate,
            benchmark_rate,
            long_rate,
            slope,
            regime: CurveRegime::from_slope(slope),
            short_end_dispersion_bps: (short_rate - curve.yield_at(1.0)).abs() * BPS_PER_PERCENT,
            long_end_dispersion_bps: (benchmark_rate - long_rate).abs() * BPS_PER_PERCENT,
        }
    }
}

/// Path of policy rates priced by the near forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RateExpectation {
    /// Near forward more than 50 bps under the 3M yield.
    AggressiveCuts,
    /// More than 10 bps under.
    ModestCuts,
    /// More than 10 bps over.
    Hikes,
    /// Within 10 bps.
    Stable,
}

impl RateExpectation {
    /// Compares the near forward against the current short rate.
    pub fn from_rates(near_forward: f64, short_rate: f64) -> Self {
        if near_forward < short_rate - 0.5 {
            Self::AggressiveCuts
        } else if near_forward < short_rate - 0.1 {
            Self::ModestCuts
        } else if near_forward > short_rate + 0.1 {
            Self::Hikes
        } else {
            Self::Stable
        }
    }

    /// One-line reading.
    pub fn description(&self) -> &'static str {
        match self {
            Self::AggressiveCuts => "Markets pricing aggressive rate cuts",
            Self::ModestCuts => "Markets expecting modest rate cuts",
            Self::Hikes => "Markets pricing rate increases",
            Self::Stable => "Markets expect stable rates",
        }
    }
}

impl fmt::Display for RateExpectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Size of the 10Y to 30Y term premium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TermPremiumRegime {
    /// Under 20 bps.
    Low,
    /// 20 to 80 bps.
    Normal,
    /// Above 80 bps.
    High,
}

impl TermPremiumRegime {
    /// Classifies a 30Y minus 10Y spread in percentage points.
    pub fn from_spread(spread: f64) -> Self {
        if spread < 0.2 {
            Self::Low
        } else if spread > 0.8 {
            Self::High
        } else {
            Self::Normal
        }
    }
}

impl fmt::Display for TermPremiumRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Low => "LOW",
            Self::Normal => "NORMAL",
            Self::High => "HIGH",
        };
        f.write_str(name)
    }
}

/// Forward-implied policy outlook.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolicyOutlook {
    /// 3M to 15M forward.
    pub near_forward: f64,
    /// 1Y to 3Y forward.
    pub medium_forward: f64,
    /// 5Y to 10Y forward.
    pub long_forward: f64,
    /// Current 3M yield.
    pub short_rate: f64,
    /// Near forward against the short rate.
    pub expectation: RateExpectation,
    /// 30Y minus 10Y in percentage points.
    pub term_premium: f64,
    /// Term premium bucket.
    pub term_premium_regime: TermPremiumRegime,
}

impl PolicyOutlook {
    /// Derives the outlook from a curve's forwards.
    pub fn from_curve(curve: &YieldCurve) -> Self {
        let near_forward = curve.forward_rate(SHORT_MATURITY, SHORT_MATURITY + 1.0);
        let short_rate = curve.yield_at(SHORT_MATURITY);
        let term_premium = curve.spread(BENCHMARK_MATURITY, LONG_MATURITY);

        Self {
            near_forward,
            medium_forward: curve.forward_rate(1.0, 3.0),
            long_forward: curve.forward_rate(5.0, 10.0),
            short_rate,
            expectation: RateExpectation::from_rates(near_forward, short_rate),
            term_premium,
            term_premium_regime: TermPremiumRegime::from_spread(term_premium),
        }
    }
}
