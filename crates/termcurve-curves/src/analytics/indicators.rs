//! Headline economic indicators derived from the curve.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analytics::spreads::{StandardSpread, BPS_PER_PERCENT, RECESSION_WARNING_THRESHOLD};
use crate::curve::YieldCurve;

/// Coarse steepness of the 2s10s segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Steepness {
    /// 2s10s above 100 bps.
    Steep,
    /// 2s10s below -10 bps.
    Inverted,
    /// Anything in between.
    Flat,
}

impl Steepness {
    /// Classifies a 2s10s spread in percentage points.
    pub fn from_spread(spread: f64) -> Self {
        if spread > 1.0 {
            Self::Steep
        } else if spread < -0.1 {
            Self::Inverted
        } else {
            Self::Flat
        }
    }

    /// Lower-case name used in snapshot documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Steep => "steep",
            Self::Inverted => "inverted",
            Self::Flat => "flat",
        }
    }
}

impl fmt::Display for Steepness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Indicator block of a curve snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EconomicIndicators {
    /// True when 2s10s is below -20 bps.
    pub recession_warning: bool,
    /// 10Y to 30Y spread in basis points (unrounded).
    pub term_premium_bps: f64,
    /// Steepness of the 2s10s segment.
    pub curve_steepness: Steepness,
}

impl EconomicIndicators {
    /// Computes the indicators for a curve.
    pub fn from_curve(curve: &YieldCurve) -> Self {
        let twos_tens = StandardSpread::TwosTens.spread(curve);
        Self {
            recession_warning: twos_tens < RECESSION_WARNING_THRESHOLD,
            term_premium_bps: curve.spread(10.0, 30.0) * BPS_PER_PERCENT,
            curve_steepness: Steepness::from_spread(twos_tens),
        }
    }
}
