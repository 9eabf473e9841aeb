//! Qualitative curve-shape classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Short-end pillar used for shape classification (3 months).
pub const SHORT_PILLAR: f64 = 0.25;
/// Belly pillar used for shape classification (5 years).
pub const MEDIUM_PILLAR: f64 = 5.0;
/// Long-end pillar used for shape classification (30 years).
pub const LONG_PILLAR: f64 = 30.0;

/// Minimum observations needed to classify a curve.
pub const MIN_SHAPE_OBSERVATIONS: usize = 3;

/// Both wings must exceed the belly by this much (pct points) for a hump.
const HUMP_THRESHOLD: f64 = 0.2;
/// Short end above long end by this much is an inversion.
const INVERSION_THRESHOLD: f64 = 0.1;
/// Long end above short end by this much is a steep curve.
const STEEP_THRESHOLD: f64 = 0.5;
/// Long end above short end by this much is a normal curve.
const NORMAL_THRESHOLD: f64 = 0.1;

/// Shape of a yield curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurveShape {
    /// Fewer than three observations.
    #[serde(rename = "Insufficient Data")]
    Insufficient,
    /// Both wings above the belly.
    Humped,
    /// Short end above the long end.
    Inverted,
    /// Long end well above the short end.
    #[serde(rename = "Steep Normal")]
    SteepNormal,
    /// Long end moderately above the short end.
    Normal,
    /// No meaningful slope.
    Flat,
}

impl CurveShape {
    /// Classifies from short (3M), medium (5Y) and long (30Y) yields in percent.
    ///
    /// Branches are evaluated in order and the first match wins.
    pub fn classify(short: f64, medium: f64, long: f64) -> Self {
        if short > medium + HUMP_THRESHOLD && long > medium + HUMP_THRESHOLD {
            Self::Humped
        } else if short > long + INVERSION_THRESHOLD {
            Self::Inverted
        } else if long > short + STEEP_THRESHOLD {
            Self::SteepNormal
        } else if long > short + NORMAL_THRESHOLD {
            Self::Normal
        } else {
            Self::Flat
        }
    }

    /// Human-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Insufficient => "Insufficient Data",
            Self::Humped => "Humped",
            Self::Inverted => "Inverted",
            Self::SteepNormal => "Steep Normal",
            Self::Normal => "Normal",
            Self::Flat => "Flat",
        }
    }
}

impl fmt::Display for CurveShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_order() {
        // humped wins over inverted when both hold
        assert_eq!(CurveShape::classify(5.0, 4.0, 4.5), CurveShape::Humped);
        assert_eq!(CurveShape::classify(5.0, 4.8, 4.5), CurveShape::Inverted);
        assert_eq!(CurveShape::classify(3.0, 3.5, 4.0), CurveShape::SteepNormal);
        assert_eq!(CurveShape::classify(4.0, 4.1, 4.3), CurveShape::Normal);
        assert_eq!(CurveShape::classify(4.0, 4.0, 4.05), CurveShape::Flat);
    }

    #[test]
    fn test_threshold_edges_are_strict() {
        // exactly 0.5 above is not steep, falls through to normal
        assert_eq!(CurveShape::classify(4.0, 4.2, 4.5), CurveShape::Normal);
        // a 5 bp inversion is under the threshold
        assert_eq!(CurveShape::classify(4.15, 4.1, 4.1), CurveShape::Flat);
    }

    #[test]
    fn test_display_and_serde_names() {
        assert_eq!(CurveShape::SteepNormal.to_string(), "Steep Normal");
        assert_eq!(
            serde_json::to_string(&CurveShape::Insufficient).unwrap(),
            "\"Insufficient Data\""
        );
    }
}
