//! Single (maturity, yield) observation on a curve.

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};

/// A benchmark yield observed at one maturity.
///
/// Yields are in percent (`4.06` means 4.06%) and may be negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldObservation {
    maturity_years: f64,
    yield_percent: f64,
    label: String,
}

impl YieldObservation {
    /// Creates a validated observation.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidObservation`] if the maturity is not a
    /// finite positive number or the yield is not finite.
    pub fn new(maturity_years: f64, yield_percent: f64, label: impl Into<String>) -> CurveResult<Self> {
        let label = label.into();
        if !maturity_years.is_finite() || maturity_years <= 0.0 {
            return Err(CurveError::invalid_observation(
                label,
                format!("maturity must be finite and positive, got {maturity_years}"),
            ));
        }
        if !yield_percent.is_finite() {
            return Err(CurveError::invalid_observation(
                label,
                format!("yield must be finite, got {yield_percent}"),
            ));
        }
        Ok(Self {
            maturity_years,
            yield_percent,
            label,
        })
    }

    /// Maturity in years.
    pub fn maturity_years(&self) -> f64 {
        self.maturity_years
    }

    /// Yield in percent.
    pub fn yield_percent(&self) -> f64 {
        self.yield_percent
    }

    /// Catalog label, e.g. `"10Y"`.
    pub fn label(&self) -> &str {
        &self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_observation() {
        let obs = YieldObservation::new(10.0, 4.06, "10Y").unwrap();
        assert_eq!(obs.label(), "10Y");
        assert_eq!(obs.maturity_years(), 10.0);
        assert_eq!(obs.yield_percent(), 4.06);

        assert!(YieldObservation::new(0.25, -0.35, "3MO").is_ok());
    }

    #[test]
    fn test_invalid_observation() {
        assert!(YieldObservation::new(0.0, 4.0, "0Y").is_err());
        assert!(YieldObservation::new(-1.0, 4.0, "X").is_err());
        assert!(YieldObservation::new(f64::INFINITY, 4.0, "X").is_err());
        assert!(YieldObservation::new(2.0, f64::NAN, "2Y").is_err());
    }
}
