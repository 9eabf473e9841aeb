//! Maturity catalog: benchmark labels and their year fractions.
//!
//! The catalog fixes the column order of tabular rate releases. Value column
//! `i` of a data row carries the yield for `canonical_order()[i]`.

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};

/// Tolerance (years) for matching maturities against catalog entries.
pub const MATURITY_TOLERANCE: f64 = 1e-6;

/// A catalogued benchmark maturity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaturityTenor {
    /// Column label, e.g. `"3MO"` or `"10Y"`.
    pub label: String,
    /// Maturity in years.
    pub years: f64,
}

/// Ordered mapping from maturity label to maturity in years.
///
/// Immutable once built; share it by reference or clone it into each loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaturityCatalog {
    tenors: Vec<MaturityTenor>,
}

impl MaturityCatalog {
    /// Builds a catalog from `(label, years)` pairs in column order.
    ///
    /// Labels are stored upper-cased.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidCatalog`] for an empty list, a blank or
    /// duplicate label, or a maturity that is not finite and positive.
    pub fn new<S: Into<String>>(entries: Vec<(S, f64)>) -> CurveResult<Self> {
        if entries.is_empty() {
            return Err(CurveError::invalid_catalog("catalog has no maturities"));
        }

        let mut tenors: Vec<MaturityTenor> = Vec::with_capacity(entries.len());
        for (label, years) in entries {
            let label = normalize_label(&label.into());
            if label.is_empty() {
                return Err(CurveError::invalid_catalog("blank maturity label"));
            }
            if !years.is_finite() || years <= 0.0 {
                return Err(CurveError::invalid_catalog(format!(
                    "maturity for {label} must be finite and positive, got {years}"
                )));
            }
            if tenors.iter().any(|t| t.label == label) {
                return Err(CurveError::invalid_catalog(format!(
                    "duplicate maturity label {label}"
                )));
            }
            tenors.push(MaturityTenor { label, years });
        }

        Ok(Self { tenors })
    }

    /// The US Treasury constant-maturity catalog (Fed H.15 column order).
    pub fn treasury() -> Self {
        let tenors = [
            ("1MO", 1.0 / 12.0),
            ("3MO", 0.25),
            ("6MO", 0.5),
            ("1Y", 1.0),
            ("2Y", 2.0),
            ("3Y", 3.0),
            ("5Y", 5.0),
            ("7Y", 7.0),
            ("10Y", 10.0),
            ("20Y", 20.0),
            ("30Y", 30.0),
        ]
        .into_iter()
        .map(|(label, years)| MaturityTenor {
            label: label.to_string(),
            years,
        })
        .collect();

        Self { tenors }
    }

    /// Returns the maturity in years for a label.
    ///
    /// Lookup ignores case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::UnknownMaturityLabel`] if the label is not catalogued.
    pub fn maturity_years(&self, label: &str) -> CurveResult<f64> {
        let wanted = normalize_label(label);
        self.tenors
            .iter()
            .find(|t| t.label == wanted)
            .map(|t| t.years)
            .ok_or_else(|| CurveError::unknown_label(label.trim()))
    }

    /// Labels in canonical column order.
    pub fn canonical_order(&self) -> impl Iterator<Item = &str> + '_ {
        self.tenors.iter().map(|t| t.label.as_str())
    }

    /// Catalog entries in canonical column order.
    pub fn tenors(&self) -> &[MaturityTenor] {
        &self.tenors
    }

    /// Catalog entry for value column `index`.
    pub fn get(&self, index: usize) -> Option<&MaturityTenor> {
        self.tenors.get(index)
    }

    /// Reverse lookup: the label whose maturity equals `years`.
    pub fn label_for(&self, years: f64) -> Option<&str> {
        self.tenors
            .iter()
            .find(|t| (t.years - years).abs() < MATURITY_TOLERANCE)
            .map(|t| t.label.as_str())
    }

    /// Number of catalogued maturities.
    pub fn len(&self) -> usize {
        self.tenors.len()
    }

    /// Always false for a successfully built catalog.
    pub fn is_empty(&self) -> bool {
        self.tenors.is_empty()
    }
}

impl Default for MaturityCatalog {
    fn default() -> Self {
        Self::treasury()
    }
}

fn normalize_label(label: &str) -> String {
    label.trim().to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_treasury_order() {
        let catalog = MaturityCatalog::treasury();
        let labels: Vec<&str> = catalog.canonical_order().collect();
        assert_eq!(
            labels,
            vec!["1MO", "3MO", "6MO", "1Y", "2Y", "3Y", "5Y", "7Y", "10Y", "20Y", "30Y"]
        );
        assert_eq!(catalog.len(), 11);
    }

    #[test]
    fn test_maturity_lookup() {
        let catalog = MaturityCatalog::treasury();
        assert_relative_eq!(catalog.maturity_years("1MO").unwrap(), 1.0 / 12.0);
        assert_relative_eq!(catalog.maturity_years("10Y").unwrap(), 10.0);
        assert_relative_eq!(catalog.maturity_years(" 3mo ").unwrap(), 0.25);
    }

    #[test]
    fn test_unknown_label() {
        let catalog = MaturityCatalog::treasury();
        let err = catalog.maturity_years("15Y").unwrap_err();
        assert_eq!(err, CurveError::unknown_label("15Y"));
    }

    #[test]
    fn test_label_for() {
        let catalog = MaturityCatalog::treasury();
        assert_eq!(catalog.label_for(0.5), Some("6MO"));
        assert_eq!(catalog.label_for(1.0 / 12.0), Some("1MO"));
        assert_eq!(catalog.label_for(4.0), None);
    }

    #[test]
    fn test_custom_catalog_validation() {
        let catalog = MaturityCatalog::new(vec![("3mo", 0.25), ("2y", 2.0), ("10y", 10.0)]).unwrap();
        assert_eq!(catalog.canonical_order().collect::<Vec<_>>(), vec!["3MO", "2Y", "10Y"]);

        assert!(MaturityCatalog::new(Vec::<(&str, f64)>::new()).is_err());
        assert!(MaturityCatalog::new(vec![("2Y", 2.0), ("2y", 2.0)]).is_err());
        assert!(MaturityCatalog::new(vec![("0Y", 0.0)]).is_err());
        assert!(MaturityCatalog::new(vec![("XY", f64::NAN)]).is_err());
        assert!(MaturityCatalog::new(vec![("  ", 1.0)]).is_err());
    }
}
