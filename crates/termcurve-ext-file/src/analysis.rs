//! Flat row-per-maturity analysis table (CSV).

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use termcurve_curves::analytics::{risk::DV01_SCALE, RiskLevel};
use termcurve_curves::YieldCurve;
use tracing::info;

use crate::error::{FileError, FileResult};

/// One maturity of the analysis table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRow {
    /// Curve date.
    pub date: String,
    /// Catalog label.
    pub maturity_label: String,
    /// Maturity in years.
    pub maturity_years: f64,
    /// Yield in percent.
    #[serde(rename = "yield")]
    pub yield_percent: f64,
    /// Zero-coupon duration proxy in years.
    pub duration: f64,
    /// `duration * 100`.
    pub dv01: f64,
    /// One-year forward starting at this maturity; zero below 1 year.
    pub forward_1y: f64,
    /// Duration bucket.
    pub risk_level: RiskLevel,
}

impl AnalysisRow {
    /// Column names in output order.
    pub const HEADERS: [&'static str; 8] = [
        "date",
        "maturity_label",
        "maturity_years",
        "yield",
        "duration",
        "dv01",
        "forward_1y",
        "risk_level",
    ];

    /// One row per observation, in ascending maturity order.
    pub fn rows_for(curve: &YieldCurve) -> Vec<Self> {
        curve
            .observations()
            .iter()
            .map(|obs| {
                let m = obs.maturity_years();
                let duration = curve.duration(m, 0.0);
                let forward_1y = if m >= 1.0 {
                    curve.forward_rate(m, m + 1.0)
                } else {
                    0.0
                };
                Self {
                    date: curve.date().to_string(),
                    maturity_label: obs.label().to_string(),
                    maturity_years: m,
                    yield_percent: obs.yield_percent(),
                    duration,
                    dv01: duration * DV01_SCALE,
                    forward_1y,
                    risk_level: RiskLevel::from_duration(duration),
                }
            })
            .collect()
    }
}

/// Writes analysis rows as CSV, header first, to `writer`.
pub fn write_analysis_csv_to<W: Write>(writer: W, rows: &[AnalysisRow]) -> FileResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    if rows.is_empty() {
        csv_writer.write_record(AnalysisRow::HEADERS)?;
    }
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Writes analysis rows as CSV to `path`.
///
/// # Errors
///
/// Returns [`FileError::Io`] if the file cannot be created.
pub fn write_analysis_csv(path: impl AsRef<Path>, rows: &[AnalysisRow]) -> FileResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| FileError::io(path, e))?;
    write_analysis_csv_to(file, rows)?;
    info!(path = %path.display(), rows = rows.len(), "wrote analysis table");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use termcurve_curves::YieldObservation;

    fn curve() -> YieldCurve {
        YieldCurve::new(
            "2025-09-17",
            vec![
                YieldObservation::new(0.25, 4.00, "3MO").unwrap(),
                YieldObservation::new(2.0, 3.55, "2Y").unwrap(),
                YieldObservation::new(10.0, 4.09, "10Y").unwrap(),
                YieldObservation::new(20.0, 4.66, "20Y").unwrap(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_rows_for_curve() {
        let curve = curve();
        let rows = AnalysisRow::rows_for(&curve);
        assert_eq!(rows.len(), 4);

        let three_month = &rows[0];
        assert_eq!(three_month.forward_1y, 0.0);
        assert_eq!(three_month.duration, 0.25);
        assert_eq!(three_month.risk_level, RiskLevel::Low);

        let two_year = &rows[1];
        assert_eq!(two_year.dv01, 200.0);
        assert_eq!(two_year.risk_level, RiskLevel::Moderate);
        assert_relative_eq!(two_year.forward_1y, curve.forward_rate(2.0, 3.0));

        assert_eq!(rows[2].risk_level, RiskLevel::High);
        assert_eq!(rows[3].risk_level, RiskLevel::VeryHigh);
        // past the last point the curve is flat, so the forward equals the yield
        assert_relative_eq!(rows[3].forward_1y, 4.66, epsilon = 1e-10);
    }

    #[test]
    fn test_csv_output() {
        let mut buffer = Vec::new();
        write_analysis_csv_to(&mut buffer, &AnalysisRow::rows_for(&curve())).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], AnalysisRow::HEADERS.join(","));
        assert!(lines[1].starts_with("2025-09-17,3MO,0.25,4.0,0.25,25.0,0.0,LOW"));
        assert!(lines[4].ends_with(",VERY_HIGH"));
    }

    #[test]
    fn test_empty_table_still_has_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("live_yield_analysis.csv");
        write_analysis_csv(&path, &[]).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap().trim_end(),
            AnalysisRow::HEADERS.join(",")
        );
    }
}
