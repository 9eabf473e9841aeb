//! Curve snapshot documents (JSON).
//!
//! A snapshot is the dashboard view of one curve: every observation with its
//! duration, the standard spreads and forwards, and the headline indicators.
//! Basis-point figures are rounded to 2 decimals and forwards to 4; yields,
//! maturities and durations are written as computed.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use termcurve_curves::analytics::{EconomicIndicators, StandardForward, StandardSpread};
use termcurve_curves::{CurveShape, YieldCurve};
use tracing::info;

use crate::error::{FileError, FileResult};

/// Provenance of the rates in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    /// Publisher name.
    #[serde(rename = "data_source")]
    pub name: String,
    /// Where the release is published.
    #[serde(rename = "source_url")]
    pub url: String,
}

impl SourceInfo {
    /// Creates source info.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// The Federal Reserve H.15 release.
    pub fn federal_reserve_h15() -> Self {
        Self::new(
            "Federal Reserve H.15 Selected Interest Rates",
            "https://www.federalreserve.gov/releases/h15/",
        )
    }
}

/// One observation in a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldPoint {
    /// Catalog label.
    pub maturity_label: String,
    /// Maturity in years.
    pub maturity_years: f64,
    /// Yield in percent.
    #[serde(rename = "yield")]
    pub yield_percent: f64,
    /// Zero-coupon duration proxy in years.
    pub duration: f64,
}

/// Standard spreads in basis points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeySpreads {
    /// 2Y to 10Y.
    #[serde(rename = "2s10s_bps")]
    pub twos_tens: f64,
    /// 3M to 10Y.
    #[serde(rename = "3m10y_bps")]
    pub three_month_tens: f64,
    /// 5Y to 30Y.
    #[serde(rename = "5s30s_bps")]
    pub fives_thirties: f64,
    /// 1M to 3M.
    #[serde(rename = "1m3m_bps")]
    pub one_month_three_month: f64,
}

/// Standard forwards in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForwardRates {
    /// 1y1y.
    #[serde(rename = "1y1y")]
    pub one_year_one_year: f64,
    /// 2y1y.
    #[serde(rename = "2y1y")]
    pub two_year_one_year: f64,
    /// 5y5y.
    #[serde(rename = "5y5y")]
    pub five_year_five_year: f64,
    /// 10y10y.
    #[serde(rename = "10y10y")]
    pub ten_year_ten_year: f64,
}

/// Dashboard snapshot of a curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSnapshot {
    /// Provenance, written as top-level `data_source` / `source_url`.
    #[serde(flatten, default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceInfo>,
    /// Curve date.
    pub date: String,
    /// Curve shape.
    pub curve_shape: CurveShape,
    /// Observations in ascending maturity order.
    pub yield_points: Vec<YieldPoint>,
    /// Standard spreads.
    pub key_spreads: KeySpreads,
    /// Standard forwards.
    pub forward_rates: ForwardRates,
    /// Headline indicators.
    pub economic_indicators: EconomicIndicators,
}

impl CurveSnapshot {
    /// Builds the snapshot of a curve.
    pub fn from_curve(curve: &YieldCurve) -> Self {
        let yield_points = curve
            .observations()
            .iter()
            .map(|obs| YieldPoint {
                maturity_label: obs.label().to_string(),
                maturity_years: obs.maturity_years(),
                yield_percent: obs.yield_percent(),
                duration: curve.duration(obs.maturity_years(), 0.0),
            })
            .collect();

        let bps = |spread: StandardSpread| round_to(spread.bps(curve), 2);
        let forward = |fwd: StandardForward| round_to(fwd.rate(curve), 4);

        let mut economic_indicators = EconomicIndicators::from_curve(curve);
        economic_indicators.term_premium_bps = round_to(economic_indicators.term_premium_bps, 2);

        Self {
            source: None,
            date: curve.date().to_string(),
            curve_shape: curve.classify_shape(),
            yield_points,
            key_spreads: KeySpreads {
                twos_tens: bps(StandardSpread::TwosTens),
                three_month_tens: bps(StandardSpread::ThreeMonthTens),
                fives_thirties: bps(StandardSpread::FivesThirties),
                one_month_three_month: bps(StandardSpread::OneMonthThreeMonth),
            },
            forward_rates: ForwardRates {
                one_year_one_year: forward(StandardForward::OneYearOneYear),
                two_year_one_year: forward(StandardForward::TwoYearOneYear),
                five_year_five_year: forward(StandardForward::FiveYearFiveYear),
                ten_year_ten_year: forward(StandardForward::TenYearTenYear),
            },
            economic_indicators,
        }
    }

    /// Attaches provenance.
    #[must_use]
    pub fn with_source(mut self, source: SourceInfo) -> Self {
        self.source = Some(source);
        self
    }
}

/// Rounds half away from zero to `decimals` places.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Writes a snapshot as pretty-printed JSON to `writer`.
pub fn write_snapshot_json_to<W: Write>(writer: W, snapshot: &CurveSnapshot) -> FileResult<()> {
    let mut writer = writer;
    serde_json::to_writer_pretty(&mut writer, snapshot)?;
    writeln!(writer).map_err(serde_json::Error::io)?;
    Ok(())
}

/// Writes a snapshot as pretty-printed JSON to `path`.
///
/// # Errors
///
/// Returns [`FileError::Io`] if the file cannot be created or written.
pub fn write_snapshot_json(path: impl AsRef<Path>, snapshot: &CurveSnapshot) -> FileResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| FileError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    write_snapshot_json_to(&mut writer, snapshot)?;
    writer.flush().map_err(|e| FileError::io(path, e))?;
    info!(path = %path.display(), date = %snapshot.date, "wrote curve snapshot");
    Ok(())
}
