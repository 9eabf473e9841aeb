//! # Termcurve Ext File
//!
//! File-based rate sources and curve exports for Termcurve.
//!
//! This crate provides:
//! - CSV rate source feeding rows to a [`CurveLoader`](termcurve_curves::CurveLoader)
//! - JSON curve snapshot for dashboards
//! - CSV row-per-maturity analysis table
//!
//! Only I/O failures are errors here. Bad rows and cells in a rate file are
//! the loader's business and come back in its report.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod error;
pub mod snapshot;
pub mod source;

pub use analysis::{write_analysis_csv, write_analysis_csv_to, AnalysisRow};
pub use error::{FileError, FileResult};
pub use snapshot::{
    write_snapshot_json, write_snapshot_json_to, CurveSnapshot, ForwardRates, KeySpreads,
    SourceInfo, YieldPoint,
};
pub use source::{load_curve, read_rows, read_rows_from_reader};

/// Default snapshot file name.
pub const DEFAULT_SNAPSHOT_FILE: &str = "live_yield_curve_data.json";

/// Default analysis table file name.
pub const DEFAULT_ANALYSIS_FILE: &str = "live_yield_analysis.csv";
