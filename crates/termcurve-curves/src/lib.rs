//! # Termcurve Curves
//!
//! Benchmark yield curve engine for the Termcurve library.
//!
//! This crate provides:
//!
//! - **Catalog**: [`MaturityCatalog`], the ordered label-to-years mapping that
//!   fixes the column layout of rate releases
//! - **Loader**: [`CurveLoader`], turning tabular rows into a curve for one date
//!   while skipping malformed rows and cells
//! - **Curve**: [`YieldCurve`], an immutable snapshot answering yield, forward,
//!   duration, spread and shape queries
//! - **Analytics**: standard spreads and forwards, economic indicators, risk
//!   buckets and market readings
//!
//! ## Quick Start
//!
//! ```rust
//! use termcurve_curves::prelude::*;
//!
//! let rows = vec![
//!     vec!["date", "1MO", "3MO", "6MO", "1Y", "2Y"],
//!     vec!["2025-09-16", "4.20", "4.02", "3.85", "3.66", "3.52"],
//!     vec!["2025-09-17", "4.18", "4.00", "3.83", "3.64", "3.55"],
//! ];
//!
//! let outcome = CurveLoader::default().load(&rows, Some("2025-09-16"));
//! assert!(outcome.found());
//!
//! let curve = outcome.into_curve();
//! assert_eq!(curve.date(), "2025-09-16");
//! assert_eq!(curve.yield_at(2.0), 3.52);
//! assert_eq!(curve.classify_shape(), CurveShape::Inverted);
//! ```
//!
//! Every query on a curve is total. A curve that failed to load is a valid
//! empty curve whose queries return `0.0` or [`CurveShape::Insufficient`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod analytics;
pub mod catalog;
pub mod curve;
pub mod error;
pub mod loader;
pub mod observation;
pub mod shape;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::analytics::{
        CurveRegime, EconomicIndicators, MarketConditions, PolicyOutlook, RateExpectation,
        RecessionProbability, RiskLevel, RiskProfile, StandardForward, StandardSpread, Steepness,
        TermPremiumRegime, TwosTensSignal,
    };
    pub use crate::catalog::{MaturityCatalog, MaturityTenor};
    pub use crate::curve::YieldCurve;
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::loader::{CurveLoader, LoadOutcome, LoadReport};
    pub use crate::observation::YieldObservation;
    pub use crate::shape::CurveShape;
}

pub use catalog::{MaturityCatalog, MaturityTenor};
pub use curve::YieldCurve;
pub use error::{CurveError, CurveResult};
pub use loader::{CurveLoader, LoadOutcome, LoadReport};
pub use observation::YieldObservation;
pub use shape::CurveShape;
