//! Curve analytics built on the core query operations.
//!
//! - **Spreads**: the standard 2s10s, 3m10y, 5s30s and 1m3m spreads and the
//!   2s10s recession gauges
//! - **Forwards**: the standard 1y1y, 2y1y, 5y5y and 10y10y forwards
//! - **Indicators**: recession warning, term premium, steepness
//! - **Risk**: duration buckets and DV01 at key maturities
//! - **Market**: key rates, slope regime, policy outlook
//!
//! Everything here reads a [`YieldCurve`](crate::YieldCurve) through its
//! public queries and inherits their total behavior: an empty curve produces
//! zeros rather than errors.

pub mod forwards;
pub mod indicators;
pub mod market;
pub mod risk;
pub mod spreads;

pub use forwards::StandardForward;
pub use indicators::{EconomicIndicators, Steepness};
pub use market::{
    CurveRegime, MarketConditions, PolicyOutlook, RateExpectation, TermPremiumRegime,
};
pub use risk::{RiskLevel, RiskProfile, KEY_RISK_MATURITIES};
pub use spreads::{RecessionProbability, StandardSpread, TwosTensSignal, BPS_PER_PERCENT};
