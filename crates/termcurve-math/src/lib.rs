//! # Termcurve Math
//!
//! Numerical kernels for the Termcurve yield curve library.
//!
//! This crate provides:
//!
//! - **Interpolation**: piecewise-linear and natural cubic spline interpolation
//!   over strictly increasing knots
//! - **Extrapolation**: flat continuation beyond the last observed knot
//!
//! Everything works on plain `f64` knots. Curve-level policy (exact-match
//! tolerance, clamping, defaults for empty curves) lives in `termcurve-curves`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]

pub mod error;
pub mod extrapolation;
pub mod interpolation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::extrapolation::{Extrapolator, FlatExtrapolator};
    pub use crate::interpolation::{CubicSpline, Interpolator, LinearInterpolator};
}

pub use error::{MathError, MathResult};
