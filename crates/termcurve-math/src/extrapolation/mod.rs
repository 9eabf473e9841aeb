//! Extrapolation methods for yield curves.
//!
//! Extrapolators extend a curve beyond its last observed knot. Observed
//! benchmark curves are clamped at both ends, so [`FlatExtrapolator`] is the
//! only method shipped here.

mod flat;

pub use flat::FlatExtrapolator;

/// Trait for extrapolation methods.
pub trait Extrapolator: Send + Sync {
    /// Extrapolates to time `t` given the boundary point.
    ///
    /// # Arguments
    ///
    /// * `t` - Target time for extrapolation
    /// * `edge_t` - Time of the boundary knot
    /// * `edge_value` - Value at the boundary knot
    fn extrapolate(&self, t: f64, edge_t: f64, edge_value: f64) -> f64;
}
