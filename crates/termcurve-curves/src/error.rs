//! Error types for curve operations.
//!
//! Loading is best-effort: [`CurveError::MalformedRow`] and
//! [`CurveError::UnparsableCell`] are recovered by the loader and collected in
//! its report instead of being returned. [`CurveError::DegenerateInterval`] is
//! surfaced by the `try_*` query variants and absorbed to `0.0` by the plain
//! queries.

use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Maturity label not present in the catalog.
    #[error("Unknown maturity label: {label}")]
    UnknownMaturityLabel {
        /// The label that was looked up.
        label: String,
    },

    /// Input row could not be used at all.
    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow {
        /// 1-based line number in the source table.
        line: usize,
        /// Why the row was skipped.
        reason: String,
    },

    /// A single yield cell failed to parse.
    #[error("Unparsable {label} value at line {line}: {value:?}")]
    UnparsableCell {
        /// 1-based line number in the source table.
        line: usize,
        /// Maturity label of the column.
        label: String,
        /// Raw cell text.
        value: String,
    },

    /// No row matched the requested date.
    #[error("No rows matching date filter {filter:?}")]
    NoMatchingDate {
        /// The filter that was applied (empty when unfiltered).
        filter: String,
    },

    /// Forward or duration math is undefined for the inputs.
    #[error("Degenerate interval [{start:.4}, {end:.4}]: {reason}")]
    DegenerateInterval {
        /// Interval start (years).
        start: f64,
        /// Interval end (years).
        end: f64,
        /// Description of the degeneracy.
        reason: String,
    },

    /// Observation violates the finite/positive-maturity invariants.
    #[error("Invalid observation {label:?}: {reason}")]
    InvalidObservation {
        /// Label of the offending observation.
        label: String,
        /// Description of why it is invalid.
        reason: String,
    },

    /// Maturity catalog definition is invalid.
    #[error("Invalid maturity catalog: {reason}")]
    InvalidCatalog {
        /// Description of the problem.
        reason: String,
    },
}

impl CurveError {
    /// Creates an unknown maturity label error.
    #[must_use]
    pub fn unknown_label(label: impl Into<String>) -> Self {
        Self::UnknownMaturityLabel {
            label: label.into(),
        }
    }

    /// Creates a malformed row error.
    #[must_use]
    pub fn malformed_row(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRow {
            line,
            reason: reason.into(),
        }
    }

    /// Creates an unparsable cell error.
    #[must_use]
    pub fn unparsable_cell(line: usize, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnparsableCell {
            line,
            label: label.into(),
            value: value.into(),
        }
    }

    /// Creates a no-matching-date error.
    #[must_use]
    pub fn no_matching_date(filter: impl Into<String>) -> Self {
        Self::NoMatchingDate {
            filter: filter.into(),
        }
    }

    /// Creates a degenerate interval error.
    #[must_use]
    pub fn degenerate_interval(start: f64, end: f64, reason: impl Into<String>) -> Self {
        Self::DegenerateInterval {
            start,
            end,
            reason: reason.into(),
        }
    }

    /// Creates an invalid observation error.
    #[must_use]
    pub fn invalid_observation(label: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidObservation {
            label: label.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid catalog error.
    #[must_use]
    pub fn invalid_catalog(reason: impl Into<String>) -> Self {
        Self::InvalidCatalog {
            reason: reason.into(),
        }
    }

    /// Returns true for errors the loader recovers from locally.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::MalformedRow { .. }
                | Self::UnparsableCell { .. }
                | Self::NoMatchingDate { .. }
                | Self::DegenerateInterval { .. }
        )
    }
}
