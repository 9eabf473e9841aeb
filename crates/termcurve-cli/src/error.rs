//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// No row in the rate file matched the requested date.
    #[error("No curve found in {} for {}", .path.display(), date_label(.date))]
    NoCurve {
        /// Rate file.
        path: PathBuf,
        /// Requested date filter, if any.
        date: Option<String>,
    },

    /// Maturity argument is not a positive finite number.
    #[error("Invalid maturity: {0}. Must be a positive number of years.")]
    InvalidMaturity(f64),

    /// Forward interval is empty or reversed.
    #[error("Invalid interval: end {end} must be after start {start}.")]
    InvalidInterval {
        /// Start maturity.
        start: f64,
        /// End maturity.
        end: f64,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

fn date_label(date: &Option<String>) -> String {
    match date {
        Some(d) => format!("date {d}"),
        None => "any date".to_string(),
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
