//! CLI command implementations.

pub mod analyze;
pub mod export;
pub mod forward;
pub mod shape;
pub mod spread;
pub mod summary;

// Re-export submodules for convenience
pub use analyze::AnalyzeArgs;
pub use export::ExportArgs;
pub use forward::ForwardArgs;
pub use spread::SpreadArgs;

use anyhow::Result;
use clap::Args;
use termcurve_curves::{CurveLoader, YieldCurve};
use tracing::debug;

use crate::config::Settings;
use crate::error::{CliError, CliResult};
use crate::output::print_warning;

/// Date selection shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct DateArgs {
    /// Curve date (YYYY-MM-DD, or a prefix such as 2025-09). Defaults to the latest row.
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Loads the curve for `date` from the configured rate file.
pub fn load_curve(settings: &Settings, date: Option<&str>) -> Result<YieldCurve> {
    let outcome =
        termcurve_ext_file::load_curve(&settings.input, date, &CurveLoader::default())?;

    let report = outcome.report();
    debug!(
        rows_read = report.rows_read,
        rows_skipped = report.rows_skipped,
        cells_skipped = report.cells_skipped,
        short_rows = report.short_rows,
        "loaded rate file"
    );
    if !report.is_clean() && !settings.quiet {
        print_warning(&format!(
            "Skipped {} malformed rows and {} unparsable cells, read {} short rows in {}",
            report.rows_skipped,
            report.cells_skipped,
            report.short_rows,
            settings.input.display()
        ));
    }

    if !outcome.found() {
        return Err(CliError::NoCurve {
            path: settings.input.clone(),
            date: date.map(str::to_string),
        }
        .into());
    }
    Ok(outcome.into_curve())
}

/// Validates a maturity in years.
pub fn validate_maturity(maturity: f64) -> CliResult<f64> {
    if !maturity.is_finite() || maturity <= 0.0 {
        return Err(CliError::InvalidMaturity(maturity));
    }
    Ok(maturity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_maturity() {
        assert_eq!(validate_maturity(2.0).unwrap(), 2.0);
        assert!(validate_maturity(0.0).is_err());
        assert!(validate_maturity(-1.0).is_err());
        assert!(validate_maturity(f64::NAN).is_err());
    }
}
