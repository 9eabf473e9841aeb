//! CLI configuration file.
//!
//! ```toml
//! input = "treasury_yields_live.csv"
//! json_output = "live_yield_curve_data.json"
//! csv_output = "live_yield_analysis.csv"
//! source_name = "Federal Reserve H.15 Selected Interest Rates"
//! source_url = "https://www.federalreserve.gov/releases/h15/"
//! format = "table"
//! ```
//!
//! Every key is optional. Command-line flags override the file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use termcurve_ext_file::{SourceInfo, DEFAULT_ANALYSIS_FILE, DEFAULT_SNAPSHOT_FILE};

use crate::cli::{Cli, OutputFormat};
use crate::error::{CliError, CliResult};

/// Default rate file.
pub const DEFAULT_INPUT_FILE: &str = "treasury_yields_live.csv";

/// Settings loaded from the TOML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Rate file.
    pub input: PathBuf,
    /// Snapshot output path.
    pub json_output: PathBuf,
    /// Analysis table output path.
    pub csv_output: PathBuf,
    /// Publisher recorded in snapshots.
    pub source_name: String,
    /// Publisher URL recorded in snapshots.
    pub source_url: String,
    /// Default output format.
    pub format: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        let source = SourceInfo::federal_reserve_h15();
        Self {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            json_output: PathBuf::from(DEFAULT_SNAPSHOT_FILE),
            csv_output: PathBuf::from(DEFAULT_ANALYSIS_FILE),
            source_name: source.name,
            source_url: source.url,
            format: OutputFormat::Table,
        }
    }
}

impl CliConfig {
    /// Loads the file at `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::parse(&text)
    }

    /// Parses TOML text.
    pub fn parse(text: &str) -> CliResult<Self> {
        toml::from_str(text).map_err(|e| CliError::Config(e.to_string()))
    }

    /// Snapshot provenance.
    pub fn source(&self) -> SourceInfo {
        SourceInfo::new(self.source_name.clone(), self.source_url.clone())
    }
}

/// Effective settings for one invocation.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Rate file.
    pub input: PathBuf,
    /// Output format.
    pub format: OutputFormat,
    /// Suppress status lines.
    pub quiet: bool,
    /// File configuration.
    pub config: CliConfig,
}

impl Settings {
    /// Merges command-line flags over the file configuration.
    pub fn resolve(cli: &Cli, config: CliConfig) -> Self {
        Self {
            input: cli.input.clone().unwrap_or_else(|| config.input.clone()),
            format: cli.format.unwrap_or(config.format),
            quiet: cli.quiet,
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let config = CliConfig::load(None).unwrap();
        assert_eq!(config.input, PathBuf::from("treasury_yields_live.csv"));
        assert_eq!(config.json_output, PathBuf::from("live_yield_curve_data.json"));
        assert_eq!(config.format, OutputFormat::Table);
    }

    #[test]
    fn test_partial_file() {
        let config = CliConfig::parse("format = \"json\"\ncsv_output = \"out/analysis.csv\"\n").unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.csv_output, PathBuf::from("out/analysis.csv"));
        assert_eq!(config.input, PathBuf::from(DEFAULT_INPUT_FILE));
    }

    #[test]
    fn test_bad_file() {
        assert!(matches!(CliConfig::parse("format = 3"), Err(CliError::Config(_))));
        assert!(matches!(
            CliConfig::load(Some(Path::new("/nonexistent/termcurve.toml"))),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn test_flags_override_file() {
        let config = CliConfig::parse("input = \"file.csv\"\nformat = \"csv\"\n").unwrap();

        let cli = Cli::try_parse_from(["termcurve", "-i", "flag.csv", "shape"]).unwrap();
        let settings = Settings::resolve(&cli, config.clone());
        assert_eq!(settings.input, PathBuf::from("flag.csv"));
        assert_eq!(settings.format, OutputFormat::Csv);

        let cli = Cli::try_parse_from(["termcurve", "-f", "minimal", "-i", "flag.csv", "shape"]).unwrap();
        assert_eq!(Settings::resolve(&cli, config).format, OutputFormat::Minimal);
    }
}
