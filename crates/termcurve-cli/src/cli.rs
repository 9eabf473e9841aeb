//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::commands::{AnalyzeArgs, DateArgs, ExportArgs, ForwardArgs, SpreadArgs};

/// Termcurve - Treasury yield curve analyzer
#[derive(Parser, Debug)]
#[command(name = "termcurve")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Rate file (CSV, header row then one row per date)
    #[arg(short, long, env = "TERMCURVE_INPUT", global = true)]
    pub input: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Full curve analysis, exporting the JSON snapshot and CSV table
    Analyze(AnalyzeArgs),

    /// Implied forward rate between two maturities
    Forward(ForwardArgs),

    /// Yield spread between two maturities
    Spread(SpreadArgs),

    /// Export the dashboard snapshot (JSON)
    Export(ExportArgs),

    /// Quick market summary
    Summary(DateArgs),

    /// Curve shape classification
    Shape(DateArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}
