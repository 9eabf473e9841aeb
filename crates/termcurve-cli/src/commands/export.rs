//! Export command implementation.
//!
//! Writes the dashboard snapshot (JSON) without running the full analysis.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use termcurve_ext_file::{write_snapshot_json, CurveSnapshot};

use crate::cli::OutputFormat;
use crate::commands::{load_curve, DateArgs};
use crate::config::Settings;
use crate::output::{print_json, print_success};

/// Arguments for the export command.
#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub date: DateArgs,

    /// Output path (overrides the configured json_output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute the export command.
pub fn execute(args: ExportArgs, settings: &Settings) -> Result<()> {
    let curve = load_curve(settings, args.date.date.as_deref())?;
    let snapshot = CurveSnapshot::from_curve(&curve).with_source(settings.config.source());

    let path = args
        .output
        .unwrap_or_else(|| settings.config.json_output.clone());
    write_snapshot_json(&path, &snapshot)?;

    match settings.format {
        OutputFormat::Json => print_json(&snapshot)?,
        OutputFormat::Minimal => println!("{}", path.display()),
        OutputFormat::Table | OutputFormat::Csv => {
            if !settings.quiet {
                print_success(&format!(
                    "Dashboard data for {} exported to {}",
                    snapshot.date,
                    path.display()
                ));
            }
        }
    }

    Ok(())
}
