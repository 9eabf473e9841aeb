//! Termcurve CLI - Treasury yield curve analyzer.
//!
//! # Usage
//!
//! ```bash
//! # Full analysis of the latest curve, exporting JSON and CSV
//! termcurve -i treasury_yields_live.csv analyze
//!
//! # Analyze a historical date without exporting
//! termcurve analyze --date 2025-09-16 --no-export
//!
//! # Implied 5y5y forward
//! termcurve forward --start 5 --end 10
//!
//! # 2s10s spread in basis points
//! termcurve spread --from 2 --to 10 --format minimal
//!
//! # Export the dashboard snapshot
//! termcurve export --output dashboard.json
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};
use config::{CliConfig, Settings};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let config = CliConfig::load(cli.config.as_deref())?;
    let settings = Settings::resolve(&cli, config);
    tracing::debug!(input = %settings.input.display(), format = ?settings.format, "resolved settings");

    // Execute command
    match cli.command {
        Commands::Analyze(args) => commands::analyze::execute(args, &settings)?,
        Commands::Forward(args) => commands::forward::execute(args, &settings)?,
        Commands::Spread(args) => commands::spread::execute(args, &settings)?,
        Commands::Export(args) => commands::export::execute(args, &settings)?,
        Commands::Summary(args) => commands::summary::execute(args, &settings)?,
        Commands::Shape(args) => commands::shape::execute(args, &settings)?,
    }

    Ok(())
}

/// Logs go to stderr so table and JSON output on stdout stay clean.
fn init_logging(verbose: bool, quiet: bool) {
    let default_directives = if verbose {
        "termcurve=debug,termcurve_curves=debug,termcurve_ext_file=debug"
    } else if quiet {
        "error"
    } else {
        "termcurve=info,termcurve_curves=warn,termcurve_ext_file=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
