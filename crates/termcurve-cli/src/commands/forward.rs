//! Forward command implementation.
//!
//! Prints the implied forward rate between two maturities.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::{load_curve, validate_maturity, DateArgs};
use crate::config::Settings;
use crate::error::CliError;
use crate::output::{format_years, print_header, print_json, print_output, KeyValue};

/// Arguments for the forward command.
#[derive(Args, Debug)]
pub struct ForwardArgs {
    /// Start maturity in years (0 for spot)
    #[arg(short, long)]
    pub start: f64,

    /// End maturity in years
    #[arg(short, long)]
    pub end: f64,

    #[command(flatten)]
    pub date: DateArgs,
}

#[derive(Debug, Serialize)]
struct ForwardResult<'a> {
    date: &'a str,
    start: f64,
    end: f64,
    forward_rate: f64,
}

/// Execute the forward command.
pub fn execute(args: ForwardArgs, settings: &Settings) -> Result<()> {
    if !args.start.is_finite() || args.start < 0.0 {
        return Err(CliError::InvalidMaturity(args.start).into());
    }
    let end = validate_maturity(args.end)?;
    if end <= args.start {
        return Err(CliError::InvalidInterval {
            start: args.start,
            end,
        }
        .into());
    }

    let curve = load_curve(settings, args.date.date.as_deref())?;
    let forward_rate = curve.try_forward_rate(args.start, end)?;

    let result = ForwardResult {
        date: curve.date(),
        start: args.start,
        end,
        forward_rate,
    };

    match settings.format {
        OutputFormat::Table => {
            print_header("Implied Forward Rate");
            let rows = vec![
                KeyValue::new("Curve Date", curve.date()),
                KeyValue::new("Start", format_years(args.start)),
                KeyValue::new("End", format_years(end)),
                KeyValue::new("Forward Rate", format!("{forward_rate:.4}%")),
            ];
            print_output(&rows, OutputFormat::Table)?;
            println!(
                "Market expects a {:.2}% {}-year rate in {} years",
                forward_rate,
                end - args.start,
                args.start
            );
        }
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            wtr.serialize(&result)?;
            wtr.flush()?;
        }
        OutputFormat::Minimal => println!("{forward_rate:.4}"),
    }

    Ok(())
}
