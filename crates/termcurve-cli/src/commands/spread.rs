//! Spread command implementation.
//!
//! Prints the yield spread between two maturities.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use termcurve_curves::analytics::spreads::RECESSION_WARNING_THRESHOLD;

use crate::cli::OutputFormat;
use crate::commands::{load_curve, validate_maturity, DateArgs};
use crate::config::Settings;
use crate::output::{format_years, print_alert, print_header, print_json, print_output, KeyValue};

/// Maturities within this distance of 2Y/10Y count as the 2s10s pair.
const PAIR_TOLERANCE: f64 = 0.1;

/// Arguments for the spread command.
#[derive(Args, Debug)]
pub struct SpreadArgs {
    /// First (shorter) maturity in years
    #[arg(long)]
    pub from: f64,

    /// Second (longer) maturity in years
    #[arg(long)]
    pub to: f64,

    #[command(flatten)]
    pub date: DateArgs,
}

#[derive(Debug, Serialize)]
struct SpreadResult<'a> {
    date: &'a str,
    from: f64,
    to: f64,
    spread_bps: f64,
    recession_signal: bool,
}

/// True for a deeply inverted 2s10s spread.
fn is_recession_signal(from: f64, to: f64, spread: f64) -> bool {
    (from - 2.0).abs() < PAIR_TOLERANCE
        && (to - 10.0).abs() < PAIR_TOLERANCE
        && spread < RECESSION_WARNING_THRESHOLD
}

/// Execute the spread command.
pub fn execute(args: SpreadArgs, settings: &Settings) -> Result<()> {
    let from = validate_maturity(args.from)?;
    let to = validate_maturity(args.to)?;

    let curve = load_curve(settings, args.date.date.as_deref())?;
    let spread = curve.spread(from, to);
    let recession_signal = is_recession_signal(from, to, spread);

    let result = SpreadResult {
        date: curve.date(),
        from,
        to,
        spread_bps: spread * 100.0,
        recession_signal,
    };

    match settings.format {
        OutputFormat::Table => {
            print_header("Yield Spread");
            let rows = vec![
                KeyValue::new("Curve Date", curve.date()),
                KeyValue::from_percent(format!("Yield {}", format_years(from)), curve.yield_at(from)),
                KeyValue::from_percent(format!("Yield {}", format_years(to)), curve.yield_at(to)),
                KeyValue::from_bps("Spread", spread),
            ];
            print_output(&rows, OutputFormat::Table)?;
            if recession_signal {
                print_alert("WARNING: 2s10s inversion, the key recession indicator");
            }
        }
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            wtr.serialize(&result)?;
            wtr.flush()?;
        }
        OutputFormat::Minimal => println!("{:.2}", result.spread_bps),
    }

    Ok(())
}
