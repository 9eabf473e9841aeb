//! Shape command implementation.

use anyhow::Result;
use serde::Serialize;
use termcurve_curves::shape::{LONG_PILLAR, MEDIUM_PILLAR, SHORT_PILLAR};
use termcurve_curves::CurveShape;

use crate::cli::OutputFormat;
use crate::commands::{load_curve, DateArgs};
use crate::config::Settings;
use crate::output::{print_header, print_json, print_output, KeyValue};

#[derive(Debug, Serialize)]
struct ShapeResult<'a> {
    date: &'a str,
    shape: CurveShape,
    short_yield: f64,
    medium_yield: f64,
    long_yield: f64,
}

/// Execute the shape command.
pub fn execute(args: DateArgs, settings: &Settings) -> Result<()> {
    let curve = load_curve(settings, args.date.as_deref())?;
    let result = ShapeResult {
        date: curve.date(),
        shape: curve.classify_shape(),
        short_yield: curve.yield_at(SHORT_PILLAR),
        medium_yield: curve.yield_at(MEDIUM_PILLAR),
        long_yield: curve.yield_at(LONG_PILLAR),
    };

    match settings.format {
        OutputFormat::Table => {
            print_header("Curve Shape");
            print_output(
                &[
                    KeyValue::new("Curve Date", result.date),
                    KeyValue::new("Shape", result.shape.to_string()),
                    KeyValue::from_percent("3M", result.short_yield),
                    KeyValue::from_percent("5Y", result.medium_yield),
                    KeyValue::from_percent("30Y", result.long_yield),
                ],
                OutputFormat::Table,
            )?;
        }
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            wtr.serialize(&result)?;
            wtr.flush()?;
        }
        OutputFormat::Minimal => println!("{}", result.shape),
    }

    Ok(())
}
