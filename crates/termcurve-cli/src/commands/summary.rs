//! Summary command implementation.
//!
//! Quick market summary: key rates, the 2s10s spread and the curve shape.

use anyhow::Result;
use serde::Serialize;
use termcurve_curves::analytics::{StandardSpread, TwosTensSignal};
use termcurve_curves::CurveShape;

use crate::cli::OutputFormat;
use crate::commands::{load_curve, DateArgs};
use crate::config::Settings;
use crate::output::{print_alert, print_header, print_json, print_output, KeyValue};

/// Maturities quoted in the summary.
const KEY_RATES: [(&str, f64); 4] = [("3M", 0.25), ("2Y", 2.0), ("10Y", 10.0), ("30Y", 30.0)];

#[derive(Debug, Serialize)]
struct Summary<'a> {
    date: &'a str,
    yields: Vec<KeyRate>,
    spread_2s10s_bps: f64,
    signal: TwosTensSignal,
    shape: CurveShape,
}

#[derive(Debug, Serialize)]
struct KeyRate {
    tenor: &'static str,
    yield_percent: f64,
}

/// Execute the summary command.
pub fn execute(args: DateArgs, settings: &Settings) -> Result<()> {
    let curve = load_curve(settings, args.date.as_deref())?;

    let summary = Summary {
        date: curve.date(),
        yields: KEY_RATES
            .iter()
            .map(|&(tenor, m)| KeyRate {
                tenor,
                yield_percent: curve.yield_at(m),
            })
            .collect(),
        spread_2s10s_bps: StandardSpread::TwosTens.bps(&curve),
        signal: TwosTensSignal::from_curve(&curve),
        shape: curve.classify_shape(),
    };

    match settings.format {
        OutputFormat::Table | OutputFormat::Csv => {
            print_header(&format!("Market Summary {}", summary.date));
            let mut rows: Vec<KeyValue> = summary
                .yields
                .iter()
                .map(|r| KeyValue::from_percent(r.tenor, r.yield_percent))
                .collect();
            rows.push(KeyValue::new(
                "2s10s Spread",
                format!("{:.0} bps", summary.spread_2s10s_bps),
            ));
            rows.push(KeyValue::new("Signal", summary.signal.to_string()));
            rows.push(KeyValue::new("Shape", summary.shape.to_string()));
            print_output(&rows, settings.format)?;
            if summary.signal == TwosTensSignal::RecessionWarning && settings.format == OutputFormat::Table {
                print_alert("RECESSION ALERT: 2s10s below -20 bps");
            }
        }
        OutputFormat::Json => print_json(&summary)?,
        OutputFormat::Minimal => println!("{:.0}", summary.spread_2s10s_bps),
    }

    Ok(())
}
