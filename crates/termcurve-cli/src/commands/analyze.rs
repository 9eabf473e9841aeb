//! Analyze command implementation.
//!
//! Runs the full curve analysis and exports the dashboard snapshot and the
//! analysis table.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use termcurve_curves::analytics::{
    MarketConditions, PolicyOutlook, RecessionProbability, RiskProfile, StandardForward,
    StandardSpread, TwosTensSignal,
};
use termcurve_curves::YieldCurve;
use termcurve_ext_file::{write_analysis_csv, write_snapshot_json, AnalysisRow, CurveSnapshot};

use crate::cli::OutputFormat;
use crate::commands::{load_curve, DateArgs};
use crate::config::Settings;
use crate::output::{
    format_bps, format_percent, format_years, print_alert, print_csv, print_header, print_json,
    print_success, print_table, KeyValue,
};

/// Arguments for the analyze command.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub date: DateArgs,

    /// Skip writing the JSON snapshot and CSV table
    #[arg(long)]
    pub no_export: bool,
}

/// Everything the analysis computes, for JSON output.
#[derive(Debug, Serialize)]
struct AnalysisReport {
    snapshot: CurveSnapshot,
    twos_tens_signal: TwosTensSignal,
    recession_probability: RecessionProbability,
    market_conditions: MarketConditions,
    risk_profile: Vec<RiskProfile>,
    policy_outlook: PolicyOutlook,
}

#[derive(Tabled)]
struct ObservationRow {
    #[tabled(rename = "Tenor")]
    tenor: String,
    #[tabled(rename = "Maturity")]
    maturity: String,
    #[tabled(rename = "Yield")]
    yield_percent: String,
    #[tabled(rename = "Duration")]
    duration: String,
}

#[derive(Tabled)]
struct RiskRow {
    #[tabled(rename = "Tenor")]
    tenor: String,
    #[tabled(rename = "Yield")]
    yield_percent: String,
    #[tabled(rename = "Duration")]
    duration: String,
    #[tabled(rename = "DV01")]
    dv01: String,
    #[tabled(rename = "Risk Level")]
    risk_level: String,
}

/// Execute the analyze command.
pub fn execute(args: AnalyzeArgs, settings: &Settings) -> Result<()> {
    let curve = load_curve(settings, args.date.date.as_deref())?;
    let snapshot = CurveSnapshot::from_curve(&curve).with_source(settings.config.source());
    let rows = AnalysisRow::rows_for(&curve);

    match settings.format {
        OutputFormat::Table => print_report(&curve)?,
        OutputFormat::Json => print_json(&AnalysisReport {
            snapshot: snapshot.clone(),
            twos_tens_signal: TwosTensSignal::from_curve(&curve),
            recession_probability: RecessionProbability::from_curve(&curve),
            market_conditions: MarketConditions::from_curve(&curve),
            risk_profile: RiskProfile::key_maturities(&curve),
            policy_outlook: PolicyOutlook::from_curve(&curve),
        })?,
        OutputFormat::Csv => print_csv(&rows)?,
        OutputFormat::Minimal => println!("{}", curve.classify_shape()),
    }

    if args.no_export {
        return Ok(());
    }

    let config = &settings.config;
    write_snapshot_json(&config.json_output, &snapshot)?;
    write_analysis_csv(&config.csv_output, &rows)?;
    if !settings.quiet {
        print_success(&format!("Dashboard data: {}", config.json_output.display()));
        print_success(&format!("Analysis CSV: {}", config.csv_output.display()));
    }

    Ok(())
}

fn print_report(curve: &YieldCurve) -> Result<()> {
    print_header(&format!("Treasury Yield Curve {}", curve.date()));
    let observations: Vec<ObservationRow> = curve
        .observations()
        .iter()
        .map(|obs| ObservationRow {
            tenor: obs.label().to_string(),
            maturity: format_years(obs.maturity_years()),
            yield_percent: format_percent(obs.yield_percent()),
            duration: format!("{:.2}", curve.duration(obs.maturity_years(), 0.0)),
        })
        .collect();
    print_table(&observations)?;
    println!("Shape: {}", curve.classify_shape());

    print_header("Key Spreads");
    let mut spreads: Vec<KeyValue> = StandardSpread::ALL
        .iter()
        .map(|s| KeyValue::from_bps(s.name(), s.spread(curve)))
        .collect();
    spreads.push(KeyValue::new("2s10s Signal", TwosTensSignal::from_curve(curve).to_string()));
    spreads.push(KeyValue::new(
        "Recession Probability",
        RecessionProbability::from_curve(curve).to_string(),
    ));
    print_table(&spreads)?;
    if TwosTensSignal::from_curve(curve) == TwosTensSignal::RecessionWarning {
        print_alert("2s10s deeply inverted: recession warning");
    }

    print_header("Forward Rates");
    let forwards: Vec<KeyValue> = StandardForward::ALL
        .iter()
        .map(|f| KeyValue::new(f.key(), format!("{:.4}%", f.rate(curve))))
        .collect();
    print_table(&forwards)?;

    print_market_conditions(curve)?;
    print_risk_profile(curve)?;
    print_policy_outlook(curve)
}

fn print_market_conditions(curve: &YieldCurve) -> Result<()> {
    let market = MarketConditions::from_curve(curve);

    print_header("Market Conditions");
    print_table(&[
        KeyValue::from_percent("Policy Rate (1M)", market.policy_rate),
        KeyValue::from_percent("Short Rate (3M)", market.short_rate),
        KeyValue::from_percent("Benchmark (10Y)", market.benchmark_rate),
        KeyValue::from_percent("Long Rate (30Y)", market.long_rate),
        KeyValue::from_bps("3m10y Slope", market.slope),
        KeyValue::new("Regime", market.regime.to_string()),
        KeyValue::new(
            "Short-end Spread (3M-1Y)",
            format!("{:.0} bps", market.short_end_dispersion_bps),
        ),
        KeyValue::new(
            "Long-end Spread (10Y-30Y)",
            format!("{:.0} bps", market.long_end_dispersion_bps),
        ),
    ])?;
    println!("{}", market.regime.interpretation());
    Ok(())
}

fn print_risk_profile(curve: &YieldCurve) -> Result<()> {
    print_header("Interest Rate Risk");
    let rows: Vec<RiskRow> = RiskProfile::key_maturities(curve)
        .into_iter()
        .map(|p| RiskRow {
            tenor: p.label,
            yield_percent: format_percent(p.yield_percent),
            duration: format!("{:.2}", p.duration),
            dv01: format!("{:.2}", p.dv01),
            risk_level: p.risk_level.to_string(),
        })
        .collect();
    print_table(&rows)
}

fn print_policy_outlook(curve: &YieldCurve) -> Result<()> {
    let outlook = PolicyOutlook::from_curve(curve);

    print_header("Policy Outlook");
    print_table(&[
        KeyValue::from_percent("Near-term Forward (3M-15M)", outlook.near_forward),
        KeyValue::from_percent("Medium-term Forward (1Y-3Y)", outlook.medium_forward),
        KeyValue::from_percent("Long-term Forward (5Y-10Y)", outlook.long_forward),
        KeyValue::new("Expectation", outlook.expectation.to_string()),
        KeyValue::new(
            "Term Premium",
            format!("{} ({})", format_bps(outlook.term_premium), outlook.term_premium_regime),
        ),
    ])
}
