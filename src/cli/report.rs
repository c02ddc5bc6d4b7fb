//! The `report` command: load a spreadsheet and render the dashboard

use clap::Args;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::config::{DashboardPaths, Settings};
use crate::display::{format_report, RenderOptions};
use crate::error::{DashboardError, DashboardResult};
use crate::models::Period;
use crate::reports::monthly::export_csv;
use crate::reports::summary::{available_years, default_period};
use crate::reports::AggregationEngine;
use crate::services::TransactionLoader;
use crate::storage::goals_store;

/// Arguments for the report command
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Spreadsheet to load (.xlsx, .xls, .ods or .csv)
    pub file: PathBuf,

    /// Month to report on (e.g., "2025-01"); defaults to the latest month with data
    #[arg(short, long)]
    pub period: Option<String>,

    /// Skip the monthly overview table
    #[arg(long)]
    pub no_monthly: bool,

    /// Show at most N transactions of the period
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Export the monthly series to a CSV file instead of rendering
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Colorize balances
    #[arg(long)]
    pub color: bool,
}

/// Handle the report command
pub fn handle_report_command(
    paths: &DashboardPaths,
    settings: &Settings,
    args: ReportArgs,
) -> DashboardResult<()> {
    let loader = TransactionLoader::new(settings);
    let transactions = loader.load_file(&args.file)?;

    let engine = AggregationEngine::from_settings(settings);

    if let Some(path) = args.output {
        let file = File::create(&path).map_err(|e| {
            DashboardError::Io(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        export_csv(&engine.monthly_series(&transactions), BufWriter::new(file))?;
        println!("Monthly series exported to: {}", path.display());
        return Ok(());
    }

    let period = match args.period {
        Some(period_str) => Period::parse(&period_str).map_err(|e| {
            DashboardError::Validation(format!(
                "Invalid period format: {}. Use YYYY-MM (e.g., 2025-01)",
                e
            ))
        })?,
        None => default_period(&transactions).unwrap_or_else(Period::current),
    };

    let goals = goals_store(paths, settings).load();
    let report = engine.build(&transactions, period, &goals);

    let years = available_years(&transactions);
    if !years.is_empty() {
        let years: Vec<String> = years.iter().map(|y| y.to_string()).collect();
        println!("Years with data: {}\n", years.join(", "));
    }

    let options = RenderOptions {
        currency_symbol: settings.currency_symbol.clone(),
        show_monthly: !args.no_monthly,
        transaction_limit: args.limit,
        color: args.color,
    };
    println!("{}", format_report(&report, &options));

    Ok(())
}
