mod engine;
mod inflation;
mod models;
mod rates;
mod report;
mod types;

use std::io::{stderr, stdout, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::engine::Pipeline;
use crate::inflation::{CpiSeries, DEFAULT_SERIES};
use crate::rates::EcbRateTable;
use crate::report::Pivot;

/// Reads a transaction file and outputs an inflation adjusted total yearly revenue per country.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Path to the transaction file, in csv format.
    #[arg(long, default_value = "./transactions.csv")]
    path: PathBuf,

    /// Historical exchange rates in the ECB reference-rate csv layout.
    #[arg(long, env = "RATES_PATH", default_value = "./eurofxref-hist.csv")]
    rates: PathBuf,

    /// Consumer price index flat file in the BLS time-series layout.
    #[arg(long, env = "CPI_PATH", default_value = "./cu.data.1.AllItems")]
    cpi: PathBuf,

    /// Price index series to read from the CPI file.
    #[arg(long, env = "CPI_SERIES", default_value = DEFAULT_SERIES)]
    cpi_series: String,

    /// Currency every amount is reported in.
    #[arg(long, default_value = "USD")]
    target: String,

    /// Available log levels: error, warn, info, debug, trace.
    #[arg(long, default_value = "error")]
    log_level: String
}

fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(parse_log_level(&args.log_level));

    let rates = EcbRateTable::load(&args.rates)
        .with_context(|| format!("loading exchange rates from {}", args.rates.display()))?;
    let index = CpiSeries::new(&args.cpi).with_series(&args.cpi_series);

    info!("Using price index file {}", index.path().display());

    let mut pipeline = Pipeline::new(rates, index).with_target(&args.target);

    let timer = Instant::now();
    let pivot = pipeline.run(&args.path)?;
    let duration = timer.elapsed();

    info!("Processed transactions into {} in: {duration:?}", pipeline.target());

    write_results_to_stdout(&pivot)?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the report, so logs go to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_results_to_stdout(pivot: &Pivot) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    pivot.render(&mut output)?;

    output.flush()?;

    Ok(())
}
