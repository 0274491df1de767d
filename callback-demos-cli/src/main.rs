//! Callback Demos CLI Application
//!
//! Command-line driver for the callback-demos library. It adds:
//! - Unit selection from flags or a TOML config file
//! - Input overrides for the record and numeric units
//! - Optional parallel execution on a thread pool
//! - Text or JSON reports

use anyhow::{Context, Result};
use callback_demos::{Console, StdoutConsole, Unit, UnitInputs};
use clap::Parser;
use rayon::prelude::*;
use std::io;
use std::path::PathBuf;

mod config;
mod report;

use config::{AppConfig, OutputFormat};
use report::UnitReport;

/// Callback Demos - run small examples of passing functions to functions
#[derive(Parser, Debug)]
#[command(name = "callback-demos-cli")]
#[command(about = "Run the callback pattern demo units", long_about = None)]
#[command(version)]
struct Args {
    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Unit to run (can be repeated; order is kept)
    #[arg(short, long, value_name = "NAME")]
    unit: Vec<Unit>,

    /// Number fed to the numeric unit
    #[arg(short, long, value_name = "N", allow_negative_numbers = true)]
    number: Option<f64>,

    /// Run units on a thread pool (output order is unchanged)
    #[arg(short, long)]
    parallel: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all logging except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    log::info!("Callback Demos CLI v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Using library v{}", callback_demos::VERSION);

    let config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => AppConfig::default(),
    };

    // Flags win over the config file
    let units = if args.unit.is_empty() {
        config.units()
    } else {
        args.unit.clone()
    };
    let mut inputs = config.inputs();
    if let Some(number) = args.number {
        inputs = inputs.with_number(number);
    }
    let format = args.format.or(config.format).unwrap_or_default();

    log::debug!("Running {} unit(s): {:?}", units.len(), units);

    if args.parallel || format == OutputFormat::Json {
        let reports = collect_reports(&units, &inputs, args.parallel)?;
        report::write_reports(&mut io::stdout().lock(), &reports, format)?;
    } else {
        let mut console = StdoutConsole;
        run_direct(&units, &inputs, &mut console)?;
    }

    Ok(())
}

/// Run units straight into a console, one after another
fn run_direct(units: &[Unit], inputs: &UnitInputs, console: &mut dyn Console) -> Result<()> {
    callback_demos::run_units(units, inputs, console).context("Failed to write unit output")
}

/// Run each unit into its own transcript, optionally on the rayon pool
///
/// Results come back in `units` order either way.
fn collect_reports(units: &[Unit], inputs: &UnitInputs, parallel: bool) -> Result<Vec<UnitReport>> {
    let run = |&unit: &Unit| -> Result<UnitReport> {
        Ok(UnitReport {
            unit,
            lines: callback_demos::transcript(unit, inputs)?,
        })
    };

    if parallel {
        units.par_iter().map(run).collect()
    } else {
        units.iter().map(run).collect()
    }
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
