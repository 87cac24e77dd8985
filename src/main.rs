//! Command-line entry point for the payroll engine.
//!
//! Loads a time-punch input document, computes each employee's pay summary,
//! and prints one JSON record per employee in input order.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use punch_engine::calculation::calculate_payroll;
use punch_engine::input::InputLoader;

/// Compute payroll totals from time-punch records.
#[derive(Debug, Parser)]
#[command(name = "punch-engine", version)]
struct Args {
    /// Path to the time-punch input document.
    #[arg(default_value = "data.json")]
    input: PathBuf,
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let data = InputLoader::load(&args.input)?;

    for summary in calculate_payroll(&data) {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Payroll run failed");
            ExitCode::FAILURE
        }
    }
}
