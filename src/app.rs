//! Command dispatch: turn parsed CLI arguments into pipeline runs and output.

use clap::Parser;

use crate::cli::{Cli, Command};
use crate::domain::FitConfig;
use crate::error::AppError;
use crate::io::curve::write_model_json;
use crate::io::export::{export_forecast_csv, write_forecast_csv, write_results_csv};
use crate::report::format_summary;

pub mod pipeline;

/// Entry point called by the binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    match cli.command {
        Command::Fit(args) => run_fit_command(&args.to_config()),
        Command::Forecast(args) => run_forecast_command(&args.to_config()),
    }
}

fn run_fit_command(config: &FitConfig) -> Result<(), AppError> {
    let out = pipeline::run_fit(config)?;
    print!("{}", format_summary(&out));
    write_exports(config, &out)?;
    Ok(())
}

fn run_forecast_command(config: &FitConfig) -> Result<(), AppError> {
    let out = pipeline::run_fit(config)?;
    print!("{}", export_forecast_csv(&out.forecast.points));
    write_exports(config, &out)?;
    Ok(())
}

fn write_exports(config: &FitConfig, out: &pipeline::RunOutput) -> Result<(), AppError> {
    if let Some(path) = &config.export_results {
        write_results_csv(path, &out.fit)?;
        eprintln!("Results CSV written to {}", path.display());
    }
    if let Some(path) = &config.export_forecast {
        write_forecast_csv(path, &out.forecast.points)?;
        eprintln!("Forecast CSV written to {}", path.display());
    }
    if let Some(path) = &config.export_model {
        write_model_json(path, &out.fit, &out.parsed, config.forecast_months)?;
        eprintln!("Model JSON written to {}", path.display());
    }
    Ok(())
}
