//! Command-line parsing for the decline-curve analyzer.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the modeling/math code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{FitConfig, ModelSpec};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "dca", version, about = "Arps decline-curve analysis")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit decline models to a production series, print diagnostics, and
    /// optionally export results.
    Fit(FitArgs),
    /// Fit and print the forecast table as CSV on stdout (useful for
    /// scripting).
    Forecast(FitArgs),
}

/// Common options for fitting and forecasting.
#[derive(Debug, Parser, Clone)]
pub struct FitArgs {
    /// Input production series: lines of `<date>,<rate>` (comma, tab or
    /// whitespace separated; optional header).
    pub input: PathBuf,

    /// Which model(s) to fit.
    #[arg(long, value_enum, default_value_t = ModelSpec::Auto)]
    pub model: ModelSpec,

    /// Forecast horizon in months (conventional presets: 12, 24, 60).
    #[arg(short = 'm', long, default_value_t = 24, value_parser = clap::value_parser!(u32).range(1..))]
    pub forecast_months: u32,

    /// Minimum rate below which forecasting stops.
    #[arg(long, default_value_t = 1.0)]
    pub economic_limit: f64,

    /// Forecast seed month (default: the last observed month).
    #[arg(long)]
    pub start_month: Option<u32>,

    /// Write the fit parameters/statistics CSV to this path.
    #[arg(long)]
    pub export_results: Option<PathBuf>,

    /// Write the forecast CSV to this path.
    #[arg(long)]
    pub export_forecast: Option<PathBuf>,

    /// Write the fitted model JSON to this path.
    #[arg(long)]
    pub export_model: Option<PathBuf>,
}

impl FitArgs {
    pub fn to_config(&self) -> FitConfig {
        FitConfig {
            input_path: self.input.clone(),
            model_spec: self.model,
            forecast_months: self.forecast_months,
            economic_limit: self.economic_limit,
            start_month: self.start_month,
            export_results: self.export_results.clone(),
            export_forecast: self.export_forecast.clone(),
            export_model: self.export_model.clone(),
        }
    }
}
