//! Shared "fit pipeline" logic used by all subcommands.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! parse -> fit/selection -> forecast
//!
//! The subcommands then focus on presentation (summary vs forecast table)
//! and on which exports to write.

use crate::domain::{FitConfig, FitResult, ForecastResult, ModelSpec, ParsedProduction};
use crate::error::AppError;
use crate::fit::{FitSelection, fit_exponential, fit_hyperbolic, select_best_fit};
use crate::forecast::generate_forecast;
use crate::io::parse::{load_production, parse_production};

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub parsed: ParsedProduction,
    /// `None` when the user forced a single model.
    pub selection: Option<FitSelection>,
    /// The fit driving the forecast (the selected or forced model).
    pub fit: FitResult,
    pub forecast: ForecastResult,
}

/// Execute the full pipeline against the configured input file.
pub fn run_fit(config: &FitConfig) -> Result<RunOutput, AppError> {
    let parsed = load_production(&config.input_path)?;
    run_fit_on_parsed(parsed, config)
}

/// Execute the pipeline on in-memory text.
///
/// This is what keeps the engine testable without touching the filesystem.
pub fn run_fit_on_text(text: &str, config: &FitConfig) -> Result<RunOutput, AppError> {
    let parsed = parse_production(text)?;
    run_fit_on_parsed(parsed, config)
}

fn run_fit_on_parsed(parsed: ParsedProduction, config: &FitConfig) -> Result<RunOutput, AppError> {
    let (fit, selection) = match config.model_spec {
        ModelSpec::Auto => {
            let selection = select_best_fit(&parsed.time, &parsed.rates)?;
            (selection.best.clone(), Some(selection))
        }
        ModelSpec::Exponential => (fit_exponential(&parsed.time, &parsed.rates)?, None),
        ModelSpec::Hyperbolic => (fit_hyperbolic(&parsed.time, &parsed.rates)?, None),
    };

    let start_month = config.start_month.unwrap_or_else(|| parsed.last_month());
    let forecast = generate_forecast(
        &fit.model,
        config.forecast_months,
        config.economic_limit,
        start_month,
    );

    Ok(RunOutput {
        parsed,
        selection,
        fit,
        forecast,
    })
}
