//! Read/write saved-model JSON files.
//!
//! Model JSON is the "portable" representation of a fitted decline curve:
//! - model shape + parameters
//! - fit statistics (R², AIC, EUR)
//! - the data window it was fitted on
//! - a precomputed fitted grid for quick plotting
//!
//! The schema is defined by `domain::ModelFile`.

use std::fs::File;
use std::path::Path;

use crate::domain::{FitResult, ModelFile, ModelGrid, ParsedProduction};
use crate::error::AppError;
use crate::models::predict;

/// Write a fitted model to a JSON file.
///
/// The grid covers the observed window plus the forecast horizon so a plotter
/// can overlay the curve on both history and projection.
pub fn write_model_json(
    path: &Path,
    fit: &FitResult,
    parsed: &ParsedProduction,
    horizon_months: u32,
) -> Result<(), AppError> {
    let first_date = parsed.first_date().ok_or_else(|| {
        AppError::Parse("Cannot write a model JSON for an empty series.".to_string())
    })?;

    let file = File::create(path)
        .map_err(|e| AppError::Io(format!("Failed to create '{}': {e}", path.display())))?;

    let last = parsed.last_month();
    let months: Vec<u32> = (0..=last + horizon_months).collect();
    let rates: Vec<f64> = months.iter().map(|&m| predict(&fit.model, m as f64)).collect();

    let model_file = ModelFile {
        tool: "dca".to_string(),
        first_date,
        last_month: last,
        fit: fit.clone(),
        grid: ModelGrid { months, rates },
    };

    serde_json::to_writer_pretty(file, &model_file)
        .map_err(|e| AppError::Io(format!("Failed to write model JSON: {e}")))
}

/// Read a saved model JSON file.
pub fn read_model_json(path: &Path) -> Result<ModelFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::Io(format!("Failed to open '{}': {e}", path.display())))?;
    serde_json::from_reader(file)
        .map_err(|e| AppError::Io(format!("Invalid model JSON '{}': {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DeclineModel, ParsedProduction};
    use crate::fit::select_best_fit;
    use crate::io::parse::parse_production;

    #[test]
    fn model_json_round_trips() {
        let parsed = parse_production(
            "2020-01,1000\n2020-02,950\n2020-03,905\n2020-04,860\n2020-05,815\n2020-06,780",
        )
        .unwrap();
        let selection = select_best_fit(&parsed.time, &parsed.rates).unwrap();

        let dir = std::env::temp_dir().join("dca-model-json-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("model.json");

        write_model_json(&path, &selection.best, &parsed, 12).unwrap();
        let loaded = read_model_json(&path).unwrap();

        assert_eq!(loaded.tool, "dca");
        assert_eq!(loaded.last_month, 5);
        assert_eq!(loaded.grid.months.len(), 18);
        assert_eq!(loaded.fit.model, selection.best.model);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn empty_series_is_an_error_not_a_panic() {
        // The parser never yields an empty series, but the fields are public,
        // so a library caller can hand us one.
        let parsed = ParsedProduction {
            records: vec![],
            time: vec![],
            rates: vec![],
        };
        let fit = FitResult {
            model: DeclineModel::Exponential { qi: 100.0, di: 0.05 },
            r_squared: 1.0,
            aic: 0.0,
            eur: Some(2000.0),
        };

        let path = std::env::temp_dir().join("dca-empty-series-model.json");
        let err = write_model_json(&path, &fit, &parsed, 12).unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
        assert!(!path.exists());
    }
}
