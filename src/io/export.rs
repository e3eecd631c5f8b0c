//! Render fit and forecast results to CSV.
//!
//! The formatting functions are pure (`&T -> String`) so they can be unit
//! tested byte-for-byte; thin `write_*` wrappers add the file I/O for the
//! CLI. The exports are meant to be easy to consume in spreadsheets or
//! downstream scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::{FitResult, ForecastPoint};
use crate::error::AppError;

/// Format the fit parameters and statistics as a `Parameter,Value` table.
///
/// Precision is fixed per field: qi 2dp, Di 6dp, b 4dp (literal `0` for the
/// exponential model), R² 6dp, AIC 2dp, EUR 2dp or `N/A` when undefined.
pub fn export_results_csv(fit: &FitResult) -> String {
    let mut out = String::new();
    out.push_str("Parameter,Value\n");
    out.push_str(&format!("Model Type,{}\n", fit.model.display_name()));
    out.push_str(&format!("qi (initial rate),{:.2}\n", fit.model.qi()));
    out.push_str(&format!("Di (decline rate),{:.6}\n", fit.model.di()));
    match fit.model.b() {
        Some(b) => out.push_str(&format!("b-factor,{b:.4}\n")),
        None => out.push_str("b-factor,0\n"),
    }
    out.push_str(&format!("R²,{:.6}\n", fit.r_squared));
    out.push_str(&format!("AIC,{:.2}\n", fit.aic));
    out.push_str(&format!("EUR,{}\n", fmt_eur(fit.eur)));
    out
}

/// Format a forecast as a `Month,Rate,Cumulative` table (2dp).
pub fn export_forecast_csv(points: &[ForecastPoint]) -> String {
    let mut out = String::new();
    out.push_str("Month,Rate,Cumulative\n");
    for p in points {
        out.push_str(&format!("{},{:.2},{:.2}\n", p.month, p.rate, p.cumulative));
    }
    out
}

fn fmt_eur(eur: Option<f64>) -> String {
    match eur {
        Some(v) if v.is_finite() => format!("{v:.2}"),
        _ => "N/A".to_string(),
    }
}

/// Write the fit results CSV to a file.
pub fn write_results_csv(path: &Path, fit: &FitResult) -> Result<(), AppError> {
    write_text(path, &export_results_csv(fit))
}

/// Write the forecast CSV to a file.
pub fn write_forecast_csv(path: &Path, points: &[ForecastPoint]) -> Result<(), AppError> {
    write_text(path, &export_forecast_csv(points))
}

fn write_text(path: &Path, text: &str) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::Io(format!("Failed to create '{}': {e}", path.display())))?;
    file.write_all(text.as_bytes())
        .map_err(|e| AppError::Io(format!("Failed to write '{}': {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DeclineModel;

    fn exponential_fit() -> FitResult {
        FitResult {
            model: DeclineModel::Exponential { qi: 1000.0, di: 0.05 },
            r_squared: 0.998765,
            aic: 123.456,
            eur: Some(20_000.0),
        }
    }

    #[test]
    fn results_csv_is_byte_exact_for_exponential() {
        let csv = export_results_csv(&exponential_fit());
        let expected = "Parameter,Value\n\
                        Model Type,exponential\n\
                        qi (initial rate),1000.00\n\
                        Di (decline rate),0.050000\n\
                        b-factor,0\n\
                        R²,0.998765\n\
                        AIC,123.46\n\
                        EUR,20000.00\n";
        assert_eq!(csv, expected);
    }

    #[test]
    fn results_csv_reports_b_for_hyperbolic() {
        let fit = FitResult {
            model: DeclineModel::Hyperbolic { qi: 850.5, di: 0.031234, b: 0.4567 },
            r_squared: 0.991234,
            aic: 98.7,
            eur: Some(15_432.1),
        };
        let csv = export_results_csv(&fit);
        assert!(csv.contains("Model Type,hyperbolic\n"));
        assert!(csv.contains("qi (initial rate),850.50\n"));
        assert!(csv.contains("b-factor,0.4567\n"));
    }

    #[test]
    fn undefined_eur_prints_na() {
        let fit = FitResult {
            model: DeclineModel::Exponential { qi: 1000.0, di: -0.01 },
            r_squared: 0.5,
            aic: 50.0,
            eur: None,
        };
        assert!(export_results_csv(&fit).contains("EUR,N/A\n"));
    }

    #[test]
    fn forecast_csv_rows() {
        let points = vec![
            ForecastPoint { month: 36, rate: 165.3, cumulative: 0.0 },
            ForecastPoint { month: 37, rate: 157.24, cumulative: 161.27 },
        ];
        let csv = export_forecast_csv(&points);
        let expected = "Month,Rate,Cumulative\n\
                        36,165.30,0.00\n\
                        37,157.24,161.27\n";
        assert_eq!(csv, expected);
    }

    #[test]
    fn results_csv_round_trips_rounded_values() {
        let csv = export_results_csv(&exponential_fit());
        let mut qi = None;
        let mut di = None;
        for line in csv.lines().skip(1) {
            let (key, value) = line.split_once(',').unwrap();
            match key {
                "qi (initial rate)" => qi = value.parse::<f64>().ok(),
                "Di (decline rate)" => di = value.parse::<f64>().ok(),
                _ => {}
            }
        }
        assert_eq!(qi, Some(1000.0));
        assert_eq!(di, Some(0.05));
    }
}
