//! Model selection: exponential vs hyperbolic.
//!
//! Both fitters run on the same series; the hyperbolic model only wins when
//! its R² is better by a fixed margin. The margin biases toward the simpler
//! 2-parameter model — the 3-parameter fit must earn a materially better fit,
//! not just a numerically better one.

use crate::domain::FitResult;
use crate::error::AppError;
use crate::fit::{fit_exponential, fit_hyperbolic};

/// R² advantage the hyperbolic fit must show to be preferred.
///
/// A heuristic constant, not a statistical criterion; its value matters for
/// reproducibility, so it stays literal.
const R_SQUARED_MARGIN: f64 = 0.005;

/// Output of fitting + selection: the chosen model plus both fits.
#[derive(Debug, Clone)]
pub struct FitSelection {
    pub best: FitResult,
    pub exponential: FitResult,
    pub hyperbolic: FitResult,
}

/// Fit both models and select the better one.
///
/// Either fitter's failure propagates unmodified; a `best` recommendation
/// requires both fits.
pub fn select_best_fit(time: &[f64], rates: &[f64]) -> Result<FitSelection, AppError> {
    let exponential = fit_exponential(time, rates)?;
    let hyperbolic = fit_hyperbolic(time, rates)?;

    let best = if hyperbolic.r_squared > exponential.r_squared + R_SQUARED_MARGIN {
        hyperbolic.clone()
    } else {
        exponential.clone()
    };

    Ok(FitSelection {
        best,
        exponential,
        hyperbolic,
    })
}
