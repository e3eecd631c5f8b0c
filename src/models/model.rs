//! Rate and EUR evaluation for the Arps decline family.
//!
//! The fitters and the forecaster rely on two primitive operations:
//! - predict `rate(t)` given a model (for residuals/forecasts)
//! - compute the estimated ultimate recovery in closed form
//!
//! Both are implemented here for each model shape.

use crate::domain::DeclineModel;

/// Economic limit (rate units) used in the closed-form hyperbolic EUR.
pub const EUR_ECONOMIC_LIMIT: f64 = 1.0;

/// Predict `rate(t)` for the given model, `t` in months.
pub fn predict(model: &DeclineModel, t: f64) -> f64 {
    match *model {
        DeclineModel::Exponential { qi, di } => qi * (-di * t).exp(),
        DeclineModel::Hyperbolic { qi, di, b } => qi / (1.0 + b * di * t).powf(1.0 / b),
    }
}

/// Estimated ultimate recovery, or `None` when the integral diverges.
///
/// - Exponential: `EUR = qi / Di`, defined only for `Di > 0`.
/// - Hyperbolic: `EUR = qi^b / ((1-b) Di) * (qi^(1-b) - qf^(1-b))` down to the
///   economic limit `qf`, defined only for `Di > 0` and `b < 1`.
pub fn eur(model: &DeclineModel) -> Option<f64> {
    match *model {
        DeclineModel::Exponential { qi, di } => {
            if di > 0.0 { Some(qi / di) } else { None }
        }
        DeclineModel::Hyperbolic { qi, di, b } => {
            if di > 0.0 && b < 1.0 {
                let qf = EUR_ECONOMIC_LIMIT;
                Some(qi.powf(b) / ((1.0 - b) * di) * (qi.powf(1.0 - b) - qf.powf(1.0 - b)))
            } else {
                None
            }
        }
    }
}
