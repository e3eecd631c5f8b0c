//! Exponential decline fit via log-linear regression.
//!
//! `rate(t) = qi * exp(-Di * t)` is linear in log space:
//!
//! ```text
//! ln(rate) = ln(qi) - Di * t
//! ```
//!
//! so we solve ordinary least squares of `ln(rate)` against `t` in closed
//! form and recover `qi = exp(intercept)`, `Di = -slope`. No sign constraint
//! is imposed on `Di`: an increasing series yields `Di <= 0`, a legal but
//! physically non-declining model with an undefined EUR.

use crate::domain::{DeclineModel, FitResult};
use crate::error::AppError;
use crate::math::{aic, r_squared, sse};
use crate::models::{eur, predict};

/// Denominators below this are treated as zero time-variance.
const DENOM_EPS: f64 = 1e-12;

/// Fit an exponential decline model.
///
/// Only points with `rate > 0` participate (the log transform requires it);
/// R² and AIC are computed over those same filtered points, in rate space.
pub fn fit_exponential(time: &[f64], rates: &[f64]) -> Result<FitResult, AppError> {
    let (t, q) = positive_rate_points(time, rates);
    let n = t.len();
    if n < 2 {
        return Err(AppError::InsufficientData(format!(
            "Exponential fit requires at least 2 positive-rate points, found {n}."
        )));
    }

    // Closed-form OLS of ln(q) on t.
    let mut s_t = 0.0;
    let mut s_tt = 0.0;
    let mut s_ln = 0.0;
    let mut s_tln = 0.0;
    for (ti, qi) in t.iter().zip(q.iter()) {
        let ln_q = qi.ln();
        s_t += ti;
        s_tt += ti * ti;
        s_ln += ln_q;
        s_tln += ti * ln_q;
    }

    let n_f = n as f64;
    let denom = n_f * s_tt - s_t * s_t;
    if denom.abs() < DENOM_EPS {
        return Err(AppError::DegenerateData(
            "Exponential fit is degenerate: all usable points share the same time value."
                .to_string(),
        ));
    }

    let slope = (n_f * s_tln - s_t * s_ln) / denom;
    let intercept = (s_ln - slope * s_t) / n_f;

    let model = DeclineModel::Exponential {
        qi: intercept.exp(),
        di: -slope,
    };

    let predicted: Vec<f64> = t.iter().map(|&ti| predict(&model, ti)).collect();
    Ok(FitResult {
        r_squared: r_squared(&q, &predicted),
        aic: aic(n, sse(&q, &predicted), model.param_count()),
        eur: eur(&model),
        model,
    })
}

/// Restrict a series to its positive-rate points.
pub(crate) fn positive_rate_points(time: &[f64], rates: &[f64]) -> (Vec<f64>, Vec<f64>) {
    time.iter()
        .zip(rates.iter())
        .filter(|&(_, &q)| q > 0.0)
        .map(|(&t, &q)| (t, q))
        .unzip()
}
