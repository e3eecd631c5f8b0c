//! Forward projection of a fitted decline model.
//!
//! The forecast walks integer month offsets from a seed month, evaluates the
//! model rate at each step, and accumulates cumulative production by
//! trapezoidal integration. It stops at the horizon or as soon as the rate
//! falls below the economic limit, whichever comes first.

use crate::domain::{DeclineModel, ForecastPoint, ForecastResult};
use crate::models::predict;

/// Default economic limit (rate units per month).
pub const DEFAULT_ECONOMIC_LIMIT: f64 = 1.0;

/// Project `model` forward `months` months starting at `start_month`.
///
/// The seed month (`m = 0`) is always emitted with `cumulative = 0`,
/// regardless of its rate. For `m > 0`, a rate below `economic_limit` ends
/// the forecast without emitting that point.
pub fn generate_forecast(
    model: &DeclineModel,
    months: u32,
    economic_limit: f64,
    start_month: u32,
) -> ForecastResult {
    let mut points = Vec::with_capacity(months as usize + 1);
    let mut cumulative = 0.0;
    let mut prev_rate = 0.0;

    for m in 0..=months {
        let month = start_month + m;
        let rate = predict(model, month as f64);

        if m > 0 {
            if rate < economic_limit {
                break;
            }
            cumulative += (prev_rate + rate) / 2.0;
        }

        points.push(ForecastPoint {
            month,
            rate,
            cumulative,
        });
        prev_rate = rate;
    }

    let eur_at_end = points.last().map(|p| p.cumulative).unwrap_or(0.0);
    ForecastResult { points, eur_at_end }
}
