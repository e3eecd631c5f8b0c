//! Hyperbolic decline fit via damped nonlinear least squares.
//!
//! Model: `rate(t) = qi / (1 + b * Di * t)^(1/b)` with parameters
//! `(qi, Di, b)`.
//!
//! The solver is Levenberg–Marquardt: each iteration builds the 3-column
//! Jacobian, forms the normal equations `(JᵗJ + λI) δ = Jᵗr`, and solves the
//! 3×3 system directly. The damping factor λ interpolates between gradient
//! descent (large λ, robust far from the optimum) and Gauss–Newton (small λ,
//! fast near it).
//!
//! Numerical notes:
//! - `∂rate/∂qi` and `∂rate/∂Di` use analytic expressions; `∂rate/∂b` uses a
//!   forward difference because the analytic form is unstable near the
//!   singularity at `b → 0`.
//! - Non-convergence is never surfaced as an error. A singular linear solve
//!   or the iteration cap simply ends the loop with the best parameters seen
//!   so far; termination is guaranteed by the fixed cap.

use crate::domain::{DeclineModel, FitResult};
use crate::error::AppError;
use crate::fit::exponential::{fit_exponential, positive_rate_points};
use crate::math::{aic, r_squared, solve3, sse};
use crate::models::{eur, predict};

const MAX_ITERATIONS: usize = 200;
/// Forward-difference step for the numerical b-partial.
const B_STEP: f64 = 1e-6;
/// Relative SSE improvement below which the loop stops.
const SSE_TOLERANCE: f64 = 1e-10;
/// Initial damping factor.
const LAMBDA_INIT: f64 = 1e-3;

/// Parameter bounds enforced after every candidate update.
const QI_MIN: f64 = 1.0;
const DI_MIN: f64 = 1e-6;
const B_MIN: f64 = 0.01;
const B_MAX: f64 = 0.99;

/// Fit a hyperbolic decline model.
///
/// Seeds `(qi, Di)` from the exponential fit (whose failures propagate) and
/// `b = 0.5`, then refines by Levenberg–Marquardt over the positive-rate
/// points.
pub fn fit_hyperbolic(time: &[f64], rates: &[f64]) -> Result<FitResult, AppError> {
    let (t, q) = positive_rate_points(time, rates);
    let n = t.len();
    if n < 3 {
        return Err(AppError::InsufficientData(format!(
            "Hyperbolic fit requires at least 3 positive-rate points, found {n}."
        )));
    }

    let seed = fit_exponential(time, rates)?;
    let mut qi = seed.model.qi();
    let mut di = seed.model.di().max(0.001);
    let mut b = 0.5;

    let mut lambda = LAMBDA_INIT;
    let mut current_sse = model_sse(&t, &q, qi, di, b);

    for _ in 0..MAX_ITERATIONS {
        // Normal equations from residuals r_i = q_i - rate(t_i).
        let mut jtj = [[0.0; 3]; 3];
        let mut jtr = [0.0; 3];
        for (&ti, &qi_obs) in t.iter().zip(q.iter()) {
            let pred = rate(ti, qi, di, b);
            let r = qi_obs - pred;

            let u = 1.0 + b * di * ti;
            let d_qi = u.powf(-1.0 / b);
            let d_di = -qi * ti * u.powf(-1.0 / b - 1.0);
            let d_b = (rate(ti, qi, di, b + B_STEP) - pred) / B_STEP;

            let j = [d_qi, d_di, d_b];
            for row in 0..3 {
                for col in 0..3 {
                    jtj[row][col] += j[row] * j[col];
                }
                jtr[row] += j[row] * r;
            }
        }

        for k in 0..3 {
            jtj[k][k] += lambda;
        }

        // A singular system means the surface is locally flat; keep what we
        // have and stop.
        let Some(delta) = solve3(jtj, jtr) else {
            break;
        };

        let qi_new = (qi + delta[0]).max(QI_MIN);
        let di_new = (di + delta[1]).max(DI_MIN);
        let b_new = (b + delta[2]).clamp(B_MIN, B_MAX);

        let new_sse = model_sse(&t, &q, qi_new, di_new, b_new);
        if new_sse.is_finite() && new_sse < current_sse {
            let improvement = (current_sse - new_sse) / current_sse.max(f64::MIN_POSITIVE);
            qi = qi_new;
            di = di_new;
            b = b_new;
            current_sse = new_sse;
            lambda /= 2.0;
            if improvement < SSE_TOLERANCE {
                break;
            }
        } else {
            lambda *= 5.0;
        }
    }

    let model = DeclineModel::Hyperbolic { qi, di, b };
    let predicted: Vec<f64> = t.iter().map(|&ti| predict(&model, ti)).collect();
    Ok(FitResult {
        r_squared: r_squared(&q, &predicted),
        aic: aic(n, sse(&q, &predicted), model.param_count()),
        eur: eur(&model),
        model,
    })
}

fn rate(t: f64, qi: f64, di: f64, b: f64) -> f64 {
    qi / (1.0 + b * di * t).powf(1.0 / b)
}

fn model_sse(t: &[f64], q: &[f64], qi: f64, di: f64, b: f64) -> f64 {
    t.iter()
        .zip(q.iter())
        .map(|(&ti, &qi_obs)| {
            let r = qi_obs - rate(ti, qi, di, b);
            r * r
        })
        .sum()
}
