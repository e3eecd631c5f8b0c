//! Goodness-of-fit statistics.

/// Floor applied to variance-like quantities before taking logarithms or
/// dividing, so perfect fits don't blow up.
const VAR_FLOOR: f64 = 1e-12;

/// Coefficient of determination of `predicted` against `observed`.
///
/// Can be negative for fits worse than the observed mean; never exceeds 1.
pub fn r_squared(observed: &[f64], predicted: &[f64]) -> f64 {
    let n = observed.len();
    if n == 0 {
        return 0.0;
    }

    let mean = observed.iter().sum::<f64>() / n as f64;

    let mut ss_res = 0.0;
    let mut ss_tot = 0.0;
    for (y, y_hat) in observed.iter().zip(predicted.iter()) {
        ss_res += (y - y_hat) * (y - y_hat);
        ss_tot += (y - mean) * (y - mean);
    }

    1.0 - ss_res / ss_tot.max(VAR_FLOOR)
}

/// Akaike Information Criterion for a least-squares fit with `k` parameters.
pub fn aic(n: usize, sse: f64, k: usize) -> f64 {
    let n_f = n as f64;
    n_f * (sse / n_f).max(VAR_FLOOR).ln() + 2.0 * k as f64
}

/// Sum of squared errors of `predicted` against `observed`.
pub fn sse(observed: &[f64], predicted: &[f64]) -> f64 {
    observed
        .iter()
        .zip(predicted.iter())
        .map(|(y, y_hat)| (y - y_hat) * (y - y_hat))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn r_squared_perfect_fit_is_one() {
        let y = [1.0, 2.0, 3.0, 4.0];
        assert!((r_squared(&y, &y) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn r_squared_mean_prediction_is_zero() {
        let y = [1.0, 2.0, 3.0];
        let mean = [2.0, 2.0, 2.0];
        assert!(r_squared(&y, &mean).abs() < 1e-12);
    }

    #[test]
    fn r_squared_can_go_negative() {
        let y = [1.0, 2.0, 3.0];
        let bad = [10.0, 10.0, 10.0];
        assert!(r_squared(&y, &bad) < 0.0);
    }

    #[test]
    fn aic_penalizes_parameters() {
        let a2 = aic(20, 5.0, 2);
        let a3 = aic(20, 5.0, 3);
        assert!((a3 - a2 - 2.0).abs() < 1e-12);
    }
}
