//! Dedicated 3×3 linear solver.
//!
//! The Levenberg–Marquardt step always solves a 3×3 system (the hyperbolic
//! model has exactly three parameters), so we implement Gaussian elimination
//! with partial pivoting for that fixed size rather than pulling in a general
//! dense-matrix dependency.

/// Pivot magnitudes below this are treated as singular.
const PIVOT_EPS: f64 = 1e-12;

/// Solve `a * x = b` for a 3×3 system.
///
/// Returns `None` when the system is singular (a pivot column has no usable
/// entry). The caller decides what that means; the LM loop treats it as
/// "stop and keep the current parameters".
pub fn solve3(a: [[f64; 3]; 3], b: [f64; 3]) -> Option<[f64; 3]> {
    // Augmented matrix [a | b].
    let mut m = [[0.0; 4]; 3];
    for i in 0..3 {
        m[i][..3].copy_from_slice(&a[i]);
        m[i][3] = b[i];
    }

    for col in 0..3 {
        // Partial pivot: largest absolute entry in this column.
        let mut pivot = col;
        for row in (col + 1)..3 {
            if m[row][col].abs() > m[pivot][col].abs() {
                pivot = row;
            }
        }
        if m[pivot][col].abs() < PIVOT_EPS {
            return None;
        }
        m.swap(col, pivot);

        for row in (col + 1)..3 {
            let factor = m[row][col] / m[col][col];
            for k in col..4 {
                m[row][k] -= factor * m[col][k];
            }
        }
    }

    // Back substitution.
    let mut x = [0.0; 3];
    for i in (0..3).rev() {
        let mut sum = m[i][3];
        for k in (i + 1)..3 {
            sum -= m[i][k] * x[k];
        }
        x[i] = sum / m[i][i];
    }

    if x.iter().all(|v| v.is_finite()) {
        Some(x)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solve3_identity() {
        let a = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        let x = solve3(a, [1.0, 2.0, 3.0]).unwrap();
        assert!((x[0] - 1.0).abs() < 1e-12);
        assert!((x[1] - 2.0).abs() < 1e-12);
        assert!((x[2] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn solve3_requires_pivoting() {
        // Zero in the (0,0) position forces a row swap.
        let a = [[0.0, 2.0, 1.0], [3.0, 1.0, 0.0], [1.0, 0.0, 2.0]];
        let x_true = [1.0, -2.0, 3.0];
        let b = [
            a[0][0] * x_true[0] + a[0][1] * x_true[1] + a[0][2] * x_true[2],
            a[1][0] * x_true[0] + a[1][1] * x_true[1] + a[1][2] * x_true[2],
            a[2][0] * x_true[0] + a[2][1] * x_true[1] + a[2][2] * x_true[2],
        ];
        let x = solve3(a, b).unwrap();
        for (got, want) in x.iter().zip(x_true.iter()) {
            assert!((got - want).abs() < 1e-10, "got {got}, want {want}");
        }
    }

    #[test]
    fn solve3_singular_returns_none() {
        // Row 2 = 2 * row 1.
        let a = [[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [1.0, 0.0, 1.0]];
        assert!(solve3(a, [1.0, 2.0, 3.0]).is_none());
    }
}
