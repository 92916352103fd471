//! Banded linear solvers.
//!
//! The Hodrick-Prescott normal equations form a symmetric positive definite
//! pentadiagonal system; an LDL' factorisation solves it in O(n) time and
//! memory instead of the O(n^3) dense Cholesky route.

/// Symmetric pentadiagonal matrix stored by its upper bands.
#[derive(Debug, Clone, PartialEq)]
pub struct SymmetricPentadiagonal {
    /// Main diagonal, length n.
    pub diag: Vec<f64>,
    /// First super-diagonal `A[i][i+1]`, length n-1.
    pub upper1: Vec<f64>,
    /// Second super-diagonal `A[i][i+2]`, length n-2.
    pub upper2: Vec<f64>,
}

impl SymmetricPentadiagonal {
    /// Zero matrix of order `n`.
    pub fn zeros(n: usize) -> Self {
        Self {
            diag: vec![0.0; n],
            upper1: vec![0.0; n.saturating_sub(1)],
            upper2: vec![0.0; n.saturating_sub(2)],
        }
    }

    /// Order of the matrix.
    pub fn order(&self) -> usize {
        self.diag.len()
    }

    /// Compute `A @ x`.
    ///
    /// Returns `None` if `x` does not have one entry per row.
    pub fn mul_vec(&self, x: &[f64]) -> Option<Vec<f64>> {
        let n = self.order();
        if x.len() != n
            || self.upper1.len() != n.saturating_sub(1)
            || self.upper2.len() != n.saturating_sub(2)
        {
            return None;
        }
        let mut out = vec![0.0; n];
        for i in 0..n {
            let mut acc = self.diag[i] * x[i];
            if i + 1 < n {
                acc += self.upper1[i] * x[i + 1];
            }
            if i + 2 < n {
                acc += self.upper2[i] * x[i + 2];
            }
            if i >= 1 {
                acc += self.upper1[i - 1] * x[i - 1];
            }
            if i >= 2 {
                acc += self.upper2[i - 2] * x[i - 2];
            }
            out[i] = acc;
        }
        Some(out)
    }

    /// Solve `A @ x = b` via LDL' factorisation.
    ///
    /// Returns `None` if the dimensions disagree or a pivot is not strictly
    /// positive (matrix not positive definite).
    pub fn solve(&self, b: &[f64]) -> Option<Vec<f64>> {
        let n = self.order();
        if b.len() != n
            || self.upper1.len() != n.saturating_sub(1)
            || self.upper2.len() != n.saturating_sub(2)
        {
            return None;
        }
        if n == 0 {
            return Some(Vec::new());
        }

        // L has unit diagonal with sub-diagonals l1[j] = L[j+1][j], l2[j] = L[j+2][j]
        let mut d = vec![0.0; n];
        let mut l1 = vec![0.0; n.saturating_sub(1)];
        let mut l2 = vec![0.0; n.saturating_sub(2)];

        for j in 0..n {
            let mut pivot = self.diag[j];
            if j >= 1 {
                pivot -= l1[j - 1] * l1[j - 1] * d[j - 1];
            }
            if j >= 2 {
                pivot -= l2[j - 2] * l2[j - 2] * d[j - 2];
            }
            if !pivot.is_finite() || pivot <= 0.0 {
                return None;
            }
            d[j] = pivot;

            if j + 1 < n {
                let mut v = self.upper1[j];
                if j >= 1 {
                    v -= l2[j - 1] * l1[j - 1] * d[j - 1];
                }
                l1[j] = v / pivot;
            }
            if j + 2 < n {
                l2[j] = self.upper2[j] / pivot;
            }
        }

        // Forward substitution: L z = b
        let mut x = b.to_vec();
        for i in 1..n {
            x[i] -= l1[i - 1] * x[i - 1];
            if i >= 2 {
                x[i] -= l2[i - 2] * x[i - 2];
            }
        }

        // Diagonal scaling
        for i in 0..n {
            x[i] /= d[i];
        }

        // Back substitution: L' x = w
        for i in (0..n).rev() {
            if i + 1 < n {
                x[i] -= l1[i] * x[i + 1];
            }
            if i + 2 < n {
                x[i] -= l2[i] * x[i + 2];
            }
        }

        Some(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_matrix() -> SymmetricPentadiagonal {
        SymmetricPentadiagonal {
            diag: vec![6.0, 7.0, 8.0, 7.0, 6.0],
            upper1: vec![-2.0, -1.5, -1.0, -2.5],
            upper2: vec![0.5, 1.0, 0.25],
        }
    }

    #[test]
    fn solve_recovers_known_solution() {
        let a = sample_matrix();
        let x_true = vec![1.0, -2.0, 3.0, 0.5, -1.0];
        let b = a.mul_vec(&x_true).unwrap();

        let x = a.solve(&b).unwrap();
        for (got, want) in x.iter().zip(x_true.iter()) {
            assert_relative_eq!(got, want, epsilon = 1e-12);
        }
    }

    #[test]
    fn mul_vec_checks_dimensions() {
        let a = SymmetricPentadiagonal::zeros(4);
        assert!(a.mul_vec(&[1.0, 2.0]).is_none());
        assert!(a.mul_vec(&[1.0; 5]).is_none());
        assert_eq!(a.mul_vec(&[1.0; 4]), Some(vec![0.0; 4]));
    }

    #[test]
    fn solve_identity() {
        let mut a = SymmetricPentadiagonal::zeros(4);
        a.diag.iter_mut().for_each(|d| *d = 1.0);
        let b = vec![3.0, 1.0, 4.0, 1.0];
        assert_eq!(a.solve(&b).unwrap(), b);
    }

    #[test]
    fn solve_small_orders() {
        let empty = SymmetricPentadiagonal::zeros(0);
        assert_eq!(empty.solve(&[]).unwrap(), Vec::<f64>::new());

        let one = SymmetricPentadiagonal {
            diag: vec![4.0],
            upper1: vec![],
            upper2: vec![],
        };
        assert_relative_eq!(one.solve(&[2.0]).unwrap()[0], 0.5);

        let two = SymmetricPentadiagonal {
            diag: vec![2.0, 2.0],
            upper1: vec![1.0],
            upper2: vec![],
        };
        let x = two.solve(&[3.0, 3.0]).unwrap();
        assert_relative_eq!(x[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn solve_rejects_indefinite_matrix() {
        let a = SymmetricPentadiagonal {
            diag: vec![1.0, 1.0, 1.0],
            upper1: vec![2.0, 0.0],
            upper2: vec![0.0],
        };
        assert!(a.solve(&[1.0, 1.0, 1.0]).is_none());
    }

    #[test]
    fn solve_rejects_dimension_mismatch() {
        let a = sample_matrix();
        assert!(a.solve(&[1.0, 2.0]).is_none());
    }
}
