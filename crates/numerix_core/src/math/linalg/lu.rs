//! LU decomposition with partial pivoting.

use super::config::LuConfig;
use super::matrix::Matrix;
use crate::types::LinalgError;
use num_traits::Float;
use tracing::{debug, trace};

/// LU factorisation `P·A = L·U` of a square matrix.
///
/// `L` is unit lower triangular and `U` upper triangular; both are packed in
/// one row-major buffer (the unit diagonal of `L` is implicit). The row
/// permutation `P` is stored as `permutation()[i]`, the index of the original
/// row that ended up in position `i`.
///
/// Pivoting picks the largest absolute value in the current column among the
/// remaining rows; on ties the lowest-indexed row wins.
///
/// Every matrix entry must be finite; NaN or infinite entries are rejected
/// before elimination starts. The right-hand side is not checked, so a
/// non-finite `rhs` value propagates into the solution.
///
/// The factorisation owns a copy of the input; the caller's matrix is never
/// modified. Once built it can solve any number of right-hand sides.
///
/// # Example
///
/// ```
/// use numerix_core::math::linalg::{LuDecomposition, Matrix};
///
/// let a = Matrix::<f64>::from_rows(&[[0.0, 2.0], [3.0, 1.0]]).unwrap();
/// let lu = LuDecomposition::new(&a).unwrap();
///
/// // Row 1 was swapped to the top
/// assert_eq!(lu.permutation(), &[1, 0]);
/// assert_eq!(lu.sign(), -1);
/// assert!((lu.determinant() - (-6.0)).abs() < 1e-12);
///
/// let x = lu.solve(&[4.0, 5.0]).unwrap();
/// assert!((x[0] - 1.0).abs() < 1e-12);
/// assert!((x[1] - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LuDecomposition<T: Float> {
    n: usize,
    lu: Vec<T>,
    perm: Vec<usize>,
    sign: i32,
}

impl<T: Float> LuDecomposition<T> {
    /// Factorises `matrix` with the default (exact-zero) singularity check.
    ///
    /// # Errors
    ///
    /// * `LinalgError::DimensionMismatch` - `matrix` is not square
    /// * `LinalgError::NonFiniteEntry` - `matrix` holds a NaN or infinite value
    /// * `LinalgError::SingularMatrix` - a selected pivot is zero
    pub fn new(matrix: &Matrix<T>) -> Result<Self, LinalgError> {
        Self::with_config(matrix, LuConfig::default())
    }

    /// Factorises `matrix`, treating pivots with
    /// `|pivot| <= config.singular_tolerance` as zero.
    ///
    /// # Errors
    ///
    /// Same as [`LuDecomposition::new`].
    pub fn with_config(matrix: &Matrix<T>, config: LuConfig<T>) -> Result<Self, LinalgError> {
        if !matrix.is_square() {
            return Err(LinalgError::dimension_mismatch(
                "matrix must be square",
                matrix.nrows(),
                matrix.ncols(),
            ));
        }

        let n = matrix.nrows();
        if let Some(pos) = matrix.as_slice().iter().position(|v| !v.is_finite()) {
            let (row, column) = (pos / n, pos % n);
            debug!(row, column, "non-finite matrix entry");
            return Err(LinalgError::NonFiniteEntry { row, column });
        }
        trace!(dim = n, "LU factorisation");

        let mut lu = matrix.as_slice().to_vec();
        let mut perm: Vec<usize> = (0..n).collect();
        let mut sign = 1;

        for k in 0..n {
            // Strict comparison keeps the lowest index on ties.
            let mut pivot_row = k;
            let mut pivot_abs = lu[k * n + k].abs();
            for i in (k + 1)..n {
                let candidate = lu[i * n + k].abs();
                if candidate > pivot_abs {
                    pivot_abs = candidate;
                    pivot_row = i;
                }
            }

            if pivot_abs <= config.singular_tolerance {
                debug!(
                    column = k,
                    pivot = pivot_abs.to_f64().unwrap_or(f64::NAN),
                    "singular matrix"
                );
                return Err(LinalgError::SingularMatrix { column: k });
            }

            if pivot_row != k {
                for j in 0..n {
                    lu.swap(k * n + j, pivot_row * n + j);
                }
                perm.swap(k, pivot_row);
                sign = -sign;
            }

            let pivot = lu[k * n + k];
            for i in (k + 1)..n {
                let factor = lu[i * n + k] / pivot;
                lu[i * n + k] = factor;
                if factor == T::zero() {
                    continue;
                }
                for j in (k + 1)..n {
                    lu[i * n + j] = lu[i * n + j] - factor * lu[k * n + j];
                }
            }
        }

        Ok(Self { n, lu, perm, sign })
    }

    /// Dimension `N` of the factorised `N`×`N` matrix.
    #[inline]
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Row permutation: entry `i` is the original row now at position `i`.
    #[inline]
    pub fn permutation(&self) -> &[usize] {
        &self.perm
    }

    /// Sign of the permutation: `1` for an even number of row swaps, `-1` for odd.
    #[inline]
    pub fn sign(&self) -> i32 {
        self.sign
    }

    /// Determinant of the original matrix.
    ///
    /// The empty (0×0) matrix has determinant 1.
    pub fn determinant(&self) -> T {
        let diag = (0..self.n).fold(T::one(), |acc, i| acc * self.lu[i * self.n + i]);
        if self.sign < 0 {
            -diag
        } else {
            diag
        }
    }

    /// The unit lower-triangular factor `L`.
    pub fn lower(&self) -> Matrix<T> {
        let n = self.n;
        let mut l = Matrix::identity(n);
        for i in 0..n {
            for j in 0..i {
                l[(i, j)] = self.lu[i * n + j];
            }
        }
        l
    }

    /// The upper-triangular factor `U`.
    pub fn upper(&self) -> Matrix<T> {
        let n = self.n;
        let mut u = Matrix::zeros(n, n);
        for i in 0..n {
            for j in i..n {
                u[(i, j)] = self.lu[i * n + j];
            }
        }
        u
    }

    /// Solves `A · x = rhs` for the factorised `A`.
    ///
    /// Applies the row permutation to `rhs`, forward-substitutes through `L`
    /// and back-substitutes through `U`. The returned vector is newly
    /// allocated.
    ///
    /// # Errors
    ///
    /// `LinalgError::DimensionMismatch` if `rhs.len() != dim()`.
    pub fn solve(&self, rhs: &[T]) -> Result<Vec<T>, LinalgError> {
        let n = self.n;
        if rhs.len() != n {
            return Err(LinalgError::dimension_mismatch("rhs length", n, rhs.len()));
        }

        let mut x: Vec<T> = self.perm.iter().map(|&p| rhs[p]).collect();

        // L y = P b
        for i in 0..n {
            let mut sum = x[i];
            for j in 0..i {
                sum = sum - self.lu[i * n + j] * x[j];
            }
            x[i] = sum;
        }

        // U x = y
        for i in (0..n).rev() {
            let mut sum = x[i];
            for j in (i + 1)..n {
                sum = sum - self.lu[i * n + j] * x[j];
            }
            x[i] = sum / self.lu[i * n + i];
        }

        Ok(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_matrix() -> Matrix<f64> {
        Matrix::from_rows(&[
            [0.18, 0.60, 0.57, 0.96],
            [0.41, 0.24, 0.99, 0.58],
            [0.14, 0.30, 0.97, 0.66],
            [0.51, 0.13, 0.19, 0.85],
        ])
        .unwrap()
    }

    /// Rebuilds P·A from the permutation and compares it with L·U.
    fn assert_factorisation(a: &Matrix<f64>, lu: &LuDecomposition<f64>) {
        let n = lu.dim();
        let l = lu.lower();
        let u = lu.upper();
        for i in 0..n {
            for j in 0..n {
                let product: f64 = (0..n).map(|k| l[(i, k)] * u[(k, j)]).sum();
                assert_relative_eq!(product, a[(lu.permutation()[i], j)], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_factorisation_reconstructs_matrix() {
        let a = reference_matrix();
        let lu = LuDecomposition::new(&a).unwrap();
        assert_factorisation(&a, &lu);
    }

    #[test]
    fn test_reference_pivot_order() {
        // Column 0 max is 0.51 (row 3)
        let lu = LuDecomposition::new(&reference_matrix()).unwrap();
        assert_eq!(lu.permutation()[0], 3);
    }

    #[test]
    fn test_factors_are_triangular() {
        let lu = LuDecomposition::new(&reference_matrix()).unwrap();
        let l = lu.lower();
        let u = lu.upper();
        for i in 0..4 {
            assert_eq!(l[(i, i)], 1.0);
            for j in (i + 1)..4 {
                assert_eq!(l[(i, j)], 0.0);
                assert_eq!(u[(j, i)], 0.0);
            }
        }
    }

    #[test]
    fn test_multipliers_bounded_by_one() {
        let lu = LuDecomposition::new(&reference_matrix()).unwrap();
        let l = lu.lower();
        for i in 0..4 {
            for j in 0..i {
                assert!(l[(i, j)].abs() <= 1.0);
            }
        }
    }

    #[test]
    fn test_tie_break_prefers_lowest_row() {
        // Rows 1 and 2 share the maximal |value| in column 0.
        let a = Matrix::from_rows(&[[1.0, 1.0, 0.0], [-3.0, 2.0, 1.0], [3.0, 0.0, 1.0]]).unwrap();
        let lu = LuDecomposition::new(&a).unwrap();
        assert_eq!(lu.permutation()[0], 1);
        assert_factorisation(&a, &lu);
    }

    #[test]
    fn test_no_swap_when_diagonal_dominates() {
        let a = Matrix::from_rows(&[[4.0, 1.0], [1.0, 3.0]]).unwrap();
        let lu = LuDecomposition::new(&a).unwrap();
        assert_eq!(lu.permutation(), &[0, 1]);
        assert_eq!(lu.sign(), 1);
    }

    #[test]
    fn test_determinant_sign() {
        let a = Matrix::from_rows(&[[0.0, 1.0], [1.0, 0.0]]).unwrap();
        let lu = LuDecomposition::new(&a).unwrap();
        assert_eq!(lu.sign(), -1);
        assert_relative_eq!(lu.determinant(), -1.0);

        let b = Matrix::from_rows(&[[2.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 4.0]]).unwrap();
        assert_relative_eq!(LuDecomposition::new(&b).unwrap().determinant(), 24.0);
    }

    #[test]
    fn test_determinant_matches_cofactor_expansion() {
        let a = Matrix::from_rows(&[[2.0, -1.0, 0.0], [1.0, 3.0, 2.0], [0.0, 5.0, -4.0]]).unwrap();
        // 2(3*-4 - 2*5) - (-1)(1*-4 - 0) + 0 = -44 - 4 = -48
        let det = LuDecomposition::new(&a).unwrap().determinant();
        assert_relative_eq!(det, -48.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_column_is_singular() {
        let a = Matrix::from_rows(&[[1.0, 0.0, 2.0], [3.0, 0.0, 4.0], [5.0, 0.0, 6.0]]).unwrap();
        let err = LuDecomposition::new(&a).unwrap_err();
        assert_eq!(err, LinalgError::SingularMatrix { column: 1 });
    }

    #[test]
    fn test_zero_row_is_singular() {
        let a = Matrix::from_rows(&[[1.0, 2.0], [0.0, 0.0]]).unwrap();
        assert!(matches!(
            LuDecomposition::new(&a),
            Err(LinalgError::SingularMatrix { .. })
        ));
    }

    #[test]
    fn test_non_finite_entries_rejected() {
        // NaN in the pivot position and NaN below it give the same error.
        let a = Matrix::from_rows(&[[f64::NAN, 1.0], [1.0, 1.0]]).unwrap();
        assert_eq!(
            LuDecomposition::new(&a).unwrap_err(),
            LinalgError::NonFiniteEntry { row: 0, column: 0 }
        );

        let b = Matrix::from_rows(&[[0.0, 1.0], [f64::NAN, 1.0]]).unwrap();
        assert_eq!(
            LuDecomposition::new(&b).unwrap_err(),
            LinalgError::NonFiniteEntry { row: 1, column: 0 }
        );

        let c = Matrix::from_rows(&[
            [1.0, 2.0, 3.0],
            [4.0, 5.0, f64::NEG_INFINITY],
            [7.0, 8.0, 10.0],
        ])
        .unwrap();
        assert_eq!(
            LuDecomposition::new(&c).unwrap_err(),
            LinalgError::NonFiniteEntry { row: 1, column: 2 }
        );
    }

    #[test]
    fn test_non_finite_check_ignores_tolerance() {
        let a = Matrix::from_rows(&[[f64::INFINITY, 0.0], [0.0, 1.0]]).unwrap();
        assert!(matches!(
            LuDecomposition::with_config(&a, LuConfig::strict()),
            Err(LinalgError::NonFiniteEntry { row: 0, column: 0 })
        ));
    }

    #[test]
    fn test_non_square_rejected() {
        let a: Matrix<f64> = Matrix::zeros(2, 3);
        let err = LuDecomposition::new(&a).unwrap_err();
        assert_eq!(err, LinalgError::dimension_mismatch("matrix must be square", 2, 3));
    }

    #[test]
    fn test_tolerance_rejects_tiny_pivot() {
        let a = Matrix::from_rows(&[[1.0, 1.0], [1.0, 1.0 + 1e-17]]).unwrap();
        // 1 + 1e-17 rounds to 1: exactly singular in f64.
        assert!(LuDecomposition::new(&a).is_err());

        let b = Matrix::from_rows(&[[1.0, 1.0], [1.0, 1.0 + 1e-12]]).unwrap();
        assert!(LuDecomposition::new(&b).is_ok());
        let strict = LuConfig::new(1e-10);
        assert_eq!(
            LuDecomposition::with_config(&b, strict).unwrap_err(),
            LinalgError::SingularMatrix { column: 1 }
        );
    }

    #[test]
    fn test_solve_reuses_factorisation() {
        let a = reference_matrix();
        let lu = LuDecomposition::new(&a).unwrap();
        for rhs in [[1.0, 2.0, 3.0, 4.0], [0.0, 0.0, 0.0, 1.0], [-1.0, 0.5, 2.0, 0.0]] {
            let x = lu.solve(&rhs).unwrap();
            let back = a.mul_vec(&x).unwrap();
            for (got, want) in back.iter().zip(rhs.iter()) {
                assert_relative_eq!(*got, *want, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_solve_rejects_wrong_rhs_length() {
        let lu = LuDecomposition::new(&reference_matrix()).unwrap();
        let err = lu.solve(&[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err, LinalgError::dimension_mismatch("rhs length", 4, 3));
    }

    #[test]
    fn test_input_matrix_untouched() {
        let a = reference_matrix();
        let before = a.clone();
        let _ = LuDecomposition::new(&a).unwrap();
        assert_eq!(a, before);
    }

    #[test]
    fn test_empty_system() {
        let a: Matrix<f64> = Matrix::zeros(0, 0);
        let lu = LuDecomposition::new(&a).unwrap();
        assert_eq!(lu.dim(), 0);
        assert_eq!(lu.determinant(), 1.0);
        assert!(lu.solve(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_f32_solve() {
        let a = Matrix::from_rows(&[[2.0f32, 1.0], [1.0, 3.0]]).unwrap();
        let x = LuDecomposition::new(&a).unwrap().solve(&[3.0, 5.0]).unwrap();
        assert_relative_eq!(x[0], 0.8, epsilon = 1e-6);
        assert_relative_eq!(x[1], 1.4, epsilon = 1e-6);
    }
}
