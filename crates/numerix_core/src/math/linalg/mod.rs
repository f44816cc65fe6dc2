//! Dense linear-system solving.
//!
//! Solves `A · x = b` for square `A` by LU decomposition with partial
//! pivoting followed by forward and back substitution.
//!
//! ## Available Types
//!
//! - [`Matrix`]: Dense row-major matrix
//! - [`LuDecomposition`]: Reusable `P·A = L·U` factorisation
//! - [`LuConfig`]: Singularity tolerance
//!
//! ## Layout Convention
//!
//! Every matrix is row-major. Callers holding column-major data convert it
//! with [`Matrix::from_column_major`] before solving.
//!
//! ## Failure Modes
//!
//! - `LinalgError::DimensionMismatch`: non-square matrix or rhs of the wrong length
//! - `LinalgError::SingularMatrix`: a zero pivot; no partial solution is returned
//! - `LinalgError::NonFiniteEntry`: a NaN or infinite matrix entry
//!
//! ## Example
//!
//! ```
//! use numerix_core::math::linalg::{solve, Matrix};
//!
//! let a = Matrix::<f64>::from_rows(&[[3.0, 2.0], [1.0, 2.0]]).unwrap();
//! let x = solve(&a, &[5.0, 3.0]).unwrap();
//!
//! assert!((x[0] - 1.0).abs() < 1e-12);
//! assert!((x[1] - 1.0).abs() < 1e-12);
//! ```

mod config;
mod lu;
mod matrix;

// Re-export public types at module level
pub use config::LuConfig;
pub use lu::LuDecomposition;
pub use matrix::Matrix;

use crate::types::LinalgError;
use num_traits::Float;

/// Solves `matrix · x = rhs`, returning a newly allocated `x`.
///
/// Single-shot form of [`LuDecomposition::new`] followed by
/// [`LuDecomposition::solve`]; all scratch state is dropped before returning.
///
/// # Errors
///
/// * `LinalgError::DimensionMismatch` - `matrix` is not square, or
///   `rhs.len()` differs from its dimension
/// * `LinalgError::SingularMatrix` - a selected pivot is zero
pub fn solve<T: Float>(matrix: &Matrix<T>, rhs: &[T]) -> Result<Vec<T>, LinalgError> {
    if matrix.is_square() && rhs.len() != matrix.nrows() {
        return Err(LinalgError::dimension_mismatch(
            "rhs length",
            matrix.nrows(),
            rhs.len(),
        ));
    }
    LuDecomposition::new(matrix)?.solve(rhs)
}

/// Solves an `n`×`n` system given as a flat row-major buffer.
///
/// # Errors
///
/// * `LinalgError::DimensionMismatch` - `data.len() != n * n` or `rhs.len() != n`
/// * `LinalgError::SingularMatrix` - a selected pivot is zero
///
/// # Example
///
/// ```
/// use numerix_core::math::linalg::solve_row_major;
///
/// let x = solve_row_major(&[2.0, 0.0, 0.0, 4.0], 2, &[2.0, 2.0]).unwrap();
/// assert_eq!(x, vec![1.0, 0.5]);
/// ```
pub fn solve_row_major<T: Float>(data: &[T], n: usize, rhs: &[T]) -> Result<Vec<T>, LinalgError> {
    let matrix = Matrix::from_row_major(n, n, data)?;
    solve(&matrix, rhs)
}
