//! Dense row-major matrix.

use crate::types::LinalgError;
use num_traits::Float;
use std::ops::{Index, IndexMut};

/// Dense matrix stored in row-major order.
///
/// Element `(i, j)` lives at `data[i * ncols + j]`. Row-major is the only
/// layout the solver reads; column-major buffers are converted on entry with
/// [`Matrix::from_column_major`].
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Example
///
/// ```
/// use numerix_core::math::linalg::Matrix;
///
/// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// assert_eq!(m[(1, 0)], 3.0);
/// assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
///
/// let y = m.mul_vec(&[1.0, 1.0]).unwrap();
/// assert_eq!(y, vec![3.0, 7.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T: Float> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Float> Matrix<T> {
    /// Wraps a row-major buffer of `rows * cols` elements.
    ///
    /// # Errors
    ///
    /// `LinalgError::DimensionMismatch` if `data.len() != rows * cols`.
    pub fn new(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, LinalgError> {
        let expected = element_count(rows, cols)?;
        if data.len() != expected {
            return Err(LinalgError::dimension_mismatch(
                "matrix buffer length",
                expected,
                data.len(),
            ));
        }
        Ok(Self { rows, cols, data })
    }

    /// Copies a row-major slice of `rows * cols` elements.
    pub fn from_row_major(rows: usize, cols: usize, data: &[T]) -> Result<Self, LinalgError> {
        Self::new(rows, cols, data.to_vec())
    }

    /// Copies a column-major slice, where element `(i, j)` is `data[j * rows + i]`.
    ///
    /// # Example
    ///
    /// ```
    /// use numerix_core::math::linalg::Matrix;
    ///
    /// // Columns [1, 3] and [2, 4]
    /// let m = Matrix::from_column_major(2, 2, &[1.0, 3.0, 2.0, 4.0]).unwrap();
    /// assert_eq!(m, Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap());
    /// ```
    pub fn from_column_major(rows: usize, cols: usize, data: &[T]) -> Result<Self, LinalgError> {
        let expected = element_count(rows, cols)?;
        if data.len() != expected {
            return Err(LinalgError::dimension_mismatch(
                "matrix buffer length",
                expected,
                data.len(),
            ));
        }
        let mut out = Vec::with_capacity(expected);
        for i in 0..rows {
            for j in 0..cols {
                out.push(data[j * rows + i]);
            }
        }
        Ok(Self {
            rows,
            cols,
            data: out,
        })
    }

    /// Builds a matrix from a slice of rows.
    ///
    /// An empty slice gives a 0×0 matrix.
    ///
    /// # Errors
    ///
    /// `LinalgError::DimensionMismatch` if the rows are ragged.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, LinalgError> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(LinalgError::dimension_mismatch(
                    "row length",
                    cols,
                    row.len(),
                ));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// All-zero matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }

    /// The `n`×`n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// `true` when the matrix has as many rows as columns.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Element `(i, j)`, or `None` when out of range.
    pub fn get(&self, i: usize, j: usize) -> Option<T> {
        if i < self.rows && j < self.cols {
            Some(self.data[i * self.cols + j])
        } else {
            None
        }
    }

    /// Row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= nrows()`.
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// The row-major backing buffer.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the matrix, returning its row-major buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// The transposed matrix.
    pub fn transpose(&self) -> Self {
        let mut out = Self::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                out[(j, i)] = self[(i, j)];
            }
        }
        out
    }

    /// Matrix-vector product `self · x`.
    ///
    /// # Errors
    ///
    /// `LinalgError::DimensionMismatch` if `x.len() != ncols()`.
    pub fn mul_vec(&self, x: &[T]) -> Result<Vec<T>, LinalgError> {
        if x.len() != self.cols {
            return Err(LinalgError::dimension_mismatch(
                "vector length",
                self.cols,
                x.len(),
            ));
        }
        Ok((0..self.rows)
            .map(|i| {
                self.row(i)
                    .iter()
                    .zip(x)
                    .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
            })
            .collect())
    }
}

impl<T: Float> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(i < self.rows && j < self.cols, "matrix index out of range");
        &self.data[i * self.cols + j]
    }
}

impl<T: Float> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        assert!(i < self.rows && j < self.cols, "matrix index out of range");
        &mut self.data[i * self.cols + j]
    }
}

fn element_count(rows: usize, cols: usize) -> Result<usize, LinalgError> {
    rows.checked_mul(cols).ok_or_else(|| {
        LinalgError::dimension_mismatch("rows * cols overflows usize", rows, cols)
    })
}
