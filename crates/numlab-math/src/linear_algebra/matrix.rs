//! Dense real matrix.

use std::ops::Index;

use nalgebra::DMatrix;

use crate::error::{MathError, MathResult};
use crate::linear_algebra::Vector;

/// A dense `rows x cols` matrix of real entries.
///
/// Construction is row-major; storage is whatever `nalgebra` uses
/// internally. Once built, a `Matrix` is only read by the solvers.
///
/// # Example
///
/// ```rust
/// use numlab_math::linear_algebra::{Matrix, Vector};
///
/// let a = Matrix::from_rows(&[vec![2.0, 1.0], vec![1.0, 3.0]]).unwrap();
/// let x = Vector::new(vec![2.0, 1.0]);
///
/// let b = a.mul_vector(&x).unwrap();
/// assert_eq!(b.to_vec(), vec![5.0, 5.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix(DMatrix<f64>);

impl Matrix {
    /// Builds a matrix from a list of rows.
    ///
    /// # Errors
    ///
    /// Returns `PreconditionViolation` if the rows have different lengths.
    pub fn from_rows(rows: &[Vec<f64>]) -> MathResult<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);

        if let Some(bad) = rows.iter().position(|row| row.len() != ncols) {
            return Err(MathError::precondition(format!(
                "row {} has {} entries, expected {}",
                bad,
                rows[bad].len(),
                ncols
            )));
        }

        Ok(Self(DMatrix::from_row_iterator(
            nrows,
            ncols,
            rows.iter().flat_map(|row| row.iter().copied()),
        )))
    }

    /// Builds a matrix from `nrows * ncols` entries given in row-major order.
    pub fn from_row_slice(nrows: usize, ncols: usize, data: &[f64]) -> MathResult<Self> {
        let entries = nrows.checked_mul(ncols).ok_or_else(|| {
            MathError::precondition(format!("{}x{} matrix is too large", nrows, ncols))
        })?;
        if data.len() != entries {
            return Err(MathError::precondition(format!(
                "{}x{} matrix needs {} entries, got {}",
                nrows,
                ncols,
                entries,
                data.len()
            )));
        }
        Ok(Self(DMatrix::from_row_slice(nrows, ncols, data)))
    }

    /// The `n x n` identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        Self(DMatrix::identity(n, n))
    }

    /// Number of rows.
    #[must_use]
    pub fn nrows(&self) -> usize {
        self.0.nrows()
    }

    /// Number of columns.
    #[must_use]
    pub fn ncols(&self) -> usize {
        self.0.ncols()
    }

    /// Returns true for square matrices.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.0.is_square()
    }

    /// Entry `(i, j)`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.0.get((i, j)).copied()
    }

    /// Copies row `i` into a `Vec`.
    #[must_use]
    pub fn row(&self, i: usize) -> Vec<f64> {
        self.0.row(i).iter().copied().collect()
    }

    /// Largest entry magnitude, `0.0` for an empty matrix.
    #[must_use]
    pub fn max_abs(&self) -> f64 {
        self.0.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()))
    }

    /// The transpose.
    #[must_use]
    pub fn transpose(&self) -> Matrix {
        Self(self.0.transpose())
    }

    /// Matrix-vector product `self * x`.
    pub fn mul_vector(&self, x: &Vector) -> MathResult<Vector> {
        if self.ncols() != x.len() {
            return Err(MathError::vector_mismatch(self.nrows(), self.ncols(), x.len()));
        }
        Ok(Vector::from_inner(&self.0 * x.inner()))
    }

    /// Matrix product `self * other`.
    pub fn mul_matrix(&self, other: &Matrix) -> MathResult<Matrix> {
        if self.ncols() != other.nrows() {
            return Err(MathError::DimensionMismatch {
                rows1: self.nrows(),
                cols1: self.ncols(),
                rows2: other.nrows(),
                cols2: other.ncols(),
            });
        }
        Ok(Self(&self.0 * &other.0))
    }

    pub(crate) fn inner(&self) -> &DMatrix<f64> {
        &self.0
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &f64 {
        &self.0[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_rows_is_row_major() {
        let m = Matrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();

        assert_eq!(m.nrows(), 2);
        assert_eq!(m.ncols(), 3);
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m[(1, 0)], 4.0);
        assert_eq!(m.row(1), vec![4.0, 5.0, 6.0]);
        assert!(!m.is_square());
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(err.is_precondition_violation());
    }

    #[test]
    fn test_row_slice_length_checked() {
        assert!(Matrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0]).is_err());

        let m = Matrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(m.get(0, 1), Some(2.0));
        assert_eq!(m.get(2, 0), None);
    }

    #[test]
    fn test_row_slice_size_overflow() {
        let err = Matrix::from_row_slice(usize::MAX, 2, &[]).unwrap_err();
        assert!(matches!(err, MathError::PreconditionViolation { .. }));
    }

    #[test]
    fn test_transpose_and_products() {
        let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let at = a.transpose();
        assert_eq!(at[(0, 1)], 3.0);

        let ata = at.mul_matrix(&a).unwrap();
        assert_relative_eq!(ata[(0, 0)], 10.0);
        assert_relative_eq!(ata[(0, 1)], 14.0);
        assert_relative_eq!(ata[(1, 1)], 20.0);

        let i = Matrix::identity(2);
        assert_eq!(a.mul_matrix(&i).unwrap(), a);
    }

    #[test]
    fn test_mul_vector_dimension_mismatch() {
        let a = Matrix::identity(3);
        let err = a.mul_vector(&Vector::zeros(2)).unwrap_err();
        assert!(matches!(err, MathError::DimensionMismatch { rows2: 2, .. }));
    }

    #[test]
    fn test_max_abs() {
        let a = Matrix::from_rows(&[vec![1.0, -7.5], vec![3.0, 4.0]]).unwrap();
        assert_eq!(a.max_abs(), 7.5);
        assert_eq!(Matrix::from_rows(&[]).unwrap().max_abs(), 0.0);
    }
}
