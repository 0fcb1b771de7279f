//! Dense real vector.

use std::ops::{Index, Mul};

use nalgebra::DVector;

use crate::error::{MathError, MathResult};

/// An ordered sequence of `n` real numbers.
///
/// Solvers never alias a caller's vector: they take `&Vector` and work on
/// private copies.
///
/// # Example
///
/// ```rust
/// use numlab_math::linear_algebra::Vector;
///
/// let v = Vector::new(vec![3.0, 4.0]);
/// assert_eq!(v.len(), 2);
/// assert!((v.norm() - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vector(DVector<f64>);

impl Vector {
    /// Creates a vector that takes ownership of `values`.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self(DVector::from_vec(values))
    }

    /// Creates a vector by copying `values`.
    #[must_use]
    pub fn from_slice(values: &[f64]) -> Self {
        Self(DVector::from_column_slice(values))
    }

    /// Creates the zero vector of length `n`.
    #[must_use]
    pub fn zeros(n: usize) -> Self {
        Self(DVector::zeros(n))
    }

    /// Number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the vector has no components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Component `i`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<f64> {
        self.0.get(i).copied()
    }

    /// The components as a contiguous slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        self.0.as_slice()
    }

    /// Copies the components into a `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        self.0.as_slice().to_vec()
    }

    /// Iterates over the components in order.
    pub fn iter(&self) -> impl Iterator<Item = &f64> + '_ {
        self.0.iter()
    }

    /// Returns true if every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }

    /// Euclidean norm.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.0.norm()
    }

    /// Dot product with a vector of the same length.
    pub fn dot(&self, other: &Vector) -> MathResult<f64> {
        self.ensure_same_len(other)?;
        Ok(self.0.dot(&other.0))
    }

    /// Component-wise sum.
    pub fn checked_add(&self, other: &Vector) -> MathResult<Vector> {
        self.ensure_same_len(other)?;
        Ok(Self(&self.0 + &other.0))
    }

    /// Component-wise difference `self - other`.
    pub fn checked_sub(&self, other: &Vector) -> MathResult<Vector> {
        self.ensure_same_len(other)?;
        Ok(Self(&self.0 - &other.0))
    }

    /// Euclidean distance `‖self - other‖`.
    pub fn distance(&self, other: &Vector) -> MathResult<f64> {
        Ok(self.checked_sub(other)?.norm())
    }

    pub(crate) fn from_inner(inner: DVector<f64>) -> Self {
        Self(inner)
    }

    pub(crate) fn inner(&self) -> &DVector<f64> {
        &self.0
    }

    fn ensure_same_len(&self, other: &Vector) -> MathResult<()> {
        if self.len() != other.len() {
            return Err(MathError::DimensionMismatch {
                rows1: self.len(),
                cols1: 1,
                rows2: other.len(),
                cols2: 1,
            });
        }
        Ok(())
    }
}

impl From<Vec<f64>> for Vector {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, k: f64) -> Vector {
        Vector(&self.0 * k)
    }
}
