//! Gaussian elimination with partial pivoting.

use log::{debug, trace, warn};
use nalgebra::{DMatrix, DVector};

use crate::error::{MathError, MathResult};
use crate::linear_algebra::{check_square_system, LinearSolver, Matrix, Vector};

/// Default relative pivot tolerance.
pub const DEFAULT_PIVOT_TOLERANCE: f64 = 1e-12;

/// Configuration for Gaussian elimination.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaussConfig {
    /// A pivot with `|pivot| <= pivot_tolerance * max_j |a_rj|`, where `r` is
    /// the pivot's row in the original matrix, is treated as zero.
    pub pivot_tolerance: f64,
}

impl Default for GaussConfig {
    fn default() -> Self {
        Self {
            pivot_tolerance: DEFAULT_PIVOT_TOLERANCE,
        }
    }
}

impl GaussConfig {
    /// Creates a new configuration.
    #[must_use]
    pub fn new(pivot_tolerance: f64) -> Self {
        Self { pivot_tolerance }
    }

    /// Sets the relative pivot tolerance.
    #[must_use]
    pub fn with_pivot_tolerance(mut self, pivot_tolerance: f64) -> Self {
        self.pivot_tolerance = pivot_tolerance;
        self
    }

    /// Checks that the tolerance is finite and non-negative.
    pub fn validate(&self) -> MathResult<()> {
        if !self.pivot_tolerance.is_finite() || self.pivot_tolerance < 0.0 {
            return Err(MathError::precondition(format!(
                "pivot tolerance must be finite and non-negative, got {}",
                self.pivot_tolerance
            )));
        }
        Ok(())
    }
}

/// Solves `A x = b` by Gaussian elimination with partial pivoting.
///
/// The augmented matrix `[A|b]` is built as a private working copy. For each
/// column the row with the largest magnitude entry at or below the diagonal
/// is swapped into pivot position (the first such row wins ties), entries
/// below the pivot are eliminated, and back-substitution recovers `x`.
/// Each pivot is judged against the largest entry of its own original row,
/// so rows on very different scales do not make each other look singular.
///
/// # Arguments
///
/// * `a` - Square coefficient matrix
/// * `b` - Right-hand side, same length as `a` has rows
/// * `config` - Pivot tolerance
///
/// # Errors
///
/// * `SingularMatrix` when the selected pivot is zero or below tolerance
/// * `DimensionMismatch` / `PreconditionViolation` for malformed input
///
/// # Example
///
/// ```rust
/// use numlab_math::linear_algebra::{gaussian_elimination, GaussConfig, Matrix, Vector};
///
/// // The first pivot is zero without row exchanges
/// let a = Matrix::from_rows(&[vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
/// let b = Vector::new(vec![2.0, 3.0]);
///
/// let x = gaussian_elimination(&a, &b, &GaussConfig::default()).unwrap();
/// assert_eq!(x.to_vec(), vec![3.0, 2.0]);
/// ```
pub fn gaussian_elimination(a: &Matrix, b: &Vector, config: &GaussConfig) -> MathResult<Vector> {
    config.validate()?;
    let n = check_square_system(a, b)?;
    // Row scales travel with their rows through the exchanges
    let mut scales: Vec<f64> = (0..n)
        .map(|r| (0..n).fold(0.0_f64, |acc, c| acc.max(a[(r, c)].abs())))
        .collect();

    debug!(
        "Gaussian elimination: n = {}, relative pivot tolerance = {:.2e}",
        n, config.pivot_tolerance
    );

    let mut augmented = DMatrix::from_fn(n, n + 1, |r, c| if c < n { a[(r, c)] } else { b[r] });

    // Forward elimination
    for i in 0..n {
        let pivot_row = (i + 1..n).fold(i, |best, k| {
            if augmented[(k, i)].abs() > augmented[(best, i)].abs() {
                k
            } else {
                best
            }
        });
        if pivot_row != i {
            trace!("column {}: swapping rows {} and {}", i, i, pivot_row);
            augmented.swap_rows(i, pivot_row);
            scales.swap(i, pivot_row);
        }

        let pivot = augmented[(i, i)];
        if pivot.abs() <= config.pivot_tolerance * scales[i] {
            warn!("column {}: pivot {:.2e} is below threshold, matrix is singular", i, pivot);
            return Err(MathError::SingularMatrix { column: i, pivot });
        }

        for j in i + 1..n {
            let factor = augmented[(j, i)] / pivot;
            if factor == 0.0 {
                continue;
            }
            for k in i..=n {
                augmented[(j, k)] -= factor * augmented[(i, k)];
            }
        }
    }

    // Back substitution
    let mut x = DVector::zeros(n);
    for i in (0..n).rev() {
        let mut sum = augmented[(i, n)];
        for j in i + 1..n {
            sum -= augmented[(i, j)] * x[j];
        }
        x[i] = sum / augmented[(i, i)];
    }

    Ok(Vector::from_inner(x))
}

/// Direct solver backed by [`gaussian_elimination`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GaussSolver {
    config: GaussConfig,
}

impl GaussSolver {
    /// Creates a solver with the given configuration.
    #[must_use]
    pub fn new(config: GaussConfig) -> Self {
        Self { config }
    }
}

impl LinearSolver for GaussSolver {
    fn solve(&self, a: &Matrix, b: &Vector) -> MathResult<Vector> {
        gaussian_elimination(a, b, &self.config)
    }

    fn name(&self) -> &'static str {
        "Gaussian elimination"
    }
}
