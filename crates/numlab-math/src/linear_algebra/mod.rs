//! Dense linear algebra.
//!
//! This module provides the vector and matrix value types and two
//! solvers for square systems `A x = b`:
//!
//! - [`gaussian_elimination`]: direct elimination with partial pivoting
//! - [`seidel`]: Gauss-Seidel sweeps over the normal equations `AᵀA x = Aᵀb`
//!
//! # Choosing a Solver
//!
//! | Solver | Cost | Fails with |
//! |--------|------|------------|
//! | Gaussian elimination | O(n³), exact up to rounding | `SingularMatrix` |
//! | Gauss-Seidel (normal equations) | O(n²) per sweep | `NonConvergence`, `SingularMatrix` |
//!
//! Forming `AᵀA` squares the condition number, so the iterative solver is
//! slower and less accurate on poorly conditioned systems. In exchange the
//! iteration matrix is symmetric positive semidefinite, which is what
//! Gauss-Seidel needs to converge.
//!
//! # Example
//!
//! ```rust
//! use numlab_math::linear_algebra::{gaussian_elimination, GaussConfig, Matrix, Vector};
//!
//! let a = Matrix::from_rows(&[vec![2.0, 1.0], vec![1.0, 3.0]]).unwrap();
//! let b = Vector::new(vec![5.0, 5.0]);
//!
//! let x = gaussian_elimination(&a, &b, &GaussConfig::default()).unwrap();
//! assert!((x[0] - 2.0).abs() < 1e-12);
//! assert!((x[1] - 1.0).abs() < 1e-12);
//! ```

mod gauss;
mod matrix;
mod seidel;
mod vector;

pub use gauss::{gaussian_elimination, GaussConfig, GaussSolver, DEFAULT_PIVOT_TOLERANCE};
pub use matrix::Matrix;
pub use seidel::{
    seidel, SeidelConfig, SeidelSolver, DEFAULT_SEIDEL_MAX_ITERATIONS, DEFAULT_SEIDEL_TOLERANCE,
};
pub use vector::Vector;

use crate::error::{MathError, MathResult};

/// Common interface of the linear-system solvers.
///
/// # Example
///
/// ```rust
/// use numlab_math::linear_algebra::{
///     GaussSolver, LinearSolver, Matrix, SeidelConfig, SeidelSolver, Vector,
/// };
///
/// let a = Matrix::from_rows(&[vec![4.0, 1.0], vec![2.0, 3.0]]).unwrap();
/// let b = Vector::new(vec![1.0, 2.0]);
///
/// let gauss = GaussSolver::default();
/// let seidel = SeidelSolver::new(SeidelConfig::default().with_tolerance(1e-12));
///
/// let solvers: [&dyn LinearSolver; 2] = [&gauss, &seidel];
/// for solver in solvers {
///     let x = solver.solve(&a, &b).unwrap();
///     assert!((x[0] - 0.1).abs() < 1e-9, "{}", solver.name());
/// }
/// ```
pub trait LinearSolver {
    /// Solves `A x = b` for a square `A`.
    fn solve(&self, a: &Matrix, b: &Vector) -> MathResult<Vector>;

    /// Returns the name of the solver.
    fn name(&self) -> &'static str;
}

/// Checks that `a` is square, finite, and matches `b`; returns `n`.
fn check_square_system(a: &Matrix, b: &Vector) -> MathResult<usize> {
    let n = a.nrows();
    if !a.is_square() {
        return Err(MathError::precondition(format!(
            "coefficient matrix must be square, got {}x{}",
            a.nrows(),
            a.ncols()
        )));
    }
    if b.len() != n {
        return Err(MathError::vector_mismatch(n, n, b.len()));
    }
    if !b.is_finite() || a.inner().iter().any(|v| !v.is_finite()) {
        return Err(MathError::precondition("system contains non-finite entries"));
    }
    Ok(n)
}
