//! Gauss-Seidel iteration over the normal equations.

use log::{debug, trace, warn};
use nalgebra::DVector;

use crate::error::{MathError, MathResult};
use crate::linear_algebra::{check_square_system, LinearSolver, Matrix, Vector};

/// Default tolerance on the Euclidean norm of the change between sweeps.
pub const DEFAULT_SEIDEL_TOLERANCE: f64 = 1e-15;

/// Default maximum number of sweeps.
pub const DEFAULT_SEIDEL_MAX_ITERATIONS: usize = 100_000;

const METHOD: &str = "Gauss-Seidel";

/// Configuration for the Gauss-Seidel solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeidelConfig {
    /// Stop once `‖x_k - x_{k-1}‖ < tolerance`.
    pub tolerance: f64,
    /// Maximum number of full sweeps.
    pub max_iterations: usize,
}

impl Default for SeidelConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_SEIDEL_TOLERANCE,
            max_iterations: DEFAULT_SEIDEL_MAX_ITERATIONS,
        }
    }
}

impl SeidelConfig {
    /// Creates a new configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: usize) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum number of sweeps.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Checks that the tolerance is positive and at least one sweep is allowed.
    pub fn validate(&self) -> MathResult<()> {
        if self.tolerance <= 0.0 || !self.tolerance.is_finite() {
            return Err(MathError::precondition(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(MathError::precondition("max_iterations must be > 0"));
        }
        Ok(())
    }
}

/// Solves `A x = b` with Gauss-Seidel sweeps over `AᵀA x = Aᵀb`.
///
/// Starting from the zero vector, each sweep updates `x[i]` in place so that
/// components `0..i` already hold this sweep's values while `i+1..n` still
/// hold the previous sweep's. Sweeps stop once the Euclidean norm of the
/// change between consecutive sweeps drops below `config.tolerance`.
///
/// # Arguments
///
/// * `a` - Square coefficient matrix
/// * `b` - Right-hand side
/// * `config` - Tolerance and sweep cap
///
/// # Errors
///
/// * `SingularMatrix` if `AᵀA` has a zero on its diagonal (a zero column in `A`)
/// * `NonConvergence` if the cap is reached or an iterate stops being finite
///
/// # Example
///
/// ```rust
/// use numlab_math::linear_algebra::{seidel, Matrix, SeidelConfig, Vector};
///
/// let a = Matrix::from_rows(&[vec![2.0, 1.0], vec![1.0, 3.0]]).unwrap();
/// let b = Vector::new(vec![5.0, 5.0]);
///
/// let x = seidel(&a, &b, &SeidelConfig::default().with_tolerance(1e-12)).unwrap();
/// assert!((x[0] - 2.0).abs() < 1e-9);
/// assert!((x[1] - 1.0).abs() < 1e-9);
/// ```
pub fn seidel(a: &Matrix, b: &Vector, config: &SeidelConfig) -> MathResult<Vector> {
    config.validate()?;
    let n = check_square_system(a, b)?;

    let at = a.inner().transpose();
    let ata = &at * a.inner();
    let atb = &at * b.inner();

    if let Some(i) = (0..n).find(|&i| ata[(i, i)] == 0.0) {
        warn!("normal equations have a zero diagonal entry in row {}", i);
        return Err(MathError::SingularMatrix {
            column: i,
            pivot: 0.0,
        });
    }

    debug!(
        "Gauss-Seidel: n = {}, tolerance = {:.2e}, max sweeps = {}",
        n, config.tolerance, config.max_iterations
    );

    let mut x = DVector::zeros(n);
    let mut change = f64::INFINITY;

    for sweep in 1..=config.max_iterations {
        let previous = x.clone();

        for i in 0..n {
            let mut sum = atb[i];
            for j in 0..n {
                if j != i {
                    sum -= ata[(i, j)] * x[j];
                }
            }
            x[i] = sum / ata[(i, i)];
        }

        change = (&x - &previous).norm();
        trace!("sweep {}: change = {:.3e}", sweep, change);

        if !change.is_finite() {
            warn!("Gauss-Seidel diverged at sweep {}", sweep);
            return Err(MathError::non_convergence(METHOD, sweep, change));
        }
        if change < config.tolerance {
            debug!("Gauss-Seidel converged after {} sweeps", sweep);
            return Ok(Vector::from_inner(x));
        }
    }

    warn!(
        "Gauss-Seidel stopped after {} sweeps (change {:.3e})",
        config.max_iterations, change
    );
    Err(MathError::non_convergence(
        METHOD,
        config.max_iterations,
        change,
    ))
}

/// Iterative solver backed by [`seidel`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SeidelSolver {
    config: SeidelConfig,
}

impl SeidelSolver {
    /// Creates a solver with the given configuration.
    #[must_use]
    pub fn new(config: SeidelConfig) -> Self {
        Self { config }
    }
}

impl LinearSolver for SeidelSolver {
    fn solve(&self, a: &Matrix, b: &Vector) -> MathResult<Vector> {
        seidel(a, b, &self.config)
    }

    fn name(&self) -> &'static str {
        METHOD
    }
}
