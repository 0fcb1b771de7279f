//! Error measures for computed solutions.
//!
//! Linear systems are judged against a known reference solution or by their
//! residual. Roots get the a-posteriori bound
//!
//! ```text
//! |x* - root| <= |f(root)| / m,    m = min |f'| on [a, b]
//! ```
//!
//! where `m` comes from a uniform grid search. The grid can miss the true
//! minimum, so the bound is a diagnostic rather than a certified one.

use log::debug;

use crate::error::{MathError, MathResult};
use crate::function::ScalarFunction;
use crate::linear_algebra::{Matrix, Vector};

/// Euclidean distance between a computed solution and a reference.
///
/// # Errors
///
/// Returns `DimensionMismatch` if the lengths differ.
pub fn solution_error(computed: &Vector, reference: &Vector) -> MathResult<f64> {
    computed.distance(reference)
}

/// [`solution_error`] scaled by the norm of the reference.
///
/// # Errors
///
/// * `DimensionMismatch` if the lengths differ
/// * `PreconditionViolation` if the reference is the zero vector
///
/// # Example
///
/// ```rust
/// use numlab_math::accuracy::relative_solution_error;
/// use numlab_math::linear_algebra::Vector;
///
/// let reference = Vector::new(vec![3.0, 4.0]);
/// let computed = Vector::new(vec![3.0, 4.5]);
///
/// let rel = relative_solution_error(&computed, &reference).unwrap();
/// assert!((rel - 0.1).abs() < 1e-12);
/// ```
pub fn relative_solution_error(computed: &Vector, reference: &Vector) -> MathResult<f64> {
    let scale = reference.norm();
    if scale == 0.0 {
        return Err(MathError::precondition(
            "relative error is undefined for a zero reference",
        ));
    }
    Ok(solution_error(computed, reference)? / scale)
}

/// Euclidean norm of the residual `A x - b`.
///
/// # Errors
///
/// Returns `DimensionMismatch` if `A`, `x` and `b` do not fit together.
pub fn residual_norm(a: &Matrix, x: &Vector, b: &Vector) -> MathResult<f64> {
    let ax = a.mul_vector(x)?;
    if ax.len() != b.len() {
        return Err(MathError::vector_mismatch(a.nrows(), a.ncols(), b.len()));
    }
    ax.distance(b)
}

/// A-posteriori error bound `|f(root)| / min |f'|` for an approximate root.
///
/// `min |f'|` is sampled at `samples` evenly spaced points of the function's
/// interval.
///
/// # Errors
///
/// * `PreconditionViolation` if `samples` is zero, or if the sampled
///   minimum of `|f'|` is zero, or `f'` is NaN at a grid point
pub fn root_error_bound(func: &ScalarFunction, root: f64, samples: usize) -> MathResult<f64> {
    let min = func.min_derivative_magnitude(samples)?;
    if min.value == 0.0 {
        return Err(MathError::precondition(format!(
            "error bound needs f' != 0 on the interval, |f'| vanishes at x = {}",
            min.argmin
        )));
    }

    let bound = func.value(root).abs() / min.value;
    debug!(
        "error bound at {}: {:.3e} (min |f'| = {:.6})",
        root, bound, min.value
    );
    Ok(bound)
}
