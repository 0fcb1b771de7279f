//! Steffensen's method.

use crate::error::MathResult;
use crate::function::ScalarFunction;
use crate::roots::trace::{iterate, ratio};
use crate::roots::{IterationTrace, Method, RootConfig};

/// Steffensen's method: `x_{k+1} = x_k - f(x_k)² / (f(x_k + f(x_k)) - f(x_k))`.
///
/// Derivative-free and quadratically convergent near a simple root.
/// Starts from `a`. The point `x_k + f(x_k)` may leave `[a, b]`, so `f`
/// must be defined beyond the interval when `|f|` is large there.
///
/// # Errors
///
/// * `UndefinedOperation` if `f(x_k + f(x_k)) = f(x_k)` at an iterate that is not a root
/// * `NonConvergence` past `config.max_iterations` or on divergence
pub fn steffensen(func: &ScalarFunction, config: &RootConfig) -> MathResult<IterationTrace> {
    config.validate()?;

    iterate(
        Method::Steffensen,
        func.interval().start(),
        func.tolerance(),
        config.max_iterations,
        |x, iteration| {
            let fx = func.value(x);
            let step = ratio(
                Method::Steffensen,
                iteration,
                fx * fx,
                func.value(x + fx) - fx,
            )?;
            Ok(x - step)
        },
    )
}
