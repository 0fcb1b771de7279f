//! Simple (fixed-point) iteration.

use log::{debug, warn};

use crate::error::{MathError, MathResult};
use crate::function::ScalarFunction;
use crate::roots::trace::iterate;
use crate::roots::{IterationTrace, Method, RootConfig};

/// Fixed-point iteration `x_{k+1} = x_k - T f(x_k)` with `T = 1 / min f'`.
///
/// The minimum of `f'` is taken over `config.derivative_samples` evenly
/// spaced points of `[a, b]` and the iteration starts from `a`. The map is
/// only meant for increasing functions, so a sampled minimum that is not
/// strictly positive makes the method inapplicable.
///
/// # Errors
///
/// * `PreconditionViolation` if the sampled minimum of `f'` is `<= 0` or `f'` is NaN at a grid point
/// * `NonConvergence` past `config.max_iterations` or on divergence
///
/// # Example
///
/// ```rust
/// use numlab_math::function::{Interval, ScalarFunction};
/// use numlab_math::roots::{simple_iteration, RootConfig};
///
/// let decreasing = ScalarFunction::new(
///     |x| 2.0 - x,
///     |_| -1.0,
///     |_| 0.0,
///     Interval::new(0.0, 3.0).unwrap(),
///     1e-7,
/// )
/// .unwrap();
///
/// let err = simple_iteration(&decreasing, &RootConfig::default()).unwrap_err();
/// assert!(err.is_precondition_violation());
/// ```
pub fn simple_iteration(func: &ScalarFunction, config: &RootConfig) -> MathResult<IterationTrace> {
    config.validate()?;

    let min = func.min_derivative_over_interval(config.derivative_samples)?;
    if min.value <= 0.0 {
        warn!(
            "simple iteration not applicable: min f' = {} at x = {}",
            min.value, min.argmin
        );
        return Err(MathError::precondition(format!(
            "simple iteration needs f' > 0 on the interval, sampled minimum is {} at x = {}",
            min.value, min.argmin
        )));
    }

    let step_size = 1.0 / min.value;
    debug!("simple iteration: T = {:.6e}", step_size);

    iterate(
        Method::SimpleIteration,
        func.interval().start(),
        func.tolerance(),
        config.max_iterations,
        |x, _| Ok(x - step_size * func.value(x)),
    )
}
