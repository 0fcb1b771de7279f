//! Secant method.

use crate::error::MathResult;
use crate::function::ScalarFunction;
use crate::roots::trace::{ratio, ConvergenceTracker, Progress};
use crate::roots::{IterationTrace, Method, RootConfig};

/// Secant method seeded with both endpoints.
///
/// Uses the iteration:
/// `x_{k+1} = x_k - f(x_k) (x_k - x_{k-1}) / (f(x_k) - f(x_{k-1}))`
///
/// with `x_{-1} = a` and `x_0 = b`. Both seeds are recorded with index 0.
/// No derivative is evaluated. Convergence rate is superlinear (order
/// ~1.618, the golden ratio).
///
/// # Errors
///
/// * `UndefinedOperation` if two consecutive iterates have equal function values
/// * `NonConvergence` past `config.max_iterations` or on divergence
///
/// # Example
///
/// ```rust
/// use numlab_math::function::{Interval, ScalarFunction};
/// use numlab_math::roots::{secant, RootConfig};
///
/// let func = ScalarFunction::new(
///     |x| x - 2.0,
///     |_| 1.0,
///     |_| 0.0,
///     Interval::new(0.0, 3.0).unwrap(),
///     1e-7,
/// )
/// .unwrap();
///
/// let trace = secant(&func, &RootConfig::default()).unwrap();
/// assert_eq!(trace.values().collect::<Vec<_>>(), vec![0.0, 3.0, 2.0]);
/// ```
pub fn secant(func: &ScalarFunction, config: &RootConfig) -> MathResult<IterationTrace> {
    config.validate()?;

    let interval = func.interval();
    let mut previous = interval.start();
    let mut tracker = ConvergenceTracker::new(
        Method::Secant,
        func.tolerance(),
        config.max_iterations,
        &[previous, interval.end()],
    );

    loop {
        let current = tracker.current();
        let f_current = func.value(current);
        let f_previous = func.value(previous);

        let step = ratio(
            Method::Secant,
            tracker.next_iteration(),
            f_current * (current - previous),
            f_current - f_previous,
        )?;

        if tracker.offer(current - step)? == Progress::Converged {
            return Ok(tracker.into_trace());
        }
        previous = current;
    }
}
