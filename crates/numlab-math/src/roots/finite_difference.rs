//! Newton's method with a forward-difference slope.

use log::debug;

use crate::error::{MathError, MathResult};
use crate::function::ScalarFunction;
use crate::roots::trace::{iterate, ratio};
use crate::roots::{IterationTrace, Method, RootConfig};

/// Finite-difference Newton: `x_{k+1} = x_k - f(x_k) h / (f(x_k + h) - f(x_k))`.
///
/// The step is `h = (b - a) / steps` and the iteration starts from `a`.
/// Only `f` is evaluated.
///
/// # Arguments
///
/// * `func` - The function, interval and ε
/// * `steps` - Number of difference steps across `[a, b]` (1000 in [`RootConfig::default`])
/// * `config` - Iteration cap
///
/// # Errors
///
/// * `PreconditionViolation` if `steps` is zero
/// * `UndefinedOperation` if `f(x_k + h) = f(x_k)` at an iterate that is not a root
/// * `NonConvergence` past `config.max_iterations` or on divergence
pub fn finite_difference_newton(
    func: &ScalarFunction,
    steps: usize,
    config: &RootConfig,
) -> MathResult<IterationTrace> {
    config.validate()?;
    if steps == 0 {
        return Err(MathError::precondition("finite-difference steps must be > 0"));
    }

    let interval = func.interval();
    let h = interval.width() / steps as f64;
    debug!("finite-difference Newton: h = {:.3e}", h);

    iterate(
        Method::FiniteDifferenceNewton,
        interval.start(),
        func.tolerance(),
        config.max_iterations,
        |x, iteration| {
            let fx = func.value(x);
            let step = ratio(
                Method::FiniteDifferenceNewton,
                iteration,
                fx * h,
                func.value(x + h) - fx,
            )?;
            Ok(x - step)
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::Interval;
    use approx::assert_relative_eq;

    fn parabola() -> ScalarFunction {
        ScalarFunction::new(
            |x| x * x - 2.0,
            |x| 2.0 * x,
            |_| 2.0,
            Interval::new(1.0, 2.0).unwrap(),
            1e-7,
        )
        .unwrap()
    }

    #[test]
    fn test_sqrt_2() {
        let trace =
            finite_difference_newton(&parabola(), 1000, &RootConfig::default()).unwrap();

        assert_relative_eq!(trace.root(), std::f64::consts::SQRT_2, epsilon = 1e-7);
        assert_eq!(trace.records()[0].value, 1.0);
    }

    #[test]
    fn test_coarse_step_still_converges() {
        let trace = finite_difference_newton(&parabola(), 4, &RootConfig::default()).unwrap();

        assert_relative_eq!(trace.root(), std::f64::consts::SQRT_2, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_steps_rejected() {
        let err = finite_difference_newton(&parabola(), 0, &RootConfig::default()).unwrap_err();
        assert!(err.is_precondition_violation());
    }

    #[test]
    fn test_derivative_never_called() {
        let func = ScalarFunction::new(
            |x| x - 2.0,
            |_| f64::NAN,
            |_| f64::NAN,
            Interval::new(0.0, 3.0).unwrap(),
            1e-7,
        )
        .unwrap();

        let trace = finite_difference_newton(&func, 1000, &RootConfig::default()).unwrap();

        assert_relative_eq!(trace.root(), 2.0, epsilon = 1e-10);
        assert_eq!(trace.iterations(), 1);
    }
}
