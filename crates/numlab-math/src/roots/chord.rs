//! Chord method.

use crate::error::MathResult;
use crate::function::ScalarFunction;
use crate::roots::trace::{iterate, ratio};
use crate::roots::{IterationTrace, Method, RootConfig};

/// Chord method: secant lines through one fixed endpoint.
///
/// The endpoint where `f · f''` is positive stays fixed and the iteration
/// starts from the other one:
///
/// `x_{k+1} = x_k - f(x_k) (c - x_k) / (f(c) - f(x_k))`
///
/// where `c` is the fixed endpoint. Convergence is linear. When `f(b) f''(b) > 0`
/// the fixed point is `b` and the start is `a`; otherwise they swap.
///
/// # Errors
///
/// * `UndefinedOperation` if `f(x_k) = f(c)` at an iterate that is not a root
/// * `NonConvergence` past `config.max_iterations` or on divergence
pub fn chord(func: &ScalarFunction, config: &RootConfig) -> MathResult<IterationTrace> {
    config.validate()?;

    let interval = func.interval();
    let (a, b) = (interval.start(), interval.end());
    let (x0, fixed) = if func.value(b) * func.second_derivative(b) > 0.0 {
        (a, b)
    } else {
        (b, a)
    };
    let f_fixed = func.value(fixed);

    iterate(
        Method::Chord,
        x0,
        func.tolerance(),
        config.max_iterations,
        |x, iteration| {
            let fx = func.value(x);
            let step = ratio(Method::Chord, iteration, fx * (fixed - x), f_fixed - fx)?;
            Ok(x - step)
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MathError;
    use crate::function::Interval;
    use approx::assert_relative_eq;

    fn function<F, D, D2>(f: F, df: D, d2f: D2, a: f64, b: f64) -> ScalarFunction
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
        D: Fn(f64) -> f64 + Send + Sync + 'static,
        D2: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        ScalarFunction::new(f, df, d2f, Interval::new(a, b).unwrap(), 1e-7).unwrap()
    }

    #[test]
    fn test_sqrt_2() {
        let func = function(|x| x * x - 2.0, |x| 2.0 * x, |_| 2.0, 1.0, 2.0);

        let trace = chord(&func, &RootConfig::default()).unwrap();

        // Linear convergence: the last recorded iterate is within a few ε
        assert_relative_eq!(trace.root(), std::f64::consts::SQRT_2, epsilon = 1e-6);
        // f(2) f''(2) > 0 fixes b and starts from a
        assert_eq!(trace.records()[0].value, 1.0);
    }

    #[test]
    fn test_fixed_endpoint_swaps() {
        // f(b) f''(b) = -2 < 0, so a is fixed and the walk starts at b
        let func = function(|x| x * x - 2.0, |x| 2.0 * x, |_| 2.0, -2.0, -1.0);

        let trace = chord(&func, &RootConfig::default()).unwrap();

        assert_eq!(trace.records()[0].value, -1.0);
        assert_relative_eq!(trace.root(), -std::f64::consts::SQRT_2, epsilon = 1e-6);
    }

    #[test]
    fn test_linear_function_one_step() {
        let func = function(|x| x - 2.0, |_| 1.0, |_| 0.0, 0.0, 3.0);

        let trace = chord(&func, &RootConfig::default()).unwrap();

        assert_eq!(trace.values().collect::<Vec<_>>(), vec![3.0, 2.0]);
    }

    #[test]
    fn test_transcendental() {
        let func = function(
            |x: f64| x.exp() - 2.0 * (x - 2.0).powi(2),
            |x: f64| x.exp() - 4.0 * (x - 2.0),
            |x: f64| x.exp() - 4.0,
            0.0,
            1.0,
        );

        let trace = chord(&func, &RootConfig::default()).unwrap();

        assert_relative_eq!(trace.root(), 0.894_230_366_8, epsilon = 1e-6);
    }

    #[test]
    fn test_iteration_cap() {
        let func = function(|x| x * x - 2.0, |x| 2.0 * x, |_| 2.0, 1.0, 2.0);

        let err = chord(&func, &RootConfig::default().with_max_iterations(3)).unwrap_err();

        assert!(matches!(
            err,
            MathError::NonConvergence {
                method: "Chord",
                iterations: 3,
                ..
            }
        ));
    }
}
