//! Newton's tangent method.

use crate::error::MathResult;
use crate::function::ScalarFunction;
use crate::roots::trace::{iterate, ratio};
use crate::roots::{IterationTrace, Method, RootConfig};

/// Newton's method: `x_{k+1} = x_k - f(x_k) / f'(x_k)`.
///
/// Starts from `a` when `f(a) · f''(a) > 0` and from `b` otherwise
/// (Fourier's condition), which gives monotone convergence when `f'` and
/// `f''` keep their sign on `[a, b]`.
///
/// # Errors
///
/// * `UndefinedOperation` if `f'` vanishes at an iterate that is not a root
/// * `NonConvergence` past `config.max_iterations` or on divergence
///
/// # Example
///
/// ```rust
/// use numlab_math::function::{Interval, ScalarFunction};
/// use numlab_math::roots::{newton, RootConfig};
///
/// let func = ScalarFunction::new(
///     |x: f64| x.powi(3) - x - 1.0,
///     |x: f64| 3.0 * x * x - 1.0,
///     |x: f64| 6.0 * x,
///     Interval::new(1.0, 2.0).unwrap(),
///     1e-10,
/// )
/// .unwrap();
///
/// let trace = newton(&func, &RootConfig::default()).unwrap();
/// assert!((trace.root() - 1.324_717_957_244_746).abs() < 1e-9);
/// ```
pub fn newton(func: &ScalarFunction, config: &RootConfig) -> MathResult<IterationTrace> {
    config.validate()?;

    let interval = func.interval();
    let a = interval.start();
    let x0 = if func.value(a) * func.second_derivative(a) > 0.0 {
        a
    } else {
        interval.end()
    };

    iterate(
        Method::Newton,
        x0,
        func.tolerance(),
        config.max_iterations,
        |x, iteration| {
            let step = ratio(Method::Newton, iteration, func.value(x), func.derivative(x))?;
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

    fn parabola(a: f64, b: f64, tolerance: f64) -> ScalarFunction {
        ScalarFunction::new(
            |x| x * x - 2.0,
            |x| 2.0 * x,
            |_| 2.0,
            Interval::new(a, b).unwrap(),
            tolerance,
        )
        .unwrap()
    }

    #[test]
    fn test_sqrt_2() {
        let trace = newton(&parabola(1.0, 2.0, 1e-7), &RootConfig::default()).unwrap();

        assert_relative_eq!(trace.root(), std::f64::consts::SQRT_2, epsilon = 1e-7);
        assert!(trace.iterations() < 10); // Should converge quickly
    }

    #[test]
    fn test_fourier_start_point() {
        // f(1) f''(1) = -2 < 0: start from b
        let trace = newton(&parabola(1.0, 2.0, 1e-7), &RootConfig::default()).unwrap();
        assert_eq!(trace.records()[0].value, 2.0);
        assert_eq!(trace.records()[0].iteration, 0);

        // f(-3) f''(-3) = 14 > 0: start from a
        let trace = newton(&parabola(-3.0, -1.0, 1e-7), &RootConfig::default()).unwrap();
        assert_eq!(trace.records()[0].value, -3.0);
        assert_relative_eq!(trace.root(), -std::f64::consts::SQRT_2, epsilon = 1e-7);
    }

    #[test]
    fn test_monotone_from_fourier_side() {
        let trace = newton(&parabola(1.0, 2.0, 1e-12), &RootConfig::default()).unwrap();
        let values: Vec<f64> = trace.values().collect();

        assert!(values.windows(2).all(|w| w[1] < w[0]));
        assert!(values.iter().all(|&x| x >= std::f64::consts::SQRT_2 - 1e-12));
    }

    #[test]
    fn test_indices_increase() {
        let trace = newton(&parabola(1.0, 2.0, 1e-7), &RootConfig::default()).unwrap();

        for (k, record) in trace.iter().enumerate() {
            assert_eq!(record.iteration, k);
        }
    }

    #[test]
    fn test_flat_tangent() {
        // f(-1) f''(-1) < 0 selects b = 0, where f'(0) = 0
        let func = ScalarFunction::new(
            |x| x * x - 4.0,
            |x| 2.0 * x,
            |_| 2.0,
            Interval::new(-1.0, 0.0).unwrap(),
            1e-7,
        )
        .unwrap();

        let err = newton(&func, &RootConfig::default()).unwrap_err();

        assert!(matches!(
            err,
            MathError::UndefinedOperation {
                method: "Newton",
                iteration: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_start_on_root() {
        let func = ScalarFunction::new(
            |x| x - 1.0,
            |_| 1.0,
            |_| 0.0,
            Interval::new(0.0, 1.0).unwrap(),
            1e-7,
        )
        .unwrap();

        let trace = newton(&func, &RootConfig::default()).unwrap();

        assert_eq!(trace.len(), 1);
        assert_eq!(trace.root(), 1.0);
    }

    #[test]
    fn test_iteration_cap() {
        // Tangent steps on atan overshoot further each time from this start
        let func = ScalarFunction::new(
            |x: f64| x.atan(),
            |x: f64| 1.0 / (1.0 + x * x),
            |x: f64| -2.0 * x / (1.0 + x * x).powi(2),
            Interval::new(-3.0, 3.0).unwrap(),
            1e-7,
        )
        .unwrap();

        let err = newton(&func, &RootConfig::default().with_max_iterations(5)).unwrap_err();
        assert!(matches!(err, MathError::NonConvergence { .. }));
    }
}
