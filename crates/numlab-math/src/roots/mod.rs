//! Single-variable root finders.
//!
//! Every method takes a [`ScalarFunction`] (carrying `[a, b]` and ε) and
//! returns an [`IterationTrace`]:
//!
//! - [`newton`]: tangent steps from the endpoint satisfying Fourier's condition
//! - [`chord`]: secant lines through a fixed endpoint
//! - [`secant`]: secant lines through the two latest iterates, seeded with `a` and `b`
//! - [`finite_difference_newton`]: Newton with a forward-difference slope
//! - [`steffensen`]: derivative-free, quadratically convergent
//! - [`simple_iteration`]: fixed-point map `x - f(x) / min f'`
//!
//! # Stopping Rule
//!
//! All six share one rule: stop the first time `|x_next - x| < ε`. The
//! trace ends at `x`; `x_next` is not recorded. Starting values carry
//! iteration index 0 (the secant method records both `a` and `b` at index 0).
//! Each method gives up with `NonConvergence` after
//! [`RootConfig::max_iterations`] updates.
//!
//! # Choosing a Method
//!
//! | Method | Order | Needs |
//! |--------|-------|-------|
//! | Newton | Quadratic | `f'`, `f''` for the start point |
//! | Chord | Linear | `f''` for the fixed endpoint |
//! | Secant | Superlinear (~1.618) | `f` only |
//! | Finite-difference Newton | Linear, close to quadratic | `f` only |
//! | Steffensen | Quadratic | `f` only |
//! | Simple iteration | Linear | `f' > 0` on `[a, b]` |
//!
//! # Example
//!
//! ```rust
//! use numlab_math::function::{Interval, ScalarFunction};
//! use numlab_math::roots::{newton, RootConfig};
//!
//! let func = ScalarFunction::new(
//!     |x| x * x - 2.0,
//!     |x| 2.0 * x,
//!     |_| 2.0,
//!     Interval::new(1.0, 2.0).unwrap(),
//!     1e-7,
//! )
//! .unwrap();
//!
//! let trace = newton(&func, &RootConfig::default()).unwrap();
//! assert_eq!(trace.records()[0].value, 2.0); // f(1) f''(1) < 0, so start at b
//! assert!((trace.root() - std::f64::consts::SQRT_2).abs() < 1e-7);
//! ```

mod chord;
mod finite_difference;
mod newton;
mod secant;
mod simple_iteration;
mod steffensen;
mod trace;

use std::fmt;

use log::warn;

pub use chord::chord;
pub use finite_difference::finite_difference_newton;
pub use newton::newton;
pub use secant::secant;
pub use simple_iteration::simple_iteration;
pub use steffensen::steffensen;
pub use trace::{IterationRecord, IterationTrace};

use crate::accuracy::root_error_bound;
use crate::error::{MathError, MathResult};
use crate::function::{ScalarFunction, DEFAULT_DERIVATIVE_SAMPLES};

/// Default maximum number of updates per method.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Default number of forward-difference steps across `[a, b]`.
pub const DEFAULT_FINITE_DIFFERENCE_STEPS: usize = 1000;

/// Configuration shared by the root finders.
///
/// The tolerance ε is a property of the [`ScalarFunction`], not of the
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RootConfig {
    /// Maximum number of updates before `NonConvergence`.
    pub max_iterations: usize,
    /// Grid size for sampling `f'` (simple iteration and error estimates).
    pub derivative_samples: usize,
    /// The finite-difference Newton step is `(b - a) / finite_difference_steps`.
    pub finite_difference_steps: usize,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            derivative_samples: DEFAULT_DERIVATIVE_SAMPLES,
            finite_difference_steps: DEFAULT_FINITE_DIFFERENCE_STEPS,
        }
    }
}

impl RootConfig {
    /// Sets the maximum number of updates.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the derivative sampling grid size.
    #[must_use]
    pub fn with_derivative_samples(mut self, derivative_samples: usize) -> Self {
        self.derivative_samples = derivative_samples;
        self
    }

    /// Sets the number of finite-difference steps.
    #[must_use]
    pub fn with_finite_difference_steps(mut self, finite_difference_steps: usize) -> Self {
        self.finite_difference_steps = finite_difference_steps;
        self
    }

    /// Checks that every count is positive.
    pub fn validate(&self) -> MathResult<()> {
        if self.max_iterations == 0 {
            return Err(MathError::precondition("max_iterations must be > 0"));
        }
        if self.derivative_samples == 0 {
            return Err(MathError::precondition("derivative_samples must be > 0"));
        }
        if self.finite_difference_steps == 0 {
            return Err(MathError::precondition("finite_difference_steps must be > 0"));
        }
        Ok(())
    }
}

/// The six root-finding methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    /// Newton's tangent method.
    Newton,
    /// Chord method with a fixed endpoint.
    Chord,
    /// Secant method.
    Secant,
    /// Newton's method with a forward-difference derivative.
    FiniteDifferenceNewton,
    /// Steffensen's method.
    Steffensen,
    /// Simple (fixed-point) iteration.
    SimpleIteration,
}

impl Method {
    /// Every method, in presentation order.
    pub const ALL: [Method; 6] = [
        Method::Newton,
        Method::Chord,
        Method::Secant,
        Method::FiniteDifferenceNewton,
        Method::Steffensen,
        Method::SimpleIteration,
    ];

    /// Human-readable name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Method::Newton => "Newton",
            Method::Chord => "Chord",
            Method::Secant => "Secant",
            Method::FiniteDifferenceNewton => "Finite-difference Newton",
            Method::Steffensen => "Steffensen",
            Method::SimpleIteration => "Simple iteration",
        }
    }

    /// Runs this method on `func`.
    pub fn run(self, func: &ScalarFunction, config: &RootConfig) -> MathResult<IterationTrace> {
        match self {
            Method::Newton => newton(func, config),
            Method::Chord => chord(func, config),
            Method::Secant => secant(func, config),
            Method::FiniteDifferenceNewton => {
                finite_difference_newton(func, config.finite_difference_steps, config)
            }
            Method::Steffensen => steffensen(func, config),
            Method::SimpleIteration => simple_iteration(func, config),
        }
    }

    /// Runs this method and attaches an a-posteriori error estimate.
    ///
    /// Only a failure of the method itself is an error. When the estimate
    /// cannot be formed (`|f'|` vanishes somewhere on the sampling grid) the
    /// report still carries the trace, with `error_estimate` set to `None`.
    pub fn report(self, func: &ScalarFunction, config: &RootConfig) -> MathResult<RootReport> {
        let trace = self.run(func, config)?;
        let root = trace.root();
        let error_estimate = match root_error_bound(func, root, config.derivative_samples) {
            Ok(bound) => Some(bound),
            Err(e) => {
                warn!("{}: no error estimate for root {}: {}", self, root, e);
                None
            }
        };

        Ok(RootReport {
            method: self,
            trace,
            root,
            error_estimate,
        })
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A method's trace, its accepted root and the estimated error of that root.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RootReport {
    /// The method that produced the trace.
    pub method: Method,
    /// All recorded iterates.
    pub trace: IterationTrace,
    /// The last recorded iterate.
    pub root: f64,
    /// `|f(root)| / min|f'|` over the sampled interval, `None` when the
    /// sampled `|f'|` reaches zero.
    pub error_estimate: Option<f64>,
}

/// Runs every method on `func`, in [`Method::ALL`] order.
///
/// Methods fail independently; one method's error does not stop the others.
///
/// # Example
///
/// ```rust
/// use numlab_math::function::{Interval, ScalarFunction};
/// use numlab_math::roots::{solve_all, RootConfig};
///
/// let func = ScalarFunction::new(
///     |x: f64| x.exp() - 2.0 * (x - 2.0).powi(2),
///     |x: f64| x.exp() - 4.0 * (x - 2.0),
///     |x: f64| x.exp() - 4.0,
///     Interval::new(0.0, 1.0).unwrap(),
///     1e-7,
/// )
/// .unwrap();
///
/// for (method, outcome) in solve_all(&func, &RootConfig::default()) {
///     let report = outcome.unwrap();
///     assert!((report.root - 0.894_230_37).abs() < 1e-6, "{method}");
///     assert!(report.error_estimate.unwrap() < 1e-6);
/// }
/// ```
pub fn solve_all(
    func: &ScalarFunction,
    config: &RootConfig,
) -> Vec<(Method, MathResult<RootReport>)> {
    Method::ALL
        .iter()
        .map(|&method| (method, method.report(func, config)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::Interval;
    use approx::assert_relative_eq;

    fn linear() -> ScalarFunction {
        ScalarFunction::new(
            |x| x - 2.0,
            |_| 1.0,
            |_| 0.0,
            Interval::new(0.0, 3.0).unwrap(),
            1e-7,
        )
        .unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = RootConfig::default();
        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.derivative_samples, 1000);
        assert_eq!(config.finite_difference_steps, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_config() {
        assert!(RootConfig::default().with_max_iterations(0).validate().is_err());
        assert!(RootConfig::default().with_derivative_samples(0).validate().is_err());
        assert!(RootConfig::default()
            .with_finite_difference_steps(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_every_method_solves_linear_function() {
        let func = linear();

        for method in Method::ALL {
            let trace = method.run(&func, &RootConfig::default()).unwrap();

            assert_relative_eq!(trace.root(), 2.0, epsilon = 1e-7);
            assert!(trace.iterations() <= 2, "{} took {}", method, trace.iterations());
        }
    }

    #[test]
    fn test_method_names_unique() {
        let mut names: Vec<_> = Method::ALL.iter().map(|m| m.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 6);
        assert_eq!(Method::FiniteDifferenceNewton.to_string(), "Finite-difference Newton");
    }

    #[test]
    fn test_report_attaches_error_estimate() {
        let report = Method::Newton
            .report(&linear(), &RootConfig::default())
            .unwrap();

        assert_eq!(report.method, Method::Newton);
        assert_eq!(report.root, report.trace.root());
        assert_relative_eq!(report.error_estimate.unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_report_keeps_trace_without_estimate() {
        // |f'| = 0 at the left endpoint, so no bound can be formed
        let func = ScalarFunction::new(
            |x| x * x - 2.0,
            |x| 2.0 * x,
            |_| 2.0,
            Interval::new(0.0, 2.0).unwrap(),
            1e-7,
        )
        .unwrap();
        let config = RootConfig::default();

        let report = Method::Newton.report(&func, &config).unwrap();

        assert_eq!(report.error_estimate, None);
        assert_eq!(report.trace, newton(&func, &config).unwrap());
        assert_relative_eq!(report.root, std::f64::consts::SQRT_2, epsilon = 1e-7);

        for (method, outcome) in solve_all(&func, &config) {
            if let Ok(report) = outcome {
                assert!(report.error_estimate.is_none(), "{}", method);
            }
        }
    }

    #[test]
    fn test_solve_all_keeps_failures_separate() {
        // f' < 0 near a: simple iteration is not applicable, the rest still run
        let func = ScalarFunction::new(
            |x| x * x - 2.0,
            |x| 2.0 * x,
            |_| 2.0,
            Interval::new(-0.5, 2.0).unwrap(),
            1e-7,
        )
        .unwrap();

        let outcomes = solve_all(&func, &RootConfig::default());

        assert_eq!(outcomes.len(), 6);
        for (method, outcome) in outcomes {
            match method {
                Method::SimpleIteration => {
                    assert!(outcome.unwrap_err().is_precondition_violation());
                }
                Method::Newton => {
                    let report = outcome.unwrap();
                    assert_relative_eq!(report.root, std::f64::consts::SQRT_2, epsilon = 1e-7);
                }
                _ => {}
            }
        }
    }
}
