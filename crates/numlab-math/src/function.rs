//! Real functions of one variable on a closed interval.
//!
//! [`ScalarFunction`] bundles `f`, `f'` and `f''` with the interval `[a, b]`
//! and the root-finding tolerance ε. The three callables are injected by the
//! caller, typically produced by a symbolic differentiation engine; this
//! crate never parses or differentiates expressions itself.

use std::fmt;
use std::sync::Arc;

use crate::error::{MathError, MathResult};

/// Default root-finding tolerance ε.
pub const DEFAULT_TOLERANCE: f64 = 1e-7;

/// Default number of grid points used when sampling a derivative.
pub const DEFAULT_DERIVATIVE_SAMPLES: usize = 1000;

/// Relative step of the central differences behind
/// [`ScalarFunction::with_numerical_derivatives`].
const FIRST_DERIVATIVE_STEP: f64 = 1e-6;
const SECOND_DERIVATIVE_STEP: f64 = 1e-4;

type RealFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// A closed interval `[start, end]` with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    start: f64,
    end: f64,
}

impl Interval {
    /// Creates an interval.
    ///
    /// # Errors
    ///
    /// Returns `PreconditionViolation` unless both bounds are finite and
    /// `start < end`.
    pub fn new(start: f64, end: f64) -> MathResult<Self> {
        if !start.is_finite() || !end.is_finite() || start >= end {
            return Err(MathError::precondition(format!(
                "interval [{}, {}] must be finite with start < end",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// Left endpoint `a`.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Right endpoint `b`.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Length `b - a`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    /// Returns true if `start <= x <= end`.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.start <= x && x <= self.end
    }

    /// `points` evenly spaced values from `start` to `end` inclusive.
    ///
    /// A single point yields just `start`.
    pub fn linspace(&self, points: usize) -> impl Iterator<Item = f64> {
        let (start, end) = (self.start, self.end);
        let spacing = (end - start) / (points.max(2) - 1) as f64;
        (0..points).map(move |i| {
            if points > 1 && i == points - 1 {
                end
            } else {
                start + spacing * i as f64
            }
        })
    }
}

/// Result of a grid search: the smallest sampled value and where it occurred.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampledExtremum {
    /// Smallest value found.
    pub value: f64,
    /// Grid point at which it was found.
    pub argmin: f64,
}

/// An evaluable function with its first and second derivatives.
///
/// Shared read-only by every root finder; cloning is cheap.
///
/// # Example
///
/// ```rust
/// use numlab_math::function::{Interval, ScalarFunction};
///
/// let func = ScalarFunction::new(
///     |x| x * x - 2.0,
///     |x| 2.0 * x,
///     |_| 2.0,
///     Interval::new(1.0, 2.0).unwrap(),
///     1e-7,
/// )
/// .unwrap();
///
/// assert_eq!(func.value(2.0), 2.0);
/// let min = func.min_derivative_over_interval(1000).unwrap();
/// assert_eq!(min.value, 2.0);
/// assert_eq!(min.argmin, 1.0);
/// ```
#[derive(Clone)]
pub struct ScalarFunction {
    f: RealFn,
    df: RealFn,
    d2f: RealFn,
    interval: Interval,
    tolerance: f64,
}

impl ScalarFunction {
    /// Creates a function from `f`, `f'`, `f''`, the interval and ε.
    ///
    /// # Errors
    ///
    /// Returns `PreconditionViolation` unless `tolerance` is positive and finite.
    pub fn new<F, D, D2>(f: F, df: D, d2f: D2, interval: Interval, tolerance: f64) -> MathResult<Self>
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
        D: Fn(f64) -> f64 + Send + Sync + 'static,
        D2: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        check_tolerance(tolerance)?;
        Ok(Self {
            f: Arc::new(f),
            df: Arc::new(df),
            d2f: Arc::new(d2f),
            interval,
            tolerance,
        })
    }

    /// Creates a function whose derivatives are central finite differences of `f`.
    ///
    /// Useful when no symbolic derivative is at hand; expect roughly
    /// 1e-9 accuracy on `f'` and 1e-6 on `f''` for well-scaled functions.
    pub fn with_numerical_derivatives<F>(f: F, interval: Interval, tolerance: f64) -> MathResult<Self>
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        let f1 = Arc::clone(&f);
        let f2 = Arc::clone(&f);

        let df = move |x: f64| {
            let h = FIRST_DERIVATIVE_STEP * (1.0 + x.abs());
            (f1(x + h) - f1(x - h)) / (2.0 * h)
        };
        let d2f = move |x: f64| {
            let h = SECOND_DERIVATIVE_STEP * (1.0 + x.abs());
            (f2(x + h) - 2.0 * f2(x) + f2(x - h)) / (h * h)
        };

        Self::new(move |x| f(x), df, d2f, interval, tolerance)
    }

    /// Returns a copy with a different ε.
    pub fn with_tolerance(mut self, tolerance: f64) -> MathResult<Self> {
        check_tolerance(tolerance)?;
        self.tolerance = tolerance;
        Ok(self)
    }

    /// `f(x)`.
    #[must_use]
    pub fn value(&self, x: f64) -> f64 {
        (self.f)(x)
    }

    /// `f'(x)`.
    #[must_use]
    pub fn derivative(&self, x: f64) -> f64 {
        (self.df)(x)
    }

    /// `f''(x)`.
    #[must_use]
    pub fn second_derivative(&self, x: f64) -> f64 {
        (self.d2f)(x)
    }

    /// The interval `[a, b]`.
    #[must_use]
    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// The root-finding tolerance ε.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Smallest value of `g` on an evenly spaced grid of `samples` points.
    ///
    /// This is a coarse grid search and can miss a minimum lying between
    /// grid points. The left endpoint is the initial candidate and ties
    /// keep the earliest (leftmost) point.
    ///
    /// # Errors
    ///
    /// Returns `PreconditionViolation` when `samples` is zero or `g` is NaN
    /// at any sampled point, including the seed `a`.
    pub fn min_over_interval<G>(&self, samples: usize, g: G) -> MathResult<SampledExtremum>
    where
        G: Fn(f64) -> f64,
    {
        if samples == 0 {
            return Err(MathError::precondition("at least one sample point is required"));
        }

        let sample = |x: f64| {
            let value = g(x);
            if value.is_nan() {
                return Err(MathError::precondition(format!(
                    "sampled function is NaN at x = {}",
                    x
                )));
            }
            Ok(value)
        };

        let start = self.interval.start();
        let mut best = SampledExtremum {
            value: sample(start)?,
            argmin: start,
        };
        for x in self.interval.linspace(samples) {
            let value = sample(x)?;
            if value < best.value {
                best = SampledExtremum { value, argmin: x };
            }
        }
        Ok(best)
    }

    /// Smallest sampled `f'` on `[a, b]`.
    pub fn min_derivative_over_interval(&self, samples: usize) -> MathResult<SampledExtremum> {
        self.min_over_interval(samples, |x| self.derivative(x))
    }

    /// Smallest sampled `|f'|` on `[a, b]`.
    pub fn min_derivative_magnitude(&self, samples: usize) -> MathResult<SampledExtremum> {
        self.min_over_interval(samples, |x| self.derivative(x).abs())
    }

    /// `points` evenly spaced `(x, f(x))` pairs across `[a, b]`, for plotting.
    #[must_use]
    pub fn sample(&self, points: usize) -> Vec<(f64, f64)> {
        self.interval
            .linspace(points)
            .map(|x| (x, self.value(x)))
            .collect()
    }
}

impl fmt::Debug for ScalarFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarFunction")
            .field("interval", &self.interval)
            .field("tolerance", &self.tolerance)
            .finish_non_exhaustive()
    }
}

fn check_tolerance(tolerance: f64) -> MathResult<()> {
    if tolerance <= 0.0 || !tolerance.is_finite() {
        return Err(MathError::precondition(format!(
            "tolerance must be positive and finite, got {}",
            tolerance
        )));
    }
    Ok(())
}
