//! Iteration traces and the shared stopping rule.

use log::{debug, trace, warn};

use crate::error::{MathError, MathResult};
use crate::roots::Method;

/// One iterate together with the iteration that produced it.
///
/// Index `0` marks a starting value, never a computed update.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationRecord {
    /// The iterate.
    pub value: f64,
    /// Iteration index.
    pub iteration: usize,
}

/// The ordered, never-empty sequence of iterates produced by a root finder.
///
/// Records appear in the order they were computed. The trace ends at the
/// last iterate recorded before the stopping test `|x_next - x| < ε`
/// passed; the `x_next` that satisfied the test is not included.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IterationTrace {
    records: Vec<IterationRecord>,
}

impl IterationTrace {
    /// All records in iteration order.
    #[must_use]
    pub fn records(&self) -> &[IterationRecord] {
        &self.records
    }

    /// Number of records, starting values included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; a trace holds at least its starting value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The final record.
    #[must_use]
    pub fn last(&self) -> IterationRecord {
        self.records[self.records.len() - 1]
    }

    /// The accepted approximation of the root.
    #[must_use]
    pub fn root(&self) -> f64 {
        self.last().value
    }

    /// Number of recorded updates.
    #[must_use]
    pub fn iterations(&self) -> usize {
        self.last().iteration
    }

    /// The iterates without their indices.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|r| r.value)
    }

    /// Iterates over the records.
    pub fn iter(&self) -> std::slice::Iter<'_, IterationRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a IterationTrace {
    type Item = &'a IterationRecord;
    type IntoIter = std::slice::Iter<'a, IterationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Outcome of offering a new iterate to a [`ConvergenceTracker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Progress {
    Continue,
    Converged,
}

/// The stopping rule every root finder goes through.
///
/// Seeds are recorded with index 0. Each offered update gets the next
/// index; it ends the iteration if it lies within ε of the current
/// iterate, and is recorded otherwise. At most `max_iterations` updates are
/// accepted for testing; a non-finite update is treated as divergence.
#[derive(Debug)]
pub(crate) struct ConvergenceTracker {
    method: Method,
    tolerance: f64,
    max_iterations: usize,
    records: Vec<IterationRecord>,
    current: f64,
    iteration: usize,
}

impl ConvergenceTracker {
    /// `seeds` must not be empty; the last seed is the current iterate.
    pub(crate) fn new(method: Method, tolerance: f64, max_iterations: usize, seeds: &[f64]) -> Self {
        debug_assert!(!seeds.is_empty());
        let records = seeds
            .iter()
            .map(|&value| IterationRecord {
                value,
                iteration: 0,
            })
            .collect();

        debug!("{}: starting from {:?}", method, seeds);

        Self {
            method,
            tolerance,
            max_iterations,
            records,
            current: seeds[seeds.len() - 1],
            iteration: 0,
        }
    }

    pub(crate) fn current(&self) -> f64 {
        self.current
    }

    /// Index the next offered update will receive.
    pub(crate) fn next_iteration(&self) -> usize {
        self.iteration + 1
    }

    pub(crate) fn offer(&mut self, next: f64) -> MathResult<Progress> {
        self.iteration += 1;
        let change = (next - self.current).abs();

        if !next.is_finite() {
            warn!("{} diverged at iteration {}", self.method, self.iteration);
            return Err(MathError::non_convergence(
                self.method.name(),
                self.iteration,
                change,
            ));
        }

        trace!(
            "{} iteration {}: x = {}, change = {:.3e}",
            self.method,
            self.iteration,
            next,
            change
        );

        if change < self.tolerance {
            debug!(
                "{} converged to {} after {} iterations",
                self.method, self.current, self.iteration
            );
            return Ok(Progress::Converged);
        }

        if self.iteration >= self.max_iterations {
            warn!(
                "{} stopped after {} iterations (change {:.3e})",
                self.method, self.iteration, change
            );
            return Err(MathError::non_convergence(
                self.method.name(),
                self.iteration,
                change,
            ));
        }

        self.records.push(IterationRecord {
            value: next,
            iteration: self.iteration,
        });
        self.current = next;
        Ok(Progress::Continue)
    }

    pub(crate) fn into_trace(self) -> IterationTrace {
        IterationTrace {
            records: self.records,
        }
    }
}

/// Runs a single-point iteration `x_{k+1} = step(x_k, k+1)` from `seed`.
pub(crate) fn iterate<S>(
    method: Method,
    seed: f64,
    tolerance: f64,
    max_iterations: usize,
    mut step: S,
) -> MathResult<IterationTrace>
where
    S: FnMut(f64, usize) -> MathResult<f64>,
{
    let mut tracker = ConvergenceTracker::new(method, tolerance, max_iterations, &[seed]);
    loop {
        let next = step(tracker.current(), tracker.next_iteration())?;
        if tracker.offer(next)? == Progress::Converged {
            return Ok(tracker.into_trace());
        }
    }
}

/// `numerator / denominator` for an update step.
///
/// A zero numerator means the iterate is already a root and the step is
/// zero whatever the denominator. Otherwise a zero denominator, or a
/// non-finite quotient, makes the update undefined.
pub(crate) fn ratio(
    method: Method,
    iteration: usize,
    numerator: f64,
    denominator: f64,
) -> MathResult<f64> {
    if numerator == 0.0 {
        return Ok(0.0);
    }
    let quotient = numerator / denominator;
    if denominator == 0.0 || !quotient.is_finite() {
        warn!(
            "{} iteration {}: division of {:.3e} by {:.3e}",
            method, iteration, numerator, denominator
        );
        return Err(MathError::UndefinedOperation {
            method: method.name(),
            iteration,
            denominator,
        });
    }
    Ok(quotient)
}
