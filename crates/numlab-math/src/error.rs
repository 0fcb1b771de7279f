//! Error types for numerical operations.

use thiserror::Error;

/// A specialized Result type for numerical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur while solving linear systems or finding roots.
#[derive(Error, Debug, Clone)]
pub enum MathError {
    /// No usable pivot remained after partial-pivot selection.
    #[error("Singular matrix: pivot {pivot:.2e} in column {column}")]
    SingularMatrix {
        /// Elimination column where the pivot vanished.
        column: usize,
        /// The rejected pivot value.
        pivot: f64,
    },

    /// An iterative loop hit its iteration cap or produced a non-finite iterate.
    #[error("{method} did not converge after {iterations} iterations (last change: {last_change:.2e})")]
    NonConvergence {
        /// Name of the iterative method.
        method: &'static str,
        /// Number of iterations attempted.
        iterations: usize,
        /// Magnitude of the last change between iterates.
        last_change: f64,
    },

    /// An update divided by a zero derivative or difference.
    #[error("{method} update undefined at iteration {iteration}: division by {denominator:.2e}")]
    UndefinedOperation {
        /// Name of the iterative method.
        method: &'static str,
        /// Iteration at which the update was attempted.
        iteration: usize,
        /// The offending denominator.
        denominator: f64,
    },

    /// Matrix and vector dimensions are incompatible.
    #[error("Incompatible dimensions: ({rows1}x{cols1}) and ({rows2}x{cols2})")]
    DimensionMismatch {
        /// Rows in first operand.
        rows1: usize,
        /// Columns in first operand.
        cols1: usize,
        /// Rows in second operand.
        rows2: usize,
        /// Columns in second operand.
        cols2: usize,
    },

    /// An input violates the documented preconditions of an operation.
    #[error("Precondition violated: {reason}")]
    PreconditionViolation {
        /// Description of the violated precondition.
        reason: String,
    },
}

impl MathError {
    /// Creates a non-convergence error.
    #[must_use]
    pub fn non_convergence(method: &'static str, iterations: usize, last_change: f64) -> Self {
        Self::NonConvergence {
            method,
            iterations,
            last_change,
        }
    }

    /// Creates a precondition violation error.
    #[must_use]
    pub fn precondition(reason: impl Into<String>) -> Self {
        Self::PreconditionViolation {
            reason: reason.into(),
        }
    }

    /// Creates a dimension mismatch between an `n x m` matrix and a vector of length `len`.
    #[must_use]
    pub fn vector_mismatch(rows: usize, cols: usize, len: usize) -> Self {
        Self::DimensionMismatch {
            rows1: rows,
            cols1: cols,
            rows2: len,
            cols2: 1,
        }
    }

    /// Returns true for errors caused by invalid caller input.
    ///
    /// Dimension mismatches are reported through their own variant but are
    /// precondition failures all the same.
    #[must_use]
    pub fn is_precondition_violation(&self) -> bool {
        matches!(
            self,
            Self::PreconditionViolation { .. } | Self::DimensionMismatch { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::non_convergence("Seidel", 100, 1e-6);
        assert!(err.to_string().contains("100 iterations"));
        assert!(err.to_string().starts_with("Seidel"));
    }

    #[test]
    fn test_singular_display() {
        let err = MathError::SingularMatrix {
            column: 2,
            pivot: 0.0,
        };
        assert!(err.to_string().contains("column 2"));
    }

    #[test]
    fn test_precondition_classification() {
        assert!(MathError::precondition("bad interval").is_precondition_violation());
        assert!(MathError::vector_mismatch(3, 3, 2).is_precondition_violation());
        assert!(!MathError::non_convergence("Newton", 10, 1.0).is_precondition_violation());
    }
}
