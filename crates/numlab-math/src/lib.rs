//! # Numlab Math
//!
//! Small numerical-methods toolkit with two independent solver families.
//!
//! This crate provides:
//!
//! - **Linear Algebra**: Gaussian elimination with partial pivoting and
//!   Gauss-Seidel iteration over the normal equations
//! - **Root Finding**: Newton, chord, secant, finite-difference Newton,
//!   Steffensen and simple iteration, each returning its full iteration trace
//! - **Accuracy**: Solution errors, residuals and a-posteriori root error bounds
//!
//! ## Design Philosophy
//!
//! - **Pure**: Every routine reads immutable inputs and returns a fresh result
//! - **Explicit Failures**: Singular systems, divergence and undefined updates
//!   are reported as [`MathError`] values, never as NaN or silent partial results
//! - **Traceable**: Root finders expose every iterate, not just the final root
//!
//! ## Example
//!
//! ```rust
//! use numlab_math::prelude::*;
//!
//! let a = Matrix::from_rows(&[vec![3.0, 1.0], vec![1.0, 2.0]]).unwrap();
//! let b = Vector::new(vec![9.0, 8.0]);
//! let x = gaussian_elimination(&a, &b, &GaussConfig::default()).unwrap();
//! assert!(residual_norm(&a, &x, &b).unwrap() < 1e-12);
//!
//! let func = ScalarFunction::new(
//!     |x: f64| x.cos() - x,
//!     |x: f64| -x.sin() - 1.0,
//!     |x: f64| -x.cos(),
//!     Interval::new(0.0, 1.0).unwrap(),
//!     1e-10,
//! )
//! .unwrap();
//! let report = Method::Newton.report(&func, &RootConfig::default()).unwrap();
//! assert!((report.root - 0.739_085_133_215_160_6).abs() < 1e-9);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod accuracy;
pub mod error;
pub mod function;
pub mod linear_algebra;
pub mod roots;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::accuracy::{
        relative_solution_error, residual_norm, root_error_bound, solution_error,
    };
    pub use crate::error::{MathError, MathResult};
    pub use crate::function::{Interval, ScalarFunction};
    pub use crate::linear_algebra::{
        gaussian_elimination, seidel, GaussConfig, GaussSolver, LinearSolver, Matrix,
        SeidelConfig, SeidelSolver, Vector,
    };
    pub use crate::roots::{
        chord, finite_difference_newton, newton, secant, simple_iteration, solve_all,
        steffensen, IterationTrace, Method, RootConfig, RootReport,
    };
}

pub use error::{MathError, MathResult};
