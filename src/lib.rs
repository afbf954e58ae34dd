//! # A dense tableau linear program solver
//!
//! Linear programs of the form
//!
//! ```text
//! maximize (or minimize)  c . x
//! subject to              A x <= b
//!                         x >= 0
//! ```
//!
//! are solved with the primal simplex method in its Gauss-Jordan tableau form. The starting basis
//! consists of one slack variable per constraint, so the right-hand side `b` should be
//! nonnegative.
//!
//! ```
//! use simplex_tableau::{solve, Objective};
//!
//! let solution = solve(
//!     &[40_f64, 30_f64],
//!     &[vec![1_f64, 1_f64], vec![2_f64, 1_f64]],
//!     &[12_f64, 16_f64],
//!     Objective::Maximize,
//! ).unwrap();
//!
//! assert_eq!(solution.values(), &[4_f64, 8_f64]);
//! assert_eq!(solution.objective_value(), 400_f64);
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;

pub use crate::algorithm::{OptimizationResult, Solve, SolveError};
pub use crate::algorithm::simplex::solve;
pub use crate::data::linear_program::elements::Objective;
pub use crate::data::linear_program::problem::{DimensionError, Problem};
pub use crate::data::linear_program::solution::Solution;
pub use crate::data::number_types::tolerance::Tolerance;

#[cfg(test)]
mod tests;
