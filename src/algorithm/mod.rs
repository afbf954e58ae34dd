//! # Algorithms
use num_traits::Float;
use thiserror::Error;

use crate::algorithm::simplex::strategy::pivot_rule::{MostNegative, PivotRule};
use crate::data::linear_program::problem::DimensionError;
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::tolerance::Tolerance;

pub mod simplex;

/// A problem formulation that can be solved.
pub trait Solve<F: Float> {
    /// Solve with the default strategy: Dantzig's pivot rule and exact comparisons.
    ///
    /// # Errors
    ///
    /// If the problem is unbounded.
    fn solve(&self) -> Result<Solution<F>, SolveError> {
        self.solve_with::<MostNegative>(Tolerance::exact())
    }

    /// Solve with a specific pivot rule and comparator.
    ///
    /// # Arguments
    ///
    /// * `tolerance`: Used for the optimality check and the ratio test.
    ///
    /// # Errors
    ///
    /// If the problem is unbounded.
    fn solve_with<PR: PivotRule>(&self, tolerance: Tolerance<F>) -> Result<Solution<F>, SolveError>;
}

/// Result of running the simplex method to completion.
///
/// Infeasibility is not part of this: the method starts from a basic feasible solution.
#[derive(Eq, PartialEq, Debug)]
pub enum OptimizationResult<F> {
    /// Values of the original variables at the optimum.
    FiniteOptimum(Vec<F>),
    /// No constraint limits the increase of the variable of column `column`.
    Unbounded {
        /// Index of the variable that could be increased without limit.
        column: usize,
    },
}

/// Failure to solve a linear program.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum SolveError {
    /// The problem description is inconsistent.
    #[error(transparent)]
    Dimension(#[from] DimensionError),
    /// The objective can be improved without limit.
    #[error("Unbounded problem: variable {column} can be increased without limit, check the constraints and objective function")]
    Unbounded {
        /// Index of the variable that could be increased without limit.
        column: usize,
    },
}
