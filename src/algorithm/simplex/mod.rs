//! # The Simplex algorithm
//!
//! This module contains all data structures and logic specific to the simplex algorithm in its
//! dense tableau form. Starting from the all-slack basis, columns are brought into the basis by
//! Gauss-Jordan elimination until no column improves the objective, or until a column is found
//! that can be increased without limit.
use std::fmt::Display;

use log::debug;
use num_traits::Float;

use crate::algorithm::{OptimizationResult, Solve, SolveError};
use crate::algorithm::simplex::strategy::pivot_rule::PivotRule;
use crate::algorithm::simplex::tableau::Tableau;
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::problem::Problem;
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::tolerance::Tolerance;

pub mod logic;
pub mod strategy;
pub mod tableau;

/// Solve `max c . x` (or `min`) subject to `A x <= b`, `x >= 0`.
///
/// The inputs are copied; the default pivot rule and exact comparisons are used.
///
/// # Arguments
///
/// * `cost`: Objective coefficients `c` of length `n`.
/// * `constraints`: The rows of `A`, each of length `n`. There should be at least one row, see
/// `Problem::from_rows`.
/// * `rhs`: Right-hand side `b` of length `m`, the number of rows. Should be nonnegative.
/// * `objective`: Whether to maximize or minimize.
///
/// # Errors
///
/// A `SolveError::Dimension` if the lengths don't match, before any work is done. A
/// `SolveError::Unbounded` if the objective is unbounded.
pub fn solve<F, R>(
    cost: &[F],
    constraints: &[R],
    rhs: &[F],
    objective: Objective,
) -> Result<Solution<F>, SolveError>
where
    F: Float + Display,
    R: AsRef<[F]>,
{
    Problem::from_rows(cost, constraints, rhs, objective)?.solve()
}

impl<F: Float + Display> Solve<F> for Problem<F> {
    fn solve_with<PR: PivotRule>(&self, tolerance: Tolerance<F>) -> Result<Solution<F>, SolveError> {
        debug!(
            "solving: {} over {} variables with {} constraints",
            self.objective(), self.nr_variables(), self.nr_constraints(),
        );

        let mut tableau = Tableau::new(self, tolerance);
        match logic::primal::<_, PR>(&mut tableau) {
            OptimizationResult::FiniteOptimum(values) => {
                let value = tableau.objective_function_value();
                // Row 0 holds c . x when maximizing and -c . x when minimizing
                let objective_value = match self.objective() {
                    Objective::Maximize => value,
                    Objective::Minimize => F::zero() - value,
                };
                Ok(Solution::new(values, objective_value))
            },
            OptimizationResult::Unbounded { column } => Err(SolveError::Unbounded { column }),
        }
    }
}
