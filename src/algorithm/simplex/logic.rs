//! # High-level Simplex logic
//!
//! High level methods implementing the simplex algorithm. The details of this logic are hidden away
//! mostly in the `Tableau` type.
use std::fmt::Display;

use log::{debug, trace};
use num_traits::Float;

use crate::algorithm::OptimizationResult;
use crate::algorithm::simplex::strategy::pivot_rule::PivotRule;
use crate::algorithm::simplex::tableau::Tableau;

/// Reduces the cost of the basic feasible solution to the minimum.
///
/// While calling this method, the tableau should be in a basic feasible solution state: all
/// constraint values need to be nonnegative. This is the case for a tableau fresh from
/// `Tableau::new` if the right-hand side of the problem is nonnegative. It is not checked, and no
/// measures against cycling are taken.
///
/// # Return value
///
/// An `OptimizationResult` indicating whether or not the problem has a finite optimum. In the case
/// of a finite optimum, the tableau is left in its optimal state.
pub(crate) fn primal<F, PR>(tableau: &mut Tableau<F>) -> OptimizationResult<F>
where
    F: Float + Display,
    PR: PivotRule,
{
    let mut rule = PR::new();
    let mut nr_pivots = 0_usize;
    trace!("initial tableau\n{}", tableau);

    loop {
        match rule.select_primal_pivot_column(tableau) {
            Some((column_index, cost)) => match tableau.select_primal_pivot_row(column_index) {
                Some(row_index) => {
                    let leaving_column = tableau.bring_into_basis(column_index, row_index);
                    nr_pivots += 1;
                    debug!(
                        "pivot {}: column {} (cost {}) enters in row {}, column {} leaves, value {}",
                        nr_pivots, column_index, cost, row_index, leaving_column,
                        tableau.objective_function_value(),
                    );
                    trace!("\n{}", tableau);
                },
                None => {
                    debug!("unbounded in the direction of column {} after {} pivots", column_index, nr_pivots);
                    break OptimizationResult::Unbounded { column: column_index };
                },
            },
            None => {
                debug!("optimal after {} pivots", nr_pivots);
                break OptimizationResult::FiniteOptimum(tableau.current_bfs());
            },
        }
    }
}
