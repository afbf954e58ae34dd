//! # Pivot rules
//!
//! Strategies for choosing the column that enters the basis.
use num_traits::Float;

use crate::algorithm::simplex::tableau::Tableau;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected, a row needs to be found. This decision is made by the ratio
/// test of the tableau, independent of the strategy.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// The column to bring into the basis with its objective row entry, or `None` if no column
    /// improves the objective, in which case the current solution is optimal.
    fn select_primal_pivot_column<F: Float>(
        &mut self,
        tableau: &Tableau<F>,
    ) -> Option<(usize, F)>;
}

/// Pivot on the column with the most negative objective row entry (Dantzig's rule).
///
/// Only the columns of the original variables are considered, and ties are resolved in favor of
/// the column with the lowest index.
pub struct MostNegative;
impl PivotRule for MostNegative {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<F: Float>(
        &mut self,
        tableau: &Tableau<F>,
    ) -> Option<(usize, F)> {
        let tolerance = tableau.tolerance();

        (0..tableau.nr_structural_columns())
            .map(|column| (column, tableau.relative_cost(column)))
            .fold(None, |smallest, (column, cost)| match smallest {
                Some((_, smallest_cost)) if !tolerance.is_less(cost, smallest_cost) => smallest,
                _ => Some((column, cost)),
            })
            .filter(|&(_, cost)| tolerance.is_negative(cost))
    }
}

/// Simply pivot on the first column which has a negative objective row entry.
///
/// All columns outside of the basis are considered, slack columns included.
pub struct FirstProfitable;
impl PivotRule for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<F: Float>(
        &mut self,
        tableau: &Tableau<F>,
    ) -> Option<(usize, F)> {
        let tolerance = tableau.tolerance();

        (0..tableau.nr_columns())
            .filter(|&column| !tableau.is_in_basis(column))
            .map(|column| (column, tableau.relative_cost(column)))
            .find(|&(_, cost)| tolerance.is_negative(cost))
    }
}
