//! # Dense simplex tableau
//!
//! The tableau holds the objective row and all constraint rows, including the slack columns and
//! the right-hand side, in one buffer. It is built once per solve call and changed in place by
//! every pivot.
use std::fmt;
use std::fmt::Display;
use std::mem;

use itertools::Itertools;
use num_traits::Float;

use crate::data::linear_algebra::matrix::Dense;
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::problem::Problem;
use crate::data::number_types::tolerance::Tolerance;

/// Tableau of size `(m + 1) x (n + m + 1)` together with the basis.
///
/// Row `0` of the buffer is the objective row, rows `1` through `m` are the constraints. Columns
/// `0..n` are the variables of the problem, columns `n..n + m` the slack variables and the last
/// column is the right-hand side.
///
/// Row indices in the public methods refer to constraints, so they range over `0..m`; the
/// objective row is never a pivot row.
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau<F> {
    matrix: Dense<F>,
    /// Maps constraint `i` to the column that is basic in that row.
    basis_columns: Vec<usize>,
    nr_structural_columns: usize,
    tolerance: Tolerance<F>,
}

impl<F: Float> Tableau<F> {
    /// Create the initial tableau, with all slack variables in the basis.
    ///
    /// The objective row contains `-c` when maximizing and `c` when minimizing, such that the
    /// algorithm always minimizes that row.
    ///
    /// # Arguments
    ///
    /// * `problem`: Is copied into the tableau.
    /// * `tolerance`: Used for all comparisons made while pivoting.
    pub fn new(problem: &Problem<F>, tolerance: Tolerance<F>) -> Self {
        let m = problem.nr_constraints();
        let n = problem.nr_variables();
        let rhs_column = n + m;

        let mut matrix = Dense::zeros(m + 1, n + m + 1);

        let sign = match problem.objective() {
            Objective::Maximize => -F::one(),
            Objective::Minimize => F::one(),
        };
        for (j, &cost) in problem.cost().iter().enumerate() {
            matrix.set_value(0, j, sign * cost);
        }

        for (i, (row, &b)) in problem.constraints().rows().zip(problem.rhs()).enumerate() {
            for (j, &value) in row.iter().enumerate() {
                matrix.set_value(i + 1, j, value);
            }
            matrix.set_value(i + 1, n + i, F::one());
            matrix.set_value(i + 1, rhs_column, b);
        }

        Self {
            matrix,
            basis_columns: (n..n + m).collect(),
            nr_structural_columns: n,
            tolerance,
        }
    }

    /// Number of constraint rows `m`.
    pub fn nr_rows(&self) -> usize {
        self.basis_columns.len()
    }

    /// Number of variable columns `n + m`, the right-hand side excluded.
    pub fn nr_columns(&self) -> usize {
        self.nr_structural_columns + self.nr_rows()
    }

    /// Number of variables of the original problem `n`.
    ///
    /// These are the columns `0..n`; only they are considered as pivot columns.
    pub fn nr_structural_columns(&self) -> usize {
        self.nr_structural_columns
    }

    /// Comparator used while pivoting.
    pub fn tolerance(&self) -> &Tolerance<F> {
        &self.tolerance
    }

    /// Current entry of `column` in the objective row.
    pub fn relative_cost(&self, column: usize) -> F {
        debug_assert!(column < self.nr_columns());

        self.matrix.get_value(0, column)
    }

    /// Current entry of `column` in constraint `row`.
    pub fn element(&self, row: usize, column: usize) -> F {
        debug_assert!(row < self.nr_rows());
        debug_assert!(column < self.nr_columns());

        self.matrix.get_value(row + 1, column)
    }

    /// Current right-hand side of constraint `row`.
    pub fn constraint_value(&self, row: usize) -> F {
        debug_assert!(row < self.nr_rows());

        self.matrix.get_value(row + 1, self.nr_columns())
    }

    /// Whether `column` is currently basic in some row.
    pub fn is_in_basis(&self, column: usize) -> bool {
        self.basis_columns.contains(&column)
    }

    /// For each constraint row, the column that is basic in it.
    pub fn basis_columns(&self) -> &[usize] {
        &self.basis_columns
    }

    /// The full buffer, objective row and right-hand side column included.
    pub fn matrix(&self) -> &Dense<F> {
        &self.matrix
    }

    /// Ratio test: find the constraint limiting the increase of the entering variable the most.
    ///
    /// Only rows with a positive entry in `column` are candidates. Of those, the row with the
    /// smallest `constraint value / entry` is chosen; ties go to the lowest row index.
    ///
    /// # Return value
    ///
    /// The row index in `0..m`, or `None` if no row is a candidate, in which case the problem is
    /// unbounded in the direction of this column.
    pub fn select_primal_pivot_row(&self, column: usize) -> Option<usize> {
        debug_assert!(column < self.nr_columns());

        // (chosen row, minimum ratio)
        let mut min_values: Option<(usize, F)> = None;
        for row in 0..self.nr_rows() {
            let xij = self.element(row, column);
            if self.tolerance.is_positive(xij) {
                let ratio = self.constraint_value(row) / xij;
                match min_values {
                    Some((_, min_ratio)) if !self.tolerance.is_less(ratio, min_ratio) => {},
                    _ => min_values = Some((row, ratio)),
                }
            }
        }

        min_values.map(|(min_index, _)| min_index)
    }

    /// Pivot: bring `column` into the basis in constraint `row`.
    ///
    /// The pivot row is divided by the pivot entry, after which that multiple of it is subtracted
    /// from all other rows, the objective row included, such that `column` becomes a unit vector.
    ///
    /// # Arguments
    ///
    /// * `column`: Column index in `0..n + m`. Is not yet in the basis.
    /// * `row`: Constraint index in `0..m`, with a nonzero entry in `column`.
    ///
    /// # Return value
    ///
    /// The index of the column that left the basis.
    pub fn bring_into_basis(&mut self, column: usize, row: usize) -> usize {
        debug_assert!(column < self.nr_columns());
        debug_assert!(row < self.nr_rows());
        debug_assert!(!self.is_in_basis(column));

        let pivot_row = row + 1;
        let pivot_value = self.matrix.get_value(pivot_row, column);
        debug_assert!(pivot_value != F::zero());

        self.matrix.divide_row(pivot_row, pivot_value);
        self.matrix.set_value(pivot_row, column, F::one());

        for other in (0..self.matrix.nr_rows()).filter(|&other| other != pivot_row) {
            let factor = self.matrix.get_value(other, column);
            if factor != F::zero() {
                self.matrix.mul_add_rows(pivot_row, other, -factor);
                self.matrix.set_value(other, column, F::zero());
            }
        }

        mem::replace(&mut self.basis_columns[row], column)
    }

    /// Values of the variables of the original problem in the current basic solution.
    ///
    /// Nonbasic variables are zero. Basic slack variables are not part of the result.
    pub fn current_bfs(&self) -> Vec<F> {
        let mut values = vec![F::zero(); self.nr_structural_columns];
        for (row, &column) in self.basis_columns.iter().enumerate() {
            if column < self.nr_structural_columns {
                values[column] = self.constraint_value(row);
            }
        }

        values
    }

    /// Right-hand side of the objective row.
    ///
    /// # Note
    ///
    /// This is the value of the minimized objective row: `c . x` when the problem is maximized,
    /// `-c . x` when it is minimized.
    pub fn objective_function_value(&self) -> F {
        self.matrix.get_value(0, self.nr_columns())
    }
}

impl<F: Float + Display> Display for Tableau<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "basis: [{}]", self.basis_columns.iter().join(", "))?;
        write!(f, "{}", self.matrix)
    }
}
