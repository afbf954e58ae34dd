//! # Linear programs in standard inequality form
//!
//! A `Problem` is validated once on construction and is read-only afterwards.
use num_traits::Float;
use thiserror::Error;

use crate::data::linear_algebra::matrix::Dense;
use crate::data::linear_program::elements::Objective;
use crate::data::number_types::tolerance::Tolerance;

/// The parts of a linear program don't have compatible shapes.
///
/// Every variant names the expected and the actual length.
#[allow(missing_docs)]
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum DimensionError {
    #[error("length of cost vector c ({actual}) must match number of variables ({expected})")]
    Cost { expected: usize, actual: usize },
    #[error("length of right-hand side b ({actual}) must match number of constraints ({expected})")]
    RightHandSide { expected: usize, actual: usize },
    #[error("row {row} of constraint matrix A has length {actual}, expected {expected}")]
    Row { row: usize, expected: usize, actual: usize },
    #[error("matrix buffer has length {actual}, expected {expected}")]
    Buffer { expected: usize, actual: usize },
}

/// maximize or minimize `c . x` subject to `A x <= b`, `x >= 0`.
///
/// There are `n` variables and `m` constraints.
#[derive(Clone, Debug, PartialEq)]
pub struct Problem<F> {
    cost: Vec<F>,
    constraints: Dense<F>,
    rhs: Vec<F>,
    objective: Objective,
}

impl<F: Float> Problem<F> {
    /// Create a new linear program.
    ///
    /// # Arguments
    ///
    /// * `cost`: Objective coefficients `c`, one per column of `constraints`.
    /// * `constraints`: Constraint matrix `A` of size `m x n`.
    /// * `rhs`: Right-hand side `b`, one per row of `constraints`. Should be nonnegative for the
    /// slack basis to be feasible; this is not checked.
    /// * `objective`: Whether to maximize or minimize.
    ///
    /// # Errors
    ///
    /// If the length of `cost` or `rhs` doesn't agree with the shape of `constraints`.
    pub fn new(
        cost: Vec<F>,
        constraints: Dense<F>,
        rhs: Vec<F>,
        objective: Objective,
    ) -> Result<Self, DimensionError> {
        if cost.len() != constraints.nr_columns() {
            return Err(DimensionError::Cost {
                expected: constraints.nr_columns(),
                actual: cost.len(),
            });
        }
        if rhs.len() != constraints.nr_rows() {
            return Err(DimensionError::RightHandSide {
                expected: constraints.nr_rows(),
                actual: rhs.len(),
            });
        }

        Ok(Self { cost, constraints, rhs, objective })
    }

    /// Create a new linear program from borrowed parts, copying them.
    ///
    /// A problem without constraints can't be described this way, as the number of variables is
    /// taken from the rows. Use `Problem::new` with `Dense::new(0, n, Vec::new())` instead.
    ///
    /// # Errors
    ///
    /// If the rows are ragged or don't agree with the lengths of `cost` and `rhs`.
    pub fn from_rows<R: AsRef<[F]>>(
        cost: &[F],
        rows: &[R],
        rhs: &[F],
        objective: Objective,
    ) -> Result<Self, DimensionError> {
        let constraints = Dense::from_rows(rows)?;
        Self::new(cost.to_vec(), constraints, rhs.to_vec(), objective)
    }

    /// The same problem, optimized in the direction `objective`.
    #[must_use]
    pub fn with_objective(self, objective: Objective) -> Self {
        Self { objective, ..self }
    }

    /// Number of variables `n`.
    pub fn nr_variables(&self) -> usize {
        self.constraints.nr_columns()
    }

    /// Number of constraints `m`.
    pub fn nr_constraints(&self) -> usize {
        self.constraints.nr_rows()
    }

    /// Objective coefficients `c`.
    pub fn cost(&self) -> &[F] {
        &self.cost
    }

    /// Constraint matrix `A`.
    pub fn constraints(&self) -> &Dense<F> {
        &self.constraints
    }

    /// Right-hand side `b`.
    pub fn rhs(&self) -> &[F] {
        &self.rhs
    }

    /// Direction of optimization.
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Value of the objective function `c . x`.
    ///
    /// # Return value
    ///
    /// `None` if `x` doesn't have one value per variable.
    pub fn evaluate(&self, x: &[F]) -> Option<F> {
        if x.len() != self.nr_variables() {
            return None;
        }

        Some(self.cost.iter()
            .zip(x)
            .fold(F::zero(), |total, (&c, &x)| total + c * x))
    }

    /// Whether `x` satisfies `x >= 0` and `A x <= b`.
    ///
    /// # Arguments
    ///
    /// * `x`: Candidate solution with one value per variable.
    /// * `tolerance`: Violations within the tolerance are accepted.
    ///
    /// # Return value
    ///
    /// `false` if `x` has the wrong length, or violates any constraint.
    pub fn is_feasible(&self, x: &[F], tolerance: &Tolerance<F>) -> bool {
        if x.len() != self.nr_variables() {
            return false;
        }
        if x.iter().any(|&value| tolerance.is_negative(value)) {
            return false;
        }

        self.constraints.rows()
            .zip(&self.rhs)
            .all(|(row, &b)| {
                let lhs = row.iter()
                    .zip(x)
                    .fold(F::zero(), |total, (&a, &x)| total + a * x);
                !tolerance.is_less(b, lhs)
            })
    }
}
