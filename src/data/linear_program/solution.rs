//! # Representation of optimal solutions
//!
//! Once a linear program is solved, the values of the structural variables are collected together
//! with the objective value. Slack variables are not part of the solution.
use std::fmt;
use std::fmt::Display;

use itertools::Itertools;

/// Values `x` of all variables of the original problem and the objective value `z = c . x`.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<F> {
    values: Vec<F>,
    objective_value: F,
}

impl<F> Solution<F> {
    /// Create a new `Solution` instance.
    ///
    /// A plain constructor.
    pub fn new(values: Vec<F>, objective_value: F) -> Self {
        Self { values, objective_value }
    }

    /// One value per variable of the problem, in the order of the columns of `A`.
    pub fn values(&self) -> &[F] {
        &self.values
    }

    /// Value of the objective function at this solution.
    pub fn objective_value(&self) -> F
    where
        F: Copy,
    {
        self.objective_value
    }

    /// Split into `(x, z)`.
    pub fn into_parts(self) -> (Vec<F>, F) {
        (self.values, self.objective_value)
    }
}

impl<F: Display> Display for Solution<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "x = [{}]", self.values.iter().join(", "))?;
        write!(f, "z = {}", self.objective_value)
    }
}
