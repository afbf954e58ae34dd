//! # JSON problem files
//!
//! A problem file holds the objective coefficients, the rows of the constraint matrix and the
//! right-hand side:
//!
//! ```json
//! {
//!     "objective": [40, 30],
//!     "constraints": [[1, 1], [2, 1]],
//!     "rhs": [12, 16],
//!     "direction": "maximize"
//! }
//! ```
//!
//! The direction is optional and defaults to `maximize`.
use serde::{Deserialize, Serialize};

use crate::data::linear_algebra::matrix::Dense;
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::problem::{DimensionError, Problem};

/// Wire type for the direction of optimization.
#[allow(missing_docs)]
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Maximize,
    Minimize,
}

impl From<Direction> for Objective {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Maximize => Objective::Maximize,
            Direction::Minimize => Objective::Minimize,
        }
    }
}

impl From<Objective> for Direction {
    fn from(objective: Objective) -> Self {
        match objective {
            Objective::Maximize => Direction::Maximize,
            Objective::Minimize => Direction::Minimize,
        }
    }
}

/// Contents of a problem file, not yet validated.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ProblemFile {
    /// Objective coefficients `c`.
    pub objective: Vec<f64>,
    /// Rows of the constraint matrix `A`.
    pub constraints: Vec<Vec<f64>>,
    /// Right-hand side `b`.
    pub rhs: Vec<f64>,
    /// Whether to maximize or minimize.
    #[serde(default)]
    pub direction: Direction,
}

impl TryFrom<ProblemFile> for Problem<f64> {
    type Error = DimensionError;

    fn try_from(file: ProblemFile) -> Result<Self, Self::Error> {
        // Without rows the number of variables follows from the objective
        let constraints = if file.constraints.is_empty() {
            Dense::new(0, file.objective.len(), Vec::new())?
        } else {
            Dense::from_rows(&file.constraints)?
        };

        Problem::new(file.objective, constraints, file.rhs, file.direction.into())
    }
}

impl From<&Problem<f64>> for ProblemFile {
    fn from(problem: &Problem<f64>) -> Self {
        Self {
            objective: problem.cost().to_vec(),
            constraints: problem.constraints().rows().map(<[f64]>::to_vec).collect(),
            rhs: problem.rhs().to_vec(),
            direction: problem.objective().into(),
        }
    }
}
