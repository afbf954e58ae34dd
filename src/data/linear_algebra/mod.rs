//! # Linear algebra primitives
//!
//! Dense storage of the constraint matrix and of the simplex tableau.

pub mod matrix;
