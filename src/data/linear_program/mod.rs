//! # Representing linear programs
//!
//! Linear programs in this crate are in standard inequality form: `A x <= b`, `x >= 0` with an
//! objective to maximize or minimize.
pub mod elements;
pub mod problem;
pub mod solution;
