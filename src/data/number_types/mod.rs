//! # Number types
//!
//! The algorithms are generic over floating point types through `num_traits::Float`. This module
//! defines how values of those types are compared.
pub mod tolerance;
