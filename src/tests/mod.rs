//! # Integration tests that require a look inside the crate.
//!
//! Convention for function names:
//!
//! * `fn problem()`
//! * `fn tableau_form()`
//! * `fn tableau_form_first_pivot()`
//! * `fn tableau_form_optimal()`
//! * `fn optimal_values()`
//! * `fn optimal_basis()`
