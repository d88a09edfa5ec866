//! # Representing linear programs
//!
//! A linear program is written as an objective function over named variables and a list of
//! constraints. Before it can be solved, it is standardized into a simplex tableau.
pub mod elements;
pub mod problem;
pub mod solution;
