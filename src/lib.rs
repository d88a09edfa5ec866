//! # A tableau simplex solver
//!
//! Linear programs are solved by hand-style simplex tableaus: the Big-M method and the dual
//! simplex method provide a starting basis, after which primal pivots are made until the tableau
//! is optimal. Degenerate optima can be explored through their alternate optimal solutions.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;

#[cfg(test)]
mod tests;
