//! # Number types
//!
//! Tableau cells are floats, extended with a symbolic "very large" constant for the artificial
//! variables of the Big-M method. Comparisons substitute a fixed value for the symbol, arithmetic
//! keeps it exact.
pub mod coefficient;
