//! # Storing of linear programs in memory
//!
//! This module provides the data structures used to represent linear programs and their simplex
//! tableaus in memory. Algorithms operating on them live in `algorithm`.

pub mod linear_program;
pub mod number_types;
pub mod tableau;
