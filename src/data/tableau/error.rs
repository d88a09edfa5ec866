//! # Malformed tableaus
//!
//! A tableau is validated once, when it is constructed. Every algorithm afterwards relies on the
//! shape being consistent.
use thiserror::Error;

/// A tableau could not be constructed from the given data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableauError {
    /// There should be at least an objective row.
    #[error("the tableau has no rows")]
    EmptyMatrix,
    /// All rows need to have the same length.
    #[error("row {row} has {found} entries, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Length of the objective row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// The rows are too short to hold the declared variables and a solution column.
    #[error("rows of length {row_length} can't hold {required} variables and a solution column")]
    TooFewColumns {
        /// Length of every row.
        row_length: usize,
        /// Number of decision and artificial variables declared.
        required: usize,
    },
    /// One basic variable is needed per row, the objective row included.
    #[error("{found} basic variables given for {rows} rows")]
    BasicVariableCount {
        /// Number of rows in the matrix.
        rows: usize,
        /// Number of basic variables given.
        found: usize,
    },
    /// The objective row has variable 0, constraint rows a variable that exists.
    #[error("basic variable {variable} of row {row} is out of range")]
    BasicVariableOutOfRange {
        /// Row of the basic variable.
        row: usize,
        /// The invalid variable index.
        variable: usize,
    },
    /// One name is needed per decision variable.
    #[error("{found} variable names given for {expected} decision variables")]
    VariableNameCount {
        /// Number of decision variables.
        expected: usize,
        /// Number of names given.
        found: usize,
    },
}
