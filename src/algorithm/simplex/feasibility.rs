//! # Basic feasibility
//!
//! A tableau is in a basic feasible state when no constraint row has a negative right-hand side
//! and every basic variable has a unit column: a 1 in its own row and a 0 in every other row, the
//! objective row included. Both conditions are tested exactly.
use num_traits::{One, Zero};
use thiserror::Error;

use crate::algorithm::simplex::Pivot;
use crate::algorithm::simplex::dual;
use crate::data::number_types::coefficient::Coefficient;
use crate::data::tableau::Tableau;

/// Whether the tableau is in a basic feasible state.
pub fn is_feasible(tableau: &Tableau) -> bool {
    has_non_negative_rhs(tableau) && has_unit_basis_columns(tableau)
}

/// Whether no constraint row has a negative right-hand side.
pub fn has_non_negative_rhs(tableau: &Tableau) -> bool {
    (1..tableau.nr_rows()).all(|row| !tableau.rhs(row).is_negative())
}

/// Whether every basic variable has a unit column.
pub fn has_unit_basis_columns(tableau: &Tableau) -> bool {
    (1..tableau.nr_rows()).all(|row| {
        let variable = tableau.basic_variable(row);
        (0..tableau.nr_rows()).all(|other| {
            let expected = if other == row { Coefficient::one() } else { Coefficient::zero() };
            tableau.cell(other, variable) == expected
        })
    })
}

/// No dual simplex pivot can repair the negative right-hand sides.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
#[error("no dual simplex pivot can make the right-hand side non-negative")]
pub struct Infeasible;

/// One round of feasibility repair.
///
/// If a right-hand side is negative, a dual simplex pivot is made first. The basis columns are
/// then row reduced. A single round doesn't always reach a feasible state; callers repeat it
/// until `is_feasible` holds.
///
/// # Return value
///
/// The dual pivot that was made, if any, or `Infeasible` if one was needed but none exists. In
/// that case the tableau is left as it was.
pub fn make_feasible(tableau: &mut Tableau) -> Result<Option<Pivot>, Infeasible> {
    let pivot = if has_non_negative_rhs(tableau) {
        None
    } else {
        Some(dual::repair(tableau).ok_or(Infeasible)?)
    };

    tableau.normalize_basis_columns();
    Ok(pivot)
}
