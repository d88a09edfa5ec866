//! # Artificial variables at the optimum
//!
//! An optimum of the Big-M problem only solves the original problem if no artificial variable is
//! left in the basis.
use crate::data::tableau::Tableau;

/// Whether any constraint row has an artificial basic variable.
pub fn has_artificial_in_basis(tableau: &Tableau) -> bool {
    tableau.basic_vars()[1..].iter().any(|&variable| tableau.is_artificial(variable))
}
