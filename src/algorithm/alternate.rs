//! # Alternate optimal solutions
//!
//! At an optimum, a non-basic variable with a zero objective row entry can enter the basis without
//! changing the objective value. Every non-empty subset of those variables is tried as a sequence
//! of such pivots, each subset starting from the original optimal tableau.
//!
//! Subsets are numbered by binary counting: alternate `#k` pivots on the eligible columns selected
//! by the bits of `k`.
use num_traits::Zero;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info};

use crate::algorithm::simplex::feasibility::{is_feasible, make_feasible};
use crate::algorithm::utilities::{leaving_row, nr_non_empty_subsets, ratio_column, subset};
use crate::data::tableau::Tableau;

/// An alternate solution could not be produced.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum AlternateError {
    /// Alternate solutions only exist for optimal tableaus.
    #[error("the tableau is not optimal, so it has no alternate solutions")]
    NotOptimal,
    /// Versions are numbered from 1 up to the number of alternates.
    #[error("alternate solution #{version} doesn't exist, there are {available}")]
    OutOfRange {
        /// The requested version.
        version: usize,
        /// Number of alternate solutions.
        available: usize,
    },
    /// One of the columns of the subset has no leaving row, or feasibility was lost.
    #[error("alternate solution #{version} is infeasible: variable {variable} can't enter the basis")]
    Infeasible {
        /// The requested version.
        version: usize,
        /// Variable that couldn't be pivoted on.
        variable: usize,
    },
}

/// Non-basic variables whose objective row entry is exactly zero.
pub fn eligible_columns(tableau: &Tableau) -> Vec<usize> {
    (1..=tableau.nr_variables())
        .filter(|&variable| !tableau.is_basic(variable))
        .filter(|&variable| tableau.cell(0, variable).is_zero())
        .collect()
}

/// Number of alternate solutions: one per non-empty subset of the eligible columns.
pub fn count(tableau: &Tableau) -> usize {
    nr_non_empty_subsets(eligible_columns(tableau).len())
}

/// Whether an optimal tableau has alternate optimal solutions.
pub fn has_alternate_solutions(tableau: &Tableau) -> bool {
    tableau.is_optimal() && !eligible_columns(tableau).is_empty()
}

/// The alternate solutions of an optimal tableau.
///
/// The optimal tableau is only read; every alternate is computed on its own copy.
#[derive(Debug)]
pub struct AlternateSolutions<'a> {
    optimal: &'a Tableau,
    eligible: Vec<usize>,
}

impl<'a> AlternateSolutions<'a> {
    /// Prepare the enumeration.
    ///
    /// # Return value
    ///
    /// `NotOptimal` if the status of the tableau doesn't say it is optimal.
    pub fn new(optimal: &'a Tableau) -> Result<Self, AlternateError> {
        if !optimal.is_optimal() {
            return Err(AlternateError::NotOptimal);
        }

        let eligible = eligible_columns(optimal);
        info!(eligible = ?eligible, "enumerating alternate solutions");
        Ok(Self { optimal, eligible })
    }

    /// Number of alternate solutions.
    pub fn len(&self) -> usize {
        nr_non_empty_subsets(self.eligible.len())
    }

    /// Whether there are no alternate solutions.
    pub fn is_empty(&self) -> bool {
        self.eligible.is_empty()
    }

    /// Variables that can enter the basis without changing the objective value.
    pub fn eligible_columns(&self) -> &[usize] {
        &self.eligible
    }

    /// The variables that enter the basis, in order, for an alternate.
    ///
    /// # Arguments
    ///
    /// * `version`: Number of the alternate, from 1 to `len()`.
    pub fn subset(&self, version: usize) -> Result<Vec<usize>, AlternateError> {
        if version == 0 || version > self.len() {
            return Err(AlternateError::OutOfRange { version, available: self.len() });
        }

        Ok(subset(&self.eligible, version))
    }

    /// Compute a single alternate solution.
    ///
    /// # Arguments
    ///
    /// * `version`: Number of the alternate, from 1 to `len()`.
    ///
    /// # Return value
    ///
    /// A copy of the optimal tableau, pivoted to the alternate basis. It keeps the status flags of
    /// the optimal tableau, except that it is marked infeasible when the pivots leave a negative
    /// right-hand side.
    pub fn extract(&self, version: usize) -> Result<Tableau, AlternateError> {
        let columns = self.subset(version)?;

        let mut tableau = self.optimal.clone();
        for variable in columns {
            let Some(row) = leaving_row(&ratio_column(&tableau, variable)) else {
                debug!(version, variable, "no leaving row for alternate");
                return Err(AlternateError::Infeasible { version, variable });
            };

            debug!(version, row, entering = variable, leaving = tableau.basic_variable(row), "alternate pivot");
            tableau.set_basic_variable(row, variable);
            make_feasible(&mut tableau).map_err(|_| AlternateError::Infeasible { version, variable })?;
        }

        if !is_feasible(&tableau) {
            debug!(version, "alternate has a negative right-hand side");
            tableau.status_mut().is_feasible = false;
        }

        Ok(tableau)
    }

    /// Compute every alternate solution.
    ///
    /// # Return value
    ///
    /// One result per version, in order. A failing version doesn't affect the others.
    pub fn all(&self) -> Vec<Result<Tableau, AlternateError>> {
        #[cfg(feature = "parallel")]
        {
            (1..=self.len()).into_par_iter().map(|version| self.extract(version)).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            (1..=self.len()).map(|version| self.extract(version)).collect()
        }
    }
}
