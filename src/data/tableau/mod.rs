//! # Simplex tableaus
//!
//! A dense tableau as it would be written down by hand. Row 0 is the objective row, rows `1..`
//! are the constraint rows. The last entry of every row is its right-hand side ("solution")
//! value.
//!
//! Variables are numbered from 1: first the decision variables, then the slack and surplus
//! variables and finally the artificial variables. Variable `v` lives in column `v - 1`. Every row
//! has a basic variable; the objective row has the objective itself, numbered 0.
use num_traits::{One, Zero};
use tracing::{trace, warn};

use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::coefficient::Coefficient;
pub use crate::data::tableau::error::TableauError;

pub mod error;

/// Outcome flags of a solve.
///
/// Only the solver changes these; a freshly constructed tableau is assumed feasible and not yet
/// optimal.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Status {
    /// Whether a feasible basic solution exists.
    pub is_feasible: bool,
    /// Whether the optimum can be reached by pivoting from the current basis.
    pub is_optimal_reachable: bool,
    /// Whether the current basic solution is optimal.
    pub is_optimal: bool,
    /// Number of alternate optimal bases that can be tried.
    pub num_alternates: usize,
}

impl Default for Status {
    fn default() -> Self {
        Self {
            is_feasible: true,
            is_optimal_reachable: true,
            is_optimal: false,
            num_alternates: 0,
        }
    }
}

/// A simplex tableau with its basis and the partition of its variables.
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau {
    /// Objective row followed by the constraint rows, each ending with the right-hand side.
    matrix: Vec<Vec<Coefficient>>,
    /// For each row, the variable that is basic in it. Always `0` for the objective row.
    basic_vars: Vec<usize>,
    n_decision_vars: usize,
    n_slack_vars: usize,
    n_artificials: usize,
    objective: Objective,
    /// One name per decision variable.
    variable_names: Vec<String>,
    status: Status,
}

impl Tableau {
    /// Create a new tableau.
    ///
    /// The number of slack variables follows from the row length.
    ///
    /// # Arguments
    ///
    /// * `matrix`: Objective row and constraint rows, each ending with the right-hand side value.
    /// * `basic_vars`: Basic variable per row, `0` for the objective row.
    /// * `n_decision_vars`: Number of decision variables, numbered `1..=n_decision_vars`.
    /// * `n_artificials`: Number of artificial variables, which are numbered last.
    /// * `objective`: Direction of optimization.
    ///
    /// # Return value
    ///
    /// The tableau with default names `X1, X2, ...` and default status, or an error describing
    /// why the data doesn't describe a tableau.
    pub fn new(
        matrix: Vec<Vec<Coefficient>>,
        basic_vars: Vec<usize>,
        n_decision_vars: usize,
        n_artificials: usize,
        objective: Objective,
    ) -> Result<Self, TableauError> {
        let row_length = matrix.first().map(Vec::len).ok_or(TableauError::EmptyMatrix)?;
        if let Some((row, found)) = matrix.iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, length)| length != row_length) {
            return Err(TableauError::RaggedRow { row, expected: row_length, found });
        }

        let required = n_decision_vars + n_artificials;
        if row_length < required + 1 || row_length < 2 {
            return Err(TableauError::TooFewColumns { row_length, required });
        }
        let n_variables = row_length - 1;

        if basic_vars.len() != matrix.len() {
            return Err(TableauError::BasicVariableCount { rows: matrix.len(), found: basic_vars.len() });
        }
        if let Some((row, &variable)) = basic_vars.iter()
            .enumerate()
            .find(|&(row, &variable)| if row == 0 { variable != 0 } else { variable == 0 || variable > n_variables }) {
            return Err(TableauError::BasicVariableOutOfRange { row, variable });
        }

        Ok(Self {
            matrix,
            basic_vars,
            n_decision_vars,
            n_slack_vars: n_variables - required,
            n_artificials,
            objective,
            variable_names: (1..=n_decision_vars).map(|i| format!("X{}", i)).collect(),
            status: Status::default(),
        })
    }

    /// Replace the default decision variable names.
    ///
    /// # Arguments
    ///
    /// * `names`: One name per decision variable, in column order.
    pub fn with_variable_names(mut self, names: Vec<String>) -> Result<Self, TableauError> {
        if names.len() != self.n_decision_vars {
            return Err(TableauError::VariableNameCount { expected: self.n_decision_vars, found: names.len() });
        }

        self.variable_names = names;
        Ok(self)
    }

    /// Replace the status flags, for example when resuming from a stored tableau.
    #[must_use]
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// All rows, the objective row first.
    pub fn matrix(&self) -> &[Vec<Coefficient>] {
        &self.matrix
    }

    /// A single row, including its right-hand side.
    pub fn row(&self, row: usize) -> &[Coefficient] {
        debug_assert!(row < self.nr_rows());

        &self.matrix[row]
    }

    /// The objective row without the objective value.
    pub fn objective_row(&self) -> &[Coefficient] {
        &self.matrix[0][..self.nr_variables()]
    }

    /// Coefficient of a variable in a row.
    ///
    /// # Arguments
    ///
    /// * `row`: Row index, `0` being the objective row.
    /// * `variable`: Variable number, starting at 1.
    pub fn cell(&self, row: usize, variable: usize) -> Coefficient {
        debug_assert!(row < self.nr_rows());
        debug_assert!((1..=self.nr_variables()).contains(&variable));

        self.matrix[row][variable - 1]
    }

    /// Right-hand side value of a row.
    pub fn rhs(&self, row: usize) -> Coefficient {
        debug_assert!(row < self.nr_rows());

        self.matrix[row][self.nr_variables()]
    }

    /// Value of the objective function at the current basic solution.
    pub fn objective_value(&self) -> Coefficient {
        self.rhs(0)
    }

    /// Basic variable of each row.
    pub fn basic_vars(&self) -> &[usize] {
        &self.basic_vars
    }

    /// Basic variable of a single row.
    pub fn basic_variable(&self, row: usize) -> usize {
        self.basic_vars[row]
    }

    /// Whether a variable is in the basis of any constraint row.
    pub fn is_basic(&self, variable: usize) -> bool {
        self.basic_vars[1..].contains(&variable)
    }

    /// Whether a variable is one of the artificial variables of the Big-M method.
    pub fn is_artificial(&self, variable: usize) -> bool {
        variable > self.n_decision_vars + self.n_slack_vars
    }

    /// Number of rows, the objective row included.
    pub fn nr_rows(&self) -> usize {
        self.matrix.len()
    }

    /// Number of constraint rows.
    pub fn nr_constraints(&self) -> usize {
        self.nr_rows() - 1
    }

    /// Number of variables, which is the row length without the right-hand side.
    pub fn nr_variables(&self) -> usize {
        self.n_decision_vars + self.n_slack_vars + self.n_artificials
    }

    /// Number of decision variables.
    pub fn n_decision_vars(&self) -> usize {
        self.n_decision_vars
    }

    /// Number of slack and surplus variables.
    pub fn n_slack_vars(&self) -> usize {
        self.n_slack_vars
    }

    /// Number of artificial variables.
    pub fn n_artificials(&self) -> usize {
        self.n_artificials
    }

    /// Direction of optimization.
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Whether the objective is maximized.
    pub fn is_max(&self) -> bool {
        self.objective.is_max()
    }

    /// Outcome flags of the last solve.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Whether a feasible basic solution exists.
    pub fn is_feasible(&self) -> bool {
        self.status.is_feasible
    }

    /// Whether the optimum can be reached from the current basis.
    pub fn is_optimal_reachable(&self) -> bool {
        self.status.is_optimal_reachable
    }

    /// Whether the current basic solution is optimal.
    pub fn is_optimal(&self) -> bool {
        self.status.is_optimal
    }

    /// Number of alternate optimal bases.
    pub fn num_alternates(&self) -> usize {
        self.status.num_alternates
    }

    pub(crate) fn status_mut(&mut self) -> &mut Status {
        &mut self.status
    }

    /// Names of the decision variables.
    pub fn variable_names(&self) -> &[String] {
        &self.variable_names
    }

    /// Display name of a variable.
    ///
    /// Decision variables have their given names, slacks are called `S1, S2, ...` and artificial
    /// variables `A1, A2, ...`. Variable 0 is the objective, `P`.
    pub fn variable_name(&self, variable: usize) -> String {
        debug_assert!(variable <= self.nr_variables());

        if variable == 0 {
            "P".to_string()
        } else if variable <= self.n_decision_vars {
            self.variable_names[variable - 1].clone()
        } else if variable <= self.n_decision_vars + self.n_slack_vars {
            format!("S{}", variable - self.n_decision_vars)
        } else {
            format!("A{}", variable - self.n_decision_vars - self.n_slack_vars)
        }
    }

    /// Make a variable basic in a constraint row.
    ///
    /// Only the bookkeeping changes; `normalize_basis_columns` brings the matrix in line.
    pub(crate) fn set_basic_variable(&mut self, row: usize, variable: usize) {
        debug_assert!((1..self.nr_rows()).contains(&row));
        debug_assert!((1..=self.nr_variables()).contains(&variable));

        self.basic_vars[row] = variable;
    }

    /// Row reduce such that each basic variable has a unit column.
    ///
    /// Rows are processed from top to bottom. A row is first divided by the coefficient of its
    /// basic variable, after which that variable is eliminated from all other rows, the objective
    /// row included. The pivot column entries are set exactly, and negligible residue of the row
    /// operations is snapped to zero.
    ///
    /// A basic variable with a zero coefficient in its own row can't be pivoted on; that row is
    /// skipped.
    pub fn normalize_basis_columns(&mut self) {
        for row in 1..self.nr_rows() {
            let variable = self.basic_vars[row];
            let column = variable - 1;

            let pivot = self.matrix[row][column];
            if pivot.is_zero() {
                warn!(row, variable, "basic variable has a zero coefficient in its row, skipping");
                continue;
            }

            if !pivot.is_one() {
                for value in &mut self.matrix[row] {
                    *value = (*value / pivot).cleaned();
                }
                self.matrix[row][column] = Coefficient::one();
            }

            let pivot_row = self.matrix[row].clone();
            for (other, other_row) in self.matrix.iter_mut().enumerate() {
                if other == row || other_row[column].is_zero() {
                    continue;
                }

                let factor = other_row[column];
                trace!(row = other, pivot_row = row, %factor, "eliminating");
                for (value, &pivot_value) in other_row.iter_mut().zip(&pivot_row) {
                    *value = (*value - factor * pivot_value).cleaned();
                }
                other_row[column] = Coefficient::zero();
            }
        }
    }

    /// Read the current basic solution.
    ///
    /// # Return value
    ///
    /// The objective value, every decision variable in column order and the basic slack and
    /// artificial variables in row order.
    pub fn interpret(&self) -> Solution<Coefficient> {
        let value_of = |variable: usize| {
            (1..self.nr_rows())
                .find(|&row| self.basic_vars[row] == variable)
                .map_or_else(Coefficient::zero, |row| self.rhs(row))
        };

        let decision = (1..=self.n_decision_vars)
            .map(|variable| (self.variable_name(variable), value_of(variable)));
        let other_basic = (1..self.nr_rows())
            .map(|row| self.basic_vars[row])
            .filter(|&variable| variable > self.n_decision_vars)
            .map(|variable| (self.variable_name(variable), value_of(variable)));

        Solution::new(self.objective_value(), decision.chain(other_basic).collect())
    }
}
