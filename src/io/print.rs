//! # Presentation of tableaus
//!
//! Tableaus are rendered as fixed-width text tables, with one column per variable and a final
//! `Sol` column for the right-hand side. Every row is labelled with its basic variable.
//!
//! Values are rounded for display only.
use std::fmt::{Display, Formatter, Result as FormatResult};

use serde::Deserialize;

use crate::data::number_types::coefficient::Coefficient;
use crate::data::tableau::Tableau;

/// Number of decimals shown by default.
pub const DEFAULT_DECIMALS: usize = 2;
/// Default width of a table cell in characters.
pub const DEFAULT_WIDTH: usize = 13;

/// Layout settings of the printer.
#[derive(Deserialize, Debug, Copy, Clone, Eq, PartialEq)]
#[serde(default)]
pub struct PrintConfig {
    /// Number of decimals values are rounded to.
    pub decimals: usize,
    /// Width of a single cell.
    pub width: usize,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
            width: DEFAULT_WIDTH,
        }
    }
}

impl PrintConfig {
    fn format(&self, value: Coefficient) -> String {
        value.rounded(self.decimals).to_string()
    }
}

/// Renders a tableau as a table.
#[derive(Debug, Copy, Clone)]
pub struct TableauPrinter<'a> {
    tableau: &'a Tableau,
    config: PrintConfig,
}

impl<'a> TableauPrinter<'a> {
    /// Create a printer.
    pub fn new(tableau: &'a Tableau, config: PrintConfig) -> Self {
        Self { tableau, config }
    }
}

impl Display for TableauPrinter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        let width = self.config.width;
        let tableau = self.tableau;

        let direction = if tableau.is_max() { "MAX" } else { "MIN" };
        write!(f, "{:^width$}", direction)?;
        for variable in 1..=tableau.nr_variables() {
            write!(f, "{:^width$}", tableau.variable_name(variable))?;
        }
        writeln!(f, "{:^width$}", "Sol")?;

        for (row, values) in tableau.matrix().iter().enumerate() {
            write!(f, "{:^width$}", tableau.variable_name(tableau.basic_variable(row)))?;
            for &value in values {
                write!(f, "{:^width$}", self.config.format(value))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Renders the meaning of the current basic solution.
///
/// Lists the objective value, the value of every decision variable and the state of the slack
/// variables. Basic artificial variables are counted rather than listed.
#[derive(Debug, Copy, Clone)]
pub struct Interpretation<'a> {
    tableau: &'a Tableau,
    config: PrintConfig,
}

impl<'a> Interpretation<'a> {
    /// Create an interpretation.
    pub fn new(tableau: &'a Tableau, config: PrintConfig) -> Self {
        Self { tableau, config }
    }
}

impl Display for Interpretation<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        let width = self.config.width;
        let tableau = self.tableau;
        let solution = tableau.interpret();

        let direction = if tableau.is_max() { "Maximum" } else { "Minimum" };
        writeln!(
            f, "{} Value for Objective Function = {}",
            direction, self.config.format(*solution.objective_value()),
        )?;

        writeln!(f)?;
        writeln!(f, "Values for Decision Variables :")?;
        for (name, value) in solution.solution_values().iter().take(tableau.n_decision_vars()) {
            writeln!(f, "{:^width$} = {}", name, self.config.format(*value))?;
        }

        let nr_artificials_in_basis = (1..tableau.nr_rows())
            .filter(|&row| tableau.is_artificial(tableau.basic_variable(row)))
            .count();

        writeln!(f)?;
        writeln!(f, "Surplus & Slack variables")?;
        for slack in 1..=tableau.n_slack_vars() {
            let variable = tableau.n_decision_vars() + slack;
            let label = format!("Constraint #{} Surplus", slack);
            match (1..tableau.nr_rows()).find(|&row| tableau.basic_variable(row) == variable) {
                Some(row) => writeln!(
                    f, "{:^double$} = {} units",
                    label, self.config.format(tableau.rhs(row)), double = 2 * width,
                )?,
                None if nr_artificials_in_basis == 0 => writeln!(
                    f, "{:^double$} : Satisfied at Boundary", label, double = 2 * width,
                )?,
                None => {},
            }
        }

        if nr_artificials_in_basis > 0 {
            writeln!(f)?;
            writeln!(f, "There are {} Artificial variable(s) to be handled", nr_artificials_in_basis)?;
        }

        Ok(())
    }
}

/// Describe a change of basis.
///
/// # Arguments
///
/// * `tableau`: Tableau after the change, used for the variable names.
/// * `entering`: Variable that became basic.
/// * `leaving`: Variable that was basic before.
pub fn entering_leaving(tableau: &Tableau, entering: usize, leaving: usize) -> String {
    format!(
        "Taking {} = 0; Entering {} as a new basic variable;",
        tableau.variable_name(leaving), tableau.variable_name(entering),
    )
}

/// A line of `=` spanning the width of a printed table.
pub fn separator(tableau: &Tableau, config: PrintConfig) -> String {
    "=".repeat((tableau.nr_variables() + 2) * config.width)
}
