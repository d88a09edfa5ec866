//! # Representation of feasible solutions
//!
//! Once a tableau is solved, the values of the variables can be read from it. Decision variables
//! that are not in the basis have value zero and are listed explicitly, such that a solution always
//! names every variable of the original problem.
use std::fmt::{Display, Formatter, Result as FormatResult};

/// Values of the variables at a basic solution of a tableau.
///
/// This struct would probably be used to print the optimal solution for the user.
#[derive(PartialEq, Debug, Clone)]
pub struct Solution<F> {
    /// Value of the objective function for this solution.
    objective_value: F,
    /// (variable name, solution value) tuples; decision variables first, in their original order,
    /// followed by the slack and artificial variables that are basic.
    solution_values: Vec<(String, F)>,
}

impl<F> Solution<F> {
    /// Create a new `Solution` instance.
    ///
    /// A plain constructor.
    ///
    /// # Arguments
    ///
    /// * `objective`: Objective function value.
    /// * `solution_values`: Variable names with their values.
    pub fn new(objective: F, solution_values: Vec<(String, F)>) -> Self {
        Self {
            objective_value: objective,
            solution_values,
        }
    }

    /// Value of the objective function.
    pub fn objective_value(&self) -> &F {
        &self.objective_value
    }

    /// All named values.
    pub fn solution_values(&self) -> &[(String, F)] {
        &self.solution_values
    }

    /// Look up the value of a variable by name.
    pub fn value(&self, name: &str) -> Option<&F> {
        self.solution_values.iter()
            .find(|(variable, _)| variable == name)
            .map(|(_, value)| value)
    }
}

impl<F: Display> Display for Solution<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        match f.precision() {
            Some(precision) => {
                writeln!(f, "Objective value: {:.*}", precision, self.objective_value)?;
                for (name, value) in &self.solution_values {
                    writeln!(f, "{} = {:.*}", name, precision, value)?;
                }
            },
            None => {
                writeln!(f, "Objective value: {}", self.objective_value)?;
                for (name, value) in &self.solution_values {
                    writeln!(f, "{} = {}", name, value)?;
                }
            },
        }

        Ok(())
    }
}
