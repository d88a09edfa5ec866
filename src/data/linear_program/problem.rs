//! # Linear programs in terms of named variables
//!
//! Data structure for building a problem one constraint at a time, and its conversion into an
//! initial simplex tableau.
//!
//! All variables are nonnegative. Two ways of finding a starting basis are supported:
//!
//! * With the Big-M method, `>=` and `=` constraints receive an artificial variable that starts in
//!   the basis and is penalized in the objective by the symbol `M`.
//! * With the dual simplex method, every constraint is rewritten as a `<=` constraint with a slack
//!   variable in the basis, leaving negative right-hand sides for the dual simplex repair.
use std::collections::BTreeSet;

use num_traits::Zero;

use crate::data::linear_program::elements::{ConstraintType, Objective};
use crate::data::number_types::coefficient::Coefficient;
use crate::data::tableau::{Tableau, TableauError};

/// How the starting basis of the tableau is found.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum InitialBasis {
    #[default]
    BigM,
    DualSimplex,
}

/// A linear constraint `<a, x> (<=|=|>=) b`.
#[derive(Clone, Debug, PartialEq)]
pub struct Constraint {
    /// Variable names with their coefficients. A name may appear more than once, in which case the
    /// coefficients are added.
    pub terms: Vec<(String, f64)>,
    /// Relation between the left- and right-hand side.
    pub relation: ConstraintType,
    /// Right-hand side.
    pub rhs: f64,
}

impl Constraint {
    /// Create a new constraint.
    pub fn new(terms: Vec<(String, f64)>, relation: ConstraintType, rhs: f64) -> Self {
        Self { terms, relation, rhs }
    }

    /// Coefficient of a variable, zero if it doesn't appear.
    pub fn coefficient(&self, name: &str) -> f64 {
        coefficient(&self.terms, name)
    }

    /// The same constraint with both sides multiplied by `-1`.
    #[must_use]
    pub fn negated(&self) -> Self {
        Self {
            terms: self.terms.iter().map(|(name, value)| (name.clone(), -value)).collect(),
            relation: -self.relation,
            rhs: -self.rhs,
        }
    }
}

fn coefficient(terms: &[(String, f64)], name: &str) -> f64 {
    terms.iter()
        .filter(|(variable, _)| variable == name)
        .map(|(_, value)| value)
        .sum()
}

/// A linear program over named, nonnegative variables.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinearProblem {
    objective: Objective,
    /// Objective function coefficients.
    cost: Vec<(String, f64)>,
    constraints: Vec<Constraint>,
    initial_basis: InitialBasis,
}

impl LinearProblem {
    /// Create an empty problem.
    pub fn new(objective: Objective) -> Self {
        Self { objective, ..Self::default() }
    }

    /// Replace the objective function.
    pub fn set_objective(&mut self, cost: Vec<(String, f64)>) {
        self.cost = cost;
    }

    /// Add a constraint.
    pub fn add_constraint(&mut self, constraint: Constraint) {
        self.constraints.push(constraint);
    }

    /// Standardize with the dual simplex method.
    pub fn use_dual_simplex(&mut self) {
        self.initial_basis = InitialBasis::DualSimplex;
    }

    /// Standardize with the Big-M method, the default.
    pub fn use_big_m(&mut self) {
        self.initial_basis = InitialBasis::BigM;
    }

    /// Direction of optimization.
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// All constraints, in the order in which they were added.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Method used for the starting basis.
    pub fn initial_basis(&self) -> InitialBasis {
        self.initial_basis
    }

    /// Names of all variables that appear in the objective or a constraint, sorted.
    pub fn variables(&self) -> Vec<String> {
        self.cost.iter()
            .chain(self.constraints.iter().flat_map(|constraint| &constraint.terms))
            .map(|(name, _)| name.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Create the initial tableau.
    ///
    /// Decision variables are ordered by name and come first, followed by the slack and surplus
    /// variables in constraint order and the artificial variables in constraint order. The
    /// objective row holds the negated costs, such that the right-hand side of that row is the
    /// objective value.
    pub fn standardize(&self) -> Result<Tableau, TableauError> {
        match self.initial_basis {
            InitialBasis::BigM => self.standardize_big_m(),
            InitialBasis::DualSimplex => self.standardize_dual_simplex(),
        }
    }

    fn standardize_big_m(&self) -> Result<Tableau, TableauError> {
        let variables = self.variables();
        let constraints = self.constraints.iter()
            .map(|constraint| if constraint.rhs < 0_f64 { constraint.negated() } else { constraint.clone() })
            .collect::<Vec<_>>();

        let nr_slacks = constraints.iter()
            .filter(|constraint| constraint.relation != ConstraintType::Equal)
            .count();
        let nr_artificials = constraints.iter()
            .filter(|constraint| constraint.relation != ConstraintType::Less)
            .count();
        let first_slack = variables.len();
        let first_artificial = first_slack + nr_slacks;
        let row_length = first_artificial + nr_artificials + 1;

        let mut objective_row = self.objective_row(&variables, row_length);
        let penalty = match self.objective {
            Objective::Maximize => Coefficient::M,
            Objective::Minimize => -Coefficient::M,
        };
        for value in &mut objective_row[first_artificial..row_length - 1] {
            *value = penalty;
        }

        let mut matrix = vec![objective_row];
        let mut basic_vars = vec![0];
        let (mut slack, mut artificial) = (first_slack, first_artificial);
        for constraint in &constraints {
            let mut row = constraint_row(constraint, &variables, row_length);
            match constraint.relation {
                ConstraintType::Less => {
                    row[slack] = Coefficient::from(1);
                    basic_vars.push(slack + 1);
                    slack += 1;
                },
                ConstraintType::Greater => {
                    row[slack] = Coefficient::from(-1);
                    row[artificial] = Coefficient::from(1);
                    basic_vars.push(artificial + 1);
                    slack += 1;
                    artificial += 1;
                },
                ConstraintType::Equal => {
                    row[artificial] = Coefficient::from(1);
                    basic_vars.push(artificial + 1);
                    artificial += 1;
                },
            }
            matrix.push(row);
        }

        Tableau::new(matrix, basic_vars, variables.len(), nr_artificials, self.objective)?
            .with_variable_names(variables)
    }

    fn standardize_dual_simplex(&self) -> Result<Tableau, TableauError> {
        let variables = self.variables();
        let constraints = self.constraints.iter()
            .flat_map(|constraint| match constraint.relation {
                ConstraintType::Less => vec![constraint.clone()],
                ConstraintType::Greater => vec![constraint.negated()],
                ConstraintType::Equal => {
                    let less = Constraint { relation: ConstraintType::Less, ..constraint.clone() };
                    let greater = Constraint { relation: ConstraintType::Greater, ..constraint.clone() };
                    vec![less, greater.negated()]
                },
            })
            .collect::<Vec<_>>();

        let first_slack = variables.len();
        let row_length = first_slack + constraints.len() + 1;

        let mut matrix = vec![self.objective_row(&variables, row_length)];
        let mut basic_vars = vec![0];
        for (i, constraint) in constraints.iter().enumerate() {
            let mut row = constraint_row(constraint, &variables, row_length);
            row[first_slack + i] = Coefficient::from(1);
            basic_vars.push(first_slack + i + 1);
            matrix.push(row);
        }

        Tableau::new(matrix, basic_vars, variables.len(), 0, self.objective)?
            .with_variable_names(variables)
    }

    fn objective_row(&self, variables: &[String], row_length: usize) -> Vec<Coefficient> {
        let mut row = vec![Coefficient::zero(); row_length];
        for (value, name) in row.iter_mut().zip(variables) {
            *value = Coefficient::from(-coefficient(&self.cost, name));
        }
        row
    }
}

/// Decision variable coefficients and right-hand side of a constraint, zero elsewhere.
fn constraint_row(constraint: &Constraint, variables: &[String], row_length: usize) -> Vec<Coefficient> {
    let mut row = vec![Coefficient::zero(); row_length];
    for (value, name) in row.iter_mut().zip(variables) {
        *value = Coefficient::from(constraint.coefficient(name));
    }
    row[row_length - 1] = Coefficient::from(constraint.rhs);
    row
}
