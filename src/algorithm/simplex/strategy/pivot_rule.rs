//! # Pivot rules
//!
//! Strategies for choosing the entering variable of a primal pivot. The leaving variable is
//! decided by the ratio test, independent of the strategy.
use itertools::Itertools;
use tracing::debug;

use crate::algorithm::simplex::Pivot;
use crate::algorithm::utilities::{leaving_row, ratio_column};
use crate::data::tableau::Tableau;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Columns for which the ratio test finds no leaving row are blocked, and the rule is asked again
/// while excluding them.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Arguments
    ///
    /// * `tableau`: Tableau in a basic feasible state.
    /// * `blocked`: Variables that may not be selected.
    ///
    /// # Return value
    ///
    /// A variable whose objective row entry shows that it would improve the objective, if any.
    fn select_primal_pivot_column(&mut self, tableau: &Tableau, blocked: &[usize]) -> Option<usize>;
}

/// Objective row entries, Big-M substituted, with signs such that negative entries improve the
/// objective.
fn relative_costs(tableau: &Tableau) -> Vec<f64> {
    let sign = if tableau.is_max() { 1_f64 } else { -1_f64 };
    tableau.objective_row().iter()
        .map(|value| sign * value.evaluate())
        .collect()
}

/// Pivot on the column with the most negative relative cost, the leftmost one among equals.
pub struct MostNegative;
impl PivotRule for MostNegative {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau, blocked: &[usize]) -> Option<usize> {
        let costs = relative_costs(tableau);
        if costs.iter().filter(|&&cost| cost < 0_f64).count() <= blocked.len() {
            return None;
        }

        (1..=costs.len())
            .sorted_by(|&left, &right| costs[left - 1].total_cmp(&costs[right - 1]))
            .find(|variable| !blocked.contains(variable))
    }
}

/// Simply pivot on the first column, which has a negative relative cost.
pub struct FirstProfitable;
impl PivotRule for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau, blocked: &[usize]) -> Option<usize> {
        relative_costs(tableau).into_iter()
            .zip(1..)
            .find(|&(cost, variable)| cost < 0_f64 && !blocked.contains(&variable))
            .map(|(_, variable)| variable)
    }
}

/// Choose a primal pivot.
///
/// The rule proposes entering variables until the ratio test finds a leaving row for one of them.
///
/// # Return value
///
/// The pivot, or `None` if no proposed column can be pivoted on. The objective is then unbounded,
/// or the optimum can't be reached from this basis.
pub fn select_primal_pivot<PR: PivotRule>(rule: &mut PR, tableau: &Tableau) -> Option<Pivot> {
    let mut blocked = Vec::new();
    loop {
        let entering = rule.select_primal_pivot_column(tableau, &blocked)?;
        match leaving_row(&ratio_column(tableau, entering)) {
            Some(row) => break Some(Pivot { row, entering, leaving: tableau.basic_variable(row) }),
            None => {
                debug!(entering, "no leaving row, blocking column");
                blocked.push(entering);
            },
        }
    }
}
