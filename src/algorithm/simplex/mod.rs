//! # The Simplex algorithm
//!
//! The tableau is first brought into a basic feasible state: negative right-hand sides are
//! repaired with dual simplex pivots and the basis columns are row reduced to unit columns. From
//! there, primal pivots improve the objective until the objective row has the right sign, each
//! pivot followed by another round of feasibility repair. A final check rejects optima that still
//! rely on an artificial variable.
use tracing::{debug, info};

use crate::algorithm::OptimizationResult;
use crate::algorithm::alternate;
use crate::algorithm::simplex::feasibility::make_feasible;
use crate::algorithm::simplex::strategy::pivot_rule::{MostNegative, PivotRule, select_primal_pivot};
use crate::data::tableau::{Status, Tableau};

pub mod big_m;
pub mod dual;
pub mod feasibility;
pub mod strategy;

/// A basis change.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Pivot {
    /// Row in which the basis changes.
    pub row: usize,
    /// Variable entering the basis.
    pub entering: usize,
    /// Variable that was basic in the row before.
    pub leaving: usize,
}

/// Events reported to the observer of a solve, in the order in which they happen.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Iteration {
    /// A dual simplex pivot was made to repair a negative right-hand side. The tableau is
    /// already row reduced.
    FeasibilityRepaired(Pivot),
    /// The basis columns were row reduced.
    Normalized,
    /// A primal pivot was chosen. Only the basis changed; the rows are not yet reduced.
    Pivoted(Pivot),
    /// The tableau is in a basic feasible state.
    FeasibleSolution,
}

/// Settings of a solve.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct SolveOptions {
    /// Maximum number of pivots and feasibility repairs. Defaults to 50 times the size of the
    /// tableau.
    pub max_iterations: Option<usize>,
    /// Stop after the first improving pivot that ends in a feasible tableau.
    pub single_step: bool,
}

impl SolveOptions {
    /// Iteration limit for a specific tableau.
    #[must_use]
    pub fn iteration_limit(&self, tableau: &Tableau) -> usize {
        self.max_iterations
            .unwrap_or_else(|| 50 * (tableau.nr_rows() + tableau.nr_variables() + 1))
    }
}

/// Solve a tableau with the default pivot rule and options.
///
/// The tableau is modified in place and ends in the final basis; its status flags reflect the
/// outcome.
pub fn solve(tableau: &mut Tableau) -> OptimizationResult {
    solve_with::<MostNegative, _>(tableau, &SolveOptions::default(), |_, _| {})
}

/// Solve a tableau.
///
/// # Arguments
///
/// * `tableau`: Tableau to solve in place.
/// * `options`: Iteration limit and whether to stop after a single improving pivot.
/// * `observer`: Called for every step of the algorithm, with the tableau after that step.
///
/// # Return value
///
/// The outcome, which is also stored in the status flags of the tableau. When optimal, the number
/// of alternate optimal solutions is stored as well.
pub fn solve_with<PR, O>(
    tableau: &mut Tableau,
    options: &SolveOptions,
    mut observer: O,
) -> OptimizationResult
where
    PR: PivotRule,
    O: FnMut(Iteration, &Tableau),
{
    *tableau.status_mut() = Status::default();

    let mut budget = Budget { used: 0, limit: options.iteration_limit(tableau) };
    let result = optimize::<PR, O>(tableau, &mut budget, options.single_step, &mut observer);

    let is_feasible = feasibility::is_feasible(tableau);
    let num_alternates = if result.is_optimal() { alternate::count(tableau) } else { 0 };
    let status = tableau.status_mut();
    match result {
        OptimizationResult::Optimal => {
            status.is_optimal = true;
            status.num_alternates = num_alternates;
        },
        OptimizationResult::NoFeasibleSolution
        | OptimizationResult::NoFurtherFeasibleSolution
        | OptimizationResult::ArtificialInOptimalBasis => {
            status.is_feasible = false;
            status.is_optimal_reachable = false;
        },
        OptimizationResult::CannotOptimizeFurther => status.is_optimal_reachable = false,
        OptimizationResult::IterationLimit => {
            status.is_feasible = is_feasible;
            status.is_optimal_reachable = false;
        },
        OptimizationResult::StepTaken => {},
    }

    info!(?result, iterations = budget.used, alternates = tableau.num_alternates(), "solve finished");
    result
}

/// Whether the objective row proves optimality.
///
/// For maximization, no entry (Big-M substituted) may be negative; for minimization, no entry
/// may be positive.
pub fn is_optimal(tableau: &Tableau) -> bool {
    let mut objective_row = tableau.objective_row().iter();
    if tableau.is_max() {
        objective_row.all(|value| !value.is_negative())
    } else {
        objective_row.all(|value| !value.is_positive())
    }
}

/// Counts pivots and feasibility repairs.
struct Budget {
    used: usize,
    limit: usize,
}

impl Budget {
    fn spend(&mut self) -> bool {
        if self.used < self.limit {
            self.used += 1;
            true
        } else {
            false
        }
    }
}

fn optimize<PR, O>(
    tableau: &mut Tableau,
    budget: &mut Budget,
    single_step: bool,
    observer: &mut O,
) -> OptimizationResult
where
    PR: PivotRule,
    O: FnMut(Iteration, &Tableau),
{
    if let Err(result) = restore_feasibility(tableau, budget, observer, false, OptimizationResult::NoFeasibleSolution) {
        return result;
    }
    observer(Iteration::FeasibleSolution, tableau);

    let mut rule = PR::new();
    while !is_optimal(tableau) {
        if !budget.spend() {
            return OptimizationResult::IterationLimit;
        }

        let Some(pivot) = select_primal_pivot(&mut rule, tableau) else {
            return OptimizationResult::CannotOptimizeFurther;
        };
        tableau.set_basic_variable(pivot.row, pivot.entering);
        debug!(row = pivot.row, entering = pivot.entering, leaving = pivot.leaving, "primal pivot");
        observer(Iteration::Pivoted(pivot), tableau);

        if let Err(result) = restore_feasibility(tableau, budget, observer, true, OptimizationResult::NoFurtherFeasibleSolution) {
            return result;
        }
        observer(Iteration::FeasibleSolution, tableau);

        if single_step && !is_optimal(tableau) {
            return OptimizationResult::StepTaken;
        }
    }

    if big_m::has_artificial_in_basis(tableau) {
        OptimizationResult::ArtificialInOptimalBasis
    } else {
        OptimizationResult::Optimal
    }
}

/// Repair and row reduce until the tableau is in a basic feasible state.
///
/// # Arguments
///
/// * `after_pivot`: Reduce once right away, as the basis just changed. That reduction completes
/// the pivot and is not counted separately.
/// * `failure`: Outcome to report when no feasible basis can be reached.
fn restore_feasibility<O>(
    tableau: &mut Tableau,
    budget: &mut Budget,
    observer: &mut O,
    after_pivot: bool,
    failure: OptimizationResult,
) -> Result<(), OptimizationResult>
where
    O: FnMut(Iteration, &Tableau),
{
    let mut complete_pivot = after_pivot;
    while complete_pivot || !feasibility::is_feasible(tableau) {
        if !complete_pivot && !budget.spend() {
            return Err(OptimizationResult::IterationLimit);
        }
        complete_pivot = false;

        match make_feasible(tableau) {
            Ok(repair) => {
                if let Some(pivot) = repair {
                    observer(Iteration::FeasibilityRepaired(pivot), tableau);
                }
                observer(Iteration::Normalized, tableau);
            },
            Err(_) => return Err(failure),
        }
    }

    Ok(())
}
