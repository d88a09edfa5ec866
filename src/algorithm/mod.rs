//! # Algorithms
//!
//! The tableau simplex method with dual simplex feasibility repair and the Big-M method, and the
//! enumeration of alternate optimal solutions.
pub mod alternate;
pub mod simplex;
pub mod utilities;

/// A tableau is either solved to optimality, or the solve ends for one of several reasons.
///
/// This is determined as the result of an algorithm. The same information is kept in the status
/// flags of the tableau.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum OptimizationResult {
    /// The current basic solution is optimal.
    Optimal,
    /// No feasible starting basis could be found.
    NoFeasibleSolution,
    /// After a pivot, feasibility couldn't be restored.
    NoFurtherFeasibleSolution,
    /// Every candidate entering variable lacks a leaving row: the problem is unbounded, or the
    /// optimum can't be reached from this basis.
    CannotOptimizeFurther,
    /// The optimum of the Big-M problem still has an artificial variable in the basis, so the
    /// original problem is infeasible.
    ArtificialInOptimalBasis,
    /// The iteration limit was reached before any of the other outcomes.
    IterationLimit,
    /// A single improving pivot was made and the tableau is feasible again, but not yet optimal.
    /// Solving it again continues from there.
    StepTaken,
}

impl OptimizationResult {
    /// Whether an optimal solution was found.
    #[must_use]
    pub fn is_optimal(self) -> bool {
        self == Self::Optimal
    }
}
