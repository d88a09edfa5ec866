//! Production planning, the standard maximization.
//!
//! Maximize `5 X1 + 4 X2` subject to `6 X1 + 4 X2 <= 24` and `X1 + 2 X2 <= 6`.
use approx::assert_abs_diff_eq;

use crate::algorithm::OptimizationResult;
use crate::algorithm::simplex::solve;
use crate::data::linear_program::elements::Objective;
use crate::data::tableau::Tableau;
use crate::tests::{assert_matrix_eq, tableau};

#[test]
fn solve_to_optimality() {
    let mut computed = initial();
    assert_eq!(solve(&mut computed), OptimizationResult::Optimal);

    assert_matrix_eq(&computed, &solved());
    assert_eq!(computed.basic_vars(), &[0, 1, 2]);
    assert!(computed.is_feasible());
    assert!(computed.is_optimal_reachable());
    assert!(computed.is_optimal());
    assert_eq!(computed.num_alternates(), 0);
}

#[test]
fn interpretation() {
    let mut computed = initial();
    solve(&mut computed);

    let solution = computed.interpret();
    assert_abs_diff_eq!(solution.objective_value().evaluate(), 21_f64, epsilon = 1e-9);
    assert_abs_diff_eq!(solution.value("X1").map_or(f64::NAN, |value| value.evaluate()), 3_f64, epsilon = 1e-9);
    assert_abs_diff_eq!(solution.value("X2").map_or(f64::NAN, |value| value.evaluate()), 1.5, epsilon = 1e-9);
    assert_eq!(solution.solution_values().len(), 2);
}

pub fn initial() -> Tableau {
    tableau(
        &[
            &[-5_f64, -4_f64, 0_f64, 0_f64, 0_f64],
            &[6_f64, 4_f64, 1_f64, 0_f64, 24_f64],
            &[1_f64, 2_f64, 0_f64, 1_f64, 6_f64],
        ],
        &[0, 3, 4],
        2,
        0,
        Objective::Maximize,
    )
}

pub fn solved() -> [&'static [f64]; 3] {
    [
        &[0_f64, 0_f64, 0.75, 0.5, 21_f64],
        &[1_f64, 0_f64, 0.25, -0.5, 3_f64],
        &[0_f64, 1_f64, -0.125, 0.75, 1.5],
    ]
}
