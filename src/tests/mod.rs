//! # Integration tests that require a look inside the crate.
//!
//! Every `problem_N` module holds a tableau from a worked example, together with the tableau and
//! status that solving it should produce.
//!
//! Convention for function names:
//!
//! * `fn initial()`
//! * `fn solved()`
use approx::abs_diff_eq;

use crate::data::linear_program::elements::Objective;
use crate::data::number_types::coefficient::Coefficient;
use crate::data::tableau::Tableau;

pub mod problem_1;

/// Precision of the worked examples, which round to three decimals.
const EPSILON: f64 = 1e-3;

/// Create a tableau without symbolic entries.
pub(crate) fn tableau(
    rows: &[&[f64]],
    basic_vars: &[usize],
    n_decision_vars: usize,
    n_artificials: usize,
    objective: Objective,
) -> Tableau {
    let matrix = rows.iter()
        .map(|row| row.iter().copied().map(Coefficient::from).collect())
        .collect();

    Tableau::new(matrix, basic_vars.to_vec(), n_decision_vars, n_artificials, objective).unwrap()
}

/// Compare the matrix of a tableau with numbers, up to the precision of the worked examples.
pub(crate) fn assert_matrix_eq(tableau: &Tableau, expected: &[&[f64]]) {
    let expected = expected.iter()
        .map(|row| row.iter().copied().map(Coefficient::from).collect::<Vec<_>>())
        .collect::<Vec<_>>();
    assert_coefficients_eq(tableau, &expected);
}

/// Compare the matrix of a tableau, both parts of every coefficient separately.
pub(crate) fn assert_coefficients_eq(tableau: &Tableau, expected: &[Vec<Coefficient>]) {
    assert_eq!(tableau.nr_rows(), expected.len(), "number of rows");
    for (i, (row, expected_row)) in tableau.matrix().iter().zip(expected).enumerate() {
        assert_eq!(row.len(), expected_row.len(), "length of row {}", i);
        for (j, (value, expected_value)) in row.iter().zip(expected_row).enumerate() {
            assert!(
                abs_diff_eq!(value.m_part(), expected_value.m_part(), epsilon = EPSILON)
                    && abs_diff_eq!(value.constant_part(), expected_value.constant_part(), epsilon = EPSILON),
                "row {}, column {}: expected {}, found {}", i, j, expected_value, value,
            );
        }
    }
}
