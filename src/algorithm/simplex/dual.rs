//! # Dual simplex feasibility repair
//!
//! A constraint row with a negative right-hand side is pivoted on with a dual simplex step. The
//! most negative row goes first. Within the row, candidate columns are tried in order of the
//! ratio between their objective coefficient and their coefficient in the row; the first one with
//! a non-positive coefficient enters the basis.
use itertools::Itertools;
use tracing::debug;

use crate::algorithm::simplex::Pivot;
use crate::data::tableau::Tableau;

/// Make a dual simplex pivot on the most negative row that admits one.
///
/// Only the basis changes; the caller row reduces afterwards. Rows without a suitable column are
/// skipped in favor of the next most negative row.
///
/// # Return value
///
/// The pivot, or `None` if no row with a negative right-hand side admits a pivot. The problem is
/// infeasible in that case.
pub fn repair(tableau: &mut Tableau) -> Option<Pivot> {
    let mut blocked_rows = Vec::new();

    loop {
        let candidate = (1..tableau.nr_rows())
            .filter(|&row| tableau.rhs(row).is_negative())
            .sorted_by(|&left, &right| tableau.rhs(left).evaluate().total_cmp(&tableau.rhs(right).evaluate()))
            .find(|row| !blocked_rows.contains(row));
        let Some(row) = candidate else {
            debug!(?blocked_rows, "no row with a negative right-hand side admits a dual pivot");
            return None;
        };

        let ratios = ratio_row(tableau, row);
        let entering = (1..=tableau.nr_variables())
            .sorted_by(|&left, &right| ratios[left - 1].total_cmp(&ratios[right - 1]))
            .take_while(|&variable| ratios[variable - 1].is_finite())
            .find(|&variable| !tableau.cell(row, variable).is_positive());

        match entering {
            Some(entering) => {
                let leaving = tableau.basic_variable(row);
                tableau.set_basic_variable(row, entering);
                debug!(row, entering, leaving, "dual pivot");
                return Some(Pivot { row, entering, leaving });
            },
            None => {
                debug!(row, "row admits no dual pivot, blocking it");
                blocked_rows.push(row);
            },
        }
    }
}

/// Absolute ratio of the objective row to a constraint row, for every variable.
///
/// The ratio is infinite where either coefficient is zero, and for the variable that is basic in
/// the row. Big-M coefficients are substituted.
///
/// # Return value
///
/// One ratio per variable; index `j` belongs to variable `j + 1`.
pub(crate) fn ratio_row(tableau: &Tableau, row: usize) -> Vec<f64> {
    (1..=tableau.nr_variables())
        .map(|variable| {
            let cost = tableau.cell(0, variable).evaluate();
            let cell = tableau.cell(row, variable).evaluate();
            if cell == 0_f64 || cost == 0_f64 || variable == tableau.basic_variable(row) {
                f64::INFINITY
            } else {
                (cost / cell).abs()
            }
        })
        .collect()
}

#[cfg(test)]
mod test {
    use crate::algorithm::simplex::Pivot;
    use crate::algorithm::simplex::dual::{ratio_row, repair};
    use crate::data::linear_program::elements::Objective;
    use crate::tests::tableau;

    #[test]
    fn ratios() {
        let tableau = tableau(
            &[
                &[-3_f64, 1_f64, -1_f64, 0_f64, 0_f64, 0_f64, 0_f64],
                &[4_f64, -1_f64, 0_f64, 1_f64, 0_f64, 0_f64, 8_f64],
                &[-8_f64, -1_f64, -3_f64, 0_f64, 1_f64, 0_f64, -12_f64],
                &[5_f64, 0_f64, -1_f64, 0_f64, 0_f64, 1_f64, 13_f64],
            ],
            &[0, 4, 5, 6],
            3,
            0,
            Objective::Minimize,
        );

        let ratios = ratio_row(&tableau, 2);
        assert_eq!(ratios[0], 0.375);
        assert_eq!(ratios[1], 1_f64);
        assert!((ratios[2] - 1_f64 / 3_f64).abs() < 1e-12);
        assert!(ratios[3..].iter().all(|ratio| ratio.is_infinite()));
    }

    #[test]
    fn smallest_ratio_enters() {
        let mut tableau = tableau(
            &[
                &[-3_f64, 1_f64, -1_f64, 0_f64, 0_f64, 0_f64, 0_f64],
                &[4_f64, -1_f64, 0_f64, 1_f64, 0_f64, 0_f64, 8_f64],
                &[-8_f64, -1_f64, -3_f64, 0_f64, 1_f64, 0_f64, -12_f64],
                &[5_f64, 0_f64, -1_f64, 0_f64, 0_f64, 1_f64, 13_f64],
            ],
            &[0, 4, 5, 6],
            3,
            0,
            Objective::Minimize,
        );

        assert_eq!(repair(&mut tableau), Some(Pivot { row: 2, entering: 3, leaving: 5 }));
        assert_eq!(tableau.basic_vars(), &[0, 4, 3, 6]);
    }

    #[test]
    fn most_negative_row_first_and_blocking() {
        // Row 2 is most negative but only has positive coefficients with a finite ratio
        let mut tableau = tableau(
            &[
                &[1_f64, 2_f64, 0_f64, 0_f64, 0_f64],
                &[-1_f64, 1_f64, 1_f64, 0_f64, -1_f64],
                &[1_f64, 1_f64, 0_f64, 1_f64, -5_f64],
            ],
            &[0, 3, 4],
            2,
            0,
            Objective::Minimize,
        );

        assert_eq!(repair(&mut tableau), Some(Pivot { row: 1, entering: 1, leaving: 3 }));
    }

    #[test]
    fn nothing_to_pivot_on() {
        let mut tableau = tableau(
            &[
                &[0_f64, 0_f64, 1_f64, 0_f64, 0_f64, 15_f64],
                &[0_f64, 1_f64, 1_f64, -2_f64, 0_f64, -5_f64],
                &[1_f64, 0_f64, 0_f64, 1_f64, 0_f64, 10_f64],
                &[0_f64, 0_f64, -1_f64, 1_f64, 1_f64, 5_f64],
            ],
            &[0, 2, 1, 5],
            2,
            0,
            Objective::Minimize,
        );

        assert_eq!(repair(&mut tableau), None);
        assert_eq!(tableau.basic_vars(), &[0, 2, 1, 5]);
    }
}
