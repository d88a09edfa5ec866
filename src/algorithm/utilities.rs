//! # Utilities
//!
//! Helper functions for algorithms.
use itertools::Itertools;

use crate::data::tableau::Tableau;

/// Ratio of the right-hand side to the entering column, for every constraint row.
///
/// Ratios that are zero or negative, and rows where the entering column has a zero coefficient,
/// can't bound the entering variable and are infinite.
///
/// # Arguments
///
/// * `tableau`: Tableau to compute the ratios on.
/// * `variable`: Entering variable.
///
/// # Return value
///
/// One ratio per constraint row; index `i` belongs to row `i + 1`.
pub(crate) fn ratio_column(tableau: &Tableau, variable: usize) -> Vec<f64> {
    (1..tableau.nr_rows())
        .map(|row| {
            let cell = tableau.cell(row, variable).evaluate();
            if cell == 0_f64 {
                return f64::INFINITY;
            }

            let ratio = tableau.rhs(row).evaluate() / cell;
            if ratio <= 0_f64 { f64::INFINITY } else { ratio }
        })
        .collect()
}

/// Row with the smallest ratio, the topmost one among equals.
///
/// # Return value
///
/// The row index in the tableau, or `None` if every ratio is infinite.
pub(crate) fn leaving_row(ratios: &[f64]) -> Option<usize> {
    ratios.iter()
        .position_min_by(|left, right| left.total_cmp(right))
        .filter(|&index| ratios[index].is_finite())
        .map(|index| index + 1)
}

/// Number of non-empty subsets of a set with `nr_elements` elements.
///
/// Saturates at `usize::MAX`.
pub(crate) fn nr_non_empty_subsets(nr_elements: usize) -> usize {
    u32::try_from(nr_elements)
        .ok()
        .and_then(|shift| 1_usize.checked_shl(shift))
        .map_or(usize::MAX, |count| count - 1)
}

/// The subset selected by the bits of `mask`.
///
/// Bit `i` selects element `i`; the order of the elements is kept. Counting `mask` upward from 1
/// visits every non-empty subset exactly once.
pub(crate) fn subset<T: Copy>(elements: &[T], mask: usize) -> Vec<T> {
    elements.iter()
        .take(usize::BITS as usize)
        .enumerate()
        .filter(|&(i, _)| mask & (1 << i) != 0)
        .map(|(_, &element)| element)
        .collect()
}
