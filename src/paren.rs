//! Rendering the optimal bracketing from the split table.

use crate::tables::Table;
use crate::utils::matrix_label;

/// Optimal parenthesization of `A_i..A_j`, e.g. `((A1A2)A3)`.
///
/// A single matrix renders as its bare label. `split` must come from
/// [`build_tables`](crate::tables::build_tables) and `1 <= i <= j <= n`.
pub fn parenthesize(split: &Table<usize>, i: usize, j: usize) -> String {
    let mut out = String::new();
    write_range(&mut out, split, i, j);
    out
}

fn write_range(out: &mut String, split: &Table<usize>, i: usize, j: usize) {
    if i == j {
        out.push_str(&matrix_label(i));
        return;
    }
    let k = split.get(i, j);
    out.push('(');
    write_range(out, split, i, k);
    write_range(out, split, k + 1, j);
    out.push(')');
}
