//! Small naming helpers shared by the reconstructor and the trace generator.

/// Name of the product spanning the whole chain.
pub const FINAL_MATRIX: &str = "Final Matrix";

/// Label of input matrix `A_i`.
#[inline]
pub fn matrix_label(i: usize) -> String {
    format!("A{i}")
}

/// Label of the intermediate product created at `step`.
#[inline]
pub fn temporary_label(step: usize) -> String {
    format!("Temporary Matrix T{step}")
}

/// Heuristic minimum number of rows in a chain-length pass before the
/// `parallel` fill hands it to rayon.
///
/// Rows shorter than this cost less than the fork/join overhead.
#[inline]
pub fn default_parallel_min_width(n: usize) -> usize {
    if n <= 64 {
        usize::MAX
    } else {
        ((n as f64).sqrt().ceil() as usize).max(8)
    }
}
