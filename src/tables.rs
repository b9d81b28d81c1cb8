//! Cost and split table construction.
//!
//! Classic interval DP: for every sub-chain `A_i..A_j`
//!
//! ```text
//! m[i][j] = min_{i <= k < j} m[i][k] + m[k+1][j] + p[i-1] * p[k] * p[j]
//! ```
//!
//! and `s[i][j]` records the smallest `k` achieving the minimum. Sub-chains
//! are filled in increasing length order so both operands of every candidate
//! are final before they are read. Within one length the rows are
//! independent, which the `parallel` feature exploits.

use serde::Serialize;

use crate::builder::SolverConfig;
use crate::dims::Dimensions;
use crate::error::SolveError;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Square `(n+1) x (n+1)` table addressed with 1-based `(i, j)`.
///
/// Row and column 0, and every entry with `i > j`, stay at their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Table<T> {
    rows: Vec<Vec<T>>,
}

impl<T: Copy + Default> Table<T> {
    pub fn new(n: usize) -> Self {
        Self {
            rows: vec![vec![T::default(); n + 1]; n + 1],
        }
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        self.rows[i][j]
    }

    #[inline]
    fn set(&mut self, i: usize, j: usize, value: T) {
        self.rows[i][j] = value;
    }

    /// Number of matrices the table was sized for.
    pub fn n(&self) -> usize {
        self.rows.len() - 1
    }

    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }
}

/// Filled cost table `m` and split table `s`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainTables {
    pub cost: Table<u64>,
    pub split: Table<usize>,
}

impl ChainTables {
    /// Minimum cost of the whole chain, `m[1][n]`.
    pub fn minimum_cost(&self) -> u64 {
        let n = self.cost.n();
        self.cost.get(1, n)
    }
}

/// Outcome of minimising one `(i, j)` cell.
struct Cell {
    cost: u64,
    split: usize,
    note: Option<String>,
}

/// Cost of multiplying the `[i, k]` product by the `[k+1, j]` product.
#[inline]
pub(crate) fn merge_cost(p: &Dimensions, i: usize, k: usize, j: usize) -> Option<u64> {
    p[i - 1].checked_mul(p[k])?.checked_mul(p[j])
}

fn solve_cell(
    p: &Dimensions,
    cost: &Table<u64>,
    i: usize,
    j: usize,
    record: bool,
) -> Result<Cell, SolveError> {
    let overflow = || SolveError::CostOverflow { i, j };
    let mut best: Option<(u64, usize)> = None;
    let mut candidates = Vec::new();

    for k in i..j {
        let left = cost.get(i, k);
        let right = cost.get(k + 1, j);
        // An overflowing candidate exceeds every representable cost, so it
        // can never be the minimum.
        let q = left
            .checked_add(right)
            .and_then(|sub| sub.checked_add(merge_cost(p, i, k, j)?));
        if record {
            let shown = q.map_or_else(|| "overflow".to_string(), |q| q.to_string());
            candidates.push(format!(
                "k={k}: cost={shown} ({left} + {right} + {}*{}*{})",
                p[i - 1],
                p[k],
                p[j]
            ));
        }
        let Some(q) = q else { continue };
        // Strict comparison keeps the smallest k on ties.
        if best.map_or(true, |(c, _)| q < c) {
            best = Some((q, k));
        }
    }

    let (min, k_best) = best.ok_or_else(overflow)?;
    let note = record.then(|| {
        format!(
            "m[{i}][{j}]: Min cost is {min} at k={k_best}. Candidates: {}",
            candidates.join(", ")
        )
    });
    Ok(Cell {
        cost: min,
        split: k_best,
        note,
    })
}

fn solve_row(
    p: &Dimensions,
    cost: &Table<u64>,
    len: usize,
    record: bool,
    parallel: bool,
) -> Result<Vec<Cell>, SolveError> {
    let starts = p.n() - len + 1;
    let cell = |i: usize| solve_cell(p, cost, i, i + len - 1, record);

    #[cfg(feature = "parallel")]
    if parallel {
        return (1..=starts).into_par_iter().map(cell).collect();
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    (1..=starts).map(cell).collect()
}

/// Fill `m` and `s` for the chain `p`.
///
/// When `log` is given, one header per chain length and one summary line per
/// cell are appended to it in fill order.
pub fn build_tables(
    p: &Dimensions,
    config: &SolverConfig,
    mut log: Option<&mut Vec<String>>,
) -> Result<ChainTables, SolveError> {
    let n = p.n();
    let mut cost = Table::<u64>::new(n);
    let mut split = Table::<usize>::new(n);
    let record = log.is_some();

    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("build_tables", n);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    for len in 2..=n {
        let parallel = config.parallel && n - len + 1 >= config.parallel_min_width;

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("chain_length", len, parallel);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        if let Some(log) = log.as_deref_mut() {
            log.push(format!("--- Computing for chain length l = {len} ---"));
        }

        let row = solve_row(p, &cost, len, record, parallel);
        #[cfg(feature = "tracing")]
        if let Err(err) = &row {
            tracing::error!(%err, len, "cost table construction failed");
        }
        let row = row?;

        for (offset, cell) in row.into_iter().enumerate() {
            let i = offset + 1;
            let j = i + len - 1;
            cost.set(i, j, cell.cost);
            split.set(i, j, cell.split);
            if let (Some(log), Some(note)) = (log.as_deref_mut(), cell.note) {
                log.push(note);
            }
        }
    }

    Ok(ChainTables { cost, split })
}
