use crate::solver::Solver;
use crate::utils::default_parallel_min_width;

const DEFAULT_PARALLEL_MIN_WIDTH: usize = 1;

/// Tunables for a [`Solver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Fill each chain length with rayon. Ignored without the `parallel` feature.
    pub parallel: bool,
    /// Minimum number of cells in a chain-length pass before it runs in parallel.
    ///
    /// Defaults to 1: once `parallel` is on every pass forks.
    /// [`SolverBuilder::build_for`] replaces it with a size-based heuristic.
    pub parallel_min_width: usize,
    /// Keep the human-readable derivation log.
    pub record_steps: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            parallel_min_width: DEFAULT_PARALLEL_MIN_WIDTH,
            record_steps: true,
        }
    }
}

#[derive(Debug, Default)]
pub struct SolverBuilder {
    parallel: bool,
    parallel_min_width: Option<usize>,
    record_steps: Option<bool>,
}

impl SolverBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }
    pub fn with_parallel_min_width(mut self, width: usize) -> Self {
        self.parallel_min_width = Some(width.max(1));
        self
    }
    pub fn record_steps(mut self, enabled: bool) -> Self {
        self.record_steps = Some(enabled);
        self
    }
    /// Build a solver for chains of roughly `n` matrices.
    ///
    /// `n` only feeds the default parallel width heuristic.
    pub fn build_for(self, n: usize) -> Solver {
        let parallel_min_width = self
            .parallel_min_width
            .unwrap_or_else(|| default_parallel_min_width(n));
        Solver::with_config(SolverConfig {
            parallel: self.parallel,
            parallel_min_width,
            record_steps: self.record_steps.unwrap_or(true),
        })
    }
    pub fn build(self) -> Solver {
        let parallel_min_width = self
            .parallel_min_width
            .unwrap_or(DEFAULT_PARALLEL_MIN_WIDTH);
        Solver::with_config(SolverConfig {
            parallel: self.parallel,
            parallel_min_width,
            record_steps: self.record_steps.unwrap_or(true),
        })
    }
}
