//! Orchestration: tables, bracketing, schedule and derivation log.
//!
//! [`Solver::solve`] is the single in-process entry point. Each call builds
//! fresh tables and returns an owned [`SolveResult`]; nothing is kept between
//! calls, so one solver may serve any number of requests.

use serde::Serialize;
use serde_json::{json, Value};

use crate::builder::SolverConfig;
use crate::dims::Dimensions;
use crate::error::SolveError;
use crate::paren::parenthesize;
use crate::tables::{build_tables, Table};
use crate::trace::{execution_order, ExecutionStep};

/// Complete answer for one dimension sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolveResult {
    /// `m[1][n]`.
    pub minimum_cost: u64,
    pub optimal_parenthesization: String,
    /// Cost table `m`, `(n+1) x (n+1)`.
    pub dp_table: Table<u64>,
    /// Split table `s`, `(n+1) x (n+1)`.
    pub split_table: Table<usize>,
    /// Chronological derivation log; empty when recording is disabled.
    pub steps: Vec<String>,
    pub n: usize,
    pub execution_order: Vec<ExecutionStep>,
}

impl SolveResult {
    /// Sum of the scheduled multiplication costs.
    pub fn execution_cost(&self) -> u64 {
        self.execution_order.iter().map(|s| s.cost).sum()
    }

    pub fn to_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// Stateless matrix-chain solver.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Validate `p` and solve it. See [`Solver::solve`].
    pub fn solve_raw(&self, p: Vec<u64>) -> Result<SolveResult, SolveError> {
        let dims = Dimensions::new(p);
        #[cfg(feature = "tracing")]
        if let Err(err) = &dims {
            tracing::warn!(%err, "rejected dimensions");
        }
        self.solve(&dims?)
    }

    /// Find the cheapest multiplication order for `p` and explain it.
    pub fn solve(&self, p: &Dimensions) -> Result<SolveResult, SolveError> {
        let n = p.n();

        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("solve", n);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut log = Vec::new();
        let record = self.config.record_steps;
        if record {
            log.push(format!("Input dimensions: {:?}", p.as_slice()));
            log.push(format!("Number of matrices n = {n}"));
            log.push("Initialized m[][] and s[][] tables.".to_string());
        }

        let tables = build_tables(p, &self.config, record.then_some(&mut log))?;

        let optimal_parenthesization = parenthesize(&tables.split, 1, n);
        if record {
            log.push(format!(
                "Optimal Parenthesization: {optimal_parenthesization}"
            ));
        }

        let execution_order = execution_order(p, &tables.split)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            cost = tables.minimum_cost(),
            steps = execution_order.len(),
            "solved matrix chain"
        );

        Ok(SolveResult {
            minimum_cost: tables.minimum_cost(),
            optimal_parenthesization,
            dp_table: tables.cost,
            split_table: tables.split,
            steps: log,
            n,
            execution_order,
        })
    }

    /// Handle a `{"dimensions": [...]}` request body.
    ///
    /// Returns the HTTP-equivalent status together with the response body:
    /// 200 with the result, 400 or 500 with `{"error": ...}`. A result that
    /// fails to serialize is reported as a 500.
    pub fn handle_request(&self, body: &Value) -> (u16, Value) {
        match Dimensions::from_request(body).and_then(|dims| self.solve(&dims)) {
            Ok(result) => match result.to_json() {
                Ok(value) => (200, value),
                Err(err) => {
                    #[cfg(feature = "tracing")]
                    tracing::error!(%err, "failed to serialize matrix-chain result");
                    (500, json!({ "error": err.to_string() }))
                }
            },
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(%err, status = err.status_code(), "matrix-chain request failed");
                (err.status_code(), err.to_json())
            }
        }
    }
}

/// Solve with the default configuration.
pub fn solve(p: &Dimensions) -> Result<SolveResult, SolveError> {
    Solver::new().solve(p)
}

/// Static liveness payload.
pub fn health() -> Value {
    json!({
        "status": "Backend is running",
        "service": "Matrix Chain Multiplication DP"
    })
}
