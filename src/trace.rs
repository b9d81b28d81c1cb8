//! Ordered, explained multiplication schedule.
//!
//! Walks the split tree in post-order and emits one [`ExecutionStep`] per
//! internal node. Children are always logged before their parent, so the
//! step list is a valid evaluation order: every operand exists by the time a
//! step consumes it.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::dims::Dimensions;
use crate::error::SolveError;
use crate::tables::Table;
use crate::utils::{matrix_label, temporary_label, FINAL_MATRIX};

/// A named matrix flowing through the schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operand {
    pub name: String,
    pub rows: u64,
    pub cols: u64,
}

/// One concrete multiplication in the optimal order.
///
/// Serializes to the wire shape
/// `{step, description, matrix_dims, calculation, cost, result_name, result_dims}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionStep {
    /// 1-based position in the schedule.
    pub step: usize,
    pub left: Operand,
    pub right: Operand,
    /// `left.rows * left.cols * right.cols`.
    pub cost: u64,
    pub result_name: String,
}

impl ExecutionStep {
    pub fn description(&self) -> String {
        format!("Multiply {} by {}", self.left.name, self.right.name)
    }

    /// Operand shapes in LaTeX, e.g. `(10 \times 30) \times (30 \times 5)`.
    pub fn matrix_dims(&self) -> String {
        format!(
            "({} \\times {}) \\times ({} \\times {})",
            self.left.rows, self.left.cols, self.right.rows, self.right.cols
        )
    }

    pub fn calculation(&self) -> String {
        format!(
            "{} * {} * {} = {}",
            self.left.rows, self.left.cols, self.right.cols, self.cost
        )
    }

    /// Shape of the product, `(left.rows, right.cols)`.
    pub fn result_shape(&self) -> (u64, u64) {
        (self.left.rows, self.right.cols)
    }

    pub fn result_dims(&self) -> String {
        format!("{}x{}", self.left.rows, self.right.cols)
    }

    pub fn is_final(&self) -> bool {
        self.result_name == FINAL_MATRIX
    }
}

impl Serialize for ExecutionStep {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut st = serializer.serialize_struct("ExecutionStep", 7)?;
        st.serialize_field("step", &self.step)?;
        st.serialize_field("description", &self.description())?;
        st.serialize_field("matrix_dims", &self.matrix_dims())?;
        st.serialize_field("calculation", &self.calculation())?;
        st.serialize_field("cost", &self.cost)?;
        st.serialize_field("result_name", &self.result_name)?;
        st.serialize_field("result_dims", &self.result_dims())?;
        st.end()
    }
}

struct TraceWalker<'a> {
    p: &'a Dimensions,
    split: &'a Table<usize>,
    steps: Vec<ExecutionStep>,
}

impl TraceWalker<'_> {
    fn visit(&mut self, i: usize, j: usize) -> Result<Operand, SolveError> {
        if i == j {
            let (rows, cols) = self.p.shape(i);
            return Ok(Operand {
                name: matrix_label(i),
                rows,
                cols,
            });
        }

        let k = self.split.get(i, j);
        let left = self.visit(i, k)?;
        let right = self.visit(k + 1, j)?;
        let cost = left
            .rows
            .checked_mul(left.cols)
            .and_then(|c| c.checked_mul(right.cols))
            .ok_or(SolveError::CostOverflow { i, j })?;

        let step = self.steps.len() + 1;
        let result_name = if i == 1 && j == self.p.n() {
            FINAL_MATRIX.to_string()
        } else {
            temporary_label(step)
        };
        let product = Operand {
            name: result_name.clone(),
            rows: left.rows,
            cols: right.cols,
        };
        self.steps.push(ExecutionStep {
            step,
            left,
            right,
            cost,
            result_name,
        });
        Ok(product)
    }
}

/// Execution order for the whole chain `A_1..A_n`.
///
/// A single matrix needs no multiplication and yields an empty schedule.
pub fn execution_order(
    p: &Dimensions,
    split: &Table<usize>,
) -> Result<Vec<ExecutionStep>, SolveError> {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("execution_order", n = p.n()).entered();

    let mut walker = TraceWalker {
        p,
        split,
        steps: Vec::with_capacity(p.n().saturating_sub(1)),
    };
    walker.visit(1, p.n())?;
    Ok(walker.steps)
}
