//! Matrix-Chain Multiplication with an explained execution trace.
//!
//! Given dimensions `p[0..=n]` for matrices `A_1..A_n` (`A_i` is
//! `p[i-1] x p[i]`), this crate finds the parenthesization that minimises the
//! number of scalar multiplications and explains how to carry it out.
//!
//! ## Pipeline
//! 1. [`tables::build_tables`] fills the cost table `m` and split table `s`
//!    in increasing chain length, keeping the smallest split on ties.
//! 2. [`paren::parenthesize`] renders the optimal bracketing, e.g. `((A1A2)A3)`.
//! 3. [`trace::execution_order`] walks the split tree in post-order and emits
//!    one [`ExecutionStep`] per multiplication, naming intermediate products
//!    `Temporary Matrix T<step>` and the last one `Final Matrix`.
//! 4. [`Solver`] runs all three and assembles a [`SolveResult`] together with
//!    a human-readable derivation log.
//!
//! ## Quick start
//! ```
//! use mcm_dp::{Dimensions, Solver};
//!
//! let dims = Dimensions::new(vec![10, 30, 5, 60]).unwrap();
//! let result = Solver::new().solve(&dims).unwrap();
//! assert_eq!(result.minimum_cost, 4500);
//! assert_eq!(result.optimal_parenthesization, "((A1A2)A3)");
//! assert_eq!(result.execution_order.len(), 2);
//! assert_eq!(result.execution_order[1].result_name, "Final Matrix");
//! ```
//!
//! ## Features
//! - `parallel`: fill each chain length with rayon.
//! - `tracing`: emit spans and events through the `tracing` facade.

pub mod builder;
pub mod dims;
pub mod error;
pub mod paren;
pub mod solver;
pub mod tables;
pub mod trace;
pub mod utils;

pub use crate::builder::{SolverBuilder, SolverConfig};
pub use crate::dims::Dimensions;
pub use crate::error::{ErrorKind, SolveError};
pub use crate::solver::{health, solve, SolveResult, Solver};
pub use crate::trace::ExecutionStep;
