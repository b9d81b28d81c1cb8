//! Example: explained matrix-chain multiplication.
//!
//! Run with:
//! `cargo run --example matrix_chain`

use mcm_dp::{Dimensions, Solver};

fn main() -> Result<(), mcm_dp::SolveError> {
    // Example from CLRS:
    // Matrices A1..A6 with dimensions:
    // 30x35, 35x15, 15x5, 5x10, 10x20, 20x25
    let dims = Dimensions::new(vec![30, 35, 15, 5, 10, 20, 25])?;
    let result = Solver::new().solve(&dims)?;

    println!("Optimal multiplication cost: {}", result.minimum_cost);
    println!("Parenthesization: {}", result.optimal_parenthesization);
    println!("Execution order:");
    for s in &result.execution_order {
        println!(
            "  {}. {} {} -> {} [{}]",
            s.step,
            s.description(),
            s.matrix_dims(),
            s.result_name,
            s.calculation()
        );
    }
    Ok(())
}
