use mcm_dp::{Dimensions, SolverBuilder};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
#[ignore]
fn large_chain_schedule_is_consistent() {
    let mut rng = StdRng::seed_from_u64(42);
    let p: Vec<u64> = (0..=400).map(|_| rng.gen_range(1..=1_000)).collect();
    let dims = Dimensions::new(p).unwrap();
    let r = SolverBuilder::new()
        .record_steps(false)
        .build_for(dims.n())
        .solve(&dims)
        .unwrap();
    assert_eq!(r.execution_order.len(), 399);
    assert_eq!(r.execution_cost(), r.minimum_cost);
    assert!(r.execution_order.last().unwrap().is_final());
}
