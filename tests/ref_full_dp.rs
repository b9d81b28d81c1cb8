use mcm_dp::{Dimensions, SolveResult, Solver};
use proptest::prelude::*;

/// Exhaustive minimum over every parenthesization of `A_i..A_j`.
fn brute_force(p: &[u64], i: usize, j: usize) -> u64 {
    if i == j {
        return 0;
    }
    (i..j)
        .map(|k| brute_force(p, i, k) + brute_force(p, k + 1, j) + p[i - 1] * p[k] * p[j])
        .min()
        .unwrap()
}

/// Cost of the bracketing encoded in the split table.
fn replay(r: &SolveResult, p: &[u64], i: usize, j: usize) -> u64 {
    if i == j {
        return 0;
    }
    let k = r.split_table.get(i, j);
    assert!(i <= k && k < j, "split {k} outside [{i}, {j})");
    replay(r, p, i, k) + replay(r, p, k + 1, j) + p[i - 1] * p[k] * p[j]
}

fn balanced(s: &str) -> bool {
    let mut depth = 0i32;
    for c in s.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

fn labels_in_order(s: &str) -> Vec<usize> {
    s.split(|c: char| c == '(' || c == ')' || c == 'A')
        .filter(|t| !t.is_empty())
        .map(|t| t.parse().unwrap())
        .collect()
}

proptest! {
    #[test]
    fn cost_matches_exhaustive_search(p in proptest::collection::vec(1u64..40, 2..8)) {
        let n = p.len() - 1;
        let r = Solver::new().solve(&Dimensions::new(p.clone()).unwrap()).unwrap();
        prop_assert_eq!(r.minimum_cost, brute_force(&p, 1, n));
        prop_assert_eq!(r.dp_table.get(1, n), r.minimum_cost);
        for i in 1..=n {
            prop_assert_eq!(r.dp_table.get(i, i), 0);
        }
    }

    #[test]
    fn split_tree_replays_to_minimum(p in proptest::collection::vec(1u64..60, 2..10)) {
        let n = p.len() - 1;
        let r = Solver::new().solve(&Dimensions::new(p.clone()).unwrap()).unwrap();
        prop_assert_eq!(replay(&r, &p, 1, n), r.minimum_cost);
        prop_assert_eq!(r.execution_cost(), r.minimum_cost);
    }

    #[test]
    fn parenthesization_is_well_formed(p in proptest::collection::vec(1u64..60, 2..12)) {
        let n = p.len() - 1;
        let r = Solver::new().solve(&Dimensions::new(p).unwrap()).unwrap();
        let s = &r.optimal_parenthesization;
        prop_assert_eq!(s.matches('A').count(), n);
        prop_assert!(balanced(s));
        prop_assert_eq!(labels_in_order(s), (1..=n).collect::<Vec<_>>());
        // One pair of brackets per multiplication.
        prop_assert_eq!(s.matches('(').count(), n - 1);
    }

    #[test]
    fn schedule_shape(p in proptest::collection::vec(1u64..60, 2..12)) {
        let n = p.len() - 1;
        let r = Solver::new().solve(&Dimensions::new(p.clone()).unwrap()).unwrap();
        let order = &r.execution_order;
        prop_assert_eq!(order.len(), n - 1);
        for (idx, step) in order.iter().enumerate() {
            prop_assert_eq!(step.step, idx + 1);
            prop_assert_eq!(step.left.cols, step.right.rows);
            prop_assert_eq!(step.cost, step.left.rows * step.left.cols * step.right.cols);
        }
        let finals: Vec<_> = order.iter().filter(|s| s.is_final()).collect();
        if n > 1 {
            prop_assert_eq!(finals.len(), 1);
            prop_assert!(order.last().unwrap().is_final());
            prop_assert_eq!(order.last().unwrap().result_shape(), (p[0], p[n]));
        } else {
            prop_assert!(finals.is_empty());
        }
    }

    #[test]
    fn operands_exist_before_use(p in proptest::collection::vec(1u64..60, 3..12)) {
        let r = Solver::new().solve(&Dimensions::new(p).unwrap()).unwrap();
        let mut produced = std::collections::HashSet::new();
        for step in &r.execution_order {
            for operand in [&step.left.name, &step.right.name] {
                if operand.starts_with("Temporary Matrix") {
                    prop_assert!(produced.remove(operand), "{} used before produced or twice", operand);
                }
            }
            produced.insert(step.result_name.clone());
        }
        prop_assert_eq!(produced.len(), 1);
        prop_assert!(produced.contains("Final Matrix"));
    }
}
