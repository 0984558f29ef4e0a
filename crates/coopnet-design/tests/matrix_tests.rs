use coopnet_design::{generate, EdgeId, ALL_EDGES};
use proptest::prelude::*;
use std::collections::HashSet;

fn active_factors() -> impl Strategy<Value = Vec<EdgeId>> {
    prop::sample::subsequence(ALL_EDGES.to_vec(), 0..=10).prop_shuffle()
}

proptest! {
    #[test]
    fn prop_matrix_size_and_ids(factors in active_factors()) {
        let matrix = generate(&factors).unwrap();
        prop_assert_eq!(matrix.len(), 1 << factors.len());
        for (i, scenario) in matrix.iter().enumerate() {
            prop_assert_eq!(scenario.id() as usize, i + 1);
            prop_assert_eq!(scenario.factor_count(), factors.len());
        }
    }

    #[test]
    fn prop_states_follow_binary_counting(factors in active_factors()) {
        let matrix = generate(&factors).unwrap();
        for (i, scenario) in matrix.iter().enumerate() {
            for (j, factor) in factors.iter().enumerate() {
                let expected = ((i >> j) & 1) as u8;
                prop_assert_eq!(scenario.state(*factor).unwrap().bit(), expected);
            }
        }
    }

    #[test]
    fn prop_full_cartesian_coverage(factors in active_factors()) {
        let matrix = generate(&factors).unwrap();
        let tuples: HashSet<Vec<u8>> = matrix
            .iter()
            .map(|s| s.states().map(|(_, state)| state.bit()).collect())
            .collect();
        // No duplicates, and every {0,1}^k combination present.
        prop_assert_eq!(tuples.len(), 1 << factors.len());
    }

    #[test]
    fn prop_generation_is_idempotent(factors in active_factors()) {
        prop_assert_eq!(generate(&factors).unwrap(), generate(&factors).unwrap());
    }
}
