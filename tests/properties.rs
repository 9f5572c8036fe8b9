//! Property tests: search results against brute force over small tables

use cantor_search::{
    equal, exists, find, for_all, is_modulus, modulus, BitView, MaterializedView, Natural,
};
use proptest::prelude::*;

const WIDTH: usize = 6;

/// Predicate given by a truth table over a handful of positions below `WIDTH`
#[derive(Debug, Clone)]
struct TablePredicate {
    positions: Vec<Natural>,
    table: Vec<bool>,
}

impl TablePredicate {
    fn eval(&self, seq: &dyn BitView) -> Option<bool> {
        let mut index = 0usize;
        for &pos in &self.positions {
            index = (index << 1) | usize::from(seq.get(pos)?);
        }
        Some(self.table[index])
    }

    /// Evaluate on every assignment to positions `0..WIDTH`
    fn all_values(&self) -> Vec<bool> {
        (0..1u32 << WIDTH)
            .map(|bits| {
                let view = assignment(bits);
                self.eval(&view).expect("materialized views are always determined")
            })
            .collect()
    }
}

fn assignment(bits: u32) -> MaterializedView {
    MaterializedView::from_bits((0..WIDTH).map(|i| bits & (1 << i) != 0).collect())
}

fn table_predicate() -> impl Strategy<Value = TablePredicate> {
    proptest::sample::subsequence((0..WIDTH as Natural).collect::<Vec<_>>(), 0..=4)
        .prop_shuffle()
        .prop_flat_map(|positions| {
            let size = 1usize << positions.len();
            (
                Just(positions),
                proptest::collection::vec(any::<bool>(), size),
            )
        })
        .prop_map(|(positions, table)| TablePredicate { positions, table })
}

/// Least n such that assignments agreeing below n give the same value
fn brute_force_modulus(p: &TablePredicate) -> Natural {
    let values = p.all_values();
    (0..=WIDTH as Natural)
        .find(|&n| {
            let mask = (1u32 << n) - 1;
            (0..1u32 << WIDTH).all(|a| {
                (0..1u32 << WIDTH)
                    .filter(|b| a & mask == b & mask)
                    .all(|b| values[a as usize] == values[b as usize])
            })
        })
        .unwrap_or(WIDTH as Natural)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_exists_matches_table(p in table_predicate()) {
        let expected = p.table.iter().any(|&v| v);
        prop_assert_eq!(exists(|s| p.eval(s)), expected);
    }

    #[test]
    fn test_for_all_matches_table(p in table_predicate()) {
        let expected = p.table.iter().all(|&v| v);
        prop_assert_eq!(for_all(|s| p.eval(s)), expected);
    }

    #[test]
    fn test_quantifier_duality(p in table_predicate()) {
        let not_exists_not = !exists(|s| p.eval(s).map(|v| !v));
        prop_assert_eq!(for_all(|s| p.eval(s)), not_exists_not);
    }

    #[test]
    fn test_witness_satisfies(p in table_predicate()) {
        match find(|s| p.eval(s)) {
            Some(witness) => prop_assert_eq!(p.eval(&witness), Some(true)),
            None => prop_assert!(p.table.iter().all(|&v| !v)),
        }
    }

    #[test]
    fn test_equal_is_reflexive_and_symmetric(p in table_predicate(), q in table_predicate()) {
        prop_assert!(equal(|s| p.eval(s), |s| p.eval(s)));
        let expected = p.all_values() == q.all_values();
        prop_assert_eq!(equal(|s| p.eval(s), |s| q.eval(s)), expected);
        prop_assert_eq!(equal(|s| q.eval(s), |s| p.eval(s)), expected);
    }

    #[test]
    fn test_modulus_is_least(p in table_predicate()) {
        let f = |s: &dyn BitView| p.eval(s);
        let m = modulus(f);
        prop_assert_eq!(m, brute_force_modulus(&p));
        prop_assert!(is_modulus(m, &f));
        if m > 0 {
            prop_assert!(!is_modulus(m - 1, &f));
        }
    }
}
