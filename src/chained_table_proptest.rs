#![cfg(test)]

// Property tests for HashTable kept inside the crate so they can inspect
// chains directly.

use crate::chained_table::HashTable;
use proptest::prelude::*;

// Pool-indexed operations: indices shrink toward earlier keys, and the pool
// itself shrinks, which keeps counterexamples small.
#[derive(Clone, Debug)]
enum OpI {
    Set(usize, i32),
    Get(usize),
    GetAbsent(String),
}

fn arb_scenario() -> impl Strategy<Value = (usize, Vec<String>, Vec<OpI>)> {
    (1usize..=6, proptest::collection::vec("[a-c]{0,4}", 1..=8)).prop_flat_map(|(cap, pool)| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Set(i, v)),
            idx.clone().prop_map(OpI::Get),
            "[x-z]{1,3}".prop_map(OpI::GetAbsent),
        ];
        proptest::collection::vec(op, 1..60).prop_map(move |ops| (cap, pool.clone(), ops))
    })
}

// Model: the full insertion log. A lookup answers with the value of the
// latest logged insertion for that key.
fn model_get(log: &[(String, i32)], key: &str) -> Option<i32> {
    log.iter().rev().find(|(k, _)| k == key).map(|(_, v)| *v)
}

// Property: State-machine equivalence against an insertion log.
// Invariants exercised across random operation sequences:
// - `get` returns the most recent value set for a key, `None` otherwise.
// - `len` counts every insertion, duplicates included.
// - Every entry reachable from bucket `i` hashes to `i`.
// - Chain lengths sum to `len`.
// - `destroy` releases exactly `len` entries.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((cap, pool, ops) in arb_scenario()) {
        let mut sut = HashTable::new(cap).unwrap();
        let mut log: Vec<(String, i32)> = Vec::new();

        for op in ops {
            match op {
                OpI::Set(i, v) => {
                    sut.set(&pool[i], v);
                    log.push((pool[i].clone(), v));
                }
                OpI::Get(i) => {
                    prop_assert_eq!(sut.get(&pool[i]), model_get(&log, &pool[i]));
                }
                OpI::GetAbsent(k) => {
                    prop_assert_eq!(sut.get(&k), None);
                    prop_assert!(!sut.contains_key(&k));
                }
            }
            prop_assert_eq!(sut.len(), log.len());
        }

        let mut total = 0usize;
        for b in 0..cap {
            let chain = sut.chain_keys(b);
            for (k, _) in &chain {
                prop_assert_eq!(sut.bucket_of(k), b, "entry {:?} chained in wrong bucket", k);
            }
            total += chain.len();
        }
        prop_assert_eq!(total, sut.len());

        for k in &pool {
            prop_assert_eq!(sut.get(k), model_get(&log, k));
        }
        prop_assert_eq!(sut.destroy(), log.len());
    }
}

// Property: within one chain, entries appear newest first.
proptest! {
    #[test]
    fn prop_chain_is_reverse_insertion_order(keys in proptest::collection::vec("[a-z]{0,6}", 0..40)) {
        let mut t = HashTable::new(1).unwrap();
        for (i, k) in keys.iter().enumerate() {
            t.set(k, i as i32);
        }
        let expected: Vec<(&str, i32)> = keys
            .iter()
            .enumerate()
            .rev()
            .map(|(i, k)| (k.as_str(), i as i32))
            .collect();
        prop_assert_eq!(t.chain_keys(0), expected);
    }
}
