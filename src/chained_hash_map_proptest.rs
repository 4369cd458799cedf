#![cfg(test)]

// Property tests for ChainedHashMap kept inside the crate so they can inspect
// chain placement directly.

use crate::chained_hash_map::{bucket_index, ChainedHashMap};
use proptest::prelude::*;
use std::collections::HashMap;
use std::hash::BuildHasher;

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum Op {
    Put(usize, i32),
    Remove(usize),
    Get(usize),
    Contains(String),
    Bump(usize),
    PutAll(Vec<(usize, i32)>),
    Clear,
}

fn arb_scenario() -> impl Strategy<Value = (usize, Vec<String>, Vec<Op>)> {
    (1usize..=7, proptest::collection::vec("[a-z]{0,4}", 1..=8)).prop_flat_map(
        |(table_size, pool)| {
            let n = pool.len();
            let idx = 0..n;
            let op = prop_oneof![
                6 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| Op::Put(i, v)),
                3 => idx.clone().prop_map(Op::Remove),
                3 => idx.clone().prop_map(Op::Get),
                2 => "[a-z]{0,4}".prop_map(Op::Contains),
                2 => idx.clone().prop_map(Op::Bump),
                1 => proptest::collection::vec((idx.clone(), any::<i32>()), 0..4)
                    .prop_map(Op::PutAll),
                1 => Just(Op::Clear),
            ];
            (
                Just(table_size),
                Just(pool),
                proptest::collection::vec(op, 1..80),
            )
        },
    )
}

fn assert_layout<S: BuildHasher>(m: &ChainedHashMap<String, i32, S>, hasher: &S) {
    let lengths = m.chain_lengths();
    assert_eq!(lengths.iter().sum::<usize>(), m.len());
    let mut per_bucket = vec![0usize; m.table_size()];
    for (k, _) in m.iter() {
        per_bucket[bucket_index(hasher.hash_one(k), m.table_size())] += 1;
    }
    assert_eq!(per_bucket, lengths, "entry outside its hash bucket");
}

proptest! {
    // Model: std HashMap. After every op the table agrees with the model on
    // len, lookups, and each entry sits in its hash bucket exactly once.
    #[test]
    fn prop_matches_model((table_size, pool, ops) in arb_scenario()) {
        let hasher = crate::chained_hash_map::DefaultState::default();
        let mut m: ChainedHashMap<String, i32> =
            ChainedHashMap::with_capacity(table_size).unwrap();
        let mut model: HashMap<String, i32> = HashMap::new();

        for op in ops {
            match op {
                Op::Put(i, v) => {
                    let k = pool[i].clone();
                    prop_assert_eq!(m.put(k.clone(), v), model.insert(k, v));
                }
                Op::Remove(i) => {
                    prop_assert_eq!(m.remove(pool[i].as_str()), model.remove(&pool[i]));
                }
                Op::Get(i) => {
                    prop_assert_eq!(m.get(pool[i].as_str()), model.get(&pool[i]));
                }
                Op::Contains(s) => {
                    prop_assert_eq!(m.contains_key(s.as_str()), model.contains_key(&s));
                }
                Op::Bump(i) => {
                    if let Some(v) = m.get_mut(pool[i].as_str()) {
                        *v = v.wrapping_add(1);
                    }
                    if let Some(v) = model.get_mut(&pool[i]) {
                        *v = v.wrapping_add(1);
                    }
                }
                Op::PutAll(pairs) => {
                    let pairs: Vec<(String, i32)> =
                        pairs.into_iter().map(|(i, v)| (pool[i].clone(), v)).collect();
                    m.put_all(pairs.clone());
                    model.extend(pairs);
                }
                Op::Clear => {
                    m.clear();
                    model.clear();
                }
            }

            prop_assert_eq!(m.len(), model.len());
            prop_assert_eq!(m.is_empty(), model.is_empty());
            prop_assert_eq!(m.table_size(), table_size);
            assert_layout(&m, &hasher);
        }

        let keys = m.keys();
        prop_assert_eq!(keys.len(), model.len());
        for (k, v) in &model {
            prop_assert!(keys.contains(k));
            prop_assert!(m.contains_value(v));
        }
    }

    // Re-inserting entries() into a fresh table of any size gives an equal table.
    #[test]
    fn prop_entries_rebuild_equal_table(
        pairs in proptest::collection::vec(("[a-z]{0,3}", any::<i32>()), 0..40),
        from_size in 1usize..=9,
        to_size in 1usize..=9,
    ) {
        let mut m: ChainedHashMap<String, i32> = ChainedHashMap::with_capacity(from_size).unwrap();
        m.put_all(pairs.iter().cloned());
        let distinct: std::collections::BTreeSet<&String> = pairs.iter().map(|(k, _)| k).collect();
        prop_assert_eq!(m.len(), distinct.len());

        let mut rebuilt: ChainedHashMap<String, i32> = ChainedHashMap::with_capacity(to_size).unwrap();
        rebuilt.put_all(m.entries());
        prop_assert!(rebuilt == m);
        prop_assert!(m == rebuilt);

        let mut sorted_values = m.values();
        let mut expected: Vec<i32> = m.entries().into_iter().map(|(_, v)| v).collect();
        sorted_values.sort();
        expected.sort();
        prop_assert_eq!(sorted_values, expected);
    }
}
