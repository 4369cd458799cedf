// ChainedHashMap public API suite.
//
// Each test documents what behavior is being verified. The core invariants
// exercised:
// - Uniqueness: len() equals the number of distinct keys put.
// - Replacement: put on a present key returns the old value, keeps one entry.
// - Removal: remove returns the value once; len drops by exactly one.
// - Clear: empties the table and keeps its size.
// - Views: entries() rebuilds an equal table regardless of table size.
use chain_map::{ChainedHashMap, TableError, DEFAULT_TABLE_SIZE};
use std::collections::BTreeSet;

// Test: all keys collide into one chain.
// Verifies: the map contract holds with a single bucket.
#[test]
fn single_bucket_holds_distinct_keys() {
    let mut m = ChainedHashMap::with_capacity(1).unwrap();
    m.put("a".to_string(), 1);
    m.put("b".to_string(), 2);
    m.put("c".to_string(), 3);
    assert_eq!(m.len(), 3);
    assert_eq!(m.get("b"), Some(&2));
    let keys: BTreeSet<String> = m.keys().into_iter().collect();
    let expected: BTreeSet<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
    assert_eq!(keys, expected);
    assert_eq!(m.chain_lengths(), vec![3]);
}

// Test: constructor validation.
// Verifies: zero is rejected with InvalidCapacity; the default size is 11.
#[test]
fn construction() {
    let err = ChainedHashMap::<u8, u8>::with_capacity(0).unwrap_err();
    assert_eq!(err, TableError::InvalidCapacity { requested: 0 });
    assert_eq!(err.to_string(), "table size must be positive, got 0");
    let m: ChainedHashMap<u8, u8> = ChainedHashMap::default();
    assert_eq!(m.table_size(), DEFAULT_TABLE_SIZE);
    assert_eq!(DEFAULT_TABLE_SIZE, 11);
}

// Test: put/get/contains and the previous-value contract.
// Verifies: second put returns first value and leaves exactly one entry.
#[test]
fn put_twice_keeps_one_entry() {
    let mut m: ChainedHashMap<String, &str> = ChainedHashMap::new();
    assert_eq!(m.put("k".into(), "v1"), None);
    assert!(m.contains_key("k"));
    assert_eq!(m.get("k"), Some(&"v1"));
    assert_eq!(m.put("k".into(), "v2"), Some("v1"));
    assert_eq!(m.len(), 1);
    assert_eq!(m.get("k"), Some(&"v2"));
    assert_eq!(m.values(), vec!["v2"]);
}

// Test: remove semantics.
// Verifies: remove returns the value, then the key is absent and len drops by one;
// removing an absent key changes nothing.
#[test]
fn remove_present_and_absent() {
    let mut m: ChainedHashMap<u32, u32> = ChainedHashMap::with_capacity(3).unwrap();
    m.put_all((0..10).map(|i| (i, i * 10)));
    assert_eq!(m.len(), 10);

    assert_eq!(m.remove(&4), Some(40));
    assert_eq!(m.len(), 9);
    assert_eq!(m.get(&4), None);
    assert!(!m.contains_key(&4));

    assert_eq!(m.remove(&4), None);
    assert_eq!(m.remove(&99), None);
    assert_eq!(m.len(), 9);
}

// Test: clear.
// Verifies: len 0, is_empty, and previously present keys are absent.
#[test]
fn clear_forgets_everything() {
    let mut m: ChainedHashMap<String, i32> = ChainedHashMap::new();
    for (i, k) in ["x", "y", "z"].iter().enumerate() {
        m.put(k.to_string(), i as i32);
    }
    m.clear();
    assert_eq!(m.len(), 0);
    assert!(m.is_empty());
    for k in ["x", "y", "z"] {
        assert_eq!(m.get(k), None);
    }
    assert_eq!(m.table_size(), DEFAULT_TABLE_SIZE);
}

// Test: put_all merge.
// Verifies: A={x:1} merged with B={x:2,y:3} yields A={x:2,y:3}.
#[test]
fn put_all_merges_and_overwrites() {
    let mut a: ChainedHashMap<&str, i32> = ChainedHashMap::new();
    a.put("x", 1);
    let mut b: ChainedHashMap<&str, i32> = ChainedHashMap::with_capacity(2).unwrap();
    b.put("x", 2);
    b.put("y", 3);

    a.put_all(b.entries());
    let expected: ChainedHashMap<&str, i32> = [("x", 2), ("y", 3)].into_iter().collect();
    assert_eq!(a, expected);
    assert_eq!(a.len(), 2);

    // Extend goes through the same path.
    a.extend([("z", 4)]);
    assert_eq!(a.get("z"), Some(&4));
}

// Test: contains_value scans all chains.
#[test]
fn contains_value_across_chains() {
    let mut m: ChainedHashMap<u64, String> = ChainedHashMap::with_capacity(5).unwrap();
    for i in 0..25u64 {
        m.put(i, format!("v{i}"));
    }
    assert!(m.contains_value(&"v0".to_string()));
    assert!(m.contains_value(&"v24".to_string()));
    assert!(!m.contains_value(&"v25".to_string()));
}

// Test: round trip through entries().
// Verifies: re-inserting entries into tables of other sizes gives equal tables.
#[test]
fn entries_round_trip_across_sizes() {
    let mut m: ChainedHashMap<String, usize> = ChainedHashMap::with_capacity(7).unwrap();
    for (i, w) in "one two three four five six seven eight".split(' ').enumerate() {
        m.put(w.to_string(), i);
    }
    for size in [1, 2, 11, 101] {
        let mut fresh = ChainedHashMap::with_capacity(size).unwrap();
        fresh.put_all(m.entries());
        assert_eq!(fresh, m, "table size {size}");
    }
}

// Test: Debug shows one list per bucket.
// Verifies: the rendering is deterministic for equal contents and size.
#[test]
fn debug_rendering_is_deterministic() {
    let build = || {
        let mut m: ChainedHashMap<&str, i32> = ChainedHashMap::with_capacity(4).unwrap();
        m.put("a", 1);
        m.put("b", 2);
        m
    };
    let first = format!("{:?}", build());
    assert_eq!(first, format!("{:?}", build()));
    assert!(first.starts_with('[') && first.ends_with(']'));
    assert!(first.contains(r#"("a", 1)"#));
    assert!(first.contains(r#"("b", 2)"#));

    let empty: ChainedHashMap<&str, i32> = ChainedHashMap::with_capacity(2).unwrap();
    assert_eq!(format!("{:?}", empty), "[[], []]");
}

// Test: clones are independent.
#[test]
fn clone_is_independent() {
    let mut m: ChainedHashMap<String, i32> = ChainedHashMap::new();
    m.put("k".into(), 1);
    let snapshot = m.clone();
    m.put("k".into(), 2);
    assert_eq!(snapshot.get("k"), Some(&1));
    assert_ne!(snapshot, m);
}
