use std::{
    collections::HashSet,
    num::NonZeroUsize,
};

use keyfind::{
    Error,
    HashTableChaining,
    HashTableProbing,
    KeySet,
};
use rand::{
    Rng,
    SeedableRng,
    rngs::StdRng,
};

fn capacity(slots: usize) -> NonZeroUsize {
    NonZeroUsize::new(slots).unwrap()
}

#[test]
fn test_chaining_and_probing_agree() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut chaining = HashTableChaining::new(capacity(1_009));
    let mut probing = HashTableProbing::new(capacity(1_009));
    let mut reference = HashSet::new();

    while reference.len() < 700 {
        let key = rng.random_range(10_000_000i64..=99_999_999);
        if reference.insert(key) {
            chaining.insert(key);
            probing.insert(key).unwrap();
        }
    }
    assert_eq!(chaining.len(), probing.len());

    for _ in 0..5_000 {
        let key = if rng.random_bool(0.5) {
            rng.random_range(10_000_000i64..=99_999_999)
        } else {
            rng.random_range(100_000_000i64..=999_999_999)
        };
        let expected = reference.contains(&key).then_some(key);
        assert_eq!(chaining.find(key), expected, "chaining on {key}");
        assert_eq!(probing.find(key), expected, "probing on {key}");
    }
    for &key in &reference {
        assert_eq!(chaining.find(key), Some(key));
        assert_eq!(probing.find(key), Some(key));
    }
}

#[test]
fn test_probing_table_full_on_extra_distinct_key() {
    for slots in [1usize, 2, 5, 11, 101] {
        let mut table = HashTableProbing::new(capacity(slots));
        for key in 0..slots as i64 {
            table.insert(key * 31 + 7).unwrap();
        }
        assert!(table.is_full());
        let err = table.insert(-1).unwrap_err();
        assert!(
            matches!(err, Error::TableFull { capacity } if capacity == slots),
            "{err}"
        );
        assert_eq!(table.len(), slots);
        assert_eq!(table.find(-1), None);
    }
}

#[test]
fn test_probing_full_table_still_finds_keys() {
    let mut table = HashTableProbing::new(capacity(7));
    let keys = [0, 7, 14, 21, 28, 35, 42];
    for key in keys {
        table.insert(key).unwrap();
    }
    for key in keys {
        assert_eq!(table.find(key), Some(key));
    }
    assert_eq!(table.find(49), None);
}

#[test]
fn test_probing_sample_scenario() {
    let mut table = HashTableProbing::new(capacity(5));
    assert_eq!(table.insert(3).unwrap(), 3);
    assert_eq!(table.insert(8).unwrap(), 4);
    assert_eq!(table.insert(13).unwrap(), 0);
    assert_eq!(
        table.slots().collect::<Vec<_>>(),
        [Some(13), None, None, Some(3), Some(8)]
    );
    assert_eq!(table.find(13), Some(13));
    assert_eq!(table.find(18), None);
}

#[test]
fn test_negative_keys_land_in_range() {
    let mut chaining = HashTableChaining::new(capacity(13));
    let mut probing = HashTableProbing::new(capacity(13));
    for key in [-1i64, -13, -14, -1_000_001, i64::MIN, i64::MIN + 1] {
        chaining.insert(key);
        let slot = probing.insert(key).unwrap();
        assert!(slot < 13);
        assert_eq!(chaining.find(key), Some(key));
        assert_eq!(probing.find(key), Some(key));
    }
    assert_eq!(chaining.bucket_len(12), Some(2));
    assert_eq!(chaining.bucket_len(0), Some(1));
}

#[test]
fn test_zero_key_is_distinguishable_from_miss() {
    let mut chaining = HashTableChaining::default();
    let mut probing = HashTableProbing::default();
    assert_eq!(chaining.find(0), None);
    assert_eq!(probing.find(0), None);
    chaining.insert(0);
    probing.insert(0).unwrap();
    assert_eq!(chaining.find(0), Some(0));
    assert_eq!(probing.find(0), Some(0));
}

#[test]
fn test_key_set_trait_objects() {
    let mut sets: Vec<Box<dyn KeySet>> = vec![
        Box::new(HashTableChaining::new(capacity(3))),
        Box::new(HashTableProbing::new(capacity(3))),
    ];
    for set in &mut sets {
        assert!(set.is_empty());
        for key in [1, 4, 7] {
            set.insert_key(key).unwrap();
        }
        assert_eq!(set.len(), 3);
        assert_eq!(set.find_key(4), Some(4));
        assert_eq!(set.find_key(10), None);
    }

    let probing = &mut sets[1];
    assert!(matches!(
        probing.insert_key(10),
        Err(Error::TableFull { capacity: 3 })
    ));
    sets[0].insert_key(10).unwrap();
    assert_eq!(sets[0].len(), 4);
}

#[test]
fn test_display_layouts() {
    let mut chaining = HashTableChaining::new(capacity(2));
    let mut probing = HashTableProbing::new(capacity(2));
    for key in [2, 4, 3] {
        chaining.insert(key);
    }
    probing.insert(3).unwrap();

    assert_eq!(chaining.to_string(), "bucket 0: 2: 2 4\nbucket 1: 1: 3\n");
    assert_eq!(probing.to_string(), "bucket 0: None\nbucket 1: 3\n");
}
