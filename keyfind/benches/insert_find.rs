use std::{
    hint::black_box,
    num::NonZeroUsize,
};

use criterion::{
    Criterion,
    criterion_group,
    criterion_main,
};
use keyfind::{
    AvlTree,
    BinarySearchTree,
    HashTableChaining,
    HashTableProbing,
    Key,
    KeySet,
    LinkedList,
};
use rand::{
    Rng,
    SeedableRng,
    rngs::StdRng,
};

/// Slot count comfortably above the largest key count below.
const TABLE_CAPACITY: NonZeroUsize = NonZeroUsize::new(20_011).unwrap();

fn ids(count: usize) -> Vec<Key> {
    let mut rng = StdRng::seed_from_u64(count as u64);
    (0..count)
        .map(|_| rng.random_range(10_000_000..=99_999_999))
        .collect()
}

fn false_ids(count: usize) -> Vec<Key> {
    let mut rng = StdRng::seed_from_u64(!(count as u64));
    (0..count)
        .map(|_| rng.random_range(100_000_000..=999_999_999))
        .collect()
}

macro_rules! bench_set {
    ($bench_set:ident, $set:ty, $new:expr, $count:expr) => {
        mod $bench_set {
            use super::*;

            fn filled() -> $set {
                let mut set: $set = $new;
                for key in ids($count) {
                    set.insert_key(key).unwrap();
                }
                set
            }

            pub fn bench_insert(c: &mut Criterion) {
                let mut group = c.benchmark_group(concat!(stringify!($bench_set), "_insert"));
                group.bench_function(criterion::BenchmarkId::from_parameter($count), |b| {
                    let keys = ids($count);
                    b.iter(|| {
                        let mut set: $set = $new;
                        for &key in &keys {
                            black_box(set.insert_key(key)).unwrap();
                        }
                        black_box(set)
                    });
                });
                group.finish();
            }

            pub fn bench_find(c: &mut Criterion) {
                let mut group = c.benchmark_group(concat!(stringify!($bench_set), "_find"));
                group.bench_function(criterion::BenchmarkId::from_parameter($count), |b| {
                    let set = filled();
                    let keys = ids($count);
                    b.iter(|| {
                        for &key in &keys {
                            black_box(set.find_key(black_box(key)));
                        }
                    });
                });
                group.finish();
            }

            pub fn bench_find_not_found(c: &mut Criterion) {
                let mut group = c.benchmark_group(concat!(stringify!($bench_set), "_find_not_found"));
                group.bench_function(criterion::BenchmarkId::from_parameter($count), |b| {
                    let set = filled();
                    let keys = false_ids($count / 100);
                    b.iter(|| {
                        for &key in &keys {
                            black_box(set.find_key(black_box(key)));
                        }
                    });
                });
                group.finish();
            }
        }

        criterion_group!(
            $bench_set,
            $bench_set::bench_insert,
            $bench_set::bench_find,
            $bench_set::bench_find_not_found,
        );
    };
}

bench_set!(linked_list, LinkedList<Key>, LinkedList::new(), 1_000);
bench_set!(bst, BinarySearchTree<Key>, BinarySearchTree::new(), 10_000);
bench_set!(avl, AvlTree<Key>, AvlTree::new(), 10_000);
bench_set!(
    chaining,
    HashTableChaining,
    HashTableChaining::new(TABLE_CAPACITY),
    10_000
);
bench_set!(
    probing,
    HashTableProbing,
    HashTableProbing::new(TABLE_CAPACITY),
    10_000
);

criterion_main!(linked_list, bst, avl, chaining, probing);
