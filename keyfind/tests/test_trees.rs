use keyfind::{
    AvlTree,
    BinarySearchTree,
    Traversal,
};
use rand::{
    Rng,
    SeedableRng,
    rngs::StdRng,
};

fn avl_height_bound(len: usize) -> f64 {
    1.44 * ((len + 2) as f64).log2() - 0.328
}

fn random_keys(seed: u64, count: usize) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| rng.random_range(-1_000_000..1_000_000))
        .collect()
}

fn is_sorted(keys: &[&i64]) -> bool {
    keys.windows(2).all(|pair| pair[0] <= pair[1])
}

#[test]
fn test_bst_inorder_sorted_for_random_input() {
    for seed in 0..8 {
        let keys = random_keys(seed, 2_000);
        let tree: BinarySearchTree<i64> = keys.iter().copied().collect();
        let inorder = tree.inorder();
        assert_eq!(inorder.len(), keys.len());
        assert!(is_sorted(&inorder), "seed {seed}");

        let mut expected = keys.clone();
        expected.sort_unstable();
        assert_eq!(inorder.into_iter().copied().collect::<Vec<_>>(), expected);
    }
}

#[test]
fn test_bst_find_inserted_and_absent() {
    let keys = random_keys(42, 1_000);
    let tree: BinarySearchTree<i64> = keys.iter().copied().collect();
    for key in &keys {
        assert_eq!(tree.find(key), Some(key));
    }
    for key in keys.iter().map(|key| key + 1).take(100) {
        assert_eq!(tree.contains(&key), keys.contains(&key), "{key}");
    }
    assert_eq!(tree.find(&1_000_000), None);
}

#[test]
fn test_bst_min_max() {
    let keys = random_keys(7, 500);
    let tree: BinarySearchTree<i64> = keys.iter().copied().collect();
    assert_eq!(tree.min_value(), keys.iter().min());
    assert_eq!(tree.max_value(), keys.iter().max());
}

#[test]
fn test_bst_traversals_visit_every_key() {
    let tree: BinarySearchTree<i64> = [8, 3, 10, 1, 6, 14, 4, 7, 13].into_iter().collect();
    let collect = |order| {
        tree.traverse(order)
            .into_iter()
            .copied()
            .collect::<Vec<_>>()
    };
    assert_eq!(collect(Traversal::Preorder), [8, 3, 1, 6, 4, 7, 10, 14, 13]);
    assert_eq!(collect(Traversal::Inorder), [1, 3, 4, 6, 7, 8, 10, 13, 14]);
    assert_eq!(collect(Traversal::Postorder), [1, 4, 7, 6, 3, 13, 14, 10, 8]);
}

#[test]
fn test_avl_balanced_after_every_insert() {
    let mut rng = StdRng::seed_from_u64(1234);
    let mut tree = AvlTree::new();
    for inserted in 1..=3_000usize {
        tree.insert(rng.random_range(-5_000i64..5_000));
        assert!(tree.is_balanced(), "unbalanced after {inserted} inserts");
        assert!(
            f64::from(tree.height()) <= avl_height_bound(inserted),
            "height {} exceeds bound for {inserted} keys",
            tree.height()
        );
    }
    assert!(is_sorted(&tree.inorder()));
}

#[test]
fn test_avl_height_bound_for_monotonic_input() {
    for len in [1usize, 2, 10, 100, 1_000, 20_000] {
        let ascending: AvlTree<i64> = (0..len as i64).collect();
        let descending: AvlTree<i64> = (0..len as i64).rev().collect();
        for tree in [&ascending, &descending] {
            assert_eq!(tree.len(), len);
            assert!(tree.is_balanced());
            assert!(
                f64::from(tree.height()) <= avl_height_bound(len),
                "height {} exceeds bound for {len} keys",
                tree.height()
            );
        }
    }
}

#[test]
fn test_avl_zigzag_input_stays_balanced() {
    let mut tree = AvlTree::new();
    for i in 0..1_000i64 {
        let key = if i % 2 == 0 { i } else { -i };
        tree.insert(key);
        assert!(tree.is_balanced());
    }
    assert_eq!(tree.min_value(), Some(&-999));
    assert_eq!(tree.max_value(), Some(&998));
}

#[test]
fn test_avl_sample_tree() {
    let tree: AvlTree<i64> = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();
    assert_eq!(
        tree.inorder().into_iter().copied().collect::<Vec<_>>(),
        [20, 30, 40, 50, 60, 70, 80]
    );
    assert_eq!(tree.height(), 2);
    assert_eq!(tree.to_string(), "20 30 40 50 60 70 80");
}

#[test]
fn test_avl_and_bst_agree_on_lookups() {
    let keys = random_keys(99, 4_000);
    let bst: BinarySearchTree<i64> = keys.iter().copied().collect();
    let avl: AvlTree<i64> = keys.iter().copied().collect();

    assert_eq!(bst.inorder(), avl.inorder());
    assert!(avl.height() <= bst.height());

    let mut rng = StdRng::seed_from_u64(100);
    for _ in 0..2_000 {
        let probe = rng.random_range(-1_000_000i64..1_000_000);
        assert_eq!(bst.find(&probe), avl.find(&probe), "disagree on {probe}");
    }
}

#[test]
fn test_avl_duplicates_all_kept() {
    let mut tree = AvlTree::new();
    for _ in 0..3 {
        for key in 0..100i64 {
            tree.insert(key);
        }
    }
    assert_eq!(tree.len(), 300);
    assert!(tree.is_balanced());
    let inorder = tree.inorder();
    assert!(is_sorted(&inorder));
    assert_eq!(inorder.iter().filter(|key| ***key == 42).count(), 3);
}
