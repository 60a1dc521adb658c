#![no_main]

use fuzz_lib::KeyOperation;
use keyfind::{
    AvlTree,
    BinarySearchTree,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|operations: Vec<KeyOperation>| {
    let mut bst = BinarySearchTree::new();
    let mut avl = AvlTree::new();
    let mut model: Vec<i16> = Vec::new();

    for operation in operations {
        match operation {
            KeyOperation::Insert(key) => {
                bst.insert(key);
                avl.insert(key);
                model.push(key);
                bst.debug_validate();
                avl.debug_validate();
            }
            KeyOperation::Find(key) => {
                let expected = model.contains(&key).then_some(&key);
                assert_eq!(bst.find(&key), expected, "BST lookup of {key}: {bst:?}");
                assert_eq!(avl.find(&key), expected, "AVL lookup of {key}: {avl:?}");
            }
        }
    }

    model.sort_unstable();
    let sorted: Vec<&i16> = model.iter().collect();
    assert_eq!(bst.inorder(), sorted);
    assert_eq!(avl.inorder(), sorted);
    assert!(avl.is_balanced(), "{avl:?}");
    assert_eq!(bst.min_value(), model.first());
    assert_eq!(avl.max_value(), model.last());
});
