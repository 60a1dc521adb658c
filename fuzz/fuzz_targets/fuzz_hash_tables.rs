#![no_main]

use std::num::NonZeroUsize;

use fuzz_lib::KeyOperation;
use keyfind::{
    Error,
    HashTableChaining,
    HashTableProbing,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (u8, Vec<KeyOperation>)| {
    let (size, operations) = data;
    let size = NonZeroUsize::new(usize::from(size.max(1))).unwrap();

    let mut chaining = HashTableChaining::new(size);
    let mut probing = HashTableProbing::new(size);
    let mut model: Vec<i64> = Vec::new();

    for operation in operations {
        chaining.debug_validate();
        probing.debug_validate();

        match operation {
            KeyOperation::Insert(key) => {
                let key = i64::from(key);
                chaining.insert(key);
                match probing.insert(key) {
                    Ok(slot) => {
                        assert!(slot < size.get());
                        assert_eq!(probing.slot(slot), Some(key));
                        model.push(key);
                    }
                    Err(Error::TableFull { capacity }) => {
                        assert_eq!(capacity, size.get());
                        assert_eq!(model.len(), size.get());
                    }
                    Err(err) => panic!("Unexpected error: {err}"),
                }
            }
            KeyOperation::Find(key) => {
                let key = i64::from(key);
                let expected = model.contains(&key).then_some(key);
                assert_eq!(probing.find(key), expected, "Probing lookup of {key}: {probing}");
                if expected.is_some() {
                    assert_eq!(chaining.find(key), expected);
                }
            }
        }
        assert_eq!(probing.len(), model.len());
    }
});
