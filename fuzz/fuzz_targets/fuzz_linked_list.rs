#![no_main]

use fuzz_lib::ListOperation;
use keyfind::{
    Error,
    LinkedList,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|operations: Vec<ListOperation>| {
    let mut list = LinkedList::new();
    let mut model: Vec<i16> = Vec::new();

    for operation in operations {
        list.debug_validate();
        assert_eq!(list.len(), model.len(), "Length diverged: {list:?}");
        assert_eq!(list.back(), model.last(), "Tail diverged: {list:?}");

        match operation {
            ListOperation::Insert(index, value) => {
                list.insert(index as isize, value);
                let at = (index.max(0) as usize).min(model.len());
                model.insert(at, value);
            }
            ListOperation::Append(value) => {
                list.append(value);
                model.push(value);
            }
            ListOperation::Prepend(value) => {
                list.prepend(value);
                model.insert(0, value);
            }
            ListOperation::Pop(index) => {
                let index = index.map(usize::from);
                match list.pop(index) {
                    Ok(popped) => {
                        let expected = if model.is_empty() {
                            None
                        } else {
                            Some(model.remove(index.unwrap_or(model.len() - 1)))
                        };
                        assert_eq!(popped, expected, "Pop {index:?} diverged: {list:?}");
                    }
                    Err(Error::IndexOutOfRange { index, len }) => {
                        assert!(index >= len && len == model.len() && len > 0);
                    }
                    Err(err) => panic!("Unexpected error: {err}"),
                }
            }
            ListOperation::Get(index) => {
                let index = usize::from(index);
                assert_eq!(list.get(index).ok(), model.get(index));
            }
            ListOperation::Find(value) => {
                assert_eq!(list.find(&value), model.iter().find(|v| **v == value));
            }
            ListOperation::Clear => {
                list.clear();
                model.clear();
            }
        }
    }

    list.debug_validate();
    assert_eq!(list.into_iter().collect::<Vec<_>>(), model);
});
