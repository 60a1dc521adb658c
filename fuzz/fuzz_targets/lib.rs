#[derive(Debug)]
pub enum ListOperation {
    Insert(i8, i16),
    Append(i16),
    Prepend(i16),
    Pop(Option<u8>),
    Get(u8),
    Find(i16),
    Clear,
}

impl<'a> arbitrary::Arbitrary<'a> for ListOperation {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        match u.int_in_range(0..=6)? {
            0 => Ok(ListOperation::Insert(u.arbitrary()?, u.arbitrary()?)),
            1 => Ok(ListOperation::Append(u.arbitrary()?)),
            2 => Ok(ListOperation::Prepend(u.arbitrary()?)),
            3 => Ok(ListOperation::Pop(u.arbitrary()?)),
            4 => Ok(ListOperation::Get(u.arbitrary()?)),
            5 => Ok(ListOperation::Find(u.arbitrary()?)),
            6 => Ok(ListOperation::Clear),
            _ => unreachable!(),
        }
    }
}

#[derive(Debug)]
pub enum KeyOperation {
    Insert(i16),
    Find(i16),
}

impl<'a> arbitrary::Arbitrary<'a> for KeyOperation {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        match u.int_in_range(0..=1)? {
            0 => Ok(KeyOperation::Insert(u.arbitrary()?)),
            1 => Ok(KeyOperation::Find(u.arbitrary()?)),
            _ => unreachable!(),
        }
    }
}
