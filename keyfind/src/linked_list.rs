use std::fmt;

use slab::Slab;

use crate::{
    Error,
    Key,
    KeySet,
    Result,
};

#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
struct Ptr(usize);

impl fmt::Debug for Ptr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "Ptr(null)")
        } else {
            write!(f, "Ptr({})", self.0)
        }
    }
}

impl Default for Ptr {
    fn default() -> Self {
        Ptr::null()
    }
}

impl Ptr {
    fn null() -> Self {
        Ptr(usize::MAX)
    }

    fn is_null(&self) -> bool {
        *self == Ptr::null()
    }

    fn unchecked_from(key: usize) -> Self {
        debug_assert_ne!(key, usize::MAX, "Slab key must not be usize::MAX");
        Ptr(key)
    }

    fn unchecked_get(self) -> usize {
        self.0
    }

    fn optional(self) -> Option<Ptr> {
        if self.is_null() { None } else { Some(self) }
    }
}

#[derive(Debug, Clone)]
struct ListNode<T> {
    value: T,
    next: Ptr,
}

/// A singly linked list with head and tail handles.
///
/// Nodes live in a [`Slab`] and link to their successor by slab key, so the
/// list owns every node exclusively and the tail can be reached in O(1)
/// without aliasing. Positions are logical (0 is the head).
///
/// # Time Complexity
/// - `prepend`/`append`/`front`/`back`: O(1)
/// - `insert`/`get`/`pop`/`find`: O(n)
///
/// # Examples
///
/// ```
/// use keyfind::LinkedList;
///
/// let mut list = LinkedList::new();
/// list.prepend(1);
/// list.append(3);
/// list.insert(1, 2);
///
/// assert_eq!(list.to_string(), "1 2 3");
/// assert_eq!(list.find(&2), Some(&2));
/// assert_eq!(list.find(&4), None);
/// ```
#[derive(Clone)]
pub struct LinkedList<T> {
    head: Ptr,
    tail: Ptr,
    nodes: Slab<ListNode<T>>,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        LinkedList {
            head: Ptr::null(),
            tail: Ptr::null(),
            nodes: Slab::new(),
        }
    }

    /// Creates an empty list with room for `capacity` nodes before
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        LinkedList {
            head: Ptr::null(),
            tail: Ptr::null(),
            nodes: Slab::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.head.is_null()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = Ptr::null();
        self.tail = Ptr::null();
    }

    /// Returns the first element, or `None` if the list is empty.
    pub fn front(&self) -> Option<&T> {
        self.head
            .optional()
            .map(|ptr| &self.nodes[ptr.unchecked_get()].value)
    }

    /// Returns the last element, or `None` if the list is empty.
    pub fn back(&self) -> Option<&T> {
        self.tail
            .optional()
            .map(|ptr| &self.nodes[ptr.unchecked_get()].value)
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T> {
        let ptr = self.node_at(index)?;
        Ok(&self.nodes[ptr.unchecked_get()].value)
    }

    /// Inserts `value` before the element currently at `index`.
    ///
    /// The index saturates instead of failing: any `index <= 0` inserts at
    /// the head and any `index >= len` inserts at the tail.
    ///
    /// ```
    /// use keyfind::LinkedList;
    ///
    /// let mut list: LinkedList<i32> = [1, 2].into_iter().collect();
    /// list.insert(-7, 0);
    /// list.insert(100, 3);
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3]);
    /// ```
    pub fn insert(&mut self, index: isize, value: T) {
        let index = usize::try_from(index).unwrap_or(0);
        if self.is_empty() || index == 0 {
            self.link_front(value);
        } else if index >= self.len() {
            self.link_back(value);
        } else {
            // index - 1 < len - 1, so the predecessor exists and is not the
            // tail.
            let prev = self.ptr_at(index - 1).unwrap_or(self.tail);
            let next = self.nodes[prev.unchecked_get()].next;
            let ptr = Ptr::unchecked_from(self.nodes.insert(ListNode { value, next }));
            self.nodes[prev.unchecked_get()].next = ptr;
        }
    }

    /// Inserts `value` at the head.
    pub fn prepend(&mut self, value: T) {
        self.insert(0, value);
    }

    /// Inserts `value` at the tail.
    pub fn append(&mut self, value: T) {
        self.insert(isize::MAX, value);
    }

    /// Removes and returns the element at `index`, or the last element when
    /// `index` is `None`.
    ///
    /// Returns `Ok(None)` on an empty list.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] if the list is not empty and
    /// `index >= len`.
    pub fn pop(&mut self, index: Option<usize>) -> Result<Option<T>> {
        if self.is_empty() {
            return Ok(None);
        }

        let len = self.len();
        let index = index.unwrap_or(len - 1);
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }

        if index == 0 {
            return Ok(self.pop_front());
        }

        let prev = self.ptr_at(index - 1).unwrap_or(self.tail);
        let target = self.nodes[prev.unchecked_get()].next;
        let removed = self.nodes.remove(target.unchecked_get());
        self.nodes[prev.unchecked_get()].next = removed.next;
        if target == self.tail {
            self.tail = prev;
        }

        Ok(Some(removed.value))
    }

    /// Removes and returns the first element.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head.optional()?;
        let removed = self.nodes.remove(head.unchecked_get());
        self.head = removed.next;
        if self.head.is_null() {
            self.tail = Ptr::null();
        }
        Some(removed.value)
    }

    /// Removes and returns the last element. O(n), the list is singly linked.
    pub fn pop_back(&mut self) -> Option<T> {
        self.pop(None).ok().flatten()
    }

    /// Returns an iterator from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            ptr: self.head,
            remaining: self.len(),
        }
    }

    fn link_front(&mut self, value: T) {
        let ptr = Ptr::unchecked_from(self.nodes.insert(ListNode {
            value,
            next: self.head,
        }));
        if self.tail.is_null() {
            self.tail = ptr;
        }
        self.head = ptr;
    }

    fn link_back(&mut self, value: T) {
        let ptr = Ptr::unchecked_from(self.nodes.insert(ListNode {
            value,
            next: Ptr::null(),
        }));
        match self.tail.optional() {
            Some(tail) => self.nodes[tail.unchecked_get()].next = ptr,
            None => self.head = ptr,
        }
        self.tail = ptr;
    }

    fn node_at(&self, index: usize) -> Result<Ptr> {
        self.ptr_at(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    fn ptr_at(&self, index: usize) -> Option<Ptr> {
        if index >= self.len() {
            return None;
        }

        let mut ptr = self.head;
        for _ in 0..index {
            ptr = self.nodes[ptr.unchecked_get()].next;
        }
        ptr.optional()
    }

    #[doc(hidden)]
    #[cfg(any(test, feature = "internal-debugging"))]
    pub fn debug_validate(&self) {
        assert_eq!(
            self.head.is_null(),
            self.tail.is_null(),
            "Head and tail must be null together"
        );

        let mut reachable = 0;
        let mut last = Ptr::null();
        let mut ptr = self.head;
        while let Some(current) = ptr.optional() {
            reachable += 1;
            assert!(
                reachable <= self.nodes.len(),
                "Cycle detected in list links"
            );
            last = current;
            ptr = self.nodes[current.unchecked_get()].next;
        }

        assert_eq!(
            reachable,
            self.nodes.len(),
            "Node count must match reachable nodes"
        );
        assert_eq!(last, self.tail, "Tail must be the last reachable node");
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns the first element equal to `value`.
    pub fn find(&self, value: &T) -> Option<&T> {
        self.iter().find(|candidate| *candidate == value)
    }

    /// Returns `true` if an element equal to `value` is in the list.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }
}

impl KeySet for LinkedList<Key> {
    fn insert_key(&mut self, key: Key) -> Result<()> {
        self.append(key);
        Ok(())
    }

    fn find_key(&self, key: Key) -> Option<Key> {
        self.find(&key).copied()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.link_back(value);
        }
    }
}

/// Borrowing iterator over a [`LinkedList`], head to tail.
#[derive(Debug)]
pub struct Iter<'a, T> {
    nodes: &'a Slab<ListNode<T>>,
    ptr: Ptr,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let ptr = self.ptr.optional()?;
        let node = &self.nodes[ptr.unchecked_get()];
        self.ptr = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over a [`LinkedList`], head to tail.
#[derive(Debug)]
pub struct IntoIter<T> {
    nodes: Slab<ListNode<T>>,
    ptr: Ptr,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let ptr = self.ptr.optional()?;
        let node = self.nodes.remove(ptr.unchecked_get());
        self.ptr = node.next;
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.nodes.len(), Some(self.nodes.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedList<T> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            nodes: self.nodes,
            ptr: self.head,
        }
    }
}
