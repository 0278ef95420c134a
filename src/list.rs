//! A singly linked list that appends at the tail. Removing a value unlinks the first node holding
//! an equal value.
//!
//! # Examples
//!
//! ```
//! use ordered_collections::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.add(1);
//! list.add(2);
//! list.add(3);
//!
//! assert!(list.remove(&2));
//! assert!(list.iter().eq(&[1, 3]));
//! assert_eq!(list.back(), Some(&3));
//! ```

use std::fmt;
use std::iter::FusedIterator;

use crate::arena::{Arena, NodeId};
use crate::collection::Collection;

/// A singly linked list. Values come back out in the order they were added.
#[derive(Clone)]
pub struct LinkedList<T> {
    nodes: Arena<Node<T>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

#[derive(Clone)]
struct Node<T> {
    value: T,
    next: Option<NodeId>,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for LinkedList<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> LinkedList<T> {
    /// Generates a new, empty `LinkedList`.
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// The number of values in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every value from the list.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// The first value in the list.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|id| &self.nodes[id].value)
    }

    /// The last value in the list.
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|id| &self.nodes[id].value)
    }

    /// Returns an iterator over the values from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            current: self.head,
            remaining: self.len,
        }
    }

    /// Appends `value` to the back of the list.
    pub fn add(&mut self, value: T) {
        let id = self.nodes.insert(Node { value, next: None });
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
    }

    /// Prepends `value` to the front of the list.
    pub fn push_front(&mut self, value: T) {
        let id = self.nodes.insert(Node {
            value,
            next: self.head,
        });
        self.head = Some(id);
        if self.tail.is_none() {
            self.tail = Some(id);
        }
        self.len += 1;
    }

    /// Returns `true` if a value equal to `value` is in the list.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|stored| stored == value)
    }

    /// Removes the first value equal to `value` and returns it.
    pub fn take(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let mut previous = None;
        let mut current = self.head;
        while let Some(id) = current {
            let node = &self.nodes[id];
            if node.value == *value {
                break;
            }
            previous = current;
            current = node.next;
        }

        let id = current?;
        let removed = self.nodes.remove(id);
        log::trace!("unlinking node {id:?} after {previous:?}");
        match previous {
            Some(previous) => self.nodes[previous].next = removed.next,
            None => self.head = removed.next,
        }
        if self.tail == Some(id) {
            self.tail = previous;
        }
        self.len -= 1;
        Some(removed.value)
    }

    /// Removes the first value equal to `value`. Returns whether anything was removed.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.take(value).is_some()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Collection<T> for LinkedList<T>
where
    T: PartialEq,
{
    type Iter<'a>
        = Iter<'a, T>
    where
        T: 'a;

    fn add(&mut self, value: T) {
        LinkedList::add(self, value)
    }

    fn remove(&mut self, value: &T) -> bool {
        LinkedList::remove(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        LinkedList::contains(self, value)
    }

    fn clear(&mut self) {
        LinkedList::clear(self)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn iter(&self) -> Self::Iter<'_> {
        LinkedList::iter(self)
    }
}

/// A front to back iterator over a [`LinkedList`]. Created by [`LinkedList::iter`].
pub struct Iter<'a, T> {
    nodes: &'a Arena<Node<T>>,
    current: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            current: self.current,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let node = &nodes[self.current?];
        self.current = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}
