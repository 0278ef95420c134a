//! An array backed binary min-heap that can remove arbitrary values, not just the minimum.
//!
//! The heap is a complete binary tree laid out level by level in a `Vec`. Positions are
//! numbered from 1 so that the parent of position `i` is `i / 2` and its children are `2i` and
//! `2i + 1`; position `i` lives at `storage[i - 1]`.
//!
//! Searching for a value prunes every subtree whose root is already larger than the target since
//! nothing below a node can be smaller than the node itself.
//!
//! # Examples
//!
//! ```
//! use ordered_collections::IndexedHeap;
//!
//! let mut heap = IndexedHeap::new();
//! for value in [12, 20, 15, 29, 23] {
//!     heap.add(value);
//! }
//!
//! // The smallest value is always first.
//! assert_eq!(heap.peek(), Some(&12));
//!
//! // Anything can be removed, not just the minimum.
//! assert!(heap.remove(&20));
//! assert!(!heap.contains(&20));
//! assert_eq!(heap.as_slice(), &[12, 23, 15, 29]);
//!
//! assert_eq!(heap.pop(), Some(12));
//! assert_eq!(heap.peek(), Some(&15));
//! ```

use std::fmt;
use std::slice;

use crate::collection::Collection;

/// Position of the root. Position `i` is stored at `storage[i - 1]`.
const ROOT: usize = 1;

/// A binary min-heap. Iterating visits values in storage order, which is level order and
/// therefore not sorted; only the first value is guaranteed to be the smallest.
#[derive(Clone)]
pub struct IndexedHeap<T> {
    storage: Vec<T>,
}

impl<T> Default for IndexedHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for IndexedHeap<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> IndexedHeap<T> {
    /// Generates a new, empty `IndexedHeap`.
    pub fn new() -> Self {
        Self {
            storage: Vec::new(),
        }
    }

    /// Generates a new, empty `IndexedHeap` with room for `capacity` values.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::IndexedHeap;
    ///
    /// let mut heap = IndexedHeap::with_capacity(4);
    /// heap.add(2);
    /// heap.add(1);
    ///
    /// assert_eq!(heap.len(), 2);
    /// assert_eq!(heap.peek(), Some(&1));
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Vec::with_capacity(capacity),
        }
    }

    /// The number of values in the heap.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if the heap holds no values.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Removes every value from the heap.
    pub fn clear(&mut self) {
        self.storage.clear();
    }

    /// The values in storage order.
    pub fn as_slice(&self) -> &[T] {
        &self.storage
    }

    /// Returns an iterator over the values in storage order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.storage.iter()
    }

    /// Consumes the heap, returning its storage. The values stay in storage order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::IndexedHeap;
    ///
    /// let heap: IndexedHeap<_> = [3, 1, 2].into_iter().collect();
    ///
    /// assert_eq!(heap.into_vec(), vec![1, 3, 2]);
    /// ```
    pub fn into_vec(self) -> Vec<T> {
        self.storage
    }

    /// The smallest value in the heap.
    pub fn peek(&self) -> Option<&T> {
        self.storage.first()
    }

    /// Inserts the given value, moving it up past every larger ancestor.
    pub fn add(&mut self, value: T)
    where
        T: Ord,
    {
        self.storage.push(value);
        self.sift_up(self.storage.len());
    }

    /// Returns `true` if a value equal to `value` is in the heap.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.locate(value, ROOT).is_some()
    }

    /// Finds a value equal to `value` and returns its offset in [`IndexedHeap::as_slice`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::IndexedHeap;
    ///
    /// let heap: IndexedHeap<_> = [3, 1, 2].into_iter().collect();
    /// let position = heap.position(&3).unwrap();
    ///
    /// assert_eq!(heap.as_slice()[position], 3);
    /// assert_eq!(heap.position(&0), None);
    /// ```
    pub fn position(&self, value: &T) -> Option<usize>
    where
        T: Ord,
    {
        self.locate(value, ROOT).map(|index| index - 1)
    }

    /// Removes one value equal to `value` from the heap and returns it. If the heap holds none,
    /// nothing happens.
    pub fn take(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let index = self.locate(value, ROOT)?;
        Some(self.remove_at(index))
    }

    /// Removes one value equal to `value` from the heap. Returns whether anything was removed.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        self.take(value).is_some()
    }

    /// Removes and returns the smallest value.
    pub fn pop(&mut self) -> Option<T>
    where
        T: Ord,
    {
        if self.storage.is_empty() {
            return None;
        }
        Some(self.remove_at(ROOT))
    }

    fn at(&self, index: usize) -> &T {
        &self.storage[index - 1]
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.storage.swap(a - 1, b - 1);
    }

    /// Depth first search from `index` that skips any child larger than `value`.
    fn locate(&self, value: &T, index: usize) -> Option<usize>
    where
        T: Ord,
    {
        if index > self.storage.len() {
            return None;
        }
        if self.at(index) == value {
            return Some(index);
        }

        let left = index * 2;
        [left, left + 1]
            .into_iter()
            .filter(|&child| child <= self.storage.len() && self.at(child) <= value)
            .find_map(|child| self.locate(value, child))
    }

    /// Fills the hole at `index` with the last value and moves that value whichever way restores
    /// heap order. Only one direction can be out of order: the moved value is either at least its
    /// new parent or it is smaller than everything below `index`.
    fn remove_at(&mut self, index: usize) -> T
    where
        T: Ord,
    {
        let removed = self.storage.swap_remove(index - 1);
        if index > self.storage.len() {
            // It was the last value so nothing moved.
            return removed;
        }

        if index == ROOT || self.at(index / 2) <= self.at(index) {
            log::trace!("sifting position {index} down after removal");
            self.sift_down(index);
        } else {
            log::trace!("sifting position {index} up after removal");
            self.sift_up(index);
        }

        if cfg!(debug_assertions) {
            assert!(self.is_ordered_at(index));
        }
        removed
    }

    fn sift_up(&mut self, mut index: usize)
    where
        T: Ord,
    {
        while index > ROOT {
            let parent = index / 2;
            if self.at(parent) <= self.at(index) {
                break;
            }
            self.swap(parent, index);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize)
    where
        T: Ord,
    {
        let end = self.storage.len();
        loop {
            let mut child = index * 2;
            if child > end {
                break;
            }
            // Ties go to the left child.
            if child < end && self.at(child + 1) < self.at(child) {
                child += 1;
            }
            if self.at(index) <= self.at(child) {
                break;
            }
            self.swap(index, child);
            index = child;
        }
    }

    /// Whether the value at `index` is no smaller than its parent and no larger than its children.
    fn is_ordered_at(&self, index: usize) -> bool
    where
        T: Ord,
    {
        let len = self.storage.len();
        let value = self.at(index);
        let above = index == ROOT || self.at(index / 2) <= value;
        let below = [index * 2, index * 2 + 1]
            .into_iter()
            .filter(|&child| child <= len)
            .all(|child| value <= self.at(child));
        above && below
    }
}

impl<T> Extend<T> for IndexedHeap<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.storage.reserve(iter.size_hint().0);
        for value in iter {
            self.add(value);
        }
    }
}

impl<T> FromIterator<T> for IndexedHeap<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<'a, T> IntoIterator for &'a IndexedHeap<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Collection<T> for IndexedHeap<T>
where
    T: Ord,
{
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        T: 'a;

    fn add(&mut self, value: T) {
        IndexedHeap::add(self, value)
    }

    fn remove(&mut self, value: &T) -> bool {
        IndexedHeap::remove(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        IndexedHeap::contains(self, value)
    }

    fn clear(&mut self) {
        IndexedHeap::clear(self)
    }

    fn len(&self) -> usize {
        self.storage.len()
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.storage.iter()
    }
}
