//! The container contract shared by every collection in this crate.

use thiserror::Error;

/// Reasons [`Collection::copy_to`] can refuse to copy. The collection is never modified and the
/// destination is left untouched when one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CopyToError {
    /// The starting offset lies past the end of the destination.
    #[error("offset {offset} is out of range for a destination of length {len}")]
    OffsetOutOfRange {
        /// The requested starting offset.
        offset: usize,
        /// The length of the destination.
        len: usize,
    },
    /// The destination doesn't have room for every element after the offset.
    #[error("destination has room for {available} elements but {required} are needed")]
    InsufficientCapacity {
        /// How many elements the collection holds.
        required: usize,
        /// How many slots remain in the destination after the offset.
        available: usize,
    },
}

/// A growable collection of values supporting insertion, removal by value, and membership tests.
///
/// Duplicates are allowed. `remove` takes out a single occurrence and which occurrence that is
/// depends on the structure of the collection, not on insertion order.
pub trait Collection<T> {
    /// Iterator returned by [`Collection::iter`].
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Inserts `value`.
    fn add(&mut self, value: T);

    /// Removes one occurrence of `value`, returning whether anything was removed.
    fn remove(&mut self, value: &T) -> bool;

    /// Returns `true` if `value` is stored in the collection.
    fn contains(&self, value: &T) -> bool;

    /// Removes every value.
    fn clear(&mut self);

    /// The number of stored values.
    fn len(&self) -> usize;

    /// Returns `true` if nothing is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a fresh iterator over every stored value. The order is specific to the collection.
    fn iter(&self) -> Self::Iter<'_>;

    /// Clones every value, in iteration order, into `dest` starting at `offset`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::{Collection, CopyToError, OrderedTree};
    ///
    /// let tree: OrderedTree<_> = [3, 1, 2].into_iter().collect();
    ///
    /// let mut dest = [0; 4];
    /// tree.copy_to(&mut dest, 1).unwrap();
    /// assert_eq!(dest, [0, 1, 2, 3]);
    ///
    /// assert_eq!(
    ///     tree.copy_to(&mut dest, 2),
    ///     Err(CopyToError::InsufficientCapacity { required: 3, available: 2 })
    /// );
    /// ```
    fn copy_to(&self, dest: &mut [T], offset: usize) -> Result<(), CopyToError>
    where
        T: Clone,
    {
        let available = dest
            .len()
            .checked_sub(offset)
            .ok_or(CopyToError::OffsetOutOfRange {
                offset,
                len: dest.len(),
            })?;
        let required = self.len();
        if required > available {
            return Err(CopyToError::InsufficientCapacity {
                required,
                available,
            });
        }

        for (slot, value) in dest[offset..].iter_mut().zip(self.iter()) {
            slot.clone_from(value);
        }
        Ok(())
    }
}
