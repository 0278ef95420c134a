//! This crate provides a handful of in-memory containers and sorting routines, mostly for
//! educational purposes.
//!
//! ## Containers
//!
//! Every container implements [`Collection`]: values can be added, removed by value, tested for
//! membership, counted, iterated, and copied out into a slice. Duplicates are always kept.
//!
//! - [`OrderedTree`] is an unbalanced Binary Search Tree. For every `Node` in the tree, all the
//!   values in its left subtree are no greater than its own value and all the values in its right
//!   subtree are no smaller. Iteration visits the left subtree, then the node, then the right
//!   subtree, which yields the values in ascending order. Searching takes `O(height)` and since
//!   nothing rebalances the tree, the height depends entirely on the order values were added.
//! - [`IndexedHeap`] is a binary min-heap stored in a `Vec`. Every value is no greater than its
//!   children so the smallest value is always first. Unlike most heaps it can remove any value,
//!   not just the smallest.
//! - [`LinkedList`] is a singly linked list that appends at the back.
//!
//! ## Sorting
//!
//! The [`sort`] module has merge sort, quicksort, and radix sort behind the [`sort::Sort`] trait.
//!
//! ## Logging
//!
//! Structural changes (nodes being spliced out, heap repairs, sort passes) are reported through
//! the [`log`] facade at `trace` level. Nothing is logged unless the application installs a logger.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod arena;
mod collection;
pub mod heap;
pub mod list;
pub mod sort;
pub mod tree;

pub use collection::{Collection, CopyToError};
pub use heap::IndexedHeap;
pub use list::LinkedList;
pub use tree::OrderedTree;
