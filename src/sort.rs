//! Standalone sorting algorithms. None of them share state with the collections in this crate;
//! they only need values that can be ordered.
//!
//! # Examples
//!
//! ```
//! use ordered_collections::sort::{MergeSort, QuickSort, RadixSort, Sort};
//!
//! let source = [5, 2, 15, 99, 5, 16, 3, 10, 8, 7];
//! let expected = vec![2, 3, 5, 5, 7, 8, 10, 15, 16, 99];
//!
//! assert_eq!(MergeSort.sort(source), expected);
//! assert_eq!(QuickSort.sort(source), expected);
//! assert_eq!(RadixSort.sort(source), expected);
//! ```

mod merge;
mod quick;
mod radix;

pub use merge::MergeSort;
pub use quick::QuickSort;
pub use radix::{RadixKey, RadixSort};

/// Something that can put a sequence of values in ascending order.
pub trait Sort<T> {
    /// Returns every value from `source` in ascending order.
    fn sort<I>(&self, source: I) -> Vec<T>
    where
        I: IntoIterator<Item = T>;
}
