use std::mem;

use super::Sort;

/// In-place quicksort using the first value of each range as the pivot.
///
/// Already sorted input is its worst case (quadratic comparisons) but the recursion always goes
/// into the smaller side, so stack depth stays logarithmic.
#[derive(Clone, Copy, Debug, Default)]
pub struct QuickSort;

impl QuickSort {
    /// Sorts `values` in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::sort::QuickSort;
    ///
    /// let mut values = [3, 1, 2];
    /// QuickSort.sort_slice(&mut values);
    /// assert_eq!(values, [1, 2, 3]);
    /// ```
    pub fn sort_slice<T: Ord>(&self, values: &mut [T]) {
        quicksort(values);
    }
}

impl<T> Sort<T> for QuickSort
where
    T: Ord,
{
    fn sort<I>(&self, source: I) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
    {
        let mut values: Vec<T> = source.into_iter().collect();
        quicksort(&mut values);
        values
    }
}

fn quicksort<T: Ord>(mut values: &mut [T]) {
    while values.len() > 1 {
        let pivot = partition(values);
        let (left, right) = mem::take(&mut values).split_at_mut(pivot);
        let right = &mut right[1..];
        if left.len() < right.len() {
            quicksort(left);
            values = right;
        } else {
            quicksort(right);
            values = left;
        }
    }
}

/// Moves everything smaller than `values[0]` in front of it and returns where it ended up.
fn partition<T: Ord>(values: &mut [T]) -> usize {
    let mut pivot = 0;
    for i in 1..values.len() {
        if values[i] < values[0] {
            pivot += 1;
            values.swap(pivot, i);
        }
    }
    values.swap(0, pivot);
    pivot
}
