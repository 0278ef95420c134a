use super::Sort;

/// Top-down merge sort. Splits the input in half, sorts each half, and merges the two runs.
/// Stable: when two values compare equal the one that came first stays first.
#[derive(Clone, Copy, Debug, Default)]
pub struct MergeSort;

impl<T> Sort<T> for MergeSort
where
    T: Ord,
{
    fn sort<I>(&self, source: I) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
    {
        merge_sort(source.into_iter().collect())
    }
}

fn merge_sort<T: Ord>(mut left: Vec<T>) -> Vec<T> {
    if left.len() <= 1 {
        return left;
    }

    let right = left.split_off(left.len() / 2);
    merge(merge_sort(left), merge_sort(right))
}

fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l <= r,
            _ => break,
        };
        merged.extend(if take_left { left.next() } else { right.next() });
    }

    // Only one of these has anything left.
    merged.extend(left);
    merged.extend(right);
    merged
}
