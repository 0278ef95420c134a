use ordered_collections::IndexedHeap;

use crate::Op;

/// Every value must be at least its parent's. Positions are 1-based in the heap's layout.
fn is_heap<T: Ord>(values: &[T]) -> bool {
    (2..=values.len()).all(|i| values[i / 2 - 1] <= values[i - 1])
}

quickcheck::quickcheck! {
    fn heap_keeps_order_and_count(ops: Vec<Op<i8>>) -> bool {
        let mut heap = IndexedHeap::new();
        let mut model: Vec<i8> = Vec::new();

        ops.iter().all(|op| {
            match op {
                Op::Add(value) => {
                    heap.add(*value);
                    model.push(*value);
                }
                Op::Remove(value) => {
                    let expected = match model.iter().position(|x| x == value) {
                        Some(at) => {
                            model.swap_remove(at);
                            true
                        }
                        None => false,
                    };
                    if heap.remove(value) != expected {
                        return false;
                    }
                }
                Op::Clear => {
                    heap.clear();
                    model.clear();
                }
            }
            is_heap(heap.as_slice())
                && heap.len() == model.len()
                && heap.iter().count() == model.len()
                && heap.peek() == model.iter().min()
        })
    }
}

quickcheck::quickcheck! {
    fn heap_pop_is_sorted(xs: Vec<i16>) -> bool {
        let mut heap: IndexedHeap<_> = xs.iter().copied().collect();
        let mut expected = xs;
        expected.sort();

        std::iter::from_fn(|| heap.pop()).eq(expected)
    }
}

quickcheck::quickcheck! {
    fn heap_position_points_at_value(xs: Vec<i8>, x: i8) -> bool {
        let heap: IndexedHeap<_> = xs.iter().copied().collect();

        match heap.position(&x) {
            Some(position) => heap.as_slice()[position] == x,
            None => !xs.contains(&x),
        }
    }
}

#[test]
fn removing_an_item_sifts_up() {
    let mut heap: IndexedHeap<_> = [12, 20, 15, 29, 23, 17, 22, 35, 40, 26, 51, 19]
        .into_iter()
        .collect();

    assert!(heap.remove(&23));
    assert_eq!(heap.as_slice(), &[12, 19, 15, 29, 20, 17, 22, 35, 40, 26, 51]);
}
