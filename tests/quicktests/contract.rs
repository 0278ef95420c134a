//! Behaviour every `Collection` shares, checked against each container.

use ordered_collections::{Collection, CopyToError, IndexedHeap, LinkedList, OrderedTree};

fn sorted<C: Collection<i32>>(collection: &C) -> Vec<i32> {
    let mut values: Vec<_> = collection.iter().copied().collect();
    values.sort();
    values
}

fn filled<C: Collection<i32> + Default>(values: &[i32]) -> C {
    let mut collection = C::default();
    for value in values {
        collection.add(*value);
    }
    collection
}

fn should_be_initially_empty<C: Collection<i32> + Default>() {
    let collection = C::default();
    assert_eq!(collection.len(), 0);
    assert!(collection.is_empty());
}

fn after_adding_item_count_should_return_one<C: Collection<i32> + Default>() {
    let collection: C = filled(&[1]);
    assert_eq!(collection.len(), 1);
}

fn after_adding_multiple_items_count_matches<C: Collection<i32> + Default>() {
    let collection: C = filled(&[8, 3, 10, 1, 6, 14, 4, 7, 13]);
    assert_eq!(collection.len(), 9);
    assert_eq!(collection.iter().count(), 9);
}

fn after_clear_count_should_return_zero<C: Collection<i32> + Default>() {
    let mut collection: C = filled(&[1, 2, 3]);
    collection.clear();

    assert_eq!(collection.len(), 0);
    assert!(!collection.contains(&1));
    assert_eq!(collection.iter().next(), None);
}

fn after_remove_collection_should_still_enumerate<C: Collection<i32> + Default>() {
    for (removed, rest) in [(1, [2, 3]), (2, [1, 3]), (3, [1, 2])] {
        let mut collection: C = filled(&[1, 2, 3]);

        assert!(collection.remove(&removed));
        assert_eq!(collection.len(), 2);
        assert_eq!(sorted(&collection), rest);
    }
}

fn remove_reports_whether_item_was_found<C: Collection<i32> + Default>() {
    let mut collection: C = filled(&[1, 2, 3]);

    assert!(!collection.remove(&4));
    assert_eq!(collection.len(), 3);
    assert!(collection.remove(&2));
    assert!(!collection.remove(&2));
}

fn after_remove_then_add_collection_should_still_enumerate<C: Collection<i32> + Default>() {
    let mut collection: C = filled(&[1, 2, 3]);
    collection.remove(&2);
    collection.add(4);

    assert_eq!(sorted(&collection), [1, 3, 4]);
}

fn contains_reports_membership<C: Collection<i32> + Default>() {
    let collection: C = filled(&[1, 2, 3]);

    assert!(collection.contains(&2));
    assert!(!collection.contains(&4));
}

fn copy_to_checks_arguments<C: Collection<i32> + Default>() {
    let collection: C = filled(&[1, 2, 3]);
    let mut dest = [0; 4];

    assert_eq!(
        collection.copy_to(&mut dest, 5),
        Err(CopyToError::OffsetOutOfRange { offset: 5, len: 4 })
    );
    assert_eq!(
        collection.copy_to(&mut dest, 2),
        Err(CopyToError::InsufficientCapacity {
            required: 3,
            available: 2
        })
    );
    assert_eq!(dest, [0; 4]);

    collection.copy_to(&mut dest, 1).unwrap();
    assert_eq!(dest[0], 0);
    assert!(collection.iter().eq(&dest[1..]));
    assert_eq!(collection.len(), 3);
}

fn copy_to_empty_destination<C: Collection<i32> + Default>() {
    let collection = C::default();
    let mut dest: [i32; 0] = [];

    assert_eq!(collection.copy_to(&mut dest, 0), Ok(()));
}

macro_rules! contract_tests {
    ($name:ident, $collection:ty) => {
        mod $name {
            use super::*;

            #[test]
            fn should_be_initially_empty() {
                super::should_be_initially_empty::<$collection>();
            }

            #[test]
            fn after_adding_item_count_should_return_one() {
                super::after_adding_item_count_should_return_one::<$collection>();
            }

            #[test]
            fn after_adding_multiple_items_count_matches() {
                super::after_adding_multiple_items_count_matches::<$collection>();
            }

            #[test]
            fn after_clear_count_should_return_zero() {
                super::after_clear_count_should_return_zero::<$collection>();
            }

            #[test]
            fn after_remove_collection_should_still_enumerate() {
                super::after_remove_collection_should_still_enumerate::<$collection>();
            }

            #[test]
            fn remove_reports_whether_item_was_found() {
                super::remove_reports_whether_item_was_found::<$collection>();
            }

            #[test]
            fn after_remove_then_add_collection_should_still_enumerate() {
                super::after_remove_then_add_collection_should_still_enumerate::<$collection>();
            }

            #[test]
            fn contains_reports_membership() {
                super::contains_reports_membership::<$collection>();
            }

            #[test]
            fn copy_to_checks_arguments() {
                super::copy_to_checks_arguments::<$collection>();
            }

            #[test]
            fn copy_to_empty_destination() {
                super::copy_to_empty_destination::<$collection>();
            }
        }
    };
}

contract_tests!(ordered_tree, OrderedTree<i32>);
contract_tests!(indexed_heap, IndexedHeap<i32>);
contract_tests!(linked_list, LinkedList<i32>);
