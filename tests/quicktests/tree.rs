use ordered_collections::OrderedTree;

use crate::Op;

/// Applies a set of operations to a tree and to a sorted vector.
/// This way we can ensure that after a random smattering of adds
/// and removes we have the same values in both.
fn do_ops<T>(ops: &[Op<T>], tree: &mut OrderedTree<T>, model: &mut Vec<T>) -> bool
where
    T: Ord + Clone,
{
    ops.iter().all(|op| match op {
        Op::Add(value) => {
            tree.add(value.clone());
            let at = model.partition_point(|x| x <= value);
            model.insert(at, value.clone());
            true
        }
        Op::Remove(value) => {
            let expected = match model.binary_search(value) {
                Ok(at) => {
                    model.remove(at);
                    true
                }
                Err(_) => false,
            };
            tree.remove(value) == expected
        }
        Op::Clear => {
            tree.clear();
            model.clear();
            true
        }
    })
}

quickcheck::quickcheck! {
    fn tree_matches_sorted_model(ops: Vec<Op<i8>>) -> bool {
        let mut tree = OrderedTree::new();
        let mut model = Vec::new();

        do_ops(&ops, &mut tree, &mut model)
            && tree.len() == model.len()
            && tree.iter().eq(model.iter())
            && tree.first() == model.first()
            && tree.last() == model.last()
    }
}

quickcheck::quickcheck! {
    fn tree_contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: OrderedTree<_> = xs.iter().copied().collect();

        nots.iter()
            .filter(|x| !xs.contains(x))
            .all(|x| !tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn tree_with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: OrderedTree<_> = xs.iter().copied().collect();
        for delete in &deletes {
            // We may have added the same value multiple times - delete each one.
            while tree.remove(delete) {}
        }

        deletes.iter().all(|x| !tree.contains(x))
            && xs.iter().filter(|x| !deletes.contains(x)).all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn tree_iteration_restarts(xs: Vec<i8>) -> bool {
        let tree: OrderedTree<_> = xs.iter().copied().collect();
        let first: Vec<_> = tree.iter().collect();
        let second: Vec<_> = tree.iter().collect();

        first == second && first.len() == tree.len()
    }
}
