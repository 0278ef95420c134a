//! An unbalanced Binary Search Tree holding plain values. Duplicates are kept, each in its own
//! `Node`, and always sit to the right of the first equal value they met on the way down.
//!
//! Nodes live in an arena and point at each other by index. Every node remembers its parent so
//! deleting a node can relink its parent in constant time.
//!
//! # Examples
//!
//! ```
//! use ordered_collections::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&20));
//!
//! for value in [20, 10, 30, 5, 40, 10] {
//!     tree.add(value);
//! }
//! assert_eq!(tree.len(), 6);
//!
//! // Iteration is always ascending.
//! assert!(tree.iter().eq(&[5, 10, 10, 20, 30, 40]));
//!
//! // Removing takes out one occurrence at a time.
//! assert!(tree.remove(&10));
//! assert!(tree.contains(&10));
//! assert!(tree.remove(&10));
//! assert!(!tree.contains(&10));
//! assert!(!tree.remove(&10));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::mem;

use crate::arena::{Arena, NodeId};
use crate::collection::Collection;

/// A Binary Search Tree. This can be used for adding, finding, and removing values. There is no
/// rebalancing: adding values in sorted order produces a tree as tall as it is long.
#[derive(Clone)]
pub struct OrderedTree<T> {
    nodes: Arena<Node<T>>,
    root: Option<NodeId>,
    len: usize,
}

#[derive(Clone)]
struct Node<T> {
    value: T,
    left: Option<NodeId>,
    right: Option<NodeId>,
    /// Non-owning. Only used to find the link that points at this node.
    parent: Option<NodeId>,
}

impl<T> Node<T> {
    fn leaf(value: T, parent: Option<NodeId>) -> Self {
        Self {
            value,
            left: None,
            right: None,
            parent,
        }
    }
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for OrderedTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> OrderedTree<T> {
    /// Generates a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
        }
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    /// Returns an iterator over the values in ascending order. Equal values come out in the order
    /// the tree holds them, which is not necessarily the order they were added.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter {
            nodes: &self.nodes,
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_left_spine(self.root);
        iter
    }

    /// The smallest value in the tree.
    pub fn first(&self) -> Option<&T> {
        self.root.map(|root| &self.nodes[self.leftmost(root)].value)
    }

    /// The largest value in the tree.
    pub fn last(&self) -> Option<&T> {
        let mut current = self.root?;
        while let Some(right) = self.nodes[current].right {
            current = right;
        }
        Some(&self.nodes[current].value)
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a height
    /// of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::OrderedTree;
    ///
    /// let balanced: OrderedTree<_> = [2, 1, 3].into_iter().collect();
    /// assert_eq!(balanced.height(), 2);
    ///
    /// let skewed: OrderedTree<_> = [1, 2, 3].into_iter().collect();
    /// assert_eq!(skewed.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<_> = self.root.map(|root| (root, 1)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            height = height.max(depth);
            let node = &self.nodes[id];
            stack.extend(node.left.map(|left| (left, depth + 1)));
            stack.extend(node.right.map(|right| (right, depth + 1)));
        }
        height
    }

    /// Inserts the given value into the tree. Values equal to one already stored go to its right.
    pub fn add(&mut self, value: T)
    where
        T: Ord,
    {
        let Some(mut current) = self.root else {
            self.root = Some(self.nodes.insert(Node::leaf(value, None)));
            self.len = 1;
            return;
        };

        let (parent, goes_left) = loop {
            let node = &self.nodes[current];
            if node.value > value {
                match node.left {
                    Some(left) => current = left,
                    None => break (current, true),
                }
            } else {
                match node.right {
                    Some(right) => current = right,
                    None => break (current, false),
                }
            }
        };

        let id = self.nodes.insert(Node::leaf(value, Some(parent)));
        if goes_left {
            self.nodes[parent].left = Some(id);
        } else {
            self.nodes[parent].right = Some(id);
        }
        self.len += 1;
    }

    /// Returns `true` if a value equal to `value` is in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.add(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_some()
    }

    /// Removes one value equal to `value` from the tree and returns it. If the tree holds several,
    /// the one removed is the first met walking down from the root. If the tree holds none,
    /// nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_collections::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.add(String::from("b"));
    ///
    /// assert_eq!(tree.take(&String::from("b")), Some(String::from("b")));
    /// assert_eq!(tree.take(&String::from("b")), None);
    /// ```
    pub fn take(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let id = self.find(value)?;
        let removed = self.unlink(id);
        self.len -= 1;
        Some(removed)
    }

    /// Removes one value equal to `value` from the tree. Returns whether anything was removed.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        self.take(value).is_some()
    }

    /// Walks down from the root the same way `add` would and stops at the first equal value.
    fn find(&self, value: &T) -> Option<NodeId>
    where
        T: Ord,
    {
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.nodes[id];
            current = match node.value.cmp(value) {
                Ordering::Equal => return Some(id),
                Ordering::Greater => node.left,
                Ordering::Less => node.right,
            };
        }
        None
    }

    fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.nodes[id].left {
            id = left;
        }
        id
    }

    /// Takes the node's value out of the tree, keeping every other value in search order.
    ///
    /// A node with two children keeps its place: it takes over the value of its in-order successor
    /// and the successor's node (which has no left child) is unlinked instead.
    fn unlink(&mut self, id: NodeId) -> T {
        let node = &self.nodes[id];
        match (node.left, node.right) {
            (Some(_), Some(right)) => {
                let successor = self.leftmost(right);
                log::trace!("node {id:?} takes the value of its successor {successor:?}");
                let successor_value = self.unlink(successor);
                mem::replace(&mut self.nodes[id].value, successor_value)
            }
            (child, None) | (None, child) => {
                self.replace_in_parent(id, child);
                self.nodes.remove(id).value
            }
        }
    }

    /// Points whatever links to `id` (the root, or one of its parent's children) at `replacement`.
    fn replace_in_parent(&mut self, id: NodeId, replacement: Option<NodeId>) {
        log::trace!("splicing node {id:?} out, replaced by {replacement:?}");
        let parent = self.nodes[id].parent;
        if let Some(child) = replacement {
            self.nodes[child].parent = parent;
        }

        match parent {
            None => self.root = replacement,
            Some(parent) => {
                let parent = &mut self.nodes[parent];
                if parent.left == Some(id) {
                    parent.left = replacement;
                } else {
                    debug_assert_eq!(parent.right, Some(id));
                    parent.right = replacement;
                }
            }
        }

        if cfg!(debug_assertions) {
            if let Some(parent) = parent {
                let parent = &self.nodes[parent];
                assert!(parent.left != Some(id) && parent.right != Some(id));
            }
            if let Some(child) = replacement {
                assert_eq!(self.nodes[child].parent, parent);
            }
        }
    }
}

impl<T> Extend<T> for OrderedTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T> FromIterator<T> for OrderedTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Collection<T> for OrderedTree<T>
where
    T: Ord,
{
    type Iter<'a>
        = Iter<'a, T>
    where
        T: 'a;

    fn add(&mut self, value: T) {
        OrderedTree::add(self, value)
    }

    fn remove(&mut self, value: &T) -> bool {
        OrderedTree::remove(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        OrderedTree::contains(self, value)
    }

    fn clear(&mut self) {
        OrderedTree::clear(self)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn iter(&self) -> Self::Iter<'_> {
        OrderedTree::iter(self)
    }
}

/// An in-order iterator over an [`OrderedTree`]. Created by [`OrderedTree::iter`].
pub struct Iter<'a, T> {
    nodes: &'a Arena<Node<T>>,
    /// Nodes whose left subtree has been (or is being) visited but which haven't been yielded.
    stack: Vec<NodeId>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn push_left_spine(&mut self, mut current: Option<NodeId>) {
        while let Some(id) = current {
            self.stack.push(id);
            current = self.nodes[id].left;
        }
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let nodes = self.nodes;
        let node = &nodes[id];
        self.push_left_spine(node.right);
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}
