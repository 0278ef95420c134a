//! An index-addressed node table. Linked structures store their nodes here and link them with
//! [`NodeId`]s instead of pointers, so parent links never keep anything alive and dropping the
//! owner drops every node without recursing.

use std::ops::{Index, IndexMut};

/// The stable address of a node inside an [`Arena`]. Only valid until that node is removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

#[derive(Clone)]
pub(crate) struct Arena<N> {
    slots: Vec<Option<N>>,
    /// Vacant slots, reused before the table grows.
    free: Vec<usize>,
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Arena<N> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub(crate) fn insert(&mut self, node: N) -> NodeId {
        match self.free.pop() {
            Some(index) => {
                debug_assert!(self.slots[index].is_none());
                self.slots[index] = Some(node);
                NodeId(index)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Takes the node out of the table. Its slot will be handed out again by a later `insert`.
    ///
    /// ## Panics
    ///
    /// When `id` was already removed.
    pub(crate) fn remove(&mut self, id: NodeId) -> N {
        let node = self.slots[id.0]
            .take()
            .expect("Removed a node that was already removed.");
        self.free.push(id.0);
        node
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

impl<N> Index<NodeId> for Arena<N> {
    type Output = N;

    fn index(&self, id: NodeId) -> &N {
        self.slots[id.0]
            .as_ref()
            .expect("Links only point at live nodes.")
    }
}

impl<N> IndexMut<NodeId> for Arena<N> {
    fn index_mut(&mut self, id: NodeId) -> &mut N {
        self.slots[id.0]
            .as_mut()
            .expect("Links only point at live nodes.")
    }
}
