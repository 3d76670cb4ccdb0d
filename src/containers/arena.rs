//! Slot arena holding the nodes of the linked containers
//!
//! Nodes are addressed by handle instead of pointer. Releasing a node hands
//! its value back to the caller and puts the slot on a free list, so a stale
//! handle can only ever observe a vacant slot.

/// Index of a node inside a [`NodeArena`]
pub(crate) type NodeHandle = usize;

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub value: T,
    pub next: Option<NodeHandle>,
}

#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<NodeHandle> },
}

#[derive(Debug, Clone)]
pub(crate) struct NodeArena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<NodeHandle>,
}

impl<T> NodeArena<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
        }
    }

    /// Store a node, reusing a vacant slot when there is one
    pub fn insert(&mut self, value: T, next: Option<NodeHandle>) -> NodeHandle {
        let node = Node { value, next };
        match self.free_head {
            Some(handle) => {
                if let Slot::Vacant { next_free } = self.slots[handle] {
                    self.free_head = next_free;
                }
                self.slots[handle] = Slot::Occupied(node);
                handle
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        }
    }

    /// Take the node out of its slot and free the slot
    pub fn release(&mut self, handle: NodeHandle) -> Option<Node<T>> {
        if !matches!(self.slots.get(handle), Some(Slot::Occupied(_))) {
            return None;
        }
        let vacant = Slot::Vacant {
            next_free: self.free_head,
        };
        self.free_head = Some(handle);
        match std::mem::replace(&mut self.slots[handle], vacant) {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    pub fn get(&self, handle: NodeHandle) -> Option<&Node<T>> {
        match self.slots.get(handle) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, handle: NodeHandle) -> Option<&mut Node<T>> {
        match self.slots.get_mut(handle) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    /// Point `handle` at `next`
    pub fn set_next(&mut self, handle: NodeHandle, next: Option<NodeHandle>) {
        if let Some(node) = self.get_mut(handle) {
            node.next = next;
        }
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
    }
}

/// Walks a chain of nodes from a starting handle
pub(crate) struct Chain<'a, T> {
    nodes: &'a NodeArena<T>,
    cursor: Option<NodeHandle>,
}

impl<'a, T> Chain<'a, T> {
    pub fn new(nodes: &'a NodeArena<T>, start: Option<NodeHandle>) -> Self {
        Self {
            nodes,
            cursor: start,
        }
    }
}

impl<'a, T> Iterator for Chain<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.cursor?)?;
        self.cursor = node.next;
        Some(&node.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_recycles_slot() {
        let mut arena = NodeArena::new();
        let a = arena.insert("a", None);
        let b = arena.insert("b", Some(a));

        let node = arena.release(a).unwrap();
        assert_eq!(node.value, "a");
        assert!(arena.get(a).is_none());
        assert!(arena.release(a).is_none());

        let c = arena.insert("c", None);
        assert_eq!(c, a);
        assert_eq!(arena.get(b).unwrap().next, Some(a));
    }

    #[test]
    fn test_chain_walks_links() {
        let mut arena = NodeArena::new();
        let third = arena.insert(3, None);
        let second = arena.insert(2, Some(third));
        let first = arena.insert(1, Some(second));

        let values: Vec<_> = Chain::new(&arena, Some(first)).copied().collect();
        assert_eq!(values, vec![1, 2, 3]);
        assert_eq!(Chain::new(&arena, None).count(), 0);
    }
}
