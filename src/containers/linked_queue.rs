//! Singly-linked FIFO queue
//!
//! Holds active orders. `front` is `None` exactly when the queue is empty.

use super::arena::{Chain, NodeArena, NodeHandle};
use crate::error::{BistroError, BistroResult};

/// FIFO queue of singly-linked nodes
#[derive(Debug, Clone)]
pub struct LinkedQueue<T> {
    nodes: NodeArena<T>,
    front: Option<NodeHandle>,
    back: Option<NodeHandle>,
}

impl<T> LinkedQueue<T> {
    pub fn new() -> Self {
        Self {
            nodes: NodeArena::new(),
            front: None,
            back: None,
        }
    }

    /// Append at the back, O(1)
    pub fn enqueue(&mut self, value: T) {
        let handle = self.nodes.insert(value, None);
        match self.back {
            Some(back) => self.nodes.set_next(back, Some(handle)),
            None => self.front = Some(handle),
        }
        self.back = Some(handle);
    }

    /// Unlink and return the front value
    ///
    /// Fails with [`BistroError::EmptyContainer`] on an empty queue; check
    /// [`is_empty`](Self::is_empty) first.
    pub fn dequeue(&mut self) -> BistroResult<T> {
        let front = self.front.ok_or(BistroError::EmptyContainer("Queue"))?;
        let node = self
            .nodes
            .release(front)
            .ok_or(BistroError::EmptyContainer("Queue"))?;

        self.front = node.next;
        if self.front.is_none() {
            self.back = None;
        }
        Ok(node.value)
    }

    /// Borrow the front value without removing it
    pub fn peek(&self) -> BistroResult<&T> {
        self.front
            .and_then(|front| self.nodes.get(front))
            .map(|node| &node.value)
            .ok_or(BistroError::EmptyContainer("Queue"))
    }

    pub fn is_empty(&self) -> bool {
        self.front.is_none()
    }

    /// Count nodes by walking the chain, O(n)
    pub fn size(&self) -> usize {
        self.iter().count()
    }

    /// Iterate front to back
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        Chain::new(&self.nodes, self.front)
    }

    /// Unlink and return the first value matching the predicate
    pub fn remove_first<P>(&mut self, mut predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut prev: Option<NodeHandle> = None;
        let mut cursor = self.front;

        while let Some(handle) = cursor {
            let node = self.nodes.get(handle)?;
            if predicate(&node.value) {
                let next = node.next;
                match prev {
                    Some(prev) => self.nodes.set_next(prev, next),
                    None => self.front = next,
                }
                if self.back == Some(handle) {
                    self.back = prev;
                }
                return self.nodes.release(handle).map(|node| node.value);
            }
            prev = Some(handle);
            cursor = node.next;
        }

        None
    }

    /// Drop every node
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.front = None;
        self.back = None;
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for LinkedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}
