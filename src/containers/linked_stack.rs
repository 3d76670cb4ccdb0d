//! Singly-linked LIFO stack
//!
//! Holds completed orders. Links run from the top (the current order) down
//! to the bottom, which is tracked as `back`.

use super::arena::{Chain, NodeArena, NodeHandle};
use crate::error::{BistroError, BistroResult};

/// LIFO stack of singly-linked nodes
#[derive(Debug)]
pub struct LinkedStack<T> {
    nodes: NodeArena<T>,
    top: Option<NodeHandle>,
    back: Option<NodeHandle>,
}

impl<T> LinkedStack<T> {
    pub fn new() -> Self {
        Self {
            nodes: NodeArena::new(),
            top: None,
            back: None,
        }
    }

    /// Place a value on top, O(1)
    pub fn push(&mut self, value: T) {
        let handle = self.nodes.insert(value, self.top);
        if self.top.is_none() {
            self.back = Some(handle);
        }
        self.top = Some(handle);
    }

    /// Unlink and return the top value
    pub fn pop(&mut self) -> BistroResult<T> {
        let top = self.top.ok_or(BistroError::EmptyContainer("Stack"))?;
        let node = self
            .nodes
            .release(top)
            .ok_or(BistroError::EmptyContainer("Stack"))?;

        self.top = node.next;
        if self.top.is_none() {
            self.back = None;
        }
        Ok(node.value)
    }

    /// Borrow the top value without removing it
    pub fn peek(&self) -> BistroResult<&T> {
        self.top
            .and_then(|top| self.nodes.get(top))
            .map(|node| &node.value)
            .ok_or(BistroError::EmptyContainer("Stack"))
    }

    /// Borrow the bottom value
    pub fn bottom(&self) -> BistroResult<&T> {
        self.back
            .and_then(|back| self.nodes.get(back))
            .map(|node| &node.value)
            .ok_or(BistroError::EmptyContainer("Stack"))
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    /// Count nodes by walking the chain, O(n)
    pub fn size(&self) -> usize {
        self.iter().count()
    }

    /// Iterate top to bottom
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        Chain::new(&self.nodes, self.top)
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.top = None;
        self.back = None;
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy: every node is duplicated in the same top-to-bottom order and
/// the copy's top/back point into its own nodes.
impl<T: Clone> Clone for LinkedStack<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        let mut tail: Option<NodeHandle> = None;

        for value in self.iter() {
            let handle = copy.nodes.insert(value.clone(), None);
            match tail {
                Some(tail) => copy.nodes.set_next(tail, Some(handle)),
                None => copy.top = Some(handle),
            }
            tail = Some(handle);
        }

        copy.back = tail;
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let mut stack = LinkedStack::new();
        stack.push("order-1".to_string());
        assert_eq!(stack.pop().unwrap(), "order-1");
        assert!(stack.is_empty());
    }

    #[test]
    fn test_lifo_order() {
        let mut stack = LinkedStack::new();
        for i in 1..=5 {
            stack.push(i);
        }
        assert_eq!(stack.size(), 5);

        let drained: Vec<_> = (0..5).map(|_| stack.pop().unwrap()).collect();
        assert_eq!(drained, vec![5, 4, 3, 2, 1]);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_pop_and_peek_empty_are_errors() {
        let mut stack: LinkedStack<i32> = LinkedStack::new();
        assert!(stack.pop().unwrap_err().is_empty_container());
        assert!(stack.peek().unwrap_err().is_empty_container());
        assert!(stack.bottom().is_err());
    }

    #[test]
    fn test_top_and_bottom() {
        let mut stack = LinkedStack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);

        assert_eq!(*stack.peek().unwrap(), 3);
        assert_eq!(*stack.bottom().unwrap(), 1);

        stack.pop().unwrap();
        stack.pop().unwrap();
        assert_eq!(*stack.bottom().unwrap(), 1);
        stack.pop().unwrap();
        assert!(stack.bottom().is_err());
    }

    #[test]
    fn test_clone_is_independent_deep_copy() {
        let mut stack = LinkedStack::new();
        for i in 1..=3 {
            stack.push(i);
        }

        let mut copy = stack.clone();
        assert_eq!(
            copy.iter().copied().collect::<Vec<_>>(),
            stack.iter().copied().collect::<Vec<_>>()
        );
        assert_eq!(*copy.bottom().unwrap(), 1);

        // Draining the copy leaves the source alone
        while copy.pop().is_ok() {}
        assert!(copy.is_empty());
        assert_eq!(stack.size(), 3);
        assert_eq!(*stack.peek().unwrap(), 3);

        copy.push(9);
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    }
}
