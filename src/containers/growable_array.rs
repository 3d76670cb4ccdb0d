//! Growable array backing the menu catalog
//!
//! A contiguous buffer of `capacity` slots of which the first `count` are
//! occupied. Unoccupied slots always hold `T::default()`.

use std::mem;

use crate::error::{BistroError, BistroResult};

/// Capacity used by [`GrowableArray::new`]
pub const DEFAULT_CAPACITY: usize = 100;

/// Resizable contiguous store
///
/// Capacity doubles when an insertion finds the buffer full and never
/// shrinks. `0 <= size() <= capacity()` always holds.
#[derive(Debug, Clone)]
pub struct GrowableArray<T> {
    slots: Box<[T]>,
    count: usize,
}

impl<T: Default> GrowableArray<T> {
    /// Create an array with [`DEFAULT_CAPACITY`] slots
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an array with the given number of slots (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: allocate(capacity.max(1)),
            count: 0,
        }
    }

    /// Append an item, doubling the capacity first when full
    pub fn add(&mut self, item: T) {
        if self.count == self.capacity() {
            self.grow();
        }
        self.slots[self.count] = item;
        self.count += 1;
    }

    /// Remove the item at `pos`, shifting everything after it left by one
    pub fn remove_at(&mut self, pos: usize) -> BistroResult<T> {
        if pos >= self.count {
            tracing::warn!(index = pos, len = self.count, "index out of range, nothing removed");
            return Err(BistroError::Index {
                index: pos,
                len: self.count,
            });
        }

        let removed = mem::take(&mut self.slots[pos]);
        // The vacated slot travels to the end of the occupied range
        self.slots[pos..self.count].rotate_left(1);
        self.count -= 1;
        Ok(removed)
    }

    /// Reset every slot to its default value; capacity is kept
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = T::default();
        }
        self.count = 0;
    }

    fn grow(&mut self) {
        let mut fresh = allocate(self.capacity() * 2);
        for (dst, src) in fresh.iter_mut().zip(self.slots[..self.count].iter_mut()) {
            *dst = mem::take(src);
        }
        tracing::debug!(from = self.capacity(), to = fresh.len(), "growing array");
        self.slots = fresh;
    }
}

impl<T> GrowableArray<T> {
    /// Borrow the item at `pos`
    ///
    /// The reference does not outlive the next mutation of the array.
    pub fn get(&self, pos: usize) -> BistroResult<&T> {
        self.slots[..self.count].get(pos).ok_or(BistroError::Index {
            index: pos,
            len: self.count,
        })
    }

    /// Mutably borrow the item at `pos`
    pub fn get_mut(&mut self, pos: usize) -> BistroResult<&mut T> {
        let len = self.count;
        self.slots[..len]
            .get_mut(pos)
            .ok_or(BistroError::Index { index: pos, len })
    }

    /// Number of occupied slots
    pub fn size(&self) -> usize {
        self.count
    }

    /// Number of allocated slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Position of the first item matching the predicate (linear scan)
    pub fn position<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().position(predicate)
    }

    /// Iterate the occupied slots in insertion order
    ///
    /// Each call starts a fresh traversal.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.slots[..self.count].iter()
    }
}

impl<T: Default> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a GrowableArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn allocate<T: Default>(capacity: usize) -> Box<[T]> {
    (0..capacity).map(|_| T::default()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(values: &[i32], capacity: usize) -> GrowableArray<i32> {
        let mut array = GrowableArray::with_capacity(capacity);
        for v in values {
            array.add(*v);
        }
        array
    }

    #[test]
    fn test_default_capacity() {
        let array: GrowableArray<i32> = GrowableArray::new();
        assert_eq!(array.capacity(), 100);
        assert!(array.is_empty());
    }

    #[test]
    fn test_zero_capacity_is_raised() {
        let mut array = GrowableArray::with_capacity(0);
        assert_eq!(array.capacity(), 1);
        array.add(1);
        array.add(2);
        assert_eq!(array.capacity(), 2);
    }

    #[test]
    fn test_capacity_doubles_and_never_shrinks() {
        let mut array = GrowableArray::with_capacity(2);
        let mut seen = vec![array.capacity()];

        for i in 0..9 {
            array.add(i);
            if *seen.last().unwrap() != array.capacity() {
                seen.push(array.capacity());
            }
        }
        assert_eq!(seen, vec![2, 4, 8, 16]);

        while !array.is_empty() {
            array.remove_at(0).unwrap();
        }
        assert_eq!(array.capacity(), 16);
    }

    #[test]
    fn test_size_tracks_adds_minus_removes() {
        let mut array = GrowableArray::with_capacity(3);
        let mut expected = 0usize;

        for round in 0..20 {
            array.add(round);
            expected += 1;
            if round % 3 == 0 {
                array.remove_at(array.size() / 2).unwrap();
                expected -= 1;
            }
            assert_eq!(array.size(), expected);
            assert!(array.size() <= array.capacity());
        }
    }

    #[test]
    fn test_items_survive_growth() {
        let array = filled(&[1, 2, 3, 4, 5], 2);
        assert_eq!(array.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_remove_shifts_left() {
        let mut array = filled(&[10, 20, 30, 40], 4);

        assert_eq!(array.remove_at(1).unwrap(), 20);
        assert_eq!(array.size(), 3);
        assert_eq!(array.iter().copied().collect::<Vec<_>>(), vec![10, 30, 40]);

        // Last element
        assert_eq!(array.remove_at(2).unwrap(), 40);
        assert_eq!(array.iter().copied().collect::<Vec<_>>(), vec![10, 30]);
    }

    #[test]
    fn test_remove_out_of_range_leaves_array_unchanged() {
        let mut array = filled(&[10, 20], 4);

        let err = array.remove_at(2).unwrap_err();
        assert!(matches!(err, BistroError::Index { index: 2, len: 2 }));
        assert_eq!(array.iter().copied().collect::<Vec<_>>(), vec![10, 20]);
        assert_eq!(array.capacity(), 4);
    }

    #[test]
    fn test_get_bounds() {
        let mut array = filled(&[7, 8], 4);
        assert_eq!(*array.get(1).unwrap(), 8);
        // Slot 2 exists in the buffer but is not occupied
        assert!(array.get(2).unwrap_err().is_index());

        *array.get_mut(0).unwrap() = 70;
        assert_eq!(*array.get(0).unwrap(), 70);
        assert!(array.get_mut(5).is_err());
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut array = filled(&[1, 2, 3], 2);
        let capacity = array.capacity();

        array.clear();
        assert_eq!(array.size(), 0);
        assert_eq!(array.capacity(), capacity);
        assert_eq!(array.iter().count(), 0);

        array.add(9);
        assert_eq!(*array.get(0).unwrap(), 9);
    }

    #[test]
    fn test_iteration_is_restartable() {
        let array = filled(&[1, 2, 3], 4);
        let first: Vec<_> = array.iter().collect();
        let second: Vec<_> = (&array).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(array.position(|v| *v == 3), Some(2));
        assert_eq!(array.position(|v| *v == 4), None);
    }
}
