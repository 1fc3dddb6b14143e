//! Growable ring storage.
//!
//! Slots live in a `Vec<Option<T>>` whose length is always zero or a power of
//! two, so positions wrap with a mask instead of a modulo. The live elements
//! occupy `len` consecutive slots starting at `head`, wrapping past the end of
//! the vector; every other slot is `None`.

use std::iter::FusedIterator;

use crate::constants::{GROWTH_FACTOR, MIN_CAPACITY};

fn empty_slots<T>(size: usize) -> Vec<Option<T>> {
    std::iter::repeat_with(|| None).take(size).collect()
}

/// Ring buffer with O(1) push and pop at both ends.
#[derive(Clone, Debug)]
pub struct CircularBuffer<T> {
    values: Vec<Option<T>>,
    head: usize,
    len: usize,
    mask: usize,
}

impl<T> CircularBuffer<T> {
    /// Creates a buffer with `initial_size` slots. A size of zero allocates
    /// nothing until the first push.
    pub fn new(initial_size: usize) -> Self {
        debug_assert!(initial_size == 0 || initial_size.is_power_of_two());
        Self {
            values: empty_slots(initial_size),
            head: 0,
            len: 0,
            mask: initial_size.saturating_sub(1),
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no elements are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.values.len()
    }

    fn wrap(&self, idx: usize) -> usize {
        idx & self.mask
    }

    /// Appends `val` after the current back element.
    pub fn push_back(&mut self, val: T) {
        if self.len == self.capacity() {
            self.grow();
        }

        let idx = self.wrap(self.head + self.len);
        debug_assert!(self.values[idx].is_none());
        self.values[idx] = Some(val);
        self.len += 1;
    }

    /// Prepends `val` before the current front element.
    pub fn push_front(&mut self, val: T) {
        if self.len == self.capacity() {
            self.grow();
        }

        self.head = self.wrap(self.head.wrapping_sub(1));
        debug_assert!(self.values[self.head].is_none());
        self.values[self.head] = Some(val);
        self.len += 1;
    }

    /// Removes and returns the front element.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let val = self.values[self.head].take();
        debug_assert!(val.is_some());
        self.head = self.wrap(self.head + 1);
        self.len -= 1;
        val
    }

    /// Removes and returns the back element.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let idx = self.wrap(self.head + self.len - 1);
        let val = self.values[idx].take();
        debug_assert!(val.is_some());
        self.len -= 1;
        val
    }

    /// Returns the element `index` positions behind the front.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.values[self.wrap(self.head + index)].as_ref()
    }

    /// Returns the front element.
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns the back element.
    pub fn back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|last| self.get(last))
    }

    /// Drops every element. Capacity is kept.
    pub fn clear(&mut self) {
        self.values.iter_mut().for_each(|slot| *slot = None);
        self.head = 0;
        self.len = 0;
    }

    /// Reallocates down to the smallest power of two holding both the live
    /// elements and `min_capacity` slots. Does nothing if that would not
    /// reduce the capacity.
    pub fn shrink_to(&mut self, min_capacity: usize) {
        let wanted = self.len.max(min_capacity);
        let size = if wanted == 0 {
            0
        } else {
            wanted.next_power_of_two()
        };

        if size >= self.capacity() {
            return;
        }

        log::trace!(
            "[CircularBuffer] shrink {} -> {} slots, {} live",
            self.capacity(),
            size,
            self.len
        );
        self.relocate(size);
    }

    /// Iterates from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            buf: self,
            front: 0,
            back: self.len,
        }
    }

    fn grow(&mut self) {
        let size = self
            .capacity()
            .saturating_mul(GROWTH_FACTOR)
            .max(MIN_CAPACITY);

        log::trace!(
            "[CircularBuffer] grow {} -> {} slots, {} live",
            self.capacity(),
            size,
            self.len
        );
        self.relocate(size);
    }

    // Moves the live elements, front first, to the start of a fresh
    // allocation of `size` slots.
    fn relocate(&mut self, size: usize) {
        debug_assert!(size >= self.len);
        let old_mask = self.mask;
        let mut old_values = std::mem::replace(&mut self.values, empty_slots(size));

        for i in 0..self.len {
            let old_idx = (self.head + i) & old_mask;
            self.values[i] = old_values[old_idx].take();
        }

        self.head = 0;
        self.mask = size.saturating_sub(1);
    }
}

/// Front-to-back iterator over a [`CircularBuffer`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    buf: &'a CircularBuffer<T>,
    front: usize,
    back: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            buf: self.buf,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        let item = self.buf.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.buf.get(self.back)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(buf: &CircularBuffer<u32>) -> Vec<u32> {
        buf.iter().copied().collect()
    }

    #[test]
    fn test_unallocated_until_first_push() {
        let mut buf = CircularBuffer::<u32>::new(0);
        assert_eq!(buf.capacity(), 0);
        assert_eq!(buf.pop_front(), None);
        assert_eq!(buf.pop_back(), None);
        assert_eq!(buf.front(), None);
        assert_eq!(buf.back(), None);

        buf.push_front(7);
        assert_eq!(buf.capacity(), MIN_CAPACITY);
        assert_eq!(buf.front(), Some(&7));
        assert_eq!(buf.back(), Some(&7));
    }

    #[test]
    fn test_push_front_wraps_without_growing() {
        let mut buf = CircularBuffer::new(4);
        buf.push_back(1);
        buf.push_back(2);
        buf.push_front(0);
        buf.push_front(9);

        assert_eq!(buf.capacity(), 4);
        assert_eq!(contents(&buf), vec![9, 0, 1, 2]);
        assert_eq!(buf.head, 2);
    }

    #[test]
    fn test_grow_linearizes_wrapped_contents() {
        let mut buf = CircularBuffer::new(4);
        buf.push_back(1);
        buf.push_back(2);
        buf.push_front(0);
        buf.push_front(9);
        // full and wrapped: the next push must relocate
        buf.push_back(3);

        assert_eq!(buf.capacity(), 8);
        assert_eq!(buf.head, 0);
        assert_eq!(contents(&buf), vec![9, 0, 1, 2, 3]);

        buf.push_front(8);
        assert_eq!(buf.capacity(), 8);
        assert_eq!(contents(&buf), vec![8, 9, 0, 1, 2, 3]);
    }

    #[test]
    fn test_pop_both_ends_across_wrap() {
        let mut buf = CircularBuffer::new(4);
        for v in [3, 2, 1] {
            buf.push_front(v);
        }
        buf.push_back(4);

        assert_eq!(buf.pop_back(), Some(4));
        assert_eq!(buf.pop_front(), Some(1));
        assert_eq!(buf.pop_front(), Some(2));
        assert_eq!(buf.pop_back(), Some(3));
        assert_eq!(buf.pop_back(), None);
        assert!(buf.is_empty());
        assert!(buf.values.iter().all(Option::is_none));
    }

    #[test]
    fn test_capacity_stays_power_of_two() {
        let mut buf = CircularBuffer::new(0);
        for i in 0..1000 {
            if i % 3 == 0 {
                buf.push_front(i);
            } else {
                buf.push_back(i);
            }
            assert!(buf.capacity().is_power_of_two());
            assert!(buf.capacity() >= buf.len());
        }
    }

    #[test]
    fn test_shrink_keeps_order() {
        let mut buf = CircularBuffer::new(0);
        for i in 0..100 {
            buf.push_back(i);
        }
        for _ in 0..95 {
            buf.pop_front();
        }
        buf.push_front(1);
        assert_eq!(buf.capacity(), 128);

        buf.shrink_to(MIN_CAPACITY);
        assert_eq!(buf.capacity(), 8);
        assert_eq!(contents(&buf), vec![1, 95, 96, 97, 98, 99]);

        // never below the live count, never upward
        buf.shrink_to(0);
        assert_eq!(buf.capacity(), 8);
        buf.shrink_to(64);
        assert_eq!(buf.capacity(), 8);
    }

    #[test]
    fn test_shrink_empty_releases_storage() {
        let mut buf = CircularBuffer::new(16);
        buf.push_back(1);
        buf.pop_back();
        buf.shrink_to(0);
        assert_eq!(buf.capacity(), 0);

        buf.push_back(2);
        assert_eq!(contents(&buf), vec![2]);
    }

    #[test]
    fn test_clear_drops_values_keeps_capacity() {
        let mut buf = CircularBuffer::new(8);
        for i in 0..6 {
            buf.push_front(i);
        }
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), 8);
        assert!(buf.values.iter().all(Option::is_none));
    }

    #[test]
    fn test_iter_both_directions() {
        let mut buf = CircularBuffer::new(4);
        buf.push_back(2);
        buf.push_front(1);
        buf.push_back(3);

        let mut iter = buf.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }
}
