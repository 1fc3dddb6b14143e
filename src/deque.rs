//! The public double-ended queue.

use std::fmt;

use crate::{
    cirbuf::{CircularBuffer, Iter},
    constants::MIN_CAPACITY,
    error::{DequeError, Operation, Result},
};

/// A double-ended queue with amortized O(1) insertion and removal at both
/// ends.
///
/// Reading or removing from an empty deque is a caller error and is reported
/// as [`DequeError::Empty`] instead of a sentinel value.
///
/// ```
/// use netdeque::Deque;
///
/// let mut deque = Deque::new();
/// deque.add_end(20);
/// deque.add_beg(10);
/// assert_eq!(deque.peek_beg(), Ok(&10));
/// assert_eq!(deque.rem_end(), Ok(20));
/// assert_eq!(deque.count(), 1);
/// ```
#[derive(Clone)]
pub struct Deque<T> {
    buf: CircularBuffer<T>,
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deque<T> {
    /// Creates an empty deque. Nothing is allocated until the first insertion.
    pub fn new() -> Self {
        Self {
            buf: CircularBuffer::new(0),
        }
    }

    /// Creates an empty deque able to hold at least `capacity` elements
    /// before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        let size = if capacity == 0 {
            0
        } else {
            capacity.next_power_of_two()
        };
        Self {
            buf: CircularBuffer::new(size),
        }
    }

    /// Inserts `value` at the front.
    pub fn add_beg(&mut self, value: T) {
        self.buf.push_front(value);
    }

    /// Inserts `value` at the back.
    pub fn add_end(&mut self, value: T) {
        self.buf.push_back(value);
    }

    /// Removes and returns the front element.
    pub fn rem_beg(&mut self) -> Result<T> {
        self.buf.pop_front().ok_or(DequeError::Empty {
            op: Operation::RemBeg,
        })
    }

    /// Removes and returns the back element.
    pub fn rem_end(&mut self) -> Result<T> {
        self.buf.pop_back().ok_or(DequeError::Empty {
            op: Operation::RemEnd,
        })
    }

    /// Returns the front element without removing it.
    pub fn peek_beg(&self) -> Result<&T> {
        self.buf.front().ok_or(DequeError::Empty {
            op: Operation::PeekBeg,
        })
    }

    /// Returns the back element without removing it.
    pub fn peek_end(&self) -> Result<&T> {
        self.buf.back().ok_or(DequeError::Empty {
            op: Operation::PeekEnd,
        })
    }

    /// Number of elements held.
    pub fn count(&self) -> usize {
        self.buf.len()
    }

    /// Same as [`count`](Self::count).
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the deque holds no elements.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Number of elements the deque can hold before it reallocates.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Removes every element, keeping the allocation.
    pub fn clear(&mut self) {
        if !self.is_empty() {
            log::trace!("[Deque] clear {} elements", self.count());
        }
        self.buf.clear();
    }

    /// Releases unused capacity. The deque keeps room for at least
    /// `MIN_CAPACITY` elements unless it is empty, in which case the storage
    /// is freed entirely.
    pub fn shrink_to_fit(&mut self) {
        let min_capacity = if self.is_empty() { 0 } else { MIN_CAPACITY };
        self.buf.shrink_to(min_capacity);
    }

    /// Iterates from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.buf.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.count() == other.count() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Deque<T> {}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add_end(value);
        }
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Deque::new();
        deque.extend(iter);
        deque
    }
}

impl<T> From<Vec<T>> for Deque<T> {
    fn from(values: Vec<T>) -> Self {
        let mut deque = Deque::with_capacity(values.len());
        deque.extend(values);
        deque
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
