// SPDX-License-Identifier: MPL-2.0
//! Bounded history of recent log records.
//!
//! A ring buffer that evicts the oldest entry once capacity is reached.

use std::collections::VecDeque;

/// Smallest history the broadcaster keeps.
pub const MIN_HISTORY: usize = 1;
/// Largest history the broadcaster keeps.
pub const MAX_HISTORY: usize = 10_000;
/// History length used when none is configured.
pub const DEFAULT_HISTORY: usize = 200;

/// A generic circular buffer with fixed capacity.
///
/// Elements are stored in chronological order (oldest first).
///
/// ```
/// use iced_status::logging::CircularBuffer;
///
/// let mut buffer: CircularBuffer<i32> = CircularBuffer::new(2);
/// buffer.push(1);
/// buffer.push(2);
/// buffer.push(3);
///
/// let items: Vec<_> = buffer.iter().copied().collect();
/// assert_eq!(items, vec![2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    /// Creates a buffer holding at most `capacity` elements, clamped to
    /// [`MIN_HISTORY`]..=[`MAX_HISTORY`].
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.clamp(MIN_HISTORY, MAX_HISTORY);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes an element to the buffer, evicting the oldest if at capacity.
    pub fn push(&mut self, item: T) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(item);
    }

    /// Returns an iterator over the elements in chronological order (oldest first).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
        self.data.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl<T> Default for CircularBuffer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circular_buffer_overflow_evicts_oldest() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::new(3);

        buffer.push(1);
        buffer.push(2);
        buffer.push(3);
        buffer.push(4); // Evicts 1
        buffer.push(5); // Evicts 2

        let items: Vec<_> = buffer.iter().copied().collect();
        assert_eq!(items, vec![3, 4, 5]);
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn capacity_is_clamped() {
        assert_eq!(CircularBuffer::<u8>::new(0).capacity(), MIN_HISTORY);
        assert_eq!(CircularBuffer::<u8>::new(usize::MAX).capacity(), MAX_HISTORY);
        assert_eq!(CircularBuffer::<u8>::default().capacity(), DEFAULT_HISTORY);
    }

    #[test]
    fn circular_buffer_clear() {
        let mut buffer: CircularBuffer<i32> = CircularBuffer::new(5);
        buffer.push(1);
        buffer.push(2);

        buffer.clear();

        assert!(buffer.is_empty());
        assert_eq!(buffer.capacity(), 5); // Capacity unchanged
    }
}
