//! FIFO queue over a plain `Vec`.
//!
//! `dequeue` removes index 0 and shifts everything left, so it is O(n).  For an
//! O(1) amortized queue use [`AmortizedDeque`](crate::AmortizedDeque) with
//! `push_back` / `pop_front`.

use core::fmt;

/// A first-in, first-out queue with O(1) amortized `enqueue` and O(n) `dequeue`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SimpleQueue<T> {
    items: Vec<T>,
}

impl<T> SimpleQueue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates a queue from `elements`; the first element is dequeued first.
    pub fn from_vec(elements: Vec<T>) -> Self {
        Self { items: elements }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends `item` at the back.
    #[inline]
    pub fn enqueue(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the front element, or `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    /// The next element `dequeue` would return.
    #[inline(always)]
    pub fn front(&self) -> Option<&T> {
        self.items.first()
    }

    /// The most recently enqueued element.
    #[inline(always)]
    pub fn back(&self) -> Option<&T> {
        self.items.last()
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T> Default for SimpleQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for SimpleQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for SimpleQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: Vec::from_iter(iter),
        }
    }
}
