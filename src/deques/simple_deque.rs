//! Naive double-ended queue over a plain `Vec`.
//!
//! Back operations are O(1) amortized; front operations shift every element and
//! are O(n).  Kept as the baseline [`AmortizedDeque`](super::AmortizedDeque) is
//! measured against.

use core::fmt;

use super::AnyDeque;

/// A `Vec`-backed deque that shifts elements on every front operation.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SimpleDeque<T> {
    items: Vec<T>,
}

impl<T> AnyDeque<T> for SimpleDeque<T> {
    fn len(&self) -> usize {
        self.len()
    }
    fn push_back(&mut self, item: T) {
        self.push_back(item);
    }
    fn push_front(&mut self, item: T) {
        self.push_front(item);
    }
    fn pop_back(&mut self) -> Option<T> {
        self.pop_back()
    }
    fn pop_front(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn clear(&mut self) {
        self.items.clear();
    }
    fn front(&self) -> Option<&T> {
        self.front()
    }
    fn back(&self) -> Option<&T> {
        self.back()
    }
}

impl<T> SimpleDeque<T> {
    /// Creates an empty deque.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates a deque holding `elements` in order.
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

    #[inline(always)]
    pub fn front(&self) -> Option<&T> {
        self.items.first()
    }

    #[inline(always)]
    pub fn back(&self) -> Option<&T> {
        self.items.last()
    }

    /// O(1) amortized.
    #[inline]
    pub fn push_back(&mut self, item: T) {
        self.items.push(item);
    }

    /// O(n): every element moves one slot to the right.
    pub fn push_front(&mut self, item: T) {
        self.items.insert(0, item);
    }

    /// O(1).
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// O(n): every remaining element moves one slot to the left.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    /// Front-to-back view of the elements.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T> Default for SimpleDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for SimpleDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for SimpleDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: Vec::from_iter(iter),
        }
    }
}
