//! Growable double-ended queue with O(1) amortized operations at both ends.
//!
//! # Layout
//! One contiguous `Vec<Option<T>>` plus a `head` cursor.  Live elements occupy
//! `buffer[head..]` and are always `Some`; every slot before `head` is `None`.
//!
//! ```text
//!   buffer:  [ None | None | None | Some(a) | Some(b) | Some(c) ]
//!                                   ^ head
//!   len = buffer.len() - head = 3
//! ```
//!
//! * `pop_front` does not shift: it takes `buffer[head]`, leaves `None` behind and
//!   advances `head`.
//! * `push_front` writes into the slot just before `head`.  When `head == 0` there is
//!   no room, so a block of empty slots is prepended first.  The block size is
//!   multiplied by [`DequeConfig::growth_factor`] every time this happens, which
//!   makes the O(n) prepend rare enough to amortize to O(1).
//! * Leading `None` slots are waste.  After each `pop_front` the trim policy drops
//!   them once the buffer is longer than [`DequeConfig::min_trim_len`] and more than
//!   [`DequeConfig::max_slack_ratio`] of it is empty.

use core::cmp::Ordering;
use core::convert::identity;
use core::fmt;
use core::iter::FusedIterator;
use core::slice;
use std::vec;

use tracing::trace;

use super::AnyDeque;
use crate::config::DequeConfig;

/// A double-ended queue that moves its head index instead of its elements.
///
/// # Examples
/// ```rust
/// use amortized_collections::AmortizedDeque;
///
/// let mut d = AmortizedDeque::from_vec(vec![1, 2, 3]);
/// d.push_front(0);
/// assert_eq!(d.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3]);
/// assert_eq!(d.pop_back(), Some(3));
/// assert_eq!(d.pop_front(), Some(0));
/// assert_eq!(d.len(), 2);
/// ```
#[derive(Clone)]
pub struct AmortizedDeque<T> {
    buffer: Vec<Option<T>>,
    head: usize,
    front_slack: usize,
    config: DequeConfig,
}

impl<T> AnyDeque<T> for AmortizedDeque<T> {
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
        self.clear();
    }
    fn front(&self) -> Option<&T> {
        self.front()
    }
    fn back(&self) -> Option<&T> {
        self.back()
    }
}

impl<T> AmortizedDeque<T> {
    /// Creates an empty deque with the default [`DequeConfig`].
    pub fn new() -> Self {
        Self::with_config(DequeConfig::default())
    }

    /// Creates an empty deque with the given thresholds.
    pub fn with_config(config: DequeConfig) -> Self {
        Self {
            buffer: Vec::new(),
            head: 0,
            front_slack: config.initial_front_slack(),
            config,
        }
    }

    /// Creates an empty deque whose buffer can hold `capacity` slots without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut deque = Self::new();
        deque.buffer.reserve_exact(capacity);
        deque
    }

    /// Creates a deque holding `elements` in order, with no leading empty slots.
    pub fn from_vec(elements: Vec<T>) -> Self {
        Self::from_vec_with_config(elements, DequeConfig::default())
    }

    /// Same as [`from_vec`](AmortizedDeque::from_vec) with custom thresholds.
    pub fn from_vec_with_config(elements: Vec<T>, config: DequeConfig) -> Self {
        let mut deque = Self::with_config(config);
        deque.buffer = elements.into_iter().map(Some).collect();
        deque
    }

    /// Returns the number of live elements.  Empty slots before the head are not counted.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.buffer.len() - self.head
    }

    /// Returns `true` if the deque contains no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Physical number of slots in the buffer, live or empty.
    #[inline(always)]
    pub fn buffer_len(&self) -> usize {
        self.buffer.len()
    }

    /// Number of empty slots in front of the first element.
    #[inline(always)]
    pub fn slack(&self) -> usize {
        self.head
    }

    /// Size of the most recent block of empty slots prepended by `push_front`
    /// (or the configured seed if the front has never grown).
    #[inline(always)]
    pub fn front_slack(&self) -> usize {
        self.front_slack
    }

    /// The thresholds this deque was built with.
    #[inline(always)]
    pub fn config(&self) -> &DequeConfig {
        &self.config
    }

    /// Returns a shared reference to the element at logical `index`, or `None`.
    ///
    /// Logical index 0 is the front.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len() {
            self.buffer[self.head + index].as_ref()
        } else {
            None
        }
    }

    /// Returns an exclusive reference to the element at logical `index`, or `None`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len() {
            self.buffer[self.head + index].as_mut()
        } else {
            None
        }
    }

    /// Returns a shared reference to the front element, or `None` if empty.
    #[inline(always)]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a shared reference to the back element, or `None` if empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            self.buffer.last().and_then(Option::as_ref)
        }
    }

    /// Returns an exclusive reference to the front element, or `None` if empty.
    #[inline(always)]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Returns an exclusive reference to the back element, or `None` if empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            None
        } else {
            self.buffer.last_mut().and_then(Option::as_mut)
        }
    }

    /// Appends `item` to the back.  Amortized O(1).
    #[inline]
    pub fn push_back(&mut self, item: T) {
        self.buffer.push(Some(item));
    }

    /// Removes and returns the last element, or `None` if empty.  Never shifts.
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.buffer.pop().flatten()
    }

    /// Prepends `item`.  Amortized O(1): reuses the empty slot before the head, and
    /// only prepends a fresh block of empty slots when there is none.
    #[inline]
    pub fn push_front(&mut self, item: T) {
        if self.head == 0 {
            self.grow_front();
        }
        self.head -= 1;
        self.buffer[self.head] = Some(item);
    }

    /// Removes and returns the first element, or `None` if empty.
    ///
    /// The vacated slot stays in the buffer as slack; see the module docs for when
    /// it is reclaimed.
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.buffer[self.head].take();
        self.head += 1;
        if self.config.should_trim(self.head, self.buffer.len()) {
            self.compact();
        }
        item
    }

    /// Drops every leading empty slot and resets the head to 0, regardless of the
    /// trim thresholds.
    ///
    /// The front-growth counter is capped at the surviving length (never below the
    /// configured seed), so the next front growth is proportional to what is left.
    pub fn compact(&mut self) {
        if self.head == 0 {
            return;
        }
        let reclaimed = self.head;
        self.buffer.drain(..reclaimed);
        self.head = 0;
        self.front_slack = self
            .front_slack
            .min(self.buffer.len().max(self.config.initial_front_slack()));
        trace!(
            reclaimed,
            buffer_len = self.buffer.len(),
            "compacted amortized deque"
        );
    }

    /// Removes all elements and forgets any front growth.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.head = 0;
        self.front_slack = self.config.initial_front_slack();
    }

    /// Returns a front-to-back iterator over the elements.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.buffer[self.head..].iter(),
        }
    }

    /// Cold path: prepends `front_slack * growth_factor` empty slots.
    #[inline(never)]
    fn grow_front(&mut self) {
        self.front_slack = self
            .front_slack
            .saturating_mul(self.config.growth_factor());
        let slack = self.front_slack;

        let mut grown = Vec::with_capacity(slack + self.buffer.len());
        grown.resize_with(slack, || None);
        grown.append(&mut self.buffer);
        self.buffer = grown;
        self.head = slack;

        trace!(
            slack,
            buffer_len = self.buffer.len(),
            "grew amortized deque front"
        );
    }
}

// ─── Iteration ────────────────────────────────────────────────────────────────

/// Borrowing iterator returned by [`AmortizedDeque::iter`].
#[derive(Clone)]
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.find_map(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().rev().find_map(Option::as_ref)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator returned by `AmortizedDeque::into_iter`.
pub struct IntoIter<T> {
    inner: vec::IntoIter<Option<T>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.find_map(identity)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.by_ref().rev().find_map(identity)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for AmortizedDeque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        self.compact();
        IntoIter {
            inner: self.buffer.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a AmortizedDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

// ─── Std traits ───────────────────────────────────────────────────────────────

impl<T: fmt::Debug> fmt::Debug for AmortizedDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for AmortizedDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for AmortizedDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}
impl<T: Eq> Eq for AmortizedDeque<T> {}

impl<T: PartialOrd> PartialOrd for AmortizedDeque<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for AmortizedDeque<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T> Extend<T> for AmortizedDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.buffer.reserve(iter.size_hint().0);
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for AmortizedDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T> From<Vec<T>> for AmortizedDeque<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}
