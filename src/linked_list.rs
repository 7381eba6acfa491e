//! Doubly linked list whose links are arena indices.
//!
//! # Architecture
//! Nodes live in one `Vec` of slots.  `prev` / `next` hold slot indices instead of
//! pointers, so a back link is a lookup rather than a second owner and there are no
//! reference cycles.  Freed slots go on a free list and are reused by later inserts.
//!
//! Each slot carries a generation counter that is bumped whenever its node is
//! removed.  A [`NodeId`] remembers the generation it was issued with, so a handle to
//! a removed node never resolves to whatever later reuses the slot.
//!
//! ```text
//! head ─► [1] ◄─► [4] ◄─► [0] ◄─ tail        free: 2, 3
//! ```

use core::fmt;
use core::iter::FusedIterator;

/// Handle to a node of a [`LinkedList`].  Stale after the node is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    generation: u64,
}

struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

struct Slot<T> {
    generation: u64,
    node: Option<Node<T>>,
}

/// A doubly linked list with O(1) operations at both ends and at any known node.
///
/// ```rust
/// use amortized_collections::LinkedList;
///
/// let mut list = LinkedList::new();
/// let a = list.push_back("a");
/// list.push_back("c");
/// list.insert_after(a, "b");
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), ["a", "b", "c"]);
/// assert_eq!(list.remove(a), Some("a"));
/// assert_eq!(list.remove(a), None);
/// ```
pub struct LinkedList<T> {
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Handle to the first node.
    pub fn first(&self) -> Option<NodeId> {
        self.head.map(|i| self.id_at(i))
    }

    /// Handle to the last node.
    pub fn last(&self) -> Option<NodeId> {
        self.tail.map(|i| self.id_at(i))
    }

    /// Handle to the node after `id`, or `None` at the tail or for a stale handle.
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.node(id)?.next.map(|i| self.id_at(i))
    }

    /// Handle to the node before `id`, or `None` at the head or for a stale handle.
    pub fn prev(&self, id: NodeId) -> Option<NodeId> {
        self.node(id)?.prev.map(|i| self.id_at(i))
    }

    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.node(id).map(|node| &node.value)
    }

    pub fn value_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.node_mut(id).map(|node| &mut node.value)
    }

    /// Prepends `value` and returns its handle.
    pub fn push_front(&mut self, value: T) -> NodeId {
        let old_head = self.head;
        let idx = self.alloc(Node {
            value,
            prev: None,
            next: old_head,
        });
        match old_head {
            Some(h) => self.link_mut(h).prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
        self.id_at(idx)
    }

    /// Appends `value` and returns its handle.
    pub fn push_back(&mut self, value: T) -> NodeId {
        let old_tail = self.tail;
        let idx = self.alloc(Node {
            value,
            prev: old_tail,
            next: None,
        });
        match old_tail {
            Some(t) => self.link_mut(t).next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.id_at(idx)
    }

    /// Inserts `value` right after `id`.  Returns `None` if `id` is stale.
    pub fn insert_after(&mut self, id: NodeId, value: T) -> Option<NodeId> {
        let next = self.node(id)?.next;
        let idx = self.alloc(Node {
            value,
            prev: Some(id.index),
            next,
        });
        self.link_mut(id.index).next = Some(idx);
        match next {
            Some(n) => self.link_mut(n).prev = Some(idx),
            None => self.tail = Some(idx),
        }
        Some(self.id_at(idx))
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.unlink(self.head?)
    }

    pub fn pop_back(&mut self) -> Option<T> {
        self.unlink(self.tail?)
    }

    /// Removes the node `id` and returns its value, or `None` if `id` is stale.
    pub fn remove(&mut self, id: NodeId) -> Option<T> {
        self.node(id)?;
        self.unlink(id.index)
    }

    /// Removes every node.  All outstanding handles become stale.
    pub fn clear(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.node.take().is_some() {
                slot.generation += 1;
                self.free.push(index);
            }
        }
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Iterates from the first node to the last.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    fn id_at(&self, index: usize) -> NodeId {
        NodeId {
            index,
            generation: self.slots[index].generation,
        }
    }

    fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    /// Live node at `index`.  Only called with indices reached through the list's own
    /// links, which always point at occupied slots.
    fn link_mut(&mut self, index: usize) -> &mut Node<T> {
        match self.slots[index].node.as_mut() {
            Some(node) => node,
            None => unreachable!("list link points at free slot {index}"),
        }
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        self.len += 1;
        match self.free.pop() {
            Some(index) => {
                self.slots[index].node = Some(node);
                index
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                self.slots.len() - 1
            }
        }
    }

    fn unlink(&mut self, index: usize) -> Option<T> {
        let slot = &mut self.slots[index];
        let node = slot.node.take()?;
        slot.generation += 1;
        self.free.push(index);
        self.len -= 1;

        match node.prev {
            Some(p) => self.link_mut(p).next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(n) => self.link_mut(n).prev = node.prev,
            None => self.tail = node.prev,
        }
        Some(node.value)
    }
}

/// Borrowing iterator returned by [`LinkedList::iter`].
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.list.slots[self.cursor?].node.as_ref()?;
        self.cursor = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}
