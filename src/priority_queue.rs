//! Double-ended priority queue
//!
//! [`PriorityQueue`] associates an arbitrary payload with each priority and
//! forwards every operation to a [`MinMaxHeap`] of (priority, element)
//! pairs. The pairs compare by priority alone; the heap never inspects the
//! payload, so the payload type needs no trait bounds at all.
//!
//! # Example
//!
//! ```rust
//! use minmax_heap::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new();
//! queue.push(4, "medium");
//! queue.push(1, "low");
//! queue.push(7, "high");
//!
//! assert_eq!(queue.pop_max(), Some((7, "high")));
//! assert_eq!(queue.pop_min(), Some((1, "low")));
//! assert_eq!(queue.pop_min(), Some((4, "medium")));
//! assert_eq!(queue.pop_min(), None);
//! ```

use crate::minmax::MinMaxHeap;
use crate::traits::{DoubleEndedHeap, Heap};

/// A (priority, element) pair ordered exclusively by priority
///
/// Two entries with equal priorities compare as equivalent regardless of
/// their elements, which is what leaves the extraction order of ties
/// unspecified.
#[derive(Clone, Debug)]
struct Entry<P, T> {
    priority: P,
    element: T,
}

impl<P: Ord, T> PartialEq for Entry<P, T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl<P: Ord, T> Eq for Entry<P, T> {}

impl<P: Ord, T> PartialOrd for Entry<P, T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: Ord, T> Ord for Entry<P, T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority.cmp(&other.priority)
    }
}

/// A double-ended priority queue backed by a [`MinMaxHeap`]
///
/// Both the lowest- and highest-priority elements can be inspected in O(1)
/// and removed in O(log n). Elements with equal priorities are returned in
/// an unspecified order.
///
/// The queue is a plain value: `Clone` produces a fully independent copy,
/// and no operation shares state between instances.
#[derive(Clone, Debug)]
pub struct PriorityQueue<T, P: Ord> {
    heap: MinMaxHeap<Entry<P, T>>,
}

impl<T, P: Ord> PriorityQueue<T, P> {
    /// Creates a new empty queue
    pub fn new() -> Self {
        Self {
            heap: MinMaxHeap::new(),
        }
    }

    /// Creates a new empty queue with at least the given capacity preallocated
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: MinMaxHeap::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Inserts an element with the given priority
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn push(&mut self, priority: P, element: T) {
        self.heap.push(Entry { priority, element });
    }

    /// Returns the lowest-priority entry without removing it
    pub fn peek_min(&self) -> Option<(&P, &T)> {
        self.heap
            .peek_min()
            .map(|entry| (&entry.priority, &entry.element))
    }

    /// Returns the highest-priority entry without removing it
    pub fn peek_max(&self) -> Option<(&P, &T)> {
        self.heap
            .peek_max()
            .map(|entry| (&entry.priority, &entry.element))
    }

    /// Removes and returns the lowest-priority entry
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn pop_min(&mut self) -> Option<(P, T)> {
        self.heap
            .pop_min()
            .map(|entry| (entry.priority, entry.element))
    }

    /// Removes and returns the highest-priority entry
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn pop_max(&mut self) -> Option<(P, T)> {
        self.heap
            .pop_max()
            .map(|entry| (entry.priority, entry.element))
    }

    /// Removes all elements
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<T, P: Ord> Default for PriorityQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Ord> FromIterator<(P, T)> for PriorityQueue<T, P> {
    /// Builds a queue from (priority, element) pairs in O(n), using the
    /// heap's bottom-up bulk build rather than repeated insertion
    fn from_iter<I: IntoIterator<Item = (P, T)>>(iter: I) -> Self {
        Self {
            heap: iter
                .into_iter()
                .map(|(priority, element)| Entry { priority, element })
                .collect(),
        }
    }
}

impl<T, P: Ord> Extend<(P, T)> for PriorityQueue<T, P> {
    /// Bulk insert; chooses between rebuilding and per-element sifting
    /// internally, see [`MinMaxHeap`]'s `Extend` impl
    fn extend<I: IntoIterator<Item = (P, T)>>(&mut self, iter: I) {
        self.heap.extend(
            iter.into_iter()
                .map(|(priority, element)| Entry { priority, element }),
        );
    }
}

impl<T, P: Ord> Heap<T, P> for PriorityQueue<T, P> {
    fn new() -> Self {
        PriorityQueue::new()
    }

    fn is_empty(&self) -> bool {
        PriorityQueue::is_empty(self)
    }

    fn len(&self) -> usize {
        PriorityQueue::len(self)
    }

    fn push(&mut self, priority: P, item: T) {
        PriorityQueue::push(self, priority, item)
    }

    fn peek_min(&self) -> Option<(&P, &T)> {
        PriorityQueue::peek_min(self)
    }

    fn pop_min(&mut self) -> Option<(P, T)> {
        PriorityQueue::pop_min(self)
    }
}

impl<T, P: Ord> DoubleEndedHeap<T, P> for PriorityQueue<T, P> {
    fn peek_max(&self) -> Option<(&P, &T)> {
        PriorityQueue::peek_max(self)
    }

    fn pop_max(&mut self) -> Option<(P, T)> {
        PriorityQueue::pop_max(self)
    }
}
