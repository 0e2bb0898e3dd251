//! Common traits for heap data structures
//!
//! This module provides a two-tier trait hierarchy:
//!
//! - [`Heap`]: Base trait for single-ended min-heaps
//! - [`DoubleEndedHeap`]: Extended trait adding max-side access and removal
//!
//! The base [`Heap`] trait is compatible with Rust's standard heap API
//! patterns, while [`DoubleEndedHeap`] adds the operations that make a
//! structure usable as a double-ended priority queue.

/// Base trait for heap/priority queue data structures
///
/// This trait provides a simple API similar to Rust's `BinaryHeap`:
/// - `push` inserts an element (returns `()`)
/// - `pop_min` removes and returns the minimum
/// - `peek_min` returns the minimum without removing it
///
/// Unlike `BinaryHeap` which stores values directly (using `Ord`), these heaps
/// store (priority, item) pairs to separate the ordering key from the data.
/// Elements with equal priorities are returned in an unspecified order.
///
/// For heaps that also support max-side operations, see [`DoubleEndedHeap`].
///
/// # Example
///
/// ```rust
/// use minmax_heap::Heap;
/// use minmax_heap::simple_binary::SimpleBinaryHeap;
///
/// let mut heap = SimpleBinaryHeap::new();
/// heap.push(3, "three");
/// heap.push(1, "one");
/// heap.push(2, "two");
///
/// assert_eq!(heap.peek_min(), Some((&1, &"one")));
/// assert_eq!(heap.pop_min(), Some((1, "one")));
/// ```
pub trait Heap<T, P: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element with the given priority
    ///
    /// # Time Complexity
    /// O(log n) for all implementations in this crate.
    fn push(&mut self, priority: P, item: T);

    /// Returns the minimum priority and associated item without removing it
    ///
    /// Returns `None` if the heap is empty.
    ///
    /// # Time Complexity
    /// O(1) for all implementations
    fn peek_min(&self) -> Option<(&P, &T)>;

    /// Removes and returns the minimum priority and associated item
    ///
    /// Returns `None` if the heap is empty.
    ///
    /// # Time Complexity
    /// O(log n) for all implementations.
    fn pop_min(&mut self) -> Option<(P, T)>;
}

/// Extended heap trait with max-side access
///
/// This trait extends [`Heap`] with the operations of a double-ended
/// priority queue: the maximum can be inspected and removed as cheaply as
/// the minimum. A single-ended binary heap cannot implement this trait
/// efficiently; the crate's [`PriorityQueue`](crate::PriorityQueue) backs
/// it with a min-max heap so both ends cost O(log n).
///
/// # Example
///
/// ```rust
/// use minmax_heap::{DoubleEndedHeap, Heap, PriorityQueue};
///
/// let mut queue = PriorityQueue::new();
/// queue.push(5, "five");
/// queue.push(1, "one");
/// queue.push(9, "nine");
///
/// assert_eq!(queue.peek_max(), Some((&9, &"nine")));
/// assert_eq!(queue.pop_max(), Some((9, "nine")));
/// assert_eq!(queue.pop_min(), Some((1, "one")));
/// ```
pub trait DoubleEndedHeap<T, P: Ord>: Heap<T, P> {
    /// Returns the maximum priority and associated item without removing it
    ///
    /// Returns `None` if the heap is empty.
    ///
    /// # Time Complexity
    /// O(1)
    fn peek_max(&self) -> Option<(&P, &T)>;

    /// Removes and returns the maximum priority and associated item
    ///
    /// Returns `None` if the heap is empty.
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop_max(&mut self) -> Option<(P, T)>;
}
