//! Double-Ended Priority Queues for Rust
//!
//! This crate provides a min-max heap and a priority queue built on top of
//! it. Both ends of the ordering are cheap: the minimum and the maximum
//! can each be inspected in O(1) and removed in O(log n), where an
//! ordinary binary heap only serves one end.
//!
//! # Features
//!
//! - **`MinMaxHeap`**: array-backed implicit tree with alternating
//!   min/max levels; O(log n) push and pop at either end, O(n) bulk build
//! - **`PriorityQueue`**: associates an arbitrary payload with each
//!   priority, ordered by priority alone, with the same bounds
//! - **`SimpleBinaryHeap`**: a plain single-ended binary heap kept as a
//!   benchmark baseline
//!
//! # Example
//!
//! ```rust
//! use minmax_heap::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new();
//! queue.push(4, "fix tests");
//! queue.push(1, "water plants");
//! queue.push(7, "pager duty");
//!
//! assert_eq!(queue.pop_max(), Some((7, "pager duty")));
//! assert_eq!(queue.pop_min(), Some((1, "water plants")));
//! ```

pub mod minmax;
pub mod priority_queue;
pub mod simple_binary;
pub mod traits;

// Re-export the main types and traits for convenience
pub use minmax::MinMaxHeap;
pub use priority_queue::PriorityQueue;
pub use traits::{DoubleEndedHeap, Heap};

/// Creates a [`MinMaxHeap`] from a list of elements, heapified in one pass.
///
/// ```rust
/// use minmax_heap::minmax_heap;
///
/// let mut heap = minmax_heap![3, 1, 4, 1, 5];
/// assert_eq!(heap.pop_min(), Some(1));
/// assert_eq!(heap.pop_max(), Some(5));
/// ```
#[macro_export]
macro_rules! minmax_heap {
    () => {
        $crate::MinMaxHeap::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::MinMaxHeap::from(vec![$($element),+])
    };
}

/// Creates a [`PriorityQueue`] from a list of `(priority, element)` pairs.
///
/// ```rust
/// use minmax_heap::priority_queue;
///
/// let mut queue = priority_queue![(2, "b"), (1, "a"), (3, "c")];
/// assert_eq!(queue.pop_max(), Some((3, "c")));
/// assert_eq!(queue.pop_min(), Some((1, "a")));
/// ```
#[macro_export]
macro_rules! priority_queue {
    () => {
        $crate::PriorityQueue::new()
    };
    ($(($priority:expr, $element:expr)),+ $(,)?) => {
        [$(($priority, $element)),+]
            .into_iter()
            .collect::<$crate::PriorityQueue<_, _>>()
    };
}
