//! Simple binary heap baseline
//!
//! A straightforward single-ended binary min-heap. It exists as a
//! comparison baseline for the benchmarks and as a second implementor of
//! the base [`Heap`] trait; it cannot serve as a double-ended queue
//! because finding its maximum takes O(n).
//!
//! # Time Complexity
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | `push`     | O(log n)   |
//! | `pop_min`  | O(log n)   |
//! | `peek_min` | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use minmax_heap::Heap;
//! use minmax_heap::simple_binary::SimpleBinaryHeap;
//!
//! let mut heap = SimpleBinaryHeap::new();
//! heap.push(3, "three");
//! heap.push(1, "one");
//!
//! assert_eq!(heap.pop_min(), Some((1, "one")));
//! assert_eq!(heap.pop_min(), Some((3, "three")));
//! assert_eq!(heap.pop_min(), None);
//! ```

use crate::traits::Heap;

/// A simple binary min-heap over (priority, item) pairs
#[derive(Clone, Debug)]
pub struct SimpleBinaryHeap<T, P: Ord> {
    data: Vec<(P, T)>,
}

impl<T, P: Ord> Heap<T, P> for SimpleBinaryHeap<T, P> {
    fn new() -> Self {
        Self { data: Vec::new() }
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, priority: P, item: T) {
        self.data.push((priority, item));
        self.sift_up(self.data.len() - 1);
    }

    fn peek_min(&self) -> Option<(&P, &T)> {
        self.data.first().map(|(p, t)| (p, t))
    }

    fn pop_min(&mut self) -> Option<(P, T)> {
        if self.data.is_empty() {
            return None;
        }

        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let result = self.data.pop();

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        result
    }
}

impl<T, P: Ord> SimpleBinaryHeap<T, P> {
    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[index].0 < self.data[parent].0 {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.data[left].0 < self.data[smallest].0 {
                smallest = left;
            }
            if right < len && self.data[right].0 < self.data[smallest].0 {
                smallest = right;
            }

            if smallest != index {
                self.data.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
    }
}

impl<T, P: Ord> Default for SimpleBinaryHeap<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let mut heap = SimpleBinaryHeap::new();

        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);

        heap.push(3, "three");
        heap.push(1, "one");
        heap.push(2, "two");

        assert!(!heap.is_empty());
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.peek_min(), Some((&1, &"one")));

        assert_eq!(heap.pop_min(), Some((1, "one")));
        assert_eq!(heap.pop_min(), Some((2, "two")));
        assert_eq!(heap.pop_min(), Some((3, "three")));
        assert_eq!(heap.pop_min(), None);
    }

    #[test]
    fn test_duplicate_priorities() {
        let mut heap = SimpleBinaryHeap::new();

        heap.push(1, "a");
        heap.push(1, "b");
        heap.push(1, "c");

        assert_eq!(heap.len(), 3);

        for _ in 0..3 {
            let (priority, _) = heap.pop_min().unwrap();
            assert_eq!(priority, 1);
        }
        assert!(heap.is_empty());
    }

    #[test]
    fn test_descending_insertion() {
        let mut heap = SimpleBinaryHeap::new();

        for i in (0..100).rev() {
            heap.push(i, i);
        }

        for i in 0..100 {
            assert_eq!(heap.pop_min(), Some((i, i)));
        }
    }
}
