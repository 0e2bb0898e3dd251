//! Min-max heap implementation
//!
//! An array-backed implicit binary tree in which the levels alternate
//! between "min levels" (even depth, every element is <= all of its
//! descendants) and "max levels" (odd depth, every element is >= all of
//! its descendants). The alternation puts the global minimum at the root
//! and the global maximum in one of the root's children, so both ends of
//! the ordering are reachable in constant time and removable in
//! logarithmic time.
//!
//! This is the structure described by Atkinson, Sack, Santoro and Strothotte
//! in "Min-Max Heaps and Generalized Priority Queues" (CACM 1986).
//!
//! # Time Complexity
//!
//! | Operation          | Complexity |
//! |--------------------|------------|
//! | `push`             | O(log n)   |
//! | `peek_min`         | O(1)       |
//! | `peek_max`         | O(1)       |
//! | `pop_min`          | O(log n)   |
//! | `pop_max`          | O(log n)   |
//! | `From<Vec<T>>`     | O(n)       |
//! | `extend` (k items) | O(min(k log n, n + k)) |
//!
//! # Example
//!
//! ```rust
//! use minmax_heap::MinMaxHeap;
//!
//! let mut heap = MinMaxHeap::new();
//! heap.push(3);
//! heap.push(1);
//! heap.push(7);
//!
//! assert_eq!(heap.peek_min(), Some(&1));
//! assert_eq!(heap.peek_max(), Some(&7));
//! assert_eq!(heap.pop_max(), Some(7));
//! assert_eq!(heap.pop_min(), Some(1));
//! assert_eq!(heap.pop_min(), Some(3));
//! assert_eq!(heap.pop_min(), None);
//! ```

use std::cmp;

#[inline]
fn parent(index: usize) -> usize {
    (index - 1) / 2
}

#[inline]
fn grandparent(index: usize) -> usize {
    (index - 3) / 4
}

#[inline]
fn first_child(index: usize) -> usize {
    2 * index + 1
}

#[inline]
fn first_grandchild(index: usize) -> usize {
    4 * index + 3
}

/// Level of `index` is floor(log2(index + 1)); even levels are min levels.
/// The level and `leading_zeros(index + 1)` have opposite parity because
/// `usize::BITS - 1` is odd, so the level is even exactly when the zero
/// count is odd.
#[inline]
fn on_min_level(index: usize) -> bool {
    (index + 1).leading_zeros() & 1 == 1
}

/// A double-ended binary heap over `Ord` keys
///
/// `MinMaxHeap` stores its elements in a single dense `Vec`, with the
/// implicit-tree addressing of an ordinary binary heap (children of `i` at
/// `2i + 1` and `2i + 2`). Unlike an ordinary heap, both the minimum and
/// the maximum can be inspected in O(1) and removed in O(log n).
///
/// Elements that compare equal are fine, but their relative order of
/// extraction is unspecified.
///
/// The `Ord` implementation of `T` must be a total order consistent with
/// `Eq`. A misbehaving `Ord` may leave the heap returning elements in an
/// arbitrary order, but never causes memory unsafety.
#[derive(Clone, Debug)]
pub struct MinMaxHeap<T: Ord> {
    data: Vec<T>,
}

impl<T: Ord> MinMaxHeap<T> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates a new empty heap with at least the given capacity preallocated
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves capacity for at least `additional` more elements
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Removes all elements
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Inserts an element into the heap
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Returns the minimum element without removing it, or `None` if empty
    ///
    /// The minimum always sits at the root.
    pub fn peek_min(&self) -> Option<&T> {
        self.data.first()
    }

    /// Returns the maximum element without removing it, or `None` if empty
    ///
    /// The maximum sits in the max level directly below the root (or at
    /// the root itself when the heap holds a single element).
    pub fn peek_max(&self) -> Option<&T> {
        match self.data.len() {
            0 => None,
            1 => Some(&self.data[0]),
            2 => Some(&self.data[1]),
            _ => Some(cmp::max(&self.data[1], &self.data[2])),
        }
    }

    /// Removes and returns the minimum element, or `None` if empty
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn pop_min(&mut self) -> Option<T> {
        self.remove_root(0)
    }

    /// Removes and returns the maximum element, or `None` if empty
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn pop_max(&mut self) -> Option<T> {
        self.max_index().and_then(|index| self.remove_root(index))
    }

    /// Consumes the heap and returns the backing vector in arbitrary order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap and returns all elements in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(item) = self.pop_min() {
            sorted.push(item);
        }
        sorted
    }

    /// Returns an iterator over the elements in arbitrary order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Index of the maximum element, if any
    fn max_index(&self) -> Option<usize> {
        match self.data.len() {
            0 => None,
            1 => Some(0),
            2 => Some(1),
            _ => Some(if self.data[1] > self.data[2] { 1 } else { 2 }),
        }
    }

    /// Removes the element at `index`, which must be 0, 1, or 2 (the slots
    /// the minimum and maximum can occupy). The last element takes its
    /// place and is sifted down; no upward pass is needed because every
    /// ancestor of those slots already bounds the whole heap.
    fn remove_root(&mut self, index: usize) -> Option<T> {
        if index >= self.data.len() {
            return None;
        }
        let removed = self.data.swap_remove(index);
        if index < self.data.len() {
            self.sift_down(index);
        }
        Some(removed)
    }

    /// Restores the invariant after appending at `index`
    ///
    /// One comparison against the parent decides which role the new
    /// element plays; after an optional swap across that edge, the rest of
    /// the ascent runs along grandparents only, two levels at a time.
    fn sift_up(&mut self, index: usize) {
        if index == 0 {
            return;
        }
        let parent = parent(index);
        if on_min_level(index) {
            if self.data[index] > self.data[parent] {
                self.data.swap(index, parent);
                self.sift_up_max(parent);
            } else {
                self.sift_up_min(index);
            }
        } else if self.data[index] < self.data[parent] {
            self.data.swap(index, parent);
            self.sift_up_min(parent);
        } else {
            self.sift_up_max(index);
        }
    }

    fn sift_up_min(&mut self, mut index: usize) {
        // grandparent exists only for index >= 3
        while index > 2 {
            let ancestor = grandparent(index);
            if self.data[index] < self.data[ancestor] {
                self.data.swap(index, ancestor);
                index = ancestor;
            } else {
                break;
            }
        }
    }

    fn sift_up_max(&mut self, mut index: usize) {
        while index > 2 {
            let ancestor = grandparent(index);
            if self.data[index] > self.data[ancestor] {
                self.data.swap(index, ancestor);
                index = ancestor;
            } else {
                break;
            }
        }
    }

    /// Restores the invariant below `index` after its element was replaced
    fn sift_down(&mut self, index: usize) {
        if on_min_level(index) {
            self.sift_down_min(index);
        } else {
            self.sift_down_max(index);
        }
    }

    /// Sift-down on a min level: descend toward the smallest child or
    /// grandchild. A grandchild landing requires re-checking the skipped
    /// max-level parent and may continue two levels further; a direct
    /// child is necessarily a leaf of the scanned region, so one swap
    /// settles it.
    fn sift_down_min(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let child = first_child(index);
            if child >= len {
                break;
            }
            let grandchild = first_grandchild(index);
            let mut smallest = child;
            for candidate in (child + 1..(child + 2).min(len))
                .chain(grandchild..(grandchild + 4).min(len))
            {
                if self.data[candidate] < self.data[smallest] {
                    smallest = candidate;
                }
            }
            if smallest >= grandchild {
                if self.data[smallest] < self.data[index] {
                    self.data.swap(smallest, index);
                    let between = parent(smallest);
                    if self.data[smallest] > self.data[between] {
                        self.data.swap(smallest, between);
                    }
                    index = smallest;
                } else {
                    break;
                }
            } else {
                if self.data[smallest] < self.data[index] {
                    self.data.swap(smallest, index);
                }
                break;
            }
        }
    }

    fn sift_down_max(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let child = first_child(index);
            if child >= len {
                break;
            }
            let grandchild = first_grandchild(index);
            let mut largest = child;
            for candidate in (child + 1..(child + 2).min(len))
                .chain(grandchild..(grandchild + 4).min(len))
            {
                if self.data[candidate] > self.data[largest] {
                    largest = candidate;
                }
            }
            if largest >= grandchild {
                if self.data[largest] > self.data[index] {
                    self.data.swap(largest, index);
                    let between = parent(largest);
                    if self.data[largest] < self.data[between] {
                        self.data.swap(largest, between);
                    }
                    index = largest;
                } else {
                    break;
                }
            } else {
                if self.data[largest] > self.data[index] {
                    self.data.swap(largest, index);
                }
                break;
            }
        }
    }

    /// Bottom-up heapify over the whole backing vector, O(n)
    fn rebuild(&mut self) {
        // last non-leaf index is len / 2 - 1
        for index in (0..self.data.len() / 2).rev() {
            self.sift_down(index);
        }
    }
}

impl<T: Ord> Default for MinMaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<Vec<T>> for MinMaxHeap<T> {
    /// Builds a heap from an arbitrary vector in O(n) by a single
    /// bottom-up heapify pass
    fn from(data: Vec<T>) -> Self {
        let mut heap = Self { data };
        heap.rebuild();
        heap
    }
}

impl<T: Ord> FromIterator<T> for MinMaxHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: Ord> Extend<T> for MinMaxHeap<T> {
    /// Bulk insert. Batches at least as large as the existing heap are
    /// absorbed by rebuilding from scratch (O(n + k)); smaller batches
    /// sift each new element up individually (O(k log n)). The crossover
    /// point is a tunable, not part of the contract.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let old_len = self.data.len();
        self.data.extend(iter);
        if self.data.len() - old_len >= old_len {
            self.rebuild();
        } else {
            for index in old_len..self.data.len() {
                self.sift_up(index);
            }
        }
    }
}

impl<T: Ord> IntoIterator for MinMaxHeap<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Iterates over the elements in arbitrary order
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T: Ord> IntoIterator for &'a MinMaxHeap<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
