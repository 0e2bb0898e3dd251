//! Generic tests for the Heap trait implementations
//!
//! These tests work with any implementation through the trait interface
//! and stress it with various edge cases and patterns. Single-ended tests
//! run against both `SimpleBinaryHeap` and `PriorityQueue`; double-ended
//! tests run against `PriorityQueue` only.

use minmax_heap::simple_binary::SimpleBinaryHeap;
use minmax_heap::{DoubleEndedHeap, Heap, PriorityQueue};

/// Test that an empty heap behaves correctly
fn test_empty_heap<H: Heap<String, i32>>() {
    let mut heap = H::new();
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.peek_min(), None);
    assert_eq!(heap.pop_min(), None);
}

/// Test basic insert and pop operations
fn test_basic_operations<H: Heap<&'static str, i32>>() {
    let mut heap = H::new();

    heap.push(5, "five");
    heap.push(1, "one");
    heap.push(10, "ten");
    heap.push(3, "three");

    assert!(!heap.is_empty());
    assert_eq!(heap.len(), 4);

    assert_eq!(heap.peek_min(), Some((&1, &"one")));

    assert_eq!(heap.pop_min(), Some((1, "one")));
    assert_eq!(heap.pop_min(), Some((3, "three")));
    assert_eq!(heap.pop_min(), Some((5, "five")));
    assert_eq!(heap.pop_min(), Some((10, "ten")));
    assert_eq!(heap.pop_min(), None);
    assert!(heap.is_empty());
}

/// Test that popping past empty neither panics nor changes len
fn test_pop_past_empty<H: Heap<i32, i32>>() {
    let mut heap = H::new();
    heap.push(1, 1);
    assert_eq!(heap.pop_min(), Some((1, 1)));
    for _ in 0..5 {
        assert_eq!(heap.pop_min(), None);
        assert_eq!(heap.len(), 0);
    }
}

/// Test interleaved pushes and pops
fn test_interleaved_operations<H: Heap<i32, i32>>() {
    let mut heap = H::new();

    heap.push(10, 10);
    heap.push(5, 5);
    assert_eq!(heap.pop_min(), Some((5, 5)));

    heap.push(3, 3);
    heap.push(7, 7);
    assert_eq!(heap.pop_min(), Some((3, 3)));
    assert_eq!(heap.pop_min(), Some((7, 7)));
    assert_eq!(heap.pop_min(), Some((10, 10)));
    assert!(heap.is_empty());
}

/// Test negative and extreme priorities
fn test_extreme_priorities<H: Heap<&'static str, i64>>() {
    let mut heap = H::new();

    heap.push(i64::MAX, "max");
    heap.push(0, "zero");
    heap.push(i64::MIN, "min");

    assert_eq!(heap.pop_min(), Some((i64::MIN, "min")));
    assert_eq!(heap.pop_min(), Some((0, "zero")));
    assert_eq!(heap.pop_min(), Some((i64::MAX, "max")));
}

/// Test double-ended access on an empty heap
fn test_empty_double_ended<H: DoubleEndedHeap<String, i32>>() {
    let mut heap = H::new();
    assert_eq!(heap.peek_max(), None);
    assert_eq!(heap.pop_max(), None);
    assert_eq!(heap.len(), 0);
}

/// Test min and max access against a known multiset
fn test_both_ends<H: DoubleEndedHeap<&'static str, i32>>() {
    let mut heap = H::new();

    heap.push(4, "four");
    heap.push(1, "one");
    heap.push(7, "seven");
    heap.push(2, "two");
    assert_eq!(heap.len(), 4);

    assert_eq!(heap.peek_min(), Some((&1, &"one")));
    assert_eq!(heap.peek_max(), Some((&7, &"seven")));

    assert_eq!(heap.pop_max(), Some((7, "seven")));
    assert_eq!(heap.len(), 3);
    assert_eq!(heap.pop_min(), Some((1, "one")));
    assert_eq!(heap.len(), 2);

    // remaining priorities 4 and 2, drainable from either end
    assert_eq!(heap.pop_max(), Some((4, "four")));
    assert_eq!(heap.pop_min(), Some((2, "two")));
    assert_eq!(heap.pop_max(), None);
    assert_eq!(heap.pop_min(), None);
}

/// Test that a single element is both the minimum and the maximum
fn test_single_element_both_ends<H: DoubleEndedHeap<&'static str, i32>>() {
    let mut heap = H::new();
    heap.push(42, "answer");
    assert_eq!(heap.peek_min(), Some((&42, &"answer")));
    assert_eq!(heap.peek_max(), Some((&42, &"answer")));
    assert_eq!(heap.pop_max(), Some((42, "answer")));
    assert!(heap.is_empty());
}

/// Test draining from alternating ends converges to the middle
fn test_converging_drain<H: DoubleEndedHeap<i32, i32>>() {
    let mut heap = H::new();
    for i in 0..101 {
        heap.push(i, i);
    }

    for round in 0..50 {
        assert_eq!(heap.pop_min().map(|(p, _)| p), Some(round));
        assert_eq!(heap.pop_max().map(|(p, _)| p), Some(100 - round));
    }
    assert_eq!(heap.pop_min(), Some((50, 50)));
    assert!(heap.is_empty());
}

/// Test max-side extraction order with duplicates
fn test_max_side_duplicates<H: DoubleEndedHeap<i32, i32>>() {
    let mut heap = H::new();
    for p in [5, 3, 5, 1, 5] {
        heap.push(p, p);
    }

    let mut order = Vec::new();
    while let Some((priority, _)) = heap.pop_max() {
        order.push(priority);
    }
    assert_eq!(order, vec![5, 5, 5, 3, 1]);
}

// Instantiate the single-ended tests for both implementations

#[test]
fn simple_binary_empty_heap() {
    test_empty_heap::<SimpleBinaryHeap<String, i32>>();
}

#[test]
fn simple_binary_basic_operations() {
    test_basic_operations::<SimpleBinaryHeap<&'static str, i32>>();
}

#[test]
fn simple_binary_pop_past_empty() {
    test_pop_past_empty::<SimpleBinaryHeap<i32, i32>>();
}

#[test]
fn simple_binary_interleaved_operations() {
    test_interleaved_operations::<SimpleBinaryHeap<i32, i32>>();
}

#[test]
fn simple_binary_extreme_priorities() {
    test_extreme_priorities::<SimpleBinaryHeap<&'static str, i64>>();
}

#[test]
fn priority_queue_empty_heap() {
    test_empty_heap::<PriorityQueue<String, i32>>();
}

#[test]
fn priority_queue_basic_operations() {
    test_basic_operations::<PriorityQueue<&'static str, i32>>();
}

#[test]
fn priority_queue_pop_past_empty() {
    test_pop_past_empty::<PriorityQueue<i32, i32>>();
}

#[test]
fn priority_queue_interleaved_operations() {
    test_interleaved_operations::<PriorityQueue<i32, i32>>();
}

#[test]
fn priority_queue_extreme_priorities() {
    test_extreme_priorities::<PriorityQueue<&'static str, i64>>();
}

// Double-ended tests, PriorityQueue only

#[test]
fn priority_queue_empty_double_ended() {
    test_empty_double_ended::<PriorityQueue<String, i32>>();
}

#[test]
fn priority_queue_both_ends() {
    test_both_ends::<PriorityQueue<&'static str, i32>>();
}

#[test]
fn priority_queue_single_element_both_ends() {
    test_single_element_both_ends::<PriorityQueue<&'static str, i32>>();
}

#[test]
fn priority_queue_converging_drain() {
    test_converging_drain::<PriorityQueue<i32, i32>>();
}

#[test]
fn priority_queue_max_side_duplicates() {
    test_max_side_duplicates::<PriorityQueue<i32, i32>>();
}
