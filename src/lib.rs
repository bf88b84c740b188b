//! Adaptable Priority Queues and Shortest Paths for Rust
//!
//! This crate provides an array-based binary heap, a location-aware
//! ("adaptable") priority queue whose entries can be re-keyed or removed in
//! place through handles, and a Dijkstra single-source shortest-path engine
//! built on top of it.
//!
//! # Features
//!
//! - **Binary Heap**: O(log n) insert and remove-min; O(n) bottom-up construction
//! - **Adaptable Priority Queue**: O(log n) `remove`, `replace_key`; O(1) `replace_value`;
//!   generational handles reject stale and foreign entries
//! - **Pluggable Ordering**: any [`Comparator`](compare::Comparator); keys that do
//!   not compare equal to themselves are rejected
//! - **Dijkstra**: O((V + E) log V) over any [`Graph`](graph::Graph), with
//!   results stored in typed [`Decorations`](decorations::Decorations)
//!
//! # Example
//!
//! ```rust
//! use adaptable_heap::adaptable::HeapAdaptablePriorityQueue;
//! use adaptable_heap::{AdaptablePriorityQueue, PriorityQueue};
//!
//! let mut queue = HeapAdaptablePriorityQueue::new();
//! let handle1 = queue.insert_with_handle(5, "item1").unwrap();
//! queue.insert_with_handle(3, "item2").unwrap();
//! queue.replace_key(&handle1, 1).unwrap();
//! assert_eq!(queue.min().map(|e| (*e.key(), *e.value())), Some((1, "item1")));
//! ```

pub mod adaptable;
pub mod binary_heap;
pub mod compare;
pub mod decorations;
pub mod dijkstra;
pub mod entry;
pub mod graph;
mod heap;
pub mod storage;
pub mod traits;

#[cfg(test)]
mod testing;

// Re-export the main types for convenience
pub use adaptable::HeapAdaptablePriorityQueue;
pub use binary_heap::BinaryHeap;
pub use entry::Entry;
pub use storage::EntryHandle;
pub use traits::{AdaptablePriorityQueue, PriorityQueue, QueueError};
