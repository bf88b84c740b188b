//! Common traits for the priority queues in this crate
//!
//! This module provides a two-tier trait hierarchy:
//!
//! - [`PriorityQueue`]: Base trait for array-backed min-heaps of key/value entries
//! - [`AdaptablePriorityQueue`]: Extended trait adding handle-based `remove`,
//!   `replace_key` and `replace_value`
//!
//! The base [`PriorityQueue`] trait is what a plain heap offers, while
//! [`AdaptablePriorityQueue`] adds the location-aware operations needed by
//! algorithms like Dijkstra's shortest path, which relax keys of entries that
//! are already queued.

use crate::entry::Entry;
use std::fmt;
use thiserror::Error;

/// Error type for queue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// The key cannot be compared to itself under the queue's ordering
    #[error("key cannot be compared to itself under the queue's ordering")]
    InvalidKey,
    /// The handle does not occupy the slot it claims (removed, or from another queue)
    #[error("handle does not refer to a live entry of this queue")]
    InvalidEntry,
    /// A structural invariant does not hold; reported by `check_invariants`
    #[error("heap invariant violated at index {index}")]
    Corrupted {
        /// First index at which the violation was detected
        index: usize,
    },
}

/// Base trait for priority queue data structures
///
/// Entries are (key, value) pairs; the entry with the minimal key under the
/// queue's comparator is always at the front.
///
/// # Example
///
/// ```rust
/// use adaptable_heap::PriorityQueue;
/// use adaptable_heap::binary_heap::BinaryHeap;
///
/// let mut heap = BinaryHeap::new();
/// heap.insert(3, "three").unwrap();
/// heap.insert(1, "one").unwrap();
/// heap.insert(2, "two").unwrap();
///
/// assert_eq!(heap.min().map(|e| *e.key()), Some(1));
/// assert_eq!(heap.remove_min(), Some((1, "one")));
/// ```
pub trait PriorityQueue<K, V> {
    /// Returns the number of entries in the queue
    fn len(&self) -> usize;

    /// Returns true if the queue holds no entries
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts a key/value pair
    ///
    /// # Errors
    /// Returns [`QueueError::InvalidKey`] if the key cannot be compared to itself.
    ///
    /// # Time Complexity
    /// O(log n)
    fn insert(&mut self, key: K, value: V) -> Result<(), QueueError>;

    /// Returns the entry with the minimal key without removing it
    ///
    /// Returns `None` on an empty queue.
    ///
    /// # Time Complexity
    /// O(1)
    fn min(&self) -> Option<&Entry<K, V>>;

    /// Removes and returns the minimal key and its value
    ///
    /// Returns `None` on an empty queue.
    ///
    /// # Time Complexity
    /// O(log n)
    fn remove_min(&mut self) -> Option<(K, V)>;

    /// Verifies the heap-order property over the whole array
    ///
    /// # Time Complexity
    /// O(n)
    fn check_invariants(&self) -> Result<(), QueueError>;
}

/// Extended queue trait with location-aware entries
///
/// Every entry inserted through [`insert_with_handle`](Self::insert_with_handle)
/// can later be changed or removed in O(log n) without a search.  A handle is
/// valid exactly while its entry is in the queue; after the entry leaves
/// (through `remove` or `remove_min`) every operation on the handle fails with
/// [`QueueError::InvalidEntry`].
///
/// # Example
///
/// ```rust
/// use adaptable_heap::{AdaptablePriorityQueue, PriorityQueue};
/// use adaptable_heap::adaptable::HeapAdaptablePriorityQueue;
///
/// let mut queue = HeapAdaptablePriorityQueue::new();
/// queue.insert_with_handle(10, "a").unwrap();
/// let handle = queue.insert_with_handle(20, "b").unwrap();
/// queue.replace_key(&handle, 5).unwrap();
/// assert_eq!(queue.min().map(|e| *e.value()), Some("b"));
/// ```
pub trait AdaptablePriorityQueue<K, V>: PriorityQueue<K, V> {
    /// The handle type returned for each inserted entry
    type Handle: Copy + Eq + fmt::Debug;

    /// Inserts a key/value pair, returning a handle to the new entry
    ///
    /// # Errors
    /// Returns [`QueueError::InvalidKey`] if the key cannot be compared to itself.
    fn insert_with_handle(&mut self, key: K, value: V) -> Result<Self::Handle, QueueError>;

    /// Returns the handle of the entry with the minimal key, without removing it
    fn min_handle(&self) -> Option<Self::Handle>;

    /// Returns the live entry behind a handle
    fn get(&self, handle: &Self::Handle) -> Result<&Entry<K, V>, QueueError>;

    /// Removes the entry behind a handle, returning its key and value
    ///
    /// # Time Complexity
    /// O(log n)
    fn remove(&mut self, handle: &Self::Handle) -> Result<(K, V), QueueError>;

    /// Replaces the key of an entry, returning the previous key
    ///
    /// The new key may be smaller or larger than the old one.
    ///
    /// # Errors
    /// [`QueueError::InvalidEntry`] for a stale handle, [`QueueError::InvalidKey`]
    /// for an incomparable key. The queue is unchanged on error.
    ///
    /// # Time Complexity
    /// O(log n)
    fn replace_key(&mut self, handle: &Self::Handle, key: K) -> Result<K, QueueError>;

    /// Replaces the value of an entry, returning the previous value
    ///
    /// # Time Complexity
    /// O(1)
    fn replace_value(&mut self, handle: &Self::Handle, value: V) -> Result<V, QueueError>;
}
