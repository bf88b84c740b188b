//! Binary heap priority queue
//!
//! A binary min-heap of key/value [`Entry`]s that only implements the base
//! [`PriorityQueue`] trait.  Entries do not track their position, so an entry
//! cannot be changed or removed once inserted except through `remove_min`.
//! For algorithms that relax keys in place (like Dijkstra's), use
//! [`HeapAdaptablePriorityQueue`](crate::adaptable::HeapAdaptablePriorityQueue).
//!
//! # Time Complexity
//!
//! | Operation    | Complexity |
//! |--------------|------------|
//! | `insert`     | O(log n)   |
//! | `remove_min` | O(log n)   |
//! | `min`        | O(1)       |
//! | `from_pairs` | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use adaptable_heap::PriorityQueue;
//! use adaptable_heap::binary_heap::BinaryHeap;
//!
//! let mut heap = BinaryHeap::new();
//! heap.insert(3, "three").unwrap();
//! heap.insert(1, "one").unwrap();
//! heap.insert(2, "two").unwrap();
//!
//! assert_eq!(heap.remove_min(), Some((1, "one")));
//! assert_eq!(heap.remove_min(), Some((2, "two")));
//! assert_eq!(heap.remove_min(), Some((3, "three")));
//! assert_eq!(heap.remove_min(), None);
//! ```

use crate::compare::{Comparator, NaturalOrder};
use crate::entry::Entry;
use crate::heap::{HeapCore, Placement};
use crate::traits::{PriorityQueue, QueueError};

/// Orders plain entries by key; positions are not tracked
struct ByKey<'a, C>(&'a C);

impl<K, V, C: Comparator<K>> Placement<Entry<K, V>> for ByKey<'_, C> {
    #[inline]
    fn less(&self, a: &Entry<K, V>, b: &Entry<K, V>) -> bool {
        self.0.less(a.key(), b.key())
    }
}

/// An array-backed binary min-heap
///
/// The entry with the minimal key under the comparator `C` is always at the
/// root.  Use [`ReverseOrder`](crate::compare::ReverseOrder) for max-heap
/// behavior.
#[derive(Debug, Clone)]
pub struct BinaryHeap<K, V, C = NaturalOrder> {
    heap: HeapCore<Entry<K, V>>,
    comparator: C,
}

impl<K, V> BinaryHeap<K, V, NaturalOrder> {
    /// Creates an empty heap ordered by the keys' `PartialOrd`
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<K, V, C> BinaryHeap<K, V, C> {
    /// Creates an empty heap ordered by `comparator`
    pub fn with_comparator(comparator: C) -> Self {
        BinaryHeap {
            heap: HeapCore::new(),
            comparator,
        }
    }

    /// Creates an empty heap with room for `capacity` entries
    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        BinaryHeap {
            heap: HeapCore::with_capacity(capacity),
            comparator,
        }
    }

    /// Returns the comparator ordering this heap
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Iterates over the entries in array order (not sorted)
    pub fn iter(&self) -> impl Iterator<Item = &Entry<K, V>> + '_ {
        self.heap.iter()
    }

    /// Removes every entry
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<K, V, C: Comparator<K>> BinaryHeap<K, V, C> {
    /// Builds a heap from paired keys and values in linear time
    ///
    /// Keys and values are paired element by element; extra elements of the
    /// longer input are dropped.
    ///
    /// # Errors
    /// Returns [`QueueError::InvalidKey`] if any key is not comparable to itself.
    pub fn from_pairs<IK, IV>(keys: IK, values: IV, comparator: C) -> Result<Self, QueueError>
    where
        IK: IntoIterator<Item = K>,
        IV: IntoIterator<Item = V>,
    {
        let mut entries = Vec::new();
        for (key, value) in keys.into_iter().zip(values) {
            comparator.check_key(&key)?;
            entries.push(Entry::new(key, value));
        }
        let mut heap = HeapCore::from_vec(entries);
        heap.heapify(&mut ByKey(&comparator));
        Ok(BinaryHeap { heap, comparator })
    }

    /// Removes every entry in ascending key order
    pub fn into_sorted_vec(mut self) -> Vec<(K, V)> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(pair) = self.remove_min() {
            sorted.push(pair);
        }
        sorted
    }
}

impl<K, V, C: Comparator<K>> PriorityQueue<K, V> for BinaryHeap<K, V, C> {
    fn len(&self) -> usize {
        self.heap.len()
    }

    fn insert(&mut self, key: K, value: V) -> Result<(), QueueError> {
        self.comparator.check_key(&key)?;
        self.heap
            .push(Entry::new(key, value), &mut ByKey(&self.comparator));
        Ok(())
    }

    fn min(&self) -> Option<&Entry<K, V>> {
        self.heap.first()
    }

    fn remove_min(&mut self) -> Option<(K, V)> {
        self.heap
            .pop_min(&mut ByKey(&self.comparator))
            .map(Entry::into_pair)
    }

    fn check_invariants(&self) -> Result<(), QueueError> {
        match self.heap.first_violation(&ByKey(&self.comparator)) {
            Some(index) => Err(QueueError::Corrupted { index }),
            None => Ok(()),
        }
    }
}

impl<K, V, C: Default> Default for BinaryHeap<K, V, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}
