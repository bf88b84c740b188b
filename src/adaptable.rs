//! Adaptable priority queue on an array-based binary heap
//!
//! [`HeapAdaptablePriorityQueue`] runs the same heap engine as
//! [`BinaryHeap`](crate::binary_heap::BinaryHeap), but every entry knows its
//! current index in the heap array.  The heap array holds [`EntryHandle`]s; the
//! entries themselves live in a generational arena.  Whenever the engine
//! moves a handle to a new slot, the entry's locator is rewritten, so for
//! every live entry `heap[entry.locator] == handle`.
//!
//! That invariant makes `remove`, `replace_key` and `replace_value` possible
//! without searching, and it is also what validates handles: a handle is
//! accepted only if the arena still knows it *and* the slot it claims holds it.
//!
//! # Time Complexity
//!
//! | Operation       | Complexity |
//! |-----------------|------------|
//! | `insert`        | O(log n)   |
//! | `remove_min`    | O(log n)   |
//! | `min`           | O(1)       |
//! | `remove`        | O(log n)   |
//! | `replace_key`   | O(log n)   |
//! | `replace_value` | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use adaptable_heap::{AdaptablePriorityQueue, PriorityQueue, QueueError};
//! use adaptable_heap::adaptable::HeapAdaptablePriorityQueue;
//!
//! let mut queue = HeapAdaptablePriorityQueue::new();
//! let a = queue.insert_with_handle(10, 'a').unwrap();
//! let b = queue.insert_with_handle(20, 'b').unwrap();
//!
//! queue.replace_key(&b, 5).unwrap();
//! assert_eq!(queue.min_handle(), Some(b));
//!
//! assert_eq!(queue.remove(&b), Ok((5, 'b')));
//! assert_eq!(queue.remove(&b), Err(QueueError::InvalidEntry));
//! assert_eq!(queue.remove_min(), Some((10, 'a')));
//! assert_eq!(queue.get(&a).err(), Some(QueueError::InvalidEntry));
//! ```

use crate::compare::{Comparator, NaturalOrder};
use crate::entry::Entry;
use crate::heap::{HeapCore, Placement};
use crate::storage::{EntryArena, EntryHandle};
use crate::traits::{AdaptablePriorityQueue, PriorityQueue, QueueError};
use log::warn;

/// Orders handles by their entries' keys and writes back every new position
struct Located<'a, K, V, C> {
    arena: &'a mut EntryArena<K, V>,
    comparator: &'a C,
}

impl<K, V, C: Comparator<K>> Placement<EntryHandle> for Located<'_, K, V, C> {
    #[inline]
    fn less(&self, a: &EntryHandle, b: &EntryHandle) -> bool {
        self.comparator
            .less(self.arena.entry(a).key(), self.arena.entry(b).key())
    }

    #[inline]
    fn relocated(&mut self, item: &EntryHandle, index: usize) {
        self.arena.set_locator(item, index);
    }
}

/// Read-only ordering over handles, for invariant checks
struct Ordered<'a, K, V, C> {
    arena: &'a EntryArena<K, V>,
    comparator: &'a C,
}

impl<K, V, C: Comparator<K>> Placement<EntryHandle> for Ordered<'_, K, V, C> {
    fn less(&self, a: &EntryHandle, b: &EntryHandle) -> bool {
        self.comparator
            .less(self.arena.entry(a).key(), self.arena.entry(b).key())
    }
}

/// A binary min-heap whose entries can be removed or re-keyed through handles
pub struct HeapAdaptablePriorityQueue<K, V, C = NaturalOrder> {
    heap: HeapCore<EntryHandle>,
    arena: EntryArena<K, V>,
    comparator: C,
}

impl<K, V> HeapAdaptablePriorityQueue<K, V, NaturalOrder> {
    /// Creates an empty queue ordered by the keys' `PartialOrd`
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<K, V, C> HeapAdaptablePriorityQueue<K, V, C> {
    /// Creates an empty queue ordered by `comparator`
    pub fn with_comparator(comparator: C) -> Self {
        HeapAdaptablePriorityQueue {
            heap: HeapCore::new(),
            arena: EntryArena::new(),
            comparator,
        }
    }

    /// Creates an empty queue with room for `capacity` entries
    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        HeapAdaptablePriorityQueue {
            heap: HeapCore::with_capacity(capacity),
            arena: EntryArena::with_capacity(capacity),
            comparator,
        }
    }

    /// Returns the comparator ordering this queue
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Iterates over the handles and entries in array order (not sorted)
    pub fn iter(&self) -> impl Iterator<Item = (EntryHandle, &Entry<K, V>)> + '_ {
        self.heap
            .iter()
            .map(move |handle| (*handle, self.arena.entry(handle)))
    }

    /// Returns true if the handle refers to a live entry of this queue
    pub fn contains(&self, handle: &EntryHandle) -> bool {
        self.locate(handle).is_some()
    }

    /// Removes every entry; all outstanding handles become invalid
    pub fn clear(&mut self) {
        self.heap.clear();
        self.arena.clear();
    }

    /// Resolves a handle to its current heap index
    ///
    /// The arena must hold the handle and the slot its locator names must
    /// hold that same handle.
    fn locate(&self, handle: &EntryHandle) -> Option<usize> {
        self.arena
            .get(handle)
            .and_then(Entry::locator)
            .filter(|&j| self.heap.get(j) == Some(handle))
    }

    fn validate(&self, handle: &EntryHandle) -> Result<usize, QueueError> {
        match self.locate(handle) {
            Some(j) => Ok(j),
            None => {
                warn!("rejected stale or foreign queue handle {:?}", handle);
                Err(QueueError::InvalidEntry)
            }
        }
    }

    /// Finds the first handle whose locator disagrees with its slot
    fn first_misplaced(&self) -> Option<usize> {
        self.heap.iter().enumerate().find_map(|(index, handle)| {
            match self.arena.get(handle).and_then(Entry::locator) {
                Some(j) if j == index => None,
                _ => Some(index),
            }
        })
    }
}

impl<K, V, C: Comparator<K>> HeapAdaptablePriorityQueue<K, V, C> {
    /// Builds a queue from paired keys and values in linear time
    ///
    /// Keys and values are paired element by element; extra elements of the
    /// longer input are dropped.  The handles are returned in input order.
    ///
    /// # Errors
    /// Returns [`QueueError::InvalidKey`] if any key is not comparable to itself.
    pub fn from_pairs<IK, IV>(
        keys: IK,
        values: IV,
        comparator: C,
    ) -> Result<(Self, Vec<EntryHandle>), QueueError>
    where
        IK: IntoIterator<Item = K>,
        IV: IntoIterator<Item = V>,
    {
        let pairs: Vec<(K, V)> = keys.into_iter().zip(values).collect();
        for (key, _) in &pairs {
            comparator.check_key(key)?;
        }

        let mut arena = EntryArena::with_capacity(pairs.len());
        let handles: Vec<EntryHandle> = pairs
            .into_iter()
            .enumerate()
            .map(|(index, (key, value))| arena.insert(Entry::located(key, value, index)))
            .collect();

        let mut heap = HeapCore::from_vec(handles.clone());
        heap.heapify(&mut Located {
            arena: &mut arena,
            comparator: &comparator,
        });

        let queue = HeapAdaptablePriorityQueue {
            heap,
            arena,
            comparator,
        };
        Ok((queue, handles))
    }

    fn placement(&mut self) -> (&mut HeapCore<EntryHandle>, Located<'_, K, V, C>) {
        (
            &mut self.heap,
            Located {
                arena: &mut self.arena,
                comparator: &self.comparator,
            },
        )
    }

    /// Drops a handle's entry from the arena once it has left the heap array
    fn take(&mut self, handle: EntryHandle) -> Option<(K, V)> {
        self.arena.remove(&handle).map(Entry::into_pair)
    }
}

impl<K, V, C: Comparator<K>> PriorityQueue<K, V> for HeapAdaptablePriorityQueue<K, V, C> {
    fn len(&self) -> usize {
        self.heap.len()
    }

    fn insert(&mut self, key: K, value: V) -> Result<(), QueueError> {
        self.insert_with_handle(key, value).map(|_| ())
    }

    fn min(&self) -> Option<&Entry<K, V>> {
        self.heap.first().map(|handle| self.arena.entry(handle))
    }

    fn remove_min(&mut self) -> Option<(K, V)> {
        let (heap, mut place) = self.placement();
        let handle = heap.pop_min(&mut place)?;
        self.take(handle)
    }

    fn check_invariants(&self) -> Result<(), QueueError> {
        if let Some(index) = self.first_misplaced() {
            return Err(QueueError::Corrupted { index });
        }
        if self.arena.len() != self.heap.len() {
            return Err(QueueError::Corrupted {
                index: self.heap.len(),
            });
        }
        let view = Ordered {
            arena: &self.arena,
            comparator: &self.comparator,
        };
        let violation = self.heap.first_violation(&view);
        match violation {
            Some(index) => Err(QueueError::Corrupted { index }),
            None => Ok(()),
        }
    }
}

impl<K, V, C: Comparator<K>> AdaptablePriorityQueue<K, V> for HeapAdaptablePriorityQueue<K, V, C> {
    type Handle = EntryHandle;

    fn insert_with_handle(&mut self, key: K, value: V) -> Result<EntryHandle, QueueError> {
        self.comparator.check_key(&key)?;
        let handle = self
            .arena
            .insert(Entry::located(key, value, self.heap.len()));
        let (heap, mut place) = self.placement();
        heap.push(handle, &mut place);
        Ok(handle)
    }

    fn min_handle(&self) -> Option<EntryHandle> {
        self.heap.first().copied()
    }

    fn get(&self, handle: &EntryHandle) -> Result<&Entry<K, V>, QueueError> {
        self.validate(handle)?;
        Ok(self.arena.entry(handle))
    }

    fn remove(&mut self, handle: &EntryHandle) -> Result<(K, V), QueueError> {
        let j = self.validate(handle)?;
        let (heap, mut place) = self.placement();
        let removed = heap.remove_at(j, &mut place);
        debug_assert_eq!(removed.as_ref(), Some(handle));
        self.take(*handle).ok_or(QueueError::InvalidEntry)
    }

    fn replace_key(&mut self, handle: &EntryHandle, key: K) -> Result<K, QueueError> {
        let j = self.validate(handle)?;
        self.comparator.check_key(&key)?;
        let old = self
            .arena
            .get_mut(handle)
            .map(|entry| entry.set_key(key))
            .ok_or(QueueError::InvalidEntry)?;
        let (heap, mut place) = self.placement();
        heap.bubble(j, &mut place);
        Ok(old)
    }

    fn replace_value(&mut self, handle: &EntryHandle, value: V) -> Result<V, QueueError> {
        self.validate(handle)?;
        self.arena
            .get_mut(handle)
            .map(|entry| entry.set_value(value))
            .ok_or(QueueError::InvalidEntry)
    }
}

impl<K, V, C: Default> Default for HeapAdaptablePriorityQueue<K, V, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K: std::fmt::Debug, V: std::fmt::Debug, C> std::fmt::Debug for HeapAdaptablePriorityQueue<K, V, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.heap.iter().map(|handle| self.arena.entry(handle)))
            .finish()
    }
}
