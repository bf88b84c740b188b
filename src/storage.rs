//! Generational arena for location-aware entries
//!
//! Entries of an adaptable queue live in a [`SlotMap`]; the heap array only
//! stores their keys.  A slotmap key pairs a slot index with a version that
//! is bumped every time the slot is vacated, so a key taken before a removal
//! never resolves to whatever later reuses the slot.
//!
//! Every arena also draws a process-unique id, which is folded into the
//! [`EntryHandle`]s it hands out.  A handle presented to a different arena
//! is rejected even if its slot index and version happen to line up.

use crate::entry::Entry;
use slotmap::{new_key_type, SlotMap};
use std::sync::atomic::{AtomicU64, Ordering};

new_key_type! {
    /// Slot key inside a single arena
    pub(crate) struct SlotKey;
}

static NEXT_ARENA_ID: AtomicU64 = AtomicU64::new(0);

/// Opaque reference to a live entry of a
/// [`HeapAdaptablePriorityQueue`](crate::adaptable::HeapAdaptablePriorityQueue)
///
/// Handles are cheap to copy.  A handle stays valid until its entry leaves the
/// queue; afterwards every operation on it fails with
/// [`QueueError::InvalidEntry`](crate::QueueError::InvalidEntry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryHandle {
    slot: SlotKey,
    arena: u64,
}

/// Slotmap-backed storage for location-aware entries
#[derive(Debug)]
pub(crate) struct EntryArena<K, V> {
    id: u64,
    slots: SlotMap<SlotKey, Entry<K, V>>,
}

impl<K, V> EntryArena<K, V> {
    pub(crate) fn new() -> Self {
        Self::with_capacity(0)
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        EntryArena {
            id: NEXT_ARENA_ID.fetch_add(1, Ordering::Relaxed),
            slots: SlotMap::with_capacity_and_key(capacity),
        }
    }

    /// Stores an entry, returning a handle to it
    pub(crate) fn insert(&mut self, entry: Entry<K, V>) -> EntryHandle {
        EntryHandle {
            slot: self.slots.insert(entry),
            arena: self.id,
        }
    }

    pub(crate) fn get(&self, handle: &EntryHandle) -> Option<&Entry<K, V>> {
        if handle.arena != self.id {
            return None;
        }
        self.slots.get(handle.slot)
    }

    pub(crate) fn get_mut(&mut self, handle: &EntryHandle) -> Option<&mut Entry<K, V>> {
        if handle.arena != self.id {
            return None;
        }
        self.slots.get_mut(handle.slot)
    }

    pub(crate) fn remove(&mut self, handle: &EntryHandle) -> Option<Entry<K, V>> {
        if handle.arena != self.id {
            return None;
        }
        self.slots.remove(handle.slot)
    }

    /// Returns the entry behind a handle the heap array holds
    ///
    /// Every handle stored in the heap array is live in its arena.
    #[inline]
    pub(crate) fn entry(&self, handle: &EntryHandle) -> &Entry<K, V> {
        &self.slots[handle.slot]
    }

    #[inline]
    pub(crate) fn set_locator(&mut self, handle: &EntryHandle, index: usize) {
        self.slots[handle.slot].set_locator(index);
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    /// Drops every entry; all outstanding handles become stale
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arena_basic() {
        let mut arena: EntryArena<i32, &str> = EntryArena::new();

        let handle = arena.insert(Entry::located(42, "x", 0));
        assert_eq!(arena.get(&handle).map(|e| *e.key()), Some(42));
        assert_eq!(arena.len(), 1);

        arena.get_mut(&handle).unwrap().set_key(100);
        assert_eq!(*arena.entry(&handle).key(), 100);

        arena.set_locator(&handle, 7);
        assert_eq!(arena.entry(&handle).locator(), Some(7));
    }

    #[test]
    fn test_removed_handle_is_stale() {
        let mut arena: EntryArena<i32, ()> = EntryArena::new();

        let handle = arena.insert(Entry::located(1, (), 0));
        assert!(arena.remove(&handle).is_some());
        assert!(arena.get(&handle).is_none());
        assert!(arena.remove(&handle).is_none());

        // The vacated slot is reused under a new version
        let reused = arena.insert(Entry::located(2, (), 0));
        assert_ne!(reused, handle);
        assert!(arena.get(&handle).is_none());
        assert_eq!(arena.get(&reused).map(|e| *e.key()), Some(2));
    }

    #[test]
    fn test_foreign_handle_rejected() {
        let mut first: EntryArena<i32, ()> = EntryArena::new();
        let mut second: EntryArena<i32, ()> = EntryArena::with_capacity(4);

        let a = first.insert(Entry::located(1, (), 0));
        let b = second.insert(Entry::located(1, (), 0));

        assert_ne!(a, b);
        assert!(second.get(&a).is_none());
        assert!(second.get_mut(&a).is_none());
        assert!(second.remove(&a).is_none());
        assert!(first.get(&a).is_some());
    }

    #[test]
    fn test_clear_invalidates_handles() {
        let mut arena: EntryArena<i32, ()> = EntryArena::new();
        let handles: Vec<_> = (0..5).map(|i| arena.insert(Entry::located(i, (), 0))).collect();
        arena.clear();
        assert_eq!(arena.len(), 0);
        for handle in &handles {
            assert!(arena.get(handle).is_none());
        }
    }
}
