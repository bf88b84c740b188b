//! Key/value entries stored by the queues

/// A key/value pair held by a priority queue
///
/// The key can only change through the owning queue (see
/// [`AdaptablePriorityQueue::replace_key`](crate::AdaptablePriorityQueue::replace_key)),
/// since changing it in place would break heap order.  Entries of an adaptable
/// queue also carry their current index in the heap array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
    key: K,
    value: V,
    locator: Option<usize>,
}

impl<K, V> Entry<K, V> {
    /// Creates an entry that does not track its position
    pub(crate) fn new(key: K, value: V) -> Self {
        Entry {
            key,
            value,
            locator: None,
        }
    }

    /// Creates a location-aware entry placed at `index`
    pub(crate) fn located(key: K, value: V, index: usize) -> Self {
        Entry {
            key,
            value,
            locator: Some(index),
        }
    }

    /// Returns the key
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the value
    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns the entry's current heap index, if it is location-aware
    #[inline]
    pub fn locator(&self) -> Option<usize> {
        self.locator
    }

    pub(crate) fn set_key(&mut self, key: K) -> K {
        std::mem::replace(&mut self.key, key)
    }

    pub(crate) fn set_value(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }

    pub(crate) fn set_locator(&mut self, index: usize) {
        self.locator = Some(index);
    }

    /// Consumes the entry, returning its key and value
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}
