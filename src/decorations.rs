//! Typed per-vertex / per-edge side-tables
//!
//! A [`Decorations`] table attaches one value of a fixed type to graph
//! identifiers without touching the graph itself.  Algorithms keep one table
//! per kind of datum (distance, queue handle, predecessor, ...).

use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Maps graph identifiers to auxiliary values
#[derive(Debug, Clone)]
pub struct Decorations<Id, T> {
    table: FxHashMap<Id, T>,
}

impl<Id: Copy + Eq + Hash, T> Decorations<Id, T> {
    /// Creates an empty table
    pub fn new() -> Self {
        Decorations {
            table: FxHashMap::default(),
        }
    }

    /// Creates an empty table with room for `capacity` decorations
    pub fn with_capacity(capacity: usize) -> Self {
        Decorations {
            table: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Returns the decoration of `id`
    pub fn get(&self, id: &Id) -> Option<&T> {
        self.table.get(id)
    }

    /// Returns the decoration of `id` for in-place update
    pub fn get_mut(&mut self, id: &Id) -> Option<&mut T> {
        self.table.get_mut(id)
    }

    /// Decorates `id` with `value`, returning the previous decoration
    pub fn put(&mut self, id: Id, value: T) -> Option<T> {
        self.table.insert(id, value)
    }

    /// Removes and returns the decoration of `id`
    pub fn remove(&mut self, id: &Id) -> Option<T> {
        self.table.remove(id)
    }

    /// Returns true if `id` is decorated
    pub fn contains(&self, id: &Id) -> bool {
        self.table.contains_key(id)
    }

    /// Returns the number of decorated identifiers
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if nothing is decorated
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Removes every decoration
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Iterates over every decorated identifier, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (Id, &T)> + '_ {
        self.table.iter().map(|(id, value)| (*id, value))
    }
}

impl<Id: Copy + Eq + Hash, T> Default for Decorations<Id, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Id: Copy + Eq + Hash, T> FromIterator<(Id, T)> for Decorations<Id, T> {
    fn from_iter<I: IntoIterator<Item = (Id, T)>>(iter: I) -> Self {
        Decorations {
            table: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_remove() {
        let mut table: Decorations<u32, &str> = Decorations::new();
        assert!(table.is_empty());

        assert_eq!(table.put(1, "one"), None);
        assert_eq!(table.put(1, "uno"), Some("one"));
        assert_eq!(table.get(&1), Some(&"uno"));
        assert!(table.contains(&1));
        assert_eq!(table.len(), 1);

        if let Some(value) = table.get_mut(&1) {
            *value = "eins";
        }
        assert_eq!(table.remove(&1), Some("eins"));
        assert_eq!(table.remove(&1), None);
        assert!(!table.contains(&1));
    }

    #[test]
    fn test_collect_and_iter() {
        let table: Decorations<u32, u32> = (0..5).map(|i| (i, i * i)).collect();
        let mut pairs: Vec<_> = table.iter().map(|(id, v)| (id, *v)).collect();
        pairs.sort();
        assert_eq!(pairs, vec![(0, 0), (1, 1), (2, 4), (3, 9), (4, 16)]);

        let mut table = table;
        table.clear();
        assert!(table.is_empty());
    }
}
