//! Array-backed binary heap engine shared by both queues
//!
//! [`HeapCore`] owns the heap array and the upheap/downheap/heapify/swap
//! primitives.  It never compares or tracks items itself: every call receives
//! a [`Placement`], which supplies the ordering and is told about every slot
//! an item lands in.  The plain [`BinaryHeap`](crate::binary_heap::BinaryHeap)
//! ignores those notifications; the
//! [`HeapAdaptablePriorityQueue`](crate::adaptable::HeapAdaptablePriorityQueue)
//! uses them to keep each entry's locator equal to its live index.
//!
//! Index 0 is the root; the children of `j` are `2j + 1` and `2j + 2`.
//!
//! # Time Complexity
//!
//! | Operation   | Complexity |
//! |-------------|------------|
//! | `push`      | O(log n)   |
//! | `pop_min`   | O(log n)   |
//! | `remove_at` | O(log n)   |
//! | `bubble`    | O(log n)   |
//! | `heapify`   | O(n)       |

/// Ordering and relocation hook for the items of a [`HeapCore`]
pub(crate) trait Placement<T> {
    /// Returns true if `a` must sit above `b`
    fn less(&self, a: &T, b: &T) -> bool;

    /// Called after `item` has been stored at `index`
    #[inline]
    fn relocated(&mut self, _item: &T, _index: usize) {}
}

/// The heap array and its restructuring primitives
#[derive(Debug, Clone)]
pub(crate) struct HeapCore<T> {
    data: Vec<T>,
}

#[inline]
pub(crate) fn parent(j: usize) -> usize {
    (j - 1) / 2
}

#[inline]
pub(crate) fn left(j: usize) -> usize {
    2 * j + 1
}

#[inline]
pub(crate) fn right(j: usize) -> usize {
    2 * j + 2
}

impl<T> HeapCore<T> {
    pub(crate) fn new() -> Self {
        HeapCore { data: Vec::new() }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        HeapCore {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Takes ownership of an unordered array; call [`heapify`](Self::heapify) next
    pub(crate) fn from_vec(data: Vec<T>) -> Self {
        HeapCore { data }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    #[inline]
    pub(crate) fn first(&self) -> Option<&T> {
        self.data.first()
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub(crate) fn clear(&mut self) {
        self.data.clear();
    }

    #[inline]
    fn has_left(&self, j: usize) -> bool {
        left(j) < self.data.len()
    }

    #[inline]
    fn has_right(&self, j: usize) -> bool {
        right(j) < self.data.len()
    }

    /// Exchanges slots `i` and `j`, reporting both new positions
    ///
    /// This is the only place items change slots.
    #[inline]
    pub(crate) fn swap<P: Placement<T>>(&mut self, i: usize, j: usize, place: &mut P) {
        self.data.swap(i, j);
        place.relocated(&self.data[i], i);
        place.relocated(&self.data[j], j);
    }

    /// Moves the item at `j` up until its parent is not greater; returns its final index
    pub(crate) fn upheap<P: Placement<T>>(&mut self, mut j: usize, place: &mut P) -> usize {
        while j > 0 {
            let p = parent(j);
            if !place.less(&self.data[j], &self.data[p]) {
                break;
            }
            self.swap(j, p, place);
            j = p;
        }
        j
    }

    /// Moves the item at `j` down until no child is smaller; returns its final index
    ///
    /// Ties between the children favor the left child.
    pub(crate) fn downheap<P: Placement<T>>(&mut self, mut j: usize, place: &mut P) -> usize {
        while self.has_left(j) {
            let mut small = left(j);
            if self.has_right(j) && place.less(&self.data[right(j)], &self.data[small]) {
                small = right(j);
            }
            if !place.less(&self.data[small], &self.data[j]) {
                break;
            }
            self.swap(j, small, place);
            j = small;
        }
        j
    }

    /// Restores order around `j` after its key changed in either direction
    pub(crate) fn bubble<P: Placement<T>>(&mut self, j: usize, place: &mut P) -> usize {
        if j > 0 && place.less(&self.data[j], &self.data[parent(j)]) {
            self.upheap(j, place)
        } else {
            self.downheap(j, place)
        }
    }

    /// Bottom-up construction: downheap every internal node, last parent first
    pub(crate) fn heapify<P: Placement<T>>(&mut self, place: &mut P) {
        for (index, item) in self.data.iter().enumerate() {
            place.relocated(item, index);
        }
        if self.data.len() < 2 {
            return;
        }
        for j in (0..=parent(self.data.len() - 1)).rev() {
            self.downheap(j, place);
        }
    }

    /// Appends `item` and restores order; returns its final index
    pub(crate) fn push<P: Placement<T>>(&mut self, item: T, place: &mut P) -> usize {
        let j = self.data.len();
        self.data.push(item);
        place.relocated(&self.data[j], j);
        self.upheap(j, place)
    }

    /// Removes the root
    pub(crate) fn pop_min<P: Placement<T>>(&mut self, place: &mut P) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let last = self.data.len() - 1;
        if last > 0 {
            self.swap(0, last, place);
        }
        let item = self.data.pop();
        if !self.data.is_empty() {
            self.downheap(0, place);
        }
        item
    }

    /// Removes the item at `j` by swapping in the last item and bubbling it
    pub(crate) fn remove_at<P: Placement<T>>(&mut self, j: usize, place: &mut P) -> Option<T> {
        let last = self.data.len().checked_sub(1)?;
        if j > last {
            return None;
        }
        if j == last {
            return self.data.pop();
        }
        self.swap(j, last, place);
        let item = self.data.pop();
        self.bubble(j, place);
        item
    }

    /// Returns the first index whose item is smaller than its parent
    pub(crate) fn first_violation<P: Placement<T>>(&self, place: &P) -> Option<usize> {
        (1..self.data.len()).find(|&j| place.less(&self.data[j], &self.data[parent(j)]))
    }
}
