//! Key orderings for the queues
//!
//! A [`Comparator`] may refuse to order two keys (returning `None`), which is
//! how a queue detects keys it cannot accept: a key is only valid if it
//! compares equal to itself.

use crate::traits::QueueError;
use std::cmp::Ordering;
use std::fmt;

/// A total order over keys, possibly partial on ill-formed keys
pub trait Comparator<K> {
    /// Compares two keys; `None` means they cannot be ordered
    fn compare(&self, a: &K, b: &K) -> Option<Ordering>;

    /// Returns true if `a` is strictly smaller than `b`
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        self.compare(a, b) == Some(Ordering::Less)
    }

    /// Accepts a key only if it compares equal to itself
    fn check_key(&self, key: &K) -> Result<(), QueueError> {
        match self.compare(key, key) {
            Some(Ordering::Equal) => Ok(()),
            _ => Err(QueueError::InvalidKey),
        }
    }
}

/// Orders keys by their `PartialOrd` implementation
///
/// Keys such as `f64::NAN` that are not equal to themselves are rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<K: PartialOrd> Comparator<K> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Option<Ordering> {
        a.partial_cmp(b)
    }
}

/// Reverses the natural order, turning the min-queue into a max-queue
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReverseOrder;

impl<K: PartialOrd> Comparator<K> for ReverseOrder {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Option<Ordering> {
        b.partial_cmp(a)
    }
}

/// Adapts a closure into a [`Comparator`]
///
/// ```rust
/// use adaptable_heap::compare::{Comparator, FnComparator};
///
/// let by_len = FnComparator::new(|a: &&str, b: &&str| a.len().partial_cmp(&b.len()));
/// assert!(by_len.less(&"ab", &"abc"));
/// ```
#[derive(Clone, Copy, Default)]
pub struct FnComparator<F>(F);

impl<F> FnComparator<F> {
    /// Wraps a comparison closure
    pub fn new(f: F) -> Self {
        FnComparator(f)
    }
}

impl<F> fmt::Debug for FnComparator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnComparator")
    }
}

impl<K, F> Comparator<K> for FnComparator<F>
where
    F: Fn(&K, &K) -> Option<Ordering>,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Option<Ordering> {
        (self.0)(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_order() {
        assert!(NaturalOrder.less(&1, &2));
        assert!(!NaturalOrder.less(&2, &2));
        assert_eq!(NaturalOrder.compare(&"b", &"a"), Some(Ordering::Greater));
    }

    #[test]
    fn test_reverse_order() {
        assert!(ReverseOrder.less(&2, &1));
        assert!(!ReverseOrder.less(&1, &2));
    }

    #[test]
    fn test_check_key_rejects_nan() {
        assert_eq!(NaturalOrder.check_key(&1.5f64), Ok(()));
        assert_eq!(NaturalOrder.check_key(&f64::NAN), Err(QueueError::InvalidKey));
        assert_eq!(ReverseOrder.check_key(&f64::NAN), Err(QueueError::InvalidKey));
    }

    #[test]
    fn test_fn_comparator() {
        let by_abs = FnComparator::new(|a: &i32, b: &i32| a.abs().partial_cmp(&b.abs()));
        assert!(by_abs.less(&1, &-2));
        assert_eq!(by_abs.check_key(&-7), Ok(()));

        let refuses_odd = FnComparator::new(|a: &i32, b: &i32| {
            if a % 2 != 0 || b % 2 != 0 {
                None
            } else {
                a.partial_cmp(b)
            }
        });
        assert_eq!(refuses_odd.check_key(&4), Ok(()));
        assert_eq!(refuses_odd.check_key(&3), Err(QueueError::InvalidKey));
    }
}
