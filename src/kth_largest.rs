use alloc::vec::Vec;
use core::fmt;

use tracing::{debug, trace};

use crate::min_heap::{self, MinHeap};
use crate::{Kth, Result};

/// Upper bound on the number of slots reserved up front; larger `k` grow on demand.
const MAX_PREALLOCATED: usize = 1 << 12;

/// Tracks the k-th largest value of a stream of insertions.
///
/// The tracker retains the `k` largest values seen so far in a [`MinHeap`]. Every
/// insertion adds the new value and, once more than `k` values are held, evicts the
/// smallest one. The root of the heap is then the k-th largest value seen.
///
/// Values are counted with multiplicity: inserting `3` three times with `k = 3`
/// makes `3` the third largest value.
///
/// Before `k` values have been inserted the tracker reports the smallest value seen
/// so far; use [`is_saturated`](KthLargest::is_saturated) to tell the two apart.
///
/// # Examples
///
/// ```
/// use kth_largest::{Kth, KthLargest};
///
/// let k = Kth::new(3).unwrap();
/// let mut tracker = KthLargest::with_values(k, [1, 2, 3, 3]);
///
/// assert_eq!(*tracker.insert(3), 3);
/// assert_eq!(*tracker.insert(5), 3);
/// assert_eq!(*tracker.insert(6), 3);
/// assert_eq!(*tracker.insert(7), 5);
/// assert_eq!(*tracker.insert(8), 6);
/// ```
///
/// Floating point values have no total order; wrap them in a type that provides one:
///
/// ```
/// use core::cmp::Ordering;
/// use kth_largest::KthLargest;
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// struct Total(f64);
///
/// impl Eq for Total {}
/// impl PartialOrd for Total {
///     fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
///         Some(self.cmp(other))
///     }
/// }
/// impl Ord for Total {
///     fn cmp(&self, other: &Self) -> Ordering {
///         self.0.total_cmp(&other.0)
///     }
/// }
///
/// let mut tracker = KthLargest::try_new(2, [Total(0.5), Total(-1.0)]).unwrap();
/// assert_eq!(tracker.insert(Total(2.5)).0, 0.5);
/// ```
#[derive(Clone)]
pub struct KthLargest<T> {
    k: Kth,
    heap: MinHeap<T>,
    inserted: u64,
}

impl<T> KthLargest<T> {
    /// Makes a new, empty tracker for the `k`-th largest value.
    ///
    /// # Examples
    ///
    /// ```
    /// use kth_largest::{Kth, KthLargest};
    ///
    /// let mut tracker = KthLargest::new(Kth::LARGEST);
    /// assert_eq!(tracker.kth(), None);
    ///
    /// tracker.insert(4);
    /// assert_eq!(tracker.kth(), Some(&4));
    /// ```
    #[must_use]
    pub fn new(k: Kth) -> KthLargest<T> {
        KthLargest {
            k,
            heap: MinHeap::with_capacity(k.get().min(MAX_PREALLOCATED)),
            inserted: 0,
        }
    }

    /// Returns the order statistic being tracked.
    #[must_use]
    pub const fn k(&self) -> usize {
        self.k.get()
    }

    /// Returns the number of retained values, which is `min(k, inserted)`.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if nothing has been inserted since construction or the last
    /// [`clear`](KthLargest::clear).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns `true` once at least `k` values have been inserted, i.e. once
    /// [`kth`](KthLargest::kth) is the true k-th largest value.
    ///
    /// # Examples
    ///
    /// ```
    /// use kth_largest::KthLargest;
    ///
    /// let mut tracker = KthLargest::try_new(2, [10]).unwrap();
    /// assert!(!tracker.is_saturated());
    ///
    /// tracker.insert(20);
    /// assert!(tracker.is_saturated());
    /// ```
    #[must_use]
    pub fn is_saturated(&self) -> bool {
        self.heap.len() == self.k.get()
    }

    /// Returns the total number of insertions, including the initial values.
    ///
    /// Saturates at `u64::MAX`.
    #[must_use]
    pub const fn inserted(&self) -> u64 {
        self.inserted
    }

    /// Returns the current k-th largest value without inserting anything, or `None` if the
    /// tracker is empty.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn kth(&self) -> Option<&T> {
        self.heap.peek()
    }

    /// Gets an iterator over the retained values in arbitrary order.
    pub fn iter(&self) -> min_heap::Iter<'_, T> {
        self.heap.iter()
    }

    /// Drops every retained value and resets the insertion count. `k` is kept.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.inserted = 0;
    }
}

impl<T: Ord> KthLargest<T> {
    /// Makes a tracker for the `k`-th largest value and inserts `values` in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use kth_largest::{Kth, KthLargest};
    ///
    /// let tracker = KthLargest::with_values(Kth::new(3).unwrap(), [4, 5, 8, 2]);
    /// assert_eq!(tracker.kth(), Some(&4));
    /// assert_eq!(tracker.len(), 3);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n log k) for `n` initial values.
    pub fn with_values<I>(k: Kth, values: I) -> KthLargest<T>
    where
        I: IntoIterator<Item = T>,
    {
        let mut tracker = KthLargest::new(k);
        tracker.extend(values);
        debug!(k = k.get(), initial = tracker.inserted, "created k-th largest tracker");
        tracker
    }

    /// Validates `k` and makes a tracker with the given initial `values`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidK`](crate::Error::InvalidK) if `k` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use kth_largest::{Error, KthLargest};
    ///
    /// let tracker = KthLargest::try_new(1, [3, 1, 2]).unwrap();
    /// assert_eq!(tracker.kth(), Some(&3));
    ///
    /// let error = KthLargest::<i32>::try_new(0, []).unwrap_err();
    /// assert_eq!(error, Error::InvalidK { k: 0 });
    /// ```
    pub fn try_new<I>(k: usize, values: I) -> Result<KthLargest<T>>
    where
        I: IntoIterator<Item = T>,
    {
        Ok(KthLargest::with_values(Kth::new(k)?, values))
    }

    /// Inserts `value` and returns the k-th largest value seen so far.
    ///
    /// Until `k` values have been inserted, the smallest value seen so far is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use kth_largest::KthLargest;
    ///
    /// let mut tracker = KthLargest::try_new(3, [4, 5, 8, 2]).unwrap();
    ///
    /// assert_eq!(*tracker.insert(3), 4);
    /// assert_eq!(*tracker.insert(5), 5);
    /// assert_eq!(*tracker.insert(10), 5);
    /// assert_eq!(*tracker.insert(9), 8);
    /// assert_eq!(*tracker.insert(4), 8);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log k)
    pub fn insert(&mut self, value: T) -> &T {
        self.inserted = self.inserted.saturating_add(1);

        if self.heap.len() < self.k.get() {
            self.heap.push(value);
        } else {
            // Full: adding `value` and dropping the minimum is a single sift.
            let _evicted = self.heap.push_pop(value);
            trace!(k = self.k.get(), inserted = self.inserted, "evicted minimum");
        }

        debug_assert!(self.heap.len() <= self.k.get(), "`KthLargest::insert()` - retained more than `k` values!");
        self.heap.peek().expect("`KthLargest::insert()` - heap is empty after an insertion!")
    }

    /// Consumes the tracker and returns the retained values, largest first.
    ///
    /// The last element of a saturated tracker is the k-th largest value.
    ///
    /// # Examples
    ///
    /// ```
    /// use kth_largest::KthLargest;
    ///
    /// let tracker = KthLargest::try_new(2, [7, 1, 9, 7]).unwrap();
    /// assert_eq!(tracker.into_sorted_vec(), [9, 7]);
    /// ```
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut values = self.heap.into_sorted_vec();
        values.reverse();
        values
    }
}

impl<T: fmt::Debug> fmt::Debug for KthLargest<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KthLargest")
            .field("k", &self.k)
            .field("retained", &self.heap)
            .field("inserted", &self.inserted)
            .finish()
    }
}

impl<T: Ord> Extend<T> for KthLargest<T> {
    /// Inserts every value in order, discarding the intermediate results.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: 'a + Ord + Copy> Extend<&'a T> for KthLargest<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<'a, T> IntoIterator for &'a KthLargest<T> {
    type Item = &'a T;
    type IntoIter = min_heap::Iter<'a, T>;

    fn into_iter(self) -> min_heap::Iter<'a, T> {
        self.iter()
    }
}
