use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;
use core::mem;

use crate::raw;

mod capacity;

/// A priority queue implemented with a binary min-heap.
///
/// The smallest element, as determined by [`Ord`], is always at the root and can be
/// inspected in O(1) and removed in O(log n). Elements are stored contiguously in a
/// [`Vec`]; no per-element allocation takes place.
///
/// This is the mirror image of `std::collections::BinaryHeap`, which is a max-heap. Equal
/// elements are kept individually: pushing the same value twice stores it twice.
///
/// It is a logic error for an item to be modified in such a way that the item's ordering
/// relative to any other item, as determined by the [`Ord`] trait, changes while it is in the
/// heap. The behavior resulting from such a logic error is not specified, but will be
/// encapsulated to the `MinHeap` that observed the logic error and not result in undefined
/// behavior.
///
/// # Examples
///
/// ```
/// use kth_largest::MinHeap;
///
/// let mut heap = MinHeap::new();
/// heap.push(20);
/// heap.push(10);
/// heap.push(15);
///
/// assert_eq!(heap.peek(), Some(&10));
/// assert_eq!(heap.len(), 3);
///
/// assert_eq!(heap.pop(), Some(10));
/// assert_eq!(heap.pop(), Some(15));
/// assert_eq!(heap.pop(), Some(20));
/// assert_eq!(heap.pop(), None);
/// ```
///
/// A `MinHeap` with a known list of items can be initialized from an array:
///
/// ```
/// use kth_largest::MinHeap;
///
/// let heap = MinHeap::from([5, 1, 3]);
/// assert_eq!(heap.peek(), Some(&1));
/// ```
#[derive(Clone)]
pub struct MinHeap<T> {
    data: Vec<T>,
}

/// An iterator over the elements of a `MinHeap`, in arbitrary (heap) order.
///
/// This `struct` is created by the [`iter`] method on [`MinHeap`].
///
/// [`iter`]: MinHeap::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    inner: core::slice::Iter<'a, T>,
}

/// An owning iterator over the elements of a `MinHeap`, in arbitrary (heap) order.
///
/// This `struct` is created by the [`into_iter`] method on [`MinHeap`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: MinHeap#method.into_iter
pub struct IntoIter<T> {
    inner: alloc::vec::IntoIter<T>,
}

impl<T> MinHeap<T> {
    /// Makes a new, empty `MinHeap`.
    ///
    /// Does not allocate until the first element is pushed.
    ///
    /// # Examples
    ///
    /// ```
    /// use kth_largest::MinHeap;
    ///
    /// let mut heap = MinHeap::new();
    /// heap.push(4);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn new() -> MinHeap<T> {
        MinHeap {
            data: Vec::new(),
        }
    }

    /// Returns the smallest element in the heap, or `None` if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use kth_largest::MinHeap;
    ///
    /// let mut heap = MinHeap::new();
    /// assert_eq!(heap.peek(), None);
    ///
    /// heap.push(5);
    /// heap.push(2);
    /// assert_eq!(heap.peek(), Some(&2));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Returns the number of elements in the heap.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap contains no elements.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Gets an iterator that visits the elements in arbitrary order.
    ///
    /// # Examples
    ///
    /// ```
    /// use kth_largest::MinHeap;
    ///
    /// let heap = MinHeap::from([1, 2, 3]);
    /// let mut values: Vec<_> = heap.iter().copied().collect();
    /// values.sort();
    /// assert_eq!(values, [1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.data.iter(),
        }
    }

    /// Drops every element, keeping the allocated capacity.
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consumes the heap and returns the underlying vector in heap order.
    ///
    /// The first element of a non-empty result is the minimum.
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Ord> MinHeap<T> {
    /// Pushes an element onto the heap.
    ///
    /// # Examples
    ///
    /// ```
    /// use kth_largest::MinHeap;
    ///
    /// let mut heap = MinHeap::new();
    /// heap.push(3);
    /// heap.push(1);
    /// heap.push(3);
    ///
    /// assert_eq!(heap.len(), 3);
    /// assert_eq!(heap.peek(), Some(&1));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n), plus amortized O(1) for growing the backing vector.
    pub fn push(&mut self, value: T) {
        self.data.push(value);
        let last = self.data.len() - 1;
        raw::sift_up(&mut self.data, last);
    }

    /// Removes the smallest element from the heap and returns it, or `None` if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use kth_largest::MinHeap;
    ///
    /// let mut heap = MinHeap::from([2, 1]);
    /// assert_eq!(heap.pop(), Some(1));
    /// assert_eq!(heap.pop(), Some(2));
    /// assert_eq!(heap.pop(), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        // The last element takes the root's place and sinks back into position.
        let min = self.data.swap_remove(0);
        if !self.data.is_empty() {
            raw::sift_down(&mut self.data, 0);
        }
        Some(min)
    }

    /// Pushes `value` and then pops the smallest element, as one operation.
    ///
    /// If the heap is empty, or `value` is no greater than the current minimum, `value` is
    /// returned immediately and the heap is untouched. Otherwise `value` replaces the root,
    /// which is returned.
    ///
    /// The resulting heap always holds the same elements as `push` followed by `pop` would
    /// leave behind, but the heap length never changes.
    ///
    /// # Examples
    ///
    /// ```
    /// use kth_largest::MinHeap;
    ///
    /// let mut heap = MinHeap::from([4, 5, 8]);
    ///
    /// assert_eq!(heap.push_pop(2), 2);
    /// assert_eq!(heap.push_pop(6), 4);
    /// assert_eq!(heap.peek(), Some(&5));
    /// assert_eq!(heap.len(), 3);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn push_pop(&mut self, value: T) -> T {
        match self.data.first_mut() {
            Some(root) if *root < value => {
                let min = mem::replace(root, value);
                raw::sift_down(&mut self.data, 0);
                min
            }
            _ => value,
        }
    }

    /// Consumes the heap and returns its elements in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use kth_largest::MinHeap;
    ///
    /// let heap = MinHeap::from([3, 1, 2, 1]);
    /// assert_eq!(heap.into_sorted_vec(), [1, 1, 2, 3]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n log n)
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut data = self.data;
        data.sort();
        data
    }
}

impl<T: fmt::Debug> fmt::Debug for MinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for MinHeap<T> {
    /// Creates an empty `MinHeap`.
    fn default() -> MinHeap<T> {
        MinHeap::new()
    }
}

/// Converts a `Vec<T>` into a `MinHeap<T>`.
///
/// This conversion happens in-place with O(n) time complexity.
impl<T: Ord> From<Vec<T>> for MinHeap<T> {
    fn from(mut data: Vec<T>) -> MinHeap<T> {
        raw::heapify(&mut data);
        MinHeap {
            data,
        }
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for MinHeap<T> {
    /// Converts a `[T; N]` into a `MinHeap<T>`.
    fn from(arr: [T; N]) -> Self {
        MinHeap::from(Vec::from(arr))
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> MinHeap<T> {
        MinHeap::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: Ord> Extend<T> for MinHeap<T> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        iter.for_each(move |elem| self.push(elem));
    }
}

impl<'a, T: 'a + Ord + Copy> Extend<&'a T> for MinHeap<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> IntoIterator for MinHeap<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Creates a consuming iterator over the elements in arbitrary order.
    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.data.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a MinHeap<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.inner.as_slice()).finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.inner.as_slice()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}
