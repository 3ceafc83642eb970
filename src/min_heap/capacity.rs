use alloc::vec::Vec;

use super::MinHeap;

impl<T> MinHeap<T> {
    /// Creates an empty heap with capacity for at least `capacity` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use kth_largest::MinHeap;
    ///
    /// let heap: MinHeap<i32> = MinHeap::with_capacity(16);
    /// assert!(heap.is_empty());
    /// assert!(heap.capacity() >= 16);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements the heap can hold without reallocating.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves capacity for at least `additional` more elements.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows `usize`.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }
}
