//! Index arithmetic and sift routines for an implicit binary min-heap stored in a slice.
//!
//! The children of the node at index `i` live at `2i + 1` and `2i + 2`, and its parent at
//! `(i - 1) / 2`. A slice is a heap when every element is `>=` its parent.

/// Returns the parent index of `index`, or `None` for the root.
#[inline]
const fn parent(index: usize) -> Option<usize> {
    match index.checked_sub(1) {
        Some(i) => Some(i / 2),
        None => None,
    }
}

/// Returns the index of the left child of `index`, or `None` if it lies outside `len`.
#[inline]
const fn left_child(index: usize, len: usize) -> Option<usize> {
    let child = 2 * index + 1;
    if child < len { Some(child) } else { None }
}

/// Moves the element at `index` towards the root until its parent is no greater than it.
///
/// Returns the final index of the element.
pub(crate) fn sift_up<T: Ord>(data: &mut [T], mut index: usize) -> usize {
    debug_assert!(index < data.len(), "`sift_up()` - `index` out of bounds!");

    while let Some(parent) = parent(index) {
        if data[parent] <= data[index] {
            break;
        }
        data.swap(parent, index);
        index = parent;
    }
    index
}

/// Moves the element at `index` towards the leaves until no child is smaller than it.
///
/// Returns the final index of the element.
pub(crate) fn sift_down<T: Ord>(data: &mut [T], mut index: usize) -> usize {
    let len = data.len();

    while let Some(left) = left_child(index, len) {
        // Pick the smaller child; on a tie prefer the left one.
        let right = left + 1;
        let child = if right < len && data[right] < data[left] { right } else { left };

        if data[index] <= data[child] {
            break;
        }
        data.swap(index, child);
        index = child;
    }
    index
}

/// Rearranges `data` into heap order in O(n) by sifting down every internal node, last first.
pub(crate) fn heapify<T: Ord>(data: &mut [T]) {
    for index in (0..data.len() / 2).rev() {
        sift_down(data, index);
    }
}

/// Returns true if `data` satisfies the min-heap property.
#[cfg(test)]
pub(crate) fn is_heap<T: Ord>(data: &[T]) -> bool {
    (1..data.len()).all(|i| parent(i).is_some_and(|p| data[p] <= data[i]))
}
