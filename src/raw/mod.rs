mod sift;

#[cfg(test)]
pub(crate) use sift::is_heap;
pub(crate) use sift::{heapify, sift_down, sift_up};
