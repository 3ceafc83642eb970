//! Streaming k-th largest tracking for Rust.
//!
//! This crate provides [`KthLargest`], which tracks the k-th largest value in a
//! stream of insertions, and [`MinHeap`], the binary min-heap backing it.
//!
//! - [`KthLargest::insert`] - Add a value and get back the current k-th largest
//! - [`KthLargest::kth`] - Read the current k-th largest without inserting
//! - [`Kth`] - A validated, non-zero order statistic
//!
//! # Example
//!
//! ```
//! use kth_largest::KthLargest;
//!
//! let mut tracker = KthLargest::try_new(3, [4, 5, 8, 2]).unwrap();
//!
//! assert_eq!(*tracker.insert(3), 4);
//! assert_eq!(*tracker.insert(5), 5);
//! assert_eq!(*tracker.insert(10), 5);
//! assert_eq!(*tracker.insert(9), 8);
//! assert_eq!(*tracker.insert(4), 8);
//!
//! // Only the three largest values are retained.
//! assert_eq!(tracker.len(), 3);
//! assert_eq!(tracker.into_sorted_vec(), [10, 9, 8]);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **O(log k) insertion** - Each insertion costs one heap sift over at most `k + 1` values
//! - **O(k) memory** - Values that can no longer be the k-th largest are evicted immediately
//! - **Multiset semantics** - Equal values count individually toward the rank
//!
//! # Implementation
//!
//! The tracker retains the `k` largest values seen so far in a min-heap. The root of
//! that heap is the smallest of the `k` largest values, which is by definition the
//! k-th largest value overall.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod order_statistic;
mod raw;

pub mod kth_largest;
pub mod min_heap;

pub use error::{Error, Result};
pub use kth_largest::KthLargest;
pub use min_heap::MinHeap;
pub use order_statistic::Kth;
