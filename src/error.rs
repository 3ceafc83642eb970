use thiserror::Error;

/// Errors returned when constructing a tracker.
#[derive(Error, Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The requested order statistic was zero. Rank 1 is the largest value.
    #[error("k must be at least 1, got {k}")]
    InvalidK {
        /// The rejected value.
        k: usize,
    },
}

/// A `Result` alias using this crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
