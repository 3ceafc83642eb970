use core::fmt;
use core::num::NonZero;

use crate::{Error, Result};

/// A one-based order statistic: `Kth(1)` is the largest value, `Kth(2)` the
/// second largest, and so on.
///
/// A `Kth` is always at least 1, so a tracker built from one can never be
/// asked for a rank that does not exist.
///
/// # Examples
///
/// ```
/// use kth_largest::{Error, Kth};
///
/// let k = Kth::new(3).unwrap();
/// assert_eq!(k.get(), 3);
///
/// assert_eq!(Kth::new(0), Err(Error::InvalidK { k: 0 }));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Kth(NonZero<usize>);

impl Kth {
    /// The running maximum.
    pub const LARGEST: Self = Self(NonZero::<usize>::MIN);

    /// Validates `k`, rejecting zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidK`] if `k` is zero.
    pub const fn new(k: usize) -> Result<Self> {
        match NonZero::new(k) {
            Some(k) => Ok(Self(k)),
            None => Err(Error::InvalidK {
                k,
            }),
        }
    }

    /// Returns the order statistic as a plain integer.
    #[inline]
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl From<NonZero<usize>> for Kth {
    fn from(k: NonZero<usize>) -> Self {
        Self(k)
    }
}

impl TryFrom<usize> for Kth {
    type Error = Error;

    fn try_from(k: usize) -> Result<Self> {
        Self::new(k)
    }
}

impl From<Kth> for usize {
    fn from(k: Kth) -> Self {
        k.get()
    }
}

impl fmt::Display for Kth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
