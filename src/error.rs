//! Error type for the fallible index-based operations.

use core::fmt;

/// An index was outside the live-element range of the ring.
///
/// Returned by [`try_insert`](crate::StretchRing::try_insert) and
/// [`try_erase`](crate::StretchRing::try_erase).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The offending logical index.
    pub index: usize,
    /// The ring's live-element count at the time of the call.
    pub len: usize,
}

impl fmt::Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index {} out of bounds for ring of length {}",
            self.index, self.len
        )
    }
}

impl core::error::Error for IndexOutOfBounds {}
