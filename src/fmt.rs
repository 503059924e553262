//! Formatting and comparison impls for [`StretchRing`].

use core::fmt;

use crate::ring::StretchRing;

/// Renders the logical contents as a bracketed, comma-separated listing,
/// e.g. `[1,2,3]`. An empty ring renders as `[]`.
impl<T: fmt::Display> fmt::Display for StretchRing<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for i in 0..self.len() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", self[i])?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for StretchRing<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries((0..self.len()).map(|i| &self[i]))
            .finish()
    }
}

/// Equality is over the logical sequence; capacity and head position do not
/// participate.
impl<T: PartialEq> PartialEq for StretchRing<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && (0..self.len()).all(|i| self[i] == other[i])
    }
}

impl<T: Eq> Eq for StretchRing<T> {}
