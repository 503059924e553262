extern crate std;

mod properties;

use std::vec::Vec;

use crate::StretchRing;

/// Logical contents, front to back, via indexed access.
fn contents<T: Clone>(ring: &StretchRing<T>) -> Vec<T> {
    (0..ring.len()).map(|i| ring[i].clone()).collect()
}
