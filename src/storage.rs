//! Slot storage allocation for [`StretchRing`](crate::StretchRing).

use alloc::boxed::Box;
use core::mem::MaybeUninit;

/// Allocate `cap` uninitialized slots.
///
/// `cap == 0` performs no allocation; the zero-length slice doubles as the
/// empty sentinel. Dropping the returned box frees the memory without
/// running any element destructors, so callers can move values out with
/// `assume_init_read` and let the old allocation go.
#[inline]
pub(crate) fn uninit_slots<T>(cap: usize) -> Box<[MaybeUninit<T>]> {
    Box::new_uninit_slice(cap)
}
