//! A growable ring buffer with amortized O(1) push and pop at both ends.
//!
//! [`StretchRing`] owns one contiguous block of slots addressed circularly
//! through a head offset. It grows by doubling when a push overflows the
//! current capacity and shrinks by halving when removals leave it less than
//! half full, so retained memory stays proportional to the live element
//! count. Arbitrary-position [`insert`](StretchRing::insert) and
//! [`erase`](StretchRing::erase) are supported at O(shift distance).
//!
//! The structure is built for streaming sample windows:
//! [`push_front_and_pop_back`](StretchRing::push_front_and_pop_back) slides
//! a fixed-width window over an incoming stream in O(1), where a plain
//! dynamic array would pay O(n) per new sample.
//!
//! # Example
//!
//! ```
//! use stretch_ring::StretchRing;
//!
//! let mut window: StretchRing<i32> = StretchRing::filled(4);
//! for sample in [10, 20, 30, 40] {
//!     window.push_front_and_pop_back(sample);
//! }
//! assert_eq!(window.len(), 4);
//! assert_eq!(window.front(), Some(&40));
//! assert_eq!(window.back(), Some(&10));
//! ```

#![no_std]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_op_in_unsafe_fn)]

extern crate alloc;

mod error;
mod fmt;
mod read;
mod ring;
mod storage;

#[cfg(test)]
mod tests;

pub use error::IndexOutOfBounds;
pub use ring::StretchRing;
