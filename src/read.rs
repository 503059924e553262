//! Read accessors for [`StretchRing`].

use core::ops::{Index, IndexMut};

use crate::ring::StretchRing;

impl<T> StretchRing<T> {
    /// Get the element at logical `index` (0 = front).
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        let idx = self.slot_of(index);
        // SAFETY: index < len, so the slot is inside the live range and
        // initialized.
        Some(unsafe { self.buf[idx].assume_init_ref() })
    }

    /// Get a mutable reference to the element at logical `index`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let idx = self.slot_of(index);
        // SAFETY: index < len, so the slot is initialized; &mut self makes
        // the reference exclusive.
        Some(unsafe { self.buf[idx].assume_init_mut() })
    }

    /// Get the element at logical `index` by value, or `T::default()` if
    /// the index is out of range.
    ///
    /// This is a soft-bounds read: an out-of-range index is not an error,
    /// it just yields the default. Use [`get`](Self::get) when out-of-range
    /// should be distinguishable from a stored default value.
    #[inline]
    #[must_use]
    pub fn get_or_default(&self, index: usize) -> T
    where
        T: Clone + Default,
    {
        self.get(index).cloned().unwrap_or_default()
    }

    /// The logical first element.
    #[inline]
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// The logical last element.
    #[inline]
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.get(self.len - 1)
    }

    /// Mutable reference to the logical first element.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Mutable reference to the logical last element.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.len == 0 {
            return None;
        }
        self.get_mut(self.len - 1)
    }
}

impl<T> Index<usize> for StretchRing<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(value) => value,
            None => panic!(
                "index {index} out of bounds for ring of length {}",
                self.len()
            ),
        }
    }
}

impl<T> IndexMut<usize> for StretchRing<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!("index {index} out of bounds for ring of length {len}"),
        }
    }
}
