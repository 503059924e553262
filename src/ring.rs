//! The growable ring buffer.

use alloc::boxed::Box;
use core::mem::MaybeUninit;
use core::ops::Mul;

use crate::error::IndexOutOfBounds;
use crate::storage;

/// Growable ring buffer with amortized O(1) push/pop at both ends.
///
/// Storage is one contiguous block of `capacity()` slots. The logical
/// element at position `i` lives in physical slot `(head + i) % capacity()`,
/// so prepending is a head decrement instead of an O(n) shift. Every
/// reallocation (grow or shrink) copies the live elements back to physical
/// slot 0 and resets `head`, normalizing wraparound until the next resize.
///
/// Growth triggers when a push would exceed capacity and doubles relative to
/// the *new* element count. [`pop_back`](Self::pop_back) and
/// [`erase`](Self::erase) shrink the allocation by half once the ring is
/// less than half full; [`pop_front`](Self::pop_front) never shrinks.
///
/// # Example
///
/// ```
/// use stretch_ring::StretchRing;
///
/// let mut ring = StretchRing::new();
/// ring.push_back(2);
/// ring.push_back(3);
/// ring.push_front(1);
/// assert_eq!(ring.len(), 3);
/// assert_eq!(ring[0], 1);
/// assert_eq!(ring.pop_back(), Some(3));
/// ```
pub struct StretchRing<T> {
    /// Owned slot storage; `buf.len()` is the capacity. Slots outside the
    /// live range `[head, head + len)` (mod capacity) are uninitialized.
    pub(crate) buf: Box<[MaybeUninit<T>]>,
    /// Physical index of logical element 0. Always `< capacity()` when the
    /// ring is allocated; meaningless (and kept at 0) when it is not.
    pub(crate) head: usize,
    /// Live element count. `len <= capacity()` at all times.
    pub(crate) len: usize,
}

impl<T> StretchRing<T> {
    /// Create an empty ring. Does not allocate.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: storage::uninit_slots(0),
            head: 0,
            len: 0,
        }
    }

    /// Create a ring of `cap` default-valued elements.
    ///
    /// Size equals capacity, making the ring immediately usable as a
    /// fixed-width window for [`push_front_and_pop_back`](Self::push_front_and_pop_back).
    #[must_use]
    pub fn filled(cap: usize) -> Self
    where
        T: Default,
    {
        let mut ring = Self {
            buf: storage::uninit_slots(cap),
            head: 0,
            len: 0,
        };
        for i in 0..cap {
            ring.buf[i].write(T::default());
            ring.len += 1;
        }
        ring
    }

    /// Create a ring of `cap` clones of `value`.
    #[must_use]
    pub fn filled_with(cap: usize, value: T) -> Self
    where
        T: Clone,
    {
        let mut ring = Self {
            buf: storage::uninit_slots(cap),
            head: 0,
            len: 0,
        };
        for i in 0..cap {
            ring.buf[i].write(value.clone());
            ring.len += 1;
        }
        ring
    }

    /// Number of live elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the ring holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True if the next push would reallocate.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len == self.buf.len()
    }

    /// Allocated slot count. May exceed [`len`](Self::len).
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Translate a logical position to a physical slot index.
    ///
    /// All circular addressing funnels through here, so the resize paths can
    /// reset `head` to 0 without touching any other logic.
    #[inline]
    pub(crate) fn slot_of(&self, logical: usize) -> usize {
        (self.head + logical) % self.buf.len()
    }

    /// Append an element at the logical end.
    ///
    /// Amortized O(1); reallocates to twice the new size when full.
    pub fn push_back(&mut self, value: T) {
        if self.len == self.buf.len() {
            self.reallocate(2 * (self.len + 1));
        }
        let dst = self.slot_of(self.len);
        self.buf[dst].write(value);
        self.len += 1;
    }

    /// Prepend an element at the logical front.
    ///
    /// The head offset steps backward (mod capacity) before the write, which
    /// is what makes prepending O(1) here where a dynamic array pays O(n).
    pub fn push_front(&mut self, value: T) {
        if self.len == self.buf.len() {
            self.reallocate(2 * (self.len + 1));
        }
        let cap = self.buf.len();
        self.head = (self.head + cap - 1) % cap;
        self.buf[self.head].write(value);
        self.len += 1;
    }

    /// Remove and return the logical last element, or `None` if empty.
    ///
    /// Shrinks the allocation to half once the ring is less than half full.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let idx = self.slot_of(self.len);
        // SAFETY: The slot at the old last logical position is initialized
        // (it was inside the live range before the decrement). It is read
        // exactly once and is outside the live range from here on.
        let value = unsafe { self.buf[idx].assume_init_read() };
        self.shrink_after_removal();
        Some(value)
    }

    /// Remove and return the logical first element, or `None` if empty.
    ///
    /// Never shrinks the allocation; only [`pop_back`](Self::pop_back) and
    /// [`erase`](Self::erase) do.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: len > 0, so the slot at head is initialized. It is read
        // exactly once; head advances past it immediately after.
        let value = unsafe { self.buf[self.head].assume_init_read() };
        self.head = (self.head + 1) % self.buf.len();
        self.len -= 1;
        Some(value)
    }

    /// Slide a fixed-width window: prepend `value`, evict the last element.
    ///
    /// The element count is identical before and after; the contents equal
    /// the previous contents with `value` prepended and the previous last
    /// element dropped. Returns the evicted element.
    ///
    /// With spare capacity the window grows by one and immediately shrinks
    /// back; at full capacity the eviction happens first so the prepend
    /// cannot trigger a grow. On an empty unallocated ring this degenerates
    /// to a plain [`push_front`](Self::push_front) and returns `None`; on an
    /// empty ring with retained capacity the new element is evicted straight
    /// back out.
    pub fn push_front_and_pop_back(&mut self, value: T) -> Option<T> {
        if self.len < self.buf.len() {
            self.push_front(value);
            self.pop_back()
        } else {
            let evicted = self.pop_back();
            self.push_front(value);
            evicted
        }
    }

    /// Insert `value` at logical position `index`, shifting `[index, len)`
    /// one slot toward the back.
    ///
    /// `index == 0` delegates to [`push_front`](Self::push_front) and is
    /// O(1); `index == len` appends. When the insert overflows capacity, the
    /// grow and the splice happen in a single copy pass.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`. See [`try_insert`](Self::try_insert) for a
    /// fallible variant.
    pub fn insert(&mut self, index: usize, value: T) {
        assert!(
            index <= self.len,
            "insert index {index} out of range for ring of length {}",
            self.len
        );
        if index == 0 {
            self.push_front(value);
            return;
        }
        if self.len == self.buf.len() {
            self.reallocate_spliced(2 * (self.len + 1), index, value);
            return;
        }
        let mut i = self.len;
        while i > index {
            let src = self.slot_of(i - 1);
            let dst = self.slot_of(i);
            // SAFETY: src is inside the live range, so it is initialized.
            // dst is either one past the live range (first iteration) or a
            // slot already vacated by the previous iteration. Each slot is
            // read once before being overwritten.
            unsafe {
                let v = self.buf[src].assume_init_read();
                self.buf[dst].write(v);
            }
            i -= 1;
        }
        let dst = self.slot_of(index);
        self.buf[dst].write(value);
        self.len += 1;
    }

    /// Remove and return the element at logical position `index`, shifting
    /// `[index + 1, len)` one slot toward the front.
    ///
    /// Applies the same shrink check as [`pop_back`](Self::pop_back).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`. See [`try_erase`](Self::try_erase) for a
    /// fallible variant.
    pub fn erase(&mut self, index: usize) -> T {
        assert!(
            index < self.len,
            "erase index {index} out of range for ring of length {}",
            self.len
        );
        let idx = self.slot_of(index);
        // SAFETY: index < len, so the slot is initialized. The gap it leaves
        // is closed by the shift below before len is decremented.
        let value = unsafe { self.buf[idx].assume_init_read() };
        for i in index..self.len - 1 {
            let src = self.slot_of(i + 1);
            let dst = self.slot_of(i);
            // SAFETY: src is inside the live range and still initialized;
            // dst was vacated by the erase read (first iteration) or by the
            // previous shift step.
            unsafe {
                let v = self.buf[src].assume_init_read();
                self.buf[dst].write(v);
            }
        }
        self.len -= 1;
        self.shrink_after_removal();
        value
    }

    /// Fallible [`insert`](Self::insert).
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfBounds`] if `index > len`; the ring is unchanged.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            return Err(IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        self.insert(index, value);
        Ok(())
    }

    /// Fallible [`erase`](Self::erase).
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfBounds`] if `index >= len`; the ring is unchanged.
    pub fn try_erase(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        if index >= self.len {
            return Err(IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        Ok(self.erase(index))
    }

    /// Drop all elements and release the storage.
    ///
    /// Unlike the pop-driven shrink path, this frees the allocation in one
    /// step; capacity is 0 afterward.
    pub fn clear(&mut self) {
        for i in 0..self.len {
            let idx = self.slot_of(i);
            // SAFETY: Every slot in the live range is initialized and each
            // is dropped exactly once; len is zeroed before anything can
            // observe the ring again.
            unsafe { self.buf[idx].assume_init_drop() };
        }
        self.len = 0;
        self.head = 0;
        self.buf = storage::uninit_slots(0);
    }

    /// Move the live elements into a fresh allocation of `new_cap` slots.
    ///
    /// Elements land at physical slot 0 onward in logical order and `head`
    /// resets, so wraparound is normalized on every resize. `new_cap` must
    /// be at least `len`; `new_cap == 0` releases the storage entirely.
    fn reallocate(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len);
        let mut fresh = storage::uninit_slots(new_cap);
        for i in 0..self.len {
            let src = self.slot_of(i);
            // SAFETY: Slot src is initialized (i < len) and read exactly
            // once. The old box frees its memory without dropping elements,
            // so the moved-out values are owned solely by `fresh`.
            let value = unsafe { self.buf[src].assume_init_read() };
            fresh[i].write(value);
        }
        self.buf = fresh;
        self.head = 0;
    }

    /// Grow to `new_cap` and splice `value` in at logical `index` during the
    /// same copy pass, avoiding a second O(n) shift.
    fn reallocate_spliced(&mut self, new_cap: usize, index: usize, value: T) {
        debug_assert!(new_cap > self.len);
        debug_assert!(index <= self.len);
        let mut fresh = storage::uninit_slots(new_cap);
        for i in 0..index {
            let src = self.slot_of(i);
            // SAFETY: as in `reallocate` — each live slot read exactly once.
            let v = unsafe { self.buf[src].assume_init_read() };
            fresh[i].write(v);
        }
        fresh[index].write(value);
        for i in index..self.len {
            let src = self.slot_of(i);
            // SAFETY: as in `reallocate` — each live slot read exactly once.
            let v = unsafe { self.buf[src].assume_init_read() };
            fresh[i + 1].write(v);
        }
        self.buf = fresh;
        self.head = 0;
        self.len += 1;
    }

    /// Halve the allocation once a removal leaves the ring less than half
    /// full. A halved capacity of 0 releases the storage.
    #[inline]
    fn shrink_after_removal(&mut self) {
        let cap = self.buf.len();
        if self.len < cap / 2 + 1 {
            self.reallocate(cap / 2);
        }
    }
}

impl<T> Default for StretchRing<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for StretchRing<T> {
    fn drop(&mut self) {
        for i in 0..self.len {
            let idx = self.slot_of(i);
            // SAFETY: Every slot in the live range is initialized and
            // dropped exactly once; the box then frees the raw storage.
            unsafe { self.buf[idx].assume_init_drop() };
        }
    }
}

impl<T: Clone> Clone for StretchRing<T> {
    /// Deep copy into fresh storage sized to the live element count.
    ///
    /// The clone's capacity equals the source's `len()`, not its raw
    /// capacity, and its head is 0. Cloning a drained ring therefore yields
    /// an unallocated one.
    fn clone(&self) -> Self {
        let mut fresh = Self {
            buf: storage::uninit_slots(self.len),
            head: 0,
            len: 0,
        };
        for i in 0..self.len {
            let src = self.slot_of(i);
            // SAFETY: Slot src is initialized (i < len). `fresh.len` is
            // bumped after every write, so a panic in T::clone drops the
            // initialized prefix via fresh's Drop instead of leaking it.
            let value = unsafe { self.buf[src].assume_init_ref() }.clone();
            fresh.buf[i].write(value);
            fresh.len += 1;
        }
        fresh
    }
}

impl<T> StretchRing<T>
where
    T: Mul<Output = T> + Clone,
{
    /// Return a new ring with every element multiplied by `factor`.
    ///
    /// The output is sized to the live element count, like
    /// [`Clone`](Self::clone).
    #[must_use]
    pub fn scaled(&self, factor: T) -> Self {
        let mut out = Self {
            buf: storage::uninit_slots(self.len),
            head: 0,
            len: 0,
        };
        for i in 0..self.len {
            let src = self.slot_of(i);
            // SAFETY: Slot src is initialized (i < len); incremental len
            // keeps `out` drop-safe if Mul or Clone panics.
            let value = unsafe { self.buf[src].assume_init_ref() }.clone() * factor.clone();
            out.buf[i].write(value);
            out.len += 1;
        }
        out
    }
}

impl<T> Mul<T> for &StretchRing<T>
where
    T: Mul<Output = T> + Clone,
{
    type Output = StretchRing<T>;

    fn mul(self, factor: T) -> StretchRing<T> {
        self.scaled(factor)
    }
}
