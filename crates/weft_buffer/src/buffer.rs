//! Growable text buffer.
//!
//! [`MemoryBuffer`] is the engine's output buffer: a contiguous run of
//! character units that starts in inline storage and spills to the heap once
//! it outgrows [`INLINE_CAPACITY`].
//!
//! # Storage model
//!
//! The whole capacity is initialised storage, so a [`BufferSink`] can write
//! into the window between the logical length and the capacity without
//! touching uninitialised memory:
//!
//! ```text
//! [ written content | writable window            ]
//! 0                len                     capacity
//! ```
//!
//! Any growth may move the storage. A pointer from [`MemoryBuffer::as_ptr`]
//! taken before a growing call must not be dereferenced afterwards; re-fetch
//! it instead.
//!
//! [`BufferSink`]: crate::BufferSink

use std::alloc::handle_alloc_error;
use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

use crate::error::BufferError;
use crate::unit::CharUnit;

/// Units held inline before the first heap allocation.
pub const INLINE_CAPACITY: usize = 500;

/// Smallest capacity a growing buffer asks for.
pub const MIN_GROWTH: usize = 64;

/// Capacity to request when `size` units are committed and `needed` are
/// required: double the committed size, at least `needed`, at least
/// [`MIN_GROWTH`].
///
/// Doubling keeps the number of reallocations logarithmic in the total
/// number of units written.
#[inline]
pub fn grown_capacity(size: usize, needed: usize) -> usize {
    size.saturating_mul(2).max(needed).max(MIN_GROWTH)
}

/// Owned, contiguous, growable sequence of character units.
#[derive(Clone)]
pub struct MemoryBuffer<C: CharUnit> {
    /// Initialised storage; its length is the buffer's capacity.
    storage: SmallVec<[C; INLINE_CAPACITY]>,
    len: usize,
    reallocations: usize,
    /// Growth past this capacity fails with [`BufferError::CapacityOverflow`].
    max_capacity: usize,
}

impl<C: CharUnit> MemoryBuffer<C> {
    /// Create an empty buffer backed by inline storage.
    pub fn new() -> Self {
        Self {
            storage: SmallVec::from_elem(C::default(), INLINE_CAPACITY),
            len: 0,
            reallocations: 0,
            max_capacity: usize::MAX,
        }
    }

    /// Create an empty buffer able to hold `capacity` units without growing.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut buffer = Self::new();
        buffer.reserve(capacity);
        buffer
    }

    /// Number of written units.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if nothing has been written.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of units the buffer holds before it must grow.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Number of times the backing storage was reallocated, including the
    /// spill from inline storage to the heap.
    pub fn reallocations(&self) -> usize {
        self.reallocations
    }

    /// Largest capacity growth may reach.
    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// Cap future growth at `max_capacity` units. Appends that would need
    /// more fail with [`BufferError::CapacityOverflow`]; storage already
    /// allocated is kept.
    pub fn set_max_capacity(&mut self, max_capacity: usize) {
        self.max_capacity = max_capacity;
    }

    /// Whether the content lives on the heap.
    pub fn spilled(&self) -> bool {
        self.storage.spilled()
    }

    /// Written content.
    #[inline]
    pub fn as_slice(&self) -> &[C] {
        &self.storage[..self.len]
    }

    /// Written content, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [C] {
        &mut self.storage[..self.len]
    }

    /// Raw pointer to the start of the storage.
    ///
    /// Invalidated by any call that grows the buffer.
    #[inline]
    pub fn as_ptr(&self) -> *const C {
        self.storage.as_ptr()
    }

    /// Set the length to `new_len`, growing the storage if needed. Units
    /// exposed by lengthening are reset to the default unit.
    pub fn resize(&mut self, new_len: usize) {
        if new_len > self.capacity() {
            self.reserve(new_len);
        }
        if new_len > self.len {
            self.storage[self.len..new_len].fill(C::default());
        }
        self.len = new_len;
    }

    /// Ensure the capacity is at least `capacity`, like `Vec::reserve`.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds [`max_capacity`](Self::max_capacity) or
    /// the address space; aborts through `handle_alloc_error` if the
    /// allocator refuses.
    pub fn reserve(&mut self, capacity: usize) {
        match self.try_reserve(capacity) {
            Ok(()) => {}
            Err(BufferError::Alloc { layout }) => handle_alloc_error(layout),
            Err(BufferError::CapacityOverflow) => panic!("buffer capacity overflow"),
        }
    }

    /// Ensure the capacity is at least `capacity`, reporting failure instead
    /// of aborting.
    pub fn try_reserve(&mut self, capacity: usize) -> Result<(), BufferError> {
        if capacity <= self.capacity() {
            return Ok(());
        }
        if capacity > self.max_capacity {
            tracing::debug!(
                capacity,
                max_capacity = self.max_capacity,
                "buffer growth past its limit refused",
            );
            return Err(BufferError::CapacityOverflow);
        }
        let before = self.storage.capacity();
        self.storage.try_reserve(capacity - self.storage.len())?;
        self.commit_growth(before, capacity);
        Ok(())
    }

    /// Make room for `needed` units in total, growing by the doubling policy
    /// but never past the limit.
    pub(crate) fn grow_for(&mut self, needed: usize) -> Result<(), BufferError> {
        if needed <= self.capacity() {
            return Ok(());
        }
        let wanted = grown_capacity(self.len, needed)
            .min(self.max_capacity)
            .max(needed);
        self.try_reserve(wanted)
    }

    /// Make room for `additional` units past the written content.
    pub fn reserve_additional(&mut self, additional: usize) -> Result<(), BufferError> {
        let needed = self
            .len
            .checked_add(additional)
            .ok_or(BufferError::CapacityOverflow)?;
        self.grow_for(needed)
    }

    /// Extend the initialised storage to `capacity` once the allocation for it
    /// has succeeded.
    fn commit_growth(&mut self, allocated_before: usize, capacity: usize) {
        let from = self.storage.len();
        self.storage.resize(capacity, C::default());
        if self.storage.capacity() != allocated_before {
            self.reallocations += 1;
            tracing::trace!(
                from,
                to = capacity,
                allocated = self.storage.capacity(),
                reallocations = self.reallocations,
                "buffer storage reallocated",
            );
        }
    }

    /// Drop all content, keeping the storage.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Append one unit.
    pub fn push(&mut self, unit: C) -> Result<(), BufferError> {
        self.extend_from_slice(&[unit])
    }

    /// Append a run of units, growing with the doubling policy.
    pub fn extend_from_slice(&mut self, units: &[C]) -> Result<(), BufferError> {
        let end = self
            .len
            .checked_add(units.len())
            .ok_or(BufferError::CapacityOverflow)?;
        self.grow_for(end)?;
        self.storage[self.len..end].copy_from_slice(units);
        self.len = end;
        Ok(())
    }

    /// Append the encoding of `s`.
    pub fn push_str(&mut self, s: &str) -> Result<(), BufferError> {
        let mut result = Ok(());
        C::encode_str(s, |units| {
            if result.is_ok() {
                result = self.extend_from_slice(units);
            }
        });
        result
    }

    /// Append `count` copies of `c`. The room for all of them is reserved
    /// up front, so an oversized count fails before anything is written.
    pub fn push_repeated(&mut self, c: char, count: usize) -> Result<(), BufferError> {
        let units = C::char_units(c)
            .checked_mul(count)
            .ok_or(BufferError::CapacityOverflow)?;
        self.reserve_additional(units)?;
        let mut encoded = [0; 4];
        let encoded = c.encode_utf8(&mut encoded);
        for _ in 0..count {
            self.push_str(encoded)?;
        }
        Ok(())
    }

    /// Content decoded as text, replacing invalid sequences.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        C::to_text(self.as_slice())
    }

    /// Full storage window `[0, capacity)`, for the sink.
    #[inline]
    pub(crate) fn storage_mut(&mut self) -> &mut [C] {
        &mut self.storage
    }

    /// Set the logical length without touching content.
    #[inline]
    pub(crate) fn set_len(&mut self, len: usize) {
        debug_assert!(len <= self.capacity(), "length past capacity");
        self.len = len;
    }
}

impl MemoryBuffer<u8> {
    /// Convert the content into a `String`.
    pub fn into_string(self) -> Result<String, std::string::FromUtf8Error> {
        let len = self.len;
        let mut bytes = self.storage.into_vec();
        bytes.truncate(len);
        String::from_utf8(bytes)
    }
}

impl<C: CharUnit> Default for MemoryBuffer<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CharUnit> fmt::Debug for MemoryBuffer<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryBuffer")
            .field("content", &self.to_string_lossy())
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl<C: CharUnit> fmt::Display for MemoryBuffer<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

#[cfg(test)]
mod tests;
