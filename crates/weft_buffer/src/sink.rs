//! Sink adapter over a [`MemoryBuffer`].
//!
//! [`BufferSink`] lets rendering code that only knows `std::fmt::Write` (or,
//! for narrow buffers, `std::io::Write`) write straight into a buffer. It
//! keeps a write cursor and a window end; the window always lies inside the
//! buffer's capacity. When a write runs past the window, the sink:
//!
//! 1. snapshots the committed size (cursor minus buffer start),
//! 2. sets the buffer's length to that snapshot,
//! 3. reserves at least double the snapshot via
//!    [`grown_capacity`](crate::grown_capacity), capped by the buffer's
//!    [`max_capacity`](MemoryBuffer::max_capacity),
//! 4. re-opens the window over the new capacity and keeps writing at the
//!    snapshot offset.
//!
//! The buffer's length is final once the sink is finished or dropped.

use std::fmt;
use std::io;

use crate::buffer::MemoryBuffer;
use crate::error::BufferError;
use crate::unit::CharUnit;

/// Streaming sink that appends to a borrowed [`MemoryBuffer`].
///
/// # Example
///
/// ```
/// use std::fmt::Write;
/// use weft_buffer::{BufferSink, MemoryBuffer};
///
/// let mut buffer = MemoryBuffer::<u8>::new();
/// let mut sink = BufferSink::new(&mut buffer);
/// write!(sink, "{}-{}", 4, 2).unwrap();
/// drop(sink);
/// assert_eq!(buffer.as_slice(), b"4-2");
/// ```
pub struct BufferSink<'b, C: CharUnit> {
    buffer: &'b mut MemoryBuffer<C>,
    /// Next unit to write, as an offset from the buffer start.
    cursor: usize,
    /// End of the writable window.
    end: usize,
    /// First growth failure, kept for the caller after `fmt::Error` erased it.
    error: Option<BufferError>,
}

impl<'b, C: CharUnit> BufferSink<'b, C> {
    /// Open a sink that appends after the buffer's current content.
    pub fn new(buffer: &'b mut MemoryBuffer<C>) -> Self {
        let cursor = buffer.len();
        let end = buffer.capacity();
        Self {
            buffer,
            cursor,
            end,
            error: None,
        }
    }

    /// Units committed to the buffer so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.cursor
    }

    /// Check if the buffer holds no units.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    /// Units that fit before the next growth.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.end - self.cursor
    }

    /// Append a run of units, growing the buffer as often as needed.
    pub fn write_units(&mut self, mut units: &[C]) -> Result<(), BufferError> {
        loop {
            let room = self.remaining();
            if units.len() <= room {
                self.put(units);
                return Ok(());
            }
            let (fits, pending) = units.split_at(room);
            self.put(fits);
            self.overflow(pending.len())?;
            units = pending;
        }
    }

    /// Growth failure recorded during writing, if any.
    pub fn error(&self) -> Option<&BufferError> {
        self.error.as_ref()
    }

    /// Finalise the buffer length and return it, or the first growth failure.
    pub fn finish(mut self) -> Result<usize, BufferError> {
        self.sync_len();
        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(self.cursor),
        }
    }

    fn put(&mut self, units: &[C]) {
        let start = self.cursor;
        let end = start + units.len();
        self.buffer.storage_mut()[start..end].copy_from_slice(units);
        self.cursor = end;
    }

    /// The window is exhausted and `pending` more units are waiting.
    fn overflow(&mut self, pending: usize) -> Result<(), BufferError> {
        let size = self.cursor;
        self.buffer.set_len(size);
        tracing::trace!(size, pending, "sink window exhausted");

        let grown = size
            .checked_add(pending)
            .ok_or(BufferError::CapacityOverflow)
            .and_then(|needed| self.buffer.grow_for(needed));
        if let Err(err) = grown {
            tracing::debug!(size, pending, error = %err, "sink growth failed");
            self.error.get_or_insert(err.clone());
            return Err(err);
        }
        self.end = self.buffer.capacity();
        Ok(())
    }

    #[inline]
    fn sync_len(&mut self) {
        self.buffer.set_len(self.cursor);
    }
}

impl<C: CharUnit> Drop for BufferSink<'_, C> {
    fn drop(&mut self) {
        self.sync_len();
    }
}

impl<C: CharUnit> fmt::Write for BufferSink<'_, C> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut result = Ok(());
        C::encode_str(s, |units| {
            if result.is_ok() {
                result = self.write_units(units);
            }
        });
        result.map_err(|_| fmt::Error)
    }
}

impl io::Write for BufferSink<'_, u8> {
    /// A growth failure after part of `buf` went in reports the part as a
    /// short write; the error surfaces on the next call.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let start = self.cursor;
        match self.write_units(buf) {
            Ok(()) => Ok(buf.len()),
            Err(_) if self.cursor > start => Ok(self.cursor - start),
            Err(err) => Err(err.into()),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.write_units(buf)?;
        Ok(())
    }

    /// End of output: publishes the length, never writes.
    fn flush(&mut self) -> io::Result<()> {
        self.sync_len();
        Ok(())
    }
}

impl<C: CharUnit> fmt::Debug for BufferSink<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferSink")
            .field("cursor", &self.cursor)
            .field("end", &self.end)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}
