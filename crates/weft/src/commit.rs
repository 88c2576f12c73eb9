//! Bulk commit of a formatted buffer to its destination.
//!
//! Operating systems cap the size of a single write (a signed 32-bit count on
//! the common primitives), so the buffer is handed over in chunks of at most
//! [`MAX_WRITE`] bytes, in order, each exactly once. The first failure stops
//! the commit; bytes already written stay written.

use std::io::{self, Write};

use weft_buffer::MemoryBuffer;

/// Largest single write issued to a destination.
pub const MAX_WRITE: usize = 2_147_483_647;

/// Sizes of the chunks a commit of `total` bytes is split into.
///
/// ```
/// use weft::{ChunkPlan, MAX_WRITE};
///
/// assert_eq!(ChunkPlan::new(5_000_000, MAX_WRITE).collect::<Vec<_>>(), [5_000_000]);
/// assert_eq!(ChunkPlan::new(10, 4).collect::<Vec<_>>(), [4, 4, 2]);
/// assert_eq!(ChunkPlan::new(0, 4).count(), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChunkPlan {
    remaining: usize,
    max_chunk: usize,
}

impl ChunkPlan {
    /// Plan `total` bytes in chunks of at most `max_chunk` (a zero limit is
    /// treated as one).
    pub fn new(total: usize, max_chunk: usize) -> Self {
        ChunkPlan {
            remaining: total,
            max_chunk: max_chunk.max(1),
        }
    }
}

impl Iterator for ChunkPlan {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let chunk = self.remaining.min(self.max_chunk);
        self.remaining -= chunk;
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.div_ceil(self.max_chunk);
        (n, Some(n))
    }
}

impl ExactSizeIterator for ChunkPlan {}

/// Write `bytes` to `dest` in chunks of at most `max_chunk` bytes.
///
/// Each chunk goes through `write_all`, so short writes are continued and
/// `Interrupted` is retried; any other error is returned at once.
pub fn commit_chunked<W: Write + ?Sized>(
    dest: &mut W,
    bytes: &[u8],
    max_chunk: usize,
) -> io::Result<()> {
    let plan = ChunkPlan::new(bytes.len(), max_chunk);
    tracing::debug!(bytes = bytes.len(), chunks = plan.len(), "committing output");

    let mut rest = bytes;
    for size in plan {
        let (chunk, tail) = rest.split_at(size);
        if let Err(err) = dest.write_all(chunk) {
            tracing::debug!(
                written = bytes.len() - rest.len(),
                error = %err,
                "commit failed",
            );
            return Err(err);
        }
        rest = tail;
    }
    Ok(())
}

/// Write the buffer's content to `dest` in chunks of at most [`MAX_WRITE`].
pub fn commit<W: Write + ?Sized>(dest: &mut W, buffer: &MemoryBuffer<u8>) -> io::Result<()> {
    commit_chunked(dest, buffer.as_slice(), MAX_WRITE)
}

#[cfg(test)]
mod tests;
