//! Buffer growth errors.

use std::alloc::Layout;
use std::io;

use smallvec::CollectionAllocErr;
use thiserror::Error;

/// Failure to grow a buffer's storage.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BufferError {
    /// The requested capacity does not fit in the address space or exceeds
    /// the buffer's limit.
    #[error("buffer capacity overflow")]
    CapacityOverflow,
    /// The allocator refused the request.
    #[error("buffer allocation of {} bytes failed", .layout.size())]
    Alloc { layout: Layout },
}

impl From<CollectionAllocErr> for BufferError {
    fn from(err: CollectionAllocErr) -> Self {
        match err {
            CollectionAllocErr::CapacityOverflow => Self::CapacityOverflow,
            CollectionAllocErr::AllocErr { layout } => Self::Alloc { layout },
        }
    }
}

impl From<BufferError> for io::Error {
    fn from(err: BufferError) -> Self {
        io::Error::new(io::ErrorKind::OutOfMemory, err)
    }
}
