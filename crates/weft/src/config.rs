//! Print configuration.

use weft_buffer::INLINE_CAPACITY;

use crate::commit::MAX_WRITE;

/// Configuration for the print entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintConfig {
    /// Largest single write issued to the destination.
    /// Defaults to [`MAX_WRITE`].
    pub max_write: usize,

    /// Capacity reserved for the output buffer before formatting.
    /// Defaults to the inline capacity, so short output never allocates.
    pub initial_capacity: usize,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            max_write: MAX_WRITE,
            initial_capacity: INLINE_CAPACITY,
        }
    }
}

impl PrintConfig {
    /// Create a config with the specified write limit.
    pub fn with_max_write(max_write: usize) -> Self {
        Self {
            max_write,
            ..Default::default()
        }
    }

    /// Create a config with the specified initial capacity.
    pub fn with_initial_capacity(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            ..Default::default()
        }
    }
}
