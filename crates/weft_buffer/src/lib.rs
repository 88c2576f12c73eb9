//! Weft Buffer
//!
//! Output storage for the weft formatting engine.
//!
//! # Modules
//!
//! - [`buffer`]: [`MemoryBuffer`], the inline-first growable text buffer
//! - [`sink`]: [`BufferSink`], a `fmt::Write`/`io::Write` adapter that grows
//!   the buffer on demand
//! - [`unit`]: [`CharUnit`], the narrow (`u8`) and wide (`char`) units
//!
//! The sink is what lets code that renders itself through `Display` write
//! directly into engine storage, with no intermediate `String`.

pub mod buffer;
mod error;
pub mod sink;
pub mod unit;

pub use buffer::{grown_capacity, MemoryBuffer, INLINE_CAPACITY, MIN_GROWTH};
pub use error::BufferError;
pub use sink::BufferSink;
pub use unit::CharUnit;
