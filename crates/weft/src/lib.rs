//! Weft
//!
//! A buffer-based formatting engine that accepts any value implementing
//! `Display`, alongside types with a dedicated engine formatter.
//!
//! # Architecture
//!
//! ```text
//! template + args → argument! (probe picks Format or Display)
//!                 → vformat_to (MemoryBuffer) → commit (chunked io::Write)
//! ```
//!
//! - [`probe`]: compile-time choice between [`Format`] and the `Display`
//!   bridge
//! - [`Format`]: engine-aware formatting; builtin for strings, `bool`,
//!   `char`, integers and floats
//! - [`render_value`] / [`format_streamed`]: `Display` rendered through a
//!   [`BufferSink`](weft_buffer::BufferSink) straight into engine storage
//! - [`vformat_to`] / [`vformat`]: template formatting
//! - [`commit`] / [`commit_chunked`]: hand a buffer to its destination in
//!   bounded writes
//! - [`vprint`] / [`print_with`]: formatting plus commit
//!
//! # Usage
//!
//! ```
//! use std::fmt;
//!
//! struct Version(u32, u32);
//!
//! impl fmt::Display for Version {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(f, "v{}.{}", self.0, self.1)
//!     }
//! }
//!
//! let mut out = Vec::new();
//! weft::print!(&mut out, "[{:<8}] {:>4}%", Version(1, 2), 97).unwrap();
//! assert_eq!(out, b"[v1.2    ]   97%");
//! ```
//!
//! # Debugging
//!
//! Buffer growth, stream routing and commits are traced with `tracing`.
//! Call [`init_tracing`] and set `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=weft=debug,weft_buffer=trace cargo test
//! ```

mod argument;
mod builtin;
mod commit;
mod config;
mod engine;
mod error;
mod format;
mod layout;
mod macros;
mod print;
pub mod probe;
mod stream;

use std::sync::Once;

pub use argument::Argument;
pub use commit::{commit, commit_chunked, ChunkPlan, MAX_WRITE};
pub use config::PrintConfig;
pub use engine::{vformat, vformat_to};
pub use error::{Error, FormatError};
pub use format::Format;
pub use layout::format_units;
pub use print::{print_with, vprint};
pub use probe::Category;
pub use stream::{format_streamed, render_value};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debug output.
///
/// Call this early to enable tracing output. Controlled by `RUST_LOG`:
/// - `RUST_LOG=weft=debug` - commits and growth failures
/// - `RUST_LOG=weft_buffer=trace` - every reallocation and sink overflow
///
/// Does nothing when `RUST_LOG` is unset. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
