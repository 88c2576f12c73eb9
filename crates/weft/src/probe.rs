//! Compile-time formatter selection.
//!
//! Every argument handed to the engine is classified into exactly one
//! [`Category`]:
//!
//! 1. the type implements [`Format`]: it is laid out by the engine;
//! 2. otherwise, if it implements [`Display`](fmt::Display), it is rendered
//!    into a fresh buffer through a [`BufferSink`](weft_buffer::BufferSink)
//!    and the result is laid out as text;
//! 3. otherwise the program does not compile.
//!
//! The query is answered by method resolution on [`Probe`]. [`EngineKind`]
//! is implemented for `Probe<T>` and [`StreamKind`] for `&Probe<T>`, so for
//! `(&probe).formatter_kind()` the compiler tries the by-value candidate
//! first and only falls back to the autoref one. `Probe` implements no
//! formatting trait and has no `Deref`, so nothing else can answer.
//!
//! Resolution needs the concrete argument type, which is why it only runs
//! inside the [`argument!`](macro@crate::argument) and
//! [`category!`](macro@crate::category) macros.
//!
//! A type with neither trait is rejected:
//!
//! ```compile_fail
//! struct Opaque;
//!
//! let _ = weft::category!(Opaque);
//! ```
//!
//! Enums get no implicit rendering, numeric or otherwise:
//!
//! ```compile_fail
//! #[repr(u8)]
//! enum Level {
//!     Low = 1,
//! }
//!
//! let _ = weft::format!("{}", Level::Low);
//! ```
//!
//! With `Display` the same enum goes through the stream path:
//!
//! ```
//! use std::fmt;
//!
//! use weft::Category;
//!
//! enum Level {
//!     Low,
//! }
//!
//! impl fmt::Display for Level {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         f.write_str("low")
//!     }
//! }
//!
//! assert_eq!(weft::category!(Level::Low), Category::Stream);
//! assert_eq!(weft::format!("[{:>5}]", Level::Low).unwrap(), "[  low]");
//! ```

use std::any::type_name;
use std::fmt;

use weft_buffer::CharUnit;

use crate::argument::Argument;
use crate::format::Format;

/// Formatter category chosen for an argument type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// The type implements [`Format`].
    Engine,
    /// The type implements only [`Display`](fmt::Display).
    Stream,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Engine => "engine",
            Self::Stream => "stream",
        })
    }
}

/// Isolated wrapper the selector resolves methods on.
pub struct Probe<'a, T: ?Sized>(&'a T);

impl<'a, T: ?Sized> Probe<'a, T> {
    #[inline]
    pub fn new(value: &'a T) -> Self {
        Probe(value)
    }

    #[inline]
    pub fn value(&self) -> &'a T {
        self.0
    }
}

/// Matches by value: available when `T: Format`.
pub trait EngineKind {
    #[inline]
    fn formatter_kind(&self) -> EngineTag {
        EngineTag
    }
}

impl<T: Format + ?Sized> EngineKind for Probe<'_, T> {}

/// Matches after autoref: available when `T: Display`.
pub trait StreamKind {
    #[inline]
    fn formatter_kind(&self) -> StreamTag {
        StreamTag
    }
}

impl<T: fmt::Display + ?Sized> StreamKind for &Probe<'_, T> {}

/// Selection result for category 1.
#[derive(Copy, Clone, Debug)]
pub struct EngineTag;

impl EngineTag {
    #[inline]
    pub fn category(self) -> Category {
        Category::Engine
    }

    #[inline]
    pub fn argument<'a, T: Format, C: CharUnit>(self, probe: Probe<'a, T>) -> Argument<'a, C> {
        Argument::engine(probe.value())
    }
}

/// Selection result for category 2.
#[derive(Copy, Clone, Debug)]
pub struct StreamTag;

impl StreamTag {
    #[inline]
    pub fn category(self) -> Category {
        Category::Stream
    }

    #[inline]
    pub fn argument<'a, T: fmt::Display, C: CharUnit>(
        self,
        probe: Probe<'a, T>,
    ) -> Argument<'a, C> {
        Argument::stream(probe.value(), type_name::<T>())
    }
}
