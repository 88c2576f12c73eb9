//! Type-erased format arguments.

use std::fmt;

use weft_buffer::{CharUnit, MemoryBuffer};
use weft_spec::FormatSpec;

use crate::error::FormatError;
use crate::format::{ErasedFormat, Format};
use crate::probe::Category;
use crate::stream::format_streamed;

/// One argument of a formatting call, with its formatter already chosen.
///
/// Built by [`argument!`](macro@crate::argument), which picks the formatter at
/// compile time; see [`crate::probe`].
#[derive(Copy, Clone)]
pub struct Argument<'a, C: CharUnit> {
    kind: Kind<'a, C>,
}

#[derive(Copy, Clone)]
enum Kind<'a, C: CharUnit> {
    Engine(&'a dyn ErasedFormat<C>),
    Stream {
        value: &'a dyn fmt::Display,
        type_name: &'static str,
    },
}

impl<'a, C: CharUnit> Argument<'a, C> {
    /// Argument formatted by its [`Format`] impl.
    #[inline]
    pub fn engine<T: Format>(value: &'a T) -> Self {
        Argument {
            kind: Kind::Engine(value),
        }
    }

    /// Argument rendered through `Display` and laid out as text.
    #[inline]
    pub fn stream<T: fmt::Display>(value: &'a T, type_name: &'static str) -> Self {
        Argument {
            kind: Kind::Stream { value, type_name },
        }
    }

    pub fn category(&self) -> Category {
        match self.kind {
            Kind::Engine(_) => Category::Engine,
            Kind::Stream { .. } => Category::Stream,
        }
    }

    /// Append the argument to `out` as directed by `spec`.
    pub fn format(&self, spec: &FormatSpec, out: &mut MemoryBuffer<C>) -> Result<(), FormatError> {
        match self.kind {
            Kind::Engine(value) => value.format_erased(spec, out),
            Kind::Stream { value, type_name } => format_streamed(value, type_name, spec, out),
        }
    }
}

impl<C: CharUnit> fmt::Debug for Argument<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Argument");
        debug.field("category", &self.category());
        if let Kind::Stream { type_name, .. } = self.kind {
            debug.field("type_name", &type_name);
        }
        debug.finish()
    }
}
