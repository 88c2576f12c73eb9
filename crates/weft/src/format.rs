//! The engine-aware formatting trait.
//!
//! Types implementing [`Format`] are laid out by the engine itself: they see
//! the parsed spec and write straight into the output buffer. Every other
//! type reaches the engine through `Display` (see
//! [`render_value`](crate::render_value)), and a type that implements both is
//! always formatted through `Format`.

use std::borrow::Cow;

use weft_buffer::{CharUnit, MemoryBuffer};
use weft_spec::FormatSpec;

use crate::error::FormatError;

/// Dedicated formatter for a value type.
///
/// # Example
///
/// ```
/// use weft::{Format, FormatError};
/// use weft_buffer::{CharUnit, MemoryBuffer};
/// use weft_spec::FormatSpec;
///
/// struct Celsius(i32);
///
/// impl Format for Celsius {
///     fn format<C: CharUnit>(
///         &self,
///         spec: &FormatSpec,
///         out: &mut MemoryBuffer<C>,
///     ) -> Result<(), FormatError> {
///         self.0.format(spec, out)?;
///         out.push_str("°C")?;
///         Ok(())
///     }
/// }
///
/// assert_eq!(weft::format!("{:>4}", Celsius(21)).unwrap(), "  21°C");
/// ```
pub trait Format {
    /// Append this value to `out` as directed by `spec`.
    fn format<C: CharUnit>(
        &self,
        spec: &FormatSpec,
        out: &mut MemoryBuffer<C>,
    ) -> Result<(), FormatError>;
}

impl<T: Format + ?Sized> Format for &T {
    #[inline]
    fn format<C: CharUnit>(
        &self,
        spec: &FormatSpec,
        out: &mut MemoryBuffer<C>,
    ) -> Result<(), FormatError> {
        (**self).format(spec, out)
    }
}

impl<T: Format + ?Sized> Format for &mut T {
    #[inline]
    fn format<C: CharUnit>(
        &self,
        spec: &FormatSpec,
        out: &mut MemoryBuffer<C>,
    ) -> Result<(), FormatError> {
        (**self).format(spec, out)
    }
}

impl<T: Format + ?Sized> Format for Box<T> {
    #[inline]
    fn format<C: CharUnit>(
        &self,
        spec: &FormatSpec,
        out: &mut MemoryBuffer<C>,
    ) -> Result<(), FormatError> {
        (**self).format(spec, out)
    }
}

impl Format for Cow<'_, str> {
    #[inline]
    fn format<C: CharUnit>(
        &self,
        spec: &FormatSpec,
        out: &mut MemoryBuffer<C>,
    ) -> Result<(), FormatError> {
        self.as_ref().format(spec, out)
    }
}

/// Object-safe view of [`Format`] for one unit type.
pub(crate) trait ErasedFormat<C: CharUnit> {
    fn format_erased(&self, spec: &FormatSpec, out: &mut MemoryBuffer<C>)
        -> Result<(), FormatError>;
}

impl<T: Format, C: CharUnit> ErasedFormat<C> for T {
    fn format_erased(
        &self,
        spec: &FormatSpec,
        out: &mut MemoryBuffer<C>,
    ) -> Result<(), FormatError> {
        self.format(spec, out)
    }
}
