//! The `Display` path.
//!
//! A value without a [`Format`](crate::Format) impl renders itself through
//! its `Display` impl into a [`BufferSink`]. The rendered units are then laid
//! out by [`format_units`] like any other text, so width, fill and alignment
//! behave the same on both paths.

use std::fmt::{self, Write as _};

use weft_buffer::{BufferSink, CharUnit, MemoryBuffer};
use weft_spec::FormatSpec;

use crate::error::FormatError;
use crate::layout::format_units;

/// Render `value` through `Display`, appending to `buffer`.
///
/// Returns the number of units appended. A growth failure takes precedence
/// over the `fmt::Error` it causes, so callers see the allocation error.
///
/// ```
/// use weft::render_value;
/// use weft_buffer::MemoryBuffer;
///
/// let mut buffer = MemoryBuffer::<u8>::new();
/// buffer.push_str("id=").unwrap();
/// assert_eq!(render_value(&mut buffer, &1234).unwrap(), 4);
/// assert_eq!(buffer.to_string_lossy(), "id=1234");
/// ```
pub fn render_value<T, C>(buffer: &mut MemoryBuffer<C>, value: &T) -> Result<usize, FormatError>
where
    T: fmt::Display + ?Sized,
    C: CharUnit,
{
    let start = buffer.len();
    let mut sink = BufferSink::new(buffer);
    let rendered = write!(sink, "{value}");
    let end = sink.finish()?;
    rendered?;
    Ok(end - start)
}

/// Category 2 formatter: render into a fresh buffer, then lay the result out
/// as text.
pub fn format_streamed<C: CharUnit>(
    value: &dyn fmt::Display,
    type_name: &str,
    spec: &FormatSpec,
    out: &mut MemoryBuffer<C>,
) -> Result<(), FormatError> {
    tracing::trace!(type_name, "formatting through Display");

    let mut rendered = MemoryBuffer::new();
    render_value(&mut rendered, value)?;
    format_units(rendered.as_slice(), spec, out)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "Tests can panic")]

    use pretty_assertions::assert_eq;
    use weft_buffer::{BufferError, INLINE_CAPACITY};
    use weft_spec::parse_format_spec;

    use super::*;

    struct Point(i32, i32);

    impl fmt::Display for Point {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "({}, {})", self.0, self.1)
        }
    }

    struct Failing;

    impl fmt::Display for Failing {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("partial")?;
            Err(fmt::Error)
        }
    }

    struct Long(usize);

    impl fmt::Display for Long {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            for i in 0..self.0 {
                write!(f, "{}", i % 10)?;
            }
            Ok(())
        }
    }

    fn streamed(value: &dyn fmt::Display, spec: &str) -> Result<String, FormatError> {
        let spec = parse_format_spec(spec).unwrap();
        let mut out = MemoryBuffer::<u8>::new();
        format_streamed(value, "test", &spec, &mut out)?;
        Ok(out.to_string_lossy().into_owned())
    }

    #[test]
    fn render_appends_after_existing_content() {
        let mut buffer = MemoryBuffer::<u8>::new();
        buffer.push_str("p=").unwrap();
        assert_eq!(render_value(&mut buffer, &Point(1, -2)).unwrap(), 7);
        assert_eq!(buffer.to_string_lossy(), "p=(1, -2)");
    }

    #[test]
    fn render_grows_past_inline_capacity() {
        let mut buffer = MemoryBuffer::<u8>::new();
        let n = INLINE_CAPACITY * 5 + 3;
        assert_eq!(render_value(&mut buffer, &Long(n)).unwrap(), n);
        assert_eq!(buffer.len(), n);
        assert!(buffer.spilled());
        assert!(buffer.as_slice().starts_with(b"0123456789"));
    }

    #[test]
    fn render_failure_is_passed_through() {
        let mut buffer = MemoryBuffer::<u8>::new();
        assert_eq!(
            render_value(&mut buffer, &Failing),
            Err(FormatError::Render(fmt::Error))
        );
    }

    #[test]
    fn growth_failure_wins_over_render_error() {
        let mut buffer = MemoryBuffer::<char>::new();
        buffer.set_max_capacity(INLINE_CAPACITY);
        assert_eq!(
            render_value(&mut buffer, &Long(INLINE_CAPACITY + 1)),
            Err(FormatError::Alloc(BufferError::CapacityOverflow))
        );
        assert_eq!(buffer.len(), INLINE_CAPACITY);
    }

    #[test]
    fn streamed_value_gets_layout() {
        assert_eq!(streamed(&Point(3, 4), "").unwrap(), "(3, 4)");
        assert_eq!(streamed(&Point(3, 4), ">8").unwrap(), "  (3, 4)");
        assert_eq!(streamed(&Point(3, 4), "*^10").unwrap(), "**(3, 4)**");
        assert_eq!(streamed(&Point(3, 4), ".2").unwrap(), "(3");
    }

    #[test]
    fn streamed_failure_writes_nothing() {
        let spec = FormatSpec::EMPTY;
        let mut out = MemoryBuffer::<u8>::new();
        out.push_str("kept").unwrap();
        assert_eq!(
            format_streamed(&Failing, "Failing", &spec, &mut out),
            Err(FormatError::Render(fmt::Error))
        );
        assert_eq!(out.to_string_lossy(), "kept");
    }

    #[test]
    fn streamed_rejects_numeric_flags() {
        assert_eq!(
            streamed(&Point(0, 0), "+"),
            Err(FormatError::NumericFlag {
                value_kind: "string"
            })
        );
    }

    #[test]
    fn streamed_into_wide_buffer() {
        let spec = parse_format_spec("<9").unwrap();
        let mut out = MemoryBuffer::<char>::new();
        format_streamed(&"ŧėxt", "&str", &spec, &mut out).unwrap();
        assert_eq!(out.len(), 9);
        assert_eq!(out.to_string_lossy(), "ŧėxt     ");
    }
}
