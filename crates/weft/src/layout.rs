//! Field layout: fill, width and alignment.
//!
//! [`format_units`] is the engine's string formatter. Builtin text values and
//! values rendered through `Display` both end up here, so `{:>8}` lays out a
//! stream-rendered value exactly like a `&str`.

use weft_buffer::{BufferError, CharUnit, MemoryBuffer};
use weft_spec::{Align, FormatSpec};

use crate::error::FormatError;

/// Write `units` as a textual field: precision truncates, width pads, text
/// is left-aligned unless the spec says otherwise.
pub fn format_units<C: CharUnit>(
    units: &[C],
    spec: &FormatSpec,
    out: &mut MemoryBuffer<C>,
) -> Result<(), FormatError> {
    check_textual(spec, "string")?;
    let body = match spec.precision {
        Some(max) => C::truncate_chars(units, max),
        None => units,
    };
    pad_with(out, C::count_chars(body), spec, Align::Left, |out| {
        out.extend_from_slice(body)
    })?;
    Ok(())
}

/// Same as [`format_units`] for text held in a `&str`.
pub(crate) fn format_text<C: CharUnit>(
    text: &str,
    spec: &FormatSpec,
    value_kind: &'static str,
    out: &mut MemoryBuffer<C>,
) -> Result<(), FormatError> {
    check_textual(spec, value_kind)?;
    let body = match spec.precision {
        Some(max) => text.char_indices().nth(max).map_or(text, |(end, _)| &text[..end]),
        None => text,
    };
    pad_with(out, body.chars().count(), spec, Align::Left, |out| out.push_str(body))?;
    Ok(())
}

/// Reject numeric presentation types and flags for a textual value.
fn check_textual(spec: &FormatSpec, value_kind: &'static str) -> Result<(), FormatError> {
    if let Some(format_type) = spec.format_type.filter(|t| t.is_numeric()) {
        return Err(FormatError::InvalidType {
            format_type: format_type.name(),
            value_kind,
        });
    }
    if spec.sign.is_some() || spec.alternate || spec.zero_pad {
        return Err(FormatError::NumericFlag { value_kind });
    }
    Ok(())
}

/// Pad a body of `body_width` code points to the spec's width.
///
/// `write_body` emits the body itself; fill is written around it according to
/// the spec's alignment, or `default_align` when none is given. Room for the
/// padding and the body is reserved before anything is written, so a width
/// the buffer cannot hold fails without partial output.
pub(crate) fn pad_with<C: CharUnit>(
    out: &mut MemoryBuffer<C>,
    body_width: usize,
    spec: &FormatSpec,
    default_align: Align,
    write_body: impl FnOnce(&mut MemoryBuffer<C>) -> Result<(), BufferError>,
) -> Result<(), BufferError> {
    let padding = spec.width.map_or(0, |width| width.saturating_sub(body_width));
    if padding == 0 {
        return write_body(out);
    }

    let fill = spec.fill.unwrap_or(' ');
    let field_units = C::char_units(fill)
        .checked_mul(padding)
        .and_then(|units| units.checked_add(body_width))
        .ok_or(BufferError::CapacityOverflow)?;
    out.reserve_additional(field_units)?;

    let (left, right) = match spec.align.unwrap_or(default_align) {
        Align::Left => (0, padding),
        Align::Right => (padding, 0),
        Align::Center => (padding / 2, padding - padding / 2),
    };
    out.push_repeated(fill, left)?;
    write_body(out)?;
    out.push_repeated(fill, right)
}
