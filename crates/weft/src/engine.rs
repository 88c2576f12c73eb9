//! Template formatting.
//!
//! Drives a parsed template over a list of [`Argument`]s: literal runs are
//! copied, each field is formatted by the argument's chosen formatter.

use weft_buffer::{CharUnit, MemoryBuffer};
use weft_spec::{Piece, Template};

use crate::argument::Argument;
use crate::error::FormatError;

/// Format `template` with `args`, appending to `out`.
///
/// On failure `out` is restored to its length before the call.
pub fn vformat_to<C: CharUnit>(
    out: &mut MemoryBuffer<C>,
    template: &str,
    args: &[Argument<'_, C>],
) -> Result<(), FormatError> {
    let start = out.len();
    let result = format_pieces(out, template, args);
    if result.is_err() {
        out.resize(start);
    }
    result
}

/// Format `template` with `args` into a new `String`.
pub fn vformat(template: &str, args: &[Argument<'_, u8>]) -> Result<String, FormatError> {
    let mut out = MemoryBuffer::new();
    vformat_to(&mut out, template, args)?;
    Ok(out.to_string_lossy().into_owned())
}

fn format_pieces<C: CharUnit>(
    out: &mut MemoryBuffer<C>,
    template: &str,
    args: &[Argument<'_, C>],
) -> Result<(), FormatError> {
    let template = Template::parse(template)?;
    let count = args.len();
    if template.required_args() > count {
        return Err(FormatError::MissingArgument {
            index: template.required_args() - 1,
            count,
        });
    }

    out.try_reserve(out.len().saturating_add(template.literal_len()))?;

    for piece in template.pieces() {
        match piece {
            Piece::Literal(text) => out.push_str(text)?,
            Piece::Field(field) => {
                let arg = args.get(field.index).ok_or(FormatError::MissingArgument {
                    index: field.index,
                    count,
                })?;
                arg.format(&field.spec, out)?;
            }
        }
    }
    Ok(())
}
