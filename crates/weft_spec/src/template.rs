//! Template string parser.
//!
//! Splits a template like `"x = {:>8}, y = {1}"` into literal runs and
//! replacement fields. Escapes are `{{` and `}}`. Argument indices are either
//! all automatic (`{}`) or all explicit (`{0}`); mixing the two is an error.
//!
//! Literal pieces borrow from the template, so parsing allocates only the
//! piece list itself.

use thiserror::Error;

use crate::spec::{parse_format_spec, FormatSpec, FormatSpecError};

/// A replacement field with its resolved argument index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    /// Position of the argument this field formats.
    pub index: usize,
    /// Parsed spec after the colon, [`FormatSpec::EMPTY`] if absent.
    pub spec: FormatSpec,
}

/// One piece of a parsed template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Piece<'t> {
    /// Text copied verbatim.
    Literal(&'t str),
    /// A replacement field.
    Field(Field),
}

/// A parsed template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template<'t> {
    pieces: Vec<Piece<'t>>,
    required_args: usize,
}

impl<'t> Template<'t> {
    /// Parse a template string.
    pub fn parse(template: &'t str) -> Result<Self, TemplateError> {
        parse_template(template)
    }

    /// Pieces in output order.
    pub fn pieces(&self) -> &[Piece<'t>] {
        &self.pieces
    }

    /// Number of arguments needed to satisfy every field (highest index + 1).
    pub fn required_args(&self) -> usize {
        self.required_args
    }

    /// Total length of the literal text, a lower bound for the output size.
    pub fn literal_len(&self) -> usize {
        self.pieces
            .iter()
            .map(|piece| match piece {
                Piece::Literal(text) => text.len(),
                Piece::Field(_) => 0,
            })
            .sum()
    }
}

/// Error from parsing a template string. Offsets are byte positions in the
/// template.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// `{` without a matching `}`.
    #[error("unclosed '{{' at byte {0}")]
    Unclosed(usize),
    /// `}` that does not close a field and is not doubled.
    #[error("unmatched '}}' at byte {0}")]
    UnmatchedClose(usize),
    /// Field index is not a number, or is too large to count arguments up to.
    #[error("invalid argument index '{text}' at byte {offset}")]
    InvalidIndex { offset: usize, text: String },
    /// `{0}` after `{}`.
    #[error("cannot switch from automatic to manual argument indexing")]
    SwitchToManual,
    /// `{}` after `{0}`.
    #[error("cannot switch from manual to automatic argument indexing")]
    SwitchToAutomatic,
    /// The spec after the colon is malformed.
    #[error("invalid format spec at byte {offset}: {source}")]
    Spec {
        offset: usize,
        #[source]
        source: FormatSpecError,
    },
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum Indexing {
    Automatic,
    Manual,
}

/// Parse a template string into literal and field pieces.
///
/// # Examples
///
/// ```
/// use weft_spec::{parse_template, Piece};
///
/// let template = parse_template("{{{}}}").unwrap();
/// assert_eq!(template.pieces().len(), 3);
/// assert_eq!(template.pieces()[0], Piece::Literal("{"));
/// assert_eq!(template.required_args(), 1);
/// ```
pub fn parse_template(template: &str) -> Result<Template<'_>, TemplateError> {
    let bytes = template.as_bytes();
    let mut pieces = Vec::new();
    let mut indexing = None;
    let mut next_auto = 0;
    let mut required_args = 0;
    let mut literal_start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            b'{' => {
                push_literal(&mut pieces, &template[literal_start..pos]);
                if bytes.get(pos + 1) == Some(&b'{') {
                    pieces.push(Piece::Literal(&template[pos..=pos]));
                    pos += 2;
                } else {
                    let body_start = pos + 1;
                    let close = template[body_start..]
                        .find(['{', '}'])
                        .map(|i| body_start + i)
                        .filter(|&i| bytes[i] == b'}')
                        .ok_or(TemplateError::Unclosed(pos))?;
                    let field = parse_field(
                        &template[body_start..close],
                        pos,
                        &mut indexing,
                        &mut next_auto,
                    )?;
                    required_args = required_args.max(field.index + 1);
                    pieces.push(Piece::Field(field));
                    pos = close + 1;
                }
                literal_start = pos;
            }
            b'}' => {
                push_literal(&mut pieces, &template[literal_start..pos]);
                if bytes.get(pos + 1) != Some(&b'}') {
                    return Err(TemplateError::UnmatchedClose(pos));
                }
                pieces.push(Piece::Literal(&template[pos..=pos]));
                pos += 2;
                literal_start = pos;
            }
            _ => pos += 1,
        }
    }
    push_literal(&mut pieces, &template[literal_start..]);

    Ok(Template {
        pieces,
        required_args,
    })
}

fn push_literal<'t>(pieces: &mut Vec<Piece<'t>>, text: &'t str) {
    if !text.is_empty() {
        pieces.push(Piece::Literal(text));
    }
}

fn parse_field(
    body: &str,
    offset: usize,
    indexing: &mut Option<Indexing>,
    next_auto: &mut usize,
) -> Result<Field, TemplateError> {
    let (index_text, spec_text) = match body.split_once(':') {
        Some((index, spec)) => (index, Some(spec)),
        None => (body, None),
    };

    let index = if index_text.is_empty() {
        if *indexing == Some(Indexing::Manual) {
            return Err(TemplateError::SwitchToAutomatic);
        }
        *indexing = Some(Indexing::Automatic);
        let index = *next_auto;
        *next_auto += 1;
        index
    } else {
        if *indexing == Some(Indexing::Automatic) {
            return Err(TemplateError::SwitchToManual);
        }
        *indexing = Some(Indexing::Manual);
        // The largest index leaves no room for an argument count.
        index_text
            .parse::<usize>()
            .ok()
            .filter(|&index| index < usize::MAX)
            .ok_or_else(|| TemplateError::InvalidIndex {
                offset,
                text: index_text.to_string(),
            })?
    };

    let spec = match spec_text {
        Some(text) => {
            parse_format_spec(text).map_err(|source| TemplateError::Spec { offset, source })?
        }
        None => FormatSpec::EMPTY,
    };

    Ok(Field { index, spec })
}
