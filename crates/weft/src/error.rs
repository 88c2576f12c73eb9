//! Error types for formatting and printing.
//!
//! Every error is passed through from the layer that produced it; nothing in
//! this crate retries or recovers.

use std::fmt;
use std::io;

use thiserror::Error;
use weft_buffer::BufferError;
use weft_spec::TemplateError;

/// Failure while formatting into a buffer.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The template or one of its specs is malformed.
    #[error(transparent)]
    Template(#[from] TemplateError),
    /// A field refers to an argument that was not supplied.
    #[error("argument {index} requested but only {count} supplied")]
    MissingArgument { index: usize, count: usize },
    /// The presentation type does not apply to the value.
    #[error("{format_type} format is not supported for {value_kind} values")]
    InvalidType {
        format_type: &'static str,
        value_kind: &'static str,
    },
    /// Precision given for a value that has none.
    #[error("precision is not allowed for {value_kind} values")]
    PrecisionNotAllowed { value_kind: &'static str },
    /// Sign, `#` or `0` flag given for a textual value.
    #[error("sign, '#' and '0' flags require a numeric value, got {value_kind}")]
    NumericFlag { value_kind: &'static str },
    /// The value's `Display` impl reported an error.
    #[error("value rendering failed")]
    Render(#[from] fmt::Error),
    /// The output buffer could not grow.
    #[error(transparent)]
    Alloc(#[from] BufferError),
}

/// Failure of a print entry point.
#[derive(Debug, Error)]
pub enum Error {
    /// Formatting failed; nothing was written to the destination.
    #[error(transparent)]
    Format(#[from] FormatError),
    /// The destination rejected a write. Bytes written before the failure stay
    /// written.
    #[error("write to destination failed: {0}")]
    Io(#[from] io::Error),
}
