//! Builtin [`Format`] impls for primitives and strings.
//!
//! Supports:
//! - Integer formatting: decimal, binary, octal, hex, sign, alternate, zero-pad
//! - Float formatting: default, scientific, fixed-point, percentage, precision
//! - Text (`str`, `String`, `bool`, `char`): precision truncation, width, alignment
//!
//! Enums get nothing here. An enum is formattable only through its own
//! `Display` or `Format` impl.

use std::fmt;

use weft_buffer::{CharUnit, MemoryBuffer};
use weft_spec::{Align, FormatSpec, FormatType, Sign};

use crate::error::FormatError;
use crate::format::Format;
use crate::layout::{format_text, pad_with};

impl Format for str {
    fn format<C: CharUnit>(
        &self,
        spec: &FormatSpec,
        out: &mut MemoryBuffer<C>,
    ) -> Result<(), FormatError> {
        format_text(self, spec, "string", out)
    }
}

impl Format for String {
    fn format<C: CharUnit>(
        &self,
        spec: &FormatSpec,
        out: &mut MemoryBuffer<C>,
    ) -> Result<(), FormatError> {
        format_text(self, spec, "string", out)
    }
}

impl Format for bool {
    fn format<C: CharUnit>(
        &self,
        spec: &FormatSpec,
        out: &mut MemoryBuffer<C>,
    ) -> Result<(), FormatError> {
        let text = if *self { "true" } else { "false" };
        format_text(text, spec, "bool", out)
    }
}

impl Format for char {
    fn format<C: CharUnit>(
        &self,
        spec: &FormatSpec,
        out: &mut MemoryBuffer<C>,
    ) -> Result<(), FormatError> {
        let mut encoded = [0; 4];
        format_text(self.encode_utf8(&mut encoded), spec, "char", out)
    }
}

macro_rules! impl_format_unsigned {
    ($($ty:ty),*) => {$(
        impl Format for $ty {
            #[allow(
                clippy::cast_lossless,
                clippy::unnecessary_cast,
                reason = "usize has no From impl into u128"
            )]
            fn format<C: CharUnit>(
                &self,
                spec: &FormatSpec,
                out: &mut MemoryBuffer<C>,
            ) -> Result<(), FormatError> {
                format_int(false, *self as u128, spec, out)
            }
        }
    )*};
}

macro_rules! impl_format_signed {
    ($($ty:ty),*) => {$(
        impl Format for $ty {
            #[allow(
                clippy::cast_lossless,
                clippy::unnecessary_cast,
                reason = "usize has no From impl into u128"
            )]
            fn format<C: CharUnit>(
                &self,
                spec: &FormatSpec,
                out: &mut MemoryBuffer<C>,
            ) -> Result<(), FormatError> {
                format_int(*self < 0, self.unsigned_abs() as u128, spec, out)
            }
        }
    )*};
}

impl_format_unsigned!(u8, u16, u32, u64, u128, usize);
impl_format_signed!(i8, i16, i32, i64, i128, isize);

/// Float types accepted by [`format_float`].
trait FloatValue: Copy + fmt::Display + fmt::LowerExp + fmt::UpperExp {
    fn is_negative(self) -> bool;
    fn magnitude(self) -> Self;
    fn percent(self) -> Self;
}

macro_rules! impl_format_float {
    ($($ty:ty),*) => {$(
        impl FloatValue for $ty {
            #[inline]
            fn is_negative(self) -> bool {
                self.is_sign_negative() && !self.is_nan()
            }

            #[inline]
            fn magnitude(self) -> Self {
                self.abs()
            }

            #[inline]
            fn percent(self) -> Self {
                self * 100.0
            }
        }

        impl Format for $ty {
            fn format<C: CharUnit>(
                &self,
                spec: &FormatSpec,
                out: &mut MemoryBuffer<C>,
            ) -> Result<(), FormatError> {
                format_float(*self, spec, out)
            }
        }
    )*};
}

impl_format_float!(f32, f64);

/// Format an integer given as sign and magnitude.
fn format_int<C: CharUnit>(
    is_negative: bool,
    magnitude: u128,
    spec: &FormatSpec,
    out: &mut MemoryBuffer<C>,
) -> Result<(), FormatError> {
    if spec.precision.is_some() {
        return Err(FormatError::PrecisionNotAllowed {
            value_kind: "integer",
        });
    }

    let (digits, prefix) = match spec.format_type {
        None | Some(FormatType::Decimal) => (magnitude.to_string(), ""),
        Some(FormatType::Binary) => (format!("{magnitude:b}"), "0b"),
        Some(FormatType::Octal) => (format!("{magnitude:o}"), "0o"),
        Some(FormatType::Hex) => (format!("{magnitude:x}"), "0x"),
        Some(FormatType::HexUpper) => (format!("{magnitude:X}"), "0X"),
        Some(other) => {
            return Err(FormatError::InvalidType {
                format_type: other.name(),
                value_kind: "integer",
            })
        }
    };
    let prefix = if spec.alternate { prefix } else { "" };

    write_number(out, sign_str(is_negative, spec), prefix, &digits, spec)
}

/// Format a float value according to the spec.
fn format_float<F: FloatValue, C: CharUnit>(
    f: F,
    spec: &FormatSpec,
    out: &mut MemoryBuffer<C>,
) -> Result<(), FormatError> {
    let abs_f = f.magnitude();

    let digits = match spec.format_type {
        None => match spec.precision {
            Some(prec) => format!("{abs_f:.prec$}"),
            None => format!("{abs_f}"),
        },
        Some(FormatType::Fixed) => {
            let prec = spec.precision.unwrap_or(6);
            format!("{abs_f:.prec$}")
        }
        Some(FormatType::Exp) => match spec.precision {
            Some(prec) => format!("{abs_f:.prec$e}"),
            None => format!("{abs_f:e}"),
        },
        Some(FormatType::ExpUpper) => match spec.precision {
            Some(prec) => format!("{abs_f:.prec$E}"),
            None => format!("{abs_f:E}"),
        },
        Some(FormatType::Percent) => {
            let pct = abs_f.percent();
            match spec.precision {
                Some(prec) => format!("{pct:.prec$}%"),
                None => format!("{pct}%"),
            }
        }
        Some(other) => {
            return Err(FormatError::InvalidType {
                format_type: other.name(),
                value_kind: "float",
            })
        }
    };

    write_number(out, sign_str(f.is_negative(), spec), "", &digits, spec)
}

/// Write `sign prefix digits`, zero-padded between prefix and digits when the
/// spec asks for it, otherwise padded by fill (right-aligned by default).
fn write_number<C: CharUnit>(
    out: &mut MemoryBuffer<C>,
    sign: &str,
    prefix: &str,
    digits: &str,
    spec: &FormatSpec,
) -> Result<(), FormatError> {
    let body_width = sign.len() + prefix.len() + digits.len();

    if spec.zero_pad {
        let zeros = spec.width.map_or(0, |width| width.saturating_sub(body_width));
        out.reserve_additional(body_width.saturating_add(zeros))?;
        out.push_str(sign)?;
        out.push_str(prefix)?;
        out.push_repeated('0', zeros)?;
        out.push_str(digits)?;
        return Ok(());
    }

    pad_with(out, body_width, spec, Align::Right, |out| {
        out.push_str(sign)?;
        out.push_str(prefix)?;
        out.push_str(digits)
    })?;
    Ok(())
}

/// Build the sign prefix for a numeric value.
fn sign_str(is_negative: bool, spec: &FormatSpec) -> &'static str {
    if is_negative {
        "-"
    } else {
        match spec.sign {
            Some(Sign::Plus) => "+",
            Some(Sign::Space) => " ",
            _ => "",
        }
    }
}
