//! Format specification parser for replacement fields.
//!
//! Parses the spec syntax `[[fill]align][sign][#][0][width][.precision][type]`
//! found after the colon in fields like `{:>10.2f}`.
//!
//! The parsed result ([`FormatSpec`]) is consumed by:
//! - Builtin formatters: integer, float, and string layout
//! - The stream formatter: fill, width and alignment of `Display` output

use thiserror::Error;

/// Parsed format specification of a single replacement field.
///
/// All fields are optional. An empty spec `{:}` or a bare `{}` produces
/// [`FormatSpec::EMPTY`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FormatSpec {
    /// Padding character (default: space).
    pub fill: Option<char>,
    /// Alignment direction.
    pub align: Option<Align>,
    /// Sign display for numbers.
    pub sign: Option<Sign>,
    /// Alternate form (`#`): adds `0b`/`0o`/`0x` prefix.
    pub alternate: bool,
    /// Zero-pad (`0`): pads with zeros between sign and digits.
    pub zero_pad: bool,
    /// Minimum field width, in code points.
    pub width: Option<usize>,
    /// Decimal places (floats) or max length (strings).
    pub precision: Option<usize>,
    /// Presentation type.
    pub format_type: Option<FormatType>,
}

impl FormatSpec {
    /// A spec with no formatting options set.
    pub const EMPTY: Self = Self {
        fill: None,
        align: None,
        sign: None,
        alternate: false,
        zero_pad: false,
        width: None,
        precision: None,
        format_type: None,
    };

    /// Returns `true` if no option is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Alignment direction for field padding.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Align {
    /// `<`: pad on the right.
    Left,
    /// `^`: pad on both sides, extra fill goes right.
    Center,
    /// `>`: pad on the left.
    Right,
}

impl Align {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '<' => Some(Self::Left),
            '^' => Some(Self::Center),
            '>' => Some(Self::Right),
            _ => None,
        }
    }
}

/// Sign display mode for numeric values.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    /// `+`: always show sign.
    Plus,
    /// `-`: show sign only for negatives (default).
    Minus,
    /// ` `: space for positive, `-` for negative.
    Space,
}

/// Presentation type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FormatType {
    /// `d`: decimal integer.
    Decimal,
    /// `s`: plain text.
    Str,
    /// `b`: binary integer.
    Binary,
    /// `o`: octal integer.
    Octal,
    /// `x`: lowercase hexadecimal.
    Hex,
    /// `X`: uppercase hexadecimal.
    HexUpper,
    /// `e`: lowercase scientific notation.
    Exp,
    /// `E`: uppercase scientific notation.
    ExpUpper,
    /// `f`: fixed-point decimal.
    Fixed,
    /// `%`: percentage (multiply by 100, append `%`).
    Percent,
}

impl FormatType {
    fn from_char(c: char) -> Option<Self> {
        Some(match c {
            'd' => Self::Decimal,
            's' => Self::Str,
            'b' => Self::Binary,
            'o' => Self::Octal,
            'x' => Self::Hex,
            'X' => Self::HexUpper,
            'e' => Self::Exp,
            'E' => Self::ExpUpper,
            'f' => Self::Fixed,
            '%' => Self::Percent,
            _ => return None,
        })
    }

    /// Returns `true` if this type only applies to integers.
    pub fn is_integer_only(self) -> bool {
        matches!(
            self,
            Self::Decimal | Self::Binary | Self::Octal | Self::Hex | Self::HexUpper
        )
    }

    /// Returns `true` if this type only applies to floats.
    pub fn is_float_only(self) -> bool {
        matches!(
            self,
            Self::Exp | Self::ExpUpper | Self::Fixed | Self::Percent
        )
    }

    /// Returns `true` for every type except [`FormatType::Str`].
    pub fn is_numeric(self) -> bool {
        self != Self::Str
    }

    /// Human-readable name for error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Decimal => "decimal",
            Self::Str => "string",
            Self::Binary => "binary",
            Self::Octal => "octal",
            Self::Hex | Self::HexUpper => "hex",
            Self::Exp | Self::ExpUpper => "scientific",
            Self::Fixed => "fixed-point",
            Self::Percent => "percentage",
        }
    }
}

/// Error from parsing a format specification string.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormatSpecError {
    /// Unknown presentation type character (e.g., `{:z}`).
    #[error("unknown format type '{0}'")]
    UnknownType(char),
    /// Trailing characters after a valid spec.
    #[error("unexpected characters '{0}' in format spec")]
    TrailingCharacters(String),
    /// Width does not fit in `usize`.
    #[error("invalid width '{0}'")]
    InvalidWidth(String),
    /// Precision does not fit in `usize`.
    #[error("invalid precision '{0}'")]
    InvalidPrecision(String),
}

/// Parse a format specification string.
///
/// Syntax: `[[fill]align][sign][#][0][width][.precision][type]`
///
/// # Examples
///
/// ```
/// use weft_spec::{parse_format_spec, Align, FormatType};
///
/// let spec = parse_format_spec("*^20.5f").unwrap();
/// assert_eq!(spec.fill, Some('*'));
/// assert_eq!(spec.align, Some(Align::Center));
/// assert_eq!(spec.width, Some(20));
/// assert_eq!(spec.precision, Some(5));
/// assert_eq!(spec.format_type, Some(FormatType::Fixed));
/// ```
pub fn parse_format_spec(spec: &str) -> Result<FormatSpec, FormatSpecError> {
    let mut result = FormatSpec::EMPTY;
    let mut rest = spec;

    // [[fill]align]: a second-position align char makes the first one fill.
    let mut chars = rest.chars();
    let first = chars.next();
    let second = chars.next();
    if let (Some(fill), Some(align)) = (first, second.and_then(Align::from_char)) {
        result.fill = Some(fill);
        result.align = Some(align);
        rest = &rest[fill.len_utf8() + 1..];
    } else if let Some(align) = first.and_then(Align::from_char) {
        result.align = Some(align);
        rest = &rest[1..];
    }

    // [sign]
    let sign = match rest.as_bytes().first() {
        Some(b'+') => Some(Sign::Plus),
        Some(b'-') => Some(Sign::Minus),
        Some(b' ') => Some(Sign::Space),
        _ => None,
    };
    if sign.is_some() {
        result.sign = sign;
        rest = &rest[1..];
    }

    // [#]
    if let Some(stripped) = rest.strip_prefix('#') {
        result.alternate = true;
        rest = stripped;
    }

    // [0]: zero-pad flag unless the zero is the whole width (e.g. a lone "0"
    // followed by more digits is flag + width, "0" before '.', a type, or the
    // end is the flag alone).
    if let Some(stripped) = rest.strip_prefix('0') {
        let next = stripped.chars().next();
        let is_flag = match next {
            None | Some('.') => true,
            Some(c) => c.is_ascii_digit() || FormatType::from_char(c).is_some(),
        };
        if is_flag {
            result.zero_pad = true;
            rest = stripped;
        }
    }

    // [width]
    let (digits, after) = split_digits(rest);
    if !digits.is_empty() {
        result.width = Some(
            digits
                .parse()
                .map_err(|_| FormatSpecError::InvalidWidth(digits.to_string()))?,
        );
    }
    rest = after;

    // [.precision]; a dot with no digits means precision 0
    if let Some(stripped) = rest.strip_prefix('.') {
        let (digits, after) = split_digits(stripped);
        result.precision = Some(if digits.is_empty() {
            0
        } else {
            digits
                .parse()
                .map_err(|_| FormatSpecError::InvalidPrecision(digits.to_string()))?
        });
        rest = after;
    }

    // [type]
    if let Some(c) = rest.chars().next() {
        let format_type = FormatType::from_char(c).ok_or(FormatSpecError::UnknownType(c))?;
        result.format_type = Some(format_type);
        rest = &rest[c.len_utf8()..];
    }

    if !rest.is_empty() {
        return Err(FormatSpecError::TrailingCharacters(rest.to_string()));
    }

    Ok(result)
}

fn split_digits(s: &str) -> (&str, &str) {
    let end = s
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(s.len());
    s.split_at(end)
}
