//! Formatting macros.
//!
//! Each argument goes through [`argument!`], which resolves the formatter for
//! the argument's concrete type at compile time (see [`crate::probe`]). The
//! probe is bound by a `match` so temporaries passed as arguments live until
//! the end of the enclosing statement.

/// Wrap a value in an [`Argument`](crate::Argument) with its formatter
/// chosen: [`Format`](crate::Format) if the type has it, `Display` otherwise.
#[macro_export]
macro_rules! argument {
    ($value:expr) => {
        match $crate::probe::Probe::new(&$value) {
            probe => {
                #[allow(unused_imports)]
                use $crate::probe::{EngineKind as _, StreamKind as _};
                (&probe).formatter_kind().argument(probe)
            }
        }
    };
}

/// The [`Category`](crate::Category) the formatter selector picks for a
/// value.
///
/// ```
/// use weft::Category;
///
/// assert_eq!(weft::category!(7_u8), Category::Engine);
/// assert_eq!(weft::category!(std::net::Ipv4Addr::LOCALHOST), Category::Stream);
/// ```
#[macro_export]
macro_rules! category {
    ($value:expr) => {
        match $crate::probe::Probe::new(&$value) {
            probe => {
                #[allow(unused_imports)]
                use $crate::probe::{EngineKind as _, StreamKind as _};
                (&probe).formatter_kind().category()
            }
        }
    };
}

/// Format into a new `String`; see [`vformat`](crate::vformat).
///
/// ```
/// assert_eq!(weft::format!("{}-{:03}", "id", 7).unwrap(), "id-007");
/// ```
#[macro_export]
macro_rules! format {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::vformat($template, &[$($crate::argument!($arg)),*])
    };
}

/// Format by appending to a [`MemoryBuffer`](weft_buffer::MemoryBuffer) of
/// either unit type; see [`vformat_to`](crate::vformat_to).
///
/// ```
/// use weft_buffer::MemoryBuffer;
///
/// let mut wide = MemoryBuffer::<char>::new();
/// weft::format_to!(&mut wide, "{:·^7}", "ñu").unwrap();
/// assert_eq!(wide.to_string_lossy(), "··ñu···");
/// ```
#[macro_export]
macro_rules! format_to {
    ($out:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::vformat_to($out, $template, &[$($crate::argument!($arg)),*])
    };
}

/// Format and write the result to an `io::Write`; see
/// [`vprint`](crate::vprint).
///
/// ```
/// use std::fmt;
///
/// struct Answer;
///
/// impl fmt::Display for Answer {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "X={}", 42)
///     }
/// }
///
/// let mut out = Vec::new();
/// weft::print!(&mut out, "{}", Answer).unwrap();
/// assert_eq!(out, b"X=42");
/// ```
#[macro_export]
macro_rules! print {
    ($out:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::vprint($out, $template, &[$($crate::argument!($arg)),*])
    };
}
