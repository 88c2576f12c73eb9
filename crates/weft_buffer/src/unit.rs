//! Character units stored in a [`MemoryBuffer`](crate::MemoryBuffer).
//!
//! Two unit types are supported:
//! - `u8`: UTF-8 narrow text, the unit used for byte-oriented destinations
//! - `char`: one code point per unit, for wide text
//!
//! Widths are counted in code points for both, so a field padded to width 6
//! looks the same whichever unit it was built with.

use std::borrow::Cow;
use std::fmt;

mod sealed {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for char {}
}

/// A character unit of a text buffer.
///
/// Sealed: only `u8` and `char` implement it.
pub trait CharUnit: sealed::Sealed + Copy + Default + Eq + fmt::Debug + Send + Sync + 'static {
    /// Feed the encoding of `s` to `emit`, as one or more runs.
    fn encode_str<F: FnMut(&[Self])>(s: &str, emit: F);

    /// Units needed to encode `c`.
    fn char_units(c: char) -> usize;

    /// Number of code points in `units`.
    fn count_chars(units: &[Self]) -> usize;

    /// Longest prefix of `units` holding at most `max` code points.
    fn truncate_chars(units: &[Self], max: usize) -> &[Self];

    /// Decode `units` back to text, replacing invalid sequences.
    fn to_text(units: &[Self]) -> Cow<'_, str>;
}

#[inline]
fn is_utf8_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

impl CharUnit for u8 {
    #[inline]
    fn encode_str<F: FnMut(&[Self])>(s: &str, mut emit: F) {
        emit(s.as_bytes());
    }

    #[inline]
    fn char_units(c: char) -> usize {
        c.len_utf8()
    }

    fn count_chars(units: &[Self]) -> usize {
        units.iter().filter(|&&b| !is_utf8_continuation(b)).count()
    }

    fn truncate_chars(units: &[Self], max: usize) -> &[Self] {
        let end = units
            .iter()
            .enumerate()
            .filter(|&(_, &b)| !is_utf8_continuation(b))
            .nth(max)
            .map_or(units.len(), |(i, _)| i);
        &units[..end]
    }

    fn to_text(units: &[Self]) -> Cow<'_, str> {
        String::from_utf8_lossy(units)
    }
}

/// Chars are handed to the sink in runs of this many units.
const CHAR_RUN: usize = 32;

impl CharUnit for char {
    fn encode_str<F: FnMut(&[Self])>(s: &str, mut emit: F) {
        let mut run = [char::default(); CHAR_RUN];
        let mut filled = 0;
        for c in s.chars() {
            run[filled] = c;
            filled += 1;
            if filled == CHAR_RUN {
                emit(&run);
                filled = 0;
            }
        }
        if filled > 0 {
            emit(&run[..filled]);
        }
    }

    #[inline]
    fn char_units(_: char) -> usize {
        1
    }

    #[inline]
    fn count_chars(units: &[Self]) -> usize {
        units.len()
    }

    #[inline]
    fn truncate_chars(units: &[Self], max: usize) -> &[Self] {
        &units[..max.min(units.len())]
    }

    fn to_text(units: &[Self]) -> Cow<'_, str> {
        Cow::Owned(units.iter().collect())
    }
}
