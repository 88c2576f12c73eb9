//! Print entry points: format into a buffer, then commit it.

use std::io::Write;

use weft_buffer::MemoryBuffer;

use crate::argument::Argument;
use crate::commit::commit_chunked;
use crate::config::PrintConfig;
use crate::engine::vformat_to;
use crate::error::{Error, FormatError};

/// Format `template` with `args` and write the result to `out`.
///
/// Nothing reaches `out` unless formatting succeeds as a whole.
///
/// ```
/// let mut out = Vec::new();
/// weft::print!(&mut out, "{:>5}|{:<3}|", 42, "ab").unwrap();
/// assert_eq!(out, b"   42|ab |");
/// ```
pub fn vprint<W: Write + ?Sized>(
    out: &mut W,
    template: &str,
    args: &[Argument<'_, u8>],
) -> Result<(), Error> {
    print_with(&PrintConfig::default(), out, template, args)
}

/// [`vprint`] with explicit configuration.
pub fn print_with<W: Write + ?Sized>(
    config: &PrintConfig,
    out: &mut W,
    template: &str,
    args: &[Argument<'_, u8>],
) -> Result<(), Error> {
    let mut buffer = MemoryBuffer::new();
    buffer
        .try_reserve(config.initial_capacity)
        .map_err(FormatError::from)?;
    vformat_to(&mut buffer, template, args)?;
    commit_chunked(out, buffer.as_slice(), config.max_write)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "Tests can panic")]

    use std::io;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::FormatError;

    /// Counts writes and their sizes.
    #[derive(Default)]
    struct Counting {
        writes: Vec<usize>,
    }

    impl Write for Counting {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.writes.push(buf.len());
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct Closed;

    impl Write for Closed {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn prints_formatted_output() {
        let mut out = Vec::new();
        vprint(&mut out, "{}+{}", &[Argument::engine(&1), Argument::engine(&2)]).unwrap();
        assert_eq!(out, b"1+2");
    }

    #[test]
    fn format_error_writes_nothing() {
        let mut out = Counting::default();
        let err = vprint(&mut out, "{} {}", &[Argument::engine(&1)]).unwrap_err();
        assert!(matches!(
            err,
            Error::Format(FormatError::MissingArgument { index: 1, count: 1 })
        ));
        assert!(out.writes.is_empty());
    }

    #[test]
    fn io_error_is_passed_through() {
        let err = vprint(&mut Closed, "x", &[]).unwrap_err();
        match err {
            Error::Io(err) => assert_eq!(err.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn config_limits_write_size() {
        let text = "0123456789".repeat(3);
        let mut out = Counting::default();
        let config = PrintConfig::with_max_write(8);
        print_with(&config, &mut out, "{}", &[Argument::engine(&text)]).unwrap();
        assert_eq!(out.writes, [8, 8, 8, 6]);
    }

    #[test]
    fn config_initial_capacity() {
        let mut out = Vec::new();
        let config = PrintConfig::with_initial_capacity(8192);
        print_with(&config, &mut out, "{:>1000}", &[Argument::engine(&"end")]).unwrap();
        assert_eq!(out.len(), 1000);
        assert!(out.ends_with(b" end"));
    }

    #[test]
    fn unreachable_initial_capacity_is_reported() {
        let mut out = Vec::new();
        let config = PrintConfig::with_initial_capacity(usize::MAX);
        let err = print_with(&config, &mut out, "x", &[]).unwrap_err();
        assert!(matches!(
            err,
            Error::Format(FormatError::Alloc(weft_buffer::BufferError::CapacityOverflow))
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn writes_through_dyn_writer() {
        let mut out = Vec::new();
        let dest: &mut dyn Write = &mut out;
        vprint(dest, "{}", &[Argument::engine(&"dyn")]).unwrap();
        assert_eq!(out, b"dyn");
    }
}
