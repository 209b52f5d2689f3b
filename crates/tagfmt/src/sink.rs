//! Delivery of formatted output to byte streams.
//!
//! Each operation formats the whole pattern into a bounded [`OutputBuffer`]
//! first and then writes it with one `write_all`, so a sink never sees a
//! partial expansion. The `*_line_*` variants write `\n` after the buffer,
//! which means a truncated line still ends with a newline.

use std::io::{self, Write};

use crate::{
    arg::Arg, assembler::format_with, error::FormatError, options::FormatOptions,
    output::OutputBuffer,
};

/// Formats `pattern` with `options` and writes it to `sink`.
///
/// Returns the buffer that was written, so the caller can check
/// [`OutputBuffer::is_truncated`].
///
/// # Errors
///
/// Returns [`FormatError::Io`] if `sink` rejects the write.
pub fn format_to_with<W: Write + ?Sized>(
    sink: &mut W,
    options: &FormatOptions,
    pattern: impl AsRef<[u8]>,
    args: &[Arg<'_>],
) -> Result<OutputBuffer, FormatError> {
    let out = format_with(options, pattern, args);
    sink.write_all(out.as_bytes())?;
    Ok(out)
}

/// Like [`format_to_with`], followed by a line terminator.
///
/// # Errors
///
/// Returns [`FormatError::Io`] if `sink` rejects the write.
pub fn format_line_to_with<W: Write + ?Sized>(
    sink: &mut W,
    options: &FormatOptions,
    pattern: impl AsRef<[u8]>,
    args: &[Arg<'_>],
) -> Result<OutputBuffer, FormatError> {
    let out = format_to_with(sink, options, pattern, args)?;
    sink.write_all(b"\n")?;
    Ok(out)
}

/// Formats `pattern` with the default options and writes it to `sink`.
///
/// ```rust
/// use tagfmt::{args, format_to};
///
/// let mut sink: Vec<u8> = Vec::new();
/// format_to(&mut sink, "{s}={u16:X}", &args!["port", 8080u16]).unwrap();
/// assert_eq!(sink, b"port=1F90");
/// ```
///
/// # Errors
///
/// Returns [`FormatError::Io`] if `sink` rejects the write.
pub fn format_to<W: Write + ?Sized>(
    sink: &mut W,
    pattern: impl AsRef<[u8]>,
    args: &[Arg<'_>],
) -> Result<OutputBuffer, FormatError> {
    format_to_with(sink, &FormatOptions::default(), pattern, args)
}

/// Like [`format_to`], followed by a line terminator.
///
/// # Errors
///
/// Returns [`FormatError::Io`] if `sink` rejects the write.
pub fn format_line_to<W: Write + ?Sized>(
    sink: &mut W,
    pattern: impl AsRef<[u8]>,
    args: &[Arg<'_>],
) -> Result<OutputBuffer, FormatError> {
    format_line_to_with(sink, &FormatOptions::default(), pattern, args)
}

/// Formats to standard output.
///
/// # Errors
///
/// Returns [`FormatError::Io`] if standard output rejects the write.
pub fn print(pattern: impl AsRef<[u8]>, args: &[Arg<'_>]) -> Result<(), FormatError> {
    format_to(&mut io::stdout().lock(), pattern, args).map(drop)
}

/// Formats a line to standard output.
///
/// # Errors
///
/// Returns [`FormatError::Io`] if standard output rejects the write.
pub fn println(pattern: impl AsRef<[u8]>, args: &[Arg<'_>]) -> Result<(), FormatError> {
    format_line_to(&mut io::stdout().lock(), pattern, args).map(drop)
}

/// Formats to standard error.
///
/// # Errors
///
/// Returns [`FormatError::Io`] if standard error rejects the write.
pub fn eprint(pattern: impl AsRef<[u8]>, args: &[Arg<'_>]) -> Result<(), FormatError> {
    format_to(&mut io::stderr().lock(), pattern, args).map(drop)
}

/// Formats a line to standard error.
///
/// # Errors
///
/// Returns [`FormatError::Io`] if standard error rejects the write.
pub fn eprintln(pattern: impl AsRef<[u8]>, args: &[Arg<'_>]) -> Result<(), FormatError> {
    format_line_to(&mut io::stderr().lock(), pattern, args).map(drop)
}
