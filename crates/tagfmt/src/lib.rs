//! Type-tagged string interpolation into bounded buffers.
//!
//! A pattern mixes literal text with placeholders of the form
//! `{kind[:repr][.precision]}`:
//!
//! | kind | reads |
//! |---|---|
//! | `i8` `i16` `i32` `i64` `u8` `u16` `u32` `u64` | an integer, narrowed to the width |
//! | `f32` `f64` `f128` | a float, fixed-point (never scientific) |
//! | `c` | a character |
//! | `s` | a string; a null string renders `(null)` |
//! | `p` `P` | an address, lowercase or uppercase hex |
//!
//! `:x`/`:X` select fixed-width hex and `:b`/`:B` select plain or grouped
//! binary; `.N` sets the digits after the point of a float. Each placeholder
//! is parsed and validated before an argument is touched. An invalid one is
//! copied to the output verbatim and consumes no argument, so formatting never
//! fails. `{{` and `}}` are escaped braces.
//!
//! ```rust
//! use tagfmt::render;
//!
//! let out = render!("{s}: {u16:B} {i8:x} {f64.2} {bogus}", "bits", 5u16, -123i8, 3.14159);
//! assert_eq!(out.to_str_lossy(), "bits: 0000_0000_0000_0101 85 3.14 {bogus}");
//! ```
//!
//! Output is bounded: bytes past [`FormatOptions::capacity`] are dropped and
//! [`OutputBuffer::is_truncated`] reports it. The core is `no_std` with
//! `alloc`; the `std` feature adds stream sinks and the print macros.
//!
//! Recovery decisions are logged through the `log` facade: echoed
//! placeholders at `trace`, exhausted arguments and truncation at `debug`.

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod arg;
mod assembler;
mod kind;
mod options;
mod output;
mod render;
mod spec;

#[cfg(feature = "std")]
mod error;
#[cfg(feature = "std")]
mod sink;

#[cfg(test)]
mod tests;

pub use arg::{Arg, ArgumentCursor, IntoArg};
pub use assembler::{format_bytes, format_into, format_string, format_with};
#[cfg(feature = "std")]
pub use error::FormatError;
pub use kind::{Kind, KindClass, Representation};
pub use options::{DEFAULT_CAPACITY, FormatOptions};
pub use output::OutputBuffer;
pub use render::NULL_TEXT;
#[cfg(feature = "std")]
pub use sink::{
    eprint, eprintln, format_line_to, format_line_to_with, format_to, format_to_with, print,
    println,
};
pub use spec::{
    DEFAULT_PRECISION, DEFAULT_WIDE_PRECISION, InvalidSpec, MAX_PRECISION, PlaceholderSpec,
    parse_placeholder,
};

/// Captures a list of values as an array of [`Arg`].
///
/// ```rust
/// use tagfmt::{Arg, args};
///
/// let name = String::from("ada");
/// let captured = args![1u8, -2i64, 'c', &name, None::<&str>];
/// assert_eq!(captured[1], Arg::Int(-2));
/// assert_eq!(captured[4], Arg::NULL);
/// ```
#[macro_export]
macro_rules! args {
    ( $( $arg:expr ),* $(,)? ) => {
        [ $( $crate::IntoArg::into_arg($arg) ),* ]
    };
}

/// Formats a pattern with the default options into an [`OutputBuffer`].
#[macro_export]
macro_rules! render {
    ( $pattern:expr $( , $arg:expr )* $(,)? ) => {
        $crate::format_bytes($pattern, &$crate::args![ $( $arg ),* ])
    };
}

/// Formats to standard output. Write errors are ignored.
#[cfg(feature = "std")]
#[macro_export]
macro_rules! print {
    ( $pattern:expr $( , $arg:expr )* $(,)? ) => {{
        let _ = $crate::print($pattern, &$crate::args![ $( $arg ),* ]);
    }};
}

/// Formats a line to standard output. Write errors are ignored.
#[cfg(feature = "std")]
#[macro_export]
macro_rules! println {
    ( $pattern:expr $( , $arg:expr )* $(,)? ) => {{
        let _ = $crate::println($pattern, &$crate::args![ $( $arg ),* ]);
    }};
}

/// Formats to standard error. Write errors are ignored.
#[cfg(feature = "std")]
#[macro_export]
macro_rules! eprint {
    ( $pattern:expr $( , $arg:expr )* $(,)? ) => {{
        let _ = $crate::eprint($pattern, &$crate::args![ $( $arg ),* ]);
    }};
}

/// Formats a line to standard error. Write errors are ignored.
#[cfg(feature = "std")]
#[macro_export]
macro_rules! eprintln {
    ( $pattern:expr $( , $arg:expr )* $(,)? ) => {{
        let _ = $crate::eprintln($pattern, &$crate::args![ $( $arg ),* ]);
    }};
}

/// Formats to any [`std::io::Write`], returning `Result<(), FormatError>`.
///
/// ```rust
/// let mut log: Vec<u8> = Vec::new();
/// tagfmt::fprint!(&mut log, "{c}{c}", 'o', 'k').unwrap();
/// assert_eq!(log, b"ok");
/// ```
#[cfg(feature = "std")]
#[macro_export]
macro_rules! fprint {
    ( $sink:expr, $pattern:expr $( , $arg:expr )* $(,)? ) => {
        $crate::format_to($sink, $pattern, &$crate::args![ $( $arg ),* ]).map(::core::mem::drop)
    };
}

/// Like [`fprint!`], followed by a line terminator.
#[cfg(feature = "std")]
#[macro_export]
macro_rules! fprintln {
    ( $sink:expr, $pattern:expr $( , $arg:expr )* $(,)? ) => {
        $crate::format_line_to($sink, $pattern, &$crate::args![ $( $arg ),* ]).map(::core::mem::drop)
    };
}
