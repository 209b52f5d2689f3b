//! Output assembler: walks a pattern once, copying literal runs and replacing
//! each valid placeholder with its rendered argument.
//!
//! The walk is a two-state machine. In `Literal` the assembler copies bytes up
//! to the next brace and collapses `{{` and `}}`. A single `{` moves it to
//! `InPlaceholder`, which looks for the next `}`:
//!
//! * no `}` left in the pattern: the `{` is emitted as a literal byte and the
//!   walk resumes right after it;
//! * a valid spec with an argument left: the rendered value is emitted and one
//!   argument is consumed;
//! * an invalid spec, or a valid one with the arguments exhausted: the whole
//!   placeholder, braces included, is echoed and nothing is consumed.
//!
//! A lone `}` is literal. Every path advances through the pattern, so a call
//! is linear in the pattern length and never fails.

use alloc::string::String;

use bstr::ByteSlice;

use crate::{
    arg::{Arg, ArgumentCursor},
    options::FormatOptions,
    output::OutputBuffer,
    render::{Scratch, render},
    spec::parse_placeholder,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Literal,
    /// `start` is the offset of the opening brace.
    InPlaceholder { start: usize },
}

struct Assembler<'p, 'o, 'c, 's, 'a> {
    pattern: &'p [u8],
    options: &'o FormatOptions,
    cursor: &'c mut ArgumentCursor<'s, 'a>,
    out: &'o mut OutputBuffer,
    scratch: Scratch,
    /// Offset from which the pattern is known to contain no `}`.
    unterminated_from: usize,
}

impl Assembler<'_, '_, '_, '_, '_> {
    fn run(&mut self) {
        let pattern = self.pattern;
        let mut pos = 0;
        let mut state = State::Literal;
        loop {
            state = match state {
                State::Literal => {
                    let Some(rest) = pattern.get(pos..).filter(|rest| !rest.is_empty()) else {
                        break;
                    };
                    let run = rest.find_byteset(b"{}").unwrap_or(rest.len());
                    self.out.push_bytes(&rest[..run]);
                    pos += run;
                    self.brace(&mut pos)
                }
                State::InPlaceholder { start } => {
                    match self.find_close(start + 1) {
                        Some(end) => {
                            self.placeholder(start, end);
                            pos = end + 1;
                        }
                        None => {
                            self.out.push_byte(b'{');
                            pos = start + 1;
                        }
                    }
                    State::Literal
                }
            };
        }
    }

    /// Handles the brace at `pos`, if any.
    fn brace(&mut self, pos: &mut usize) -> State {
        let here = *pos;
        match self.pattern.get(here..) {
            Some([b'{', b'{', ..]) => {
                self.out.push_byte(b'{');
                *pos += 2;
            }
            Some([b'}', b'}', ..]) => {
                self.out.push_byte(b'}');
                *pos += 2;
            }
            Some([b'{', ..]) => return State::InPlaceholder { start: here },
            Some([b'}', ..]) => {
                self.out.push_byte(b'}');
                *pos += 1;
            }
            _ => {}
        }
        State::Literal
    }

    fn find_close(&mut self, from: usize) -> Option<usize> {
        if from >= self.unterminated_from {
            return None;
        }
        match self.pattern[from..].find_byte(b'}') {
            Some(offset) => Some(from + offset),
            None => {
                self.unterminated_from = from;
                None
            }
        }
    }

    /// `start` and `end` are the offsets of the braces.
    fn placeholder(&mut self, start: usize, end: usize) {
        let pattern = self.pattern;
        let whole = &pattern[start..=end];
        let inner = &whole[1..whole.len() - 1];

        let spec = match parse_placeholder(inner, self.options) {
            Ok(spec) => spec,
            Err(reason) => {
                log::trace!("echoing {:?} at byte {start}: {reason}", whole.as_bstr());
                self.out.push_bytes(whole);
                return;
            }
        };

        let Some(arg) = self.cursor.next_arg() else {
            log::debug!(
                "no argument left for {:?} at byte {start}, {} consumed",
                whole.as_bstr(),
                self.cursor.position()
            );
            self.out.push_bytes(whole);
            return;
        };

        let rendered = render(&spec, arg, &mut self.scratch);
        self.out.push_bytes(rendered.as_bytes());
    }
}

/// Appends the expansion of `pattern` to `out`, taking arguments from
/// `cursor`.
///
/// This is the building block of the other formatting functions. It lets a
/// caller reuse one buffer across several patterns, or inspect afterwards how
/// many arguments the pattern consumed.
///
/// ```rust
/// use tagfmt::{ArgumentCursor, FormatOptions, OutputBuffer, args, format_into};
///
/// let args = args![7u8, "left over"];
/// let mut cursor = ArgumentCursor::new(&args);
/// let mut out = OutputBuffer::with_capacity(64);
/// format_into(&mut out, &FormatOptions::default(), "{u8:b} {nope}", &mut cursor);
/// assert_eq!(out.as_bytes(), b"00000111 {nope}");
/// assert_eq!(cursor.position(), 1);
/// ```
pub fn format_into(
    out: &mut OutputBuffer,
    options: &FormatOptions,
    pattern: impl AsRef<[u8]>,
    cursor: &mut ArgumentCursor<'_, '_>,
) {
    let pattern = pattern.as_ref();
    Assembler {
        pattern,
        options,
        cursor,
        out,
        scratch: Scratch::new(),
        unterminated_from: pattern.len(),
    }
    .run();
}

/// Expands `pattern` into a new buffer bounded by `options.capacity`.
#[must_use]
pub fn format_with(
    options: &FormatOptions,
    pattern: impl AsRef<[u8]>,
    args: &[Arg<'_>],
) -> OutputBuffer {
    let mut out = OutputBuffer::with_capacity(options.capacity);
    format_into(&mut out, options, pattern, &mut ArgumentCursor::new(args));
    out
}

/// Expands `pattern` with the default options.
///
/// ```rust
/// use tagfmt::{args, format_bytes};
///
/// let out = format_bytes("{i32} {u8:x} {f64.2} {{literal}}", &args![-42, 255u8, 3.14159]);
/// assert_eq!(out.as_bytes(), b"-42 ff 3.14 {literal}");
/// ```
#[must_use]
pub fn format_bytes(pattern: impl AsRef<[u8]>, args: &[Arg<'_>]) -> OutputBuffer {
    format_with(&FormatOptions::default(), pattern, args)
}

/// Expands `pattern` with the default options and returns the result as text.
///
/// Bytes that are not valid UTF-8 are replaced by U+FFFD.
#[must_use]
pub fn format_string(pattern: impl AsRef<[u8]>, args: &[Arg<'_>]) -> String {
    format_bytes(pattern, args).into_string_lossy()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(pattern: &str) -> OutputBuffer {
        format_bytes(pattern, &[])
    }

    #[test]
    fn state_transitions() {
        assert_eq!(expand("").as_bytes(), b"");
        assert_eq!(expand("plain").as_bytes(), b"plain");
        assert_eq!(expand("{{").as_bytes(), b"{");
        assert_eq!(expand("}}").as_bytes(), b"}");
        assert_eq!(expand("}").as_bytes(), b"}");
        assert_eq!(expand("{").as_bytes(), b"{");
        assert_eq!(expand("a}b").as_bytes(), b"a}b");
        assert_eq!(expand("{{{").as_bytes(), b"{{");
        assert_eq!(expand("}}}").as_bytes(), b"}}");
    }

    #[test]
    fn unterminated_brace_resumes_after_itself() {
        assert_eq!(expand("x{i32").as_bytes(), b"x{i32");
        assert_eq!(expand("{a{b{c").as_bytes(), b"{a{b{c");
        assert_eq!(format_bytes("{i32", &[Arg::Int(1)]).as_bytes(), b"{i32");
    }

    #[test]
    fn closing_brace_is_the_first_one() {
        let out = format_bytes("{x{i32}!", &[Arg::Int(1)]);
        assert_eq!(out.as_bytes(), b"{x{i32}!");
    }

    #[test]
    fn cursor_advances_once_per_rendered_placeholder() {
        let args = [Arg::Int(1), Arg::Int(2)];
        let mut cursor = ArgumentCursor::new(&args);
        let mut out = OutputBuffer::with_capacity(64);
        format_into(
            &mut out,
            &FormatOptions::default(),
            "{i32}{bad}{i32:q}{i32}{i32}",
            &mut cursor,
        );
        assert_eq!(out.as_bytes(), b"1{bad}{i32:q}2{i32}");
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn appends_to_existing_output() {
        let args = [Arg::new("b")];
        let mut cursor = ArgumentCursor::new(&args);
        let mut out = OutputBuffer::with_capacity(4);
        out.push_bytes(b"a");
        format_into(&mut out, &FormatOptions::default(), "{s}cde", &mut cursor);
        assert_eq!(out.as_bytes(), b"abcd");
        assert!(out.is_truncated());
    }
}
