use alloc::{string::String, vec::Vec};

use quickcheck::QuickCheck;

use super::iterations;
use crate::{
    Arg, ArgumentCursor, FormatOptions, OutputBuffer, args, format_into, format_with,
    parse_placeholder,
};

/// Property: a placeholder that fails validation is echoed and consumes no
/// argument, so the next placeholder still receives the first argument.
#[test]
fn invalid_consumes_nothing_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(inner: String, value: i32) -> bool {
        if inner.contains(['{', '}']) {
            return true;
        }
        if parse_placeholder(inner.as_bytes(), &FormatOptions::default()).is_ok() {
            return true;
        }
        let pattern = alloc::format!("{{{inner}}}{{i32}}");
        let args = [Arg::new(value)];
        let mut cursor = ArgumentCursor::new(&args);
        let mut out = OutputBuffer::with_capacity(usize::MAX);
        format_into(&mut out, &FormatOptions::default(), &pattern, &mut cursor);
        out.as_bytes() == alloc::format!("{{{inner}}}{value}").as_bytes() && cursor.position() == 1
    }

    QuickCheck::new()
        .tests(iterations())
        .quickcheck(prop as fn(String, i32) -> bool);
}

/// Property: a bounded call yields a prefix of the unbounded expansion, never
/// longer than the capacity, and reports truncation exactly when bytes were
/// dropped.
#[test]
fn truncation_is_a_prefix_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(pieces: Vec<u8>, text: String, capacity: u8) -> bool {
        const TOKENS: [&str; 10] = [
            "{i32}", "{u8:x}", "{f64.3}", "{s}", "{u16:B}", "{c}", "{{", "}}", "{", "{bad}",
        ];
        let mut pattern = String::new();
        for piece in pieces {
            pattern.push_str(TOKENS[usize::from(piece) % TOKENS.len()]);
            pattern.push_str(&text);
        }
        let args = args![-7, 200u8, 2.5, "sä", 65u16, 'ö'];

        let unbounded = format_with(
            &FormatOptions {
                capacity: usize::MAX,
                ..FormatOptions::default()
            },
            &pattern,
            &args,
        );
        let bounded = format_with(
            &FormatOptions {
                capacity: usize::from(capacity),
                ..FormatOptions::default()
            },
            &pattern,
            &args,
        );

        bounded.len() <= usize::from(capacity)
            && unbounded.as_bytes().starts_with(bounded.as_bytes())
            && bounded.is_truncated() == (unbounded.len() > usize::from(capacity))
    }

    QuickCheck::new()
        .tests(iterations())
        .quickcheck(prop as fn(Vec<u8>, String, u8) -> bool);
}

/// Property: `{{` and `}}` always collapse to one brace and never start a
/// placeholder, whatever surrounds them.
#[test]
fn escaped_braces_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(parts: Vec<(String, bool)>) -> bool {
        let mut pattern = String::new();
        let mut expected = String::new();
        for (text, open) in parts {
            let text: String = text.chars().filter(|c| !matches!(c, '{' | '}')).collect();
            pattern.push_str(&text);
            expected.push_str(&text);
            pattern.push_str(if open { "{{" } else { "}}" });
            expected.push(if open { '{' } else { '}' });
        }
        let options = FormatOptions {
            capacity: usize::MAX,
            ..FormatOptions::default()
        };
        format_with(&options, &pattern, &args![1, 2, 3]).as_bytes() == expected.as_bytes()
    }

    QuickCheck::new()
        .tests(iterations())
        .quickcheck(prop as fn(Vec<(String, bool)>) -> bool);
}

/// Property: every well-formed placeholder with an argument available
/// consumes exactly one.
#[test]
fn valid_consumes_one_quickcheck() {
    fn prop(kind: u8, value: u64) -> bool {
        const VALID: [&str; 12] = [
            "{i8}", "{i64:X}", "{u32:b}", "{u64:B}", "{f32}", "{f64.4}", "{f128:b}", "{c}",
            "{s}", "{p}", "{P:x}", "{u16:x}",
        ];
        let placeholder = VALID[usize::from(kind) % VALID.len()];
        let args = [Arg::new(value), Arg::new(value)];
        let mut cursor = ArgumentCursor::new(&args);
        let mut out = OutputBuffer::with_capacity(1024);
        format_into(&mut out, &FormatOptions::default(), placeholder, &mut cursor);
        cursor.position() == 1 && out.as_bytes() != placeholder.as_bytes()
    }

    QuickCheck::new()
        .tests(iterations())
        .quickcheck(prop as fn(u8, u64) -> bool);
}
