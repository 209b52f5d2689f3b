//! Tokenizes the text between `{` and `}` into a [`PlaceholderSpec`].
//!
//! Grammar (after the opening brace, before the closing one):
//!
//! ```text
//! spec      = kind [ modifier ]
//! kind      = one entry of the exact-match kind table
//! modifier  = "." digit+ | ":" ( "x" | "X" | "b" | "B" )
//! ```
//!
//! The parser only checks shape. Whether a modifier is legal for the kind is
//! decided by the validator.

use super::{InvalidSpec, PlaceholderSpec};
use crate::{
    kind::{Representation, lookup_kind, lookup_shorthand},
    options::FormatOptions,
};

pub(crate) fn parse(inner: &[u8], options: &FormatOptions) -> Result<PlaceholderSpec, InvalidSpec> {
    if inner.is_empty() {
        return Err(InvalidSpec::EmptySpec);
    }

    let token_len = inner
        .iter()
        .take_while(|b| b.is_ascii_alphanumeric())
        .count();
    let (token, rest) = inner.split_at(token_len);

    if let Some(kind) = lookup_kind(token) {
        let mut spec = PlaceholderSpec::new(kind);
        parse_modifier(rest, &mut spec)?;
        return Ok(spec);
    }

    let shorthand = options
        .legacy_shorthand
        .then_some(token)
        .and_then(lookup_shorthand);
    if let Some((kind, representation)) = shorthand {
        return match rest.first() {
            None => Ok(PlaceholderSpec {
                kind,
                representation,
                precision: None,
            }),
            Some(b'.' | b':') => Err(InvalidSpec::ModifierOnShorthand),
            Some(_) => Err(InvalidSpec::TrailingInput),
        };
    }

    Err(InvalidSpec::UnknownKind)
}

/// Accepts at most one modifier and nothing after it.
fn parse_modifier(rest: &[u8], spec: &mut PlaceholderSpec) -> Result<(), InvalidSpec> {
    match rest {
        [] => Ok(()),
        [b'.', digits @ ..] => {
            spec.precision = Some(parse_precision(digits)?);
            Ok(())
        }
        [b':', tail @ ..] => {
            spec.representation = parse_representation(tail)?;
            Ok(())
        }
        _ => Err(InvalidSpec::TrailingInput),
    }
}

fn parse_precision(digits: &[u8]) -> Result<u32, InvalidSpec> {
    if digits.first() == Some(&b'-') {
        return Err(InvalidSpec::NegativePrecision);
    }

    let len = digits.iter().take_while(|b| b.is_ascii_digit()).count();
    if len == 0 {
        return Err(InvalidSpec::MissingPrecision);
    }
    if len < digits.len() {
        return Err(InvalidSpec::TrailingInput);
    }

    digits.iter().try_fold(0u32, |acc, &d| {
        acc.checked_mul(10)
            .and_then(|acc| acc.checked_add(u32::from(d - b'0')))
            .ok_or(InvalidSpec::PrecisionOverflow)
    })
}

fn parse_representation(tail: &[u8]) -> Result<Representation, InvalidSpec> {
    let Some((&letter, after)) = tail.split_first() else {
        return Err(InvalidSpec::MissingRepresentation);
    };
    let representation =
        Representation::from_letter(letter).ok_or(InvalidSpec::UnknownRepresentation(letter as char))?;
    if after.is_empty() {
        Ok(representation)
    } else {
        Err(InvalidSpec::TrailingInput)
    }
}
