//! Placeholder parsing and validation.
//!
//! A placeholder's inner text goes through [`parser::parse`] (shape) and then
//! [`validator::validate`] (per-kind legality). The result is either a fully
//! valid [`PlaceholderSpec`] or an [`InvalidSpec`] reason; there is no
//! partially specified state in between.

mod error;
mod parser;
mod validator;


pub use error::InvalidSpec;

use crate::{
    kind::{Kind, Representation},
    options::FormatOptions,
};

/// Default digits after the point for `f32` and `f64`.
pub const DEFAULT_PRECISION: u32 = 6;
/// Default digits after the point for `f128`.
pub const DEFAULT_WIDE_PRECISION: u32 = 18;
/// Largest precision that is rendered; larger requests are clamped.
pub const MAX_PRECISION: u32 = 200;

/// A validated description of one placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaceholderSpec {
    /// What to read from the argument list.
    pub kind: Kind,
    /// How to encode it.
    pub representation: Representation,
    /// Digits after the point; floats only.
    pub precision: Option<u32>,
}

impl PlaceholderSpec {
    /// A spec for `kind` with no modifiers.
    #[must_use]
    pub const fn new(kind: Kind) -> Self {
        Self {
            kind,
            representation: Representation::Decimal,
            precision: None,
        }
    }

    /// Precision actually used when rendering a float in decimal.
    #[must_use]
    pub fn effective_precision(&self) -> usize {
        let default = match self.kind {
            Kind::F128 => DEFAULT_WIDE_PRECISION,
            _ => DEFAULT_PRECISION,
        };
        self.precision.unwrap_or(default).min(MAX_PRECISION) as usize
    }
}

/// Parses and validates the text between a placeholder's braces.
///
/// ```rust
/// use tagfmt::{FormatOptions, InvalidSpec, Kind, Representation, parse_placeholder};
///
/// let spec = parse_placeholder(b"u16:B", &FormatOptions::default()).unwrap();
/// assert_eq!(spec.kind, Kind::U16);
/// assert_eq!(spec.representation, Representation::BinaryGrouped);
///
/// assert_eq!(
///     parse_placeholder(b"f32:x", &FormatOptions::default()),
///     Err(InvalidSpec::RepresentationNotAllowed(Kind::F32, Representation::HexLower)),
/// );
/// ```
///
/// # Errors
///
/// Returns the reason the placeholder would be echoed instead of rendered.
pub fn parse_placeholder(
    inner: &[u8],
    options: &FormatOptions,
) -> Result<PlaceholderSpec, InvalidSpec> {
    parser::parse(inner, options).and_then(validator::validate)
}
