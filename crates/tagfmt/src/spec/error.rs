use thiserror::Error;

use crate::kind::{Kind, Representation};

/// Why a placeholder was rejected.
///
/// An invalid placeholder is not a failure of the formatting call: the
/// assembler echoes its text verbatim and consumes no argument. The reason is
/// kept for introspection and trace logging.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidSpec {
    /// `{}`
    #[error("empty placeholder")]
    EmptySpec,
    /// The leading token is not a kind name.
    #[error("unknown kind token")]
    UnknownKind,
    /// `.` with no digits after it.
    #[error("'.' must be followed by decimal digits")]
    MissingPrecision,
    /// `.-N`.
    #[error("precision cannot be negative")]
    NegativePrecision,
    /// More digits than a `u32` holds.
    #[error("precision does not fit in 32 bits")]
    PrecisionOverflow,
    /// `:` with nothing after it.
    #[error("':' must be followed by a representation letter")]
    MissingRepresentation,
    /// The letter after `:` is not one of `x`, `X`, `b`, `B`.
    #[error("unknown representation letter '{0}'")]
    UnknownRepresentation(char),
    /// Anything after the single allowed modifier.
    #[error("unexpected characters after the placeholder spec")]
    TrailingInput,
    /// `.N` or `:r` after a legacy shorthand kind.
    #[error("shorthand kinds take no modifiers")]
    ModifierOnShorthand,
    /// `.N` on a kind other than a float.
    #[error("precision is not allowed for {0}")]
    PrecisionNotAllowed(Kind),
    /// Hex on a float, or any representation on `c` or `s`.
    #[error("representation {1} is not allowed for {0}")]
    RepresentationNotAllowed(Kind, Representation),
}
