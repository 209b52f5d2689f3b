//! Placeholder kinds, representations, and the read-only kind-name tables.
//!
//! The tables are plain `static` slices: they are never mutated, so lookups
//! from any number of threads need no synchronization.

use core::fmt;

/// The value kind a placeholder asks for.
///
/// The kind fixes how many bits of the next argument are consumed and which
/// modifiers are legal (see [`KindClass`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    /// `i8`
    I8,
    /// `i16`
    I16,
    /// `i32`
    I32,
    /// `i64`
    I64,
    /// `u8`
    U8,
    /// `u16`
    U16,
    /// `u32`
    U32,
    /// `u64`
    U64,
    /// `f32`
    F32,
    /// `f64`
    F64,
    /// `f128`, carried as an `f64` value and rendered as IEEE binary128 bits.
    F128,
    /// `c`
    Char,
    /// `s`
    Str,
    /// `p`, an address in lowercase hex.
    PtrLower,
    /// `P`, an address in uppercase hex.
    PtrUpper,
}

/// Groups kinds by which modifiers they accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindClass {
    /// Signed and unsigned integers.
    Integer,
    /// `f32`, `f64` and `f128`.
    Float,
    /// `p` and `P`.
    Pointer,
    /// `c` and `s`; no modifiers at all.
    Text,
}

impl Kind {
    /// The token that names this kind inside a placeholder.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::I8 => "i8",
            Kind::I16 => "i16",
            Kind::I32 => "i32",
            Kind::I64 => "i64",
            Kind::U8 => "u8",
            Kind::U16 => "u16",
            Kind::U32 => "u32",
            Kind::U64 => "u64",
            Kind::F32 => "f32",
            Kind::F64 => "f64",
            Kind::F128 => "f128",
            Kind::Char => "c",
            Kind::Str => "s",
            Kind::PtrLower => "p",
            Kind::PtrUpper => "P",
        }
    }

    /// Which modifier rules apply to this kind.
    #[must_use]
    pub const fn class(self) -> KindClass {
        match self {
            Kind::I8
            | Kind::I16
            | Kind::I32
            | Kind::I64
            | Kind::U8
            | Kind::U16
            | Kind::U32
            | Kind::U64 => KindClass::Integer,
            Kind::F32 | Kind::F64 | Kind::F128 => KindClass::Float,
            Kind::PtrLower | Kind::PtrUpper => KindClass::Pointer,
            Kind::Char | Kind::Str => KindClass::Text,
        }
    }

    /// Width in bits of the value this kind renders.
    ///
    /// Pointers use the platform pointer width. Text kinds have no fixed
    /// width; `c` reports 8 for its byte form and `s` reports 0.
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Kind::I8 | Kind::U8 | Kind::Char => 8,
            Kind::I16 | Kind::U16 => 16,
            Kind::I32 | Kind::U32 | Kind::F32 => 32,
            Kind::I64 | Kind::U64 | Kind::F64 => 64,
            Kind::F128 => 128,
            Kind::PtrLower | Kind::PtrUpper => usize::BITS,
            Kind::Str => 0,
        }
    }

    /// Whether decimal output can carry a `-`.
    #[must_use]
    pub const fn is_signed(self) -> bool {
        matches!(self, Kind::I8 | Kind::I16 | Kind::I32 | Kind::I64)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alternate textual encodings selected by a `:r` modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Representation {
    /// Base 10; the default when no `:r` modifier is present.
    #[default]
    Decimal,
    /// `:x`
    HexLower,
    /// `:X`
    HexUpper,
    /// `:b`, bits without separators.
    BinaryPlain,
    /// `:B`, bits with `_` every four bits from the least-significant end.
    BinaryGrouped,
}

impl Representation {
    /// Maps a modifier letter to its representation.
    #[must_use]
    pub const fn from_letter(letter: u8) -> Option<Self> {
        match letter {
            b'x' => Some(Representation::HexLower),
            b'X' => Some(Representation::HexUpper),
            b'b' => Some(Representation::BinaryPlain),
            b'B' => Some(Representation::BinaryGrouped),
            _ => None,
        }
    }

    /// `:x` or `:X`.
    #[must_use]
    pub const fn is_hex(self) -> bool {
        matches!(self, Representation::HexLower | Representation::HexUpper)
    }

    /// `:b` or `:B`.
    #[must_use]
    pub const fn is_binary(self) -> bool {
        matches!(
            self,
            Representation::BinaryPlain | Representation::BinaryGrouped
        )
    }

    /// `:B`, binary with `_` between nibbles.
    #[must_use]
    pub const fn is_grouped(self) -> bool {
        matches!(self, Representation::BinaryGrouped)
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Representation::Decimal => "decimal",
            Representation::HexLower => ":x",
            Representation::HexUpper => ":X",
            Representation::BinaryPlain => ":b",
            Representation::BinaryGrouped => ":B",
        })
    }
}

/// Exact-match table of kind tokens.
pub(crate) static KIND_TABLE: &[(&[u8], Kind)] = &[
    (b"i8", Kind::I8),
    (b"i16", Kind::I16),
    (b"i32", Kind::I32),
    (b"i64", Kind::I64),
    (b"u8", Kind::U8),
    (b"u16", Kind::U16),
    (b"u32", Kind::U32),
    (b"u64", Kind::U64),
    (b"f32", Kind::F32),
    (b"f64", Kind::F64),
    (b"f128", Kind::F128),
    (b"s", Kind::Str),
    (b"c", Kind::Char),
    (b"p", Kind::PtrLower),
    (b"P", Kind::PtrUpper),
];

/// Width-suffixed tokens that spell the representation into the kind.
///
/// Only consulted when `FormatOptions::legacy_shorthand` is set.
pub(crate) static SHORTHAND_TABLE: &[(&[u8], Kind, Representation)] = &[
    (b"x8", Kind::U8, Representation::HexLower),
    (b"x16", Kind::U16, Representation::HexLower),
    (b"x32", Kind::U32, Representation::HexLower),
    (b"x64", Kind::U64, Representation::HexLower),
    (b"X8", Kind::U8, Representation::HexUpper),
    (b"X16", Kind::U16, Representation::HexUpper),
    (b"X32", Kind::U32, Representation::HexUpper),
    (b"X64", Kind::U64, Representation::HexUpper),
    (b"b8", Kind::U8, Representation::BinaryPlain),
    (b"b16", Kind::U16, Representation::BinaryPlain),
    (b"b32", Kind::U32, Representation::BinaryPlain),
    (b"b64", Kind::U64, Representation::BinaryPlain),
    (b"B8", Kind::U8, Representation::BinaryGrouped),
    (b"B16", Kind::U16, Representation::BinaryGrouped),
    (b"B32", Kind::U32, Representation::BinaryGrouped),
    (b"B64", Kind::U64, Representation::BinaryGrouped),
    (b"p8", Kind::U8, Representation::HexLower),
    (b"p16", Kind::U16, Representation::HexLower),
    (b"p32", Kind::U32, Representation::HexLower),
    (b"p64", Kind::U64, Representation::HexLower),
    (b"P8", Kind::U8, Representation::HexUpper),
    (b"P16", Kind::U16, Representation::HexUpper),
    (b"P32", Kind::U32, Representation::HexUpper),
    (b"P64", Kind::U64, Representation::HexUpper),
];

pub(crate) fn lookup_kind(token: &[u8]) -> Option<Kind> {
    KIND_TABLE
        .iter()
        .find(|(name, _)| *name == token)
        .map(|&(_, kind)| kind)
}

pub(crate) fn lookup_shorthand(token: &[u8]) -> Option<(Kind, Representation)> {
    SHORTHAND_TABLE
        .iter()
        .find(|(name, ..)| *name == token)
        .map(|&(_, kind, repr)| (kind, repr))
}
