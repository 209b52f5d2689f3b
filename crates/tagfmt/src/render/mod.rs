//! Value formatter: renders one argument according to a validated spec.
//!
//! Numeric, pointer and char values are rendered into a fixed [`Scratch`]
//! region sized for the worst case of every supported kind. Strings have no
//! bound, so they are never copied into scratch; the caller receives a
//! borrowed slice of the argument instead (see [`Rendered`]).

mod float;
mod radix;
mod scratch;


pub(crate) use scratch::Scratch;

use crate::{
    arg::Arg,
    kind::{Kind, KindClass, Representation},
    spec::PlaceholderSpec,
};

/// Text of a null or non-string argument given to `{s}`.
pub const NULL_TEXT: &[u8] = b"(null)";

/// Where the rendered bytes of one value live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rendered<'r, 'a> {
    /// Rendered into the scratch region.
    Scratch(&'r [u8]),
    /// Taken verbatim from the argument.
    Borrowed(&'a [u8]),
}

impl Rendered<'_, '_> {
    pub(crate) fn as_bytes(&self) -> &[u8] {
        match self {
            Rendered::Scratch(bytes) | Rendered::Borrowed(bytes) => bytes,
        }
    }
}

/// Renders `arg` as described by `spec`.
///
/// `spec` must have passed validation; the representation is trusted.
pub(crate) fn render<'r, 'a>(
    spec: &PlaceholderSpec,
    arg: Arg<'a>,
    scratch: &'r mut Scratch,
) -> Rendered<'r, 'a> {
    scratch.clear();
    match spec.kind.class() {
        KindClass::Integer => render_integer(spec, arg, scratch),
        KindClass::Pointer => render_pointer(spec, arg, scratch),
        KindClass::Float => render_float(spec, arg, scratch),
        KindClass::Text => {
            if spec.kind == Kind::Str {
                return Rendered::Borrowed(match arg {
                    Arg::Str(Some(text)) => text,
                    _ => NULL_TEXT,
                });
            }
            render_char(arg, scratch);
        }
    }
    Rendered::Scratch(scratch.as_bytes())
}

fn render_integer(spec: &PlaceholderSpec, arg: Arg<'_>, out: &mut Scratch) {
    let bits = spec.kind.bits();
    let value = radix::truncate(arg.int_bits(), bits);
    match spec.representation {
        Representation::Decimal if spec.kind.is_signed() => {
            radix::write_signed(out, radix::sign_extend(value, bits));
        }
        Representation::Decimal => radix::write_unsigned(out, value),
        Representation::HexLower => radix::write_hex(out, value, bits, false),
        Representation::HexUpper => radix::write_hex(out, value, bits, true),
        binary => radix::write_binary(out, value.into(), bits, binary.is_grouped()),
    }
}

/// The kind alone decides the case of a pointer; `:x`/`:X` do not override
/// it.
fn render_pointer(spec: &PlaceholderSpec, arg: Arg<'_>, out: &mut Scratch) {
    let bits = spec.kind.bits();
    let address = radix::truncate(arg.int_bits(), bits);
    if spec.representation.is_binary() {
        radix::write_binary(out, address.into(), bits, spec.representation.is_grouped());
    } else {
        radix::write_hex(out, address, bits, spec.kind == Kind::PtrUpper);
    }
}

fn render_float(spec: &PlaceholderSpec, arg: Arg<'_>, out: &mut Scratch) {
    if !spec.representation.is_binary() {
        let value = match spec.kind {
            Kind::F32 => f64::from(arg.as_f32()),
            _ => arg.as_f64(),
        };
        float::write_fixed(out, value, spec.effective_precision());
        return;
    }

    let pattern = match spec.kind {
        Kind::F32 => u128::from(arg.as_f32().to_bits()),
        Kind::F64 => u128::from(arg.as_f64().to_bits()),
        _ => float::quad_bits(arg.as_f64()),
    };
    radix::write_binary(out, pattern, spec.kind.bits(), spec.representation.is_grouped());
}

/// A `char` renders as its UTF-8 encoding; anything else renders its low
/// byte.
fn render_char(arg: Arg<'_>, out: &mut Scratch) {
    match arg {
        Arg::Char(c) => {
            let mut utf8 = [0u8; 4];
            out.push_slice(c.encode_utf8(&mut utf8).as_bytes());
        }
        other => {
            #[allow(clippy::cast_possible_truncation)]
            let byte = other.int_bits() as u8;
            out.push(byte);
        }
    }
}
