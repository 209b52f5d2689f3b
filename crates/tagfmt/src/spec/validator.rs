//! Per-kind legality of modifiers.
//!
//! | class              | precision | representation          |
//! |--------------------|-----------|-------------------------|
//! | integer, pointer   | no        | decimal, hex, binary    |
//! | float              | yes       | decimal, binary         |
//! | char, string       | no        | decimal (none given)    |

use super::{InvalidSpec, PlaceholderSpec};
use crate::kind::{KindClass, Representation};

pub(crate) fn validate(spec: PlaceholderSpec) -> Result<PlaceholderSpec, InvalidSpec> {
    let PlaceholderSpec {
        kind,
        representation,
        precision,
    } = spec;

    let precision_ok = matches!(kind.class(), KindClass::Float) || precision.is_none();
    if !precision_ok {
        return Err(InvalidSpec::PrecisionNotAllowed(kind));
    }

    let representation_ok = match kind.class() {
        KindClass::Integer | KindClass::Pointer => true,
        KindClass::Float => !representation.is_hex(),
        KindClass::Text => representation == Representation::Decimal,
    };
    if !representation_ok {
        return Err(InvalidSpec::RepresentationNotAllowed(kind, representation));
    }

    Ok(spec)
}
