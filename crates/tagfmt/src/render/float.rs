use core::fmt::Write;

use super::scratch::Scratch;

/// Fixed-point text with exactly `precision` fraction digits; never uses an
/// exponent.
pub(crate) fn write_fixed(out: &mut Scratch, value: f64, precision: usize) {
    if value.is_nan() {
        out.push_slice(if value.is_sign_negative() { b"-nan" } else { b"nan" });
        return;
    }
    if value.is_infinite() {
        out.push_slice(if value < 0.0 { b"-inf" } else { b"inf" });
        return;
    }
    // Scratch never reports an error.
    let _ = write!(out, "{value:.precision$}");
}

const F64_EXP_BIAS: i32 = 1023;
const F128_EXP_BIAS: i32 = 16383;
const F64_FRACTION_BITS: u32 = 52;
const F128_FRACTION_BITS: u32 = 112;
const F64_FRACTION_MASK: u64 = (1 << F64_FRACTION_BITS) - 1;

/// IEEE 754 binary128 bit pattern of `value`.
///
/// Every `f64` is exactly representable in binary128: the fraction is
/// shifted up and the exponent rebiased. Subnormal inputs are normalized.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]
pub(crate) fn quad_bits(value: f64) -> u128 {
    const SHIFT: u32 = F128_FRACTION_BITS - F64_FRACTION_BITS;

    let bits = value.to_bits();
    let sign = u128::from(bits >> 63) << 127;
    let exponent = ((bits >> F64_FRACTION_BITS) & 0x7ff) as i32;
    let fraction = bits & F64_FRACTION_MASK;

    match (exponent, fraction) {
        (0, 0) => sign,
        (0, _) => {
            let lift = fraction.leading_zeros() - (u64::BITS - 1 - F64_FRACTION_BITS);
            let fraction = (fraction << lift) & F64_FRACTION_MASK;
            let exponent = 1 - F64_EXP_BIAS - lift as i32 + F128_EXP_BIAS;
            sign | ((exponent as u128) << F128_FRACTION_BITS) | (u128::from(fraction) << SHIFT)
        }
        (0x7ff, _) => sign | (0x7fff << F128_FRACTION_BITS) | (u128::from(fraction) << SHIFT),
        _ => {
            let exponent = exponent - F64_EXP_BIAS + F128_EXP_BIAS;
            sign | ((exponent as u128) << F128_FRACTION_BITS) | (u128::from(fraction) << SHIFT)
        }
    }
}
