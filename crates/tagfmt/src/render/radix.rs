//! Locale-free integer rendering: decimal, fixed-width hex, and MSB-first
//! binary.

use super::scratch::Scratch;

const HEX_LOWER: &[u8; 16] = b"0123456789abcdef";
const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Inserted every four bits in grouped binary.
pub(crate) const GROUP_SEPARATOR: u8 = b'_';

/// Keeps the low `bits` bits of `value`.
#[inline]
pub(crate) fn truncate(value: u64, bits: u32) -> u64 {
    if bits >= u64::BITS {
        value
    } else {
        value & ((1 << bits) - 1)
    }
}

/// Reads the low `bits` bits of `value` as a two's complement integer.
#[inline]
#[allow(clippy::cast_possible_wrap)]
pub(crate) fn sign_extend(value: u64, bits: u32) -> i64 {
    let shift = u64::BITS - bits.min(u64::BITS);
    ((value << shift) as i64) >> shift
}

pub(crate) fn write_unsigned(out: &mut Scratch, mut value: u64) {
    // u64::MAX has 20 decimal digits.
    let mut digits = [0u8; 20];
    let mut pos = digits.len();
    loop {
        pos -= 1;
        #[allow(clippy::cast_possible_truncation)]
        let digit = (value % 10) as u8;
        digits[pos] = b'0' + digit;
        value /= 10;
        if value == 0 {
            break;
        }
    }
    out.push_slice(&digits[pos..]);
}

pub(crate) fn write_signed(out: &mut Scratch, value: i64) {
    if value < 0 {
        out.push(b'-');
    }
    write_unsigned(out, value.unsigned_abs());
}

/// Exactly `bits / 4` digits, zero-padded, no prefix.
pub(crate) fn write_hex(out: &mut Scratch, value: u64, bits: u32, upper: bool) {
    let table = if upper { HEX_UPPER } else { HEX_LOWER };
    let nibbles = bits.div_ceil(4);
    for i in (0..nibbles).rev() {
        #[allow(clippy::cast_possible_truncation)]
        let nibble = ((value >> (i * 4)) & 0xF) as usize;
        out.push(table[nibble]);
    }
}

/// Exactly `bits` digits, most-significant first.
///
/// Grouped output puts a separator before every run of four bits counted from
/// the least-significant end, which gives `(bits - 1) / 4` separators.
pub(crate) fn write_binary(out: &mut Scratch, value: u128, bits: u32, grouped: bool) {
    for i in (0..bits).rev() {
        let bit = (value >> i) & 1;
        out.push(if bit == 1 { b'1' } else { b'0' });
        if grouped && i > 0 && i % 4 == 0 {
            out.push(GROUP_SEPARATOR);
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use rstest::rstest;

    use super::*;

    fn run(f: impl FnOnce(&mut Scratch)) -> Vec<u8> {
        let mut scratch = Scratch::new();
        f(&mut scratch);
        scratch.as_bytes().to_vec()
    }

    #[rstest]
    #[case(0, "0")]
    #[case(7, "7")]
    #[case(1_000, "1000")]
    #[case(u64::MAX, "18446744073709551615")]
    fn unsigned_decimal(#[case] value: u64, #[case] expected: &str) {
        assert_eq!(run(|s| write_unsigned(s, value)), expected.as_bytes());
    }

    #[rstest]
    #[case(0, "0")]
    #[case(-42, "-42")]
    #[case(i64::MIN, "-9223372036854775808")]
    #[case(i64::MAX, "9223372036854775807")]
    fn signed_decimal(#[case] value: i64, #[case] expected: &str) {
        assert_eq!(run(|s| write_signed(s, value)), expected.as_bytes());
    }

    #[rstest]
    #[case(0xff, 8, false, "ff")]
    #[case(0x5, 8, true, "05")]
    #[case(0x3039, 16, true, "3039")]
    #[case(0x12d687, 32, false, "0012d687")]
    #[case(0x4996_02d2, 64, true, "00000000499602D2")]
    fn fixed_width_hex(#[case] value: u64, #[case] bits: u32, #[case] upper: bool, #[case] expected: &str) {
        assert_eq!(run(|s| write_hex(s, value, bits, upper)), expected.as_bytes());
    }

    #[rstest]
    #[case(5, 16, true, "0000_0000_0000_0101")]
    #[case(5, 16, false, "0000000000000101")]
    #[case(123, 8, false, "01111011")]
    #[case(0x85, 8, true, "1000_0101")]
    #[case(1, 1, true, "1")]
    #[case(0b1_0000, 5, true, "1_0000")]
    fn binary(#[case] value: u128, #[case] bits: u32, #[case] grouped: bool, #[case] expected: &str) {
        assert_eq!(run(|s| write_binary(s, value, bits, grouped)), expected.as_bytes());
    }

    #[test]
    fn narrowing() {
        assert_eq!(truncate(0x1ff, 8), 0xff);
        assert_eq!(truncate(u64::MAX, 64), u64::MAX);
        assert_eq!(sign_extend(0x85, 8), -123);
        assert_eq!(sign_extend(0x7f, 8), 127);
        assert_eq!(sign_extend(u64::MAX, 64), -1);
        assert_eq!(sign_extend(0x8000, 16), i64::from(i16::MIN));
    }
}
