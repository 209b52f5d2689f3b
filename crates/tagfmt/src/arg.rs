//! Typed argument capture.
//!
//! Every argument is converted at the call site into an [`Arg`], a tagged
//! value that the formatter consumes in order through an [`ArgumentCursor`].
//!
//! # Promotion
//!
//! Integers are widened when captured, the way variadic arguments are
//! promoted: signed values are sign-extended into [`Arg::Int`] and unsigned
//! values are zero-extended into [`Arg::Uint`]. A placeholder then narrows the
//! promoted value to its own width by truncation, so `{u8}` reads the low 8
//! bits of whatever integer sits at its position and `{i8:x}` of `-123` is
//! `85`.
//!
//! `f32` values keep their width in [`Arg::F32`]; they are promoted to `f64`
//! when read by `{f64}`/`{f128}` and any other float is narrowed to `f32`
//! when read by `{f32}`.
//!
//! # Mismatches
//!
//! Nothing ties a placeholder's kind to the argument's tag. A mismatch is a
//! caller mistake, but it has defined output: numeric kinds coerce the value
//! (a string contributes its address), `{s}` of a non-string renders
//! `(null)` and `{c}` of an integer renders its low byte.

use bstr::BStr;

/// One captured argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Arg<'a> {
    /// Any signed integer, sign-extended.
    Int(i64),
    /// Any unsigned integer, zero-extended.
    Uint(u64),
    /// A single-precision float.
    F32(f32),
    /// A double-precision float. Also carries `{f128}` values.
    F64(f64),
    /// A Unicode scalar value.
    Char(char),
    /// A byte string; `None` is a null reference and renders `(null)`.
    Str(Option<&'a [u8]>),
    /// An address.
    Ptr(usize),
}

impl<'a> Arg<'a> {
    /// The null string argument.
    pub const NULL: Arg<'static> = Arg::Str(None);

    /// Captures `value`.
    pub fn new<T: IntoArg<'a>>(value: T) -> Self {
        value.into_arg()
    }

    /// The promoted integer bits of this argument.
    #[allow(
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap
    )]
    pub(crate) fn int_bits(self) -> u64 {
        match self {
            Arg::Int(v) => v as u64,
            Arg::Uint(v) => v,
            Arg::F32(v) => f64::from(v) as i64 as u64,
            Arg::F64(v) => v as i64 as u64,
            Arg::Char(c) => u64::from(u32::from(c)),
            Arg::Str(s) => s.map_or(0, |s| s.as_ptr().addr() as u64),
            Arg::Ptr(p) => p as u64,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn as_f64(self) -> f64 {
        match self {
            Arg::Int(v) => v as f64,
            Arg::Uint(v) => v as f64,
            Arg::F32(v) => f64::from(v),
            Arg::F64(v) => v,
            Arg::Char(c) => f64::from(u32::from(c)),
            Arg::Str(_) | Arg::Ptr(_) => self.int_bits() as f64,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn as_f32(self) -> f32 {
        match self {
            Arg::F32(v) => v,
            other => other.as_f64() as f32,
        }
    }
}

/// Conversion of a call-site value into an [`Arg`].
pub trait IntoArg<'a> {
    /// Performs the conversion.
    fn into_arg(self) -> Arg<'a>;
}

impl<'a> IntoArg<'a> for Arg<'a> {
    fn into_arg(self) -> Arg<'a> {
        self
    }
}

macro_rules! impl_signed_into_arg {
    ($($t:ty),+) => {
        $(
            impl<'a> IntoArg<'a> for $t {
                #[allow(clippy::cast_lossless, clippy::cast_possible_wrap, trivial_numeric_casts)]
                fn into_arg(self) -> Arg<'a> {
                    Arg::Int(self as i64)
                }
            }
        )+
    };
}
impl_signed_into_arg!(i8, i16, i32, i64, isize);

macro_rules! impl_unsigned_into_arg {
    ($($t:ty),+) => {
        $(
            impl<'a> IntoArg<'a> for $t {
                #[allow(clippy::cast_lossless, clippy::cast_possible_wrap, trivial_numeric_casts)]
                fn into_arg(self) -> Arg<'a> {
                    Arg::Uint(self as u64)
                }
            }
        )+
    };
}
impl_unsigned_into_arg!(u8, u16, u32, u64, usize);

impl<'a> IntoArg<'a> for f32 {
    fn into_arg(self) -> Arg<'a> {
        Arg::F32(self)
    }
}

impl<'a> IntoArg<'a> for f64 {
    fn into_arg(self) -> Arg<'a> {
        Arg::F64(self)
    }
}

impl<'a> IntoArg<'a> for char {
    fn into_arg(self) -> Arg<'a> {
        Arg::Char(self)
    }
}

impl<'a> IntoArg<'a> for &'a str {
    fn into_arg(self) -> Arg<'a> {
        Arg::Str(Some(self.as_bytes()))
    }
}

impl<'a> IntoArg<'a> for &'a alloc::string::String {
    fn into_arg(self) -> Arg<'a> {
        Arg::Str(Some(self.as_bytes()))
    }
}

impl<'a> IntoArg<'a> for &'a [u8] {
    fn into_arg(self) -> Arg<'a> {
        Arg::Str(Some(self))
    }
}

impl<'a, const N: usize> IntoArg<'a> for &'a [u8; N] {
    fn into_arg(self) -> Arg<'a> {
        Arg::Str(Some(self.as_slice()))
    }
}

impl<'a> IntoArg<'a> for &'a BStr {
    fn into_arg(self) -> Arg<'a> {
        Arg::Str(Some(self.as_ref()))
    }
}

impl<'a> IntoArg<'a> for Option<&'a str> {
    fn into_arg(self) -> Arg<'a> {
        Arg::Str(self.map(str::as_bytes))
    }
}

impl<'a> IntoArg<'a> for Option<&'a [u8]> {
    fn into_arg(self) -> Arg<'a> {
        Arg::Str(self)
    }
}

impl<'a, T: ?Sized> IntoArg<'a> for *const T {
    fn into_arg(self) -> Arg<'a> {
        Arg::Ptr(self.cast::<()>().addr())
    }
}

impl<'a, T: ?Sized> IntoArg<'a> for *mut T {
    fn into_arg(self) -> Arg<'a> {
        Arg::Ptr(self.cast::<()>().addr())
    }
}

/// Forward-only view over a call's arguments.
///
/// Each rendered placeholder takes exactly one argument; echoed placeholders
/// take none. Arguments left over at the end of a call are ignored.
#[derive(Debug, Clone)]
pub struct ArgumentCursor<'s, 'a> {
    args: &'s [Arg<'a>],
    position: usize,
}

impl<'s, 'a> ArgumentCursor<'s, 'a> {
    /// Starts before the first argument.
    #[must_use]
    pub fn new(args: &'s [Arg<'a>]) -> Self {
        Self { args, position: 0 }
    }

    /// Takes the next argument, or `None` once the list is exhausted.
    pub fn next_arg(&mut self) -> Option<Arg<'a>> {
        let arg = self.args.get(self.position).copied()?;
        self.position += 1;
        Some(arg)
    }

    /// Number of arguments consumed so far.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of arguments not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.args.len() - self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_are_promoted() {
        assert_eq!(Arg::new(-1i8), Arg::Int(-1));
        assert_eq!(Arg::new(i16::MIN), Arg::Int(-32768));
        assert_eq!(Arg::new(255u8), Arg::Uint(255));
        assert_eq!(Arg::new(u64::MAX), Arg::Uint(u64::MAX));
        assert_eq!(Arg::new(-1i8).int_bits(), u64::MAX);
    }

    #[test]
    fn strings_and_null() {
        assert_eq!(Arg::new("hi"), Arg::Str(Some(b"hi".as_slice())));
        assert_eq!(Arg::new(None::<&str>), Arg::NULL);
        assert_eq!(Arg::new(b"raw"), Arg::Str(Some(b"raw".as_slice())));
        assert_eq!(Arg::new(BStr::new("b")), Arg::Str(Some(b"b".as_slice())));
    }

    #[test]
    fn pointers_capture_their_address() {
        let value = 7u32;
        let ptr: *const u32 = &value;
        assert_eq!(Arg::new(ptr), Arg::Ptr(ptr.addr()));
        let slice: *const [u8] = b"abc".as_slice();
        assert_eq!(Arg::new(slice), Arg::Ptr(slice.cast::<u8>().addr()));
    }

    #[test]
    fn float_width_follows_reader() {
        let arg = Arg::new(3.1415f32);
        assert_eq!(arg.as_f32(), 3.1415f32);
        assert_eq!(arg.as_f64(), f64::from(3.1415f32));
        assert_eq!(Arg::new(2.5f64).as_f32(), 2.5f32);
        assert_eq!(Arg::new(3i32).as_f64(), 3.0);
    }

    #[test]
    fn cursor_moves_forward_only() {
        let args = [Arg::new(1i32), Arg::new("two")];
        let mut cursor = ArgumentCursor::new(&args);
        assert_eq!(cursor.remaining(), 2);
        assert_eq!(cursor.next_arg(), Some(Arg::Int(1)));
        assert_eq!(cursor.next_arg(), Some(Arg::Str(Some(b"two".as_slice()))));
        assert_eq!(cursor.next_arg(), None);
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.remaining(), 0);
    }
}
