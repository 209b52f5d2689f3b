#![no_main]
use std::cell::RefCell;

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use tagfmt::{Arg, ArgumentCursor, FormatOptions, OutputBuffer, format_into, format_with};

// flags, capacity (u16 le), length of the argument bytes
const HEADER: usize = 4;

thread_local! {
    static RNG: RefCell<SmallRng> = RefCell::new(SmallRng::from_os_rng());
}

/// Fragments the mutator splices into patterns: valid placeholders, invalid
/// ones, escapes, stray braces and multi-byte text.
static TOKEN_TABLE: &[&[u8]] = &[
    b"{i8}", b"{i16:x}", b"{i32}", b"{i64:B}", b"{u8:X}", b"{u16:b}", b"{u32}", b"{u64:x}",
    b"{f32}", b"{f64.2}", b"{f128:B}", b"{f64.128}", b"{f32.4294967295}", b"{c}", b"{s}",
    b"{p}", b"{P:b}", b"{x8}", b"{B64}", b"{P32}", b"{f64:x}", b"{s.0}", b"{i32:b.0}",
    b"{f32.-1}", b"{u8:}", b"{}", b"{{", b"}}", b"{", b"}", b" ", b"text", "š🪄".as_bytes(),
    b"\xff",
];

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if max_size <= HEADER || (size >= HEADER && !seed.is_multiple_of(10)) {
        return fuzzer_mutate(data, size, max_size);
    }

    with_rng(|rng| {
        data[0] = rng.random();
        data[1..3].copy_from_slice(&rng.random_range(0u16..512).to_le_bytes());
        let args_len = rng.random_range(0..=64).min(max_size - HEADER);
        data[3] = args_len as u8;
        let mut written = HEADER;
        rng.fill_bytes(&mut data[written..written + args_len]);
        written += args_len;

        let target = rng.random_range(written..=max_size);
        while written < target {
            let token = TOKEN_TABLE[rng.random_range(0..TOKEN_TABLE.len())];
            if written + token.len() > target {
                break;
            }
            data[written..written + token.len()].copy_from_slice(token);
            written += token.len();
        }
        written
    })
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug, Arbitrary)]
enum FuzzArg {
    Int(i64),
    Uint(u64),
    F32(f32),
    F64(f64),
    Char(char),
    Str(Option<Vec<u8>>),
    Ptr(usize),
}

impl FuzzArg {
    fn as_arg(&self) -> Arg<'_> {
        match self {
            FuzzArg::Int(v) => Arg::Int(*v),
            FuzzArg::Uint(v) => Arg::Uint(*v),
            FuzzArg::F32(v) => Arg::F32(*v),
            FuzzArg::F64(v) => Arg::F64(*v),
            FuzzArg::Char(c) => Arg::Char(*c),
            FuzzArg::Str(s) => Arg::Str(s.as_deref()),
            FuzzArg::Ptr(p) => Arg::Ptr(*p),
        }
    }
}

fn format(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }

    let flags = data[0];
    let capacity = usize::from(u16::from_le_bytes([data[1], data[2]]));
    let args_end = (HEADER + usize::from(data[3])).min(data.len());
    let owned: Vec<FuzzArg> = Unstructured::new(&data[HEADER..args_end])
        .arbitrary()
        .unwrap_or_default();
    let args: Vec<Arg<'_>> = owned.iter().map(FuzzArg::as_arg).collect();
    let pattern = &data[args_end..];

    let options = FormatOptions {
        capacity,
        legacy_shorthand: flags & 1 != 0,
    };
    let unbounded = FormatOptions {
        capacity: usize::MAX,
        ..options
    };

    let mut cursor = ArgumentCursor::new(&args);
    let mut out = OutputBuffer::with_capacity(capacity);
    format_into(&mut out, &options, pattern, &mut cursor);
    let full = format_with(&unbounded, pattern, &args);

    assert!(out.len() <= capacity);
    assert!(cursor.position() <= args.len());
    assert!(full.as_bytes().starts_with(out.as_bytes()));
    assert_eq!(out.is_truncated(), full.len() > capacity);
    if !pattern.contains(&b'{') && !pattern.contains(&b'}') {
        assert_eq!(full.as_bytes(), pattern);
    }
}

fuzz_target!(|data: &[u8]| format(data));
