//! A walk through every placeholder kind.
//!
//! Run with `RUST_LOG=tagfmt=trace` to see which placeholders were echoed and
//! why.
#![allow(missing_docs)]

use tagfmt::{FormatOptions, args, eprintln, format_line_to_with, print, println};

fn main() {
    env_logger::init();

    let num = 666i32;
    let byte = 111u8;
    let pi = 3.1415f32;
    let e = 2.718281828459045f64;
    let phi = 1.618033988749895f64;

    print!("{s}", "Hello ");
    print!("{s}", "World");
    println!("{c}", '!');
    println!("");

    println!("V temnote šepká šťastná čarodejnica. 🪄");
    println!("Мрак скрывает древнюю магию в заброшенном замке. 🏰");
    println!("");

    println!(
        "Mixed:\n  i32: {i32}\n  u8: {u8}\n  f64: {f64.5}\n  String: {s}\n  Char: {c}\n  Char: {c}",
        num,
        num,
        pi,
        "Tagged",
        'Z',
        64u16,
    );
    println!("");

    println!("f32 default:       \t{f32}", pi);
    println!("f64 precision(6):  \t{f64.6}", e);
    println!("f128 default:      \t{f128}", phi);
    println!("f128 precision(9): \t{f128.9}", phi);
    println!("");

    println!("i32 binary:        \t{i32:b}", num);
    println!("i8 binary with _:  \t{i8:B}", byte);
    println!("i16 lowercase hex: \t{i16:x}", byte);
    println!("i16 uppercase hex: \t{i16:X}", byte);
    println!("f32 binary:        \t{f32:b}", pi);
    println!("");

    let ptr: *const i32 = &num;
    println!("*ptr lower:        \t{p}", ptr);
    println!("*ptr upper:        \t{P}", ptr);
    println!("");

    println!("Empty string:      \t\"{s}\"", "");
    println!("Null string:       \t\"{s}\"", None::<&str>);
    println!("Braces:            \t{{i32}} {i32}", 42);
    println!("Malformed:         \t{i32", 42);
    println!("Invalid:           \t{f32.-1}", 5);
    println!("Missing argument:  \t{u64}");
    println!("");

    let legacy = FormatOptions {
        legacy_shorthand: true,
        ..FormatOptions::default()
    };
    let stdout = &mut std::io::stdout().lock();
    let shorthand = format_line_to_with(
        stdout,
        &legacy,
        "Shorthand:         \t{x8} {X16} {b8} {B16}",
        &args![123u8, 12345u16, 123u8, 12345u16],
    );
    if let Err(err) = shorthand {
        eprintln!("{s}", err.to_string().as_str());
    }

    let narrow = FormatOptions {
        capacity: 16,
        ..FormatOptions::default()
    };
    let clipped = format_line_to_with(
        stdout,
        &narrow,
        "Truncated:         \t{u64:B}",
        &args![u64::MAX],
    );
    if let Ok(out) = clipped {
        println!("(kept {u64} of {u64} bytes)", out.len(), out.capacity());
    }
}
