// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Minimal printf-style formatter.
//!
//! Targets running the harness may have no formatted output at all, so the
//! harness brings its own. Output goes one byte at a time to a [`CharSink`].
//!
//! ## Directives
//!
//! | Directive | Argument                    | Output                                  |
//! |-----------|-----------------------------|-----------------------------------------|
//! | `%%`      | none                        | literal `%`                             |
//! | `%d`      | [`Arg::Int`] / [`Arg::Uint`] | decimal, `-` prefix for negative `Int` |
//! | `%x`      | [`Arg::Int`] / [`Arg::Uint`] | hex, zero-padded to [`HEX_WIDTH`]      |
//! | `%s`      | [`Arg::Str`]                | string from RAM                         |
//! | `%P`      | [`Arg::Text`] / [`Arg::Str`] | string from either address space       |
//!
//! Any other character after `%` is consumed without output and the
//! formatter keeps looking for a directive, so `%08x` prints the same as
//! `%x`. A directive whose argument is missing or of the wrong kind prints
//! nothing.


use crate::sink::CharSink;
use crate::text::{Text, TextSource};

/// Signed integer width of the target.
#[cfg(not(feature = "int16"))]
pub type Int = i32;

/// Unsigned integer width of the target.
#[cfg(not(feature = "int16"))]
pub type Uint = u32;

/// Signed integer width of the target.
#[cfg(feature = "int16")]
pub type Int = i16;

/// Unsigned integer width of the target.
#[cfg(feature = "int16")]
pub type Uint = u16;

/// Number of digits printed by `%x`.
pub const HEX_WIDTH: usize = 2 * core::mem::size_of::<Uint>();

/// Size of the digit scratch buffer: the widest magnitude plus one spare slot.
pub const SCRATCH_LEN: usize = decimal_digits(Uint::MAX) + 1;

const fn decimal_digits(mut value: Uint) -> usize {
    let mut digits = 1;
    while value >= 10 {
        value /= 10;
        digits += 1;
    }
    digits
}

// Compile-time verification of the scratch buffer capacity
const _: () = {
    assert!(decimal_digits(Uint::MAX) < SCRATCH_LEN);
    assert!(HEX_WIDTH < SCRATCH_LEN);
};

/// One formatter argument.
#[derive(Clone, Copy, Debug)]
pub enum Arg<'a> {
    /// Signed integer.
    Int(Int),
    /// Unsigned integer.
    Uint(Uint),
    /// String in RAM.
    Str(&'a str),
    /// String in either address space.
    Text(Text<'a>),
}

impl From<Int> for Arg<'_> {
    fn from(value: Int) -> Self {
        Self::Int(value)
    }
}

impl From<Uint> for Arg<'_> {
    fn from(value: Uint) -> Self {
        Self::Uint(value)
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(s: &'a str) -> Self {
        Self::Str(s)
    }
}

impl<'a> From<Text<'a>> for Arg<'a> {
    fn from(text: Text<'a>) -> Self {
        Self::Text(text)
    }
}

/// Format `fmt` with `args` and emit the result to `sink`.
pub fn print<S, T>(sink: &mut S, fmt: &T, args: &[Arg<'_>])
where
    S: CharSink + ?Sized,
    T: TextSource + ?Sized,
{
    let mut args = args.iter().copied();
    let mut in_directive = false;

    for c in fmt.scan() {
        if !in_directive {
            if c == b'%' {
                in_directive = true;
            } else {
                sink.emit(c);
            }
            continue;
        }

        match c {
            b'%' => sink.emit(b'%'),
            b'd' => match args.next() {
                Some(Arg::Int(value)) => print_signed(sink, value),
                Some(Arg::Uint(value)) => print_unsigned(sink, value, 10, 0),
                _ => {}
            },
            b'x' => match args.next() {
                Some(Arg::Int(value)) => {
                    print_unsigned(sink, Uint::from_ne_bytes(value.to_ne_bytes()), 16, HEX_WIDTH);
                }
                Some(Arg::Uint(value)) => print_unsigned(sink, value, 16, HEX_WIDTH),
                _ => {}
            },
            b's' => {
                if let Some(Arg::Str(s)) = args.next() {
                    print_text(sink, s);
                }
            }
            b'P' => match args.next() {
                Some(Arg::Text(text)) => print_text(sink, &text),
                Some(Arg::Str(s)) => print_text(sink, s),
                _ => {}
            },
            // Unknown directive character, keep scanning
            _ => continue,
        }
        in_directive = false;
    }
}

/// Emit text verbatim.
pub fn print_text<S, T>(sink: &mut S, text: &T)
where
    S: CharSink + ?Sized,
    T: TextSource + ?Sized,
{
    for byte in text.scan() {
        sink.emit(byte);
    }
}

fn print_signed<S: CharSink + ?Sized>(sink: &mut S, value: Int) {
    if value < 0 {
        sink.emit(b'-');
    }
    print_unsigned(sink, value.unsigned_abs(), 10, 0);
}

/// Digits are produced least significant first into the scratch buffer,
/// which is pre-filled with `'0'` so that zero fill is a matter of starting
/// the output earlier.
#[allow(clippy::cast_possible_truncation)] // digit < base <= 16
fn print_unsigned<S: CharSink + ?Sized>(sink: &mut S, mut value: Uint, base: Uint, width: usize) {
    let mut buf = [b'0'; SCRATCH_LEN];
    let mut pos = SCRATCH_LEN;
    loop {
        pos -= 1;
        let digit = (value % base) as u8;
        buf[pos] = if digit < 10 {
            b'0' + digit
        } else {
            b'a' + (digit - 10)
        };
        value /= base;
        if value == 0 {
            break;
        }
    }

    let start = pos.min(SCRATCH_LEN - width);
    for &byte in &buf[start..] {
        sink.emit(byte);
    }
}
