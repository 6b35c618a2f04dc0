// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Guard patterns for detecting stray writes.
//!
//! A test fills a buffer with a seeded pseudo-random pattern, runs the code
//! under test, then checks with [`tt_verify_memory!`](crate::tt_verify_memory)
//! that the buffer was not touched. The pattern never contains `0x00` or
//! `0xff`, both common values in clobbered memory.


use crate::fmt::{Arg, Uint};

/// Xorshift32 generator producing the guard pattern.
struct Pattern(u32);

impl Pattern {
    const fn new(seed: u32) -> Self {
        // Xorshift has a fixed point at zero
        let state = seed ^ 0x9E37_79B9;
        Self(if state == 0 { 0x2545_F491 } else { state })
    }

    const fn next_byte(&mut self) -> u8 {
        loop {
            let mut x = self.0;
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            self.0 = x;
            let [byte, ..] = x.to_be_bytes();
            if byte != 0x00 && byte != 0xff {
                return byte;
            }
        }
    }
}

/// Fill `buf` with the guard pattern for `seed`.
pub fn fill_memory(buf: &mut [u8], seed: u32) {
    let mut pattern = Pattern::new(seed);
    for byte in buf {
        *byte = pattern.next_byte();
    }
}

/// Offset of the first byte of `buf` that differs from the guard pattern.
#[must_use]
pub fn first_mismatch(buf: &[u8], seed: u32) -> Option<usize> {
    let mut pattern = Pattern::new(seed);
    buf.iter().position(|&byte| byte != pattern.next_byte())
}

/// Formatter argument for a buffer offset.
#[doc(hidden)]
#[must_use]
#[allow(clippy::cast_possible_truncation)] // guarded buffers are far below Uint::MAX
pub const fn offset_arg(offset: usize) -> Arg<'static> {
    Arg::Uint(offset as Uint)
}
