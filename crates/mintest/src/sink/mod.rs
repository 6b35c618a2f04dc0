// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Character output.
//!
//! The harness only ever needs to emit one byte at a time. Platforms supply
//! that primitive by implementing [`CharSink`]:
//! - `mock` - Testing sink backed by a `Vec`
//! - [`FnSink`] - Wraps a platform `putchar`-style function or closure


#[cfg(any(test, feature = "std"))]
mod mock;

#[cfg(any(test, feature = "std"))]
pub use mock::MockSink;

/// Line terminator used by every report line.
#[cfg(not(feature = "crlf"))]
pub const NEWLINE: &str = "\n";

/// Line terminator used by every report line.
#[cfg(feature = "crlf")]
pub const NEWLINE: &str = "\r\n";

/// Platform-supplied single character output.
pub trait CharSink {
    /// Emit a single byte. Must not block indefinitely.
    fn emit(&mut self, byte: u8);
}

/// Extension trait providing convenience methods for sinks.
pub trait CharSinkExt: CharSink {
    /// Write a string slice.
    fn write_str(&mut self, s: &str) {
        for byte in s.bytes() {
            self.emit(byte);
        }
    }

    /// Write the report line terminator.
    fn write_newline(&mut self) {
        self.write_str(NEWLINE);
    }

    /// Write a string slice followed by the line terminator.
    fn write_line(&mut self, s: &str) {
        self.write_str(s);
        self.write_newline();
    }
}

// Blanket implementation for all sinks, including trait objects
impl<T: CharSink + ?Sized> CharSinkExt for T {}

impl<T: CharSink + ?Sized> CharSink for &mut T {
    fn emit(&mut self, byte: u8) {
        (**self).emit(byte);
    }
}

/// Sink that forwards every byte to a function.
///
/// ```
/// use mintest::{CharSink, FnSink};
///
/// let mut count = 0;
/// let mut sink = FnSink(|_byte| count += 1);
/// sink.emit(b'x');
/// drop(sink);
/// assert_eq!(count, 1);
/// ```
pub struct FnSink<F: FnMut(u8)>(pub F);

impl<F: FnMut(u8)> CharSink for FnSink<F> {
    fn emit(&mut self, byte: u8) {
        (self.0)(byte);
    }
}
