// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Constant text sources.
//!
//! Harvard-architecture parts keep constant strings in program memory, which
//! is not addressable by ordinary loads. The harness therefore never reads
//! text through a slice directly but through [`TextSource`], which has two
//! implementations:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │          Formatter, runner, group filter                │
//! └─────────────────────────────────────────────────────────┘
//!                           │
//!                           ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                    `TextSource`                          │
//! └─────────────────────────────────────────────────────────┘
//!            │                              │
//!            ▼                              ▼
//! ┌─────────────────────┐      ┌─────────────────────────────┐
//! │   `str` (inline)    │      │  `PagedStr` over            │
//! │                     │      │  `ProgramMemory`            │
//! └─────────────────────┘      └─────────────────────────────┘
//! ```
//!
//! Text ends at the first NUL byte or at the end of the data, whichever
//! comes first.


#[cfg(any(test, feature = "std"))]
mod mock;

#[cfg(any(test, feature = "std"))]
pub use mock::MockProgramMemory;

use core::fmt;

/// Byte-at-a-time access to constant text.
pub trait TextSource {
    /// Byte at `index`, or `None` once the text has ended.
    fn byte_at(&self, index: usize) -> Option<u8>;

    /// Iterate over the bytes of the text.
    fn scan(&self) -> Scan<'_, Self> {
        Scan {
            source: self,
            index: 0,
        }
    }

    /// Check whether `needle` occurs in the text (case-sensitive).
    ///
    /// An empty needle is contained in every text.
    fn contains_str(&self, needle: &str) -> bool {
        let needle = needle.as_bytes();
        let mut start = 0;
        loop {
            let matched = needle
                .iter()
                .enumerate()
                .all(|(i, &b)| self.byte_at(start + i) == Some(b));
            if matched {
                return true;
            }
            if self.byte_at(start).is_none() {
                return false;
            }
            start += 1;
        }
    }

    /// Check whether the text equals `other` byte for byte.
    fn eq_str(&self, other: &str) -> bool {
        self.scan().eq(other.scan())
    }
}

/// Iterator over the bytes of a [`TextSource`].
pub struct Scan<'s, T: TextSource + ?Sized> {
    source: &'s T,
    index: usize,
}

impl<T: TextSource + ?Sized> Iterator for Scan<'_, T> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        let byte = self.source.byte_at(self.index)?;
        self.index += 1;
        Some(byte)
    }
}

impl TextSource for str {
    fn byte_at(&self, index: usize) -> Option<u8> {
        self.as_bytes().get(index).copied().filter(|&b| b != 0)
    }
}

/// Memory holding constant data, read one byte at a time.
///
/// On AVR this is flash read through `lpm`; elsewhere it can be any
/// read-only region that is not mapped into the data address space.
pub trait ProgramMemory {
    /// Read the byte stored at `addr`.
    fn read_byte(&self, addr: usize) -> u8;
}

/// NUL-terminated string stored in [`ProgramMemory`].
#[derive(Clone, Copy)]
pub struct PagedStr<'a> {
    mem: &'a dyn ProgramMemory,
    addr: usize,
}

impl<'a> PagedStr<'a> {
    /// Refer to the string starting at `addr` in `mem`.
    #[must_use]
    pub const fn new(mem: &'a dyn ProgramMemory, addr: usize) -> Self {
        Self { mem, addr }
    }

    /// Start address of the string.
    #[inline]
    #[must_use]
    pub const fn addr(&self) -> usize {
        self.addr
    }
}

impl TextSource for PagedStr<'_> {
    fn byte_at(&self, index: usize) -> Option<u8> {
        let byte = self.mem.read_byte(self.addr + index);
        (byte != 0).then_some(byte)
    }
}

impl fmt::Debug for PagedStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PagedStr({:#x})", self.addr)
    }
}

/// Handle to constant text in either address space.
///
/// This is what the harness stores for file names and test descriptions.
#[derive(Clone, Copy, Debug)]
pub enum Text<'a> {
    /// Text addressable as an ordinary string slice.
    Ram(&'a str),
    /// Text in program memory.
    Program(PagedStr<'a>),
}

impl TextSource for Text<'_> {
    fn byte_at(&self, index: usize) -> Option<u8> {
        match self {
            Self::Ram(s) => s.byte_at(index),
            Self::Program(p) => p.byte_at(index),
        }
    }
}

impl<'a> From<&'a str> for Text<'a> {
    fn from(s: &'a str) -> Self {
        Self::Ram(s)
    }
}

impl<'a> From<PagedStr<'a>> for Text<'a> {
    fn from(p: PagedStr<'a>) -> Self {
        Self::Program(p)
    }
}

impl fmt::Display for Text<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ram(s) => f.write_str(s.split('\0').next().unwrap_or_default()),
            Self::Program(p) => {
                for byte in p.scan() {
                    fmt::Write::write_char(f, char::from(byte))?;
                }
                Ok(())
            }
        }
    }
}
