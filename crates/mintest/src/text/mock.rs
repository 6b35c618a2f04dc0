// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Mock program memory for testing.
//!
//! Provides a program memory image backed by a heap-allocated buffer, so the
//! paged text path can be exercised on the development host.

#![allow(clippy::panic)] // Test infrastructure - panicking on invalid input is correct

use super::{PagedStr, ProgramMemory};
use std::boxed::Box;
use std::vec;

/// A mock program memory backed by a heap-allocated buffer.
///
/// The image simulates a contiguous region starting at a configurable base
/// address, like a flash bank mapped at a fixed location.
#[derive(Debug, Clone)]
pub struct MockProgramMemory {
    memory: Box<[u8]>,
    base: usize,
}

impl MockProgramMemory {
    /// Create a zero-filled image with the given size and base address.
    #[must_use]
    pub fn new(size: usize, base: usize) -> Self {
        Self {
            memory: vec![0u8; size].into_boxed_slice(),
            base,
        }
    }

    /// Get the base address of this image.
    #[inline]
    #[must_use]
    pub const fn base(&self) -> usize {
        self.base
    }

    /// Store `text` at `addr` followed by a NUL terminator.
    pub fn store_str(&mut self, addr: usize, text: &str) {
        let offset = self.offset(addr);
        let len = text.len() + 1;
        assert!(
            offset
                .checked_add(len)
                .is_some_and(|end| end <= self.memory.len()),
            "string of {len} bytes at {addr:#x} would exceed image bounds"
        );
        self.memory[offset..offset + text.len()].copy_from_slice(text.as_bytes());
        self.memory[offset + text.len()] = 0;
    }

    /// Get a handle to the string stored at `addr`.
    #[must_use]
    pub fn paged_str(&self, addr: usize) -> PagedStr<'_> {
        PagedStr::new(self, addr)
    }

    /// Convert an address to an offset into the backing buffer.
    fn offset(&self, addr: usize) -> usize {
        assert!(
            addr >= self.base,
            "address {addr:#x} is below base {:#x}",
            self.base
        );
        let offset = addr - self.base;
        assert!(
            offset < self.memory.len(),
            "address {addr:#x} is beyond end {:#x}",
            self.base + self.memory.len()
        );
        offset
    }
}

impl ProgramMemory for MockProgramMemory {
    fn read_byte(&self, addr: usize) -> u8 {
        self.memory[self.offset(addr)]
    }
}
