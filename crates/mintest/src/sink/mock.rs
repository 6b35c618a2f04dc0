// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Mock sink for testing.
//!
//! Collects everything the harness emits in memory, allowing tests to check
//! report output byte for byte.

use super::CharSink;
use std::borrow::Cow;
use std::string::String;
use std::vec::Vec;

/// Mock sink backed by an in-memory buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MockSink {
    /// Output buffer (data that was emitted)
    output: Vec<u8>,
}

impl MockSink {
    /// Create an empty mock sink.
    #[must_use]
    pub const fn new() -> Self {
        Self { output: Vec::new() }
    }

    /// Get the bytes that have been emitted.
    #[must_use]
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    /// Get the emitted bytes as text, replacing invalid UTF-8.
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.output)
    }

    /// Clear the output buffer.
    pub fn clear_output(&mut self) {
        self.output.clear();
    }
}

impl CharSink for MockSink {
    fn emit(&mut self, byte: u8) {
        self.output.push(byte);
    }
}
