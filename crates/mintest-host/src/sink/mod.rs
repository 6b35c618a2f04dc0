// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Character sink over a byte stream.
//!
//! [`CharSink::emit`] cannot fail, so the sink keeps the first write error
//! and drops everything after it. [`WriteSink::finish`] reports that error.


use std::io::{self, BufWriter, StdoutLock, Write};

use mintest::CharSink;
use tracing::warn;

/// A [`CharSink`] writing to an [`io::Write`] stream.
#[derive(Debug)]
pub struct WriteSink<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl WriteSink<BufWriter<StdoutLock<'static>>> {
    /// Buffered sink on the locked standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(BufWriter::new(io::stdout().lock()))
    }
}

impl<W: Write> WriteSink<W> {
    /// Wrap a stream.
    pub const fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Whether a write has failed.
    #[inline]
    #[must_use]
    pub const fn has_failed(&self) -> bool {
        self.error.is_some()
    }

    /// Flush the stream and return it.
    ///
    /// # Errors
    ///
    /// Returns the first error seen by [`CharSink::emit`], or the error of
    /// the final flush.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> CharSink for WriteSink<W> {
    fn emit(&mut self, byte: u8) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.out.write_all(&[byte]) {
            warn!(%err, "report output failed, dropping the rest");
            self.error = Some(err);
        }
    }
}
