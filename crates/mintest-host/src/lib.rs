// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Host front end for the mintest engine.
//!
//! Provides what a hosted target needs around the engine:
//! - [`Cli`] - command-line options mapped onto a [`RunConfig`]
//! - [`WriteSink`] - a [`CharSink`] over any [`std::io::Write`]
//! - [`run`] - one complete run: start, tests, summary
//! - [`pause`] - the "press enter" prompt for terminals that close on exit
//! - [`suite`] - a demonstration suite exercising every engine feature

pub mod cli;
pub mod sink;
pub mod suite;


use std::io::{self, BufRead, Write};

use mintest::{CharSink, Harness, RunConfig, Summary};
use tracing::{debug, info};

pub use cli::Cli;
pub use sink::WriteSink;

/// Prompt shown by [`pause`].
pub const PAUSE_PROMPT: &str = "Press the <enter> key to continue...";

/// Run `suite` with `config`, writing the report to `sink`.
///
/// Prints the summary and returns the result of the run.
pub fn run(
    sink: &mut dyn CharSink,
    config: RunConfig<'_>,
    suite: impl FnOnce(&mut Harness<'_>),
) -> Summary {
    info!(mode = %config.mode, group = ?config.group, "running suite");
    let mut harness = Harness::new(sink, config);
    suite(&mut harness);
    let summary = harness.finish();
    info!(exit_code = summary.exit_code(), "suite finished");
    summary
}

/// Print the pause prompt to `output` and wait for a line on `input`.
///
/// End of input counts as the key press.
pub fn pause<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<()> {
    output.write_all(PAUSE_PROMPT.as_bytes())?;
    output.flush()?;
    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    debug!(bytes = read, "pause released");
    Ok(())
}
