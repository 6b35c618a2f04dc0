// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Shared test infrastructure for integration tests.
//!
//! This module provides:
//! - [`run_with`] - runs a suite against an in-memory sink
//! - [`summary_block`] - the expected summary text for given counts
//!
//! This module is **not** a test file, so it must comply with full clippy rules.

#![allow(dead_code)] // not every test file uses every helper

use mintest::{Harness, MockSink, RunConfig, Summary};

/// Separator printed before the summary line.
pub const RULE: &str = "------------------------------------------------";

/// Output and result of one harness run.
pub struct RunResult {
    pub output: String,
    pub summary: Summary,
}

/// Run `suite` on a fresh harness and call `finish` afterwards.
pub fn run_with(config: RunConfig<'_>, suite: impl FnOnce(&mut Harness<'_>)) -> RunResult {
    let mut sink = MockSink::new();
    let summary = {
        let mut harness = Harness::new(&mut sink, config);
        suite(&mut harness);
        harness.finish()
    };
    RunResult {
        output: sink.text().into_owned(),
        summary,
    }
}

/// Summary block as printed by `finish` in every mode but quiet.
pub fn summary_block(passed: u32, failed: u32, ignored: u32) -> String {
    let verdict = if failed > 0 { "FAIL" } else { "OK" };
    format!("{RULE}\nPassed {passed}, failed {failed}, ignored {ignored}.\n{verdict}\n")
}
