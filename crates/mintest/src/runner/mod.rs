// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Test runner and reporter.
//!
//! [`Harness`] owns the [`RunContext`] and the output sink for one run. It
//! executes test procedures one at a time, applies the registered fixture,
//! counts outcomes and renders the report in the selected [`OutputMode`].
//!
//! ## Report Format
//!
//! ```text
//! Verbose:  <file>:<line>: [<desc>]: OK
//!           <file>:<line>: [<desc>]: IGNORED
//! Failures (default and verbose):
//!           <site>:<line>: [<file>:<line> <desc>] FAIL: <message>.
//! Concise:  one of `.`, `F`, `I` per test
//! Summary (all but quiet):
//!           ------------------------------------------------
//!           Passed X, failed Y, ignored Z.
//!           OK|FAIL
//! ```

#[cfg(test)]
mod runner_test;

use crate::context::{Counts, OutputMode, Phase, RunConfig, RunContext, SourceLocation, TestId};
use crate::fixture::{Abort, DumpFn, Fixture, FixtureFn, Flow, Outcome, TestFn};
use crate::fmt::{self, Arg, Uint};
use crate::sink::{CharSink, CharSinkExt};
use crate::text::{Text, TextSource};

const RULE: &str = "------------------------------------------------";

/// Final result of a run, returned by [`Harness::finish`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    counts: Counts,
}

impl Summary {
    /// Outcome counters of the run.
    #[inline]
    #[must_use]
    pub const fn counts(&self) -> &Counts {
        &self.counts
    }

    /// Whether the run failed.
    #[inline]
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        self.counts.any_failed()
    }

    /// Process exit status: 0 on success, 1 on failure.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        if self.is_failure() { 1 } else { 0 }
    }
}

/// Runs tests and reports their outcomes.
///
/// Test procedures receive the harness itself, which is how assertions
/// reach the output sink and the identity of the running test.
pub struct Harness<'a> {
    sink: &'a mut dyn CharSink,
    ctx: RunContext<'a>,
}

impl<'a> Harness<'a> {
    /// Start a run.
    ///
    /// Counters start at zero and no fixture is registered.
    pub fn new(sink: &'a mut dyn CharSink, config: RunConfig<'a>) -> Self {
        log_debug!(mode = %config.mode, group = ?config.group, "starting test run");
        Self {
            sink,
            ctx: RunContext::new(&config),
        }
    }

    /// The run context.
    #[inline]
    #[must_use]
    pub const fn context(&self) -> &RunContext<'a> {
        &self.ctx
    }

    /// Report verbosity of this run.
    #[inline]
    #[must_use]
    pub const fn mode(&self) -> OutputMode {
        self.ctx.mode()
    }

    /// Install fixture callbacks for every test run from now on.
    ///
    /// All three callbacks are replaced together; pass `None` for the ones
    /// that are not needed.
    pub fn register_fixture(
        &mut self,
        setup: Option<FixtureFn>,
        teardown: Option<FixtureFn>,
        dump: Option<DumpFn>,
    ) {
        self.ctx.fixture = Fixture {
            setup,
            teardown,
            dump,
        };
        log_debug!(
            setup = setup.is_some(),
            teardown = teardown.is_some(),
            dump = dump.is_some(),
            "fixture registered"
        );
    }

    /// Remove all fixture callbacks.
    pub fn unregister_fixture(&mut self) {
        self.register_fixture(None, None, None);
    }

    /// Format and emit a message.
    ///
    /// Intended for dump callbacks; output appears in every mode but quiet.
    pub fn print<T: TextSource + ?Sized>(&mut self, fmt: &T, args: &[Arg<'_>]) {
        if self.ctx.mode() == OutputMode::Quiet {
            return;
        }
        fmt::print(&mut *self.sink, fmt, args);
    }

    /// Emit `# <message>` on its own line in verbose mode; a no-op otherwise.
    pub fn diagnostic<T: TextSource + ?Sized>(&mut self, fmt: &T, args: &[Arg<'_>]) {
        if self.ctx.mode() == OutputMode::Verbose {
            self.sink.write_str("# ");
            fmt::print(&mut *self.sink, fmt, args);
            self.sink.write_newline();
        }
    }

    /// Render a failure raised at `site` and return the abort to propagate.
    ///
    /// Used by the assertion macros, which return the result from the
    /// enclosing test procedure.
    #[must_use]
    pub fn fail_at<T: TextSource + ?Sized>(
        &mut self,
        site: SourceLocation<'_>,
        fmt: &T,
        args: &[Arg<'_>],
    ) -> Abort {
        log_trace!(line = site.line, phase = ?self.ctx.phase(), "assertion failed");
        match self.ctx.mode() {
            OutputMode::Quiet => {}
            // Only setup and body failures produce the test's character
            OutputMode::Concise => {
                if matches!(self.ctx.phase(), Phase::Setup | Phase::Body | Phase::Idle) {
                    self.sink.emit(b'F');
                }
            }
            OutputMode::Default | OutputMode::Verbose => {
                self.print("%P:%d: ", &[Arg::Text(site.file), line_arg(site.line)]);
                if let Some(test) = self.ctx.current {
                    self.print(
                        "[%P:%d %P] ",
                        &[
                            Arg::Text(test.location.file),
                            line_arg(test.location.line),
                            Arg::Text(test.description),
                        ],
                    );
                }
                self.sink.write_str("FAIL: ");
                fmt::print(&mut *self.sink, fmt, args);
                self.sink.emit(b'.');
                self.sink.write_newline();
            }
        }
        Abort::Failed
    }

    /// Mark the running test as ignored and return the abort to propagate.
    #[must_use]
    pub fn ignore(&mut self) -> Abort {
        log_trace!(phase = ?self.ctx.phase(), "test ignored");
        Abort::Ignored
    }

    /// Run one test procedure.
    ///
    /// Returns `None` when the group filter skipped the test, in which case
    /// nothing is counted, printed or called.
    pub fn run_test(
        &mut self,
        test: TestFn,
        location: SourceLocation<'a>,
        description: Text<'a>,
    ) -> Option<Outcome> {
        if !self.ctx.selects(&description) {
            log_trace!(test = %description, "skipped by group filter");
            return None;
        }

        self.ctx.current = Some(TestId {
            location,
            description,
        });
        log_debug!(test = %description, line = location.line, "running test");

        if self.ctx.mode() == OutputMode::Verbose {
            self.print("%P:%d: ", &[Arg::Text(location.file), line_arg(location.line)]);
        }

        let mut flow = self.run_fixture(Phase::Setup, self.ctx.fixture.setup);
        if flow.is_ok() {
            self.ctx.phase = Phase::Body;
            flow = test(self);
        }

        let outcome = Outcome::from(flow);
        match outcome {
            Outcome::Success => self.report("OK", b'.'),
            Outcome::Ignored => self.report("IGNORED", b'I'),
            Outcome::Failed => {
                if let Some(dump) = self.ctx.fixture.dump {
                    self.ctx.phase = Phase::Dump;
                    dump(self);
                }
            }
        }
        self.ctx.counts.record(outcome);

        match self.run_fixture(Phase::Teardown, self.ctx.fixture.teardown) {
            Ok(()) => {}
            Err(Abort::Failed) => self.ctx.counts.teardown_failed += 1,
            Err(Abort::Ignored) => {
                log_debug!(test = %description, "ignore requested from teardown has no effect");
            }
        }

        log_debug!(test = %description, outcome = ?outcome, "test finished");
        self.ctx.phase = Phase::Idle;
        self.ctx.current = None;
        Some(outcome)
    }

    /// Print the summary and return the result of the run.
    pub fn finish(&mut self) -> Summary {
        let counts = self.ctx.counts;
        if self.ctx.mode() != OutputMode::Quiet {
            self.sink.write_line(RULE);
            self.print(
                "Passed %d, failed %d, ignored %d.",
                &[
                    count_arg(counts.passed),
                    count_arg(counts.failed),
                    count_arg(counts.ignored),
                ],
            );
            self.sink.write_newline();
            if counts.teardown_failed > 0 {
                self.print(
                    "Teardown failures %d.",
                    &[count_arg(counts.teardown_failed)],
                );
                self.sink.write_newline();
            }
            self.sink
                .write_line(if counts.any_failed() { "FAIL" } else { "OK" });
        }

        log_debug!(
            passed = counts.passed,
            failed = counts.failed,
            ignored = counts.ignored,
            teardown_failed = counts.teardown_failed,
            "test run finished"
        );
        Summary { counts }
    }

    fn run_fixture(&mut self, phase: Phase, callback: Option<FixtureFn>) -> Flow {
        self.ctx.phase = phase;
        callback.map_or(Ok(()), |callback| callback(self))
    }

    fn report(&mut self, message: &str, concise: u8) {
        match self.ctx.mode() {
            OutputMode::Quiet | OutputMode::Default => {}
            OutputMode::Concise => self.sink.emit(concise),
            OutputMode::Verbose => {
                let description = self.ctx.current.map(|test| test.description);
                if let Some(description) = description {
                    self.print("[%P]: %s", &[Arg::Text(description), Arg::Str(message)]);
                    self.sink.write_newline();
                }
            }
        }
    }
}

#[allow(clippy::unnecessary_cast, clippy::cast_possible_truncation)] // Uint is u16 with `int16`
const fn line_arg(line: u32) -> Arg<'static> {
    Arg::Uint(line as Uint)
}

#[allow(clippy::unnecessary_cast, clippy::cast_possible_truncation)]
const fn count_arg(count: u32) -> Arg<'static> {
    Arg::Uint(count as Uint)
}
