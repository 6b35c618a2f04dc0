// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Run context: configuration, counters and the identity of the running test.
//!
//! A [`RunContext`] is created when a run starts, mutated by the runner and
//! by code running inside a test, and read once the run is finished.


use core::fmt;
use core::str::FromStr;

use crate::fixture::{Fixture, Outcome};
use crate::text::{Text, TextSource};

/// Verbosity of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum OutputMode {
    /// No output at all.
    Quiet,
    /// One character per test (`.`, `F`, `I`), then the summary.
    Concise,
    /// Full information for failures only, then the summary.
    #[default]
    Default,
    /// Information for every test plus diagnostic messages, then the summary.
    Verbose,
}

impl OutputMode {
    /// All modes, least verbose first.
    pub const ALL: [Self; 4] = [Self::Quiet, Self::Concise, Self::Default, Self::Verbose];

    /// Lower-case name of the mode.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Quiet => "quiet",
            Self::Concise => "concise",
            Self::Default => "default",
            Self::Verbose => "verbose",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name() == s)
            .ok_or(ParseModeError)
    }
}

/// Error returned when parsing an unknown output mode name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseModeError;

impl fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown output mode (expected quiet, concise, default or verbose)"
        )
    }
}

impl core::error::Error for ParseModeError {}

/// Settings for one run, usually produced from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunConfig<'a> {
    /// Report verbosity.
    pub mode: OutputMode,
    /// Only tests whose description contains this string are run.
    pub group: Option<&'a str>,
    /// Wait for the operator before exiting.
    pub pause: bool,
}

impl<'a> RunConfig<'a> {
    /// Configuration with the given mode, no group filter and no pause.
    #[must_use]
    pub const fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            group: None,
            pause: false,
        }
    }

    /// Restrict the run to tests whose description contains `group`.
    #[must_use]
    pub const fn with_group(mut self, group: &'a str) -> Self {
        self.group = Some(group);
        self
    }
}

/// Where a test or an assertion lives in the source.
#[derive(Debug, Clone, Copy)]
pub struct SourceLocation<'a> {
    /// File name.
    pub file: Text<'a>,
    /// Line number.
    pub line: u32,
}

impl<'a> SourceLocation<'a> {
    /// Create a location.
    #[must_use]
    pub const fn new(file: Text<'a>, line: u32) -> Self {
        Self { file, line }
    }
}

/// Identity of the running test.
#[derive(Debug, Clone, Copy)]
pub struct TestId<'a> {
    /// Location of the test procedure.
    pub location: SourceLocation<'a>,
    /// Human readable description, e.g. `test_foo()`.
    pub description: Text<'a>,
}

/// Outcome counters.
///
/// `passed + failed + ignored` is the number of tests executed. Failures
/// raised by teardown are counted on their own, see [`Counts::teardown_failed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counts {
    /// Tests that ran to completion.
    pub passed: u32,
    /// Tests that failed in setup or in the body.
    pub failed: u32,
    /// Tests that marked themselves as ignored.
    pub ignored: u32,
    /// Teardown runs that failed, regardless of the test's own outcome.
    pub teardown_failed: u32,
}

impl Counts {
    /// Number of tests executed.
    #[must_use]
    pub const fn executed(&self) -> u32 {
        self.passed + self.failed + self.ignored
    }

    /// Whether anything failed, including teardown.
    #[must_use]
    pub const fn any_failed(&self) -> bool {
        self.failed > 0 || self.teardown_failed > 0
    }

    /// Count one test outcome.
    pub const fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Success => self.passed += 1,
            Outcome::Failed => self.failed += 1,
            Outcome::Ignored => self.ignored += 1,
        }
    }
}

/// Which part of a test is currently running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No test is running.
    #[default]
    Idle,
    /// Fixture setup.
    Setup,
    /// The test procedure itself.
    Body,
    /// The failure dump callback.
    Dump,
    /// Fixture teardown.
    Teardown,
}

/// State of one run.
#[derive(Debug, Clone, Copy)]
pub struct RunContext<'a> {
    mode: OutputMode,
    group: Option<&'a str>,
    pub(crate) current: Option<TestId<'a>>,
    pub(crate) counts: Counts,
    pub(crate) fixture: Fixture,
    pub(crate) phase: Phase,
}

impl<'a> RunContext<'a> {
    /// Fresh context for a run with the given configuration.
    #[must_use]
    pub const fn new(config: &RunConfig<'a>) -> Self {
        Self {
            mode: config.mode,
            group: config.group,
            current: None,
            counts: Counts {
                passed: 0,
                failed: 0,
                ignored: 0,
                teardown_failed: 0,
            },
            fixture: Fixture::NONE,
            phase: Phase::Idle,
        }
    }

    /// Report verbosity.
    #[inline]
    #[must_use]
    pub const fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Group filter, if any.
    #[inline]
    #[must_use]
    pub const fn group(&self) -> Option<&'a str> {
        self.group
    }

    /// The test currently running, if any.
    #[inline]
    #[must_use]
    pub const fn current(&self) -> Option<&TestId<'a>> {
        self.current.as_ref()
    }

    /// Outcome counters so far.
    #[inline]
    #[must_use]
    pub const fn counts(&self) -> &Counts {
        &self.counts
    }

    /// The active fixture.
    #[inline]
    #[must_use]
    pub const fn fixture(&self) -> &Fixture {
        &self.fixture
    }

    /// Which part of the current test is running.
    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a test with this description passes the group filter.
    #[must_use]
    pub fn selects(&self, description: &Text<'_>) -> bool {
        self.group.is_none_or(|group| description.contains_str(group))
    }
}
