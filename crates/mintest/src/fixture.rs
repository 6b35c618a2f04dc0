// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Fixtures and the early-exit protocol.
//!
//! A test ends early by returning `Err(Abort)` from its procedure. The
//! assertion macros do this for you, and helpers called from a test
//! propagate it with `?`, so an abort leaves any call depth at once and
//! nothing after the failing assertion runs. The only place an abort is
//! consumed is [`Harness::run_test`](crate::Harness::run_test).

use crate::runner::Harness;

/// Reason a test stopped early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Abort {
    /// An assertion failed or the test failed explicitly.
    Failed,
    /// The test marked itself as ignored.
    Ignored,
}

/// Control flow of a test procedure or fixture callback.
pub type Flow = Result<(), Abort>;

/// Result of one executed test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The test ran to completion.
    Success,
    /// The test failed.
    Failed,
    /// The test was ignored.
    Ignored,
}

impl From<Flow> for Outcome {
    fn from(flow: Flow) -> Self {
        match flow {
            Ok(()) => Self::Success,
            Err(Abort::Failed) => Self::Failed,
            Err(Abort::Ignored) => Self::Ignored,
        }
    }
}

/// A test procedure.
pub type TestFn = fn(&mut Harness<'_>) -> Flow;

/// A setup or teardown callback. May use assertions.
pub type FixtureFn = fn(&mut Harness<'_>) -> Flow;

/// A failure dump callback.
///
/// Dumps print extra context through [`Harness::print`]. They cannot return
/// an [`Abort`], so assertions are rejected at compile time inside them.
pub type DumpFn = fn(&mut Harness<'_>);

/// Callbacks applied around every test run while they are registered.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fixture {
    /// Runs before each test.
    pub setup: Option<FixtureFn>,
    /// Runs after each test, whatever its outcome.
    pub teardown: Option<FixtureFn>,
    /// Runs after a test has failed.
    pub dump: Option<DumpFn>,
}

impl Fixture {
    /// No callbacks at all.
    pub const NONE: Self = Self {
        setup: None,
        teardown: None,
        dump: None,
    };

    /// Whether any callback is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.setup.is_none() && self.teardown.is_none() && self.dump.is_none()
    }
}
