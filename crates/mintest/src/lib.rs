// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! # mintest
//!
//! Test execution engine for targets that have no test framework, no heap
//! and possibly no formatted output of their own.
//!
//! The crate provides:
//! - [`Harness`] - runs test procedures, applies fixtures, counts outcomes
//! - A minimal printf-style formatter writing byte by byte to a [`CharSink`]
//! - [`TextSource`] - constant text in RAM or in a separate program memory
//! - Assertion macros (`tt_assert!`, `tt_assert_int!`, ...) that end a test
//!   early by returning [`Abort`] through the test's [`Flow`]
//!
//! ## Example
//!
//! ```
//! use mintest::{Flow, Harness, MockSink, OutputMode, RunConfig, tt_assert_int, tt_test};
//!
//! fn test_answer(t: &mut Harness<'_>) -> Flow {
//!     tt_assert_int!(t, 6 * 7, 42);
//!     Ok(())
//! }
//!
//! let mut sink = MockSink::new();
//! let mut harness = Harness::new(&mut sink, RunConfig::new(OutputMode::Concise));
//! tt_test!(harness, test_answer);
//! let summary = harness.finish();
//! assert!(!summary.is_failure());
//! ```
//!
//! ## `no_std` Support
//!
//! Without the default `std` feature the crate is `no_std` and allocation
//! free. The `std` feature exposes the in-memory mocks used by host tests
//! and tools.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(any(test, feature = "std"))]
extern crate std;

#[macro_use]
mod logging;

mod assert;
pub mod context;
pub mod fixture;
pub mod fmt;
pub mod memory;
pub mod runner;
pub mod sink;
pub mod text;

pub use context::{
    Counts, OutputMode, ParseModeError, Phase, RunConfig, RunContext, SourceLocation, TestId,
};
pub use fixture::{Abort, DumpFn, Fixture, FixtureFn, Flow, Outcome, TestFn};
pub use fmt::{Arg, HEX_WIDTH, Int, SCRATCH_LEN, Uint};
pub use runner::{Harness, Summary};
#[cfg(any(test, feature = "std"))]
pub use sink::MockSink;
pub use sink::{CharSink, CharSinkExt, FnSink, NEWLINE};
#[cfg(any(test, feature = "std"))]
pub use text::MockProgramMemory;
pub use text::{PagedStr, ProgramMemory, Text, TextSource};

/// Crate version.
///
/// Uses the `MINTEST_VERSION` environment variable when set at build time,
/// falling back to the package version otherwise.
pub const VERSION: &str = match option_env!("MINTEST_VERSION") {
    Some(v) => v,
    None => env!("CARGO_PKG_VERSION"),
};
