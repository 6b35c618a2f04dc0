// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Command-line options.
//!
//! The mode flags override each other, so the last one given wins:
//! `-q -v` runs verbose, `-v -q` runs quiet.


use clap::{ArgAction, Parser};
use mintest::{OutputMode, RunConfig};

/// Options of a test binary.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "mintest-demo",
    version = mintest::VERSION,
    about = "Run the test suite and print a report",
    disable_help_flag = true
)]
pub struct Cli {
    /// Print help
    #[arg(short = '?', long, action = ArgAction::Help)]
    help: Option<bool>,

    /// Quiet: print nothing, only set the exit status
    #[arg(short, overrides_with_all = ["concise", "verbose", "mode"])]
    pub quiet: bool,

    /// Concise: one character per test
    #[arg(short, overrides_with_all = ["quiet", "verbose", "mode"])]
    pub concise: bool,

    /// Verbose: report every test and show diagnostics
    #[arg(short, overrides_with_all = ["quiet", "concise", "mode"])]
    pub verbose: bool,

    /// Output mode by name (quiet, concise, default, verbose)
    #[arg(long, value_name = "MODE", overrides_with_all = ["quiet", "concise", "verbose"])]
    pub mode: Option<OutputMode>,

    /// Only run tests whose description contains STR
    #[arg(short, long, value_name = "STR")]
    pub group: Option<String>,

    /// Wait for <enter> before exiting
    #[arg(short, long)]
    pub pause: bool,
}

impl Cli {
    /// Output mode selected by the last mode option, `Default` if none.
    #[must_use]
    pub fn output_mode(&self) -> OutputMode {
        if self.quiet {
            OutputMode::Quiet
        } else if self.concise {
            OutputMode::Concise
        } else if self.verbose {
            OutputMode::Verbose
        } else {
            self.mode.unwrap_or_default()
        }
    }

    /// Run configuration for these options.
    #[must_use]
    pub fn config(&self) -> RunConfig<'_> {
        RunConfig {
            mode: self.output_mode(),
            group: self.group.as_deref(),
            pause: self.pause,
        }
    }
}
