// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Demonstration test binary.
//!
//! Runs the demonstration suite with the options given on the command line.
//! The report goes to stdout, log events to stderr (`RUST_LOG` selects the
//! level, `warn` by default).
//!
//! Exit status: 0 when every test passed, 1 when any failed, 2 on a usage
//! error.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use mintest_host::{Cli, WriteSink, pause, run, suite};
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let config = cli.config();
    let mut sink = WriteSink::stdout();
    let summary = run(&mut sink, config, suite::run_demo);
    if let Err(err) = sink.finish() {
        error!(%err, "failed to write report");
    }

    if config.pause {
        if let Err(err) = pause(&mut io::stdin().lock(), &mut io::stdout().lock()) {
            warn!(%err, "pause prompt failed");
        }
    }

    ExitCode::from(summary.exit_code())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
