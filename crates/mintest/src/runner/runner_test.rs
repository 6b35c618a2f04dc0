// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Tests for the runner and reporter.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::Harness;
use crate::context::{OutputMode, Phase, RunConfig, SourceLocation};
use crate::fixture::{Flow, Outcome};
use crate::fmt::{Arg, HEX_WIDTH, Int};
use crate::sink::MockSink;
use crate::text::{MockProgramMemory, Text};
use crate::{tt_assert, tt_assert_int, tt_ignore};
use std::cell::RefCell;
use std::hint::black_box;
use std::string::String;
use std::vec::Vec;

thread_local! {
    static CALLS: RefCell<Vec<&'static str>> = const { RefCell::new(Vec::new()) };
}

fn record(name: &'static str) {
    CALLS.with(|calls| calls.borrow_mut().push(name));
}

fn take_calls() -> Vec<&'static str> {
    CALLS.with(|calls| calls.take())
}

const SUITE: Text<'static> = Text::Ram("suite.rs");

fn at(line: u32) -> SourceLocation<'static> {
    SourceLocation::new(SUITE, line)
}

fn site(line: u32) -> SourceLocation<'static> {
    SourceLocation::new(Text::Ram("site.rs"), line)
}

fn passing(_t: &mut Harness<'_>) -> Flow {
    record("body");
    Ok(())
}

fn failing(t: &mut Harness<'_>) -> Flow {
    record("body");
    if black_box(true) {
        return Err(t.fail_at(site(42), "boom %d", &[Arg::Int(7)]));
    }
    record("after");
    Ok(())
}

fn asserting(t: &mut Harness<'_>) -> Flow {
    record("body");
    tt_assert!(t, black_box(1) == 2);
    record("after");
    Ok(())
}

fn ignoring(t: &mut Harness<'_>) -> Flow {
    record("body");
    if black_box(true) {
        tt_ignore!(t);
    }
    record("after");
    Ok(())
}

fn check_depth(t: &mut Harness<'_>, depth: Int) -> Flow {
    if depth == 0 {
        tt_assert_int!(t, depth, 1);
        record("unreachable");
    } else {
        check_depth(t, depth - 1)?;
        record("unwound-normally");
    }
    Ok(())
}

fn nested_failure(t: &mut Harness<'_>) -> Flow {
    check_depth(t, 3)?;
    record("after");
    Ok(())
}

fn setup(t: &mut Harness<'_>) -> Flow {
    record("setup");
    assert_eq!(t.context().phase(), Phase::Setup);
    assert!(t.context().current().is_some());
    Ok(())
}

fn failing_setup(t: &mut Harness<'_>) -> Flow {
    record("setup");
    Err(t.fail_at(site(1), "setup broke", &[]))
}

fn teardown(t: &mut Harness<'_>) -> Flow {
    record("teardown");
    assert_eq!(t.context().phase(), Phase::Teardown);
    Ok(())
}

fn failing_teardown(t: &mut Harness<'_>) -> Flow {
    record("teardown");
    Err(t.fail_at(site(2), "teardown broke", &[]))
}

fn ignoring_setup(t: &mut Harness<'_>) -> Flow {
    record("setup");
    tt_ignore!(t);
}

fn failing_dump(t: &mut Harness<'_>) {
    record("dump");
    let _ = t.fail_at(site(3), "dump broke", &[]);
}

fn ignoring_teardown(t: &mut Harness<'_>) -> Flow {
    record("teardown");
    Err(t.ignore())
}

fn dump(t: &mut Harness<'_>) {
    record("dump");
    assert_eq!(t.context().phase(), Phase::Dump);
    t.print("dumped%s", &[Arg::Str("\n")]);
}

fn run(mode: OutputMode, tests: &[(&'static str, crate::TestFn)]) -> (String, crate::Summary) {
    let mut sink = MockSink::new();
    let summary = {
        let mut harness = Harness::new(&mut sink, RunConfig::new(mode));
        for (line, (name, test)) in (1..).zip(tests) {
            harness.run_test(*test, at(line), Text::Ram(*name));
        }
        harness.finish()
    };
    (sink.text().into_owned(), summary)
}

#[test]
fn passing_test_is_success() {
    let mut sink = MockSink::new();
    let mut harness = Harness::new(&mut sink, RunConfig::default());
    let outcome = harness.run_test(passing, at(1), Text::Ram("passing()"));
    assert_eq!(outcome, Some(Outcome::Success));
    assert_eq!(harness.context().counts().passed, 1);
    assert!(harness.context().current().is_none());
    assert_eq!(harness.context().phase(), Phase::Idle);
    assert_eq!(take_calls(), ["body"]);
}

#[test]
fn failing_test_stops_at_the_failure() {
    let mut sink = MockSink::new();
    let mut harness = Harness::new(&mut sink, RunConfig::default());
    let outcome = harness.run_test(asserting, at(1), Text::Ram("asserting()"));
    assert_eq!(outcome, Some(Outcome::Failed));
    assert_eq!(harness.context().counts().failed, 1);
    assert_eq!(take_calls(), ["body"]);
}

#[test]
fn ignored_test_stops_at_the_ignore() {
    let mut sink = MockSink::new();
    let mut harness = Harness::new(&mut sink, RunConfig::default());
    let outcome = harness.run_test(ignoring, at(1), Text::Ram("ignoring()"));
    assert_eq!(outcome, Some(Outcome::Ignored));
    assert_eq!(harness.context().counts().ignored, 1);
    assert_eq!(take_calls(), ["body"]);
    assert_eq!(sink.text(), "");
}

#[test]
fn failure_unwinds_through_helpers() {
    let mut sink = MockSink::new();
    let mut harness = Harness::new(&mut sink, RunConfig::new(OutputMode::Quiet));
    let outcome = harness.run_test(nested_failure, at(1), Text::Ram("nested_failure()"));
    assert_eq!(outcome, Some(Outcome::Failed));
    assert_eq!(take_calls(), Vec::<&str>::new());
}

#[test]
fn failure_message_format() {
    let (out, summary) = run(OutputMode::Default, &[("failing()", failing)]);
    assert_eq!(
        out,
        "site.rs:42: [suite.rs:1 failing()] FAIL: boom 7.\n\
         ------------------------------------------------\n\
         Passed 0, failed 1, ignored 0.\n\
         FAIL\n"
    );
    assert!(summary.is_failure());
    assert_eq!(summary.exit_code(), 1);
}

#[test]
fn assertion_message_names_the_condition() {
    let (out, _) = run(OutputMode::Default, &[("asserting()", asserting)]);
    assert!(out.contains("[suite.rs:1 asserting()] FAIL: Expected `black_box(1) == 2' to be true.\n"));
}

#[test]
fn default_mode_prints_nothing_for_success() {
    let (out, summary) = run(OutputMode::Default, &[("passing()", passing)]);
    assert_eq!(
        out,
        "------------------------------------------------\n\
         Passed 1, failed 0, ignored 0.\n\
         OK\n"
    );
    assert!(!summary.is_failure());
    assert_eq!(summary.exit_code(), 0);
}

#[test]
fn verbose_mode_reports_every_test() {
    let (out, _) = run(
        OutputMode::Verbose,
        &[("passing()", passing), ("ignoring()", ignoring)],
    );
    assert!(out.starts_with(
        "suite.rs:1: [passing()]: OK\n\
         suite.rs:2: [ignoring()]: IGNORED\n"
    ));
}

#[test]
fn verbose_failure_follows_the_leader() {
    let (out, _) = run(OutputMode::Verbose, &[("failing()", failing)]);
    assert!(out.starts_with("suite.rs:1: site.rs:42: [suite.rs:1 failing()] FAIL: boom 7.\n"));
}

#[test]
fn concise_mode_one_char_per_test() {
    let (out, _) = run(
        OutputMode::Concise,
        &[
            ("passing()", passing),
            ("failing()", failing),
            ("ignoring()", ignoring),
            ("passing()", passing),
        ],
    );
    assert_eq!(
        out,
        ".FI.------------------------------------------------\n\
         Passed 2, failed 1, ignored 1.\n\
         FAIL\n"
    );
}

#[test]
fn quiet_mode_prints_nothing() {
    let (out, summary) = run(
        OutputMode::Quiet,
        &[("passing()", passing), ("failing()", failing)],
    );
    assert_eq!(out, "");
    assert!(summary.is_failure());
}

#[test]
fn diagnostics_only_in_verbose() {
    for mode in OutputMode::ALL {
        let mut sink = MockSink::new();
        {
            let mut harness = Harness::new(&mut sink, RunConfig::new(mode));
            harness.diagnostic("Int: %d, %d, %08x", &[Arg::Int(123), Arg::Int(-456), Arg::Uint(0xff)]);
        }
        let expected = if mode == OutputMode::Verbose {
            std::format!("# Int: 123, -456, {:0w$x}\n", 0xff, w = HEX_WIDTH)
        } else {
            String::new()
        };
        assert_eq!(sink.text(), expected, "mode {mode}");
    }
}

#[test]
fn fixture_runs_around_every_test() {
    let mut sink = MockSink::new();
    let mut harness = Harness::new(&mut sink, RunConfig::new(OutputMode::Quiet));
    harness.register_fixture(Some(setup), Some(teardown), Some(dump));
    harness.run_test(passing, at(1), Text::Ram("passing()"));
    harness.run_test(asserting, at(2), Text::Ram("asserting()"));
    harness.run_test(ignoring, at(3), Text::Ram("ignoring()"));
    assert_eq!(
        take_calls(),
        [
            "setup", "body", "teardown", //
            "setup", "body", "dump", "teardown", //
            "setup", "body", "teardown",
        ]
    );
}

#[test]
fn dump_output_appears_after_failure() {
    let mut sink = MockSink::new();
    {
        let mut harness = Harness::new(&mut sink, RunConfig::new(OutputMode::Concise));
        harness.register_fixture(None, None, Some(dump));
        harness.run_test(failing, at(1), Text::Ram("failing()"));
    }
    assert_eq!(sink.text(), "Fdumped\n");
}

#[test]
fn unregister_removes_every_callback() {
    let mut sink = MockSink::new();
    let mut harness = Harness::new(&mut sink, RunConfig::new(OutputMode::Quiet));
    harness.register_fixture(Some(setup), Some(teardown), Some(dump));
    harness.unregister_fixture();
    assert!(harness.context().fixture().is_empty());
    harness.run_test(asserting, at(1), Text::Ram("asserting()"));
    assert_eq!(take_calls(), ["body"]);
}

#[test]
fn register_replaces_the_whole_fixture() {
    let mut sink = MockSink::new();
    let mut harness = Harness::new(&mut sink, RunConfig::new(OutputMode::Quiet));
    harness.register_fixture(Some(setup), Some(teardown), Some(dump));
    harness.register_fixture(None, Some(teardown), None);
    harness.run_test(asserting, at(1), Text::Ram("asserting()"));
    assert_eq!(take_calls(), ["body", "teardown"]);
}

#[test]
fn setup_failure_fails_the_test_and_skips_the_body() {
    let mut sink = MockSink::new();
    let mut harness = Harness::new(&mut sink, RunConfig::new(OutputMode::Quiet));
    harness.register_fixture(Some(failing_setup), Some(teardown), Some(dump));
    let outcome = harness.run_test(passing, at(1), Text::Ram("passing()"));
    assert_eq!(outcome, Some(Outcome::Failed));
    assert_eq!(take_calls(), ["setup", "dump", "teardown"]);
    assert_eq!(harness.context().counts().failed, 1);
}

#[test]
fn teardown_failure_is_counted_separately() {
    let mut sink = MockSink::new();
    let summary = {
        let mut harness = Harness::new(&mut sink, RunConfig::new(OutputMode::Concise));
        harness.register_fixture(None, Some(failing_teardown), Some(dump));
        let outcome = harness.run_test(passing, at(1), Text::Ram("passing()"));
        assert_eq!(outcome, Some(Outcome::Success));
        harness.finish()
    };
    let counts = summary.counts();
    assert_eq!(counts.passed, 1);
    assert_eq!(counts.failed, 0);
    assert_eq!(counts.teardown_failed, 1);
    assert_eq!(counts.executed(), 1);
    assert!(summary.is_failure());
    assert_eq!(
        sink.text(),
        ".------------------------------------------------\n\
         Passed 1, failed 0, ignored 0.\n\
         Teardown failures 1.\n\
         FAIL\n"
    );
    // dump belongs to the test's own failure only
    assert_eq!(take_calls(), ["body", "teardown"]);
}

#[test]
fn teardown_failure_is_reported_in_default_mode() {
    let mut sink = MockSink::new();
    {
        let mut harness = Harness::new(&mut sink, RunConfig::new(OutputMode::Default));
        harness.register_fixture(None, Some(failing_teardown), None);
        harness.run_test(passing, at(5), Text::Ram("passing()"));
    }
    assert_eq!(
        sink.text(),
        "site.rs:2: [suite.rs:5 passing()] FAIL: teardown broke.\n"
    );
}

#[test]
fn ignore_from_teardown_has_no_effect() {
    let mut sink = MockSink::new();
    let mut harness = Harness::new(&mut sink, RunConfig::new(OutputMode::Quiet));
    harness.register_fixture(None, Some(ignoring_teardown), None);
    let outcome = harness.run_test(passing, at(1), Text::Ram("passing()"));
    assert_eq!(outcome, Some(Outcome::Success));
    let counts = *harness.context().counts();
    assert_eq!((counts.passed, counts.ignored, counts.teardown_failed), (1, 0, 0));
}

#[test]
fn group_filter_skips_everything() {
    let mut sink = MockSink::new();
    {
        let config = RunConfig::new(OutputMode::Verbose).with_group("Alpha");
        let mut harness = Harness::new(&mut sink, config);
        harness.register_fixture(Some(setup), Some(teardown), Some(dump));
        assert_eq!(
            harness.run_test(passing, at(1), Text::Ram("testAlpha()")),
            Some(Outcome::Success)
        );
        assert_eq!(harness.run_test(failing, at(2), Text::Ram("testBeta()")), None);
        assert_eq!(harness.finish().counts().executed(), 1);
    }
    assert!(!sink.text().contains("testBeta"));
    assert_eq!(take_calls(), ["setup", "body", "teardown"]);
}

#[test]
fn descriptions_from_program_memory() {
    let mut flash = MockProgramMemory::new(64, 0x1000);
    flash.store_str(0x1000, "flash_test()");
    flash.store_str(0x1020, "flash.rs");
    let mut sink = MockSink::new();
    {
        let config = RunConfig::new(OutputMode::Verbose).with_group("flash");
        let mut harness = Harness::new(&mut sink, config);
        let location = SourceLocation::new(Text::Program(flash.paged_str(0x1020)), 9);
        let description = Text::Program(flash.paged_str(0x1000));
        assert_eq!(
            harness.run_test(passing, location, description),
            Some(Outcome::Success)
        );
    }
    assert_eq!(sink.text(), "flash.rs:9: [flash_test()]: OK\n");
}

#[test]
fn quiet_mode_silences_dump_output() {
    let mut sink = MockSink::new();
    let summary = {
        let mut harness = Harness::new(&mut sink, RunConfig::new(OutputMode::Quiet));
        harness.register_fixture(None, None, Some(dump));
        harness.run_test(failing, at(1), Text::Ram("failing()"));
        harness.finish()
    };
    assert_eq!(sink.text(), "");
    assert!(summary.is_failure());
    assert_eq!(take_calls(), ["body", "dump"]);
}

#[test]
fn ignore_from_setup_skips_the_body() {
    let mut sink = MockSink::new();
    let mut harness = Harness::new(&mut sink, RunConfig::new(OutputMode::Concise));
    harness.register_fixture(Some(ignoring_setup), Some(teardown), Some(dump));
    let outcome = harness.run_test(passing, at(1), Text::Ram("passing()"));
    assert_eq!(outcome, Some(Outcome::Ignored));
    assert_eq!(take_calls(), ["setup", "teardown"]);
    let counts = *harness.context().counts();
    assert_eq!((counts.passed, counts.failed, counts.ignored), (0, 0, 1));
    assert_eq!(sink.text(), "I");
}

#[test]
fn failure_reported_from_dump_adds_no_character() {
    let mut sink = MockSink::new();
    {
        let mut harness = Harness::new(&mut sink, RunConfig::new(OutputMode::Concise));
        harness.register_fixture(None, None, Some(failing_dump));
        harness.run_test(failing, at(1), Text::Ram("failing()"));
        harness.run_test(passing, at(2), Text::Ram("passing()"));
    }
    assert_eq!(sink.text(), "F.");
    assert_eq!(take_calls(), ["body", "dump", "body"]);
}
