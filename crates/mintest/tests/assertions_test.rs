// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Failure messages of the assertion macros.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::run_with;
use mintest::{
    Flow, HEX_WIDTH, Harness, Int, MockProgramMemory, Outcome, OutputMode, RunConfig, Text, Uint,
    tt_assert, tt_assert_hex, tt_assert_int, tt_assert_str, tt_test,
};
use std::hint::black_box;

/// Run one test in default mode and return its single FAIL line.
fn failure_of(test: mintest::TestFn) -> String {
    let result = run_with(RunConfig::new(OutputMode::Default), |t| {
        let outcome = t.run_test(test, mintest::tt_here!(), Text::Ram("case()"));
        assert_eq!(outcome, Some(Outcome::Failed));
    });
    let line = result
        .output
        .lines()
        .find(|line| line.contains("FAIL:"))
        .expect("no failure reported");
    let (_, message) = line.split_once("FAIL: ").unwrap();
    message.to_owned()
}

fn assert_false(t: &mut Harness<'_>) -> Flow {
    let ready = black_box(false);
    tt_assert!(t, ready);
    Ok(())
}

fn assert_int_mismatch(t: &mut Harness<'_>) -> Flow {
    tt_assert_int!(t, black_box(-7), 3);
    Ok(())
}

fn assert_hex_mismatch(t: &mut Harness<'_>) -> Flow {
    let status: Uint = black_box(0xbeef);
    tt_assert_hex!(t, status, 0x10);
    Ok(())
}

fn assert_str_mismatch(t: &mut Harness<'_>) -> Flow {
    let name = black_box("world");
    tt_assert_str!(t, name, "hello");
    Ok(())
}

fn assertions_that_hold(t: &mut Harness<'_>) -> Flow {
    tt_assert!(t, black_box(2) > 1);
    tt_assert_int!(t, black_box(Int::MIN), Int::MIN);
    tt_assert_hex!(t, black_box(Uint::MAX), Uint::MAX);
    tt_assert_str!(t, black_box("same"), "same");
    Ok(())
}

#[test]
fn boolean_assertion_quotes_the_expression() {
    assert_eq!(
        failure_of(assert_false),
        "Expected `ready' to be true."
    );
}

#[test]
fn int_assertion_reports_both_values() {
    assert_eq!(
        failure_of(assert_int_mismatch),
        "Expected `black_box(-7)' == 3, got -7."
    );
}

#[test]
fn hex_assertion_reports_padded_values() {
    assert_eq!(
        failure_of(assert_hex_mismatch),
        format!(
            "Expected `status' == 0x{:0w$x}, got 0x{:0w$x}.",
            0x10,
            0xbeef,
            w = HEX_WIDTH
        )
    );
}

#[test]
fn str_assertion_quotes_both_strings() {
    assert_eq!(
        failure_of(assert_str_mismatch),
        "Expected `name' == \"hello\", got \"world\"."
    );
}

#[test]
fn str_assertion_accepts_program_memory_text() {
    fn check(t: &mut Harness<'_>) -> Flow {
        let mut flash = MockProgramMemory::new(16, 0);
        flash.store_str(0, "flash");
        tt_assert_str!(t, black_box("flash"), flash.paged_str(0));
        tt_assert_str!(t, black_box("ram"), flash.paged_str(0));
        Ok(())
    }
    assert_eq!(
        failure_of(check),
        "Expected `black_box(\"ram\")' == \"flash\", got \"ram\"."
    );
}

#[test]
fn holding_assertions_pass() {
    let result = run_with(RunConfig::new(OutputMode::Concise), |t| {
        tt_test!(t, assertions_that_hold);
    });
    assert!(result.output.starts_with('.'));
    assert!(!result.summary.is_failure());
}
