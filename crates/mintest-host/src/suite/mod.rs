// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Demonstration suite.
//!
//! Exercises every assertion, the fixture callbacks, ignoring and the
//! memory guard. About half of the tests fail on purpose so every kind of
//! report line shows up.


use mintest::memory::fill_memory;
use mintest::{
    Flow, Harness, Int, tt_assert, tt_assert_hex, tt_assert_int, tt_assert_str, tt_diag, tt_fail,
    tt_ignore, tt_test, tt_verify_memory,
};

fn test_diag(t: &mut Harness<'_>) -> Flow {
    tt_diag!(t, "Int: %d, %d, %08x", 123, -456, 0xff);
    Ok(())
}

fn test_assert_ok(t: &mut Harness<'_>) -> Flow {
    tt_assert!(t, true);
    Ok(())
}

fn test_assert_fail(t: &mut Harness<'_>) -> Flow {
    tt_assert!(t, false);
    Ok(())
}

fn test_ignore(t: &mut Harness<'_>) -> Flow {
    tt_ignore!(t);
}

fn test_fail_explicit(t: &mut Harness<'_>) -> Flow {
    tt_fail!(t, "Explicit failure.");
}

fn dumper(t: &mut Harness<'_>) {
    tt_diag!(t, "Dump function.");
}

fn test_dump(t: &mut Harness<'_>) -> Flow {
    tt_assert!(t, false);
    Ok(())
}

fn setup(t: &mut Harness<'_>) -> Flow {
    tt_diag!(t, "In setup().");
    Ok(())
}

fn teardown(t: &mut Harness<'_>) -> Flow {
    tt_diag!(t, "In teardown().");
    Ok(())
}

fn test_fixture_ok(t: &mut Harness<'_>) -> Flow {
    tt_assert!(t, true);
    Ok(())
}

fn test_fixture_fail(t: &mut Harness<'_>) -> Flow {
    tt_assert!(t, false);
    Ok(())
}

fn test_fixture_ignore(t: &mut Harness<'_>) -> Flow {
    tt_ignore!(t);
}

fn test_assert_eq_ok(t: &mut Harness<'_>) -> Flow {
    tt_assert_int!(t, Int::MAX, Int::MAX);
    tt_assert_int!(t, Int::MIN, Int::MIN);
    tt_assert_hex!(t, 0x8234_5678, 0x8234_5678);
    tt_assert_str!(t, "zzz", "zzz");
    Ok(())
}

fn test_assert_int_fail1(t: &mut Harness<'_>) -> Flow {
    tt_assert_int!(t, Int::MAX, Int::MIN);
    Ok(())
}

fn test_assert_int_fail2(t: &mut Harness<'_>) -> Flow {
    tt_assert_int!(t, Int::MIN, Int::MAX);
    Ok(())
}

fn test_assert_hex_fail(t: &mut Harness<'_>) -> Flow {
    tt_assert_hex!(t, 0x1234_5678, 0x8765_4321);
    Ok(())
}

fn test_assert_str_fail(t: &mut Harness<'_>) -> Flow {
    tt_assert_str!(t, "zzz", "aaa");
    Ok(())
}

fn test_memory_guard(t: &mut Harness<'_>) -> Flow {
    let mut guard = [0u8; 64];
    fill_memory(&mut guard, 1234);
    let (_, tail) = guard.split_at_mut(32);
    tail.fill(0);
    tt_verify_memory!(t, &guard[..32], 1234);
    Ok(())
}

/// Run the demonstration suite.
///
/// Registers and removes its own fixtures, so it leaves the harness without
/// a fixture.
pub fn run_demo(t: &mut Harness<'_>) {
    tt_test!(t, test_diag);
    tt_test!(t, test_assert_ok);
    tt_test!(t, test_assert_fail);
    tt_test!(t, test_ignore);
    tt_test!(t, test_fail_explicit);

    t.register_fixture(None, None, Some(dumper));
    tt_test!(t, test_dump);
    t.unregister_fixture();

    t.register_fixture(Some(setup), Some(teardown), None);
    tt_test!(t, test_fixture_ok);
    tt_test!(t, test_fixture_fail);
    tt_test!(t, test_fixture_ignore);
    t.unregister_fixture();

    tt_test!(t, test_assert_eq_ok);
    tt_test!(t, test_assert_int_fail1);
    tt_test!(t, test_assert_int_fail2);
    tt_test!(t, test_assert_hex_fail);
    tt_test!(t, test_assert_str_fail);
    tt_test!(t, test_memory_guard);
}
