// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Assertion and registration macros.
//!
//! Every assertion takes the harness as its first argument and must be used
//! inside a function returning [`Flow`](crate::Flow). On failure it renders
//! the diagnostic and returns `Err(Abort::Failed)` from that function.

/// Location of the macro call site.
#[macro_export]
macro_rules! tt_here {
    () => {
        $crate::SourceLocation::new($crate::Text::Ram(::core::file!()), ::core::line!())
    };
}

/// Run a test function, described as `name()`.
///
/// Evaluates to the [`Outcome`](crate::Outcome), or `None` when the group
/// filter skipped the test.
#[macro_export]
macro_rules! tt_test {
    ($t:expr, $test:path) => {
        $t.run_test(
            $test,
            $crate::tt_here!(),
            $crate::Text::Ram(::core::concat!(::core::stringify!($test), "()")),
        )
    };
}

/// Fail the test unconditionally.
#[macro_export]
macro_rules! tt_fail {
    ($t:expr, $msg:expr) => {
        return ::core::result::Result::Err($t.fail_at(
            $crate::tt_here!(),
            "Failure: %P",
            &[$crate::Arg::from($msg)],
        ))
    };
}

/// Fail the test unless `cond` is true.
#[macro_export]
macro_rules! tt_assert {
    ($t:expr, $cond:expr) => {
        if !($cond) {
            return ::core::result::Result::Err($t.fail_at(
                $crate::tt_here!(),
                "Expected `%s' to be true",
                &[$crate::Arg::Str(::core::stringify!($cond))],
            ));
        }
    };
}

/// Fail the test unless an integer equals the expected value.
#[macro_export]
macro_rules! tt_assert_int {
    ($t:expr, $value:expr, $expected:expr) => {{
        let value: $crate::Int = $value;
        let expected: $crate::Int = $expected;
        if value != expected {
            return ::core::result::Result::Err($t.fail_at(
                $crate::tt_here!(),
                "Expected `%s' == %d, got %d",
                &[
                    $crate::Arg::Str(::core::stringify!($value)),
                    $crate::Arg::Int(expected),
                    $crate::Arg::Int(value),
                ],
            ));
        }
    }};
}

/// Fail the test unless an integer equals the expected value, reported in hex.
#[macro_export]
macro_rules! tt_assert_hex {
    ($t:expr, $value:expr, $expected:expr) => {{
        let value: $crate::Uint = $value;
        let expected: $crate::Uint = $expected;
        if value != expected {
            return ::core::result::Result::Err($t.fail_at(
                $crate::tt_here!(),
                "Expected `%s' == 0x%x, got 0x%x",
                &[
                    $crate::Arg::Str(::core::stringify!($value)),
                    $crate::Arg::Uint(expected),
                    $crate::Arg::Uint(value),
                ],
            ));
        }
    }};
}

/// Fail the test unless a string equals the expected text.
///
/// The expected text may live in either address space.
#[macro_export]
macro_rules! tt_assert_str {
    ($t:expr, $value:expr, $expected:expr) => {{
        let value: &str = $value;
        let expected: $crate::Text<'_> = ::core::convert::Into::into($expected);
        if !$crate::TextSource::eq_str(&expected, value) {
            return ::core::result::Result::Err($t.fail_at(
                $crate::tt_here!(),
                "Expected `%s' == \"%P\", got \"%s\"",
                &[
                    $crate::Arg::Str(::core::stringify!($value)),
                    $crate::Arg::Text(expected),
                    $crate::Arg::Str(value),
                ],
            ));
        }
    }};
}

/// Stop the test and count it as ignored.
#[macro_export]
macro_rules! tt_ignore {
    ($t:expr) => {
        return ::core::result::Result::Err($t.ignore())
    };
}

/// Fail the test if `buf` no longer holds the pattern written by
/// [`fill_memory`](crate::memory::fill_memory) with the same seed.
#[macro_export]
macro_rules! tt_verify_memory {
    ($t:expr, $buf:expr, $seed:expr) => {
        if let ::core::option::Option::Some(offset) =
            $crate::memory::first_mismatch($buf, $seed)
        {
            return ::core::result::Result::Err($t.fail_at(
                $crate::tt_here!(),
                "Verify memory fail at offset 0x%x",
                &[$crate::memory::offset_arg(offset)],
            ));
        }
    };
}

/// Emit a diagnostic line in verbose mode.
#[macro_export]
macro_rules! tt_diag {
    ($t:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $t.diagnostic($fmt, &[$($crate::Arg::from($arg)),*])
    };
}
