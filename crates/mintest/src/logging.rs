// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Engine lifecycle events.
//!
//! With the `tracing` feature these forward to the `tracing` macros. Without
//! it they expand to nothing, so a firmware build carries no logging code.

macro_rules! log_debug {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::debug!($($arg)+);
        }
    };
}

macro_rules! log_trace {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!($($arg)+);
        }
    };
}
