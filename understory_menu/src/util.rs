// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Forward to `tracing::trace!` when the `tracing` feature is enabled.
///
/// Without the feature the arguments are not evaluated.
macro_rules! trace_transition {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!(target: "understory_menu", $($arg)*);
    };
}

pub(crate) use trace_transition;
