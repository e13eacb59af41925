#![forbid(unsafe_code)]

//! Logging facade.
//!
//! With the `tracing` feature enabled this module re-exports the `tracing`
//! macros, and the crate root re-exports them again so downstream crates can
//! write `dragsort_core::debug!(...)` without depending on `tracing`
//! themselves. Without the feature the crate root exports no-op macros with
//! the same names, so call sites compile unchanged either way.

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

#[cfg(not(feature = "tracing"))]
mod noop {
    #[macro_export]
    #[doc(hidden)]
    macro_rules! trace {
        ($($arg:tt)*) => {{}};
    }

    #[macro_export]
    #[doc(hidden)]
    macro_rules! debug {
        ($($arg:tt)*) => {{}};
    }

    #[macro_export]
    #[doc(hidden)]
    macro_rules! info {
        ($($arg:tt)*) => {{}};
    }

    #[macro_export]
    #[doc(hidden)]
    macro_rules! warn {
        ($($arg:tt)*) => {{}};
    }

    #[macro_export]
    #[doc(hidden)]
    macro_rules! error {
        ($($arg:tt)*) => {{}};
    }

    #[macro_export]
    #[doc(hidden)]
    macro_rules! debug_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }

    #[macro_export]
    #[doc(hidden)]
    macro_rules! info_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }
}

/// Stand-in for `tracing::Span` when the `tracing` feature is disabled.
#[cfg(not(feature = "tracing"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Mirrors `tracing::Span::entered`.
    #[must_use]
    pub fn entered(self) -> Self {
        self
    }
}

/// Install a global subscriber for binaries and tests.
///
/// Honours `RUST_LOG` (default `info`). With `json` set, events are written
/// as JSON lines. Returns `false` if a subscriber was already installed.
#[cfg(feature = "tracing-json")]
pub fn init_subscriber(json: bool) -> bool {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    }
}
