#![forbid(unsafe_code)]

//! Error values exchanged with the host.
//!
//! The engine itself never fails: out-of-range indices are clamped and
//! out-of-bounds gesture starts are ignored. The only error is the one a
//! host may hand back from its reorder callback.

use thiserror::Error;

/// The host refused (or failed to persist) a committed reorder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("reorder rejected: {reason}")]
pub struct ReorderRejected {
    pub reason: String,
}

impl ReorderRejected {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
