// Forbid unsafe in production; deny (with targeted allows) in tests.
#![cfg_attr(not(test), forbid(unsafe_code))]
#![cfg_attr(test, deny(unsafe_code))]

//! Core: pointer events, gesture tracking, offset animation, and logging.
//!
//! # Role in dragsort
//! `dragsort-core` is the input layer. It owns the raw event types a host
//! feeds in, the tracker that classifies them into drag lifecycle events,
//! and the animation primitives used to move offsets over time.
//!
//! # Primary responsibilities
//! - **Event**: pointer samples, scroll changes, focus, ticks.
//! - **GestureTracker**: `Start` / `Update` / `End` / `Cancel` classification.
//! - **Animation**: tweens and springs over a scalar offset.
//! - **Logging**: `tracing` macros behind an optional feature.
//!
//! # How it fits in the system
//! The list engine (`dragsort-list`) consumes `DragGesture` values and drives
//! its position model; it never looks at raw pointer coordinates beyond the
//! `raw_y` a gesture carries.

pub mod animation;
pub mod event;
pub mod gesture;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
