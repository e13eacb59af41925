#![forbid(unsafe_code)]

//! Gesture tracking: transforms raw pointer samples into drag lifecycle events.
//!
//! [`GestureTracker`] is a stateful processor that converts raw [`Event`]
//! sequences (pointer down, move, up, cancel, focus changes) into
//! [`DragGesture`]s that a drag list consumes.
//!
//! # State Machine
//!
//! ```text
//! Released --down--> Pressed --move >= activation--> Dragging
//!    ^                  |                               |
//!    +------up----------+                               |
//!    +------------- up (End) / cancel (Cancel) ---------+
//! ```
//!
//! With the default activation distance of zero the tracker skips `Pressed`
//! and emits `Start` on the down sample itself.
//!
//! # Invariants
//!
//! 1. Every drag sequence is well-formed: `Start` → zero or more `Update` →
//!    exactly one of `End` or `Cancel`.
//! 2. `Update`, `End` and `Cancel` are never emitted without a preceding
//!    `Start`.
//! 3. A second pointer-down while pressed is ignored (single pointer only).
//! 4. After `reset()` the tracker is released and emits nothing for the
//!    remainder of the interrupted interaction.
//!
//! # Failure Modes
//!
//! - Focus loss during a drag emits `Cancel`; focus loss while merely pressed
//!   is silent.
//! - A move without a prior down (hover) is ignored.

use crate::event::{Event, PointerEvent, PointerEventKind};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Thresholds for gesture activation.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureConfig {
    /// Minimum euclidean travel (logical px) before a press becomes a drag
    /// (default: 0.0, i.e. the press itself starts the drag).
    pub activation_distance: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            activation_distance: 0.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Drag lifecycle event produced by the tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragGesture {
    /// A drag became active; `raw_y` is the absolute Y of the press.
    Start { raw_y: f32 },
    /// The active drag moved to absolute `raw_y`.
    Update { raw_y: f32 },
    /// The pointer was released; the drag should commit.
    End,
    /// The drag was interrupted and must not commit.
    Cancel,
}

// ---------------------------------------------------------------------------
// GestureTracker
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
struct Press {
    origin: PointerEvent,
    started: bool,
}

/// Stateful tracker that turns pointer samples into [`DragGesture`]s.
///
/// Call [`process`](GestureTracker::process) for each incoming [`Event`].
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    config: GestureConfig,
    press: Option<Press>,
}

impl GestureTracker {
    /// Create a new tracker with the given configuration.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            press: None,
        }
    }

    /// Process a raw event, returning any drag events produced.
    ///
    /// Most events produce 0 or 1 drag events. The move that crosses the
    /// activation distance produces both a `Start` and an `Update`.
    pub fn process(&mut self, event: &Event) -> Vec<DragGesture> {
        let mut out = Vec::with_capacity(2);

        match event {
            Event::Pointer(pointer) => match pointer.kind {
                PointerEventKind::Down => self.on_down(*pointer, &mut out),
                PointerEventKind::Move => self.on_move(*pointer, &mut out),
                PointerEventKind::Up => {
                    if let Some(press) = self.press.take()
                        && press.started
                    {
                        out.push(DragGesture::End);
                    }
                }
                PointerEventKind::Cancel => self.cancel(&mut out),
            },
            Event::Focus(false) => self.cancel(&mut out),
            _ => {}
        }

        out
    }

    /// Whether a drag is currently in progress.
    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.press.is_some_and(|p| p.started)
    }

    /// Whether the pointer is currently pressed (dragging or not).
    #[inline]
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    /// Reset to the released state without emitting anything.
    pub fn reset(&mut self) {
        self.press = None;
    }

    /// Get a reference to the current configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Update the configuration.
    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }
}

// ---------------------------------------------------------------------------
// Internal event handlers
// ---------------------------------------------------------------------------

impl GestureTracker {
    fn on_down(&mut self, pointer: PointerEvent, out: &mut Vec<DragGesture>) {
        if self.press.is_some() {
            return;
        }
        let started = self.config.activation_distance <= 0.0;
        self.press = Some(Press {
            origin: pointer,
            started,
        });
        if started {
            out.push(DragGesture::Start { raw_y: pointer.y });
        }
    }

    fn on_move(&mut self, pointer: PointerEvent, out: &mut Vec<DragGesture>) {
        let Some(ref mut press) = self.press else {
            return;
        };

        if !press.started && press.origin.distance_to(&pointer) >= self.config.activation_distance
        {
            press.started = true;
            // The row under the original press is the one picked up
            out.push(DragGesture::Start {
                raw_y: press.origin.y,
            });
        }

        if press.started {
            out.push(DragGesture::Update { raw_y: pointer.y });
        }
    }

    fn cancel(&mut self, out: &mut Vec<DragGesture>) {
        if let Some(press) = self.press.take()
            && press.started
        {
            out.push(DragGesture::Cancel);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
