#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! This module defines the raw input samples a drag list consumes. Hosts
//! translate their platform touch or mouse callbacks into [`Event`] values and
//! feed them, one at a time and in arrival order, to the gesture tracker.
//!
//! # Design Notes
//!
//! - Pointer coordinates are absolute screen coordinates (logical pixels),
//!   measured from the top of the screen, not from the list.
//! - Scroll offsets are content offsets of the scroll container; `0.0` means
//!   the first item is flush with the container top.
//! - `Tick` carries no payload; time is passed separately to `tick()` APIs.

/// Canonical input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A pointer (touch or mouse) sample.
    Pointer(PointerEvent),

    /// The container scroll offset changed (user scroll or programmatic).
    Scroll {
        /// New vertical content offset.
        offset: f32,
    },

    /// Focus gained or lost.
    ///
    /// `true` = focus gained, `false` = focus lost.
    Focus(bool),

    /// Animation frame tick.
    Tick,
}

/// A single pointer sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// The phase of the pointer interaction.
    pub kind: PointerEventKind,

    /// Absolute X coordinate.
    pub x: f32,

    /// Absolute Y coordinate.
    pub y: f32,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub const fn new(kind: PointerEventKind, x: f32, y: f32) -> Self {
        Self { kind, x, y }
    }

    /// Pointer pressed at `(x, y)`.
    #[must_use]
    pub const fn down(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Down, x, y)
    }

    /// Pointer moved while pressed.
    #[must_use]
    pub const fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Move, x, y)
    }

    /// Pointer released.
    #[must_use]
    pub const fn up(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Up, x, y)
    }

    /// The platform cancelled the interaction (e.g. a system gesture took over).
    #[must_use]
    pub const fn cancel(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Cancel, x, y)
    }

    /// Euclidean distance to another sample.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<PointerEvent> for Event {
    fn from(pointer: PointerEvent) -> Self {
        Self::Pointer(pointer)
    }
}

/// Pointer interaction phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Pointer pressed.
    Down,
    /// Pointer moved while pressed.
    Move,
    /// Pointer released.
    Up,
    /// Interaction cancelled by the platform.
    Cancel,
}
