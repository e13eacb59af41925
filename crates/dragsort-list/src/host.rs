#![forbid(unsafe_code)]

//! Host collaborators.
//!
//! A [`ListHost`] is everything outside the engine that it calls out to:
//! haptic feedback, the scroll container, and the owner of the item order.
//! Haptics and scrolling default to no-ops.

use crate::error::ReorderRejected;

/// Strength of a haptic pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HapticIntensity {
    /// Boundary crossing during reflow.
    Light,
    /// Drag pick-up.
    Medium,
    Heavy,
}

/// Side effects requested by the engine.
pub trait ListHost<T> {
    /// Emit a haptic pulse.
    fn haptic(&mut self, _intensity: HapticIntensity) {}

    /// Move the scroll container to `offset`.
    fn scroll_to(&mut self, _offset: f32) {}

    /// A drag committed a new order. Called at most once per drag, and only
    /// when the item actually moved.
    fn on_reorder(&mut self, items: &[T]) -> Result<(), ReorderRejected>;
}

/// Host that accepts every reorder and ignores feedback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHost;

impl<T> ListHost<T> for NoopHost {
    fn on_reorder(&mut self, _items: &[T]) -> Result<(), ReorderRejected> {
        Ok(())
    }
}

/// Host that records every call, optionally rejecting reorders.
#[derive(Debug, Clone)]
pub struct RecordingHost<T> {
    pub haptics: Vec<HapticIntensity>,
    pub scrolls: Vec<f32>,
    pub reorders: Vec<Vec<T>>,
    pub reject_reorders: bool,
}

impl<T> Default for RecordingHost<T> {
    fn default() -> Self {
        Self {
            haptics: Vec::new(),
            scrolls: Vec::new(),
            reorders: Vec::new(),
            reject_reorders: false,
        }
    }
}

impl<T> RecordingHost<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A host whose reorder callback always fails.
    #[must_use]
    pub fn rejecting() -> Self {
        Self {
            reject_reorders: true,
            ..Self::default()
        }
    }
}

impl<T: Clone> ListHost<T> for RecordingHost<T> {
    fn haptic(&mut self, intensity: HapticIntensity) {
        self.haptics.push(intensity);
    }

    fn scroll_to(&mut self, offset: f32) {
        self.scrolls.push(offset);
    }

    fn on_reorder(&mut self, items: &[T]) -> Result<(), ReorderRejected> {
        self.reorders.push(items.to_vec());
        if self.reject_reorders {
            Err(ReorderRejected::new("recording host rejects reorders"))
        } else {
            Ok(())
        }
    }
}
