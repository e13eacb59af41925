#![forbid(unsafe_code)]

//! List configuration.
//!
//! Defaults reproduce the geometry of the task list this engine was built
//! for: 90px rows below a 100px header, auto-scroll bands at 100px and 300px
//! from the top of the viewport, 10px scroll steps, and 300ms ease-in-out
//! transitions.

use std::time::Duration;

use dragsort_core::animation::{Spring, Transition, Tween};
use dragsort_core::gesture::GestureConfig;

/// Default uniform row height in logical pixels.
pub const DEFAULT_ITEM_HEIGHT: f32 = 90.0;

/// Default distance from the top of the screen to the first row.
pub const DEFAULT_TOP_INSET: f32 = 100.0;

/// Smallest accepted row height; smaller values are clamped up to this.
pub const MIN_ITEM_HEIGHT: f32 = 1.0;

/// Top-level configuration for a [`DragList`](crate::DragList).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ListConfig {
    /// Uniform row height.
    pub item_height: f32,
    /// Screen distance from the top edge to the list's first row.
    pub top_inset: f32,
    /// Travel before a press becomes a drag.
    pub activation_distance: f32,
    /// Edge auto-scroll behaviour.
    pub auto_scroll: AutoScrollConfig,
    /// Motion used for sibling reflow and the final settle.
    pub motion: SettleMotion,
    /// What to do when the host rejects a reorder.
    pub reorder_failure: ReorderFailurePolicy,
    /// What to do when the host replaces the items mid-drag.
    pub external_update: ExternalUpdatePolicy,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            item_height: DEFAULT_ITEM_HEIGHT,
            top_inset: DEFAULT_TOP_INSET,
            activation_distance: 0.0,
            auto_scroll: AutoScrollConfig::default(),
            motion: SettleMotion::default(),
            reorder_failure: ReorderFailurePolicy::default(),
            external_update: ExternalUpdatePolicy::default(),
        }
    }
}

impl ListConfig {
    /// Set the row height (builder pattern).
    #[must_use]
    pub fn with_item_height(mut self, item_height: f32) -> Self {
        self.item_height = item_height;
        self
    }

    /// Set the top inset (builder pattern).
    #[must_use]
    pub fn with_top_inset(mut self, top_inset: f32) -> Self {
        self.top_inset = top_inset;
        self
    }

    /// Set the activation distance (builder pattern).
    #[must_use]
    pub fn with_activation_distance(mut self, distance: f32) -> Self {
        self.activation_distance = distance;
        self
    }

    /// Set the auto-scroll configuration (builder pattern).
    #[must_use]
    pub fn with_auto_scroll(mut self, auto_scroll: AutoScrollConfig) -> Self {
        self.auto_scroll = auto_scroll;
        self
    }

    /// Set the motion (builder pattern).
    #[must_use]
    pub fn with_motion(mut self, motion: SettleMotion) -> Self {
        self.motion = motion;
        self
    }

    /// Set the reorder failure policy (builder pattern).
    #[must_use]
    pub fn with_reorder_failure(mut self, policy: ReorderFailurePolicy) -> Self {
        self.reorder_failure = policy;
        self
    }

    /// Set the external update policy (builder pattern).
    #[must_use]
    pub fn with_external_update(mut self, policy: ExternalUpdatePolicy) -> Self {
        self.external_update = policy;
        self
    }

    /// Row height clamped to [`MIN_ITEM_HEIGHT`]. Non-finite values fall back
    /// to [`DEFAULT_ITEM_HEIGHT`].
    #[must_use]
    pub fn effective_item_height(&self) -> f32 {
        if self.item_height.is_finite() {
            self.item_height.max(MIN_ITEM_HEIGHT)
        } else {
            DEFAULT_ITEM_HEIGHT
        }
    }

    /// Gesture thresholds derived from this configuration.
    #[must_use]
    pub fn gesture(&self) -> GestureConfig {
        GestureConfig {
            activation_distance: self.activation_distance.max(0.0),
        }
    }
}

/// Edge auto-scroll parameters.
///
/// Positions are compared against the scroll offset: a dragged slot less
/// than `near_edge` below the viewport top scrolls up, one more than
/// `far_edge` below it scrolls down.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AutoScrollConfig {
    pub enabled: bool,
    pub near_edge: f32,
    pub far_edge: f32,
    /// Scroll change per sample.
    pub step: f32,
    /// Content height excluded from the downward scroll bound
    /// (`bound = len * item_height - viewport_reserve`).
    pub viewport_reserve: f32,
}

impl Default for AutoScrollConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            near_edge: 100.0,
            far_edge: 300.0,
            step: 10.0,
            viewport_reserve: 400.0,
        }
    }
}

impl AutoScrollConfig {
    /// Auto-scroll turned off.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

/// How offsets move toward new targets.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SettleMotion {
    /// Jump straight to the target.
    Instant,
    /// Ease-in-out over a fixed duration.
    Timing { duration_ms: u64 },
    /// Damped spring.
    Spring { stiffness: f64, damping: f64 },
}

impl Default for SettleMotion {
    fn default() -> Self {
        Self::Timing { duration_ms: 300 }
    }
}

impl SettleMotion {
    /// Build a transition from `from` to `to`.
    #[must_use]
    pub fn transition(&self, from: f32, to: f32) -> Transition {
        match *self {
            Self::Instant => Transition::settled(to),
            Self::Timing { duration_ms } => {
                Tween::new(from, to, Duration::from_millis(duration_ms)).into()
            }
            Self::Spring { stiffness, damping } => Spring::new(from, to)
                .with_stiffness(stiffness)
                .with_damping(damping)
                .into(),
        }
    }
}

/// Behaviour when the host's reorder callback returns an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ReorderFailurePolicy {
    /// Keep the new order; the rejection is only logged.
    #[default]
    FireAndForget,
    /// Restore the pre-drag order and re-settle positions.
    Rollback,
}

/// Behaviour when the host replaces the items while a drag is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ExternalUpdatePolicy {
    /// Discard the session without committing, then adopt the new items.
    #[default]
    Abort,
    /// Keep the session; adopt the new items once the list is idle again.
    Defer,
}
