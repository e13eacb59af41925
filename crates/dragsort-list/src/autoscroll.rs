#![forbid(unsafe_code)]

//! Edge auto-scroll.
//!
//! Evaluated once per pointer sample while a drag is live. The dragged row's
//! tentative slot is compared with the scroll offset: too close to the top
//! scrolls up one step, too far below it scrolls down one step. Both
//! directions clamp (at `0` and at `len * item_height - viewport_reserve`)
//! and do nothing once the clamp bound is reached, so re-running with the
//! same inputs cannot drift the offset.

use crate::config::AutoScrollConfig;

/// Decides scroll nudges from the dragged row's position.
#[derive(Debug, Clone, PartialEq)]
pub struct AutoScrollController {
    config: AutoScrollConfig,
}

impl AutoScrollController {
    #[must_use]
    pub fn new(config: AutoScrollConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &AutoScrollConfig {
        &self.config
    }

    /// Largest offset auto-scroll will move to.
    #[must_use]
    pub fn upper_bound(&self, len: usize, item_height: f32) -> f32 {
        (len as f32 * item_height - self.config.viewport_reserve).max(0.0)
    }

    /// New scroll offset for a dragged row at content `position`, or `None`
    /// when no nudge applies.
    #[must_use]
    pub fn step(&self, position: f32, scroll: f32, len: usize, item_height: f32) -> Option<f32> {
        if !self.config.enabled {
            return None;
        }

        let relative = position - scroll;
        let next = if relative < self.config.near_edge && scroll > 0.0 {
            (scroll - self.config.step).max(0.0)
        } else {
            let bound = self.upper_bound(len, item_height);
            if relative > self.config.far_edge && scroll < bound {
                (scroll + self.config.step).min(bound)
            } else {
                return None;
            }
        };

        (next != scroll).then_some(next)
    }
}

impl Default for AutoScrollController {
    fn default() -> Self {
        Self::new(AutoScrollConfig::default())
    }
}
