#![forbid(unsafe_code)]

//! Per-index vertical offsets.
//!
//! [`PositionModel`] owns one target offset per list index and is the single
//! source of truth for where each row sits. Alongside every target it keeps a
//! [`Transition`] so a renderer can draw rows moving toward their targets.
//!
//! # Invariants
//!
//! 1. `targets.len() == motions.len() == len()` at all times.
//! 2. A settled model has `offset(i) == i * item_height` for every `i`.
//! 3. Writes are crate-private: only the reflow and commit paths mutate
//!    offsets, renderers and auto-scroll read them.

use std::time::Duration;

use dragsort_core::animation::{Animation, Transition};

use crate::config::SettleMotion;

/// Target and displayed offsets for `len` uniformly sized rows.
#[derive(Debug, Clone)]
pub struct PositionModel {
    item_height: f32,
    targets: Vec<f32>,
    motions: Vec<Transition>,
}

impl PositionModel {
    /// A settled model with `len` rows.
    #[must_use]
    pub fn new(len: usize, item_height: f32) -> Self {
        let targets: Vec<f32> = (0..len).map(|i| i as f32 * item_height).collect();
        let motions = targets.iter().map(|&t| Transition::settled(t)).collect();
        Self {
            item_height,
            targets,
            motions,
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn item_height(&self) -> f32 {
        self.item_height
    }

    /// Grid slot of `index`.
    #[inline]
    #[must_use]
    pub fn resting_offset(&self, index: usize) -> f32 {
        index as f32 * self.item_height
    }

    /// Largest grid slot, or `0.0` for an empty list.
    #[must_use]
    pub fn max_offset(&self) -> f32 {
        self.resting_offset(self.len().saturating_sub(1))
    }

    /// Target offset of `index`.
    #[must_use]
    pub fn offset(&self, index: usize) -> Option<f32> {
        self.targets.get(index).copied()
    }

    /// All target offsets, indexed by current position in the order.
    #[must_use]
    pub fn offsets(&self) -> &[f32] {
        &self.targets
    }

    /// Where `index` is drawn right now (mid-transition values included).
    #[must_use]
    pub fn displayed(&self, index: usize) -> Option<f32> {
        self.motions.get(index).map(Animation::value)
    }

    /// Displayed offsets for every row.
    #[must_use]
    pub fn displayed_offsets(&self) -> Vec<f32> {
        self.motions.iter().map(Animation::value).collect()
    }

    /// Whether every target sits on its grid slot.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.targets
            .iter()
            .enumerate()
            .all(|(i, &t)| t == self.resting_offset(i))
    }

    /// Whether no row is still moving.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.motions.iter().all(Animation::is_complete)
    }

    /// Whether the motion of `index` has finished. Out-of-range indices are
    /// treated as finished.
    #[must_use]
    pub fn is_motion_complete(&self, index: usize) -> bool {
        self.motions.get(index).is_none_or(Animation::is_complete)
    }

    /// Advance every transition. Returns `true` while anything is moving.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let mut moving = false;
        for motion in &mut self.motions {
            if !motion.is_complete() {
                motion.tick(dt);
                moving |= !motion.is_complete();
            }
        }
        moving
    }

    /// Pin `index` to `offset` with no transition.
    pub(crate) fn set_immediate(&mut self, index: usize, offset: f32) {
        if let Some(target) = self.targets.get_mut(index) {
            *target = offset;
            self.motions[index] = Transition::settled(offset);
        }
    }

    /// Move `index` toward `offset` using `motion`. A target that is already
    /// current keeps its in-flight transition.
    pub(crate) fn animate_to(&mut self, index: usize, offset: f32, motion: &SettleMotion) {
        let Some(target) = self.targets.get_mut(index) else {
            return;
        };
        if *target == offset && self.motions[index].target() == offset {
            return;
        }
        *target = offset;
        let from = self.motions[index].value();
        self.motions[index] = motion.transition(from, offset);
    }

    /// Put every row on its grid slot immediately.
    pub(crate) fn snap_to_grid(&mut self) {
        for i in 0..self.targets.len() {
            let slot = self.resting_offset(i);
            self.targets[i] = slot;
            self.motions[i] = Transition::settled(slot);
        }
    }

    /// Resize to `len` rows and snap everything to the grid.
    pub(crate) fn reconcile(&mut self, len: usize) {
        self.targets.resize(len, 0.0);
        self.motions.resize_with(len, || Transition::settled(0.0));
        self.snap_to_grid();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const H: f32 = 90.0;
    const MOTION: SettleMotion = SettleMotion::Timing { duration_ms: 300 };

    #[test]
    fn new_model_is_on_grid() {
        let model = PositionModel::new(5, H);
        assert_eq!(model.len(), 5);
        assert_eq!(model.offsets(), &[0.0, 90.0, 180.0, 270.0, 360.0]);
        assert!(model.is_settled());
        assert!(model.is_at_rest());
        assert_eq!(model.max_offset(), 360.0);
    }

    #[test]
    fn empty_model() {
        let model = PositionModel::new(0, H);
        assert!(model.is_empty());
        assert_eq!(model.max_offset(), 0.0);
        assert!(model.is_settled());
        assert_eq!(model.offset(0), None);
        assert!(model.is_motion_complete(0));
    }

    #[test]
    fn set_immediate_moves_target_and_display() {
        let mut model = PositionModel::new(3, H);
        model.set_immediate(0, 123.0);
        assert_eq!(model.offset(0), Some(123.0));
        assert_eq!(model.displayed(0), Some(123.0));
        assert!(!model.is_settled());
    }

    #[test]
    fn animate_to_updates_target_now_and_display_over_time() {
        let mut model = PositionModel::new(3, H);
        model.animate_to(2, 90.0, &MOTION);
        assert_eq!(model.offset(2), Some(90.0));
        assert_eq!(model.displayed(2), Some(180.0));
        assert!(!model.is_at_rest());

        assert!(model.tick(Duration::from_millis(150)));
        let mid = model.displayed(2).unwrap_or_default();
        assert!(mid < 180.0 && mid > 90.0);

        assert!(!model.tick(Duration::from_millis(150)));
        assert_eq!(model.displayed(2), Some(90.0));
    }

    #[test]
    fn repeated_animate_to_same_target_does_not_restart() {
        let mut model = PositionModel::new(3, H);
        model.animate_to(1, 0.0, &MOTION);
        model.tick(Duration::from_millis(200));
        let before = model.displayed(1);
        model.animate_to(1, 0.0, &MOTION);
        assert_eq!(model.displayed(1), before);
        model.tick(Duration::from_millis(100));
        assert_eq!(model.displayed(1), Some(0.0));
    }

    #[test]
    fn out_of_range_writes_are_ignored() {
        let mut model = PositionModel::new(2, H);
        model.set_immediate(5, 1.0);
        model.animate_to(5, 1.0, &MOTION);
        assert_eq!(model.offsets(), &[0.0, 90.0]);
    }

    #[test]
    fn snap_to_grid_restores_invariant() {
        let mut model = PositionModel::new(4, H);
        model.set_immediate(0, 250.0);
        model.animate_to(1, 0.0, &MOTION);
        model.snap_to_grid();
        assert!(model.is_settled());
        assert!(model.is_at_rest());
        assert_eq!(model.displayed_offsets(), vec![0.0, 90.0, 180.0, 270.0]);
    }

    #[test]
    fn reconcile_resizes() {
        let mut model = PositionModel::new(2, H);
        model.reconcile(4);
        assert_eq!(model.offsets(), &[0.0, 90.0, 180.0, 270.0]);
        model.reconcile(1);
        assert_eq!(model.offsets(), &[0.0]);
        assert!(model.is_settled());
    }
}
