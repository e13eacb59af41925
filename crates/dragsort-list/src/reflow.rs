#![forbid(unsafe_code)]

//! Sibling reflow while a row is dragged.
//!
//! Only rows strictly between the pick-up slot and the tentative slot move,
//! and each moves exactly one slot toward the pick-up slot, however far the
//! pointer has travelled past it. Every other row returns to its own slot.
//! The dragged row follows the pointer (centred on it) and is clamped to the
//! list's extent; it is never snapped before commit.

use crate::config::SettleMotion;
use crate::position::PositionModel;
use crate::session::DragSession;

/// What a reflow pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReflowOutcome {
    /// Same tentative slot; only the dragged row moved.
    Followed,
    /// The tentative slot changed and the siblings were rearranged.
    Crossed { from: usize, to: usize },
}

/// `clamp(floor(position / item_height), 0, len - 1)`. Returns `0` for an
/// empty list.
#[must_use]
pub fn tentative_index(position: f32, item_height: f32, len: usize) -> usize {
    let max = len.saturating_sub(1);
    let slot = (position / item_height).floor();
    if slot.is_nan() || slot <= 0.0 {
        0
    } else if slot >= max as f32 {
        max
    } else {
        slot as usize
    }
}

/// Dragged-row offset for a pointer at content `position`, clamped to
/// `[0, max_offset]`.
#[must_use]
pub fn follow_offset(position: f32, item_height: f32, max_offset: f32) -> f32 {
    let raw = position - item_height / 2.0;
    if raw.is_nan() {
        return 0.0;
    }
    raw.clamp(0.0, max_offset.max(0.0))
}

/// Grid offset of sibling `index` when the row from `original` is tentatively
/// at `tentative`.
#[must_use]
pub fn sibling_offset(index: usize, original: usize, tentative: usize, item_height: f32) -> f32 {
    let slot = if tentative > original && index > original && index <= tentative {
        index - 1
    } else if tentative < original && index >= tentative && index < original {
        index + 1
    } else {
        index
    };
    slot as f32 * item_height
}

/// Apply one pointer sample at content `position` to `model`.
pub(crate) fn reflow(
    model: &mut PositionModel,
    session: &mut DragSession,
    position: f32,
    motion: &SettleMotion,
) -> ReflowOutcome {
    let h = model.item_height();
    let len = model.len();
    let original = session.original_index;
    let new_index = tentative_index(position, h, len);

    let outcome = if new_index == session.last_published_index {
        ReflowOutcome::Followed
    } else {
        for i in (0..len).filter(|&i| i != original) {
            model.animate_to(i, sibling_offset(i, original, new_index, h), motion);
        }
        let from = session.last_published_index;
        session.last_published_index = new_index;
        ReflowOutcome::Crossed { from, to: new_index }
    };

    model.set_immediate(original, follow_offset(position, h, model.max_offset()));
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    const H: f32 = 90.0;

    fn sibling_slots(len: usize, original: usize, tentative: usize) -> Vec<f32> {
        (0..len)
            .filter(|&i| i != original)
            .map(|i| sibling_offset(i, original, tentative, H) / H)
            .collect()
    }

    #[test]
    fn tentative_index_floors_and_clamps() {
        assert_eq!(tentative_index(0.0, H, 5), 0);
        assert_eq!(tentative_index(89.9, H, 5), 0);
        assert_eq!(tentative_index(90.0, H, 5), 1);
        assert_eq!(tentative_index(-50.0, H, 5), 0);
        assert_eq!(tentative_index(10_000.0, H, 5), 4);
        assert_eq!(tentative_index(100.0, H, 0), 0);
        assert_eq!(tentative_index(f32::NAN, H, 5), 0);
    }

    #[test]
    fn follow_offset_centres_and_clamps() {
        assert_eq!(follow_offset(315.0, H, 360.0), 270.0);
        assert_eq!(follow_offset(10.0, H, 360.0), 0.0);
        assert_eq!(follow_offset(900.0, H, 360.0), 360.0);
    }

    #[test]
    fn downward_move_shifts_range_up() {
        // 0 dragged to 3: rows 1..=3 move up one, row 4 stays.
        assert_eq!(sibling_slots(5, 0, 3), vec![0.0, 1.0, 2.0, 4.0]);
    }

    #[test]
    fn upward_move_shifts_range_down() {
        // 4 dragged to 1: rows 1..=3 move down one, row 0 stays.
        assert_eq!(sibling_slots(5, 4, 1), vec![0.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn back_to_origin_restores_grid() {
        assert_eq!(sibling_slots(5, 2, 2), vec![0.0, 1.0, 3.0, 4.0]);
    }

    #[test]
    fn reflow_follows_without_crossing() {
        let mut model = PositionModel::new(5, H);
        let mut session = DragSession::new(1, 0.0, 0.0);
        let outcome = reflow(&mut model, &mut session, 150.0, &SettleMotion::Instant);
        assert_eq!(outcome, ReflowOutcome::Followed);
        assert_eq!(model.offset(1), Some(105.0));
        assert_eq!(model.offset(0), Some(0.0));
        assert_eq!(model.offset(2), Some(180.0));
    }

    #[test]
    fn reflow_crossing_publishes_new_index() {
        let mut model = PositionModel::new(5, H);
        let mut session = DragSession::new(0, 0.0, 0.0);
        let outcome = reflow(&mut model, &mut session, 315.0, &SettleMotion::Instant);
        assert_eq!(outcome, ReflowOutcome::Crossed { from: 0, to: 3 });
        assert_eq!(session.last_published_index, 3);
        assert_eq!(model.offsets(), &[270.0, 0.0, 90.0, 180.0, 360.0]);
    }

    #[test]
    fn reflow_reversal_resets_passed_rows() {
        let mut model = PositionModel::new(5, H);
        let mut session = DragSession::new(0, 0.0, 0.0);
        reflow(&mut model, &mut session, 315.0, &SettleMotion::Instant);
        let outcome = reflow(&mut model, &mut session, 100.0, &SettleMotion::Instant);
        assert_eq!(outcome, ReflowOutcome::Crossed { from: 3, to: 1 });
        assert_eq!(model.offsets(), &[55.0, 0.0, 180.0, 270.0, 360.0]);
    }

    #[test]
    fn reflow_clamps_dragged_row_to_list_extent() {
        let mut model = PositionModel::new(3, H);
        let mut session = DragSession::new(1, 0.0, 0.0);
        reflow(&mut model, &mut session, 5_000.0, &SettleMotion::Instant);
        assert_eq!(model.offset(1), Some(180.0));
        assert_eq!(session.last_published_index, 2);
        reflow(&mut model, &mut session, -400.0, &SettleMotion::Instant);
        assert_eq!(model.offset(1), Some(0.0));
        assert_eq!(session.last_published_index, 0);
    }
}
