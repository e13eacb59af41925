#![forbid(unsafe_code)]

//! End-of-drag resolution.
//!
//! On release the dragged row heads for its nearest slot (rounding half up,
//! clamped to the list). Once that motion completes the order is rewritten
//! (remove at the pick-up index, insert at the settled index) and the host
//! is told, but only if the index actually changed.

/// What a finished drag did to the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum CommitOutcome {
    /// The row settled back where it started; the host was not called.
    Unchanged { index: usize },
    /// The order changed and the host was told.
    Reordered { from: usize, to: usize },
    /// The host rejected the reorder and the previous order was restored.
    RolledBack { from: usize, to: usize },
}

impl CommitOutcome {
    /// Whether the order differs from before the drag.
    #[must_use]
    pub fn changed_order(&self) -> bool {
        matches!(self, Self::Reordered { .. })
    }
}

/// `clamp(round_half_up(offset / item_height), 0, len - 1)`. Returns `0`
/// for an empty list.
#[must_use]
pub fn settled_index(offset: f32, item_height: f32, len: usize) -> usize {
    let max = len.saturating_sub(1);
    let slot = (offset / item_height + 0.5).floor();
    if slot.is_nan() || slot <= 0.0 {
        0
    } else if slot >= max as f32 {
        max
    } else {
        slot as usize
    }
}

/// Move the element at `from` so it ends up at `to`. Out-of-range indices
/// leave `items` untouched.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= items.len() || to >= items.len() {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

/// An in-flight settle: the dragged row is moving to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Settle {
    pub(crate) from: usize,
    pub(crate) to: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    const H: f32 = 90.0;

    #[test]
    fn settled_index_rounds_half_up() {
        assert_eq!(settled_index(405.0, H, 10), 5);
        assert_eq!(settled_index(404.0, H, 10), 4);
        assert_eq!(settled_index(44.9, H, 10), 0);
        assert_eq!(settled_index(45.0, H, 10), 1);
    }

    #[test]
    fn settled_index_clamps_to_last() {
        assert_eq!(settled_index(405.0, H, 5), 4);
        assert_eq!(settled_index(405.0, H, 3), 2);
        assert_eq!(settled_index(405.0, H, 1), 0);
        assert_eq!(settled_index(405.0, H, 0), 0);
        assert_eq!(settled_index(-90.0, H, 5), 0);
    }

    #[test]
    fn move_item_forward_and_back() {
        let mut items = vec![0, 1, 2, 3, 4];
        move_item(&mut items, 0, 3);
        assert_eq!(items, vec![1, 2, 3, 0, 4]);
        move_item(&mut items, 3, 0);
        assert_eq!(items, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn move_item_ignores_bad_indices() {
        let mut items = vec![0, 1];
        move_item(&mut items, 0, 7);
        move_item(&mut items, 9, 0);
        move_item(&mut items, 1, 1);
        assert_eq!(items, vec![0, 1]);
    }

    #[test]
    fn only_reordered_changes_order() {
        assert!(CommitOutcome::Reordered { from: 0, to: 1 }.changed_order());
        assert!(!CommitOutcome::RolledBack { from: 0, to: 1 }.changed_order());
        assert!(!CommitOutcome::Unchanged { index: 2 }.changed_order());
    }
}
