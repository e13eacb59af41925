#![forbid(unsafe_code)]

//! The record of one in-progress drag.

/// State of an active drag. At most one exists per list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Index the item was picked up from.
    pub original_index: usize,
    /// Tentative index most recently published to the siblings.
    pub last_published_index: usize,
    /// Last absolute pointer Y seen.
    pub raw_pointer_offset: f32,
    /// Container scroll offset when the drag began.
    pub scroll_offset_at_start: f32,
}

impl DragSession {
    #[must_use]
    pub fn new(index: usize, raw_y: f32, scroll_offset: f32) -> Self {
        Self {
            original_index: index,
            last_published_index: index,
            raw_pointer_offset: raw_y,
            scroll_offset_at_start: scroll_offset,
        }
    }

    /// How far the container has scrolled since the drag began.
    #[must_use]
    pub fn scroll_travel(&self, scroll_offset: f32) -> f32 {
        scroll_offset - self.scroll_offset_at_start
    }

    /// Whether the tentative slot differs from the pick-up slot.
    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.original_index != self.last_published_index
    }
}
