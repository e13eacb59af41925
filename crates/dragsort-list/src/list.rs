#![forbid(unsafe_code)]

//! Drag-to-reorder list state machine.
//!
//! [`DragList`] owns the item order, the [`PositionModel`], the scroll offset
//! and at most one [`DragSession`]. Hosts feed it raw [`Event`]s (or call the
//! lifecycle methods directly), advance it with [`tick`](DragList::tick), and
//! read positions back out to draw rows.
//!
//! # State Machine
//!
//! ```text
//! Idle --valid start--> Dragging --end--> Settling --motion done--> Idle
//!  ^  \--invalid start (no-op)          |                         |
//!  +------------ cancel / abort / teardown (grid reset, no commit) +
//! ```
//!
//! # Invariants
//!
//! 1. At most one session exists; a start while one exists is ignored.
//! 2. `positions().len() == len()` after every public call.
//! 3. Whenever the phase is `Idle`, every offset is on its grid slot.
//! 4. The host's `on_reorder` runs at most once per drag, only when the
//!    settled index differs from the pick-up index.

use std::fmt::Debug;
use std::time::Duration;

use dragsort_core::event::Event;
use dragsort_core::gesture::{DragGesture, GestureTracker};
use dragsort_core::{debug, info, warn};

use crate::autoscroll::AutoScrollController;
use crate::commit::{CommitOutcome, Settle, move_item, settled_index};
use crate::config::{ExternalUpdatePolicy, ListConfig, ReorderFailurePolicy};
use crate::host::{HapticIntensity, ListHost};
use crate::position::PositionModel;
use crate::reflow::{self, ReflowOutcome};
use crate::session::DragSession;

/// Stable identity of a list entry.
///
/// The engine never looks at item content; it only compares keys.
pub trait Keyed {
    type Key: Clone + Eq + Debug;

    fn key(&self) -> Self::Key;
}

macro_rules! impl_keyed_for_self {
    ($($t:ty),* $(,)?) => {
        $(
            impl Keyed for $t {
                type Key = $t;

                fn key(&self) -> Self::Key {
                    self.clone()
                }
            }
        )*
    };
}

impl_keyed_for_self!(u16, u32, u64, usize, i32, i64, String, &'static str);

/// Lifecycle phase of a [`DragList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DragPhase {
    Idle,
    Dragging,
    Settling,
}

/// What [`DragList::set_items`] did with a new item set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemsUpdate {
    /// Adopted immediately.
    Applied,
    /// A live drag was discarded, then the items were adopted.
    AbortedSession,
    /// Queued until the live drag finishes.
    Deferred,
}

/// Interactive drag-to-reorder list.
#[derive(Debug)]
pub struct DragList<T> {
    config: ListConfig,
    items: Vec<T>,
    positions: PositionModel,
    scroll_offset: f32,
    session: Option<DragSession>,
    settle: Option<Settle>,
    pending_items: Option<Vec<T>>,
    tracker: GestureTracker,
    auto_scroll: AutoScrollController,
}

impl<T: Keyed> DragList<T> {
    /// Create an idle list over `items`.
    #[must_use]
    pub fn new(items: Vec<T>, config: ListConfig) -> Self {
        let item_height = config.effective_item_height();
        Self {
            positions: PositionModel::new(items.len(), item_height),
            tracker: GestureTracker::new(config.gesture()),
            auto_scroll: AutoScrollController::new(config.auto_scroll.clone()),
            config,
            items,
            scroll_offset: 0.0,
            session: None,
            settle: None,
            pending_items: None,
        }
    }

    // -----------------------------------------------------------------------
    // Read access
    // -----------------------------------------------------------------------

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    #[must_use]
    pub fn positions(&self) -> &PositionModel {
        &self.positions
    }

    #[must_use]
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Whether an item set is queued behind a live drag.
    #[must_use]
    pub fn has_pending_items(&self) -> bool {
        self.pending_items.is_some()
    }

    #[must_use]
    pub fn phase(&self) -> DragPhase {
        match (&self.session, &self.settle) {
            (None, _) => DragPhase::Idle,
            (Some(_), None) => DragPhase::Dragging,
            (Some(_), Some(_)) => DragPhase::Settling,
        }
    }

    /// Index of the item with `key`.
    #[must_use]
    pub fn index_of(&self, key: &T::Key) -> Option<usize> {
        self.items.iter().position(|item| item.key() == *key)
    }

    /// Index of the row being dragged or settled, if any.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.session.map(|s| s.original_index)
    }

    /// Convert an absolute pointer Y into a content-space position.
    #[must_use]
    pub fn content_position(&self, raw_y: f32) -> f32 {
        raw_y + self.scroll_offset - self.config.top_inset
    }

    // -----------------------------------------------------------------------
    // Event entry point
    // -----------------------------------------------------------------------

    /// Feed one raw event. Returns the commit outcome if this event finished
    /// a drag (only possible with instant settle motion).
    pub fn handle_event<H: ListHost<T>>(
        &mut self,
        event: &Event,
        host: &mut H,
    ) -> Option<CommitOutcome> {
        if let Event::Scroll { offset } = event {
            self.set_scroll_offset(*offset);
        }

        let mut outcome = None;
        for gesture in self.tracker.process(event) {
            match gesture {
                DragGesture::Start { raw_y } => {
                    self.start(raw_y, host);
                }
                DragGesture::Update { raw_y } => self.update(raw_y, host),
                DragGesture::End => {
                    if let Some(done) = self.end(host) {
                        outcome = Some(done);
                    }
                }
                // A press made during a settle never owned the session
                DragGesture::Cancel if self.phase() == DragPhase::Dragging => self.cancel(),
                DragGesture::Cancel => {}
            }
        }
        outcome
    }

    /// Record a scroll offset reported by the container (user scrolling).
    pub fn set_scroll_offset(&mut self, offset: f32) {
        if offset.is_finite() {
            self.scroll_offset = offset.max(0.0);
        }
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Try to pick up the row under absolute `raw_y`. Returns `true` if a
    /// session was created.
    pub fn start<H: ListHost<T>>(&mut self, raw_y: f32, host: &mut H) -> bool {
        if self.session.is_some() {
            debug!(raw_y, "drag start ignored: session already active");
            return false;
        }

        let candidate = (self.content_position(raw_y) / self.positions.item_height()).floor();
        if !(candidate >= 0.0 && candidate < self.len() as f32) {
            debug!(raw_y, candidate, "drag start ignored: outside list");
            return false;
        }

        let index = candidate as usize;
        self.session = Some(DragSession::new(index, raw_y, self.scroll_offset));
        info!(index, scroll = self.scroll_offset, "drag started");
        host.haptic(HapticIntensity::Medium);
        self.run_auto_scroll(host);
        true
    }

    /// Move the dragged row to absolute `raw_y`.
    pub fn update<H: ListHost<T>>(&mut self, raw_y: f32, host: &mut H) {
        if self.phase() != DragPhase::Dragging {
            return;
        }
        let position = self.content_position(raw_y);
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.raw_pointer_offset = raw_y;

        let outcome = reflow::reflow(
            &mut self.positions,
            session,
            position,
            &self.config.motion,
        );
        if let ReflowOutcome::Crossed { .. } = outcome {
            debug!(?outcome, "drag crossed row boundary");
            host.haptic(HapticIntensity::Light);
        }
        self.run_auto_scroll(host);
    }

    /// Release the dragged row. Starts the settle motion; if that motion is
    /// instantaneous the drag is committed before returning.
    pub fn end<H: ListHost<T>>(&mut self, host: &mut H) -> Option<CommitOutcome> {
        if self.phase() != DragPhase::Dragging {
            return None;
        }
        let session = self.session?;
        let from = session.original_index;
        let dragged = self.positions.offset(from).unwrap_or_default();
        let to = settled_index(dragged, self.positions.item_height(), self.len());

        self.positions
            .animate_to(from, self.positions.resting_offset(to), &self.config.motion);
        self.settle = Some(Settle { from, to });
        debug!(
            from,
            to,
            dragged,
            moved = session.has_moved(),
            scroll_travel = session.scroll_travel(self.scroll_offset),
            "drag released, settling"
        );

        if self.positions.is_motion_complete(from) {
            return self.finish(host);
        }
        None
    }

    /// Abandon any drag without committing and snap everything to the grid.
    pub fn cancel(&mut self) {
        if self.session.is_some() {
            info!("drag cancelled");
        }
        self.session = None;
        self.settle = None;
        self.tracker.reset();
        self.positions.snap_to_grid();
        self.apply_pending(None);
    }

    /// Advance all motion by `dt`. Returns the commit outcome when this tick
    /// completes a settle.
    pub fn tick<H: ListHost<T>>(&mut self, dt: Duration, host: &mut H) -> Option<CommitOutcome> {
        self.positions.tick(dt);
        let settle = self.settle?;
        if self.positions.is_motion_complete(settle.from) {
            self.finish(host)
        } else {
            None
        }
    }

    /// Whether anything is still moving.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.positions.is_at_rest()
    }

    // -----------------------------------------------------------------------
    // Host-driven changes
    // -----------------------------------------------------------------------

    /// Replace the item set. Mid-drag behaviour follows
    /// [`ExternalUpdatePolicy`].
    pub fn set_items(&mut self, items: Vec<T>) -> ItemsUpdate {
        if self.phase() == DragPhase::Idle {
            self.replace_items(items);
            return ItemsUpdate::Applied;
        }

        match self.config.external_update {
            ExternalUpdatePolicy::Abort => {
                warn!("items replaced mid-drag; aborting session");
                self.pending_items = None;
                self.cancel();
                self.replace_items(items);
                ItemsUpdate::AbortedSession
            }
            ExternalUpdatePolicy::Defer => {
                debug!(len = items.len(), "items replaced mid-drag; deferring");
                self.pending_items = Some(items);
                ItemsUpdate::Deferred
            }
        }
    }

    /// Tear the list down: discard any drag (no commit) and any queued items.
    pub fn teardown(&mut self) {
        self.pending_items = None;
        self.cancel();
    }

    /// Consume the list, returning its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn run_auto_scroll<H: ListHost<T>>(&mut self, host: &mut H) {
        let Some(session) = self.session else {
            return;
        };
        let position = self.positions.resting_offset(session.last_published_index);
        if let Some(next) = self.auto_scroll.step(
            position,
            self.scroll_offset,
            self.len(),
            self.positions.item_height(),
        ) {
            debug!(from = self.scroll_offset, to = next, "auto-scroll");
            self.scroll_offset = next;
            host.scroll_to(next);
        }
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn finish<H: ListHost<T>>(&mut self, host: &mut H) -> Option<CommitOutcome> {
        let Settle { from, to } = self.settle.take()?;
        self.session = None;

        let outcome = if from == to {
            CommitOutcome::Unchanged { index: from }
        } else {
            move_item(&mut self.items, from, to);
            match host.on_reorder(&self.items) {
                Ok(()) => {
                    info!(from, to, "reorder committed");
                    CommitOutcome::Reordered { from, to }
                }
                Err(rejected) => match self.config.reorder_failure {
                    ReorderFailurePolicy::FireAndForget => {
                        warn!(from, to, error = %rejected, "reorder rejected; keeping new order");
                        CommitOutcome::Reordered { from, to }
                    }
                    ReorderFailurePolicy::Rollback => {
                        warn!(from, to, error = %rejected, "reorder rejected; rolling back");
                        move_item(&mut self.items, to, from);
                        CommitOutcome::RolledBack { from, to }
                    }
                },
            }
        };

        self.positions.snap_to_grid();
        let committed = match outcome {
            CommitOutcome::Reordered { to, .. } => {
                self.items.get(to).map(|item| (item.key(), to))
            }
            _ => None,
        };
        self.apply_pending(committed);
        Some(outcome)
    }

    /// Swap in items queued during a drag. The queued set predates the
    /// commit, so a committed move is replayed on it by key.
    fn apply_pending(&mut self, committed: Option<(T::Key, usize)>) {
        let Some(mut items) = self.pending_items.take() else {
            return;
        };
        if let Some((key, to)) = committed
            && let Some(at) = items.iter().position(|item| item.key() == key)
        {
            let to = to.min(items.len() - 1);
            move_item(&mut items, at, to);
            debug!(from = at, to, "replayed committed move on deferred items");
        }
        self.replace_items(items);
    }

    fn replace_items(&mut self, items: Vec<T>) {
        let same_keys = items.len() == self.items.len()
            && items.iter().zip(&self.items).all(|(a, b)| a.key() == b.key());
        self.items = items;
        if !same_keys {
            self.positions.reconcile(self.items.len());
        }
    }
}
