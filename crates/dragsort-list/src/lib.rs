#![forbid(unsafe_code)]

//! Drag-to-reorder list engine.
//!
//! # Role in dragsort
//! `dragsort-list` turns drag gestures into a new item order. It keeps one
//! vertical offset per row, rearranges the rows a dragged item passes over,
//! nudges the scroll container near its edges, and hands the host the new
//! order once the dragged row has settled.
//!
//! # Primary responsibilities
//! - **DragList**: the session state machine (`Idle`, `Dragging`, `Settling`).
//! - **PositionModel**: target and displayed offsets for every row.
//! - **Reflow**: sibling displacement while a row is dragged.
//! - **AutoScrollController**: edge scrolling during a drag.
//! - **Commit**: nearest-slot resolution and the final reorder.
//!
//! # Example
//! ```
//! use dragsort_list::{CommitOutcome, DragList, ListConfig, NoopHost, SettleMotion};
//!
//! let config = ListConfig::default().with_motion(SettleMotion::Instant);
//! let mut list = DragList::new(vec![1u32, 2, 3], config);
//! let mut host = NoopHost;
//!
//! // Rows are 90px tall below a 100px header.
//! list.start(145.0, &mut host);
//! list.update(325.0, &mut host);
//! assert_eq!(
//!     list.end(&mut host),
//!     Some(CommitOutcome::Reordered { from: 0, to: 2 })
//! );
//! assert_eq!(list.items(), &[2, 3, 1]);
//! ```

pub mod autoscroll;
pub mod commit;
pub mod config;
pub mod error;
pub mod host;
pub mod list;
pub mod position;
pub mod reflow;
pub mod session;

pub use autoscroll::AutoScrollController;
pub use commit::{CommitOutcome, move_item, settled_index};
pub use config::{
    AutoScrollConfig, ExternalUpdatePolicy, ListConfig, ReorderFailurePolicy, SettleMotion,
};
pub use error::ReorderRejected;
pub use host::{HapticIntensity, ListHost, NoopHost, RecordingHost};
pub use list::{DragList, DragPhase, ItemsUpdate, Keyed};
pub use position::PositionModel;
pub use reflow::{ReflowOutcome, follow_offset, sibling_offset, tentative_index};
pub use session::DragSession;
