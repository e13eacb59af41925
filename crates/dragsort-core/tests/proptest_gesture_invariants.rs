//! Property-based invariant tests for the gesture tracker.
//!
//! 1. Every drag sequence is well-formed: Start, then Updates, then exactly
//!    one End or Cancel.
//! 2. No Update/End/Cancel appears outside a Start..End window.
//! 3. No panics on arbitrary event sequences.

use dragsort_core::event::{Event, PointerEvent};
use dragsort_core::gesture::{DragGesture, GestureConfig, GestureTracker};
use proptest::prelude::*;

fn event_strategy() -> impl Strategy<Value = Event> {
    prop_oneof![
        (0.0f32..800.0).prop_map(|y| PointerEvent::down(20.0, y).into()),
        (0.0f32..800.0).prop_map(|y| PointerEvent::moved(20.0, y).into()),
        (0.0f32..800.0).prop_map(|y| PointerEvent::up(20.0, y).into()),
        (0.0f32..800.0).prop_map(|y| PointerEvent::cancel(20.0, y).into()),
        any::<bool>().prop_map(Event::Focus),
        (0.0f32..500.0).prop_map(|offset| Event::Scroll { offset }),
        Just(Event::Tick),
    ]
}

proptest! {
    #[test]
    fn drag_sequences_are_well_formed(
        events in prop::collection::vec(event_strategy(), 0..200),
        activation in 0.0f32..20.0,
    ) {
        let mut tracker = GestureTracker::new(GestureConfig { activation_distance: activation });
        let mut active = false;

        for event in &events {
            for gesture in tracker.process(event) {
                match gesture {
                    DragGesture::Start { .. } => {
                        prop_assert!(!active, "Start while a drag is active");
                        active = true;
                    }
                    DragGesture::Update { .. } => {
                        prop_assert!(active, "Update outside a drag");
                    }
                    DragGesture::End | DragGesture::Cancel => {
                        prop_assert!(active, "termination outside a drag");
                        active = false;
                    }
                }
            }
            prop_assert_eq!(tracker.is_dragging(), active);
        }
    }
}
