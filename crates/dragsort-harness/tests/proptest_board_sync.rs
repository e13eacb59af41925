//! Property-based tests: the list and the task board agree on order.
//!
//! With an accepting board, every replay that ends idle must leave:
//!
//! 1. `list.items()` ids equal to the board's ids.
//! 2. Every position on its grid slot.
//! 3. `positions().len()` equal to the task count.

use dragsort_harness::replay::Replayer;
use dragsort_harness::scenario::{Scenario, Step};
use dragsort_harness::task::TaskDraft;
use dragsort_list::{DragPhase, ListConfig};
use proptest::prelude::*;

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        4 => (60.0f32..1_200.0).prop_map(|y| Step::Down { y, x: 0.0 }),
        6 => (-200.0f32..1_400.0).prop_map(|y| Step::Move { y, x: 0.0 }),
        4 => (-200.0f32..1_400.0).prop_map(|y| Step::Up { y, x: 0.0 }),
        1 => Just(Step::Cancel),
        1 => Just(Step::Blur),
        2 => (0.0f32..400.0).prop_map(|offset| Step::Scroll { offset }),
        3 => (0u64..120).prop_map(|ms| Step::Tick { ms }),
        1 => Just(Step::Settle),
        1 => "[a-z]{1,8}".prop_map(|title| Step::Add { draft: TaskDraft::titled(title) }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn list_and_board_agree_when_idle(
        titles in proptest::collection::vec("[a-z]{1,8}", 0..12),
        steps in proptest::collection::vec(step(), 0..40),
    ) {
        let mut steps = steps;
        // Finish any drag, then let it settle.
        steps.push(Step::Up { y: 0.0, x: 0.0 });
        steps.push(Step::Settle);

        let scenario = Scenario {
            name: "prop".to_string(),
            config: ListConfig::default(),
            frame_ms: 16,
            tasks: titles.into_iter().map(TaskDraft::titled).collect(),
            steps,
        };
        let mut replayer = Replayer::new(&scenario).expect("replayer");
        for (index, step) in scenario.steps.iter().enumerate() {
            let record = replayer.apply(index, step).expect("step");
            prop_assert_eq!(record.offsets.len(), record.order.len());
        }

        let list = replayer.list();
        prop_assert_eq!(list.phase(), DragPhase::Idle);
        let ids: Vec<u64> = list.items().iter().map(|t| t.id).collect();
        prop_assert_eq!(ids, replayer.board().ids());
        prop_assert_eq!(list.positions().len(), list.len());
        prop_assert!(list.positions().is_settled());
    }
}
