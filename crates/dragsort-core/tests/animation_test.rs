//! Integration tests for the animation module.

use dragsort_core::animation::*;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);
const MS_300: Duration = Duration::from_millis(300);

#[test]
fn tween_frame_ticks_complete_on_schedule() {
    let mut tween = Tween::new(0.0, 270.0, MS_300);
    let mut frames = 0;
    while !tween.is_complete() {
        tween.tick(FRAME);
        frames += 1;
    }
    // 300ms / 16ms rounds up to 19 frames
    assert_eq!(frames, 19);
    assert_eq!(tween.value(), 270.0);
}

#[test]
fn tween_moves_monotonically_toward_target() {
    let mut tween = Tween::new(360.0, 90.0, MS_300);
    let mut prev = tween.value();
    while !tween.is_complete() {
        tween.tick(FRAME);
        let v = tween.value();
        assert!(v <= prev + 0.001, "tween should not move away: {v} > {prev}");
        prev = v;
    }
}

#[test]
fn easing_functions_are_monotonic() {
    for easing in [linear, ease_in, ease_out, ease_in_out] {
        let mut prev = 0.0f32;
        for i in 0..=100 {
            let t = i as f32 / 100.0;
            let v = easing(t);
            assert!(v >= prev - 0.001, "easing should be monotonic at t={}", t);
            prev = v;
        }
    }
}

#[test]
fn easing_clamps_out_of_range_input() {
    for easing in [linear, ease_in, ease_out, ease_in_out] {
        assert_eq!(easing(-1.0), 0.0);
        assert!((easing(2.0) - 1.0).abs() < 1e-6);
    }
}

#[test]
fn spring_transition_settles_exactly_on_target() {
    let mut t = Transition::from(Spring::new(405.0, 360.0));
    for _ in 0..500 {
        t.tick(FRAME);
        if t.is_complete() {
            break;
        }
    }
    assert!(t.is_complete());
    assert_eq!(t.value(), 360.0);
}

#[test]
fn retargeting_a_transition_mid_flight() {
    let mut t = Transition::from(Tween::new(0.0, 90.0, MS_300));
    t.tick(Duration::from_millis(100));
    let mid = t.value();
    t.retarget(180.0);
    assert_eq!(t.value(), mid);
    t.tick(MS_300);
    assert_eq!(t.value(), 180.0);
}
