#![forbid(unsafe_code)]

//! Offset animation primitives.
//!
//! Everything here animates a single scalar (a vertical offset in logical
//! pixels) from a start value toward a target. Time is supplied by the caller
//! through [`Animation::tick`]; nothing reads a wall clock, so replaying the
//! same tick sequence always produces the same values.
//!
//! - [`Tween`]: fixed-duration interpolation through an easing curve.
//! - [`Spring`]: damped harmonic oscillator; duration emerges from physics.
//! - [`Transition`]: either of the above behind one concrete type.
//!
//! # Invariants
//!
//! 1. `value()` equals the start value before the first tick and the target
//!    once `is_complete()` is true.
//! 2. A zero-duration tween is complete on construction.
//! 3. `retarget()` keeps the current value continuous (no jump).

use std::time::Duration;

pub mod spring;

pub use spring::Spring;

/// An easing curve mapping linear progress `t ∈ [0, 1]` to eased progress.
pub type EasingFn = fn(f32) -> f32;

/// Identity easing.
#[must_use]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Quadratic ease-in.
#[must_use]
pub fn ease_in(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t
}

/// Quadratic ease-out.
#[must_use]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Quadratic ease-in-out (the default timing curve for settle transitions).
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// A time-driven scalar animation.
pub trait Animation {
    /// Advance by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation has reached its target.
    fn is_complete(&self) -> bool;

    /// Current value.
    fn value(&self) -> f32;

    /// Final value.
    fn target(&self) -> f32;

    /// Restart from the original start value.
    fn reset(&mut self);
}

// ---------------------------------------------------------------------------
// Tween
// ---------------------------------------------------------------------------

/// Fixed-duration interpolation from `from` to `to`.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: Duration,
    elapsed: Duration,
    easing: EasingFn,
}

impl Tween {
    /// Create a tween with [`ease_in_out`] easing.
    #[must_use]
    pub fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing: ease_in_out,
        }
    }

    /// Set the easing curve (builder pattern).
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Linear progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Restart toward a new target from the current value.
    pub fn retarget(&mut self, to: f32) {
        self.from = self.value();
        self.to = to;
        self.elapsed = Duration::ZERO;
    }
}

impl Animation for Tween {
    fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn value(&self) -> f32 {
        if self.is_complete() {
            return self.to;
        }
        let eased = (self.easing)(self.progress());
        self.from + (self.to - self.from) * eased
    }

    fn target(&self) -> f32 {
        self.to
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}

// ---------------------------------------------------------------------------
// Transition
// ---------------------------------------------------------------------------

/// A tween or a spring, chosen at runtime.
#[derive(Debug, Clone)]
pub enum Transition {
    Tween(Tween),
    Spring(Spring),
}

impl Transition {
    /// A transition that is already at `value`.
    #[must_use]
    pub fn settled(value: f32) -> Self {
        Self::Tween(Tween::new(value, value, Duration::ZERO))
    }

    /// Restart toward a new target from the current value.
    pub fn retarget(&mut self, to: f32) {
        match self {
            Self::Tween(t) => t.retarget(to),
            Self::Spring(s) => s.set_target(to),
        }
    }
}

impl Animation for Transition {
    fn tick(&mut self, dt: Duration) {
        match self {
            Self::Tween(t) => t.tick(dt),
            Self::Spring(s) => s.tick(dt),
        }
    }

    fn is_complete(&self) -> bool {
        match self {
            Self::Tween(t) => t.is_complete(),
            Self::Spring(s) => s.is_complete(),
        }
    }

    fn value(&self) -> f32 {
        match self {
            Self::Tween(t) => t.value(),
            Self::Spring(s) => s.value(),
        }
    }

    fn target(&self) -> f32 {
        match self {
            Self::Tween(t) => t.target(),
            Self::Spring(s) => s.target(),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::Tween(t) => t.reset(),
            Self::Spring(s) => s.reset(),
        }
    }
}

impl From<Tween> for Transition {
    fn from(t: Tween) -> Self {
        Self::Tween(t)
    }
}

impl From<Spring> for Transition {
    fn from(s: Spring) -> Self {
        Self::Spring(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_150: Duration = Duration::from_millis(150);
    const MS_300: Duration = Duration::from_millis(300);

    #[test]
    fn tween_starts_at_from_and_ends_at_to() {
        let mut t = Tween::new(0.0, 270.0, MS_300);
        assert_eq!(t.value(), 0.0);
        t.tick(MS_300);
        assert!(t.is_complete());
        assert_eq!(t.value(), 270.0);
    }

    #[test]
    fn tween_midpoint_of_ease_in_out_is_half() {
        let mut t = Tween::new(0.0, 100.0, MS_300);
        t.tick(MS_150);
        assert!((t.value() - 50.0).abs() < 0.01);
    }

    #[test]
    fn tween_overshooting_tick_clamps() {
        let mut t = Tween::new(90.0, 0.0, MS_300);
        t.tick(Duration::from_secs(5));
        assert!(t.is_complete());
        assert_eq!(t.value(), 0.0);
        assert_eq!(t.progress(), 1.0);
    }

    #[test]
    fn zero_duration_tween_is_complete_immediately() {
        let t = Tween::new(10.0, 20.0, Duration::ZERO);
        assert!(t.is_complete());
        assert_eq!(t.value(), 20.0);
    }

    #[test]
    fn retarget_is_continuous() {
        let mut t = Tween::new(0.0, 100.0, MS_300).easing(linear);
        t.tick(MS_150);
        let before = t.value();
        t.retarget(0.0);
        assert_eq!(t.value(), before);
        assert_eq!(t.target(), 0.0);
        assert!(!t.is_complete());
    }

    #[test]
    fn reset_restarts() {
        let mut t = Tween::new(0.0, 100.0, MS_300);
        t.tick(MS_300);
        t.reset();
        assert_eq!(t.value(), 0.0);
    }

    #[test]
    fn easing_endpoints() {
        for easing in [linear, ease_in, ease_out, ease_in_out] {
            assert_eq!(easing(0.0), 0.0);
            assert!((easing(1.0) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn settled_transition_is_complete() {
        let t = Transition::settled(180.0);
        assert!(t.is_complete());
        assert_eq!(t.value(), 180.0);
        assert_eq!(t.target(), 180.0);
    }

    #[test]
    fn transition_dispatches_to_spring() {
        let mut t: Transition = Spring::new(0.0, 90.0).into();
        for _ in 0..200 {
            t.tick(Duration::from_millis(16));
        }
        assert!(t.is_complete());
        assert_eq!(t.value(), 90.0);
    }
}
