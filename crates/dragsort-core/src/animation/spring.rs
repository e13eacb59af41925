#![forbid(unsafe_code)]

//! Damped harmonic oscillator (spring) for offset motion.
//!
//!   F = -stiffness × (position - target) - damping × velocity
//!
//! Positions are logical pixels. Integration is semi-implicit Euler with
//! large `dt` values subdivided into 4ms steps.
//!
//! # Invariants
//!
//! 1. A spring at rest stays at rest until `set_target()` or `reset()`.
//! 2. Once at rest, `value()` is exactly the target (snapped).
//! 3. Stiffness is at least 0.1 and damping at least 1.0, so every spring
//!    eventually comes to rest.

use std::time::Duration;

use super::Animation;

/// Maximum dt per integration step (4ms).
const MAX_STEP_SECS: f64 = 0.004;

/// Position delta (px) below which the spring may come to rest.
const DEFAULT_REST_THRESHOLD: f64 = 0.1;

/// Velocity (px/s) below which the spring may come to rest.
const DEFAULT_VELOCITY_THRESHOLD: f64 = 1.0;

const MIN_STIFFNESS: f64 = 0.1;

/// An undamped spring oscillates forever and never reports completion.
const MIN_DAMPING: f64 = 1.0;

/// Spring-driven offset.
#[derive(Debug, Clone)]
pub struct Spring {
    position: f64,
    velocity: f64,
    target: f64,
    initial: f64,
    stiffness: f64,
    damping: f64,
    at_rest: bool,
}

impl Spring {
    /// Create a spring at `initial` moving toward `target`.
    ///
    /// Defaults: stiffness 170, damping 26 (slightly underdamped).
    #[must_use]
    pub fn new(initial: f32, target: f32) -> Self {
        let initial = f64::from(initial);
        let target = f64::from(target);
        Self {
            position: initial,
            velocity: 0.0,
            target,
            initial,
            stiffness: 170.0,
            damping: 26.0,
            at_rest: (initial - target).abs() < DEFAULT_REST_THRESHOLD,
        }
    }

    /// Set stiffness (builder pattern). Clamped to minimum 0.1.
    #[must_use]
    pub fn with_stiffness(mut self, k: f64) -> Self {
        self.stiffness = k.max(MIN_STIFFNESS);
        self
    }

    /// Set damping (builder pattern). Clamped to minimum 1.0.
    #[must_use]
    pub fn with_damping(mut self, c: f64) -> Self {
        self.damping = c.max(MIN_DAMPING);
        self
    }

    /// Current velocity in px/s.
    #[inline]
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Change the target. Wakes the spring if it was at rest.
    pub fn set_target(&mut self, target: f32) {
        let target = f64::from(target);
        if (self.target - target).abs() > f64::EPSILON {
            self.target = target;
            self.at_rest = false;
        }
    }

    fn step(&mut self, dt: f64) {
        let displacement = self.position - self.target;
        let acceleration = -self.stiffness * displacement - self.damping * self.velocity;
        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;
    }
}

impl Animation for Spring {
    fn tick(&mut self, dt: Duration) {
        if self.at_rest {
            return;
        }

        let mut remaining = dt.as_secs_f64();
        while remaining > 0.0 {
            let step_dt = remaining.min(MAX_STEP_SECS);
            self.step(step_dt);
            remaining -= step_dt;
        }

        if (self.position - self.target).abs() < DEFAULT_REST_THRESHOLD
            && self.velocity.abs() < DEFAULT_VELOCITY_THRESHOLD
        {
            self.position = self.target;
            self.velocity = 0.0;
            self.at_rest = true;
        }
    }

    fn is_complete(&self) -> bool {
        self.at_rest
    }

    fn value(&self) -> f32 {
        self.position as f32
    }

    fn target(&self) -> f32 {
        self.target as f32
    }

    fn reset(&mut self) {
        self.position = self.initial;
        self.velocity = 0.0;
        self.at_rest = (self.initial - self.target).abs() < DEFAULT_REST_THRESHOLD;
    }
}
