//! Tween specifications and the running tween they produce.

use std::time::{Duration, Instant};

use super::easing::Easing;

/// Duration, start delay and easing for a single transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSpec {
    pub duration: Duration,
    pub delay: Duration,
    pub easing: Easing,
}

impl TweenSpec {
    /// A tween with the given duration, no delay and sine in-out easing.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            delay: Duration::ZERO,
            easing: Easing::EaseInOutSine,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Total time from trigger to rest.
    pub fn total(&self) -> Duration {
        self.delay + self.duration
    }
}

/// A tween in flight, moving a linear fraction from `from` to `to`.
///
/// The fraction advances linearly with time; callers apply the easing when
/// they need the displayed value.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Tween {
    pub started: Instant,
    pub delay: Duration,
    /// Time spent moving, already scaled by the distance to travel
    pub duration: Duration,
    pub from: f32,
    pub to: f32,
    pub easing: Easing,
}

impl Tween {
    /// Start a tween toward `to`, scaling the duration by the distance left.
    pub fn start(spec: &TweenSpec, from: f32, to: f32, now: Instant) -> Self {
        let distance = (to - from).abs().clamp(0.0, 1.0);
        Self {
            started: now,
            delay: spec.delay,
            duration: scale(spec.duration, distance),
            from,
            to,
            easing: spec.easing,
        }
    }

    /// Instant at which the value starts moving.
    pub fn motion_start(&self) -> Instant {
        self.started + self.delay
    }

    /// Instant at which the tween reaches `to`.
    pub fn end(&self) -> Instant {
        self.motion_start() + self.duration
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now >= self.end()
    }

    /// Linear fraction at `now`.
    pub fn fraction(&self, now: Instant) -> f32 {
        let motion_start = self.motion_start();
        if now <= motion_start {
            return self.from;
        }
        if self.duration.is_zero() {
            return self.to;
        }

        let moving = now.duration_since(motion_start).as_secs_f32();
        let t = (moving / self.duration.as_secs_f32()).min(1.0);
        self.from + (self.to - self.from) * t
    }
}

/// Scale a duration by a factor in `0.0..=1.0`, rounded to the nanosecond.
fn scale(duration: Duration, factor: f32) -> Duration {
    let nanos = duration.as_nanos() as f64 * f64::from(factor);
    Duration::from_nanos(nanos.round() as u64)
}
