//! Enter/exit animation for a single piece of content.
//!
//! [`AnimatedVisibility`] tracks a boolean target and animates a fraction
//! between 0.0 (hidden) and 1.0 (fully shown) using separate enter and exit
//! tween specs. Retargeting mid-flight reverses from the current fraction, so
//! the displayed value never jumps and always converges to the new target.

use std::time::Instant;

use super::tween::{Tween, TweenSpec};

/// Coarse phase of an [`AnimatedVisibility`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityPhase {
    Hidden,
    /// Target is visible; may still be waiting out the enter delay
    Entering,
    Visible,
    /// Target is hidden; may still be waiting out the exit delay
    Exiting,
}

#[derive(Debug, Clone)]
pub struct AnimatedVisibility {
    target: bool,
    enter: TweenSpec,
    exit: TweenSpec,
    tween: Option<Tween>,
    /// Fraction when no tween is running
    resting: f32,
}

impl AnimatedVisibility {
    /// Create hidden content with the given enter and exit specs.
    pub fn new(enter: TweenSpec, exit: TweenSpec) -> Self {
        Self {
            target: false,
            enter,
            exit,
            tween: None,
            resting: 0.0,
        }
    }

    /// Retarget the animation.
    ///
    /// Returns `false` if `visible` already was the target.
    pub fn set_visible(&mut self, visible: bool, now: Instant) -> bool {
        if visible == self.target {
            return false;
        }

        let from = self.fraction(now);
        let (spec, to) = if visible {
            (self.enter, 1.0)
        } else {
            (self.exit, 0.0)
        };

        self.target = visible;
        self.tween = Some(Tween::start(&spec, from, to, now));
        true
    }

    /// Jump straight to the resting state for `visible`.
    pub fn snap(&mut self, visible: bool) {
        self.target = visible;
        self.tween = None;
        self.resting = if visible { 1.0 } else { 0.0 };
    }

    /// Settle a finished tween. Returns `true` if the phase changed.
    pub fn update(&mut self, now: Instant) -> bool {
        match self.tween {
            Some(tween) if tween.is_finished(now) => {
                self.resting = tween.to;
                self.tween = None;
                true
            }
            _ => false,
        }
    }

    pub fn phase(&self, now: Instant) -> VisibilityPhase {
        let moving = self.tween.is_some_and(|tween| !tween.is_finished(now));
        match (self.target, moving) {
            (true, true) => VisibilityPhase::Entering,
            (true, false) => VisibilityPhase::Visible,
            (false, true) => VisibilityPhase::Exiting,
            (false, false) => VisibilityPhase::Hidden,
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        matches!(
            self.phase(now),
            VisibilityPhase::Entering | VisibilityPhase::Exiting
        )
    }

    /// Linear fraction in `0.0..=1.0`.
    pub fn fraction(&self, now: Instant) -> f32 {
        self.tween
            .map(|tween| tween.fraction(now))
            .unwrap_or(self.resting)
    }

    /// Eased progress in `0.0..=1.0`, the value a renderer should size by.
    pub fn progress(&self, now: Instant) -> f32 {
        match self.tween {
            Some(tween) => tween.easing.ease(tween.fraction(now)),
            None => self.resting,
        }
    }

    /// When the current tween starts moving, if one is in flight.
    pub fn motion_start(&self) -> Option<Instant> {
        self.tween.map(|tween| tween.motion_start())
    }

    /// When the current tween comes to rest, if one is in flight.
    pub fn settles_at(&self) -> Option<Instant> {
        self.tween.map(|tween| tween.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn container() -> AnimatedVisibility {
        AnimatedVisibility::new(
            TweenSpec::new(ms(600)),
            TweenSpec::new(ms(600)).with_delay(ms(600)),
        )
    }

    #[test]
    fn test_starts_hidden() {
        let vis = container();
        let now = Instant::now();
        assert_eq!(vis.phase(now), VisibilityPhase::Hidden);
        assert_eq!(vis.progress(now), 0.0);
        assert!(!vis.is_animating(now));
    }

    #[test]
    fn test_enter_runs_to_visible() {
        let t0 = Instant::now();
        let mut vis = container();
        assert!(vis.set_visible(true, t0));

        assert_eq!(vis.phase(t0 + ms(300)), VisibilityPhase::Entering);
        assert!((vis.progress(t0 + ms(300)) - 0.5).abs() < 1e-3);

        assert!(vis.update(t0 + ms(600)));
        assert_eq!(vis.phase(t0 + ms(600)), VisibilityPhase::Visible);
        assert_eq!(vis.progress(t0 + ms(600)), 1.0);
    }

    #[test]
    fn test_same_target_is_noop() {
        let t0 = Instant::now();
        let mut vis = container();
        assert!(!vis.set_visible(false, t0));
        assert!(vis.set_visible(true, t0));
        assert!(!vis.set_visible(true, t0 + ms(100)));
        assert_eq!(vis.settles_at(), Some(t0 + ms(600)));
    }

    #[test]
    fn test_exit_waits_for_delay() {
        let t0 = Instant::now();
        let mut vis = container();
        vis.snap(true);
        vis.set_visible(false, t0);

        assert_eq!(vis.phase(t0 + ms(300)), VisibilityPhase::Exiting);
        assert_eq!(vis.progress(t0 + ms(600)), 1.0);
        assert!(vis.progress(t0 + ms(900)) < 1.0);
        assert_eq!(vis.motion_start(), Some(t0 + ms(600)));

        vis.update(t0 + ms(1200));
        assert_eq!(vis.phase(t0 + ms(1200)), VisibilityPhase::Hidden);
        assert_eq!(vis.progress(t0 + ms(1200)), 0.0);
    }

    #[test]
    fn test_reverse_continues_from_current_fraction() {
        let t0 = Instant::now();
        let mut vis = AnimatedVisibility::new(TweenSpec::new(ms(600)), TweenSpec::new(ms(600)));
        vis.set_visible(true, t0);

        let mid = t0 + ms(300);
        let before = vis.progress(mid);
        vis.set_visible(false, mid);
        let after = vis.progress(mid);

        assert!((before - after).abs() < 1e-4, "no jump on reversal");
        // Half the distance remains, so half the duration
        let remaining = vis.settles_at().unwrap().duration_since(mid);
        assert!(remaining >= ms(299) && remaining <= ms(301));
        vis.update(mid + ms(301));
        assert_eq!(vis.phase(mid + ms(301)), VisibilityPhase::Hidden);
    }

    #[test]
    fn test_flip_back_during_exit_delay_settles_visible() {
        let t0 = Instant::now();
        let mut vis = container();
        vis.snap(true);
        vis.set_visible(false, t0);
        vis.set_visible(true, t0 + ms(200));

        vis.update(t0 + ms(200));
        assert_eq!(vis.phase(t0 + ms(200)), VisibilityPhase::Visible);
        assert_eq!(vis.progress(t0 + ms(200)), 1.0);
    }

    #[test]
    fn test_snap() {
        let mut vis = container();
        let now = Instant::now();
        vis.snap(true);
        assert_eq!(vis.phase(now), VisibilityPhase::Visible);
        vis.snap(false);
        assert_eq!(vis.phase(now), VisibilityPhase::Hidden);
        assert!(!vis.update(now));
    }
}
