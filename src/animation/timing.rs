//! Timing constants for the card choreography.

use std::time::Duration;

use super::easing::Easing;
use super::tween::TweenSpec;

/// Length of every expand/collapse tween, and of the item visibility gate.
pub const PORTFOLIO_ANIMATION_DURATION: Duration = Duration::from_millis(600);

/// Extra enter delay per list position.
pub const PORTFOLIO_ITEM_ANIMATION_DELAY: Duration = Duration::from_millis(200);

/// Builds every tween the list section runs.
///
/// Expanding runs in two stages: each item's visibility flag waits out a flat
/// gate of one `duration`, then its enter tween adds `index * item_stagger`
/// of its own delay. The container's collapse is held back by one `duration`
/// so the items clear first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationTiming {
    pub duration: Duration,
    pub item_stagger: Duration,
    pub easing: Easing,
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self {
            duration: PORTFOLIO_ANIMATION_DURATION,
            item_stagger: PORTFOLIO_ITEM_ANIMATION_DELAY,
            easing: Easing::EaseInOutSine,
        }
    }
}

impl AnimationTiming {
    fn tween(&self) -> TweenSpec {
        TweenSpec::new(self.duration).with_easing(self.easing)
    }

    pub fn container_enter(&self) -> TweenSpec {
        self.tween()
    }

    pub fn container_exit(&self) -> TweenSpec {
        self.tween().with_delay(self.duration)
    }

    /// How long an item's visibility flag waits after expansion is requested.
    pub fn visibility_gate(&self) -> Duration {
        self.duration
    }

    pub fn item_enter(&self, index: usize) -> TweenSpec {
        self.tween().with_delay(self.stagger_for(index))
    }

    pub fn item_exit(&self) -> TweenSpec {
        self.tween()
    }

    pub fn stagger_for(&self, index: usize) -> Duration {
        self.item_stagger
            .saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
    }
}
