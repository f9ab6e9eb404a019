//! Time-based animation primitives and the list section choreography.
//!
//! Everything here is evaluated against an `Instant` supplied by the caller,
//! so the event loop drives it with the frame clock and tests drive it with
//! fixed offsets from a base instant.

mod easing;
mod section;
mod timer;
mod timing;
mod tween;
mod visibility;

pub use easing::Easing;
pub use section::{AnimatedListSection, ItemPhase, SectionPhase};
pub use timer::{FiredTimer, TimerArena, TimerKey};
pub use timing::{AnimationTiming, PORTFOLIO_ANIMATION_DURATION, PORTFOLIO_ITEM_ANIMATION_DELAY};
pub use tween::TweenSpec;
pub use visibility::{AnimatedVisibility, VisibilityPhase};
