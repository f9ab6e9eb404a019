//! Expand/collapse choreography for the list section.
//!
//! The section owns one container animation and one animation per item, all
//! driven by a single expansion boolean:
//!
//! - Expanding: the container grows right away. Each item's visibility flag
//!   turns on after a flat gate (one animation duration), and its enter tween
//!   then adds `index * stagger` of its own delay, producing the cascade.
//! - Collapsing: every item's flag turns off at once and all items shrink
//!   together. The container holds for one duration before shrinking so the
//!   items clear first.
//!
//! The gates are per-item timers in a [`TimerArena`]; flipping the boolean
//! again bumps their generations so a stale gate can never show an item after
//! the section was collapsed.

use std::time::Instant;

use tracing::debug;

use super::timer::TimerArena;
use super::timing::AnimationTiming;
use super::visibility::{AnimatedVisibility, VisibilityPhase};

/// Phase of the section as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionPhase {
    Collapsed,
    Expanding,
    Expanded,
    Collapsing,
}

/// Phase of a single item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemPhase {
    Hidden,
    Showing,
    Shown,
    Hiding,
}

#[derive(Debug, Clone)]
struct ItemAnimator {
    /// Whether the item has been let through its gate
    visible: bool,
    animation: AnimatedVisibility,
}

#[derive(Debug, Clone)]
pub struct AnimatedListSection {
    timing: AnimationTiming,
    expanded: bool,
    container: AnimatedVisibility,
    items: Vec<ItemAnimator>,
    gates: TimerArena,
}

impl AnimatedListSection {
    /// Create a collapsed section with `item_count` items.
    pub fn new(item_count: usize, timing: AnimationTiming) -> Self {
        let items = (0..item_count)
            .map(|index| ItemAnimator {
                visible: false,
                animation: AnimatedVisibility::new(timing.item_enter(index), timing.item_exit()),
            })
            .collect();

        Self {
            timing,
            expanded: false,
            container: AnimatedVisibility::new(timing.container_enter(), timing.container_exit()),
            items,
            gates: TimerArena::with_slots(item_count),
        }
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Drive the section toward `expanded`.
    ///
    /// Timers already due at `now` are applied first so a late call never
    /// swallows a gate that should have fired. Returns `false` if nothing
    /// changed.
    pub fn set_expanded(&mut self, expanded: bool, now: Instant) -> bool {
        self.update(now);

        if expanded == self.expanded {
            return false;
        }
        self.expanded = expanded;
        self.container.set_visible(expanded, now);

        if expanded {
            let due = now + self.timing.visibility_gate();
            for index in 0..self.items.len() {
                self.gates.schedule(index, due);
            }
        } else {
            for (index, item) in self.items.iter_mut().enumerate() {
                self.gates.cancel(index);
                item.visible = false;
                item.animation.set_visible(false, now);
            }
        }

        debug!(expanded, items = self.items.len(), "section retargeted");
        true
    }

    /// Show everything at rest with no timers running.
    ///
    /// Used for static snapshots where no frame clock drives the tweens.
    pub fn snap_expanded(&mut self) {
        self.expanded = true;
        self.gates.cancel_all();
        self.container.snap(true);
        for item in &mut self.items {
            item.visible = true;
            item.animation.snap(true);
        }
    }

    /// Fire due gates and settle finished tweens.
    ///
    /// Returns `true` if any phase changed.
    pub fn update(&mut self, now: Instant) -> bool {
        let mut changed = false;

        for fired in self.gates.fire_due(now) {
            if let Some(item) = self.items.get_mut(fired.key.slot()) {
                // The tween starts at the gate's due time, not at the frame
                // that noticed it, so the cascade does not drift with the tick.
                item.visible = true;
                item.animation.set_visible(true, fired.due);
                debug!(index = fired.key.slot(), "item gate opened");
                changed = true;
            }
        }

        changed |= self.container.update(now);
        for item in &mut self.items {
            changed |= item.animation.update(now);
        }
        changed
    }

    pub fn phase(&self, now: Instant) -> SectionPhase {
        match self.container.phase(now) {
            VisibilityPhase::Hidden => SectionPhase::Collapsed,
            VisibilityPhase::Entering => SectionPhase::Expanding,
            VisibilityPhase::Visible => SectionPhase::Expanded,
            VisibilityPhase::Exiting => SectionPhase::Collapsing,
        }
    }

    /// Eased height fraction of the container.
    pub fn container_progress(&self, now: Instant) -> f32 {
        self.container.progress(now)
    }

    pub fn item_phase(&self, index: usize, now: Instant) -> ItemPhase {
        let Some(item) = self.items.get(index) else {
            return ItemPhase::Hidden;
        };

        match (item.visible, item.animation.phase(now)) {
            (true, VisibilityPhase::Visible) => ItemPhase::Shown,
            (true, _) => ItemPhase::Showing,
            (false, VisibilityPhase::Exiting) => ItemPhase::Hiding,
            (false, _) => ItemPhase::Hidden,
        }
    }

    /// Eased width fraction of an item.
    pub fn item_progress(&self, index: usize, now: Instant) -> f32 {
        self.items
            .get(index)
            .map(|item| item.animation.progress(now))
            .unwrap_or(0.0)
    }

    /// The item's visibility flag, as opposed to its animated size.
    pub fn item_visible(&self, index: usize) -> bool {
        self.items.get(index).is_some_and(|item| item.visible)
    }

    /// When the item's current tween starts moving, if one is in flight.
    pub fn item_motion_start(&self, index: usize) -> Option<Instant> {
        self.items
            .get(index)
            .and_then(|item| item.animation.motion_start())
    }

    /// When the item's visibility gate will open, if one is pending.
    pub fn item_gate_due(&self, index: usize) -> Option<Instant> {
        self.gates.pending(index)
    }

    /// Whether frames are still needed to reach a resting state.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.gates.has_pending()
            || self.container.is_animating(now)
            || self.items.iter().any(|item| item.animation.is_animating(now))
    }

    /// Whether the section and all items are at rest in the state that
    /// matches the expansion flag.
    pub fn is_settled(&self, now: Instant) -> bool {
        let (section, item) = if self.expanded {
            (SectionPhase::Expanded, ItemPhase::Shown)
        } else {
            (SectionPhase::Collapsed, ItemPhase::Hidden)
        };
        self.phase(now) == section
            && (0..self.items.len()).all(|index| self.item_phase(index, now) == item)
    }
}
