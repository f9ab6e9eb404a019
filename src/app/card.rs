//! Content and animation state of the card.

use std::time::Instant;

use tracing::debug;

use crate::animation::{AnimatedListSection, AnimationTiming};
use crate::models::{ListEntry, Profile, FRUIT_PROJECTS};

#[derive(Debug, Clone)]
pub struct CardState {
    pub profile: Profile,
    pub entries: Vec<ListEntry>,
    pub section: AnimatedListSection,
}

impl CardState {
    /// The fruit seller's card, collapsed.
    pub fn new(timing: AnimationTiming) -> Self {
        Self::with_entries(Profile::default(), FRUIT_PROJECTS.to_vec(), timing)
    }

    pub fn with_entries(profile: Profile, entries: Vec<ListEntry>, timing: AnimationTiming) -> Self {
        let section = AnimatedListSection::new(entries.len(), timing);
        Self {
            profile,
            entries,
            section,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.section.is_expanded()
    }

    /// Flip the expansion flag. Returns the new value.
    pub fn toggle_expansion(&mut self, now: Instant) -> bool {
        let expanded = !self.section.is_expanded();
        self.section.set_expanded(expanded, now);
        debug!(expanded, "card expansion toggled");
        expanded
    }

    /// Jump straight to the fully expanded state.
    pub fn snap_expanded(&mut self) {
        self.section.snap_expanded();
    }
}
