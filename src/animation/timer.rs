//! Cancellable one-shot timers keyed by slot and generation.
//!
//! Every slot carries a generation counter. Scheduling or cancelling bumps
//! the counter, so a queued entry captured under an older generation is
//! dropped when it comes due instead of firing. Only the most recent write
//! to a slot can ever take effect.

use std::time::Instant;

/// Handle to one scheduled firing of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerKey {
    slot: usize,
    generation: u64,
}

impl TimerKey {
    pub fn slot(&self) -> usize {
        self.slot
    }
}

/// A timer that came due, along with the instant it was due at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiredTimer {
    pub key: TimerKey,
    pub due: Instant,
}

#[derive(Debug, Clone, Default)]
pub struct TimerArena {
    generations: Vec<u64>,
    queue: Vec<FiredTimer>,
}

impl TimerArena {
    /// Create an arena with `slots` independent timer slots.
    pub fn with_slots(slots: usize) -> Self {
        Self {
            generations: vec![0; slots],
            queue: Vec::new(),
        }
    }

    /// Current generation of a slot.
    pub fn generation(&self, slot: usize) -> u64 {
        self.generations.get(slot).copied().unwrap_or(0)
    }

    /// Schedule `slot` to fire at `due`, superseding anything pending on it.
    ///
    /// Returns `None` for a slot outside the arena.
    pub fn schedule(&mut self, slot: usize, due: Instant) -> Option<TimerKey> {
        let generation = self.generations.get_mut(slot)?;
        *generation += 1;

        let key = TimerKey {
            slot,
            generation: *generation,
        };
        self.queue.push(FiredTimer { key, due });
        Some(key)
    }

    /// Cancel whatever is pending on `slot`.
    pub fn cancel(&mut self, slot: usize) {
        if let Some(generation) = self.generations.get_mut(slot) {
            *generation += 1;
        }
    }

    pub fn cancel_all(&mut self) {
        for generation in &mut self.generations {
            *generation += 1;
        }
        self.queue.clear();
    }

    pub fn is_current(&self, key: TimerKey) -> bool {
        self.generation(key.slot) == key.generation
    }

    /// Due instant of the live timer on `slot`, if any.
    pub fn pending(&self, slot: usize) -> Option<Instant> {
        self.queue
            .iter()
            .find(|entry| entry.key.slot == slot && self.is_current(entry.key))
            .map(|entry| entry.due)
    }

    pub fn has_pending(&self) -> bool {
        self.queue.iter().any(|entry| self.is_current(entry.key))
    }

    /// Remove every entry due at or before `now` and return the live ones,
    /// earliest first. Stale entries are discarded.
    pub fn fire_due(&mut self, now: Instant) -> Vec<FiredTimer> {
        let mut fired = Vec::new();
        let mut remaining = Vec::with_capacity(self.queue.len());

        for entry in self.queue.drain(..) {
            if entry.due > now {
                remaining.push(entry);
            } else if self.generations.get(entry.key.slot) == Some(&entry.key.generation) {
                fired.push(entry);
            }
        }

        self.queue = remaining;
        fired.sort_by_key(|entry| (entry.due, entry.key.slot));
        fired
    }
}
