//! Visibility tracking with per-tab debounce.
//!
//! Entering transitions are committed only after a short dwell, so the
//! enter/leave pairs produced by a fast scroll through an intermediate
//! panel collapse into nothing. Leaving clears visibility immediately.
//! Each tab owns its own pending deadline; a newer transition for the
//! same tab supersedes the older one.
//!
//! Time is injected: callers pass `Instant`s into [`VisibilityTracker::apply`]
//! and [`VisibilityTracker::poll`], which keeps the whole schedule
//! deterministic under test.

use crate::observe::{IntersectionSource, Transition};
use std::time::{Duration, Instant};
use tracing::debug;

/// Dwell before an entering panel is committed as active.
pub const VISIBILITY_DEBOUNCE: Duration = Duration::from_millis(10);

/// Per-tab visibility slot.
#[derive(Debug, Clone, Copy, Default)]
struct Slot {
    /// Whether the tab is currently committed visible.
    visible: bool,
    /// Deadline of a scheduled activation, if one is pending.
    pending: Option<Instant>,
}

/// Tracks which panels are visible and which tab is active.
#[derive(Debug, Clone)]
pub struct VisibilityTracker {
    slots: Vec<Slot>,
    active: usize,
    debounce: Duration,
}

impl VisibilityTracker {
    /// Tracker for `count` tabs. The first tab starts active.
    pub fn new(count: usize) -> Self {
        Self::with_debounce(count, VISIBILITY_DEBOUNCE)
    }

    /// Tracker with a custom dwell.
    pub fn with_debounce(count: usize, debounce: Duration) -> Self {
        Self {
            slots: vec![Slot::default(); count],
            active: 0,
            debounce,
        }
    }

    /// Index of the active tab.
    pub fn active(&self) -> usize {
        self.active
    }

    /// Whether the given tab is committed visible.
    pub fn is_visible(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(|slot| slot.visible)
    }

    /// Number of scheduled activations not yet committed.
    pub fn pending(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.pending.is_some())
            .count()
    }

    /// Apply one observed transition.
    ///
    /// Any pending deadline for the same tab is cancelled first. An
    /// entering transition schedules a fresh one; a leaving transition
    /// clears visibility on the spot and never touches the active tab.
    pub fn apply(&mut self, transition: Transition, now: Instant) {
        let Some(slot) = self.slots.get_mut(transition.index) else {
            return;
        };
        slot.pending = None;
        if transition.entering {
            slot.pending = Some(now + self.debounce);
        } else {
            slot.visible = false;
        }
    }

    /// Drain a source and apply every transition it yields.
    pub fn absorb(&mut self, source: &mut dyn IntersectionSource, now: Instant) {
        for transition in source.poll() {
            self.apply(transition, now);
        }
    }

    /// Commit every deadline that has expired by `now`.
    ///
    /// Commits run in deadline order (ties broken by index), matching the
    /// order a timer queue would fire them, so the most recently scheduled
    /// activation ends up active. Returns the committed indices.
    pub fn poll(&mut self, now: Instant) -> Vec<usize> {
        let mut due: Vec<(Instant, usize)> = Vec::new();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if let Some(deadline) = slot.pending {
                if deadline <= now {
                    slot.pending = None;
                    due.push((deadline, index));
                }
            }
        }
        due.sort_unstable();

        let mut committed = Vec::with_capacity(due.len());
        for (_, index) in due {
            self.slots[index].visible = true;
            self.active = index;
            debug!(index, "tab activated");
            committed.push(index);
        }
        committed
    }
}
