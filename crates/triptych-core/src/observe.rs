//! Intersection observation for the panel stack.
//!
//! The tracker consumes a stream of threshold crossings, not raw
//! geometry, so the production observer and the deterministic fakes used
//! in tests are interchangeable. `ScrollObserver` is the production
//! source: it owns the scroll model and edge-detects each panel's
//! visible fraction against the threshold.

use crate::scroll::ScrollState;
use tracing::trace;

/// Minimum visible fraction for a panel to count as intersecting.
pub const INTERSECTION_THRESHOLD: f64 = 0.5;

/// A panel crossed the visibility threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Index of the panel in the tab set.
    pub index: usize,
    /// True when the panel came into view, false when it left.
    pub entering: bool,
}

impl Transition {
    pub fn enter(index: usize) -> Self {
        Self {
            index,
            entering: true,
        }
    }

    pub fn leave(index: usize) -> Self {
        Self {
            index,
            entering: false,
        }
    }
}

/// A stream of intersection transitions for a set of observed panels.
///
/// Implementations report threshold crossings only, never steady state.
/// `disconnect` releases every observation and is idempotent; a
/// disconnected source reports nothing and observes nothing.
pub trait IntersectionSource {
    /// Number of panels currently under observation.
    fn observed(&self) -> usize;

    /// Drain the transitions since the last poll.
    fn poll(&mut self) -> Vec<Transition>;

    /// Stop observing. Later polls return nothing.
    fn disconnect(&mut self);
}

/// Production source deriving transitions from scroll geometry.
///
/// The first poll reports the initial state of every intersecting panel
/// as an entering transition, so a freshly built stack activates the
/// panel already under the viewport.
#[derive(Debug, Clone)]
pub struct ScrollObserver {
    scroll: ScrollState,
    threshold: f64,
    /// Last reported intersecting state per panel; empty once disconnected.
    intersecting: Vec<bool>,
}

impl ScrollObserver {
    pub fn new(count: usize, viewport: u16) -> Self {
        Self {
            scroll: ScrollState::new(count, viewport),
            threshold: INTERSECTION_THRESHOLD,
            intersecting: vec![false; count],
        }
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn scroll_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl IntersectionSource for ScrollObserver {
    fn observed(&self) -> usize {
        self.intersecting.len()
    }

    fn poll(&mut self) -> Vec<Transition> {
        let mut transitions = Vec::new();
        for (index, seen) in self.intersecting.iter_mut().enumerate() {
            let intersecting = self.scroll.ratio(index) >= self.threshold;
            if intersecting != *seen {
                *seen = intersecting;
                trace!(index, entering = intersecting, "intersection transition");
                transitions.push(Transition {
                    index,
                    entering: intersecting,
                });
            }
        }
        transitions
    }

    fn disconnect(&mut self) {
        self.intersecting.clear();
    }
}
