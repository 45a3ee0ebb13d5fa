//! Viewport classification.
//!
//! The section renders one of two layouts depending on viewport width.
//! The classifier owns the current mode and reports a change only when a
//! resize actually crosses the breakpoint, so a storm of resize events on
//! one side of the boundary toggles nothing.

use serde::Serialize;
use tracing::debug;

/// Widths at or below this are classified as mobile.
///
/// The canonical pixel breakpoint. Hosts measuring in other units (the
/// terminal front end measures columns) pass their own value.
pub const DEFAULT_BREAKPOINT: u16 = 768;

/// Which layout the section renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// Full-height scroll panels with the index bar.
    #[default]
    Desktop,
    /// Static card list. No index bar, no observation.
    Mobile,
}

impl LayoutMode {
    /// Classify a viewport width against a breakpoint.
    #[must_use]
    pub fn from_width(width: u16, breakpoint: u16) -> Self {
        if width <= breakpoint {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }
}

/// Tracks the layout mode across resize events.
#[derive(Debug, Clone)]
pub struct Classifier {
    breakpoint: u16,
    mode: LayoutMode,
}

impl Classifier {
    /// Classifier for the given breakpoint, seeded from the initial width.
    pub fn new(breakpoint: u16, width: u16) -> Self {
        Self {
            breakpoint,
            mode: LayoutMode::from_width(width, breakpoint),
        }
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn breakpoint(&self) -> u16 {
        self.breakpoint
    }

    /// Reclassify after a resize. Returns the new mode only when it changed.
    pub fn resize(&mut self, width: u16) -> Option<LayoutMode> {
        let next = LayoutMode::from_width(width, self.breakpoint);
        if next == self.mode {
            return None;
        }
        debug!(width, ?next, "layout mode changed");
        self.mode = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_at_breakpoint_is_mobile() {
        assert_eq!(
            LayoutMode::from_width(DEFAULT_BREAKPOINT, DEFAULT_BREAKPOINT),
            LayoutMode::Mobile
        );
        assert_eq!(
            LayoutMode::from_width(DEFAULT_BREAKPOINT + 1, DEFAULT_BREAKPOINT),
            LayoutMode::Desktop
        );
    }

    #[test]
    fn test_classifier_seeds_from_initial_width() {
        assert_eq!(Classifier::new(768, 1024).mode(), LayoutMode::Desktop);
        assert_eq!(Classifier::new(768, 600).mode(), LayoutMode::Mobile);
    }

    #[test]
    fn test_resize_reports_only_crossings() {
        let mut classifier = Classifier::new(768, 1024);

        // Shrinking within the desktop range changes nothing.
        assert_eq!(classifier.resize(900), None);
        assert_eq!(classifier.resize(769), None);

        // Crossing the breakpoint flips exactly once.
        assert_eq!(classifier.resize(768), Some(LayoutMode::Mobile));
        assert_eq!(classifier.resize(700), None);
        assert_eq!(classifier.resize(768), None);

        // And back.
        assert_eq!(classifier.resize(1024), Some(LayoutMode::Desktop));
        assert_eq!(classifier.resize(1024), None);
    }

    #[test]
    fn test_resize_same_width_repeated_is_noop() {
        let mut classifier = Classifier::new(768, 1024);
        for _ in 0..5 {
            assert_eq!(classifier.resize(1024), None);
        }
        assert_eq!(classifier.mode(), LayoutMode::Desktop);
    }
}
