//! The scroll-driven tabbed section.
//!
//! `Section` composes the classifier, the scroll observer and the
//! visibility tracker behind one surface. Mode-specific state lives in a
//! tagged layout value: dropping a variant releases everything the mode
//! owned (observation handles, pending activations, scroll position), so
//! re-entering a mode always starts fresh.

use crate::indicator::IndicatorStyle;
use crate::mode::{Classifier, LayoutMode};
use crate::observe::{IntersectionSource, ScrollObserver};
use crate::tabs::TabSet;
use crate::tracker::VisibilityTracker;
use std::time::Instant;
use tracing::debug;

/// Mode-specific state. One variant per layout, each carrying only what
/// that layout needs.
#[derive(Debug)]
enum Layout {
    Desktop(DesktopState),
    Mobile(MobileState),
}

#[derive(Debug)]
struct DesktopState {
    observer: ScrollObserver,
    tracker: VisibilityTracker,
    indicator: IndicatorStyle,
}

#[derive(Debug, Default)]
struct MobileState {
    /// Scroll offset into the card list, in rows.
    offset: usize,
}

/// A scroll-driven tabbed section.
#[derive(Debug)]
pub struct Section {
    tabs: TabSet,
    classifier: Classifier,
    layout: Layout,
    viewport_rows: u16,
}

impl Section {
    /// Build a section for an initial viewport.
    ///
    /// `width` is measured against `breakpoint` to pick the layout;
    /// `viewport_rows` is the height of the panel area in rows.
    pub fn new(tabs: TabSet, width: u16, viewport_rows: u16, breakpoint: u16) -> Self {
        let classifier = Classifier::new(breakpoint, width);
        let layout = build_layout(classifier.mode(), &tabs, viewport_rows);
        Self {
            tabs,
            classifier,
            layout,
            viewport_rows,
        }
    }

    pub fn tabs(&self) -> &TabSet {
        &self.tabs
    }

    pub fn mode(&self) -> LayoutMode {
        self.classifier.mode()
    }

    pub fn viewport_rows(&self) -> u16 {
        self.viewport_rows
    }

    /// Handle a viewport resize. Returns the new mode when it flipped.
    ///
    /// A flip swaps the layout value wholesale. The old mode's observer,
    /// pending activations and scroll position go down with it; nothing
    /// leaks across modes.
    pub fn handle_resize(&mut self, width: u16, rows: u16) -> Option<LayoutMode> {
        self.viewport_rows = rows;
        if let Some(mode) = self.classifier.resize(width) {
            self.layout = build_layout(mode, &self.tabs, rows);
            return Some(mode);
        }
        if let Layout::Desktop(desktop) = &mut self.layout {
            desktop.observer.scroll_mut().resize(rows);
        }
        None
    }

    /// Navigate to a tab: smooth-scroll its panel into view.
    ///
    /// Never sets the active tab itself. Activation arrives from the
    /// tracker once the scroll carries the panel past the threshold, the
    /// same path a manual scroll takes. Out-of-range indices and mobile
    /// mode are no-ops.
    pub fn go_to(&mut self, index: usize) {
        if index >= self.tabs.len() {
            return;
        }
        if let Layout::Desktop(desktop) = &mut self.layout {
            debug!(index, "navigating to tab");
            desktop.observer.scroll_mut().scroll_to(index);
        }
    }

    /// Manual scroll of the panel stack by a row delta. Desktop only.
    pub fn scroll_by(&mut self, delta: f64) {
        if let Layout::Desktop(desktop) = &mut self.layout {
            desktop.observer.scroll_mut().scroll_by(delta);
        }
    }

    /// Scroll the mobile card list, clamped to `max_offset`.
    ///
    /// The card list's extent depends on render metrics the engine does
    /// not know, so the host passes the clamp in.
    pub fn mobile_scroll(&mut self, delta: isize, max_offset: usize) {
        if let Layout::Mobile(mobile) = &mut self.layout {
            mobile.offset = mobile.offset.saturating_add_signed(delta).min(max_offset);
        }
    }

    /// One tick of the event loop at `now`.
    ///
    /// Advances any smooth scroll, feeds fresh transitions from the
    /// observer into the tracker, commits activations whose dwell has
    /// expired and recomputes the indicator for each commit. Mobile mode
    /// has nothing to drive.
    pub fn tick(&mut self, now: Instant) {
        if let Layout::Desktop(desktop) = &mut self.layout {
            desktop.observer.scroll_mut().step();
            desktop.tracker.absorb(&mut desktop.observer, now);
            for index in desktop.tracker.poll(now) {
                desktop.indicator = IndicatorStyle::for_tab(index, self.tabs.len());
            }
        }
    }

    /// Index of the active tab. Always 0 in mobile mode, which renders
    /// every card and highlights none.
    pub fn active(&self) -> usize {
        match &self.layout {
            Layout::Desktop(desktop) => desktop.tracker.active(),
            Layout::Mobile(_) => 0,
        }
    }

    /// Indicator geometry, present only while the index bar renders.
    pub fn indicator(&self) -> Option<IndicatorStyle> {
        match &self.layout {
            Layout::Desktop(desktop) => Some(desktop.indicator),
            Layout::Mobile(_) => None,
        }
    }

    /// Whether the given tab is committed visible.
    pub fn is_visible(&self, index: usize) -> bool {
        match &self.layout {
            Layout::Desktop(desktop) => desktop.tracker.is_visible(index),
            Layout::Mobile(_) => false,
        }
    }

    /// Observation handles currently held. Zero in mobile mode.
    pub fn observed(&self) -> usize {
        match &self.layout {
            Layout::Desktop(desktop) => desktop.observer.observed(),
            Layout::Mobile(_) => 0,
        }
    }

    /// Activations scheduled but not yet committed. Zero in mobile mode.
    pub fn pending(&self) -> usize {
        match &self.layout {
            Layout::Desktop(desktop) => desktop.tracker.pending(),
            Layout::Mobile(_) => 0,
        }
    }

    /// Panel-stack scroll offset in whole rows. Zero in mobile mode.
    pub fn scroll_offset(&self) -> usize {
        match &self.layout {
            Layout::Desktop(desktop) => desktop.observer.scroll().offset_rows(),
            Layout::Mobile(_) => 0,
        }
    }

    /// Card-list offset in rows. Zero in desktop mode.
    pub fn mobile_offset(&self) -> usize {
        match &self.layout {
            Layout::Desktop(_) => 0,
            Layout::Mobile(mobile) => mobile.offset,
        }
    }

    /// Whether a smooth scroll is in flight.
    pub fn is_scrolling(&self) -> bool {
        match &self.layout {
            Layout::Desktop(desktop) => desktop.observer.scroll().is_scrolling(),
            Layout::Mobile(_) => false,
        }
    }
}

fn build_layout(mode: LayoutMode, tabs: &TabSet, rows: u16) -> Layout {
    match mode {
        LayoutMode::Desktop => Layout::Desktop(DesktopState {
            observer: ScrollObserver::new(tabs.len(), rows),
            tracker: VisibilityTracker::new(tabs.len()),
            indicator: IndicatorStyle::for_tab(0, tabs.len()),
        }),
        LayoutMode::Mobile => Layout::Mobile(MobileState::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const BREAKPOINT: u16 = 80;

    fn desktop_section() -> (Section, Instant) {
        let section = Section::new(TabSet::builtin(), 120, 10, BREAKPOINT);
        (section, Instant::now())
    }

    /// Run `ticks` event-loop ticks, 50ms apart, well past the dwell.
    fn drive(section: &mut Section, now: &mut Instant, ticks: usize) {
        for _ in 0..ticks {
            *now += Duration::from_millis(50);
            section.tick(*now);
        }
    }

    #[test]
    fn test_wide_viewport_starts_desktop() {
        let (section, _) = desktop_section();
        assert_eq!(section.mode(), LayoutMode::Desktop);
        assert_eq!(section.observed(), 3);
        assert!(section.indicator().is_some());
    }

    #[test]
    fn test_narrow_viewport_starts_mobile() {
        let section = Section::new(TabSet::builtin(), 60, 10, BREAKPOINT);
        assert_eq!(section.mode(), LayoutMode::Mobile);
        assert_eq!(section.observed(), 0);
        assert!(section.indicator().is_none());
    }

    #[test]
    fn test_first_panel_activates_after_dwell() {
        let (mut section, mut now) = desktop_section();
        section.tick(now);
        assert_eq!(section.pending(), 1);
        assert!(!section.is_visible(0));

        drive(&mut section, &mut now, 1);
        assert!(section.is_visible(0));
        assert_eq!(section.active(), 0);
        assert_eq!(section.pending(), 0);
    }

    #[test]
    fn test_manual_scroll_activates_next_panel() {
        let (mut section, mut now) = desktop_section();
        drive(&mut section, &mut now, 2);

        section.scroll_by(10.0);
        drive(&mut section, &mut now, 2);

        assert_eq!(section.active(), 1);
        assert!(section.is_visible(1));
        assert!(!section.is_visible(0));
        assert_eq!(
            section.indicator(),
            Some(IndicatorStyle::for_tab(1, 3))
        );
    }

    #[test]
    fn test_navigation_does_not_set_active_directly() {
        let (mut section, mut now) = desktop_section();
        drive(&mut section, &mut now, 2);

        section.go_to(2);
        assert_eq!(section.active(), 0);
        assert!(section.is_scrolling());
    }

    #[test]
    fn test_navigation_lands_and_activates() {
        let (mut section, mut now) = desktop_section();
        drive(&mut section, &mut now, 2);

        section.go_to(2);
        drive(&mut section, &mut now, 20);

        assert!(!section.is_scrolling());
        assert_eq!(section.scroll_offset(), 20);
        assert_eq!(section.active(), 2);
        assert!(section.is_visible(2));
        assert!(!section.is_visible(0));
        assert_eq!(
            section.indicator(),
            Some(IndicatorStyle::for_tab(2, 3))
        );
    }

    #[test]
    fn test_go_to_out_of_bounds_is_noop() {
        let (mut section, mut now) = desktop_section();
        drive(&mut section, &mut now, 2);

        section.go_to(7);
        assert!(!section.is_scrolling());
        drive(&mut section, &mut now, 2);
        assert_eq!(section.active(), 0);
    }

    #[test]
    fn test_flip_to_mobile_releases_everything() {
        let (mut section, mut now) = desktop_section();
        section.tick(now);
        assert_eq!(section.pending(), 1);

        assert_eq!(section.handle_resize(60, 10), Some(LayoutMode::Mobile));
        assert_eq!(section.observed(), 0);
        assert_eq!(section.pending(), 0);
        assert!(section.indicator().is_none());
        assert!(!section.is_visible(0));

        // Ticking in mobile mode drives nothing.
        drive(&mut section, &mut now, 2);
        assert_eq!(section.active(), 0);
        assert_eq!(section.pending(), 0);
    }

    #[test]
    fn test_flip_back_rebuilds_fresh_desktop() {
        let (mut section, mut now) = desktop_section();
        section.go_to(2);
        drive(&mut section, &mut now, 20);
        assert_eq!(section.active(), 2);

        section.handle_resize(60, 10);
        assert_eq!(section.handle_resize(120, 10), Some(LayoutMode::Desktop));

        // Fresh state: back at the top, first tab active after the dwell.
        assert_eq!(section.observed(), 3);
        assert_eq!(section.scroll_offset(), 0);
        assert_eq!(section.active(), 0);
        assert_eq!(section.indicator(), Some(IndicatorStyle::for_tab(0, 3)));
        drive(&mut section, &mut now, 2);
        assert!(section.is_visible(0));
    }

    #[test]
    fn test_resize_without_crossing_keeps_state() {
        let (mut section, mut now) = desktop_section();
        section.scroll_by(10.0);
        drive(&mut section, &mut now, 2);
        assert_eq!(section.active(), 1);

        assert_eq!(section.handle_resize(100, 20), None);
        assert_eq!(section.mode(), LayoutMode::Desktop);
        assert_eq!(section.active(), 1);
        // Offset rescales with the viewport, same panel under the view.
        assert_eq!(section.scroll_offset(), 20);
    }

    #[test]
    fn test_mobile_scroll_clamps() {
        let mut section = Section::new(TabSet::builtin(), 60, 10, BREAKPOINT);
        section.mobile_scroll(5, 12);
        assert_eq!(section.mobile_offset(), 5);
        section.mobile_scroll(100, 12);
        assert_eq!(section.mobile_offset(), 12);
        section.mobile_scroll(-100, 12);
        assert_eq!(section.mobile_offset(), 0);
    }

    #[test]
    fn test_mobile_ignores_desktop_inputs() {
        let mut section = Section::new(TabSet::builtin(), 60, 10, BREAKPOINT);
        section.go_to(2);
        section.scroll_by(10.0);
        assert!(!section.is_scrolling());
        assert_eq!(section.scroll_offset(), 0);
    }
}
