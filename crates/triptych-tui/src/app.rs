//! Application state and update logic for the triptych TUI.

use crate::animate::Reveal;
use crate::assets::ArtStore;
use crate::event::Action;
use crate::layout::{self, CARD_PERCENT, COMPACT_BREAKPOINT, INDEX_BAR_HEIGHT};
use crate::theme::Theme;
use crate::widgets;
use ratatui::layout::Rect;
use std::path::PathBuf;
use std::time::Instant;
use triptych_core::{LayoutMode, Section, TabSet, SCROLL_SPEED};

/// Rows a mobile scroll step moves the card list.
const MOBILE_SCROLL_ROWS: isize = 3;

/// Options for constructing an [`App`].
#[derive(Debug, Clone)]
pub struct AppOptions {
    /// Directory holding per-tab art files.
    pub assets_dir: Option<PathBuf>,
    /// Color theme.
    pub theme: Theme,
    /// Column count at or below which the compact layout engages.
    pub breakpoint: u16,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            assets_dir: None,
            theme: Theme::default(),
            breakpoint: COMPACT_BREAKPOINT,
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Whether the app should quit.
    pub should_quit: bool,

    /// Whether the help overlay is visible.
    pub show_help: bool,

    /// Color theme.
    pub theme: Theme,

    /// Tick counter since startup.
    pub tick: u64,

    /// The section state machine.
    pub section: Section,

    /// Loaded panel art.
    pub art: ArtStore,

    /// Per-tab reveal animations, driven by committed visibility.
    pub reveals: Vec<Reveal>,

    breakpoint: u16,
    size: (u16, u16),
}

impl App {
    /// Create the app for a terminal of the given size.
    pub fn new(options: AppOptions, width: u16, height: u16) -> Self {
        let tabs = TabSet::builtin();
        let art = ArtStore::load(options.assets_dir.as_deref(), &tabs);
        let reveals = vec![Reveal::default(); tabs.len()];
        let rows = layout::content_rows(width, height, options.breakpoint);
        let section = Section::new(tabs, width, rows, options.breakpoint);

        Self {
            should_quit: false,
            show_help: false,
            theme: options.theme,
            tick: 0,
            section,
            art,
            reveals,
            breakpoint: options.breakpoint,
            size: (width, height),
        }
    }

    /// Terminal size as of the last resize.
    pub fn size(&self) -> (u16, u16) {
        self.size
    }

    pub fn handle_action(&mut self, action: Action) {
        // Global actions
        match action {
            Action::Quit => {
                if self.show_help {
                    self.show_help = false;
                } else {
                    self.should_quit = true;
                }
                return;
            }
            Action::Help => {
                self.show_help = !self.show_help;
                return;
            }
            _ => {}
        }

        // If help is showing, any key closes it
        if self.show_help {
            self.show_help = false;
            return;
        }

        match self.section.mode() {
            LayoutMode::Desktop => self.handle_desktop_action(action),
            LayoutMode::Mobile => self.handle_mobile_action(action),
        }
    }

    fn handle_desktop_action(&mut self, action: Action) {
        let count = self.section.tabs().len();
        match action {
            Action::Tab(index) => self.section.go_to(index),
            Action::NextTab => {
                let next = (self.section.active() + 1) % count;
                self.section.go_to(next);
            }
            Action::PrevTab => {
                let prev = (self.section.active() + count - 1) % count;
                self.section.go_to(prev);
            }
            Action::Up => self.section.scroll_by(-SCROLL_SPEED),
            Action::Down => self.section.scroll_by(SCROLL_SPEED),
            Action::Top => self.section.go_to(0),
            Action::Bottom => self.section.go_to(count.saturating_sub(1)),
            _ => {}
        }
    }

    /// The compact layout has no index and no navigation; scrolling is
    /// all that is left.
    fn handle_mobile_action(&mut self, action: Action) {
        let max = self.mobile_max_offset();
        match action {
            Action::Up => self.section.mobile_scroll(-MOBILE_SCROLL_ROWS, max),
            Action::Down => self.section.mobile_scroll(MOBILE_SCROLL_ROWS, max),
            Action::Top => {
                let back = isize::try_from(self.section.mobile_offset()).unwrap_or(isize::MAX);
                self.section.mobile_scroll(-back, max);
            }
            Action::Bottom => {
                let fwd = isize::try_from(max).unwrap_or(isize::MAX);
                self.section.mobile_scroll(fwd, max);
            }
            _ => {}
        }
    }

    /// Handle a terminal resize.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.size = (width, height);
        let rows = layout::content_rows(width, height, self.breakpoint);
        if self.section.handle_resize(width, rows).is_some() {
            // Mode flipped; animations restart from scratch.
            for reveal in &mut self.reveals {
                *reveal = Reveal::default();
            }
        }
        if self.section.mode() == LayoutMode::Mobile {
            let max = self.mobile_max_offset();
            self.section.mobile_scroll(0, max);
        }
    }

    /// Handle a left click. Only the desktop index bar is clickable.
    pub fn handle_click(&mut self, column: u16, row: u16) {
        if self.section.mode() != LayoutMode::Desktop || self.show_help {
            return;
        }
        if row >= INDEX_BAR_HEIGHT {
            return;
        }
        let bar = Rect::new(0, 0, self.size.0, INDEX_BAR_HEIGHT);
        if let Some(index) = widgets::hit_test(bar, self.section.tabs().len(), column, row) {
            self.section.go_to(index);
        }
    }

    /// Advance one tick using the wall clock.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Advance one tick at an explicit instant.
    pub fn tick_at(&mut self, now: Instant) {
        self.tick = self.tick.wrapping_add(1);
        self.section.tick(now);
        for (index, reveal) in self.reveals.iter_mut().enumerate() {
            reveal.advance(self.section.is_visible(index));
        }
    }

    /// Rows the card list can scroll past the viewport.
    pub fn mobile_max_offset(&self) -> usize {
        let (width, height) = self.size;
        let rows = layout::content_rows(width, height, self.breakpoint);
        let content = Rect::new(0, 0, width, rows);
        let track = layout::centered_track(CARD_PERCENT, content);
        let total = widgets::total_rows(self.section.tabs(), &self.art, track.width);
        total.saturating_sub(usize::from(rows))
    }
}
