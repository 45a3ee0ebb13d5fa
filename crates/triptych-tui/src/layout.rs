//! Layout constants and region helpers for the triptych TUI.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Columns at or below which the section renders the mobile layout.
///
/// The terminal analog of the pixel breakpoint: an 80-column terminal
/// gets the desktop layout, a phone-sized split does not.
pub const COMPACT_BREAKPOINT: u16 = 72;

/// Height of the index bar at the top of the desktop layout.
pub const INDEX_BAR_HEIGHT: u16 = 3;

/// Height of the status bar at the bottom of the screen.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width of the index track, in percent of the full width.
pub const INDEX_TRACK_PERCENT: u16 = 30;

/// Width of the details column inside a desktop panel, in percent.
pub const DETAIL_PERCENT: u16 = 30;

/// Width of a mobile card, in percent of the full width.
pub const CARD_PERCENT: u16 = 90;

/// Rows of art shown at the top of a mobile card.
pub const CARD_THUMB_ROWS: usize = 5;

/// Desktop chrome: index bar on top, panel area, status bar below.
pub fn desktop_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(INDEX_BAR_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Mobile chrome: card area with a status bar below, no index bar.
pub fn mobile_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(STATUS_BAR_HEIGHT)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Rows available to the panel stack for a given terminal size.
///
/// The engine's viewport is the panel area, not the whole terminal, so
/// the chrome for the mode the width selects is subtracted up front.
pub fn content_rows(width: u16, height: u16, breakpoint: u16) -> u16 {
    let chrome = if width <= breakpoint {
        STATUS_BAR_HEIGHT
    } else {
        INDEX_BAR_HEIGHT + STATUS_BAR_HEIGHT
    };
    height.saturating_sub(chrome)
}

/// Horizontally centered strip covering `percent` of the area's width.
pub fn centered_track(percent: u16, area: Rect) -> Rect {
    let side = (100 - percent) / 2;
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(side),
            Constraint::Percentage(percent),
            Constraint::Percentage(side),
        ])
        .split(area)[1]
}

/// Centered rect with fixed dimensions, for overlays.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
