//! Index bar widget.
//!
//! The tab buttons and the sliding indicator at the top of the desktop
//! layout. Labels share the track evenly; the indicator is a short run
//! of accent cells positioned from the engine's percentage geometry, so
//! it lands inside the active label's share.

use crate::layout::{centered_track, INDEX_TRACK_PERCENT};
use crate::text::display_width;
use crate::theme::Theme;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use triptych_core::IndicatorStyle;

/// A horizontal index bar with an indicator row.
#[derive(Debug, Clone)]
pub struct IndexBar<'a> {
    theme: &'a Theme,
    labels: Vec<String>,
    active: usize,
    indicator: IndicatorStyle,
}

impl<'a> IndexBar<'a> {
    pub fn new(theme: &'a Theme, labels: Vec<String>, active: usize, indicator: IndicatorStyle) -> Self {
        Self {
            theme,
            labels,
            active,
            indicator,
        }
    }
}

impl Widget for IndexBar<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 2 || self.labels.is_empty() {
            return;
        }

        let track = centered_track(INDEX_TRACK_PERCENT, area);
        if track.width == 0 {
            return;
        }

        // Label row: every tab gets an equal share of the track.
        let count = self.labels.len();
        let share = (track.width as usize / count).max(1);
        for (i, label) in self.labels.iter().enumerate() {
            let label = if display_width(label) > share {
                label.chars().take(share).collect()
            } else {
                label.clone()
            };
            let pad = share.saturating_sub(display_width(&label)) / 2;
            let x = track.x + (i * share + pad) as u16;
            let style = if i == self.active {
                self.theme.active_label()
            } else {
                self.theme.dim()
            };
            buf.set_string(x, track.y, &label, style);
        }

        // Indicator row: resolve the percentage geometry onto the track.
        let (left, width) = self.indicator.resolve(track.width);
        if width > 0 {
            let bar = "━".repeat(width as usize);
            buf.set_string(track.x + left, track.y + 1, bar, self.theme.indicator());
        }
    }
}

/// Map a click inside the index bar to a tab index.
pub fn hit_test(area: Rect, count: usize, column: u16, row: u16) -> Option<usize> {
    if count == 0 || !area.contains(ratatui::layout::Position::new(column, row)) {
        return None;
    }
    let track = centered_track(INDEX_TRACK_PERCENT, area);
    if column < track.x || column >= track.x + track.width {
        return None;
    }
    let share = (usize::from(track.width) / count).max(1);
    let index = usize::from(column - track.x) / share;
    Some(index.min(count - 1))
}
