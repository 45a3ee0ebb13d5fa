//! Desktop panel widget.
//!
//! One full-viewport section of the stack: a backdrop shade, the art
//! block, and a details column holding the heading and body copy. The
//! details column alternates sides so adjacent panels mirror each other.
//!
//! Panels scroll, so a widget may be handed only the visible slice of
//! its full rect. `clip` tells it how many virtual rows were cut above
//! and how tall the whole panel is; all internal layout runs in virtual
//! rows and only the mapped ones are written.

use crate::animate::Reveal;
use crate::layout::DETAIL_PERCENT;
use crate::text::{clip, display_width, wrap_text};
use crate::theme::Theme;
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};
use triptych_core::tabs::Tab;

/// Which side of the panel the details column occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailSide {
    Left,
    Right,
}

impl DetailSide {
    /// Alternate per panel; the middle tab of three mirrors its
    /// neighbors, details left while 001 and 003 keep them right.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 1 {
            Self::Left
        } else {
            Self::Right
        }
    }
}

/// A single section panel.
#[derive(Debug, Clone)]
pub struct Panel<'a> {
    theme: &'a Theme,
    tab: &'a Tab,
    index: usize,
    art: &'a [String],
    active: bool,
    reveal: Reveal,
    skip_rows: u16,
    panel_rows: u16,
}

impl<'a> Panel<'a> {
    pub fn new(theme: &'a Theme, tab: &'a Tab, index: usize) -> Self {
        Self {
            theme,
            tab,
            index,
            art: &[],
            active: false,
            reveal: Reveal::default(),
            skip_rows: 0,
            panel_rows: 0,
        }
    }

    #[must_use]
    pub fn art(mut self, art: &'a [String]) -> Self {
        self.art = art;
        self
    }

    #[must_use]
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    #[must_use]
    pub fn reveal(mut self, reveal: Reveal) -> Self {
        self.reveal = reveal;
        self
    }

    /// Declare the visible slice: `skip_rows` virtual rows are cut above
    /// the render area, out of `panel_rows` total.
    #[must_use]
    pub fn clip(mut self, skip_rows: u16, panel_rows: u16) -> Self {
        self.skip_rows = skip_rows;
        self.panel_rows = panel_rows;
        self
    }

    /// Screen row for a virtual panel row, when it is inside the slice.
    fn row_y(&self, area: Rect, row: u16) -> Option<u16> {
        if row < self.skip_rows {
            return None;
        }
        let offset = row - self.skip_rows;
        if offset >= area.height {
            return None;
        }
        Some(area.y + offset)
    }

    fn put(&self, buf: &mut Buffer, area: Rect, x: u16, row: u16, text: &str, style: Style) {
        if let Some(y) = self.row_y(area, row) {
            buf.set_string(x, y, text, style);
        }
    }
}

impl Widget for Panel<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(mut self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        if self.panel_rows == 0 {
            self.panel_rows = area.height;
        }

        // Backdrop shade over the visible slice.
        let backdrop = self.theme.backdrop(self.index);
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                buf[(x, y)].set_char(' ').set_bg(backdrop);
            }
        }

        let detail_w = (u32::from(area.width) * u32::from(DETAIL_PERCENT) / 100) as u16;
        let art_w = area.width - detail_w;
        let (detail_x, art_x) = match DetailSide::for_index(self.index) {
            DetailSide::Left => (area.x, area.x + detail_w),
            DetailSide::Right => (area.x + art_w, area.x),
        };

        self.render_art(buf, area, art_x, art_w);
        self.render_details(buf, area, detail_x, detail_w);
    }
}

impl Panel<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render_art(&self, buf: &mut Buffer, area: Rect, art_x: u16, art_w: u16) {
        if art_w < 3 || self.art.is_empty() {
            return;
        }
        let art_h = self.art.len().min(usize::from(self.panel_rows)) as u16;
        let start = (self.panel_rows - art_h) / 2;
        for (j, line) in self.art.iter().take(usize::from(art_h)).enumerate() {
            let line = clip(line, usize::from(art_w.saturating_sub(2)));
            let pad = usize::from(art_w).saturating_sub(display_width(&line)) / 2;
            let x = art_x + pad as u16;
            self.put(buf, area, x, start + j as u16, &line, self.theme.dim());
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render_details(&self, buf: &mut Buffer, area: Rect, detail_x: u16, detail_w: u16) {
        if detail_w < 6 {
            return;
        }
        let text_x = detail_x + 2;
        let text_w = usize::from(detail_w - 4);

        let body = wrap_text(&self.tab.body, text_w);
        let block_h = (body.len() + 2) as u16;
        let rest = self.panel_rows.saturating_sub(block_h);
        let start = rest / 2 + self.reveal.drop_rows().min(rest.saturating_sub(rest / 2));

        let heading_style = if self.active {
            self.theme.active_label()
        } else {
            self.theme.heading()
        };
        let body_style = if self.reveal.is_settled() {
            self.theme.body()
        } else {
            self.theme.dim()
        };

        let heading = clip(&self.tab.heading, text_w);
        self.put(buf, area, text_x, start, &heading, heading_style);
        for (j, line) in body.iter().enumerate() {
            let row = start + 2 + j as u16;
            if row >= self.panel_rows {
                break;
            }
            self.put(buf, area, text_x, row, line, body_style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triptych_core::TabSet;

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                if let Some(cell) = buf.cell((x, y)) {
                    out.push_str(cell.symbol());
                }
            }
            out.push('\n');
        }
        out
    }

    fn heading_position(buf: &Buffer, heading: &str) -> Option<(u16, u16)> {
        let area = buf.area;
        for (y, line) in buffer_text(buf).lines().enumerate() {
            if let Some(x) = line.find(heading) {
                let x: usize = line[..x].chars().count();
                return Some((x as u16 + area.x, y as u16 + area.y));
            }
        }
        None
    }

    fn settled() -> Reveal {
        let mut reveal = Reveal::default();
        for _ in 0..100 {
            reveal.advance(true);
        }
        reveal
    }

    #[test]
    fn test_details_right_for_first_panel() {
        let tabs = TabSet::builtin();
        let theme = Theme::noir();
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);

        Panel::new(&theme, tabs.get(0).unwrap(), 0)
            .reveal(settled())
            .render(area, &mut buf);

        let (x, _) = heading_position(&buf, "zero zero one").unwrap();
        // Details occupy the right 30%: text starts past the art region.
        assert!(x >= 56, "details should sit right of the art, got x={x}");
    }

    #[test]
    fn test_details_left_for_middle_panel() {
        let tabs = TabSet::builtin();
        let theme = Theme::noir();
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);

        Panel::new(&theme, tabs.get(1).unwrap(), 1)
            .reveal(settled())
            .render(area, &mut buf);

        let (x, _) = heading_position(&buf, "zero zero two").unwrap();
        assert!(x < 24, "details should sit left of the art, got x={x}");
    }

    #[test]
    fn test_body_copy_wraps_into_details_column() {
        let tabs = TabSet::builtin();
        let theme = Theme::noir();
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);

        Panel::new(&theme, tabs.get(0).unwrap(), 0)
            .reveal(settled())
            .render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Lorem ipsum"));
        assert!(text.contains("facilisis1"));
    }

    #[test]
    fn test_unrevealed_details_sit_lower() {
        let tabs = TabSet::builtin();
        let theme = Theme::noir();
        let area = Rect::new(0, 0, 80, 24);

        let mut settled_buf = Buffer::empty(area);
        Panel::new(&theme, tabs.get(0).unwrap(), 0)
            .reveal(settled())
            .render(area, &mut settled_buf);

        let mut hidden_buf = Buffer::empty(area);
        Panel::new(&theme, tabs.get(0).unwrap(), 0).render(area, &mut hidden_buf);

        let (_, settled_y) = heading_position(&settled_buf, "zero zero one").unwrap();
        let (_, hidden_y) = heading_position(&hidden_buf, "zero zero one").unwrap();
        assert!(hidden_y > settled_y);
    }

    #[test]
    fn test_clipped_slice_hides_rows_above() {
        let tabs = TabSet::builtin();
        let theme = Theme::noir();
        // Bottom five rows of a twenty-row panel.
        let area = Rect::new(0, 0, 80, 5);
        let mut buf = Buffer::empty(area);

        Panel::new(&theme, tabs.get(0).unwrap(), 0)
            .reveal(settled())
            .clip(15, 20)
            .render(area, &mut buf);

        assert!(heading_position(&buf, "zero zero one").is_none());
    }

    #[test]
    fn test_art_renders_centered() {
        let tabs = TabSet::builtin();
        let theme = Theme::noir();
        let art = vec!["<ART>".to_string()];
        let area = Rect::new(0, 0, 80, 21);
        let mut buf = Buffer::empty(area);

        Panel::new(&theme, tabs.get(0).unwrap(), 0)
            .art(&art)
            .render(area, &mut buf);

        let (x, y) = heading_position(&buf, "<ART>").unwrap();
        assert_eq!(y, 10);
        // Centered in the left 70% (56 columns).
        assert!(x > 20 && x < 36, "art x={x}");
    }
}
