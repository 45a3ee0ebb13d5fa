//! Mobile card list.
//!
//! Below the compact breakpoint the section flattens into a static
//! stack of cards, one per tab: a framed thumbnail, the heading, and
//! the body copy. Nothing animates and nothing is observed; the list
//! just scrolls as plain content.

use crate::assets::ArtStore;
use crate::layout::CARD_THUMB_ROWS;
use crate::text::{clip, display_width, wrap_text};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use triptych_core::TabSet;

/// Scrollable stack of tab cards.
#[derive(Debug)]
pub struct CardList<'a> {
    theme: &'a Theme,
    tabs: &'a TabSet,
    art: &'a ArtStore,
    offset: usize,
}

impl<'a> CardList<'a> {
    pub fn new(theme: &'a Theme, tabs: &'a TabSet, art: &'a ArtStore) -> Self {
        Self {
            theme,
            tabs,
            art,
            offset: 0,
        }
    }

    /// Rows scrolled off the top of the list.
    #[must_use]
    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }
}

impl Widget for CardList<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = card_lines(self.theme, self.tabs, self.art, area.width);
        Paragraph::new(lines)
            .scroll((self.offset as u16, 0))
            .render(area, buf);
    }
}

/// Total rows the card stack occupies at the given width. The host uses
/// this to clamp the scroll offset.
pub fn total_rows(tabs: &TabSet, art: &ArtStore, width: u16) -> usize {
    card_lines(&Theme::default(), tabs, art, width).len()
}

fn card_lines(theme: &Theme, tabs: &TabSet, art: &ArtStore, width: u16) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if width < 8 {
        return lines;
    }
    let inner = usize::from(width) - 2;
    let text_w = inner - 2;

    for (index, tab) in tabs.iter().enumerate() {
        if index > 0 {
            lines.push(Line::default());
        }
        lines.push(frame_edge(theme, inner, '╭', '╮'));

        let thumb = art.thumb(index, CARD_THUMB_ROWS);
        for row in 0..CARD_THUMB_ROWS {
            let text = thumb.get(row).map_or("", String::as_str);
            lines.push(framed_centered(theme, inner, text, theme.dim()));
        }

        lines.push(frame_edge(theme, inner, '├', '┤'));
        lines.push(framed(
            theme,
            inner,
            &clip(&tab.heading, text_w),
            theme.heading(),
        ));
        for line in wrap_text(&tab.body, text_w) {
            lines.push(framed(theme, inner, &line, theme.body()));
        }
        lines.push(frame_edge(theme, inner, '╰', '╯'));
    }
    lines
}

fn frame_edge(theme: &Theme, inner: usize, left: char, right: char) -> Line<'static> {
    let mut bar = String::with_capacity(inner + 2);
    bar.push(left);
    bar.push_str(&"─".repeat(inner));
    bar.push(right);
    Line::from(Span::styled(bar, theme.border_style()))
}

fn framed(theme: &Theme, inner: usize, text: &str, style: Style) -> Line<'static> {
    let pad = inner.saturating_sub(display_width(text) + 1);
    Line::from(vec![
        Span::styled("│ ".to_string(), theme.border_style()),
        Span::styled(text.to_string(), style),
        Span::raw(" ".repeat(pad)),
        Span::styled("│".to_string(), theme.border_style()),
    ])
}

fn framed_centered(theme: &Theme, inner: usize, text: &str, style: Style) -> Line<'static> {
    let text = clip(text, inner.saturating_sub(2));
    let w = display_width(&text);
    let left = (inner - w) / 2;
    let right = inner - w - left;
    Line::from(vec![
        Span::styled("│".to_string(), theme.border_style()),
        Span::raw(" ".repeat(left)),
        Span::styled(text, style),
        Span::raw(" ".repeat(right)),
        Span::styled("│".to_string(), theme.border_style()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_line(buf: &Buffer, y: u16) -> String {
        let area = buf.area;
        (area.x..area.x + area.width)
            .map(|x| buf.cell((x, y)).map_or(" ", ratatui::buffer::Cell::symbol))
            .collect()
    }

    #[test]
    fn test_total_rows_counts_every_card() {
        let tabs = TabSet::builtin();
        let art = ArtStore::load(None, &tabs);
        let width = 40;

        let mut expected = 0;
        for tab in tabs.iter() {
            // frame edges, thumb block, heading, body.
            expected += 3 + CARD_THUMB_ROWS + 1 + wrap_text(&tab.body, 36).len();
        }
        expected += tabs.len() - 1; // gaps

        assert_eq!(total_rows(&tabs, &art, width), expected);
    }

    #[test]
    fn test_first_card_renders_from_top() {
        let tabs = TabSet::builtin();
        let art = ArtStore::load(None, &tabs);
        let theme = Theme::noir();
        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);

        CardList::new(&theme, &tabs, &art).render(area, &mut buf);

        let top = buffer_line(&buf, 0);
        assert!(top.starts_with('╭') && top.trim_end().ends_with('╮'));
        assert!(buffer_line(&buf, 7).contains("zero zero one"));
    }

    #[test]
    fn test_offset_scrolls_to_later_cards() {
        let tabs = TabSet::builtin();
        let art = ArtStore::load(None, &tabs);
        let theme = Theme::noir();
        let area = Rect::new(0, 0, 40, 12);

        let first_card = 3 + CARD_THUMB_ROWS + 1 + wrap_text(&tabs.get(0).unwrap().body, 36).len();
        let mut buf = Buffer::empty(area);
        CardList::new(&theme, &tabs, &art)
            .offset(first_card + 1)
            .render(area, &mut buf);

        let text: Vec<String> = (0..12).map(|y| buffer_line(&buf, y)).collect();
        assert!(text.iter().any(|line| line.contains("zero zero two")));
        assert!(!text.iter().any(|line| line.contains("zero zero one")));
    }

    #[test]
    fn test_narrow_area_renders_nothing() {
        let tabs = TabSet::builtin();
        let art = ArtStore::load(None, &tabs);
        assert_eq!(total_rows(&tabs, &art, 6), 0);
    }
}
