//! Status bar widget.

use crate::text::display_width;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

/// A key hint for the status bar.
#[derive(Debug, Clone)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
}

impl KeyHint {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// Status bar displayed on the bottom row of the screen.
#[derive(Debug, Clone)]
pub struct StatusBar<'a> {
    theme: &'a Theme,
    mode: &'a str,
    hints: Vec<KeyHint>,
    right_text: Option<&'a str>,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar with a mode chip.
    pub fn new(theme: &'a Theme, mode: &'a str) -> Self {
        Self {
            theme,
            mode,
            hints: Vec::new(),
            right_text: None,
        }
    }

    /// Add key hints.
    #[must_use]
    pub fn hints(mut self, hints: Vec<KeyHint>) -> Self {
        self.hints = hints;
        self
    }

    /// Set right-aligned text.
    #[must_use]
    pub fn right(mut self, text: &'a str) -> Self {
        self.right_text = Some(text);
        self
    }
}

impl Widget for StatusBar<'_> {
    #[allow(clippy::cast_possible_truncation)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        for x in area.x..area.x.saturating_add(area.width) {
            buf[(x, area.y)].set_char(' ').set_bg(self.theme.surface);
        }

        // Left side: mode chip, then key hints.
        let mut spans = Vec::new();
        spans.push(Span::styled(
            format!(" {} ", self.mode),
            self.theme.key_hint(),
        ));
        spans.push(Span::styled(" ", self.theme.status_bar()));

        for hint in &self.hints {
            spans.push(Span::styled(
                format!(" {} ", hint.key),
                self.theme.key_hint(),
            ));
            spans.push(Span::styled(
                format!(" {} ", hint.label),
                self.theme.status_bar(),
            ));
        }

        let left_line = Line::from(spans);
        buf.set_line(area.x, area.y, &left_line, area.width);

        if let Some(text) = self.right_text {
            let text_len = display_width(text) as u16;
            if text_len < area.width {
                let x = area.x + area.width - text_len - 1;
                buf.set_string(x, area.y, text, self.theme.status_bar());
            }
        }
    }
}
