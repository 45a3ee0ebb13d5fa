//! Text helpers for the triptych TUI.

use unicode_width::UnicodeWidthStr;

/// Wrap a plain text string to the specified width.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }
    textwrap::wrap(text, width)
        .into_iter()
        .map(std::borrow::Cow::into_owned)
        .collect()
}

/// Display width of a string in terminal columns.
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Truncate a string to a display width, appending an ellipsis if cut.
pub fn truncate(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let budget = width.saturating_sub(1);
    for ch in text.chars() {
        let next = format!("{out}{ch}");
        if display_width(&next) > budget {
            break;
        }
        out = next;
    }
    out.push('…');
    out
}

/// Cut a string to a display width without an ellipsis.
pub fn clip(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    let mut out = String::new();
    for ch in text.chars() {
        let next = format!("{out}{ch}");
        if display_width(&next) > width {
            break;
        }
        out = next;
    }
    out
}
