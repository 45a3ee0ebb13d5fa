//! Color themes for the triptych TUI.
//!
//! The default `noir` theme matches the section's original look: pure
//! black behind a cyan accent. Themes are plain data so the CLI can pick
//! one by name at startup.

use ratatui::style::{Color, Modifier, Style};

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds
    pub base: Color,
    pub surface: Color,

    // Foregrounds
    pub text: Color,
    pub subtext: Color,
    pub muted: Color,

    // Accent
    pub accent: Color,

    // Borders
    pub border: Color,
    pub border_active: Color,

    /// Backdrop shades cycled per panel.
    pub backdrops: [Color; 3],
}

impl Default for Theme {
    fn default() -> Self {
        Self::noir()
    }
}

impl Theme {
    /// Black-and-cyan theme, the section's native look.
    pub fn noir() -> Self {
        Self {
            base: Color::Rgb(0, 0, 0),          // #000000
            surface: Color::Rgb(18, 18, 22),    // #121216
            text: Color::Rgb(235, 235, 235),    // #ebebeb
            subtext: Color::Rgb(160, 160, 170), // #a0a0aa
            muted: Color::Rgb(95, 95, 105),     // #5f5f69
            accent: Color::Rgb(3, 205, 255),    // #03cdff
            border: Color::Rgb(60, 60, 70),     // #3c3c46
            border_active: Color::Rgb(3, 205, 255),
            backdrops: [
                Color::Rgb(8, 14, 20),  // #080e14
                Color::Rgb(14, 8, 20),  // #0e0814
                Color::Rgb(8, 20, 14),  // #08140e
            ],
        }
    }

    /// Catppuccin Mocha, for terminals where pure black washes out.
    pub fn mocha() -> Self {
        Self {
            base: Color::Rgb(30, 30, 46),       // #1e1e2e
            surface: Color::Rgb(49, 50, 68),    // #313244
            text: Color::Rgb(205, 214, 244),    // #cdd6f4
            subtext: Color::Rgb(166, 173, 200), // #a6adc8
            muted: Color::Rgb(108, 112, 134),   // #6c7086
            accent: Color::Rgb(137, 220, 235),  // #89dceb (sky)
            border: Color::Rgb(69, 71, 90),     // #45475a
            border_active: Color::Rgb(137, 220, 235),
            backdrops: [
                Color::Rgb(24, 24, 37), // #181825
                Color::Rgb(32, 26, 42), // #201a2a
                Color::Rgb(26, 32, 38), // #1a2026
            ],
        }
    }

    /// Look a theme up by name. Used by the CLI's `--theme` flag.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "noir" => Some(Self::noir()),
            "mocha" => Some(Self::mocha()),
            _ => None,
        }
    }

    /// Backdrop shade for a panel, cycling through the palette.
    pub fn backdrop(&self, index: usize) -> Color {
        self.backdrops[index % self.backdrops.len()]
    }

    /// Default text style.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Dimmed text for secondary information.
    pub fn dim(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Body copy style.
    pub fn body(&self) -> Style {
        Style::default().fg(self.subtext)
    }

    /// Heading style for panels and cards.
    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.text)
            .add_modifier(Modifier::BOLD)
    }

    /// Active index label.
    pub fn active_label(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Indicator bar under the active label.
    pub fn indicator(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Status bar background.
    pub fn status_bar(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    /// Key hint style for the status bar.
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.base)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Border style for inactive elements.
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Border style for the active element.
    pub fn border_active_style(&self) -> Style {
        Style::default().fg(self.border_active)
    }
}
