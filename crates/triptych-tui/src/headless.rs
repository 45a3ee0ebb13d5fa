//! Headless mode for the triptych TUI.
//!
//! Runs the app against a [`TestBackend`] with an injected clock, so a
//! whole session can be scripted and inspected without a terminal or a
//! single sleep. Each `tick` advances the synthetic clock by the
//! configured tick rate and drives the app exactly as the live event
//! loop would.

use crate::app::{App, AppOptions};
use crate::event::Action;
use crate::screen;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// Default terminal dimensions for headless mode.
pub const DEFAULT_WIDTH: u16 = 80;
pub const DEFAULT_HEIGHT: u16 = 24;

/// Configuration for headless mode.
#[derive(Debug, Clone)]
pub struct HeadlessConfig {
    /// Terminal width.
    pub width: u16,
    /// Terminal height.
    pub height: u16,
    /// Tick rate in milliseconds.
    pub tick_rate_ms: u64,
    /// App construction options.
    pub options: AppOptions,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tick_rate_ms: 50,
            options: AppOptions::default(),
        }
    }
}

/// A scripted TUI instance.
pub struct HeadlessSession {
    terminal: Terminal<TestBackend>,
    app: App,
    now: Instant,
    tick: Duration,
}

impl HeadlessSession {
    pub fn new(config: HeadlessConfig) -> io::Result<Self> {
        let backend = TestBackend::new(config.width, config.height);
        let terminal = Terminal::new(backend)?;
        let app = App::new(config.options, config.width, config.height);
        Ok(Self {
            terminal,
            app,
            now: Instant::now(),
            tick: Duration::from_millis(config.tick_rate_ms),
        })
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    /// Send an action to the app.
    pub fn send_action(&mut self, action: Action) {
        self.app.handle_action(action);
    }

    /// Advance the synthetic clock by `count` ticks.
    pub fn tick(&mut self, count: usize) {
        for _ in 0..count {
            self.now += self.tick;
            self.app.tick_at(self.now);
        }
    }

    /// Resize the virtual terminal and the app with it.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.terminal.backend_mut().resize(width, height);
        self.app.handle_resize(width, height);
    }

    /// Draw one frame and capture it as text.
    pub fn render(&mut self) -> io::Result<String> {
        let app = &self.app;
        self.terminal.draw(|frame| {
            let area = frame.area();
            let buf = frame.buffer_mut();
            screen::render(app, area, buf);
        })?;
        Ok(buffer_to_string(self.terminal.backend().buffer()))
    }
}

/// Convert a terminal buffer to a string representation.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        // Trim trailing whitespace from each line
        while result.ends_with(' ') {
            result.pop();
        }
        result.push('\n');
    }

    // Remove trailing newline
    if result.ends_with('\n') {
        result.pop();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_config_default() {
        let config = HeadlessConfig::default();
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert_eq!(config.tick_rate_ms, 50);
    }

    #[test]
    fn test_buffer_to_string() {
        use ratatui::layout::Rect;
        use ratatui::style::Style;

        let area = Rect::new(0, 0, 10, 2);
        let mut buffer = Buffer::empty(area);
        buffer.set_string(0, 0, "Hello", Style::default());
        buffer.set_string(0, 1, "World", Style::default());

        let result = buffer_to_string(&buffer);
        assert!(result.contains("Hello"));
        assert!(result.contains("World"));
    }

    #[test]
    fn test_session_renders_initial_screen() {
        let mut session = HeadlessSession::new(HeadlessConfig::default()).unwrap();
        session.tick(2);
        let screen = session.render().unwrap();
        assert!(screen.contains("001"));
        assert!(screen.contains("DESKTOP"));
    }

    #[test]
    fn test_session_resize_crosses_breakpoint() {
        let mut session = HeadlessSession::new(HeadlessConfig::default()).unwrap();
        session.resize(60, 24);
        let screen = session.render().unwrap();
        assert!(screen.contains("MOBILE"));
    }
}
