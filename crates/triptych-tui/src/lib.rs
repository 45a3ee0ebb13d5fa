//! triptych-tui: terminal front end for the triptych section
//!
//! This crate provides the TUI layer for triptych, including:
//! - The desktop panel stack with its floating index bar
//! - The compact card layout for narrow terminals
//! - Headless mode for testing and automation

mod animate;
mod app;
mod assets;
mod event;
pub mod headless;
mod layout;
mod screen;
mod text;
mod theme;
mod widgets;

pub use app::{App, AppOptions};
pub use event::{Action, Event, EventHandler};
pub use theme::Theme;
pub use triptych_core;

use crossterm::{
    cursor::Show as ShowCursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};

/// Tick rate for the live event loop. The scroll easing and reveal
/// animations are tuned for 20 Hz.
const TICK_RATE_MS: u64 = 50;

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the TUI application.
///
/// This is the main entry point for the TUI. It sets up the terminal,
/// runs the event loop, and restores the terminal on exit.
pub async fn run_tui(options: AppOptions) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal with RAII guard for cleanup
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (width, height) = crossterm::terminal::size()?;
    let mut app = App::new(options, width, height);

    let mut events = EventHandler::new(TICK_RATE_MS);

    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    // Restore cursor before guard drops
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            let buf = frame.buffer_mut();
            screen::render(app, area, buf);
        })?;

        if let Some(event) = events.next().await {
            match event {
                Event::Key(key) => {
                    let action = event::key_to_action(key);
                    app.handle_action(action);
                }
                Event::Mouse(mouse) => {
                    use crossterm::event::{MouseButton, MouseEventKind};
                    match mouse.kind {
                        MouseEventKind::ScrollUp => app.handle_action(Action::Up),
                        MouseEventKind::ScrollDown => app.handle_action(Action::Down),
                        MouseEventKind::Down(MouseButton::Left) => {
                            app.handle_click(mouse.column, mouse.row);
                        }
                        _ => {}
                    }
                }
                Event::Tick => app.tick(),
                Event::Resize(width, height) => app.handle_resize(width, height),
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Get the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tui_version() {
        let version = tui_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }
}

/// E2E tests driving a whole session through the headless harness.
#[cfg(test)]
mod session_tests {
    use crate::event::Action;
    use crate::headless::{HeadlessConfig, HeadlessSession};
    use triptych_core::LayoutMode;

    fn session(width: u16, height: u16) -> HeadlessSession {
        let config = HeadlessConfig {
            width,
            height,
            ..HeadlessConfig::default()
        };
        HeadlessSession::new(config).unwrap()
    }

    // ========================================================================
    // Desktop flow
    // ========================================================================

    #[test]
    fn test_initial_screen_shows_first_panel() {
        let mut s = session(100, 30);
        s.tick(2);

        let screen = s.render().unwrap();
        assert!(screen.contains("001"));
        assert!(screen.contains("002"));
        assert!(screen.contains("003"));
        assert!(screen.contains("zero zero one"));
        assert!(!screen.contains("zero zero two"));
        assert_eq!(s.app().section.active(), 0);
    }

    #[test]
    fn test_navigation_scrolls_and_activates() {
        let mut s = session(100, 30);
        s.tick(2);

        s.send_action(Action::Tab(2));
        s.tick(40);

        assert_eq!(s.app().section.active(), 2);
        let screen = s.render().unwrap();
        assert!(screen.contains("zero zero three"));
        assert!(!screen.contains("zero zero one"));
    }

    #[test]
    fn test_indicator_moves_with_activation() {
        let mut s = session(100, 30);
        s.tick(2);
        let before = s.render().unwrap();
        let col_before = before.lines().nth(1).unwrap().find('━').unwrap();

        s.send_action(Action::Tab(1));
        s.tick(40);
        let after = s.render().unwrap();
        let col_after = after.lines().nth(1).unwrap().find('━').unwrap();

        assert!(col_after > col_before);
    }

    #[test]
    fn test_quit_ends_session() {
        let mut s = session(100, 30);
        s.send_action(Action::Quit);
        assert!(s.app().should_quit);
    }

    #[test]
    fn test_help_overlay_toggles() {
        let mut s = session(100, 30);
        s.send_action(Action::Help);
        let screen = s.render().unwrap();
        assert!(screen.contains("toggle this overlay"));

        s.send_action(Action::Down);
        assert!(!s.app().show_help);
    }

    // ========================================================================
    // Breakpoint crossings
    // ========================================================================

    #[test]
    fn test_shrink_below_breakpoint_shows_cards() {
        let mut s = session(100, 40);
        s.tick(30);
        assert_eq!(s.app().section.mode(), LayoutMode::Desktop);

        s.resize(60, 40);
        assert_eq!(s.app().section.mode(), LayoutMode::Mobile);

        let screen = s.render().unwrap();
        assert!(screen.contains("MOBILE"));
        assert!(screen.contains('╭'));
        assert!(screen.contains("zero zero one"));
    }

    #[test]
    fn test_grow_back_restarts_desktop_fresh() {
        let mut s = session(100, 30);
        s.send_action(Action::Tab(2));
        s.tick(40);
        assert_eq!(s.app().section.active(), 2);

        s.resize(60, 30);
        s.resize(100, 30);

        // The rebuilt desktop layout starts from the first tab again.
        assert_eq!(s.app().section.active(), 0);
        assert_eq!(s.app().section.scroll_offset(), 0);
    }
}
