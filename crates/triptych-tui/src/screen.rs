//! Screen rendering.
//!
//! There is one screen with two layouts. Desktop stacks full-viewport
//! panels behind a floating index bar; mobile flattens everything into
//! a card list. The two branches share nothing but the status bar, so
//! each renders from scratch and the buffer never mixes them.

use crate::app::App;
use crate::layout::{self, CARD_PERCENT};
use crate::widgets::{CardList, IndexBar, KeyHint, Panel, StatusBar};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use triptych_core::tabs::Tab;
use triptych_core::LayoutMode;

const DESKTOP_HINTS: [KeyHint; 4] = [
    KeyHint::new("1-3", "goto"),
    KeyHint::new("tab", "next"),
    KeyHint::new("j/k", "scroll"),
    KeyHint::new("?", "help"),
];

const MOBILE_HINTS: [KeyHint; 3] = [
    KeyHint::new("j/k", "scroll"),
    KeyHint::new("g/G", "ends"),
    KeyHint::new("?", "help"),
];

/// Render the app into the buffer.
pub fn render(app: &App, area: Rect, buf: &mut Buffer) {
    match app.section.mode() {
        LayoutMode::Desktop => render_desktop(app, area, buf),
        LayoutMode::Mobile => render_mobile(app, area, buf),
    }

    if app.show_help {
        render_help_overlay(app, area, buf);
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn render_desktop(app: &App, area: Rect, buf: &mut Buffer) {
    let (index_area, content, status) = layout::desktop_layout(area);

    // Panel stack, each panel one viewport tall, sliced by the scroll
    // offset.
    let rows = i32::from(content.height);
    let offset = app.section.scroll_offset() as i32;
    for (index, tab) in app.section.tabs().iter().enumerate() {
        let top = index as i32 * rows - offset;
        let bottom = top + rows;
        if bottom <= 0 || top >= rows {
            continue;
        }
        let skip = (-top).max(0) as u16;
        let y0 = top.max(0) as u16;
        let height = (bottom.min(rows) - top.max(0)) as u16;
        let slice = Rect::new(content.x, content.y + y0, content.width, height);

        Panel::new(&app.theme, tab, index)
            .art(app.art.panel(index))
            .active(app.section.active() == index)
            .reveal(app.reveals[index])
            .clip(skip, content.height)
            .render(slice, buf);
    }

    let labels: Vec<String> = app.section.tabs().iter().map(Tab::label).collect();
    if let Some(indicator) = app.section.indicator() {
        IndexBar::new(&app.theme, labels, app.section.active(), indicator).render(index_area, buf);
    }

    let right = status_right(app);
    StatusBar::new(&app.theme, "DESKTOP")
        .hints(DESKTOP_HINTS.to_vec())
        .right(&right)
        .render(status, buf);
}

fn render_mobile(app: &App, area: Rect, buf: &mut Buffer) {
    let (content, status) = layout::mobile_layout(area);
    let track = layout::centered_track(CARD_PERCENT, content);

    CardList::new(&app.theme, app.section.tabs(), &app.art)
        .offset(app.section.mobile_offset())
        .render(track, buf);

    let right = format!(
        "row {}/{}",
        app.section.mobile_offset(),
        app.mobile_max_offset()
    );
    StatusBar::new(&app.theme, "MOBILE")
        .hints(MOBILE_HINTS.to_vec())
        .right(&right)
        .render(status, buf);
}

fn status_right(app: &App) -> String {
    let label = app
        .section
        .tabs()
        .get(app.section.active())
        .map(Tab::label)
        .unwrap_or_default();
    match app.section.indicator() {
        Some(indicator) => format!("{label} · {indicator}"),
        None => label,
    }
}

fn render_help_overlay(app: &App, area: Rect, buf: &mut Buffer) {
    let overlay = layout::centered_fixed(44, 14, area);
    Clear.render(overlay, buf);

    let block = Block::default()
        .title(" keys ")
        .borders(Borders::ALL)
        .border_style(app.theme.border_active_style())
        .style(Style::default().bg(app.theme.surface));
    let inner = block.inner(overlay);
    block.render(overlay, buf);

    let rows: [(&str, &str); 8] = [
        ("1-3", "jump to tab"),
        ("tab / S-tab", "next / previous tab"),
        ("j / k", "scroll down / up"),
        ("g / G", "first / last"),
        ("click", "jump via the index bar"),
        ("?", "toggle this overlay"),
        ("q / esc", "quit"),
        ("ctrl-c", "quit"),
    ];
    let lines: Vec<Line> = rows
        .iter()
        .map(|(key, label)| {
            Line::from(vec![
                Span::styled(format!(" {key:<12}"), app.theme.active_label()),
                Span::styled((*label).to_string(), app.theme.text_style()),
            ])
        })
        .collect();

    Paragraph::new(lines).render(inner, buf);
}
