//! Panel art loading.
//!
//! Each tab can ship a text-art file looked up at a fixed, tab-derived
//! path (`<dir>/<id>.txt`). Art is decoration: a missing directory or
//! file falls back to a generated placeholder instead of failing the UI.

use std::path::Path;
use tracing::warn;
use triptych_core::tabs::{Tab, TabSet};

/// Loaded art for every tab, in tab order.
#[derive(Debug, Clone)]
pub struct ArtStore {
    panels: Vec<Vec<String>>,
}

impl ArtStore {
    /// Load art for each tab from `dir`, falling back per tab.
    pub fn load(dir: Option<&Path>, tabs: &TabSet) -> Self {
        let panels = tabs
            .iter()
            .map(|tab| match dir {
                Some(dir) => read_art(dir, tab),
                None => placeholder(tab),
            })
            .collect();
        Self { panels }
    }

    /// Art lines for a panel. Empty for an unknown index.
    pub fn panel(&self, index: usize) -> &[String] {
        self.panels.get(index).map_or(&[], Vec::as_slice)
    }

    /// Leading rows of a panel's art, for mobile card thumbnails.
    pub fn thumb(&self, index: usize, rows: usize) -> &[String] {
        let art = self.panel(index);
        &art[..art.len().min(rows)]
    }
}

fn read_art(dir: &Path, tab: &Tab) -> Vec<String> {
    let path = tab.art_path(dir);
    match std::fs::read_to_string(&path) {
        Ok(content) => content.lines().map(str::to_string).collect(),
        Err(err) => {
            warn!(path = %path.display(), %err, "art file missing, using placeholder");
            placeholder(tab)
        }
    }
}

/// Generated stand-in: the tab label in a small frame.
fn placeholder(tab: &Tab) -> Vec<String> {
    let label = tab.label();
    let bar = "─".repeat(label.chars().count() + 6);
    vec![
        format!("┌{bar}┐"),
        format!("│   {label}   │"),
        format!("└{bar}┘"),
    ]
}
