//! Tab catalog for the section.
//!
//! The section is presentational: it ships with a fixed, ordered set of
//! tabs and everything downstream is sized from that set. Tracker slots,
//! indicator geometry and the panel stack all index into the same order,
//! so the set is immutable once built.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when assembling a tab set.
#[derive(Debug, Error)]
pub enum TabSetError {
    /// A section needs at least one tab.
    #[error("tab set is empty")]
    Empty,
}

/// One labeled entry of the section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    /// Stable identifier, e.g. `"001"`. Also the basis for asset paths.
    pub id: String,
    /// Heading shown inside the panel.
    pub heading: String,
    /// Body copy shown under the heading.
    pub body: String,
}

impl Tab {
    pub fn new(
        id: impl Into<String>,
        heading: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            heading: heading.into(),
            body: body.into(),
        }
    }

    /// Label shown in the index bar.
    pub fn label(&self) -> String {
        self.id.to_uppercase()
    }

    /// Path of this tab's art file under `dir`.
    ///
    /// Art is looked up by id, never by content: `<dir>/<id>.txt`.
    pub fn art_path(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}.txt", self.id))
    }
}

/// The fixed, ordered set of tabs rendered by a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabSet {
    tabs: Vec<Tab>,
}

impl TabSet {
    /// Build a set from explicit tabs. Fails on an empty list.
    pub fn new(tabs: Vec<Tab>) -> Result<Self, TabSetError> {
        if tabs.is_empty() {
            return Err(TabSetError::Empty);
        }
        Ok(Self { tabs })
    }

    /// The three tabs the section ships with.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            tabs: vec![
                Tab::new("001", "zero zero one", LOREM_001),
                Tab::new("002", "zero zero two", LOREM_002),
                Tab::new("003", "zero zero three", LOREM_003),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tab> {
        self.tabs.iter()
    }

    /// Index of the tab with the given id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.id == id)
    }
}

const LOREM_001: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
    Sed sit amet sapien non arcu volutpat tincidunt. Curabitur vestibulum malesuada \
    orci vel suscipit. Nullam a erat sed purus gravida mollis. Phasellus sollicitudin \
    sapien vitae felis vehicula, vel sollicitudin dui facilisis1";

const LOREM_002: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
    Sed sit amet sapien non arcu volutpat tincidunt. Curabitur vestibulum malesuada \
    orci vel suscipit. Nullam a erat sed purus gravida mollis. Phasellus sollicitudin \
    sapien vitae felis vehicula, vel sollicitudin dui facilisis2";

const LOREM_003: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
    Sed sit amet sapien non arcu volutpat tincidunt. Curabitur vestibulum malesuada \
    orci vel suscipit. Nullam a erat sed purus gravida mollis. Phasellus sollicitudin \
    sapien vitae felis vehicula, vel sollicitudin dui facilisis3";
