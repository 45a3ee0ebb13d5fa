//! UI widgets for the TUI.
//!
//! This module provides:
//! - [`IndexBar`] - Numbered index labels with the sliding indicator
//! - [`Panel`] - One full-viewport desktop panel
//! - [`CardList`] - Flat card stack for the compact layout
//! - [`StatusBar`] - Bottom status bar with mode chip and key hints

mod card;
mod index_bar;
mod panel;
mod status_bar;

pub use card::{total_rows, CardList};
pub use index_bar::{hit_test, IndexBar};
pub use panel::{DetailSide, Panel};
pub use status_bar::{KeyHint, StatusBar};
