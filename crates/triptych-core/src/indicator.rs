//! Indicator geometry for the index bar.
//!
//! Each tab owns an equal share of the track; the highlight bar sits
//! inside the active share with a fixed left inset and a fixed width
//! shrink. Everything here is a pure function of (active index, tab
//! count), expressed in percent of the track so any render surface can
//! map it onto its own units.

use serde::Serialize;
use std::fmt;

/// Left inset of the bar inside the active share, in percent of track.
pub const INDICATOR_INSET: f64 = 10.0;

/// Width shrink relative to the equal share, in percentage points.
pub const INDICATOR_SHRINK: f64 = 22.0;

/// Position of the indicator bar, as percentages of the track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IndicatorStyle {
    /// Offset from the left edge of the track.
    pub left: f64,
    /// Width of the bar.
    pub width: f64,
}

impl IndicatorStyle {
    /// Compute the bar geometry for the active tab.
    ///
    /// `count` must be non-zero; a [`crate::tabs::TabSet`] never is.
    ///
    /// Known boundary: the width goes negative once the equal share drops
    /// below the shrink (five or more tabs). The raw value is kept here
    /// and clamped only in [`IndicatorStyle::resolve`], where a width has
    /// to become a cell count.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn for_tab(index: usize, count: usize) -> Self {
        let share = 100.0 / count as f64;
        Self {
            left: index as f64 * share + INDICATOR_INSET,
            width: share - INDICATOR_SHRINK,
        }
    }

    /// Map the percentages onto a track of `track` columns.
    ///
    /// Returns `(offset, width)` in columns. A negative width resolves to
    /// an empty run, and the bar never extends past the track.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn resolve(&self, track: u16) -> (u16, u16) {
        let span = f64::from(track);
        let left = (self.left / 100.0 * span).round().clamp(0.0, span) as u16;
        let width = (self.width / 100.0 * span).round().max(0.0) as u16;
        (left, width.min(track - left))
    }
}

impl fmt::Display for IndicatorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "left: {:.2}%; width: {:.2}%", self.left, self.width)
    }
}
