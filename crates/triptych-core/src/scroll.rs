//! Scroll model for the desktop panel stack.
//!
//! Panels are stacked vertically, one viewport high each. The offset is
//! kept fractional so smooth scrolling can ease toward a target over
//! several ticks; intersection ratios are derived from the same geometry,
//! which keeps the observer and the renderer agreeing about what is on
//! screen.

/// Rows moved per wheel tick or arrow press.
pub const SCROLL_SPEED: f64 = 3.0;

/// Fraction of the remaining distance covered per animation step.
const SMOOTH_DIVISOR: f64 = 3.0;

/// Close enough to snap onto the target, in rows.
const SNAP_EPSILON: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct ScrollState {
    /// Offset from the top of the stack, in rows.
    offset: f64,
    /// Panel a smooth scroll is heading for, if one is in flight.
    target: Option<usize>,
    /// Viewport (and therefore panel) height in rows.
    viewport: u16,
    /// Number of panels in the stack.
    count: usize,
}

impl ScrollState {
    pub fn new(count: usize, viewport: u16) -> Self {
        Self {
            offset: 0.0,
            target: None,
            viewport,
            count,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Offset rounded to whole rows for rendering.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn offset_rows(&self) -> usize {
        self.offset.round().max(0.0) as usize
    }

    pub fn viewport(&self) -> u16 {
        self.viewport
    }

    pub fn is_scrolling(&self) -> bool {
        self.target.is_some()
    }

    /// Furthest the stack can scroll: the last panel flush with the view.
    #[allow(clippy::cast_precision_loss)]
    pub fn max_offset(&self) -> f64 {
        self.count.saturating_sub(1) as f64 * f64::from(self.viewport)
    }

    /// Begin a smooth scroll that brings `index` flush into view.
    pub fn scroll_to(&mut self, index: usize) {
        if index < self.count {
            self.target = Some(index);
        }
    }

    /// Manual scroll by a row delta. Cancels any in-flight smooth scroll.
    pub fn scroll_by(&mut self, delta: f64) {
        self.target = None;
        self.offset = (self.offset + delta).clamp(0.0, self.max_offset());
    }

    /// Advance one animation step toward the target, if any.
    ///
    /// Covers a fixed fraction of the remaining distance, at least one
    /// row, and snaps onto the target when close. Returns true while the
    /// offset is still moving.
    pub fn step(&mut self) -> bool {
        let Some(index) = self.target else {
            return false;
        };
        let destination = self.row_of(index);
        let remaining = destination - self.offset;
        if remaining.abs() <= SNAP_EPSILON {
            self.offset = destination;
            self.target = None;
            return false;
        }
        let eased = remaining / SMOOTH_DIVISOR;
        let step = if eased.abs() < 1.0 {
            remaining.signum() * remaining.abs().min(1.0)
        } else {
            eased
        };
        self.offset += step;
        if (destination - self.offset).abs() <= SNAP_EPSILON {
            self.offset = destination;
            self.target = None;
        }
        true
    }

    /// Fraction of the given panel currently inside the viewport.
    pub fn ratio(&self, index: usize) -> f64 {
        let height = f64::from(self.viewport);
        if index >= self.count || height <= 0.0 {
            return 0.0;
        }
        let top = self.row_of(index);
        let overlap = (top + height).min(self.offset + height) - top.max(self.offset);
        (overlap / height).clamp(0.0, 1.0)
    }

    /// Adopt a new viewport height, keeping the same panel under the view.
    pub fn resize(&mut self, viewport: u16) {
        if viewport == self.viewport {
            return;
        }
        let anchor = if self.viewport == 0 {
            0.0
        } else {
            self.offset / f64::from(self.viewport)
        };
        self.viewport = viewport;
        self.offset = (anchor * f64::from(viewport)).clamp(0.0, self.max_offset());
    }

    #[allow(clippy::cast_precision_loss)]
    fn row_of(&self, index: usize) -> f64 {
        index as f64 * f64::from(self.viewport)
    }
}
