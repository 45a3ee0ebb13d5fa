//! Reveal animation for panel details.
//!
//! Headings and body copy slide up and brighten while their panel is
//! visible, and sink back once it is not, mirroring the committed
//! visibility state rather than raw scroll position. Progress moves a
//! fixed step per tick in whichever direction the state points.

/// Ticks for a full reveal (about a second at the 50ms tick rate).
pub const REVEAL_TICKS: u32 = 20;

/// Deepest downward shift of unrevealed details, in rows.
pub const REVEAL_DROP_ROWS: u16 = 4;

/// Per-tab reveal progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reveal {
    progress: f32,
}

impl Reveal {
    /// Move one tick toward revealed or hidden.
    #[allow(clippy::cast_precision_loss)]
    pub fn advance(&mut self, visible: bool) {
        let step = 1.0 / REVEAL_TICKS as f32;
        self.progress = if visible {
            (self.progress + step).min(1.0)
        } else {
            (self.progress - step).max(0.0)
        };
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_settled(&self) -> bool {
        self.progress >= 1.0
    }

    /// Rows the details sit below their resting position.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn drop_rows(&self) -> u16 {
        ((1.0 - self.progress) * f32::from(REVEAL_DROP_ROWS)).round() as u16
    }
}
