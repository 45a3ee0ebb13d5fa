//! triptych-core: Headless engine for the scroll-driven tab section
//!
//! This crate models the observable behavior of the section without any
//! terminal dependencies, including:
//! - Viewport classification into desktop and mobile layouts
//! - Scroll model and intersection observation for the panel stack
//! - Debounced visibility tracking that drives the active tab
//! - Indicator geometry for the index bar

pub mod indicator;
pub mod mode;
pub mod observe;
pub mod scroll;
pub mod section;
pub mod tabs;
pub mod tracker;

// Re-export commonly used types
pub use indicator::{IndicatorStyle, INDICATOR_INSET, INDICATOR_SHRINK};
pub use mode::{Classifier, LayoutMode, DEFAULT_BREAKPOINT};
pub use observe::{IntersectionSource, ScrollObserver, Transition, INTERSECTION_THRESHOLD};
pub use scroll::{ScrollState, SCROLL_SPEED};
pub use section::Section;
pub use tabs::{Tab, TabSet, TabSetError};
pub use tracker::{VisibilityTracker, VISIBILITY_DEBOUNCE};

/// Returns the engine version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_version() {
        let version = core_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }
}
