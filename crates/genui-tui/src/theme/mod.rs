//! Theme system for the TUI.
//!
//! - `palette` - Light and dark color sets
//! - `styles` - Semantic style builder functions
//! - `tracker` - Palette following the theme controller's notifications

pub mod palette;
pub mod styles;
pub mod tracker;

pub use palette::Palette;
pub use tracker::ThemeTracker;
