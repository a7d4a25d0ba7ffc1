//! Palette kept in step with the theme controller

use genui_app::ThemeReceiver;
use genui_core::prelude::*;
use genui_core::ThemeMode;

use super::Palette;

/// Subscriber to theme changes that owns the active palette
///
/// The palette is rebuilt only when the controller publishes a new mode.
pub struct ThemeTracker {
    rx: ThemeReceiver,
    mode: ThemeMode,
    palette: Palette,
}

impl ThemeTracker {
    pub fn new(mut rx: ThemeReceiver) -> Self {
        let mode = *rx.borrow_and_update();
        Self {
            rx,
            mode,
            palette: Palette::for_mode(mode),
        }
    }

    /// Pick up a published change, if any; returns true when the palette switched
    pub fn sync(&mut self) -> bool {
        // A closed channel keeps the last palette
        if !self.rx.has_changed().unwrap_or(false) {
            return false;
        }
        let mode = *self.rx.borrow_and_update();
        if mode == self.mode {
            return false;
        }
        debug!("Palette switched: {} -> {}", self.mode, mode);
        self.mode = mode;
        self.palette = Palette::for_mode(mode);
        true
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}
