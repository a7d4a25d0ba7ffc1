//! Terminal setup and restoration
//!
//! Bracketed paste is switched on together with raw mode so a pasted prompt
//! arrives as one `Event::Paste` instead of a burst of key presses.

use std::io::stdout;

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use genui_core::prelude::*;
use ratatui::DefaultTerminal;

/// Enter raw mode and the alternate screen, with bracketed paste
pub fn init() -> DefaultTerminal {
    let terminal = ratatui::init();
    if let Err(e) = execute!(stdout(), EnableBracketedPaste) {
        warn!("Bracketed paste unavailable: {}", e);
    }
    terminal
}

/// Undo [`init`]; safe to call more than once
pub fn restore() {
    if let Err(e) = execute!(stdout(), DisableBracketedPaste) {
        debug!("Failed to disable bracketed paste: {}", e);
    }
    ratatui::restore();
}

/// Install a panic hook that restores the terminal before reporting
pub fn install_panic_hook() {
    let report = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore();
        report(panic_info);
    }));
}
