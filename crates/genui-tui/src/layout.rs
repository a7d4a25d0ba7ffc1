//! Screen layout definitions for the TUI
//!
//! Wide terminals put the input column (framework + prompt) beside the
//! output pane; narrow ones stack them.

use ratatui::layout::{Constraint, Layout, Rect};

/// Below this width the input column and output pane are stacked
pub const STACKED_WIDTH: u16 = 100;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Navbar (title, model, theme indicator)
    pub header: Rect,

    /// Framework selector (one row inside a border)
    pub framework: Rect,

    /// Prompt editor
    pub prompt: Rect,

    /// Output pane (code / preview / loading / empty)
    pub output: Rect,
}

pub fn create(area: Rect) -> ScreenAreas {
    let [header, body] = Layout::vertical([Constraint::Length(3), Constraint::Min(6)]).areas(area);

    let (input, output) = if area.width >= STACKED_WIDTH {
        let [input, output] =
            Layout::horizontal([Constraint::Percentage(38), Constraint::Percentage(62)])
                .areas(body);
        (input, output)
    } else {
        let [input, output] =
            Layout::vertical([Constraint::Length(9), Constraint::Min(3)]).areas(body);
        (input, output)
    };

    let [framework, prompt] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).areas(input);

    ScreenAreas {
        header,
        framework,
        prompt,
        output,
    }
}
