//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use genui_app::{AppState, Focus};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::layout;
use crate::theme::ThemeTracker;
use crate::widgets;

/// Render the complete UI (View function in TEA)
///
/// Only widget bookkeeping (scroll metrics) is written back to `state`.
/// Colors come from `theme`, which follows the theme controller.
pub fn view(frame: &mut Frame, state: &mut AppState, theme: &mut ThemeTracker) {
    let area = frame.area();
    theme.sync();
    let p = theme.palette();

    frame.render_widget(Block::default().style(Style::default().bg(p.deepest_bg)), area);

    let generating = state.output.is_pending();

    if state.output.view().fullscreen_open {
        frame.render_stateful_widget(widgets::FullscreenPreview::new(p), area, &mut state.output);
        frame.render_widget(widgets::Toasts::new(p, &state.notices), area);
        return;
    }

    let areas = layout::create(area);

    frame.render_widget(
        widgets::Navbar::new(p, &state.settings.api.model, theme.mode())
            .generating(generating),
        areas.header,
    );

    frame.render_widget(
        widgets::FrameworkSelector::new(p, state.framework, state.focus == Focus::Framework),
        areas.framework,
    );

    let prompt_focused = state.focus == Focus::Prompt;
    let prompt = widgets::PromptPanel::new(p, &state.prompt, prompt_focused).generating(generating);
    let cursor = prompt.cursor_position(areas.prompt);
    frame.render_widget(prompt, areas.prompt);

    frame.render_stateful_widget(
        widgets::OutputPanel::new(p, state.focus == Focus::Output),
        areas.output,
        &mut state.output,
    );

    frame.render_widget(widgets::Toasts::new(p, &state.notices), area);

    if state.show_help {
        frame.render_widget(widgets::HelpOverlay::new(p), area);
    } else if prompt_focused {
        if let Some(position) = cursor {
            frame.set_cursor_position(position);
        }
    }
}
