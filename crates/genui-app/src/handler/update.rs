//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use crate::message::Message;
use crate::state::{AppState, Focus};

use super::{generation, keys::handle_key, output, side_effects, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.notices.expire(Instant::now());
            UpdateResult::none()
        }

        Message::ToggleHelp => {
            state.show_help = !state.show_help;
            UpdateResult::none()
        }

        Message::FocusNext => {
            state.focus = state.focus.next();
            UpdateResult::none()
        }

        Message::FocusPrev => {
            state.focus = state.focus.prev();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Prompt Editor
        // ─────────────────────────────────────────────────────────
        Message::PromptInput(c) => {
            state.prompt.insert_char(c);
            UpdateResult::none()
        }
        Message::PromptPaste(text) => {
            // Pastes only land in the visible, focused editor
            if state.focus == Focus::Prompt
                && !state.show_help
                && !state.output.view().fullscreen_open
            {
                state.prompt.insert_str(&text);
            }
            UpdateResult::none()
        }
        Message::PromptNewline => {
            state.prompt.insert_newline();
            UpdateResult::none()
        }
        Message::PromptBackspace => {
            state.prompt.backspace();
            UpdateResult::none()
        }
        Message::PromptDelete => {
            state.prompt.delete();
            UpdateResult::none()
        }
        Message::PromptCursorLeft => {
            state.prompt.move_left();
            UpdateResult::none()
        }
        Message::PromptCursorRight => {
            state.prompt.move_right();
            UpdateResult::none()
        }
        Message::PromptCursorUp => {
            state.prompt.move_up();
            UpdateResult::none()
        }
        Message::PromptCursorDown => {
            state.prompt.move_down();
            UpdateResult::none()
        }
        Message::PromptCursorHome => {
            state.prompt.move_home();
            UpdateResult::none()
        }
        Message::PromptCursorEnd => {
            state.prompt.move_end();
            UpdateResult::none()
        }
        Message::PromptClear => {
            state.prompt.clear();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Framework Selector
        // ─────────────────────────────────────────────────────────
        Message::NextFramework => {
            state.framework = state.framework.next();
            UpdateResult::none()
        }
        Message::PrevFramework => {
            state.framework = state.framework.prev();
            UpdateResult::none()
        }
        Message::SelectFramework(framework) => {
            state.framework = framework;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Generation
        // ─────────────────────────────────────────────────────────
        Message::Submit => generation::handle_submit(state),
        Message::GenerationCompleted { ticket, result } => {
            generation::handle_completed(state, ticket, result)
        }
        Message::CancelGeneration => generation::handle_cancel(state),

        // ─────────────────────────────────────────────────────────
        // Output View
        // ─────────────────────────────────────────────────────────
        Message::SwitchTab => output::handle_switch_tab(state),
        Message::SelectTab(tab) => output::handle_select_tab(state, tab),
        Message::RefreshPreview => output::handle_refresh_preview(state),
        Message::OpenFullscreen => output::handle_open_fullscreen(state),
        Message::CloseFullscreen => output::handle_close_fullscreen(state),
        Message::ScrollUp => output::handle_scroll_up(state),
        Message::ScrollDown => output::handle_scroll_down(state),
        Message::PageUp => output::handle_page_up(state),
        Message::PageDown => output::handle_page_down(state),
        Message::ScrollToTop => output::handle_scroll_to_top(state),
        Message::ScrollToBottom => output::handle_scroll_to_bottom(state),

        // ─────────────────────────────────────────────────────────
        // Side Effects
        // ─────────────────────────────────────────────────────────
        Message::CopyCode => side_effects::handle_copy(state),
        Message::CopyCompleted { error } => side_effects::handle_copy_completed(state, error),
        Message::DownloadCode => side_effects::handle_download(state),
        Message::DownloadCompleted { path, error } => {
            side_effects::handle_download_completed(state, path, error)
        }
        Message::OpenInBrowser => side_effects::handle_open_in_browser(state),
        Message::BrowserOpened { path, error } => {
            side_effects::handle_browser_opened(state, path, error)
        }

        // ─────────────────────────────────────────────────────────
        // Theme
        // ─────────────────────────────────────────────────────────
        Message::ToggleTheme => {
            let mode = state.theme.toggle();
            tracing::info!("Theme toggled to {}", mode);
            UpdateResult::none()
        }
    }
}
