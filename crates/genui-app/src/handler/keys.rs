//! Key event handlers for the focused panel and overlays

use genui_core::Framework;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus};
use crate::view_state::OutputTab;

/// Convert key events to messages based on overlays and focus
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit works everywhere
    if matches!(key, InputKey::CharCtrl('c') | InputKey::CharCtrl('q')) {
        return Some(Message::Quit);
    }

    if state.show_help {
        return handle_key_help(key);
    }

    if state.output.view().fullscreen_open {
        return handle_key_fullscreen(key);
    }

    if let Some(msg) = handle_key_global(state, key) {
        return Some(msg);
    }

    match state.focus {
        Focus::Framework => handle_key_framework(key),
        Focus::Prompt => handle_key_prompt(key),
        Focus::Output => handle_key_output(key),
    }
}

/// Help overlay swallows everything except its own close keys
fn handle_key_help(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::F(1) | InputKey::Char('?') | InputKey::Char('q') => {
            Some(Message::ToggleHelp)
        }
        _ => None,
    }
}

fn handle_key_fullscreen(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Char('f' | 'q') | InputKey::CharCtrl('f') => {
            Some(Message::CloseFullscreen)
        }
        InputKey::Char('r') | InputKey::CharCtrl('r') => Some(Message::RefreshPreview),
        InputKey::Char('j') | InputKey::Down => Some(Message::ScrollDown),
        InputKey::Char('k') | InputKey::Up => Some(Message::ScrollUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::Char('g') | InputKey::Home => Some(Message::ScrollToTop),
        InputKey::Char('G') | InputKey::End => Some(Message::ScrollToBottom),
        _ => None,
    }
}

/// Bindings that work regardless of focus
fn handle_key_global(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc if state.output.is_pending() => Some(Message::CancelGeneration),
        InputKey::Tab => Some(Message::FocusNext),
        InputKey::BackTab => Some(Message::FocusPrev),
        InputKey::F(1) => Some(Message::ToggleHelp),
        InputKey::F(5) | InputKey::CharCtrl('g') => Some(Message::Submit),
        InputKey::CharCtrl('t') => Some(Message::ToggleTheme),
        InputKey::CharCtrl('y') => Some(Message::CopyCode),
        InputKey::CharCtrl('s') => Some(Message::DownloadCode),
        InputKey::CharCtrl('o') => Some(Message::OpenInBrowser),
        InputKey::CharCtrl('r') => Some(Message::RefreshPreview),
        InputKey::CharCtrl('f') => Some(Message::OpenFullscreen),
        _ => None,
    }
}

fn handle_key_framework(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Left | InputKey::Up | InputKey::Char('h' | 'k') => Some(Message::PrevFramework),
        InputKey::Right | InputKey::Down | InputKey::Char('l' | 'j') => {
            Some(Message::NextFramework)
        }
        InputKey::Char(c @ '1'..='9') => {
            let idx = c.to_digit(10).map(|d| d as usize - 1)?;
            Framework::from_index(idx).map(Message::SelectFramework)
        }
        InputKey::Enter => Some(Message::FocusNext),
        InputKey::Char('?') => Some(Message::ToggleHelp),
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}

/// Prompt editor: printable keys are text, Enter submits
fn handle_key_prompt(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::Submit),
        InputKey::CharCtrl('j') | InputKey::CharCtrl('n') => Some(Message::PromptNewline),
        InputKey::CharCtrl('u') => Some(Message::PromptClear),
        InputKey::Char(c) => Some(Message::PromptInput(c)),
        InputKey::Backspace => Some(Message::PromptBackspace),
        InputKey::Delete => Some(Message::PromptDelete),
        InputKey::Left => Some(Message::PromptCursorLeft),
        InputKey::Right => Some(Message::PromptCursorRight),
        InputKey::Up => Some(Message::PromptCursorUp),
        InputKey::Down => Some(Message::PromptCursorDown),
        InputKey::Home | InputKey::CharCtrl('a') => Some(Message::PromptCursorHome),
        InputKey::End | InputKey::CharCtrl('e') => Some(Message::PromptCursorEnd),
        _ => None,
    }
}

fn handle_key_output(key: InputKey) -> Option<Message> {
    match key {
        // View selection
        InputKey::Char('1' | 'c') => Some(Message::SelectTab(OutputTab::Code)),
        InputKey::Char('2' | 'p') => Some(Message::SelectTab(OutputTab::Preview)),
        InputKey::Char('t') | InputKey::Left | InputKey::Right => Some(Message::SwitchTab),
        InputKey::Char('r') => Some(Message::RefreshPreview),
        InputKey::Char('f') | InputKey::Enter => Some(Message::OpenFullscreen),

        // Toolbar
        InputKey::Char('y') => Some(Message::CopyCode),
        InputKey::Char('d') => Some(Message::DownloadCode),
        InputKey::Char('o') => Some(Message::OpenInBrowser),

        // Scrolling
        InputKey::Char('j') | InputKey::Down => Some(Message::ScrollDown),
        InputKey::Char('k') | InputKey::Up => Some(Message::ScrollUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::Char('g') | InputKey::Home => Some(Message::ScrollToTop),
        InputKey::Char('G') | InputKey::End => Some(Message::ScrollToBottom),

        InputKey::Char('?') => Some(Message::ToggleHelp),
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}
