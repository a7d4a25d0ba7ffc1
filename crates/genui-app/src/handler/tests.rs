//! Tests for handler module

use std::path::PathBuf;

use super::*;
use crate::config::Settings;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::notice::NoticeKind;
use crate::prompt_input::PromptInput;
use crate::state::{AppState, Focus};
use crate::theme::{MemoryThemeStore, ThemeController, ThemeStore};
use crate::view_state::OutputTab;
use genui_core::{Framework, GenerationResult, ThemeMode};

fn test_state() -> AppState {
    AppState::new(
        Settings::default(),
        PathBuf::from("/tmp/genui-test"),
        ThemeController::in_memory(ThemeMode::Light),
    )
}

fn state_with_prompt(prompt: &str) -> AppState {
    let mut state = test_state();
    state.prompt = PromptInput::with_text(prompt);
    state
}

/// Submit and return the issued ticket
fn submit(state: &mut AppState) -> u64 {
    match update(state, Message::Submit).action {
        Some(UpdateAction::SpawnGeneration { ticket, .. }) => ticket,
        other => panic!("expected SpawnGeneration, got {:?}", other),
    }
}

fn state_with_code(code: &str) -> AppState {
    let mut state = state_with_prompt("a pricing table");
    let ticket = submit(&mut state);
    update(
        &mut state,
        Message::GenerationCompleted {
            ticket,
            result: GenerationResult::success(code),
        },
    );
    state
}

// ─────────────────────────────────────────────────────────
// Quit / focus / help
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = test_state();
    update(&mut state, Message::Quit);
    assert!(state.should_quit());
}

#[test]
fn test_ctrl_c_quits_from_any_focus() {
    let mut state = test_state();
    for focus in [Focus::Framework, Focus::Prompt, Focus::Output] {
        state.focus = focus;
        assert!(matches!(
            handle_key(&state, InputKey::CharCtrl('c')),
            Some(Message::Quit)
        ));
    }
}

#[test]
fn test_tab_cycles_focus() {
    let mut state = test_state();
    assert_eq!(state.focus, Focus::Prompt);

    let msg = handle_key(&state, InputKey::Tab).unwrap();
    update(&mut state, msg);
    assert_eq!(state.focus, Focus::Output);

    let msg = handle_key(&state, InputKey::BackTab).unwrap();
    update(&mut state, msg);
    assert_eq!(state.focus, Focus::Prompt);
}

#[test]
fn test_help_overlay_swallows_keys() {
    let mut state = test_state();
    update(&mut state, Message::ToggleHelp);
    assert!(state.show_help);

    assert!(handle_key(&state, InputKey::Char('x')).is_none());
    assert!(handle_key(&state, InputKey::Enter).is_none());
    assert!(matches!(
        handle_key(&state, InputKey::Esc),
        Some(Message::ToggleHelp)
    ));
}

#[test]
fn test_key_message_is_forwarded_as_follow_up() {
    let mut state = test_state();
    let result = update(&mut state, Message::Key(InputKey::Char('a')));
    assert!(matches!(result.message, Some(Message::PromptInput('a'))));
}

// ─────────────────────────────────────────────────────────
// Prompt editing and framework selection
// ─────────────────────────────────────────────────────────

#[test]
fn test_typing_in_prompt_focus_edits_prompt() {
    let mut state = test_state();
    for c in "nav".chars() {
        let msg = handle_key(&state, InputKey::Char(c)).unwrap();
        update(&mut state, msg);
    }
    let msg = handle_key(&state, InputKey::CharCtrl('j')).unwrap();
    update(&mut state, msg);
    let msg = handle_key(&state, InputKey::Char('x')).unwrap();
    update(&mut state, msg);
    let msg = handle_key(&state, InputKey::Backspace).unwrap();
    update(&mut state, msg);

    assert_eq!(state.prompt.text(), "nav\n");
}

#[test]
fn test_q_in_prompt_is_text_not_quit() {
    let state = test_state();
    assert!(matches!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::PromptInput('q'))
    ));
}

#[test]
fn test_framework_focus_cycles_frameworks() {
    let mut state = test_state();
    state.focus = Focus::Framework;

    let msg = handle_key(&state, InputKey::Right).unwrap();
    update(&mut state, msg);
    assert_eq!(state.framework, Framework::HtmlTailwind);

    let msg = handle_key(&state, InputKey::Left).unwrap();
    update(&mut state, msg);
    let msg = handle_key(&state, InputKey::Left).unwrap();
    update(&mut state, msg);
    assert_eq!(state.framework, Framework::HtmlTailwindBootstrap);

    let msg = handle_key(&state, InputKey::Char('3')).unwrap();
    update(&mut state, msg);
    assert_eq!(state.framework, Framework::HtmlBootstrap);

    assert!(handle_key(&state, InputKey::Char('9')).is_none());
}

// ─────────────────────────────────────────────────────────
// Submit / completion
// ─────────────────────────────────────────────────────────

#[test]
fn test_blank_submit_raises_notice_and_spawns_nothing() {
    for prompt in ["", "   ", "\n\t "] {
        let mut state = state_with_prompt(prompt);
        let result = update(&mut state, Message::Submit);

        assert!(result.action.is_none());
        assert!(state.notices.contains(NoticeKind::EmptyPrompt));
        assert_eq!(
            state.notices.latest().unwrap().message,
            "Please describe your component first"
        );
        assert!(!state.output.is_pending());
    }
}

#[test]
fn test_enter_in_prompt_submits() {
    let mut state = state_with_prompt("a login form");
    let msg = handle_key(&state, InputKey::Enter).unwrap();
    let result = update(&mut state, msg);

    match result.action {
        Some(UpdateAction::SpawnGeneration { ticket, request }) => {
            assert_eq!(ticket, 1);
            assert_eq!(request.prompt_text, "a login form");
            assert_eq!(request.framework, Framework::HtmlCss);
        }
        other => panic!("expected SpawnGeneration, got {:?}", other),
    }
    assert!(state.output.is_pending());
}

#[test]
fn test_submit_while_pending_is_rejected() {
    let mut state = state_with_prompt("a card");
    submit(&mut state);

    let result = update(&mut state, Message::Submit);
    assert!(result.action.is_none());
    assert!(state.output.is_pending());
}

#[test]
fn test_success_reveals_output_and_keeps_tab() {
    let mut state = state_with_prompt("a footer");
    update(&mut state, Message::SelectTab(OutputTab::Preview));
    let ticket = submit(&mut state);

    update(
        &mut state,
        Message::GenerationCompleted {
            ticket,
            result: GenerationResult::success("<footer>x</footer>"),
        },
    );

    assert!(state.output.view().output_visible);
    assert_eq!(state.output.view().active_tab, OutputTab::Preview);
    assert_eq!(state.output.code(), "<footer>x</footer>");
    assert!(state.notices.is_empty());
}

#[test]
fn test_failure_keeps_output_hidden_and_raises_notice() {
    let mut state = state_with_prompt("a modal");
    let ticket = submit(&mut state);

    update(
        &mut state,
        Message::GenerationCompleted {
            ticket,
            result: GenerationResult::failure("Gemini API error (500): boom"),
        },
    );

    assert!(!state.output.view().output_visible);
    assert_eq!(state.output.code(), "");
    assert!(!state.output.is_pending());
    let notice = state.notices.latest().unwrap();
    assert_eq!(notice.kind, NoticeKind::GenerationFailed);
    assert_eq!(notice.message, "Gemini API error (500): boom");

    // Retry is allowed immediately
    assert!(update(&mut state, Message::Submit).action.is_some());
}

#[test]
fn test_cancel_retires_ticket_and_discards_late_result() {
    let mut state = state_with_prompt("a sidebar");
    let ticket = submit(&mut state);

    let msg = handle_key(&state, InputKey::Esc).unwrap();
    assert!(matches!(msg, Message::CancelGeneration));
    let result = update(&mut state, msg);
    assert_eq!(
        result.action,
        Some(UpdateAction::CancelGeneration { ticket })
    );
    assert!(state.notices.contains(NoticeKind::GenerationCancelled));

    update(
        &mut state,
        Message::GenerationCompleted {
            ticket,
            result: GenerationResult::success("<late/>"),
        },
    );
    assert!(!state.output.view().output_visible);
    assert_eq!(state.output.code(), "");
}

#[test]
fn test_cancel_without_pending_is_noop() {
    let mut state = test_state();
    let result = update(&mut state, Message::CancelGeneration);
    assert!(result.action.is_none());
    assert!(state.notices.is_empty());
    assert!(handle_key(&state, InputKey::Esc).is_none());
}

// ─────────────────────────────────────────────────────────
// Output view
// ─────────────────────────────────────────────────────────

#[test]
fn test_output_keys_switch_tabs() {
    let mut state = state_with_code("<div/>");
    state.focus = Focus::Output;

    let msg = handle_key(&state, InputKey::Char('p')).unwrap();
    update(&mut state, msg);
    assert_eq!(state.output.view().active_tab, OutputTab::Preview);

    let msg = handle_key(&state, InputKey::Char('t')).unwrap();
    update(&mut state, msg);
    assert_eq!(state.output.view().active_tab, OutputTab::Code);
}

#[test]
fn test_refresh_preview_bumps_epoch_every_time() {
    let mut state = state_with_code("<h1>Hi</h1>");
    update(&mut state, Message::RefreshPreview);
    update(&mut state, Message::RefreshPreview);
    assert_eq!(state.output.view().preview_epoch, 2);
}

#[test]
fn test_fullscreen_open_and_close_via_keys() {
    let mut state = state_with_code("<main/>");
    state.focus = Focus::Output;

    let msg = handle_key(&state, InputKey::Char('f')).unwrap();
    update(&mut state, msg);
    assert!(state.output.view().fullscreen_open);

    // Typing keys are routed to the overlay, not the prompt
    assert!(handle_key(&state, InputKey::Char('x')).is_none());

    let msg = handle_key(&state, InputKey::Esc).unwrap();
    update(&mut state, msg);
    assert!(!state.output.view().fullscreen_open);
}

#[test]
fn test_fullscreen_without_output_is_ignored() {
    let mut state = test_state();
    update(&mut state, Message::OpenFullscreen);
    assert!(!state.output.view().fullscreen_open);
}

#[test]
fn test_scroll_messages_move_code_view() {
    let mut state = state_with_code("<div/>");
    state.output.code_scroll.update_content_size(50, 10);

    update(&mut state, Message::ScrollDown);
    update(&mut state, Message::PageDown);
    assert_eq!(state.output.code_scroll.offset, 9);

    update(&mut state, Message::ScrollToTop);
    assert_eq!(state.output.code_scroll.offset, 0);
}

// ─────────────────────────────────────────────────────────
// Side effects
// ─────────────────────────────────────────────────────────

#[test]
fn test_copy_with_empty_code_raises_notice_only() {
    let mut state = test_state();
    let result = update(&mut state, Message::CopyCode);
    assert!(result.action.is_none());
    assert!(state.notices.contains(NoticeKind::NothingToCopy));
}

#[test]
fn test_copy_with_whitespace_code_raises_notice_only() {
    let mut state = state_with_code("  \n ");
    let result = update(&mut state, Message::CopyCode);
    assert!(result.action.is_none());
    assert!(state.notices.contains(NoticeKind::NothingToCopy));
}

#[test]
fn test_copy_with_code_returns_action() {
    let mut state = state_with_code("<nav/>");
    let result = update(&mut state, Message::CopyCode);
    assert_eq!(
        result.action,
        Some(UpdateAction::CopyToClipboard {
            code: "<nav/>".to_string()
        })
    );
}

#[test]
fn test_copy_completed_notices() {
    let mut state = test_state();
    update(&mut state, Message::CopyCompleted { error: None });
    assert!(state.notices.contains(NoticeKind::Copied));

    update(
        &mut state,
        Message::CopyCompleted {
            error: Some("no display".to_string()),
        },
    );
    assert_eq!(state.notices.latest().unwrap().kind, NoticeKind::CopyFailed);
}

#[test]
fn test_download_with_empty_code_raises_notice_only() {
    let mut state = test_state();
    let result = update(&mut state, Message::DownloadCode);
    assert!(result.action.is_none());
    assert!(state.notices.contains(NoticeKind::NothingToDownload));
}

#[test]
fn test_download_targets_fixed_file_name() {
    let mut state = state_with_code("<form/>");
    state.settings.output.directory = Some(PathBuf::from("/tmp/genui-out"));

    let result = update(&mut state, Message::DownloadCode);
    assert_eq!(
        result.action,
        Some(UpdateAction::SaveCode {
            code: "<form/>".to_string(),
            path: PathBuf::from("/tmp/genui-out/GenUI-Code.html"),
        })
    );
}

#[test]
fn test_download_completed_notices() {
    let mut state = test_state();
    let path = PathBuf::from("/tmp/GenUI-Code.html");

    update(
        &mut state,
        Message::DownloadCompleted {
            path: path.clone(),
            error: None,
        },
    );
    assert!(state.notices.contains(NoticeKind::Downloaded));

    update(
        &mut state,
        Message::DownloadCompleted {
            path,
            error: Some("read-only file system".to_string()),
        },
    );
    let notice = state.notices.latest().unwrap();
    assert_eq!(notice.kind, NoticeKind::DownloadFailed);
    assert!(notice.message.contains("read-only"));
}

#[test]
fn test_open_in_browser_uses_configured_browser() {
    let mut state = state_with_code("<aside/>");
    state.settings.ui.browser = "firefox".to_string();

    match update(&mut state, Message::OpenInBrowser).action {
        Some(UpdateAction::OpenInBrowser { code, browser, .. }) => {
            assert_eq!(code, "<aside/>");
            assert_eq!(browser, "firefox");
        }
        other => panic!("expected OpenInBrowser, got {:?}", other),
    }
}

#[test]
fn test_browser_opened_notices() {
    let mut state = test_state();
    let path = PathBuf::from("/tmp/GenUI-Code.html");
    update(
        &mut state,
        Message::BrowserOpened {
            path: path.clone(),
            error: None,
        },
    );
    assert!(state.notices.contains(NoticeKind::OpenedInBrowser));

    update(
        &mut state,
        Message::BrowserOpened {
            path,
            error: Some("xdg-open not found".to_string()),
        },
    );
    assert_eq!(
        state.notices.latest().unwrap().kind,
        NoticeKind::BrowserOpenFailed
    );
}

// ─────────────────────────────────────────────────────────
// Theme / notices
// ─────────────────────────────────────────────────────────

#[test]
fn test_toggle_theme_persists_value() {
    let store = MemoryThemeStore::new(None);
    let probe = store.clone();
    let mut state = AppState::new(
        Settings::default(),
        PathBuf::from("/tmp"),
        ThemeController::new(Box::new(store)),
    );
    assert!(!state.is_dark());

    let msg = handle_key(&state, InputKey::CharCtrl('t')).unwrap();
    update(&mut state, msg);
    assert!(state.is_dark());
    assert_eq!(probe.load().unwrap(), Some(ThemeMode::Dark));

    update(&mut state, Message::ToggleTheme);
    assert_eq!(probe.load().unwrap(), Some(ThemeMode::Light));
}

#[test]
fn test_tick_expires_notices() {
    let mut settings = Settings::default();
    settings.ui.notice_duration_ms = 0;
    let mut state = AppState::new(
        settings,
        PathBuf::from("/tmp"),
        ThemeController::in_memory(ThemeMode::Light),
    );
    update(&mut state, Message::CopyCode);
    assert_eq!(state.notices.len(), 1);

    update(&mut state, Message::Tick);
    assert!(state.notices.is_empty());
}

#[test]
fn test_paste_only_lands_in_focused_prompt() {
    let mut state = test_state();
    update(&mut state, Message::PromptPaste("a hero\r\nsection".to_string()));
    assert_eq!(state.prompt.text(), "a hero\nsection");

    state.focus = Focus::Output;
    update(&mut state, Message::PromptPaste("ignored".to_string()));
    assert_eq!(state.prompt.text(), "a hero\nsection");
}
