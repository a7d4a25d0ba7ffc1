//! Full-screen rendering tests for `render::view`

use super::*;
use crate::test_utils::{revealed_state, test_app_state, TestTerminal};
use crate::theme::palette::{DARK, LIGHT};
use genui_app::{NoticeKind, OutputTab};
use genui_core::{Framework, GenerationRequest};

fn draw(term: &mut TestTerminal, state: &mut AppState) {
    let mut theme = ThemeTracker::new(state.theme.subscribe());
    term.draw_with(|frame| view(frame, state, &mut theme));
}

const CARD: &str = "<!DOCTYPE html>\n<html>\n<head><title>Profile</title></head>\n<body>\n<h1>Jane Doe</h1>\n<p>Designer</p>\n</body>\n</html>";

#[test]
fn test_initial_screen() {
    let mut state = test_app_state();
    let mut term = TestTerminal::with_size(120, 40);
    draw(&mut term, &mut state);

    assert!(term.buffer_contains("GenUI"));
    assert!(term.buffer_contains("Framework"));
    assert!(term.buffer_contains("HTML + CSS"));
    assert!(term.buffer_contains("Describe the UI component"));
    assert!(term.buffer_contains("No component yet"));
}

#[test]
fn test_narrow_screen_stacks_panels() {
    let mut state = test_app_state();
    let mut term = TestTerminal::new();
    draw(&mut term, &mut state);

    assert!(term.buffer_contains("Prompt"));
    assert!(term.buffer_contains("Output"));
}

#[test]
fn test_background_follows_theme() {
    let mut state = test_app_state();
    let mut theme = ThemeTracker::new(state.theme.subscribe());
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, &mut state, &mut theme));
    assert_eq!(term.buffer()[(0, 0)].bg, LIGHT.card_bg);

    // The same tracker picks up the toggle from the controller's channel
    state.theme.toggle();
    term.draw_with(|frame| view(frame, &mut state, &mut theme));
    assert_eq!(term.buffer()[(0, 0)].bg, DARK.card_bg);
    assert!(term.buffer_contains("Dark"));
}

#[test]
fn test_selected_framework_shown() {
    let mut state = test_app_state();
    state.framework = Framework::HtmlBootstrap;
    let mut term = TestTerminal::with_size(120, 40);
    draw(&mut term, &mut state);

    assert!(term.buffer_contains("HTML + Bootstrap"));
}

#[test]
fn test_generating_screen() {
    let mut state = test_app_state();
    state.prompt.insert_str("hero section");
    state
        .output
        .begin_generation(GenerationRequest::new("hero section", Framework::HtmlTailwind))
        .unwrap();

    let mut term = TestTerminal::with_size(120, 40);
    draw(&mut term, &mut state);

    assert!(term.buffer_contains("Generating HTML + Tailwind CSS"));
    assert!(term.buffer_contains("hero section"));
}

#[test]
fn test_revealed_code_tab() {
    let mut state = revealed_state(CARD);
    let mut term = TestTerminal::with_size(120, 40);
    draw(&mut term, &mut state);

    assert!(term.buffer_contains("<h1>Jane Doe</h1>"));
    assert!(term.buffer_contains("Download"));
}

#[test]
fn test_revealed_preview_tab() {
    let mut state = revealed_state(CARD);
    state.output.select_tab(OutputTab::Preview);
    let mut term = TestTerminal::with_size(120, 40);
    draw(&mut term, &mut state);

    assert!(term.buffer_contains("Jane Doe"));
    assert!(term.buffer_contains("Designer"));
    assert!(!term.buffer_contains("<p>"));
}

#[test]
fn test_fullscreen_replaces_main_layout() {
    let mut state = revealed_state(CARD);
    state.output.open_fullscreen();
    let mut term = TestTerminal::with_size(120, 40);
    draw(&mut term, &mut state);

    assert!(term.buffer_contains("Preview: Profile"));
    assert!(!term.buffer_contains("Framework"));
}

#[test]
fn test_help_overlay() {
    let mut state = test_app_state();
    state.show_help = true;
    let mut term = TestTerminal::with_size(100, 34);
    draw(&mut term, &mut state);

    assert!(term.buffer_contains("Keys"));
    assert!(term.buffer_contains("Cancel generation"));
}

#[test]
fn test_notices_visible() {
    let mut state = test_app_state();
    state.notices.push(NoticeKind::EmptyPrompt);
    let mut term = TestTerminal::with_size(120, 40);
    draw(&mut term, &mut state);

    assert!(term.buffer_contains("Please describe your component first"));
}

#[test]
fn test_render_records_output_scroll_metrics() {
    let code: String = (0..100).map(|i| format!("<li>{i}</li>\n")).collect();
    let mut state = revealed_state(&code);
    let mut term = TestTerminal::with_size(120, 40);
    draw(&mut term, &mut state);

    assert_eq!(state.output.code_scroll.total_lines, 100);
    assert!(state.output.code_scroll.visible_lines > 0);
}
