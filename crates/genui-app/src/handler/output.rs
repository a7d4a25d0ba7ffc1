//! Output pane handlers: tabs, preview refresh, fullscreen and scrolling

use tracing::debug;

use crate::state::AppState;
use crate::view_state::OutputTab;

use super::UpdateResult;

pub fn handle_switch_tab(state: &mut AppState) -> UpdateResult {
    state.output.switch_tab();
    UpdateResult::none()
}

pub fn handle_select_tab(state: &mut AppState, tab: OutputTab) -> UpdateResult {
    state.output.select_tab(tab);
    UpdateResult::none()
}

pub fn handle_refresh_preview(state: &mut AppState) -> UpdateResult {
    let epoch = state.output.refresh_preview();
    debug!("Preview refreshed (epoch {})", epoch);
    UpdateResult::none()
}

pub fn handle_open_fullscreen(state: &mut AppState) -> UpdateResult {
    if !state.output.open_fullscreen() {
        debug!("Fullscreen ignored: no output to show");
    }
    UpdateResult::none()
}

pub fn handle_close_fullscreen(state: &mut AppState) -> UpdateResult {
    state.output.close_fullscreen();
    UpdateResult::none()
}

pub fn handle_scroll_up(state: &mut AppState) -> UpdateResult {
    state.output.active_scroll_mut().scroll_up(1);
    UpdateResult::none()
}

pub fn handle_scroll_down(state: &mut AppState) -> UpdateResult {
    state.output.active_scroll_mut().scroll_down(1);
    UpdateResult::none()
}

pub fn handle_page_up(state: &mut AppState) -> UpdateResult {
    state.output.active_scroll_mut().page_up();
    UpdateResult::none()
}

pub fn handle_page_down(state: &mut AppState) -> UpdateResult {
    state.output.active_scroll_mut().page_down();
    UpdateResult::none()
}

pub fn handle_scroll_to_top(state: &mut AppState) -> UpdateResult {
    state.output.active_scroll_mut().scroll_to_top();
    UpdateResult::none()
}

pub fn handle_scroll_to_bottom(state: &mut AppState) -> UpdateResult {
    state.output.active_scroll_mut().scroll_to_bottom();
    UpdateResult::none()
}
