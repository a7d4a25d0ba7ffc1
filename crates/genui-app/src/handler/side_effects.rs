//! Copy, download and open-in-browser handlers
//!
//! Each request checks for code first; empty code raises a notice and no
//! action is returned. Completion messages turn into success/error notices.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::notice::NoticeKind;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub fn handle_copy(state: &mut AppState) -> UpdateResult {
    if !state.output.has_code() {
        state.notices.push(NoticeKind::NothingToCopy);
        return UpdateResult::none();
    }

    UpdateResult::action(UpdateAction::CopyToClipboard {
        code: state.output.code().to_string(),
    })
}

pub fn handle_copy_completed(state: &mut AppState, error: Option<String>) -> UpdateResult {
    match error {
        None => state.notices.push(NoticeKind::Copied),
        Some(e) => {
            warn!("Clipboard write failed: {}", e);
            state.notices.push(NoticeKind::CopyFailed);
        }
    }
    UpdateResult::none()
}

pub fn handle_download(state: &mut AppState) -> UpdateResult {
    if !state.output.has_code() {
        state.notices.push(NoticeKind::NothingToDownload);
        return UpdateResult::none();
    }

    UpdateResult::action(UpdateAction::SaveCode {
        code: state.output.code().to_string(),
        path: state.settings.output_path(),
    })
}

pub fn handle_download_completed(
    state: &mut AppState,
    path: PathBuf,
    error: Option<String>,
) -> UpdateResult {
    match error {
        None => {
            info!("Saved generated code to {}", path.display());
            state.notices.push_message(
                NoticeKind::Downloaded,
                format!("File downloaded: {}", path.display()),
            );
        }
        Some(e) => {
            warn!("Saving {} failed: {}", path.display(), e);
            state
                .notices
                .push_message(NoticeKind::DownloadFailed, format!("Failed to save file: {}", e));
        }
    }
    UpdateResult::none()
}

pub fn handle_open_in_browser(state: &mut AppState) -> UpdateResult {
    if !state.output.has_code() {
        state.notices.push(NoticeKind::NothingToDownload);
        return UpdateResult::none();
    }

    UpdateResult::action(UpdateAction::OpenInBrowser {
        code: state.output.code().to_string(),
        path: state.settings.output_path(),
        browser: state.settings.ui.browser.clone(),
    })
}

pub fn handle_browser_opened(
    state: &mut AppState,
    path: PathBuf,
    error: Option<String>,
) -> UpdateResult {
    match error {
        None => {
            info!("Opened {} in browser", path.display());
            state.notices.push(NoticeKind::OpenedInBrowser);
        }
        Some(e) => {
            warn!("Opening {} in browser failed: {}", path.display(), e);
            state.notices.push_message(
                NoticeKind::BrowserOpenFailed,
                format!("Failed to open browser: {}", e),
            );
        }
    }
    UpdateResult::none()
}
