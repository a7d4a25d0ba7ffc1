//! Submit, completion and cancel handlers

use genui_core::GenerationResult;
use tracing::{debug, info, warn};

use crate::notice::NoticeKind;
use crate::state::AppState;
use crate::view_state::{GenerationOutcome, GenerationTicket};

use super::{UpdateAction, UpdateResult};

/// Validate the prompt and start a generation
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    let request = state.current_request();

    if let Err(e) = request.validate() {
        state.notices.push_message(NoticeKind::EmptyPrompt, e.to_string());
        return UpdateResult::none();
    }

    let Some(ticket) = state.output.begin_generation(request.clone()) else {
        debug!("Submit ignored: a generation is already pending");
        return UpdateResult::none();
    };

    info!("Submitting generation #{} ({})", ticket, request.framework);
    UpdateResult::action(UpdateAction::SpawnGeneration { ticket, request })
}

/// Apply a finished generation if its ticket is still current
pub fn handle_completed(
    state: &mut AppState,
    ticket: GenerationTicket,
    result: GenerationResult,
) -> UpdateResult {
    match state.output.complete_generation(ticket, result) {
        GenerationOutcome::Applied => {
            info!(
                "Generation #{} applied ({} bytes)",
                ticket,
                state.output.code().len()
            );
        }
        GenerationOutcome::Failed(message) => {
            warn!("Generation #{} failed: {}", ticket, message);
            state
                .notices
                .push_message(NoticeKind::GenerationFailed, message);
        }
        GenerationOutcome::Stale => {
            debug!("Discarding stale result for generation #{}", ticket);
        }
    }
    UpdateResult::none()
}

/// Abandon the pending generation, if any
pub fn handle_cancel(state: &mut AppState) -> UpdateResult {
    match state.output.cancel_generation() {
        Some(ticket) => {
            info!("Generation #{} cancelled", ticket);
            state.notices.push(NoticeKind::GenerationCancelled);
            UpdateResult::action(UpdateAction::CancelGeneration { ticket })
        }
        None => UpdateResult::none(),
    }
}
