//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use genui_client::{GeminiClient, GenerationService, TextGenerator};

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::view_state::GenerationTicket;

pub mod browser;
pub mod clipboard;
pub mod download;
pub mod generation;

pub use browser::open_url_in_browser;
pub use clipboard::{ClipboardSink, SystemClipboard};
pub use download::save_code;

/// Long-lived resources the action handlers need
pub struct ActionServices<G = GeminiClient> {
    /// Shared with every spawned generation task
    pub generation: Arc<GenerationService<G>>,

    pub clipboard: Box<dyn ClipboardSink>,

    /// The in-flight generation task, if any
    generation_task: Option<(GenerationTicket, JoinHandle<()>)>,
}

impl<G> std::fmt::Debug for ActionServices<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionServices")
            .field(
                "generation_task",
                &self.generation_task.as_ref().map(|(ticket, _)| ticket),
            )
            .finish_non_exhaustive()
    }
}

impl<G> ActionServices<G>
where
    G: TextGenerator + Sync + 'static,
{
    pub fn new(generation: GenerationService<G>, clipboard: Box<dyn ClipboardSink>) -> Self {
        Self {
            generation: Arc::new(generation),
            clipboard,
            generation_task: None,
        }
    }

    /// Ticket of the task still running, if any
    pub fn running_ticket(&self) -> Option<GenerationTicket> {
        self.generation_task
            .as_ref()
            .filter(|(_, handle)| !handle.is_finished())
            .map(|(ticket, _)| *ticket)
    }

    /// Abort the in-flight generation task
    pub fn abort_generation(&mut self) {
        if let Some((ticket, handle)) = self.generation_task.take() {
            if !handle.is_finished() {
                debug!("Aborting generation task #{}", ticket);
                handle.abort();
            }
        }
    }
}

/// Execute an action, spawning background work where needed
pub fn handle_action<G>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    services: &mut ActionServices<G>,
) where
    G: TextGenerator + Sync + 'static,
{
    match action {
        UpdateAction::SpawnGeneration { ticket, request } => {
            // Only one generation may run; the handler rejects overlapping submits
            services.abort_generation();
            let handle =
                generation::spawn_generation(services.generation.clone(), ticket, request, msg_tx);
            services.generation_task = Some((ticket, handle));
        }

        UpdateAction::CancelGeneration { ticket } => match &services.generation_task {
            Some((running, _)) if *running == ticket => services.abort_generation(),
            _ => debug!("No running task for cancelled generation #{}", ticket),
        },

        UpdateAction::CopyToClipboard { code } => {
            let error = services
                .clipboard
                .set_text(&code)
                .err()
                .map(|e| e.to_string());
            if msg_tx.try_send(Message::CopyCompleted { error }).is_err() {
                warn!("Failed to report clipboard result: channel full or closed");
            }
        }

        UpdateAction::SaveCode { code, path } => {
            download::spawn_save(code, path, msg_tx);
        }

        UpdateAction::OpenInBrowser {
            code,
            path,
            browser,
        } => {
            browser::spawn_open_in_browser(code, path, browser, msg_tx);
        }
    }
}
