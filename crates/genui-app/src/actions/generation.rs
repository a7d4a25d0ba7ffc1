//! Background generation task

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use genui_client::{GenerationService, TextGenerator};
use genui_core::GenerationRequest;

use crate::message::Message;
use crate::view_state::GenerationTicket;

/// Run one generation and report the result tagged with its ticket
pub fn spawn_generation<G>(
    service: Arc<GenerationService<G>>,
    ticket: GenerationTicket,
    request: GenerationRequest,
    msg_tx: mpsc::Sender<Message>,
) -> JoinHandle<()>
where
    G: TextGenerator + Sync + 'static,
{
    tokio::spawn(async move {
        debug!("Generation task #{} started", ticket);
        let result = service.generate(&request).await;

        if msg_tx
            .send(Message::GenerationCompleted { ticket, result })
            .await
            .is_err()
        {
            warn!("Generation #{} finished after the event loop closed", ticket);
        }
    })
}
