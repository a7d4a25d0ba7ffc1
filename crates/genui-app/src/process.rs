//! Message processing
//!
//! Runs a message through the TEA update function, follows any chained
//! messages and dispatches the resulting actions.

use tokio::sync::mpsc;

use genui_client::TextGenerator;

use crate::actions::{handle_action, ActionServices};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<G>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    services: &mut ActionServices<G>,
) where
    G: TextGenerator + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), services);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
