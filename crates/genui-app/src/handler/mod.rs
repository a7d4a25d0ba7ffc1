//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per focused panel
//! - `generation`: Submit, completion and cancel handlers
//! - `output`: Tab, preview, fullscreen and scroll handlers
//! - `side_effects`: Copy, download and browser handlers

pub(crate) mod generation;
pub(crate) mod keys;
pub(crate) mod output;
pub(crate) mod side_effects;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use genui_core::GenerationRequest;

use crate::message::Message;
use crate::view_state::GenerationTicket;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Run the generation service in a background task
    SpawnGeneration {
        ticket: GenerationTicket,
        request: GenerationRequest,
    },

    /// Abort the in-flight generation task
    CancelGeneration { ticket: GenerationTicket },

    /// Write code to the system clipboard
    CopyToClipboard { code: String },

    /// Write code to `path`
    SaveCode { code: String, path: PathBuf },

    /// Write code to `path`, then open it with `browser` (empty = system default)
    OpenInBrowser {
        code: String,
        path: PathBuf,
        browser: String,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
