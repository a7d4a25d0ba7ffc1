//! Engine - shared orchestration state for the TUI runner
//!
//! Owns the TEA state, the message channel and the services that actions
//! run against (generation service, clipboard, in-flight task handle).

use std::path::{Path, PathBuf};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use genui_client::{GeminiClient, GenerationService, TextGenerator};
use genui_core::prelude::*;

use crate::actions::{ActionServices, SystemClipboard};
use crate::config::{self, Settings};
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;
use crate::theme::{FileThemeStore, ThemeController, ThemeReceiver};

/// Capacity of the unified message channel
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for GenUI Studio.
pub struct Engine<G = GeminiClient> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, action tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    services: ActionServices<G>,

    signal_task: Option<JoinHandle<()>>,
}

impl Engine<GeminiClient> {
    /// Create the engine for a configuration directory.
    ///
    /// - Initializes the config directory (non-fatal if it fails)
    /// - Builds the Gemini client from `settings`
    /// - Loads the persisted theme
    /// - Spawns the signal handler
    pub fn new(config_dir: PathBuf, settings: Settings) -> Result<Self> {
        if let Err(e) = config::init_config_dir(&config_dir) {
            warn!("Failed to initialize config directory: {}", e);
        }

        if settings.resolve_api_key().is_none() {
            warn!(
                "No Gemini API key found (set {} or api.api_key); generation will fail",
                settings.api.api_key_env
            );
        }

        let client = GeminiClient::new(settings.gemini_config())?;
        let theme = ThemeController::new(Box::new(FileThemeStore::new(&config_dir)));
        let state = AppState::new(settings, config_dir, theme);
        let services = ActionServices::new(
            GenerationService::new(client),
            Box::new(SystemClipboard::new()),
        );

        let mut engine = Self::with_services(state, services);
        engine.signal_task = Some(signals::spawn_signal_handler(engine.msg_tx.clone()));
        Ok(engine)
    }
}

impl<G> Engine<G>
where
    G: TextGenerator + Sync + 'static,
{
    /// Assemble an engine from prepared state and services
    pub fn with_services(state: AppState, services: ActionServices<G>) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);
        Self {
            state,
            msg_tx,
            msg_rx,
            services,
            signal_task: None,
        }
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(&mut self.state, msg, &self.msg_tx, &mut self.services);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message and process it; `false` once the channel closed
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Observe theme changes
    pub fn theme_receiver(&self) -> ThemeReceiver {
        self.state.theme.subscribe()
    }

    pub fn config_dir(&self) -> &Path {
        &self.state.config_dir
    }

    pub fn services(&self) -> &ActionServices<G> {
        &self.services
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Stop background work before exit
    pub fn shutdown(&mut self) {
        if let Some(ticket) = self.services.running_ticket() {
            info!("Abandoning generation #{} on shutdown", ticket);
        }
        self.services.abort_generation();
        if let Some(task) = self.signal_task.take() {
            task.abort();
        }
    }
}
