//! # genui-app - Application State and Orchestration
//!
//! This crate implements the TEA (The Elm Architecture) pattern for GenUI
//! Studio. It owns the prompt/framework/output state, the theme preference,
//! transient notices and the engine that dispatches side effects.
//!
//! ## Architecture
//!
//! - **Model**: [`state::AppState`] - Complete application state
//! - **Message**: [`message::Message`] - All possible events/actions
//! - **Update**: [`handler::update()`] - Pure state transition function
//! - **Actions**: [`handler::UpdateAction`] - Side effects run by [`actions::handle_action()`]
//!
//! ## Public API
//!
//! ### Engine
//! - [`Engine`] - Owns state, message channel and action services
//!
//! ### Output State
//! - [`ViewController`] - Output pane state machine (generate, reveal, tabs, fullscreen)
//! - [`ThemeController`] - Persisted light/dark preference with `watch` notification
//! - [`NoticeQueue`] - Transient toasts
//!
//! ### Configuration
//! - [`config::Settings`] - `config.toml`
//! - [`config::load_settings()`] / [`config::default_config_dir()`]

pub mod actions;
pub mod config;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod notice;
pub mod process;
pub mod prompt_input;
pub mod scroll_state;
pub mod signals;
pub mod state;
pub mod theme;
pub mod view_state;

pub use engine::Engine;
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use notice::{Notice, NoticeKind, NoticeLevel, NoticeQueue};
pub use prompt_input::PromptInput;
pub use scroll_state::ScrollState;
pub use state::{AppPhase, AppState, Focus};
pub use theme::{FileThemeStore, MemoryThemeStore, ThemeController, ThemeReceiver, ThemeStore};
pub use view_state::{
    GenerationOutcome, GenerationTicket, OutputTab, PendingGeneration, ViewController, ViewState,
};
