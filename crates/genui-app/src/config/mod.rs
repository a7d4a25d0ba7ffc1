//! Configuration file parsing for GenUI Studio
//!
//! Supports:
//! - `config.toml` - Global settings (API, output, UI)
//! - `preferences.toml` - State written back by the app (theme)

pub mod settings;
pub mod types;
pub mod writer;

pub use settings::{
    default_config_dir, init_config_dir, load_settings, load_user_preferences,
    save_user_preferences, CONFIG_FILENAME, PREFERENCES_FILENAME,
};
pub use types::*;
pub use writer::write_atomic;
