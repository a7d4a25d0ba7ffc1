//! Settings and preferences loading
//!
//! Both files live in the config directory
//! (`~/.config/genui-studio/` unless overridden on the command line).

use std::path::{Path, PathBuf};

use genui_core::prelude::*;

use super::types::{Settings, UserPreferences};
use super::writer::write_atomic;

pub const APP_DIR_NAME: &str = "genui-studio";
pub const CONFIG_FILENAME: &str = "config.toml";
pub const PREFERENCES_FILENAME: &str = "preferences.toml";

/// Default config directory: `<config_dir>/genui-studio`
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(".").join(format!(".{}", APP_DIR_NAME)))
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings
// ─────────────────────────────────────────────────────────────────────────────

/// Load settings from config.toml
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(config_dir: &Path) -> Settings {
    let config_path = config_dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create config.toml with commented defaults if it is missing
pub fn init_config_dir(config_dir: &Path) -> Result<()> {
    let config_path = config_dir.join(CONFIG_FILENAME);
    if config_path.exists() {
        return Ok(());
    }

    write_atomic(config_dir, CONFIG_FILENAME, &generate_default_config())
        .with_context(|| format!("Failed to create {}", config_path.display()))?;
    info!("Created default config at {:?}", config_path);
    Ok(())
}

fn generate_default_config() -> String {
    r#"# GenUI Studio Configuration

[api]
model = "gemini-2.5-flash"
base_url = "https://generativelanguage.googleapis.com"
# api_key = ""                # Leave unset to read the key from api_key_env
api_key_env = "GEMINI_API_KEY"
timeout_secs = 120

[output]
# directory = "/path/to/dir"  # Defaults to the current directory
file_name = "GenUI-Code.html"

[ui]
notice_duration_ms = 3000
browser = ""                  # Empty = system default
default_framework = "html-css"
"#
    .to_string()
}

// ─────────────────────────────────────────────────────────────────────────────
// User Preferences
// ─────────────────────────────────────────────────────────────────────────────

/// Load user preferences from preferences.toml
///
/// Returns None if the file doesn't exist (not an error - first run)
pub fn load_user_preferences(config_dir: &Path) -> Option<UserPreferences> {
    let prefs_path = config_dir.join(PREFERENCES_FILENAME);

    if !prefs_path.exists() {
        debug!("No preferences file at {:?}", prefs_path);
        return None;
    }

    match std::fs::read_to_string(&prefs_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(prefs) => {
                debug!("Loaded user preferences from {:?}", prefs_path);
                Some(prefs)
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", prefs_path, e);
                None
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", prefs_path, e);
            None
        }
    }
}

/// Save user preferences to preferences.toml
pub fn save_user_preferences(config_dir: &Path, prefs: &UserPreferences) -> Result<()> {
    let header = "# GenUI Studio preferences (written by the app)\n\n";
    let content = toml::to_string_pretty(prefs)
        .map_err(|e| Error::config(format!("Failed to serialize preferences: {}", e)))?;

    write_atomic(
        config_dir,
        PREFERENCES_FILENAME,
        &format!("{}{}", header, content),
    )?;

    debug!(
        "Saved user preferences to {:?}",
        config_dir.join(PREFERENCES_FILENAME)
    );
    Ok(())
}
