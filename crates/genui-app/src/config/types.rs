//! Configuration types for GenUI Studio
//!
//! Defines:
//! - `Settings` - Global application settings (`config.toml`)
//! - `UserPreferences` - Per-user state written by the app (`preferences.toml`)

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use genui_client::{
    GeminiConfig, DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT_SECS,
    DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS,
};
use genui_core::{Framework, DOWNLOAD_FILE_NAME};

/// Global settings from config.toml
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub output: OutputSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Gemini API settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Model name used in `/v1beta/models/{model}:generateContent`
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Explicit API key. Takes precedence over `api_key_env`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Whole-request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            api_key: None,
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Where downloaded code is written
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputSettings {
    /// Output directory; `None` means the current working directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,

    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: None,
            file_name: default_file_name(),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// How long a toast stays on screen
    #[serde(default = "default_notice_duration_ms")]
    pub notice_duration_ms: u64,

    /// Browser command for "open in browser" (empty = system default)
    #[serde(default)]
    pub browser: String,

    /// Framework selected at startup
    #[serde(default)]
    pub default_framework: Framework,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            notice_duration_ms: default_notice_duration_ms(),
            browser: String::new(),
            default_framework: Framework::default(),
        }
    }
}

/// User-specific state written back by the app (preferences.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserPreferences {
    /// Persisted theme slot: "dark" or "light"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_file_name() -> String {
    DOWNLOAD_FILE_NAME.to_string()
}

fn default_notice_duration_ms() -> u64 {
    3000
}

impl Settings {
    /// API key from settings, falling back to the configured env var
    pub fn resolve_api_key(&self) -> Option<String> {
        if let Some(key) = self.api.api_key.as_deref().map(str::trim) {
            if !key.is_empty() {
                return Some(key.to_string());
            }
        }

        std::env::var(&self.api.api_key_env)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// Client configuration with the API key resolved
    pub fn gemini_config(&self) -> GeminiConfig {
        GeminiConfig {
            base_url: self.api.base_url.clone(),
            model: self.api.model.clone(),
            api_key: self.resolve_api_key(),
            api_key_env: self.api.api_key_env.clone(),
            timeout: Duration::from_secs(self.api.timeout_secs.max(1)),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    /// Full path of the download target
    pub fn output_path(&self) -> PathBuf {
        let dir = self
            .output
            .directory
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let name = if self.output.file_name.trim().is_empty() {
            DOWNLOAD_FILE_NAME
        } else {
            self.output.file_name.as_str()
        };
        dir.join(name)
    }

    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.ui.notice_duration_ms)
    }
}
