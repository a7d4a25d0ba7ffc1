//! HTTP client for the Gemini `generateContent` endpoint

use std::time::Duration;

use url::Url;

use genui_core::prelude::*;

use crate::generator::TextGenerator;
use crate::response::{self, GenerateContentRequest};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Connection settings for [`GeminiClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    pub base_url: String,
    pub model: String,
    /// Resolved API key; `None` fails every call with `MissingApiKey`
    pub api_key: Option<String>,
    /// Environment variable the key was looked up in (for error messages)
    pub api_key_env: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

/// Gemini REST client
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| Error::transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// `{base_url}/v1beta/models/{model}:generateContent`
    pub fn endpoint(&self) -> Result<Url> {
        let raw = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        );
        Url::parse(&raw).map_err(|e| Error::config(format!("invalid Gemini URL '{}': {}", raw, e)))
    }

    fn api_key(&self) -> Result<&str> {
        self.config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::missing_api_key(&self.config.api_key_env))
    }

    /// Send one instruction and return the raw model text
    pub async fn generate_content(&self, instruction: &str) -> Result<String> {
        let api_key = self.api_key()?;
        let url = self.endpoint()?;

        debug!(
            "POST {} (model={}, {} chars)",
            url.path(),
            self.config.model,
            instruction.len()
        );

        let response = self
            .http
            .post(url)
            .header(API_KEY_HEADER, api_key)
            .json(&GenerateContentRequest::from_text(instruction))
            .send()
            .await
            .map_err(|e| Error::transport(describe_transport_error(&e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::transport(describe_transport_error(&e)))?;

        if !status.is_success() {
            let message = response::error_message(&body).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("unexpected response")
                    .to_string()
            });
            warn!("Gemini returned {}: {}", status.as_u16(), message);
            return Err(Error::remote_call(status.as_u16(), message));
        }

        match serde_json::from_str::<serde_json::Value>(&body) {
            Ok(value) => Ok(response::raw_text(&value)),
            Err(e) => {
                warn!("Gemini response was not JSON ({}), using body as text", e);
                Ok(body)
            }
        }
    }
}

impl TextGenerator for GeminiClient {
    async fn complete(&self, instruction: &str) -> Result<String> {
        self.generate_content(instruction).await
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}

fn describe_transport_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "request timed out".to_string()
    } else if e.is_connect() {
        format!("connection failed: {}", e)
    } else {
        e.to_string()
    }
}
