//! # genui-client - Gemini Client and Generation Service
//!
//! Talks to Google Gemini's `generateContent` REST endpoint and wraps it in a
//! [`GenerationService`] that validates requests, builds the instruction and
//! extracts the generated code.
//!
//! Depends on [`genui_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Generation
//! - [`GenerationService`] - Validate, prompt, call once, extract
//! - [`TextGenerator`] - Async seam for the remote model (`Send` variant of [`LocalTextGenerator`])
//!
//! ### Gemini
//! - [`GeminiClient`] - reqwest-based client for `POST /v1beta/models/{model}:generateContent`
//! - [`GeminiConfig`] - Base URL, model, API key and timeouts
//!
//! ### Wire Format
//! - [`raw_text()`] - Ordered fallback decode of a response body
//! - [`build_instruction()`] - Instruction text for a request

pub mod gemini;
pub mod generator;
pub mod prompt;
pub mod response;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use gemini::{
    GeminiClient, GeminiConfig, DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL,
    DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS,
};
pub use generator::{GenerationService, LocalTextGenerator, TextGenerator};
pub use prompt::build_instruction;
pub use response::{raw_text, GenerateContentRequest, GenerateContentResponse};
