//! Headless mode - one generation, reported as NDJSON on stdout
//!
//! Scripts and tests drive GenUI without a terminal UI. Each line of output
//! is one JSON object with an `event` field.
//!
//! # Example Output
//!
//! ```json
//! {"event":"generation_started","framework":"html-tailwind","model":"gemini-2.5-flash","timestamp":1704700001000}
//! {"event":"generation_succeeded","framework":"html-tailwind","bytes":412,"duration_ms":5120,"timestamp":1704700006120}
//! {"event":"file_saved","path":"./GenUI-Code.html","timestamp":1704700006121}
//! ```

pub mod runner;

use std::io::{self, Write};

use chrono::Utc;
use serde::Serialize;
use tracing::error;

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Generation requested
    GenerationStarted {
        framework: String,
        model: String,
        timestamp: i64,
    },

    /// Code extracted from the model reply
    GenerationSucceeded {
        framework: String,
        bytes: usize,
        /// Present when the code is not written to a file
        #[serde(skip_serializing_if = "Option::is_none")]
        code: Option<String>,
        duration_ms: u64,
        timestamp: i64,
    },

    /// Validation, remote or transport failure
    GenerationFailed {
        error: String,
        duration_ms: u64,
        timestamp: i64,
    },

    /// Code written to `--output`
    FileSaved { path: String, timestamp: i64 },

    /// Writing `--output` failed
    SaveFailed {
        path: String,
        error: String,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let mut stdout = io::stdout().lock();
        self.write_to(&mut stdout);
    }

    /// Write this event as one NDJSON line
    pub fn write_to<W: Write>(&self, out: &mut W) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        if let Err(e) = writeln!(out, "{}", json) {
            error!("Failed to write headless event: {}", e);
            return;
        }

        // Flush to ensure immediate output
        if let Err(e) = out.flush() {
            error!("Failed to flush headless output: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn generation_started(framework: &str, model: &str) -> Self {
        Self::GenerationStarted {
            framework: framework.to_string(),
            model: model.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn generation_succeeded(
        framework: &str,
        code: &str,
        include_code: bool,
        duration_ms: u64,
    ) -> Self {
        Self::GenerationSucceeded {
            framework: framework.to_string(),
            bytes: code.len(),
            code: include_code.then(|| code.to_string()),
            duration_ms,
            timestamp: Self::now(),
        }
    }

    pub fn generation_failed(error: String, duration_ms: u64) -> Self {
        Self::GenerationFailed {
            error,
            duration_ms,
            timestamp: Self::now(),
        }
    }

    pub fn file_saved(path: &str) -> Self {
        Self::FileSaved {
            path: path.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn save_failed(path: &str, error: String) -> Self {
        Self::SaveFailed {
            path: path.to_string(),
            error,
            timestamp: Self::now(),
        }
    }
}
