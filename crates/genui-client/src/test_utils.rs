//! Test utilities for generation
//!
//! Provides a scripted [`TextGenerator`] that records what it was asked.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use genui_core::{Error, Result};

use crate::generator::TextGenerator;

#[derive(Debug, Clone)]
enum Reply {
    Text(String),
    Status { status: u16, message: String },
    Transport(String),
}

/// Generator returning the same scripted reply on every call
#[derive(Debug)]
pub struct ScriptedGenerator {
    reply: Reply,
    delay: Option<Duration>,
    calls: AtomicUsize,
    last_instruction: Mutex<Option<String>>,
}

impl ScriptedGenerator {
    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            delay: None,
            calls: AtomicUsize::new(0),
            last_instruction: Mutex::new(None),
        }
    }

    /// Succeeds with `raw_text`
    pub fn replying(raw_text: impl Into<String>) -> Self {
        Self::with_reply(Reply::Text(raw_text.into()))
    }

    /// Fails with a `RemoteCall` error
    pub fn failing_with_status(status: u16, message: impl Into<String>) -> Self {
        Self::with_reply(Reply::Status {
            status,
            message: message.into(),
        })
    }

    /// Fails with a `Transport` error
    pub fn failing_transport(message: impl Into<String>) -> Self {
        Self::with_reply(Reply::Transport(message.into()))
    }

    /// Wait before replying (for cancellation and pending-state tests)
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_instruction(&self) -> Option<String> {
        self.last_instruction
            .lock()
            .ok()
            .and_then(|guard| guard.clone())
    }
}

impl TextGenerator for ScriptedGenerator {
    async fn complete(&self, instruction: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.last_instruction.lock() {
            *guard = Some(instruction.to_string());
        }

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Status { status, message } => Err(Error::remote_call(*status, message.clone())),
            Reply::Transport(message) => Err(Error::transport(message.clone())),
        }
    }

    fn model(&self) -> &str {
        "scripted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_generator_records_calls() {
        let generator = ScriptedGenerator::replying("ok");
        assert_eq!(generator.call_count(), 0);

        assert_eq!(generator.complete("first").await.unwrap(), "ok");
        assert_eq!(generator.complete("second").await.unwrap(), "ok");

        assert_eq!(generator.call_count(), 2);
        assert_eq!(generator.last_instruction().as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn test_scripted_generator_failures() {
        let generator = ScriptedGenerator::failing_with_status(429, "quota");
        assert!(matches!(
            generator.complete("x").await,
            Err(Error::RemoteCall { status: 429, .. })
        ));
    }
}
