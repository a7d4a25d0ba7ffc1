//! Generation service
//!
//! [`GenerationService`] turns a [`GenerationRequest`] into a
//! [`GenerationResult`]: validate, build the instruction, call the model once,
//! extract the code. The model itself sits behind the [`TextGenerator`] trait
//! so tests and headless runs can substitute their own.

use genui_core::prelude::*;
use genui_core::{extract, GenerationRequest, GenerationResult};

use crate::prompt::build_instruction;

/// Remote text generation
#[trait_variant::make(TextGenerator: Send)]
pub trait LocalTextGenerator {
    /// Run one completion and return the raw model text
    async fn complete(&self, instruction: &str) -> Result<String>;

    /// Model identifier, for logging
    fn model(&self) -> &str;
}

/// Validates requests and drives a [`TextGenerator`]
#[derive(Debug, Clone)]
pub struct GenerationService<G> {
    generator: G,
}

impl<G: TextGenerator + Sync> GenerationService<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Generate code for a request
    ///
    /// Blank prompts fail before any remote call. Remote failures are
    /// reported through the result, never propagated.
    pub async fn generate(&self, request: &GenerationRequest) -> GenerationResult {
        self.try_generate(request).await.into()
    }

    /// Same as [`generate`](Self::generate), keeping the typed error
    pub async fn try_generate(&self, request: &GenerationRequest) -> Result<String> {
        request.validate()?;

        let instruction = build_instruction(request);
        info!(
            "Generating {} component with {} ({} chars of prompt)",
            request.framework,
            self.generator.model(),
            request.prompt_text.trim().len()
        );

        match self.generator.complete(&instruction).await {
            Ok(raw) => {
                let code = extract(&raw);
                info!("Generation succeeded ({} bytes of code)", code.len());
                Ok(code)
            }
            Err(e) => {
                error!("Generation failed: {}", e);
                Err(e)
            }
        }
    }
}
