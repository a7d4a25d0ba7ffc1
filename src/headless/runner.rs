//! Headless mode runner - a single generation without the TUI

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use genui_app::actions::save_code;
use genui_app::config::Settings;
use genui_client::{GeminiClient, GenerationService, TextGenerator};
use genui_core::prelude::*;
use genui_core::GenerationRequest;

use super::HeadlessEvent;

/// Run one generation against Gemini and report it on stdout
///
/// Returns `Ok(false)` when the generation or the save failed; the caller
/// turns that into a non-zero exit status.
pub async fn run_headless(
    settings: Settings,
    request: GenerationRequest,
    output: Option<PathBuf>,
) -> Result<bool> {
    info!("═══════════════════════════════════════════════════════");
    info!("GenUI Studio starting in HEADLESS mode");
    info!("Framework: {}, model: {}", request.framework, settings.api.model);
    info!("═══════════════════════════════════════════════════════");

    let client = GeminiClient::new(settings.gemini_config())?;
    let service = GenerationService::new(client);

    let mut stdout = io::stdout().lock();
    let ok = run_once(&service, &request, output.as_deref(), &mut stdout).await;

    info!("GenUI Studio headless mode exiting (success={})", ok);
    Ok(ok)
}

/// Generate, optionally save, and write NDJSON events to `out`
pub async fn run_once<G, W>(
    service: &GenerationService<G>,
    request: &GenerationRequest,
    output: Option<&Path>,
    out: &mut W,
) -> bool
where
    G: TextGenerator + Sync,
    W: Write,
{
    let framework = request.framework.as_str();
    let started = Instant::now();

    HeadlessEvent::generation_started(framework, service.generator().model()).write_to(out);

    let code = match service.try_generate(request).await {
        Ok(code) => code,
        Err(e) => {
            HeadlessEvent::generation_failed(e.to_string(), elapsed_ms(started)).write_to(out);
            return false;
        }
    };

    HeadlessEvent::generation_succeeded(framework, &code, output.is_none(), elapsed_ms(started))
        .write_to(out);

    let Some(path) = output else {
        return true;
    };

    let shown = path.display().to_string();
    match save_code(path, &code) {
        Ok(()) => {
            HeadlessEvent::file_saved(&shown).write_to(out);
            true
        }
        Err(e) => {
            error!("Headless save failed: {}", e);
            HeadlessEvent::save_failed(&shown, e.to_string()).write_to(out);
            false
        }
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}
