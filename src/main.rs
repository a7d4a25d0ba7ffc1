//! GenUI Studio - describe a web component, let Gemini write it
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::eyre;
use genui_app::config::{default_config_dir, load_settings};
use genui_app::Engine;
use genui_core::{Framework, GenerationRequest};

/// GenUI Studio - generate HTML components with Gemini from the terminal
#[derive(Parser, Debug)]
#[command(name = "genui")]
#[command(about = "Generate web components with Gemini and preview them in the terminal", long_about = None)]
struct Args {
    /// Run one generation and print NDJSON events (no TUI)
    #[arg(long, requires = "prompt")]
    headless: bool,

    /// Component description (headless mode)
    #[arg(long, value_name = "TEXT")]
    prompt: Option<String>,

    /// Target framework, e.g. html-tailwind
    #[arg(long, value_name = "VALUE")]
    framework: Option<String>,

    /// Write the generated code here instead of printing it (headless mode)
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Configuration directory (default: ~/.config/genui-studio)
    #[arg(long, value_name = "PATH")]
    config_dir: Option<PathBuf>,

    /// Gemini model to use
    #[arg(long, value_name = "NAME")]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if let Err(e) = genui_core::logging::init() {
        eprintln!("Logging disabled: {}", e);
    }

    let config_dir = args.config_dir.unwrap_or_else(default_config_dir);
    let mut settings = load_settings(&config_dir);

    if let Some(model) = args.model {
        settings.api.model = model;
    }
    if let Some(framework) = args.framework.as_deref() {
        settings.ui.default_framework = framework.parse::<Framework>()?;
    }

    if args.headless {
        let prompt = args
            .prompt
            .ok_or_else(|| eyre!("--headless requires --prompt"))?;
        let request = GenerationRequest::new(prompt, settings.ui.default_framework);
        let ok = genui_studio::run_headless(settings, request, args.output).await?;
        if !ok {
            std::process::exit(1);
        }
        return Ok(());
    }

    let engine = Engine::new(config_dir, settings)?;
    genui_tui::run(engine).await?;
    Ok(())
}
