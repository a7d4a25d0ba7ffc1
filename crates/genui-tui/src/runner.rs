//! Main TUI runner - terminal lifecycle and event loop

use genui_app::Engine;
use genui_client::TextGenerator;
use genui_core::prelude::*;

use crate::theme::ThemeTracker;
use crate::{event, render, terminal};

/// Run the TUI until the user quits
pub async fn run<G>(mut engine: Engine<G>) -> Result<()>
where
    G: TextGenerator + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = terminal::init();
    info!(
        "GenUI Studio starting (model {})",
        engine.state.settings.api.model
    );

    let mut theme = ThemeTracker::new(engine.theme_receiver());
    let result = run_loop(&mut term, &mut engine, &mut theme);

    engine.shutdown();
    terminal::restore();

    result
}

fn run_loop<G>(
    terminal: &mut ratatui::DefaultTerminal,
    engine: &mut Engine<G>,
    theme: &mut ThemeTracker,
) -> Result<()>
where
    G: TextGenerator + Sync + 'static,
{
    while !engine.should_quit() {
        // Results from action tasks and the signal handler
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &mut engine.state, theme))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
