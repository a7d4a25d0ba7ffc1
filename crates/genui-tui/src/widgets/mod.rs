//! Custom widgets for the GenUI TUI

mod framework_selector;
mod fullscreen;
mod help;
pub mod modal_overlay;
mod navbar;
mod output_panel;
mod prompt_panel;
mod toasts;

pub use framework_selector::FrameworkSelector;
pub use fullscreen::FullscreenPreview;
pub use help::HelpOverlay;
pub use navbar::Navbar;
pub use output_panel::{spinner_frame, OutputPanel};
pub use prompt_panel::PromptPanel;
pub use toasts::Toasts;
