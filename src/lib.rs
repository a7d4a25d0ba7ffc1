//! GenUI Studio Library
//!
//! Entry points shared by the `genui` binary: the headless runner. The TUI
//! lives in `genui-tui`, state and actions in `genui-app`.

pub mod headless;

// Re-export main entry points
pub use headless::runner::run_headless;
