//! Message types for the application (TEA pattern)

use std::path::PathBuf;

use genui_core::{Framework, GenerationResult};

use crate::input_key::InputKey;
use crate::view_state::{GenerationTicket, OutputTab};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (notice expiry, spinner)
    Tick,

    /// Quit the application (Ctrl+C, signal handler)
    Quit,

    /// Show or hide the key binding overlay
    ToggleHelp,

    // ─────────────────────────────────────────────────────────
    // Focus
    // ─────────────────────────────────────────────────────────
    FocusNext,
    FocusPrev,

    // ─────────────────────────────────────────────────────────
    // Prompt Editor
    // ─────────────────────────────────────────────────────────
    PromptInput(char),
    /// Bracketed paste into the prompt
    PromptPaste(String),
    PromptNewline,
    PromptBackspace,
    PromptDelete,
    PromptCursorLeft,
    PromptCursorRight,
    PromptCursorUp,
    PromptCursorDown,
    PromptCursorHome,
    PromptCursorEnd,
    PromptClear,

    // ─────────────────────────────────────────────────────────
    // Framework Selector
    // ─────────────────────────────────────────────────────────
    NextFramework,
    PrevFramework,
    SelectFramework(Framework),

    // ─────────────────────────────────────────────────────────
    // Generation
    // ─────────────────────────────────────────────────────────
    /// Submit the current prompt
    Submit,
    /// A generation task finished
    GenerationCompleted {
        ticket: GenerationTicket,
        result: GenerationResult,
    },
    /// Abandon the pending generation
    CancelGeneration,

    // ─────────────────────────────────────────────────────────
    // Output View
    // ─────────────────────────────────────────────────────────
    SwitchTab,
    SelectTab(OutputTab),
    RefreshPreview,
    OpenFullscreen,
    CloseFullscreen,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollToTop,
    ScrollToBottom,

    // ─────────────────────────────────────────────────────────
    // Side Effects
    // ─────────────────────────────────────────────────────────
    CopyCode,
    CopyCompleted { error: Option<String> },
    DownloadCode,
    DownloadCompleted {
        path: PathBuf,
        error: Option<String>,
    },
    OpenInBrowser,
    BrowserOpened {
        path: PathBuf,
        error: Option<String>,
    },

    // ─────────────────────────────────────────────────────────
    // Theme
    // ─────────────────────────────────────────────────────────
    ToggleTheme,
}
