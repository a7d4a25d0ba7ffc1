//! Application state (Model in TEA pattern)

use std::path::PathBuf;

use genui_core::{Framework, GenerationRequest};

use crate::config::Settings;
use crate::notice::NoticeQueue;
use crate::prompt_input::PromptInput;
use crate::theme::ThemeController;
use crate::view_state::ViewController;

/// Panel that receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Framework,
    #[default]
    Prompt,
    Output,
}

impl Focus {
    pub fn next(&self) -> Self {
        match self {
            Focus::Framework => Focus::Prompt,
            Focus::Prompt => Focus::Output,
            Focus::Output => Focus::Framework,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Focus::Framework => Focus::Output,
            Focus::Prompt => Focus::Framework,
            Focus::Output => Focus::Prompt,
        }
    }
}

/// Application phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub focus: Focus,
    pub prompt: PromptInput,
    pub framework: Framework,
    pub output: ViewController,
    pub notices: NoticeQueue,
    pub theme: ThemeController,
    pub show_help: bool,

    /// Loaded settings
    pub settings: Settings,

    /// Directory holding config.toml / preferences.toml
    pub config_dir: PathBuf,
}

impl AppState {
    pub fn new(settings: Settings, config_dir: PathBuf, theme: ThemeController) -> Self {
        Self {
            phase: AppPhase::Running,
            focus: Focus::default(),
            prompt: PromptInput::new(),
            framework: settings.ui.default_framework,
            output: ViewController::new(),
            notices: NoticeQueue::new(settings.notice_duration()),
            theme,
            show_help: false,
            settings,
            config_dir,
        }
    }

    /// Request built from the current prompt and framework
    pub fn current_request(&self) -> GenerationRequest {
        GenerationRequest::new(self.prompt.text(), self.framework)
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }
}
