//! Output pane state machine
//!
//! ```text
//!            submit                      success
//!   Empty ──────────► Generating ─────────────────► Revealed (Code | Preview)
//!     ▲                 │    │ failure / cancel         │  ▲
//!     │                 │    └──► Empty (hidden)        │  │ fullscreen open/close
//!     └─────────────────┘                               ▼  │
//!                                               Fullscreen preview
//! ```
//!
//! [`ViewController`] exclusively owns the current code. Every submit
//! clears it; only a successful result for the current ticket puts new code
//! in place.

use std::time::Instant;

use genui_core::{render_document, GenerationRequest, GenerationResult, PreviewDocument};

use crate::scroll_state::ScrollState;

/// Id of a submitted generation; results for other tickets are stale
pub type GenerationTicket = u64;

/// Which view the output pane shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputTab {
    #[default]
    Code,
    Preview,
}

impl OutputTab {
    pub fn toggled(&self) -> Self {
        match self {
            OutputTab::Code => OutputTab::Preview,
            OutputTab::Preview => OutputTab::Code,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OutputTab::Code => "Code",
            OutputTab::Preview => "Preview",
        }
    }
}

/// Presentation flags of the output pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub output_visible: bool,
    pub active_tab: OutputTab,
    pub fullscreen_open: bool,
    /// Bumped on every refresh to force a preview rebuild
    pub preview_epoch: u64,
}

/// A generation in flight
#[derive(Debug, Clone)]
pub struct PendingGeneration {
    pub ticket: GenerationTicket,
    pub request: GenerationRequest,
    pub started_at: Instant,
}

/// What happened to a completed generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// New code is in place and the output is visible
    Applied,
    /// The generation failed; output stays hidden
    Failed(String),
    /// The result belongs to a superseded or cancelled ticket
    Stale,
}

/// Owner of the output pane state and the current code
#[derive(Debug, Default)]
pub struct ViewController {
    view: ViewState,
    code: String,
    preview: PreviewDocument,
    pending: Option<PendingGeneration>,
    last_ticket: GenerationTicket,
    pub code_scroll: ScrollState,
    pub preview_scroll: ScrollState,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// True when there is non-whitespace code to copy or save
    pub fn has_code(&self) -> bool {
        !self.code.trim().is_empty()
    }

    pub fn preview(&self) -> &PreviewDocument {
        &self.preview
    }

    pub fn pending(&self) -> Option<&PendingGeneration> {
        self.pending.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    // ─────────────────────────────────────────────────────────
    // Generation cycle
    // ─────────────────────────────────────────────────────────

    /// Enter the generating state
    ///
    /// Returns `None` while another generation is pending. Otherwise hides
    /// the output, clears the previous code and issues a new ticket.
    pub fn begin_generation(&mut self, request: GenerationRequest) -> Option<GenerationTicket> {
        if self.pending.is_some() {
            return None;
        }

        self.last_ticket += 1;
        let ticket = self.last_ticket;

        self.view.output_visible = false;
        self.view.fullscreen_open = false;
        self.code.clear();
        self.preview = PreviewDocument::default();
        self.pending = Some(PendingGeneration {
            ticket,
            request,
            started_at: Instant::now(),
        });

        Some(ticket)
    }

    /// Apply a finished generation
    pub fn complete_generation(
        &mut self,
        ticket: GenerationTicket,
        result: GenerationResult,
    ) -> GenerationOutcome {
        match &self.pending {
            Some(pending) if pending.ticket == ticket => {}
            _ => return GenerationOutcome::Stale,
        }
        self.pending = None;

        if !result.succeeded {
            return GenerationOutcome::Failed(
                result
                    .error_message
                    .unwrap_or_else(|| "Something went wrong while generating code".to_string()),
            );
        }

        self.code = result.source_code;
        self.view.output_visible = true;
        self.code_scroll.reset();
        self.preview_scroll.reset();
        self.rebuild_preview();
        GenerationOutcome::Applied
    }

    /// Abandon the pending generation; its ticket becomes stale
    pub fn cancel_generation(&mut self) -> Option<GenerationTicket> {
        self.pending.take().map(|p| p.ticket)
    }

    // ─────────────────────────────────────────────────────────
    // View switching
    // ─────────────────────────────────────────────────────────

    pub fn switch_tab(&mut self) {
        self.view.active_tab = self.view.active_tab.toggled();
    }

    pub fn select_tab(&mut self, tab: OutputTab) {
        self.view.active_tab = tab;
    }

    /// Bump the epoch and rebuild the preview from the current code
    pub fn refresh_preview(&mut self) -> u64 {
        self.view.preview_epoch = self.view.preview_epoch.wrapping_add(1);
        self.rebuild_preview();
        self.view.preview_epoch
    }

    /// Open the full-viewport preview; only meaningful with visible output
    pub fn open_fullscreen(&mut self) -> bool {
        if !self.view.output_visible {
            return false;
        }
        self.view.fullscreen_open = true;
        true
    }

    pub fn close_fullscreen(&mut self) {
        self.view.fullscreen_open = false;
    }

    /// Scroll state of whatever is currently on screen
    pub fn active_scroll_mut(&mut self) -> &mut ScrollState {
        if self.view.fullscreen_open || self.view.active_tab == OutputTab::Preview {
            &mut self.preview_scroll
        } else {
            &mut self.code_scroll
        }
    }

    fn rebuild_preview(&mut self) {
        self.preview = render_document(&self.code, self.view.preview_epoch);
    }
}
