//! Transient toast notifications

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

/// Maximum notices kept at once; older ones are dropped
pub const MAX_NOTICES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
}

/// What a notice is about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    EmptyPrompt,
    GenerationFailed,
    NothingToCopy,
    NothingToDownload,
    Copied,
    CopyFailed,
    Downloaded,
    DownloadFailed,
    GenerationCancelled,
    OpenedInBrowser,
    BrowserOpenFailed,
}

impl NoticeKind {
    pub fn level(&self) -> NoticeLevel {
        match self {
            NoticeKind::Copied | NoticeKind::Downloaded | NoticeKind::OpenedInBrowser => {
                NoticeLevel::Success
            }
            NoticeKind::GenerationCancelled => NoticeLevel::Info,
            NoticeKind::EmptyPrompt
            | NoticeKind::GenerationFailed
            | NoticeKind::NothingToCopy
            | NoticeKind::NothingToDownload
            | NoticeKind::CopyFailed
            | NoticeKind::DownloadFailed
            | NoticeKind::BrowserOpenFailed => NoticeLevel::Error,
        }
    }

    /// Message used when the caller has nothing more specific
    pub fn default_message(&self) -> &'static str {
        match self {
            NoticeKind::EmptyPrompt => "Please describe your component first",
            NoticeKind::GenerationFailed => "Something went wrong while generating code",
            NoticeKind::NothingToCopy => "No code to copy",
            NoticeKind::NothingToDownload => "No code to download",
            NoticeKind::Copied => "Code copied to clipboard",
            NoticeKind::CopyFailed => "Failed to copy code",
            NoticeKind::Downloaded => "File downloaded",
            NoticeKind::DownloadFailed => "Failed to save file",
            NoticeKind::GenerationCancelled => "Generation cancelled",
            NoticeKind::OpenedInBrowser => "Opened in browser",
            NoticeKind::BrowserOpenFailed => "Failed to open browser",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub level: NoticeLevel,
    pub message: String,
    pub created_at: Instant,
    pub timestamp: DateTime<Local>,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            level: kind.level(),
            message: message.into(),
            created_at: Instant::now(),
            timestamp: Local::now(),
        }
    }

    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.created_at) >= ttl
    }
}

/// Bounded queue of live notices, newest last
#[derive(Debug, Clone)]
pub struct NoticeQueue {
    items: VecDeque<Notice>,
    ttl: Duration,
}

impl NoticeQueue {
    pub fn new(ttl: Duration) -> Self {
        Self {
            items: VecDeque::with_capacity(MAX_NOTICES),
            ttl,
        }
    }

    /// Raise a notice with its default message
    pub fn push(&mut self, kind: NoticeKind) {
        self.push_message(kind, kind.default_message());
    }

    /// Raise a notice with a specific message
    pub fn push_message(&mut self, kind: NoticeKind, message: impl Into<String>) {
        let notice = Notice::new(kind, message);
        tracing::debug!("Notice {:?}: {}", notice.kind, notice.message);
        if self.items.len() == MAX_NOTICES {
            self.items.pop_front();
        }
        self.items.push_back(notice);
    }

    /// Drop expired notices; returns true if anything was removed
    pub fn expire(&mut self, now: Instant) -> bool {
        let before = self.items.len();
        let ttl = self.ttl;
        self.items.retain(|n| !n.is_expired(now, ttl));
        self.items.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.items.iter()
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.items.back()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, kind: NoticeKind) -> bool {
        self.items.iter().any(|n| n.kind == kind)
    }
}
