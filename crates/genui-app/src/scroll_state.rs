//! Scroll position for the code and preview views
//!
//! `total_lines` and `visible_lines` are updated by the TUI during render;
//! scroll commands from the handler clamp against them.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollState {
    /// Current vertical scroll offset from top
    pub offset: usize,
    /// Total number of lines (set during render)
    pub total_lines: usize,
    /// Visible lines (set during render)
    pub visible_lines: usize,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_lines)
    }

    /// Scroll up by n lines
    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    /// Scroll down by n lines
    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.visible_lines.saturating_sub(2).max(1));
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.visible_lines.saturating_sub(2).max(1));
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Update content metrics, keeping the offset in range
    pub fn update_content_size(&mut self, total_lines: usize, visible_lines: usize) {
        self.total_lines = total_lines;
        self.visible_lines = visible_lines;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Back to the top, forgetting metrics (new content)
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
