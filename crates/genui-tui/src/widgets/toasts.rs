//! Transient notices in the bottom-right corner

use genui_app::{NoticeLevel, NoticeQueue};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use super::modal_overlay;
use crate::theme::{styles, Palette};

const MAX_TOAST_WIDTH: u16 = 56;

pub struct Toasts<'a> {
    palette: &'a Palette,
    notices: &'a NoticeQueue,
}

impl<'a> Toasts<'a> {
    pub fn new(palette: &'a Palette, notices: &'a NoticeQueue) -> Self {
        Self { palette, notices }
    }
}

fn icon(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "✓",
        NoticeLevel::Error => "✗",
        NoticeLevel::Info => "ℹ",
    }
}

impl Widget for Toasts<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.notices.is_empty() || area.width < 8 || area.height < 3 {
            return;
        }
        let p = self.palette;

        let longest = self
            .notices
            .iter()
            .map(|n| n.message.width() as u16 + 4)
            .max()
            .unwrap_or(0);
        let width = (longest + 2).min(MAX_TOAST_WIDTH).min(area.width);
        let height = (self.notices.len() as u16 + 2).min(area.height);

        let rect = Rect::new(
            area.x + area.width - width,
            area.y + area.height - height,
            width,
            height,
        );
        modal_overlay::clear_area(buf, rect);

        let block = styles::modal_block(p);
        let inner = block.inner(rect);
        block.render(rect, buf);

        // Newest at the bottom; drop the oldest when space runs out
        let skip = self.notices.len().saturating_sub(inner.height as usize);
        for (row, notice) in self.notices.iter().skip(skip).enumerate() {
            let style = styles::notice(p, notice.level);
            let line = Line::from(vec![
                Span::styled(icon(notice.level), style),
                Span::raw(" "),
                Span::styled(notice.message.as_str(), style),
            ]);
            buf.set_line(inner.x, inner.y + row as u16, &line, inner.width);
        }
    }
}
