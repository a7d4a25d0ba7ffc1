//! Top navigation bar: app title, model and theme indicator

use genui_core::ThemeMode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{styles, Palette};

pub struct Navbar<'a> {
    palette: &'a Palette,
    model: &'a str,
    mode: ThemeMode,
    generating: bool,
}

impl<'a> Navbar<'a> {
    pub fn new(palette: &'a Palette, model: &'a str, mode: ThemeMode) -> Self {
        Self {
            palette,
            model,
            mode,
            generating: false,
        }
    }

    pub fn generating(mut self, generating: bool) -> Self {
        self.generating = generating;
        self
    }

    fn theme_label(&self) -> &'static str {
        match self.mode {
            ThemeMode::Dark => "☾ Dark",
            ThemeMode::Light => "☀ Light",
        }
    }
}

impl Widget for Navbar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::glass_block(p, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let status = if self.generating {
            Span::styled("●", styles::accent(p))
        } else {
            Span::styled("○", styles::text_muted(p))
        };

        let left = Line::from(vec![
            Span::raw(" "),
            status,
            Span::raw(" "),
            Span::styled("GenUI", styles::accent_bold(p)),
            Span::raw(" "),
            Span::styled("/", styles::text_muted(p)),
            Span::raw(" "),
            Span::styled(self.model, styles::text_secondary(p)),
        ]);
        let left_width = left.width() as u16;
        buf.set_line(inner.x, inner.y, &left, inner.width);

        let mut right_spans = styles::key_hint(p, "F1", "Help");
        right_spans.extend(styles::key_hint(p, "^T", self.theme_label()));
        let right = Line::from(right_spans);
        let right_width = right.width() as u16;

        // Drop the hints rather than overlap the title
        if left_width + right_width < inner.width {
            let x = inner.x + inner.width - right_width;
            buf.set_line(x, inner.y, &right, right_width);
        }
    }
}
