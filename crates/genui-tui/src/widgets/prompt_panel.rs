//! Multi-line prompt editor

use genui_app::PromptInput;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{styles, Palette};

const PLACEHOLDER: &str = "Describe the UI component you want, e.g. a pricing card with three tiers";

pub struct PromptPanel<'a> {
    palette: &'a Palette,
    input: &'a PromptInput,
    focused: bool,
    generating: bool,
}

impl<'a> PromptPanel<'a> {
    pub fn new(palette: &'a Palette, input: &'a PromptInput, focused: bool) -> Self {
        Self {
            palette,
            input,
            focused,
            generating: false,
        }
    }

    pub fn generating(mut self, generating: bool) -> Self {
        self.generating = generating;
        self
    }

    /// Terminal cell of the cursor when drawn into `area`
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        let inner = self.inner(area);
        if inner.width == 0 || inner.height == 0 {
            return None;
        }

        let (line, col) = self.input.cursor_position();
        let row = line.saturating_sub(first_visible_line(line, inner.height as usize));
        let lines = self.input.lines();
        let prefix: String = lines
            .get(line)
            .map(|l| l.chars().take(col).collect())
            .unwrap_or_default();
        let x = (prefix.width() as u16).min(inner.width.saturating_sub(1));

        Some(Position::new(inner.x + x, inner.y + row as u16))
    }

    fn inner(&self, area: Rect) -> Rect {
        let block = styles::glass_block(self.palette, self.focused);
        let inner = block.inner(area);
        // Last row holds the hint line
        Rect {
            height: inner.height.saturating_sub(1),
            ..inner
        }
    }
}

/// First line shown so the cursor line stays in view
fn first_visible_line(cursor_line: usize, visible: usize) -> usize {
    if visible == 0 {
        return 0;
    }
    cursor_line.saturating_sub(visible - 1)
}

impl Widget for PromptPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::glass_block(p, self.focused)
            .title(Span::styled(" Prompt ", styles::text_secondary(p)));
        let full_inner = block.inner(area);
        block.render(area, buf);

        let text_area = self.inner(area);
        if text_area.height > 0 {
            if self.input.text().is_empty() {
                Paragraph::new(Span::styled(PLACEHOLDER, styles::text_muted(p)))
                    .wrap(ratatui::widgets::Wrap { trim: true })
                    .render(text_area, buf);
            } else {
                let (cursor_line, _) = self.input.cursor_position();
                let skip = first_visible_line(cursor_line, text_area.height as usize);
                let lines: Vec<Line> = self
                    .input
                    .lines()
                    .into_iter()
                    .skip(skip)
                    .take(text_area.height as usize)
                    .map(|l| Line::styled(l.to_string(), styles::text_primary(p)))
                    .collect();
                Paragraph::new(lines).render(text_area, buf);
            }
        }

        if full_inner.height == 0 {
            return;
        }
        let hint_y = full_inner.y + full_inner.height - 1;
        let hint = if self.generating {
            Line::from(vec![
                Span::styled("Generating... ", styles::accent(p)),
                Span::styled("[Esc] ", styles::keybinding(p)),
                Span::styled("Cancel", styles::text_secondary(p)),
            ])
        } else {
            let mut spans = styles::key_hint(p, "Enter", "Generate");
            spans.extend(styles::key_hint(p, "^J", "Newline"));
            Line::from(spans)
        };
        buf.set_line(full_inner.x, hint_y, &hint, full_inner.width);
    }
}
