//! Framework selector: one-row cycling picker

use genui_core::Framework;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{styles, Palette};

pub struct FrameworkSelector<'a> {
    palette: &'a Palette,
    selected: Framework,
    focused: bool,
}

impl<'a> FrameworkSelector<'a> {
    pub fn new(palette: &'a Palette, selected: Framework, focused: bool) -> Self {
        Self {
            palette,
            selected,
            focused,
        }
    }
}

impl Widget for FrameworkSelector<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::glass_block(p, self.focused)
            .title(Span::styled(" Framework ", styles::text_secondary(p)));

        let arrow_style = if self.focused {
            styles::keybinding(p)
        } else {
            styles::text_muted(p)
        };
        let label_style = if self.focused {
            styles::focused_selected(p)
        } else {
            styles::text_primary(p)
        };

        let line = Line::from(vec![
            Span::styled("◀ ", arrow_style),
            Span::styled(format!(" {} ", self.selected.label()), label_style),
            Span::styled(" ▶", arrow_style),
            Span::styled(
                format!("  {}/{}", self.selected.index() + 1, Framework::ALL.len()),
                styles::text_muted(p),
            ),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
