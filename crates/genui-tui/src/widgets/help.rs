//! Key binding reference overlay

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::modal_overlay;
use crate::theme::{styles, Palette};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Global",
        &[
            ("Tab / S-Tab", "Move focus"),
            ("F5 / ^G", "Generate"),
            ("Esc", "Cancel generation"),
            ("^T", "Toggle light / dark"),
            ("^Y  ^S  ^O", "Copy / Save / Open in browser"),
            ("^F", "Fullscreen preview"),
            ("^C / ^Q", "Quit"),
        ],
    ),
    (
        "Prompt",
        &[
            ("Enter", "Generate"),
            ("^J / S-Enter", "New line"),
            ("^U", "Clear prompt"),
        ],
    ),
    (
        "Framework",
        &[("←/→  1-5", "Choose framework")],
    ),
    (
        "Output",
        &[
            ("1 / 2  t", "Code / Preview tab"),
            ("y  d  o", "Copy / Download / Browser"),
            ("f  r", "Fullscreen / Refresh preview"),
            ("j/k  g/G", "Scroll"),
        ],
    ),
];

const KEY_COLUMN: usize = 14;

pub struct HelpOverlay<'a> {
    palette: &'a Palette,
}

impl<'a> HelpOverlay<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let p = self.palette;
        let mut lines = Vec::new();
        for (i, (section, bindings)) in SECTIONS.iter().enumerate() {
            if i > 0 {
                lines.push(Line::from(""));
            }
            lines.push(Line::styled(*section, styles::accent_bold(p)));
            for (key, action) in bindings.iter() {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {key:<KEY_COLUMN$}"), styles::keybinding(p)),
                    Span::styled(*action, styles::text_primary(p)),
                ]));
            }
        }
        lines
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        modal_overlay::dim_background(buf, area, p);

        let lines = self.lines();
        let height = lines.len() as u16 + 2;
        let rect = modal_overlay::centered_rect(52, height, area);
        modal_overlay::clear_area(buf, rect);

        let block = styles::modal_block(p)
            .title(Span::styled(" Keys ", styles::accent_bold(p)))
            .title_bottom(Line::styled(" Esc to close ", styles::text_muted(p)));

        Paragraph::new(lines).block(block).render(rect, buf);
    }
}
