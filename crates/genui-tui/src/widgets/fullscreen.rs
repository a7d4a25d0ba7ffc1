//! Full-viewport preview overlay

use genui_app::ViewController;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
};

use super::modal_overlay;
use super::output_panel::{preview_line_count, render_preview};
use crate::theme::{styles, Palette};

pub struct FullscreenPreview<'a> {
    palette: &'a Palette,
}

impl<'a> FullscreenPreview<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }
}

impl StatefulWidget for FullscreenPreview<'_> {
    type State = ViewController;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ViewController) {
        let p = self.palette;
        modal_overlay::clear_area(buf, area);

        let title = match &state.preview().title {
            Some(t) => format!(" Preview: {t} "),
            None => " Preview ".to_string(),
        };
        let block = styles::modal_block(p).title(Span::styled(title, styles::accent_bold(p)));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let [content_area, footer_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

        let total = preview_line_count(state.preview());
        state
            .preview_scroll
            .update_content_size(total, content_area.height as usize);
        let offset = state.preview_scroll.offset;
        render_preview(p, state.preview(), offset, content_area, buf);

        let mut spans = styles::key_hint(p, "Esc", "Close");
        spans.extend(styles::key_hint(p, "r", "Refresh"));
        spans.extend(styles::key_hint(p, "j/k", "Scroll"));
        spans.push(Span::styled(
            format!("rev {}", state.view().preview_epoch),
            styles::text_muted(p),
        ));
        buf.set_line(
            footer_area.x,
            footer_area.y,
            &Line::from(spans),
            footer_area.width,
        );
    }
}
