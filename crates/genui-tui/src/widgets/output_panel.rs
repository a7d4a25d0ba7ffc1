//! Output panel: empty state, loading indicator, and the Code / Preview tabs
//!
//! Rendering updates the scroll metrics of the visible view, so the panel is
//! a [`StatefulWidget`] over the [`ViewController`].

use std::time::Duration;

use genui_app::{OutputTab, PendingGeneration, ViewController};
use genui_core::PreviewDocument;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};

use crate::theme::{styles, Palette};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_FRAME_MS: u128 = 80;

/// Spinner glyph for the given elapsed time
pub fn spinner_frame(elapsed: Duration) -> &'static str {
    let idx = (elapsed.as_millis() / SPINNER_FRAME_MS) as usize % SPINNER_FRAMES.len();
    SPINNER_FRAMES[idx]
}

pub struct OutputPanel<'a> {
    palette: &'a Palette,
    focused: bool,
}

impl<'a> OutputPanel<'a> {
    pub fn new(palette: &'a Palette, focused: bool) -> Self {
        Self { palette, focused }
    }
}

impl StatefulWidget for OutputPanel<'_> {
    type State = ViewController;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ViewController) {
        let p = self.palette;
        let block = styles::glass_block(p, self.focused)
            .title(Span::styled(" Output ", styles::text_secondary(p)));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if let Some(pending) = state.pending() {
            render_loading(p, pending, inner, buf);
            return;
        }

        if !state.view().output_visible {
            render_empty(p, inner, buf);
            return;
        }

        let [tabs_area, content_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(inner);

        render_tab_bar(p, state.view().active_tab, tabs_area, buf);

        match state.view().active_tab {
            OutputTab::Code => {
                let total = state.code().lines().count();
                state
                    .code_scroll
                    .update_content_size(total, content_area.height as usize);
                let offset = state.code_scroll.offset;
                render_code(p, state.code(), offset, content_area, buf);
            }
            OutputTab::Preview => {
                let total = preview_line_count(state.preview());
                state
                    .preview_scroll
                    .update_content_size(total, content_area.height as usize);
                let offset = state.preview_scroll.offset;
                render_preview(p, state.preview(), offset, content_area, buf);
            }
        }
    }
}

fn render_empty(p: &Palette, area: Rect, buf: &mut Buffer) {
    let lines = vec![
        Line::from(""),
        Line::styled("No component yet", styles::text_secondary(p)),
        Line::from(""),
        Line::styled(
            "Describe a component and press Enter to generate it",
            styles::text_muted(p),
        ),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(ratatui::widgets::Wrap { trim: true })
        .render(area, buf);
}

fn render_loading(p: &Palette, pending: &PendingGeneration, area: Rect, buf: &mut Buffer) {
    let elapsed = pending.started_at.elapsed();
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(spinner_frame(elapsed), styles::accent_bold(p)),
            Span::raw(" "),
            Span::styled(
                format!("Generating {}", pending.request.framework.label()),
                styles::text_primary(p),
            ),
        ]),
        Line::styled(
            format!("{:.1}s", elapsed.as_secs_f32()),
            styles::text_muted(p),
        ),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Esc] ", styles::keybinding(p)),
            Span::styled("Cancel", styles::text_secondary(p)),
        ]),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(area, buf);
}

fn render_tab_bar(p: &Palette, active: OutputTab, area: Rect, buf: &mut Buffer) {
    if area.height == 0 {
        return;
    }

    let mut spans = Vec::new();
    for tab in [OutputTab::Code, OutputTab::Preview] {
        let style = if tab == active {
            styles::focused_selected(p)
        } else {
            styles::text_secondary(p)
        };
        spans.push(Span::styled(format!(" {} ", tab.label()), style));
        spans.push(Span::raw(" "));
    }
    let tabs = Line::from(spans);
    let tabs_width = tabs.width() as u16;
    buf.set_line(area.x, area.y, &tabs, area.width);

    let mut hints = styles::key_hint(p, "y", "Copy");
    hints.extend(styles::key_hint(p, "d", "Download"));
    hints.extend(styles::key_hint(p, "o", "Browser"));
    hints.extend(styles::key_hint(p, "f", "Full"));
    hints.extend(styles::key_hint(p, "r", "Refresh"));
    let toolbar = Line::from(hints);
    let toolbar_width = toolbar.width() as u16;

    if tabs_width + toolbar_width <= area.width {
        let x = area.x + area.width - toolbar_width;
        buf.set_line(x, area.y, &toolbar, toolbar_width);
    } else if area.height > 1 {
        buf.set_line(area.x, area.y + 1, &toolbar, area.width);
    }
}

/// Source view with a line-number gutter
pub(crate) fn render_code(p: &Palette, code: &str, offset: usize, area: Rect, buf: &mut Buffer) {
    let total = code.lines().count().max(1);
    let gutter = total.to_string().len();

    let lines: Vec<Line> = code
        .lines()
        .enumerate()
        .skip(offset)
        .take(area.height as usize)
        .map(|(i, text)| {
            let mut spans = vec![
                Span::styled(
                    format!("{:>width$} ", i + 1, width = gutter),
                    Style::default().fg(p.line_number),
                ),
                Span::styled("│ ", Style::default().fg(p.border_dim)),
            ];
            spans.extend(highlight_markup(p, &text.replace('\t', "    ")));
            Line::from(spans)
        })
        .collect();

    Paragraph::new(lines).render(area, buf);
}

/// Tags in the tag color, everything else in the code color
fn highlight_markup(p: &Palette, text: &str) -> Vec<Span<'static>> {
    let tag_style = Style::default().fg(p.code_tag);
    let text_style = Style::default().fg(p.code_fg);

    let mut spans = Vec::new();
    let mut rest = text;
    while let Some(start) = rest.find('<') {
        if start > 0 {
            spans.push(Span::styled(rest[..start].to_string(), text_style));
        }
        match rest[start..].find('>') {
            Some(end) => {
                let end = start + end + 1;
                spans.push(Span::styled(rest[start..end].to_string(), tag_style));
                rest = &rest[end..];
            }
            None => {
                spans.push(Span::styled(rest[start..].to_string(), tag_style));
                rest = "";
            }
        }
    }
    if !rest.is_empty() {
        spans.push(Span::styled(rest.to_string(), text_style));
    }
    spans
}

pub(crate) fn preview_line_count(doc: &PreviewDocument) -> usize {
    doc.line_count() + usize::from(doc.title.is_some()) * 2
}

/// Text rendering of the preview document, shared with the fullscreen view
pub(crate) fn render_preview(
    p: &Palette,
    doc: &PreviewDocument,
    offset: usize,
    area: Rect,
    buf: &mut Buffer,
) {
    if doc.is_empty() && doc.title.is_none() {
        Paragraph::new(Line::styled(
            "Nothing to preview",
            styles::text_muted(p),
        ))
        .alignment(Alignment::Center)
        .render(area, buf);
        return;
    }

    let mut all: Vec<Line> = Vec::with_capacity(preview_line_count(doc));
    if let Some(title) = &doc.title {
        all.push(Line::styled(title.clone(), styles::accent_bold(p)));
        all.push(Line::styled(
            "─".repeat(title.chars().count().max(1)),
            styles::text_muted(p),
        ));
    }
    all.extend(doc.lines.iter().map(|l| preview_line(p, l)));

    let visible: Vec<Line> = all
        .into_iter()
        .skip(offset)
        .take(area.height as usize)
        .collect();
    Paragraph::new(visible).render(area, buf);
}

fn preview_line(p: &Palette, line: &str) -> Line<'static> {
    let trimmed = line.trim_start();
    if trimmed.starts_with('#') {
        let heading = trimmed.trim_start_matches('#').trim_start();
        Line::styled(heading.to_string(), styles::accent_bold(p))
    } else if trimmed.starts_with("```") {
        Line::styled(line.to_string(), styles::text_muted(p))
    } else {
        Line::styled(line.to_string(), styles::text_primary(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{revealed_state, test_app_state, TestTerminal};
    use crate::theme::palette::LIGHT;
    use genui_core::GenerationRequest;

    const CARD: &str = "<!DOCTYPE html>\n<html>\n<head><title>Card</title></head>\n<body>\n<h1>Hello</h1>\n<p>World</p>\n</body>\n</html>";

    #[test]
    fn test_spinner_frames_advance() {
        assert_eq!(spinner_frame(Duration::from_millis(0)), "⠋");
        assert_eq!(spinner_frame(Duration::from_millis(80)), "⠙");
        assert_eq!(spinner_frame(Duration::from_millis(800)), "⠋");
    }

    #[test]
    fn test_empty_state() {
        let mut state = test_app_state();
        let mut term = TestTerminal::new();
        term.render_stateful_widget(OutputPanel::new(&LIGHT, false), term.area(), &mut state.output);

        assert!(term.buffer_contains("No component yet"));
        assert!(!term.buffer_contains("Preview"));
    }

    #[test]
    fn test_loading_state_hides_previous_output() {
        let mut state = revealed_state(CARD);
        state.output.close_fullscreen();
        state
            .output
            .begin_generation(GenerationRequest::new("again", state.framework))
            .unwrap();

        let mut term = TestTerminal::new();
        term.render_stateful_widget(OutputPanel::new(&LIGHT, false), term.area(), &mut state.output);

        assert!(term.buffer_contains("Generating HTML + CSS"));
        assert!(term.buffer_contains("Cancel"));
        assert!(!term.buffer_contains("<h1>"));
    }

    #[test]
    fn test_code_tab_shows_source_with_line_numbers() {
        let mut state = revealed_state(CARD);
        let mut term = TestTerminal::with_size(100, 20);
        term.render_stateful_widget(OutputPanel::new(&LIGHT, true), term.area(), &mut state.output);

        assert!(term.buffer_contains(" Code "));
        assert!(term.buffer_contains("Preview"));
        assert!(term.buffer_contains("1 │ <!DOCTYPE html>"));
        assert!(term.buffer_contains("<h1>Hello</h1>"));
        assert!(term.buffer_contains("Copy"));
    }

    #[test]
    fn test_preview_tab_shows_rendered_text() {
        let mut state = revealed_state(CARD);
        state.output.select_tab(OutputTab::Preview);
        let mut term = TestTerminal::with_size(100, 20);
        term.render_stateful_widget(OutputPanel::new(&LIGHT, true), term.area(), &mut state.output);

        assert!(term.buffer_contains("Card"));
        assert!(term.buffer_contains("Hello"));
        assert!(term.buffer_contains("World"));
        assert!(!term.buffer_contains("<h1>"));
    }

    #[test]
    fn test_render_updates_scroll_metrics() {
        let code: String = (0..50).map(|i| format!("<p>{i}</p>\n")).collect();
        let mut state = revealed_state(&code);
        let mut term = TestTerminal::with_size(80, 14);
        term.render_stateful_widget(OutputPanel::new(&LIGHT, true), term.area(), &mut state.output);

        // 14 rows - 2 borders - 2 tab bar rows
        assert_eq!(state.output.code_scroll.visible_lines, 10);
        assert_eq!(state.output.code_scroll.total_lines, 50);
    }

    #[test]
    fn test_scrolled_code_skips_lines() {
        let code: String = (0..50).map(|i| format!("<p>row-{i}</p>\n")).collect();
        let mut state = revealed_state(&code);
        state.output.code_scroll.update_content_size(50, 10);
        state.output.code_scroll.scroll_down(20);

        let mut term = TestTerminal::with_size(80, 14);
        term.render_stateful_widget(OutputPanel::new(&LIGHT, true), term.area(), &mut state.output);

        assert!(term.buffer_contains("row-20"));
        assert!(!term.buffer_contains("row-3<"));
    }

    #[test]
    fn test_highlight_markup_splits_tags() {
        let spans = highlight_markup(&LIGHT, "a <b>c</b>");
        let parts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(parts, vec!["a ", "<b>", "c", "</b>"]);
        assert_eq!(spans[1].style.fg, Some(LIGHT.code_tag));
        assert_eq!(spans[2].style.fg, Some(LIGHT.code_fg));
    }

    #[test]
    fn test_highlight_markup_unclosed_tag() {
        let spans = highlight_markup(&LIGHT, "x <div class=");
        let parts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(parts, vec!["x ", "<div class="]);
    }
}
