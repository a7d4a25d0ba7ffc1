//! Semantic style builders on top of a [`Palette`].

use genui_app::NoticeLevel;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette::Palette;

// --- Text styles ---
pub fn text_primary(p: &Palette) -> Style {
    Style::default().fg(p.text_primary)
}

pub fn text_secondary(p: &Palette) -> Style {
    Style::default().fg(p.text_secondary)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

// --- Accent styles ---
pub fn accent(p: &Palette) -> Style {
    Style::default().fg(p.accent)
}

pub fn accent_bold(p: &Palette) -> Style {
    Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
}

pub fn keybinding(p: &Palette) -> Style {
    Style::default().fg(p.keybinding)
}

/// Accent background, used for the active tab and selected items
pub fn focused_selected(p: &Palette) -> Style {
    Style::default()
        .fg(p.contrast_fg)
        .bg(p.accent)
        .add_modifier(Modifier::BOLD)
}

pub fn notice(p: &Palette, level: NoticeLevel) -> Style {
    let color = match level {
        NoticeLevel::Success => p.success,
        NoticeLevel::Error => p.error,
        NoticeLevel::Info => p.info,
    };
    Style::default().fg(color)
}

// --- Block builders ---
pub fn glass_block(p: &Palette, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused {
            p.border_active
        } else {
            p.border_dim
        }))
        .style(Style::default().bg(p.card_bg))
}

pub fn modal_block(p: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(p.border_active))
        .style(Style::default().bg(p.popup_bg))
}

/// `[key] label` hint as spans
pub fn key_hint<'a>(p: &Palette, key: &'a str, label: &'a str) -> Vec<Span<'a>> {
    vec![
        Span::styled("[", text_muted(p)),
        Span::styled(key, keybinding(p)),
        Span::styled("] ", text_muted(p)),
        Span::styled(label, text_secondary(p)),
        Span::raw("  "),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette::{DARK, LIGHT};

    #[test]
    fn test_glass_block_border_follows_focus() {
        let focused = glass_block(&DARK, true);
        let unfocused = glass_block(&DARK, false);
        assert_ne!(format!("{:?}", focused), format!("{:?}", unfocused));
    }

    #[test]
    fn test_notice_colors_by_level() {
        assert_eq!(notice(&LIGHT, NoticeLevel::Error).fg, Some(LIGHT.error));
        assert_eq!(notice(&LIGHT, NoticeLevel::Success).fg, Some(LIGHT.success));
        assert_eq!(notice(&DARK, NoticeLevel::Info).fg, Some(DARK.info));
    }

    #[test]
    fn test_key_hint_spans() {
        let spans = key_hint(&DARK, "y", "Copy");
        let text: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "[y] Copy  ");
    }
}
