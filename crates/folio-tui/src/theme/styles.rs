//! Semantic style builders.
//!
//! Every builder takes the palette of the current frame.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::Palette;

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

pub fn text_bold(p: &Palette) -> Style {
    Style::default()
        .fg(p.text_primary)
        .add_modifier(Modifier::BOLD)
}

// --- Headings ---
pub fn page_title(p: &Palette) -> Style {
    Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
}

pub fn section_title(p: &Palette) -> Style {
    Style::default()
        .fg(p.text_primary)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

pub fn subheading(p: &Palette) -> Style {
    Style::default()
        .fg(p.accent_alt)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive(p: &Palette) -> Style {
    Style::default().fg(p.border_dim)
}

pub fn border_active(p: &Palette) -> Style {
    Style::default().fg(p.border_active)
}

// --- Accent styles ---
pub fn accent(p: &Palette) -> Style {
    Style::default().fg(p.accent)
}

pub fn accent_bold(p: &Palette) -> Style {
    Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
}

/// Pills for technologies, tags and categories
pub fn tag(p: &Palette) -> Style {
    Style::default().fg(p.accent_alt)
}

// --- Status styles ---
pub fn status_success(p: &Palette) -> Style {
    Style::default().fg(p.success).add_modifier(Modifier::BOLD)
}

pub fn status_error(p: &Palette) -> Style {
    Style::default().fg(p.error).add_modifier(Modifier::BOLD)
}

pub fn status_busy(p: &Palette) -> Style {
    Style::default().fg(p.warning)
}

// --- Keybinding hint style ---
pub fn keybinding(p: &Palette) -> Style {
    Style::default().fg(p.warning)
}

// --- Selection styles ---
/// Focused card or control
pub fn focused_selected(p: &Palette) -> Style {
    Style::default()
        .fg(p.contrast_fg)
        .bg(p.accent)
        .add_modifier(Modifier::BOLD)
}

/// A control that can be focused but is not
pub fn control(p: &Palette) -> Style {
    Style::default()
        .fg(p.accent)
        .add_modifier(Modifier::UNDERLINED)
}

// --- Block builders ---
pub fn glass_block(p: &Palette, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active(p)
        } else {
            border_inactive(p)
        })
        .style(Style::default().bg(p.surface))
}

pub fn modal_block<'a>(p: &Palette, title: &'a str) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active(p))
        .style(Style::default().bg(p.popup).fg(p.text_primary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette::{DARK, LIGHT};

    #[test]
    fn test_text_styles_follow_palette() {
        assert_eq!(text_primary(&DARK).fg, Some(DARK.text_primary));
        assert_eq!(text_primary(&LIGHT).fg, Some(LIGHT.text_primary));
        assert_eq!(text_muted(&DARK).fg, Some(DARK.text_muted));
    }

    #[test]
    fn test_focused_selected_uses_contrast_on_accent() {
        let style = focused_selected(&DARK);
        assert_eq!(style.fg, Some(DARK.contrast_fg));
        assert_eq!(style.bg, Some(DARK.accent));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_status_styles() {
        assert_eq!(status_success(&LIGHT).fg, Some(LIGHT.success));
        assert_eq!(status_error(&LIGHT).fg, Some(LIGHT.error));
    }
}
