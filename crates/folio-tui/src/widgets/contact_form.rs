//! Contact form overlay
//!
//! Drawn over a dimmed page. Shows the four fields, the inline status text
//! and a busy indicator while a message is being sent.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use folio_app::{ContactForm, FormField, FormStatus};

use super::modal_overlay::{centered_rect, clear_area, dim_background, render_shadow};
use super::page::wrap;
use crate::theme::{styles, Palette};

const MODAL_WIDTH: u16 = 64;
const MODAL_HEIGHT: u16 = 22;
const MESSAGE_ROWS: usize = 4;
const CURSOR: &str = "▏";

/// Contact form modal
pub struct ContactFormModal<'a> {
    form: &'a ContactForm,
    palette: &'a Palette,
}

impl<'a> ContactFormModal<'a> {
    pub fn new(form: &'a ContactForm, palette: &'a Palette) -> Self {
        Self { form, palette }
    }

    fn field_lines(&self, field: FormField, width: usize) -> Vec<Line<'static>> {
        let p = self.palette;
        let focused = self.form.focused == field;

        let label_style = if focused {
            styles::accent_bold(p)
        } else {
            styles::text_secondary(p)
        };
        let marker = if focused { "▸ " } else { "  " };
        let mut lines = vec![Line::from(vec![
            Span::styled(marker, styles::accent_bold(p)),
            Span::styled(format!("{} *", field.label()), label_style),
        ])];

        let value = self.form.value(field);
        let value_width = width.saturating_sub(4).max(1);
        let mut rows: Vec<(String, Style)> = if value.is_empty() {
            vec![(field.placeholder().to_string(), styles::text_muted(p))]
        } else if field.is_multiline() {
            wrap(value, value_width)
                .into_iter()
                .map(|row| (row, styles::text_primary(p)))
                .collect()
        } else {
            // Single-line fields show their tail once they overflow
            let shown: String = tail(value, value_width.saturating_sub(1));
            vec![(shown, styles::text_primary(p))]
        };

        if field.is_multiline() {
            if rows.len() > MESSAGE_ROWS {
                rows.drain(..rows.len() - MESSAGE_ROWS);
            }
            while rows.len() < MESSAGE_ROWS {
                rows.push((String::new(), styles::text_primary(p)));
            }
        }

        let cursor_row = if value.is_empty() {
            0
        } else if field.is_multiline() {
            rows.iter()
                .rposition(|(row, _)| !row.is_empty())
                .unwrap_or(0)
        } else {
            0
        };

        let bar_style = if focused {
            styles::border_active(p)
        } else {
            styles::border_inactive(p)
        };
        for (i, (row, style)) in rows.into_iter().enumerate() {
            let mut spans = vec![Span::styled("  │ ", bar_style)];
            if focused && i == cursor_row && !value.is_empty() {
                spans.push(Span::styled(row, style));
                spans.push(Span::styled(CURSOR, styles::accent(p)));
            } else if focused && i == cursor_row {
                spans.push(Span::styled(CURSOR, styles::accent(p)));
                spans.push(Span::styled(row, style));
            } else {
                spans.push(Span::styled(row, style));
            }
            lines.push(Line::from(spans));
        }

        lines
    }

    fn status_line(&self) -> Line<'static> {
        let p = self.palette;
        match self.form.status {
            FormStatus::Submitting => Line::from(Span::styled(
                "  ⠿ Sending...",
                styles::status_busy(p),
            )),
            FormStatus::Success => Line::from(Span::styled(
                format!("  ✓ {}", self.form.status_text().unwrap_or_default()),
                styles::status_success(p),
            )),
            FormStatus::Error => Line::from(Span::styled(
                format!("  ✗ {}", self.form.status_text().unwrap_or_default()),
                styles::status_error(p),
            )),
            FormStatus::Idle => match self.form.status_text() {
                Some(text) => Line::from(Span::styled(format!("  ! {text}"), styles::status_error(p))),
                None => Line::default(),
            },
        }
    }

    fn hint_line(&self) -> Line<'static> {
        let p = self.palette;
        let send_label = if self.form.is_submitting() {
            "] Sending  "
        } else {
            "] Send Message  "
        };
        Line::from(vec![
            Span::styled("  [", styles::text_muted(p)),
            Span::styled("Tab", styles::keybinding(p)),
            Span::styled("] Next  [", styles::text_muted(p)),
            Span::styled("Ctrl+S", styles::keybinding(p)),
            Span::styled(send_label, styles::text_muted(p)),
            Span::styled("[", styles::text_muted(p)),
            Span::styled("Esc", styles::keybinding(p)),
            Span::styled("] Close", styles::text_muted(p)),
        ])
    }
}

/// Last `width` columns worth of characters of `value`
fn tail(value: &str, width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut used = 0;
    let mut chars: Vec<char> = Vec::new();
    for ch in value.chars().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        chars.push(ch);
    }
    chars.into_iter().rev().collect()
}

impl Widget for ContactFormModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        dim_background(buf, area, p);

        let modal = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
        clear_area(buf, modal);
        render_shadow(buf, modal, p);

        let block = styles::modal_block(p, " Send Me a Message ");
        let inner = block.inner(modal);
        block.render(modal, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let width = usize::from(inner.width);
        let mut lines = Vec::new();
        for field in FormField::ALL {
            lines.extend(self.field_lines(field, width));
        }
        lines.push(Line::default());
        lines.push(self.status_line());
        lines.push(self.hint_line());

        Paragraph::new(lines)
            .style(Style::default().bg(p.popup))
            .render(inner, buf);
    }
}
