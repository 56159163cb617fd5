//! Header bar widget
//!
//! Shows the owner's name, where the reader is, and the active theme.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use folio_app::ThemePreference;

use crate::theme::{styles, Palette};

/// Main header: name and breadcrumb on the left, shortcuts and theme pill
/// on the right
pub struct MainHeader<'a> {
    name: &'a str,
    breadcrumb: &'a str,
    theme: ThemePreference,
    palette: &'a Palette,
}

impl<'a> MainHeader<'a> {
    pub fn new(name: &'a str, palette: &'a Palette) -> Self {
        Self {
            name,
            breadcrumb: "",
            theme: ThemePreference::default(),
            palette,
        }
    }

    pub fn breadcrumb(mut self, breadcrumb: &'a str) -> Self {
        self.breadcrumb = breadcrumb;
        self
    }

    pub fn theme(mut self, theme: ThemePreference) -> Self {
        self.theme = theme;
        self
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.palette, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let p = self.palette;

        let mut left_spans = vec![
            Span::raw(" "),
            Span::styled("●", styles::accent(p)),
            Span::raw(" "),
            Span::styled(self.name.to_string(), styles::accent_bold(p)),
        ];
        if !self.breadcrumb.is_empty() {
            left_spans.push(Span::raw(" "));
            left_spans.push(Span::styled("/", styles::text_muted(p)));
            left_spans.push(Span::raw(" "));
            left_spans.push(Span::styled(
                self.breadcrumb.to_string(),
                styles::text_secondary(p),
            ));
        }
        let left_line = Line::from(left_spans);
        let left_width = left_line.width() as u16;

        let (icon, label) = if self.theme.dark {
            ("☾", "Dark")
        } else {
            ("☀", "Light")
        };
        let theme_line = Line::from(vec![
            Span::styled(format!(" {icon} {label} "), styles::tag(p)),
            Span::raw(" "),
        ]);
        let theme_width = theme_line.width() as u16;

        let shortcuts_line = Line::from(vec![
            Span::styled("[", styles::text_muted(p)),
            Span::styled("t", styles::keybinding(p)),
            Span::styled("] Theme  ", styles::text_muted(p)),
            Span::styled("[", styles::text_muted(p)),
            Span::styled("q", styles::keybinding(p)),
            Span::styled("] Quit  ", styles::text_muted(p)),
        ]);
        let shortcuts_width = shortcuts_line.width() as u16;

        buf.set_line(inner.x, inner.y, &left_line, inner.width);

        // Right-aligned pieces, dropped when they would collide with the left
        let right_x = inner.x + inner.width;
        if left_width + theme_width + 2 <= inner.width {
            buf.set_line(right_x - theme_width, inner.y, &theme_line, theme_width);

            if left_width + theme_width + shortcuts_width + 2 <= inner.width {
                let shortcuts_x = right_x - theme_width - shortcuts_width;
                buf.set_line(shortcuts_x, inner.y, &shortcuts_line, shortcuts_width);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette::{DARK, LIGHT};
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_header_renders_name_and_breadcrumb() {
        let mut term = TestTerminal::new();
        let header = MainHeader::new("Jawad Rahimi", &DARK).breadcrumb("Blog");

        term.render_widget(header, term.area());

        assert!(term.buffer_contains("Jawad Rahimi"));
        assert!(term.buffer_contains("/ Blog"));
    }

    #[test]
    fn test_header_shows_theme_label() {
        let mut term = TestTerminal::new();
        let header = MainHeader::new("Folio", &DARK).theme(ThemePreference::new(true));
        term.render_widget(header, term.area());
        assert!(term.buffer_contains("Dark"));

        let mut term = TestTerminal::new();
        let header = MainHeader::new("Folio", &LIGHT).theme(ThemePreference::new(false));
        term.render_widget(header, term.area());
        assert!(term.buffer_contains("Light"));
    }

    #[test]
    fn test_header_shows_shortcuts_when_wide() {
        let mut term = TestTerminal::with_size(100, 3);
        term.render_widget(MainHeader::new("Folio", &DARK), term.area());
        assert!(term.buffer_contains("[t] Theme"));
        assert!(term.buffer_contains("[q] Quit"));
    }

    #[test]
    fn test_header_compact_keeps_name() {
        let mut term = TestTerminal::compact();
        let header = MainHeader::new("Jawad Rahimi", &DARK)
            .breadcrumb("Projects / A very long project title that cannot fit");

        term.render_widget(header, term.area());

        assert!(term.buffer_contains("Jawad Rahimi"));
        assert!(!term.buffer_contains("[t] Theme"));
    }
}
