//! Status bar widget
//!
//! Displays the current mode, key hints or the latest status message, and
//! the scroll position of the page.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use folio_app::page_scroll::PageScrollState;
use folio_app::{AppState, UiMode, ViewState};
use folio_core::ContentKind;

use crate::theme::{styles, Palette};

/// Status bar widget showing application state
pub struct StatusBar<'a> {
    state: &'a AppState,
    palette: &'a Palette,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }

    fn mode_indicator(&self) -> Span<'static> {
        let p = self.palette;
        match (self.state.ui_mode, &self.state.view) {
            (UiMode::ContactForm, _) => Span::styled("✎ Contact", styles::accent_bold(p)),
            (UiMode::Browse, ViewState::Home) => Span::styled("● Home", styles::accent_bold(p)),
            (UiMode::Browse, ViewState::Detail { kind, .. }) => {
                Span::styled(format!("● {}", kind.section_title()), styles::accent_bold(p))
            }
        }
    }

    /// `(key, label)` pairs for the current mode and view
    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match (self.state.ui_mode, &self.state.view) {
            (UiMode::ContactForm, _) => &[
                ("Tab", "Next field"),
                ("Ctrl+S", "Send"),
                ("Esc", "Close"),
            ],
            (UiMode::Browse, ViewState::Home) => &[
                ("Tab", "Focus"),
                ("←/→", "Links"),
                ("Enter", "Open"),
                ("1-6", "Sections"),
                ("c", "Contact"),
                ("d", "Résumé"),
            ],
            (
                UiMode::Browse,
                ViewState::Detail {
                    kind: ContentKind::Article,
                    ..
                },
            ) => &[("Esc", "Back"), ("j/k", "Scroll"), ("Tab", "Related")],
            (UiMode::Browse, ViewState::Detail { .. }) => &[("Esc", "Back"), ("j/k", "Scroll")],
        }
    }

    fn hint_spans(&self) -> Vec<Span<'static>> {
        let p = self.palette;
        let mut spans = Vec::new();
        for (key, label) in self.hints() {
            spans.push(Span::styled("[", styles::text_muted(p)));
            spans.push(Span::styled(*key, styles::keybinding(p)));
            spans.push(Span::styled(format!("] {}  ", label), styles::text_muted(p)));
        }
        spans
    }

    /// Build all segments with separators
    fn build_segments(&self) -> Vec<Span<'static>> {
        let p = self.palette;
        let separator = Span::styled(" │ ", styles::border_inactive(p));

        let mut segments = vec![Span::raw(" "), self.mode_indicator()];

        segments.push(separator.clone());
        match &self.state.status_message {
            Some(message) => segments.push(Span::styled(message.clone(), styles::status_busy(p))),
            None => segments.extend(self.hint_spans()),
        }

        segments.push(separator);
        segments.push(Span::styled(
            scroll_position(&self.state.scroll),
            styles::text_muted(p),
        ));

        segments
    }
}

/// `first-last/total` for the visible lines
fn scroll_position(scroll: &PageScrollState) -> String {
    if scroll.total_lines == 0 {
        return "0/0".to_string();
    }
    let first = scroll.offset + 1;
    let last = (scroll.offset + scroll.visible_lines).min(scroll.total_lines);
    format!("{}-{}/{}", first, last, scroll.total_lines)
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Top border doubles as a separator from the page
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(styles::border_inactive(self.palette));

        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(Line::from(self.build_segments()))
            .style(styles::text_primary(self.palette))
            .render(inner, buf);
    }
}
