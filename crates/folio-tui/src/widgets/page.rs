//! Scrollable page content
//!
//! Pages are built as a flat list of pre-wrapped lines so the scroll state can
//! work in line units. [`PageBuilder`] wraps text to the viewport width and
//! records which lines belong to the focused element and where each section
//! starts; [`PageView`] renders the visible window and reports sizes back
//! into [`PageScrollState`].

use std::ops::Range;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use folio_app::page_scroll::PageScrollState;
use folio_app::Section;

/// A laid-out page
#[derive(Debug, Default, Clone)]
pub struct Page {
    pub lines: Vec<Line<'static>>,
    /// Lines of the focused element, if any
    pub focus: Option<Range<usize>>,
    /// First line of each section on the page
    pub anchors: Vec<(Section, usize)>,
}

impl Page {
    pub fn anchor(&self, section: Section) -> Option<usize> {
        self.anchors
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, line)| *line)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Accumulates wrapped lines for one page
pub struct PageBuilder {
    width: usize,
    lines: Vec<Line<'static>>,
    focus: Option<Range<usize>>,
    anchors: Vec<(Section, usize)>,
}

impl PageBuilder {
    pub fn new(width: u16) -> Self {
        Self {
            width: usize::from(width).max(1),
            lines: Vec::new(),
            focus: None,
            anchors: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of lines so far
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    /// Push a pre-built line as is
    pub fn line(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    /// Wrapped text in a single style
    pub fn text(&mut self, text: &str, style: Style) {
        self.indented(0, text, style);
    }

    /// Wrapped text with every line indented
    pub fn indented(&mut self, indent: usize, text: &str, style: Style) {
        let pad = " ".repeat(indent);
        let width = self.width.saturating_sub(indent).max(1);
        for row in wrap(text, width) {
            self.lines.push(Line::from(vec![
                Span::raw(pad.clone()),
                Span::styled(row, style),
            ]));
        }
    }

    /// Wrapped text behind a marker; continuation lines align with the text
    pub fn bullet(&mut self, indent: usize, marker: &str, text: &str, marker_style: Style, style: Style) {
        let lead = indent + marker.width() + 1;
        let width = self.width.saturating_sub(lead).max(1);
        for (i, row) in wrap(text, width).into_iter().enumerate() {
            let prefix = if i == 0 {
                Span::styled(format!("{}{} ", " ".repeat(indent), marker), marker_style)
            } else {
                Span::raw(" ".repeat(lead))
            };
            self.lines
                .push(Line::from(vec![prefix, Span::styled(row, style)]));
        }
    }

    /// Section heading preceded by a blank line (unless first on the page)
    pub fn section_title(&mut self, title: &str, style: Style) {
        if !self.lines.is_empty() {
            self.blank();
        }
        self.text(title, style);
        self.blank();
    }

    /// Subheading inside a section
    pub fn heading(&mut self, title: &str, style: Style) {
        if !self.lines.is_empty() {
            self.blank();
        }
        self.text(title, style);
    }

    /// Horizontal rule across the full width
    pub fn rule(&mut self, style: Style) {
        self.lines
            .push(Line::from(Span::styled("─".repeat(self.width), style)));
    }

    /// Mark the next line as the start of `section`
    pub fn anchor(&mut self, section: Section) {
        self.anchors.push((section, self.lines.len()));
    }

    /// Build lines with `build`; when `focused`, they become the focus range
    pub fn focusable(&mut self, focused: bool, build: impl FnOnce(&mut Self)) {
        let start = self.lines.len();
        build(self);
        if focused {
            self.focus = Some(start..self.lines.len());
        }
    }

    pub fn finish(self) -> Page {
        Page {
            lines: self.lines,
            focus: self.focus,
            anchors: self.anchors,
        }
    }
}

/// Word-wrap `text` to `width` display columns.
///
/// Explicit newlines are kept as breaks, and words longer than a line are
/// split at character boundaries. Empty input yields a single empty row.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for paragraph in text.split('\n') {
        let mut row = String::new();
        let mut row_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let needed = if row.is_empty() { word_width } else { word_width + 1 };

            if row_width + needed <= width {
                if !row.is_empty() {
                    row.push(' ');
                }
                row.push_str(word);
                row_width += needed;
                continue;
            }

            if !row.is_empty() {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }

            if word_width <= width {
                row.push_str(word);
                row_width = word_width;
            } else {
                for ch in word.chars() {
                    let ch_width = ch.width().unwrap_or(0);
                    if row_width + ch_width > width && !row.is_empty() {
                        rows.push(std::mem::take(&mut row));
                        row_width = 0;
                    }
                    row.push(ch);
                    row_width += ch_width;
                }
            }
        }

        rows.push(row);
    }

    rows
}

// ─────────────────────────────────────────────────────────────────────────────
// PageView
// ─────────────────────────────────────────────────────────────────────────────

/// Renders the visible window of a [`Page`]
pub struct PageView<'a> {
    page: &'a Page,
    style: Style,
}

impl<'a> PageView<'a> {
    pub fn new(page: &'a Page) -> Self {
        Self {
            page,
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl StatefulWidget for PageView<'_> {
    type State = PageScrollState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.update_content_size(self.page.len(), usize::from(area.height));

        if let Some(section) = state.pending_jump {
            match self.page.anchor(section) {
                Some(line) => state.jump_to(line),
                None => state.pending_jump = None,
            }
        }

        if state.reveal_pending {
            match &self.page.focus {
                Some(range) => state.reveal(range.start, range.end),
                None => state.reveal_pending = false,
            }
        }

        let end = (state.offset + usize::from(area.height)).min(self.page.len());
        let visible = self.page.lines[state.offset.min(end)..end].to_vec();

        Paragraph::new(visible).style(self.style).render(area, buf);
    }
}
