//! Page scroll state - scroll position, viewport bounds and reveal requests.
//!
//! Shared by the handler layer (scroll commands, navigation resets) and the
//! TUI layer, which reports content and viewport sizes during render and
//! resolves section jumps against the laid-out page.

use crate::message::Section;

// ─────────────────────────────────────────────────────────────────────────────
// PageScrollState
// ─────────────────────────────────────────────────────────────────────────────

/// Vertical scroll state of the current page
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageScrollState {
    /// Current vertical scroll offset from top
    pub offset: usize,
    /// Total number of content lines (set during render)
    pub total_lines: usize,
    /// Visible lines (set during render)
    pub visible_lines: usize,
    /// Set when focus moved and the focused element should be brought into
    /// view on the next render
    pub reveal_pending: bool,
    /// Section to scroll to on the next render, once its line is known
    pub pending_jump: Option<Section>,
}

impl PageScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_lines)
    }

    /// Scroll up by n lines
    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    /// Scroll down by n lines
    pub fn scroll_down(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.max_offset());
    }

    /// Scroll to top
    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    /// Scroll to bottom
    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Page up
    pub fn page_up(&mut self) {
        let page = self.visible_lines.saturating_sub(2).max(1);
        self.scroll_up(page);
    }

    /// Page down
    pub fn page_down(&mut self) {
        let page = self.visible_lines.saturating_sub(2).max(1);
        self.scroll_down(page);
    }

    /// Back to the top of a freshly shown page
    pub fn reset(&mut self) {
        self.offset = 0;
        self.reveal_pending = false;
        self.pending_jump = None;
    }

    /// Ask the next render to scroll `section` to the top of the viewport
    pub fn request_jump(&mut self, section: Section) {
        self.pending_jump = Some(section);
        self.reveal_pending = false;
    }

    /// Put line `anchor` at the top, as far as the content allows
    pub fn jump_to(&mut self, anchor: usize) {
        self.pending_jump = None;
        self.offset = anchor.min(self.max_offset());
    }

    /// Ask the next render to bring the focused element into view
    pub fn request_reveal(&mut self) {
        self.reveal_pending = true;
        self.pending_jump = None;
    }

    /// Update with new content size, clamping the offset if content shrank
    pub fn update_content_size(&mut self, total: usize, visible: usize) {
        self.total_lines = total;
        self.visible_lines = visible;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Adjust the offset so lines `start..end` are visible, then clear any
    /// pending reveal. A range taller than the viewport is aligned to its top.
    pub fn reveal(&mut self, start: usize, end: usize) {
        self.reveal_pending = false;
        if start < self.offset || end.saturating_sub(start) > self.visible_lines {
            self.offset = start;
        } else if end > self.offset + self.visible_lines {
            self.offset = end.saturating_sub(self.visible_lines);
        }
        self.offset = self.offset.min(self.max_offset());
    }
}
