//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header rows: top border, title row, bottom border
const HEADER_HEIGHT: u16 = 3;

/// Status bar rows: separator border, status row
const STATUS_HEIGHT: u16 = 2;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Name, breadcrumb and theme pill
    pub header: Rect,

    /// The scrolling page
    pub body: Rect,

    /// Mode, hints and scroll position
    pub status: Rect,
}

/// Split the screen into header, page body and status bar
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(1),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}
