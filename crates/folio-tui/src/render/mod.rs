//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use chrono::{Datelike, Local};
use ratatui::style::Style;
use ratatui::widgets::{Block, Padding};
use ratatui::Frame;

use folio_app::{AppState, ViewState};

use super::{layout, widgets};
use crate::theme::{styles, Palette};

/// Render the complete UI (View function in TEA)
///
/// Only the page scroll state is written: the page view reports content and
/// viewport sizes and consumes pending reveal requests.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    render_at(frame, state, Local::now().year());
}

fn render_at(frame: &mut Frame, state: &mut AppState, year: i32) {
    let palette = Palette::for_theme(state.theme);
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette.background));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    let crumb = breadcrumb(state);
    let header = widgets::MainHeader::new(&state.catalog.profile.hero.name, palette)
        .breadcrumb(&crumb)
        .theme(state.theme);
    frame.render_widget(header, areas.header);

    let body_block = styles::glass_block(palette, false).padding(Padding::horizontal(1));
    let inner = body_block.inner(areas.body);
    frame.render_widget(body_block, areas.body);

    let page = match &state.view {
        ViewState::Home => widgets::home_page(state, palette, inner.width, year),
        ViewState::Detail { kind, id } => {
            widgets::detail_page(state, *kind, id, palette, inner.width)
        }
    };
    frame.render_stateful_widget(
        widgets::PageView::new(&page).style(styles::text_primary(palette)),
        inner,
        &mut state.scroll,
    );

    frame.render_widget(widgets::StatusBar::new(state, palette), areas.status);

    if state.is_contact_open() {
        frame.render_widget(widgets::ContactFormModal::new(&state.contact, palette), area);
    }
}

/// Where the reader is, for the header
fn breadcrumb(state: &AppState) -> String {
    match &state.view {
        ViewState::Home => "Home".to_string(),
        ViewState::Detail { kind, id } => {
            let title = state
                .catalog
                .resolve(*kind, id)
                .map(|record| record.title().to_string())
                .unwrap_or_else(|_| id.clone());
            format!("{} / {}", kind.section_title(), title)
        }
    }
}
