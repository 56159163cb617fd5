//! View router and focus handlers
//!
//! Navigation replaces the view wholesale and scrolls to the top. Focus
//! handlers act on home page cards or, on an article page, on the related
//! article links.

use crate::message::{Message, Section};
use crate::state::{AppState, CardControl};
use folio_core::ContentKind;

use super::UpdateResult;

/// Handle navigation to a detail view
pub fn handle_navigate(state: &mut AppState, kind: ContentKind, id: String) -> UpdateResult {
    state.navigate(kind, id);
    UpdateResult::none()
}

/// Handle navigation back to the home page
pub fn handle_navigate_home(state: &mut AppState) -> UpdateResult {
    state.navigate_home();
    UpdateResult::none()
}

/// Handle a jump to a home page section
pub fn handle_jump_to_section(state: &mut AppState, section: Section) -> UpdateResult {
    state.jump_to_section(section);
    UpdateResult::none()
}

pub fn handle_focus_next(state: &mut AppState) -> UpdateResult {
    match state.view.detail() {
        None => state.focus_next_card(),
        Some((ContentKind::Article, _)) => state.focus_next_related(),
        Some(_) => {}
    }
    UpdateResult::none()
}

pub fn handle_focus_prev(state: &mut AppState) -> UpdateResult {
    match state.view.detail() {
        None => state.focus_prev_card(),
        Some((ContentKind::Article, _)) => state.focus_prev_related(),
        Some(_) => {}
    }
    UpdateResult::none()
}

pub fn handle_focus_next_control(state: &mut AppState) -> UpdateResult {
    if state.view.is_home() {
        state.focus_next_control();
    }
    UpdateResult::none()
}

pub fn handle_focus_prev_control(state: &mut AppState) -> UpdateResult {
    if state.view.is_home() {
        state.focus_prev_control();
    }
    UpdateResult::none()
}

/// Activate whatever has focus.
///
/// A card's own control navigates to its detail view. A nested project
/// control opens its link and never navigates. On an article page the
/// focused related link re-navigates.
pub fn handle_activate_focused(state: &mut AppState) -> UpdateResult {
    if state.view.is_home() {
        let Some(card) = state.focused_card() else {
            return UpdateResult::none();
        };
        let msg = match state.home_focus.control {
            CardControl::Open => Message::Navigate {
                kind: card.kind,
                id: card.id.clone(),
            },
            CardControl::Link(link) => Message::OpenProjectLink {
                id: card.id.clone(),
                link,
            },
        };
        return UpdateResult::message(msg);
    }

    match state.focused_related() {
        Some(id) => UpdateResult::message(Message::Navigate {
            kind: ContentKind::Article,
            id,
        }),
        None => UpdateResult::none(),
    }
}
