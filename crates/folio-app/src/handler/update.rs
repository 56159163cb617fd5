//! Main update function - handles state transitions (TEA pattern)
//!
//! Handler implementations live in:
//! - `navigation`: view router and focus handlers
//! - `contact`: contact form handlers
//! - `scroll`: scroll message handlers

use crate::links::LinkTarget;
use crate::message::{Message, ProjectLink};
use crate::state::{AppPhase, AppState};
use folio_core::prelude::*;

use super::{contact, keys::handle_key, navigation, scroll, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::Navigate { kind, id } => navigation::handle_navigate(state, kind, id),
        Message::NavigateHome => navigation::handle_navigate_home(state),
        Message::JumpToSection(section) => navigation::handle_jump_to_section(state, section),

        // ─────────────────────────────────────────────────────────
        // Focus Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => navigation::handle_focus_next(state),
        Message::FocusPrev => navigation::handle_focus_prev(state),
        Message::FocusNextControl => navigation::handle_focus_next_control(state),
        Message::FocusPrevControl => navigation::handle_focus_prev_control(state),
        Message::ActivateFocused => navigation::handle_activate_focused(state),

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => scroll::handle_scroll_up(state),
        Message::ScrollDown => scroll::handle_scroll_down(state),
        Message::ScrollToTop => scroll::handle_scroll_to_top(state),
        Message::ScrollToBottom => scroll::handle_scroll_to_bottom(state),
        Message::PageUp => scroll::handle_page_up(state),
        Message::PageDown => scroll::handle_page_down(state),

        // ─────────────────────────────────────────────────────────
        // Theme Messages
        // ─────────────────────────────────────────────────────────
        Message::ToggleTheme => {
            let theme = state.toggle_theme();
            info!("Theme switched to {}", theme.label());
            UpdateResult::action(UpdateAction::PersistTheme { dark: theme.dark })
        }

        Message::ThemeSaveFailed { error } => {
            // The in-memory choice stays; only the saved copy is stale
            state.status_message = Some(format!("Could not save theme preference: {}", error));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // External Link Messages
        // ─────────────────────────────────────────────────────────
        Message::OpenProjectLink { id, link } => handle_open_project_link(state, &id, link),

        Message::OpenResume => handle_open_resume(state),

        Message::LinkOpenFailed { target, error } => {
            state.status_message = Some(format!("Could not open {}: {}", target, error));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Contact Form Messages
        // ─────────────────────────────────────────────────────────
        Message::OpenContactForm => contact::handle_open(state),
        Message::CloseContactForm => contact::handle_close(state),
        Message::ContactInput(c) => contact::handle_input(state, c),
        Message::ContactBackspace => contact::handle_backspace(state),
        Message::ContactEnter => contact::handle_enter(state),
        Message::ContactNextField => contact::handle_next_field(state),
        Message::ContactPrevField => contact::handle_prev_field(state),
        Message::SubmitContact => contact::handle_submit(state),
        Message::ContactSent => contact::handle_sent(state),
        Message::ContactSendFailed { error } => contact::handle_send_failed(state, error),
    }
}

/// Open a project's demo or code link, or report that it has none
fn handle_open_project_link(state: &mut AppState, id: &str, link: ProjectLink) -> UpdateResult {
    let Some(project) = state.catalog.projects.iter().find(|p| p.id == id) else {
        warn!("Link requested for unknown project '{}'", id);
        return UpdateResult::none();
    };

    let url = match link {
        ProjectLink::LiveDemo => project.demo_url.as_deref(),
        ProjectLink::Code => project.code_url.as_deref(),
    };

    match url.and_then(|url| LinkTarget::parse(url, &state.config_dir)) {
        Some(target) => {
            state.status_message = Some(format!("Opening {}", target));
            UpdateResult::action(UpdateAction::OpenExternal { target })
        }
        None => {
            state.status_message = Some(format!(
                "{} is not available for {}",
                link.label(),
                project.title
            ));
            UpdateResult::none()
        }
    }
}

fn handle_open_resume(state: &mut AppState) -> UpdateResult {
    match LinkTarget::parse(&state.settings.site.resume, &state.config_dir) {
        Some(target) => {
            state.status_message = Some(format!("Opening résumé: {}", target));
            UpdateResult::action(UpdateAction::OpenExternal { target })
        }
        None => {
            state.status_message = Some("No résumé configured".to_string());
            UpdateResult::none()
        }
    }
}
