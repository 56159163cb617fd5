//! Contact form handlers

use crate::contact::FormStatus;
use crate::state::AppState;
use folio_core::prelude::*;

use super::{UpdateAction, UpdateResult};

pub fn handle_open(state: &mut AppState) -> UpdateResult {
    state.open_contact_form();
    UpdateResult::none()
}

/// Leave the form. Field values and any in-flight submission are kept.
pub fn handle_close(state: &mut AppState) -> UpdateResult {
    state.close_contact_form();
    UpdateResult::none()
}

pub fn handle_input(state: &mut AppState, c: char) -> UpdateResult {
    state.contact.insert_char(c);
    UpdateResult::none()
}

pub fn handle_backspace(state: &mut AppState) -> UpdateResult {
    state.contact.backspace();
    UpdateResult::none()
}

pub fn handle_enter(state: &mut AppState) -> UpdateResult {
    state.contact.enter();
    UpdateResult::none()
}

pub fn handle_next_field(state: &mut AppState) -> UpdateResult {
    state.contact.focus_next();
    UpdateResult::none()
}

pub fn handle_prev_field(state: &mut AppState) -> UpdateResult {
    state.contact.focus_prev();
    UpdateResult::none()
}

/// Validate and, if every field is filled in, hand the message off
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    if state.contact.status == FormStatus::Submitting {
        debug!("Submit ignored: a message is already being sent");
        return UpdateResult::none();
    }

    match state.contact.begin_submit() {
        Some(message) => {
            info!("Submitting contact message from {}", message.email);
            UpdateResult::action(UpdateAction::DispatchContact { message })
        }
        None => {
            debug!("Contact submit rejected: {:?}", state.contact.missing_fields());
            UpdateResult::none()
        }
    }
}

pub fn handle_sent(state: &mut AppState) -> UpdateResult {
    state.contact.complete(true);
    UpdateResult::none()
}

pub fn handle_send_failed(state: &mut AppState, error: String) -> UpdateResult {
    warn!("Contact message failed: {}", error);
    state.contact.complete(false);
    UpdateResult::none()
}
