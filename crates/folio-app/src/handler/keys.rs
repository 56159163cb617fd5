//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::{Message, Section};
use crate::state::{AppState, UiMode};
use folio_core::ContentKind;

/// Convert key events to messages based on current UI mode and view
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::ContactForm => handle_key_contact_form(key),
        UiMode::Browse => match state.view.detail() {
            None => handle_key_home(key),
            Some((kind, _)) => handle_key_detail(kind, key),
        },
    }
}

/// Keys shared by every page: scrolling and theme
fn handle_key_page(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('j') | InputKey::Down => Some(Message::ScrollDown),
        InputKey::Char('k') | InputKey::Up => Some(Message::ScrollUp),
        InputKey::Char('g') | InputKey::Home => Some(Message::ScrollToTop),
        InputKey::Char('G') | InputKey::End => Some(Message::ScrollToBottom),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),

        InputKey::Char('t') => Some(Message::ToggleTheme),

        // Force quit - Ctrl+C for emergency exit
        InputKey::CharCtrl('c') => Some(Message::Quit),

        _ => None,
    }
}

/// Handle key events on the home page
fn handle_key_home(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),

        // ─────────────────────────────────────────────────────────
        // Card Focus
        // ─────────────────────────────────────────────────────────
        InputKey::Tab => Some(Message::FocusNext),
        InputKey::BackTab => Some(Message::FocusPrev),
        InputKey::Right | InputKey::Char('l') => Some(Message::FocusNextControl),
        InputKey::Left | InputKey::Char('h') => Some(Message::FocusPrevControl),
        InputKey::Enter => Some(Message::ActivateFocused),

        InputKey::Char('c') => Some(Message::OpenContactForm),
        InputKey::Char('d') => Some(Message::OpenResume),

        // ─────────────────────────────────────────────────────────
        // Section Jumps
        // ─────────────────────────────────────────────────────────
        InputKey::Char('w') => Some(Message::JumpToSection(Section::Projects)),
        InputKey::Char(c) if Section::from_key(c).is_some() => {
            Section::from_key(c).map(Message::JumpToSection)
        }

        _ => handle_key_page(key),
    }
}

/// Handle key events on a detail page
fn handle_key_detail(kind: ContentKind, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Char('b') | InputKey::Backspace => Some(Message::NavigateHome),
        InputKey::Char('q') => Some(Message::Quit),

        // Related article links
        InputKey::Tab if kind == ContentKind::Article => Some(Message::FocusNext),
        InputKey::BackTab if kind == ContentKind::Article => Some(Message::FocusPrev),
        InputKey::Enter if kind == ContentKind::Article => Some(Message::ActivateFocused),

        _ => handle_key_page(key),
    }
}

/// Handle key events while the contact form has focus
fn handle_key_contact_form(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CloseContactForm),
        InputKey::CharCtrl('s') => Some(Message::SubmitContact),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Tab | InputKey::Down => Some(Message::ContactNextField),
        InputKey::BackTab | InputKey::Up => Some(Message::ContactPrevField),

        InputKey::Enter => Some(Message::ContactEnter),
        InputKey::Backspace => Some(Message::ContactBackspace),
        InputKey::Char(c) => Some(Message::ContactInput(c)),

        _ => None,
    }
}
