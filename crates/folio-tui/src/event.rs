//! Terminal event polling

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use folio_app::message::Message;
use folio_app::InputKey;
use folio_core::prelude::*;
use std::time::Duration;

/// Map a terminal key press onto the keys Folio binds.
///
/// Ctrl chords are folded to lowercase so `Ctrl+Shift+S` still submits.
pub fn key_event_to_input(key: KeyEvent) -> Option<InputKey> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    let input = match key.code {
        KeyCode::Char(c) if ctrl => InputKey::CharCtrl(c.to_ascii_lowercase()),
        KeyCode::Char(c) => InputKey::Char(c),
        KeyCode::BackTab => InputKey::BackTab,
        KeyCode::Tab if shift => InputKey::BackTab,
        KeyCode::Tab => InputKey::Tab,
        KeyCode::Enter => InputKey::Enter,
        KeyCode::Esc => InputKey::Esc,
        KeyCode::Backspace => InputKey::Backspace,
        code => return movement_key(code),
    };
    Some(input)
}

/// Arrow and paging keys used for scrolling and focus
fn movement_key(code: KeyCode) -> Option<InputKey> {
    let input = match code {
        KeyCode::Up => InputKey::Up,
        KeyCode::Down => InputKey::Down,
        KeyCode::Left => InputKey::Left,
        KeyCode::Right => InputKey::Right,
        KeyCode::Home => InputKey::Home,
        KeyCode::End => InputKey::End,
        KeyCode::PageUp => InputKey::PageUp,
        KeyCode::PageDown => InputKey::PageDown,
        _ => return None,
    };
    Some(input)
}

/// Poll timeout; also the tick interval when the terminal is idle
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Poll for terminal events with timeout
pub fn poll() -> Result<Option<Message>> {
    if !event::poll(POLL_INTERVAL)? {
        return Ok(Some(Message::Tick));
    }

    match event::read()? {
        Event::Key(key) if key.kind == event::KeyEventKind::Press => {
            Ok(key_event_to_input(key).map(Message::Key))
        }
        // Resize is picked up by the next draw
        Event::Resize(width, height) => {
            trace!("Terminal resized to {}x{}", width, height);
            Ok(None)
        }
        _ => Ok(None),
    }
}
