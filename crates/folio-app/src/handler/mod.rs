//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes and views
//! - `navigation`: View router and focus handlers
//! - `contact`: Contact form handlers
//! - `scroll`: Scroll handlers

pub(crate) mod contact;
pub(crate) mod keys;
pub(crate) mod navigation;
pub(crate) mod scroll;
pub(crate) mod update;


use crate::contact::ContactMessage;
use crate::links::LinkTarget;
use crate::message::Message;

// Re-export main entry point
pub use update::update;

// Re-export functions used by internal tests
#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Hand a validated contact message to the dispatcher.
    ///
    /// Runs on a background task; the outcome comes back as
    /// `ContactSent` or `ContactSendFailed`.
    DispatchContact { message: ContactMessage },

    /// Write the theme preference to `preferences.toml`
    PersistTheme { dark: bool },

    /// Open a URL or file with the platform opener.
    ///
    /// Fire-and-forget; failures come back as `LinkOpenFailed`.
    OpenExternal { target: LinkTarget },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
