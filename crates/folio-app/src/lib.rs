//! folio-app - Application state and orchestration for Folio
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! portfolio: the view router and focus model, the contact form state
//! machine, the theme preference, configuration loading, the message
//! dispatch service and the executor for side-effecting actions.

pub mod actions;
pub mod config;
pub mod contact;
pub mod dispatch;
pub mod handler;
pub mod input_key;
pub mod links;
pub mod message;
pub mod page_scroll;
pub mod process;
pub mod signals;
pub mod state;
pub mod theme;

// Re-export primary types
pub use actions::ActionContext;
pub use contact::{ContactForm, FormField, FormStatus};
pub use dispatch::{EmailJsDispatcher, MessageDispatcher};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::{Message, ProjectLink, Section};
pub use state::{AppState, CardControl, UiMode, ViewState};
pub use theme::ThemePreference;
