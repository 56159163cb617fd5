//! folio-tui - Terminal UI for Folio
//!
//! This crate provides the ratatui-based terminal interface: the page
//! widgets, the light and dark palettes, event polling and the runner that
//! ties them to the folio-app state machine.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use runner::{run, RunOptions};
