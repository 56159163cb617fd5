//! Centralized theme system.
//!
//! This module provides:
//! - `palette`: light and dark color sets
//! - `styles`: semantic style builders over a palette

pub mod palette;
pub mod styles;

pub use palette::Palette;
