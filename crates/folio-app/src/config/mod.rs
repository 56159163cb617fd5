//! Configuration file parsing for Folio
//!
//! Supports:
//! - `<config dir>/config.toml` - Contact dispatch and site settings
//! - `<config dir>/preferences.toml` - Persisted theme preference

pub mod settings;
pub mod types;

pub use settings::{default_config_dir, load_preferences, load_settings, save_preferences};
pub use types::*;
