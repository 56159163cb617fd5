//! Loading and saving `config.toml` and `preferences.toml`

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;

use super::types::{Preferences, Settings};
use folio_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const PREFERENCES_FILENAME: &str = "preferences.toml";
const APP_DIR: &str = "folio";

const PREFERENCES_HEADER: &str = "# Folio user preferences\n\
                                  # Written by the application; edit while it is not running\n\n";

/// Default configuration directory (`~/.config/folio` on Linux)
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Parse a TOML file, or `Ok(None)` when there is no file
fn read_toml<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)?;
    Ok(Some(toml::from_str(&content)?))
}

/// Like [`read_toml`], but any problem falls back to `T::default()`
fn load_or_default<T: DeserializeOwned + Default>(path: &Path, what: &str) -> T {
    match read_toml(path) {
        Ok(Some(value)) => {
            debug!("Loaded {} from {:?}", what, path);
            value
        }
        Ok(None) => {
            debug!("No {} file at {:?}, using defaults", what, path);
            T::default()
        }
        Err(e) => {
            warn!("Ignoring {} file {:?}: {}", what, path, e);
            T::default()
        }
    }
}

/// Load settings from `<config_dir>/config.toml`
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(config_dir: &Path) -> Settings {
    load_or_default(&config_dir.join(CONFIG_FILENAME), "settings")
}

/// Load preferences from `<config_dir>/preferences.toml`
///
/// A missing or unreadable file yields empty preferences.
pub fn load_preferences(config_dir: &Path) -> Preferences {
    load_or_default(&config_dir.join(PREFERENCES_FILENAME), "preferences")
}

/// Replace `<config_dir>/preferences.toml`, creating the directory if needed.
///
/// The new content is staged in a uniquely named temp file next to the target
/// and renamed over it, so readers never see a partial file and two writers
/// never share a staging path.
pub fn save_preferences(config_dir: &Path, prefs: &Preferences) -> Result<()> {
    std::fs::create_dir_all(config_dir)?;

    let body = toml::to_string_pretty(prefs)
        .map_err(|e| Error::config(format!("Failed to serialize preferences: {}", e)))?;

    let mut staged = NamedTempFile::new_in(config_dir)?;
    staged.write_all(PREFERENCES_HEADER.as_bytes())?;
    staged.write_all(body.as_bytes())?;
    staged.flush()?;

    let prefs_path = config_dir.join(PREFERENCES_FILENAME);
    staged.persist(&prefs_path).map_err(|e| Error::Io(e.error))?;

    debug!("Saved preferences to {:?}", prefs_path);
    Ok(())
}
