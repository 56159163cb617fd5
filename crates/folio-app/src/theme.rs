//! Theme preference and its startup resolution

use crate::config::Preferences;

/// Environment variable some terminals set to `"<fg>;<bg>"` color indexes
pub const COLORFGBG_VAR: &str = "COLORFGBG";

/// The user's light/dark choice
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemePreference {
    pub dark: bool,
}

impl ThemePreference {
    pub fn new(dark: bool) -> Self {
        Self { dark }
    }

    pub fn toggled(self) -> Self {
        Self { dark: !self.dark }
    }

    pub fn label(&self) -> &'static str {
        if self.dark {
            "dark"
        } else {
            "light"
        }
    }
}

/// Where the startup theme came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    /// `--dark` / `--light` on the command line
    Forced,
    /// `preferences.toml`
    Persisted,
    /// The terminal's background color signal
    Terminal,
}

/// Decide the startup theme.
///
/// A forced value wins, then a persisted value, then the terminal signal.
pub fn resolve_initial_theme(
    forced: Option<bool>,
    prefs: &Preferences,
    terminal_dark: impl FnOnce() -> bool,
) -> (ThemePreference, ThemeSource) {
    if let Some(dark) = forced {
        return (ThemePreference::new(dark), ThemeSource::Forced);
    }
    if let Some(dark) = prefs.dark_mode {
        return (ThemePreference::new(dark), ThemeSource::Persisted);
    }
    (ThemePreference::new(terminal_dark()), ThemeSource::Terminal)
}

/// Interpret a `COLORFGBG` value.
///
/// The background is the last `;`-separated field. Indexes 0-6 and 8 are
/// dark colors in the standard 16-color palette. Anything missing or
/// unparsable reads as "not dark".
pub fn colorfgbg_is_dark(value: Option<&str>) -> bool {
    let Some(value) = value else {
        return false;
    };
    match value.rsplit(';').next().map(str::trim).map(str::parse::<u8>) {
        Some(Ok(bg)) => bg <= 6 || bg == 8,
        _ => false,
    }
}

/// Sample the terminal's "prefers dark" signal from the environment
pub fn terminal_prefers_dark() -> bool {
    colorfgbg_is_dark(std::env::var(COLORFGBG_VAR).ok().as_deref())
}
