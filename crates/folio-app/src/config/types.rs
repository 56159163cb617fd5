//! Configuration types for Folio
//!
//! Defines:
//! - `Settings` - Application settings (`config.toml`)
//! - `ContactSettings` - Message dispatch endpoint and identifiers
//! - `SiteSettings` - Résumé location and link opener
//! - `Preferences` - Persisted user preferences (`preferences.toml`)

use serde::{Deserialize, Serialize};

/// Application settings (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub contact: ContactSettings,

    #[serde(default)]
    pub site: SiteSettings,
}

/// Contact form dispatch settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContactSettings {
    /// EmailJS service identifier
    #[serde(default = "default_service_id")]
    pub service_id: String,

    /// EmailJS template identifier
    #[serde(default = "default_template_id")]
    pub template_id: String,

    /// EmailJS public key (sent as `user_id`)
    #[serde(default = "default_public_key")]
    pub public_key: String,

    /// REST endpoint messages are posted to
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            service_id: default_service_id(),
            template_id: default_template_id(),
            public_key: default_public_key(),
            endpoint: default_endpoint(),
        }
    }
}

fn default_service_id() -> String {
    "service_3awva8d".to_string()
}

fn default_template_id() -> String {
    "template_kim0rat".to_string()
}

fn default_public_key() -> String {
    "agJWS10A7kzDKKkBT".to_string()
}

fn default_endpoint() -> String {
    "https://api.emailjs.com/api/v1.0/email/send".to_string()
}

/// Site asset and link settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SiteSettings {
    /// Résumé location: a URL or a filesystem path
    #[serde(default = "default_resume")]
    pub resume: String,

    /// Command used to open links and files (empty = platform default)
    #[serde(default)]
    pub opener: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            resume: default_resume(),
            opener: String::new(),
        }
    }
}

fn default_resume() -> String {
    "resume.pdf".to_string()
}

/// Persisted user preferences (`preferences.toml`)
///
/// `dark_mode` is `None` until the user (or a CLI flag) has chosen a theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool>,
}
