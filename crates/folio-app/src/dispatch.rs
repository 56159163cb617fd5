//! Outbound message dispatch for the contact form
//!
//! The [`MessageDispatcher`] trait is the seam between the form state machine
//! and whatever actually delivers the message. The production implementation
//! posts to the EmailJS REST API.

use std::time::Duration;

use serde::Serialize;

use crate::config::ContactSettings;
use crate::contact::ContactMessage;
use folio_core::prelude::*;

/// HTTP timeout for a single dispatch
const DISPATCH_TIMEOUT: Duration = Duration::from_secs(20);

/// Delivers contact form messages.
///
/// One attempt per call; no retry.
#[trait_variant::make(MessageDispatcher: Send)]
pub trait LocalMessageDispatcher {
    async fn dispatch(&self, message: &ContactMessage) -> Result<()>;
}

/// JSON body accepted by the EmailJS send endpoint
#[derive(Debug, Serialize)]
pub struct EmailJsPayload<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a ContactMessage,
}

impl<'a> EmailJsPayload<'a> {
    pub fn new(settings: &'a ContactSettings, message: &'a ContactMessage) -> Self {
        Self {
            service_id: &settings.service_id,
            template_id: &settings.template_id,
            user_id: &settings.public_key,
            template_params: message,
        }
    }
}

/// Sends messages through the EmailJS REST API
pub struct EmailJsDispatcher {
    settings: ContactSettings,
    http_client: reqwest::Client,
}

impl EmailJsDispatcher {
    pub fn new(settings: ContactSettings) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(DISPATCH_TIMEOUT)
            .build()
            .map_err(|e| Error::dispatch(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            settings,
            http_client,
        })
    }
}

impl MessageDispatcher for EmailJsDispatcher {
    async fn dispatch(&self, message: &ContactMessage) -> Result<()> {
        let payload = EmailJsPayload::new(&self.settings, message);
        debug!("Dispatching contact message to {}", self.settings.endpoint);

        let response = self
            .http_client
            .post(&self.settings.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|e| Error::dispatch(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            info!("Contact message delivered");
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(Error::dispatch(format!("HTTP {}: {}", status, body.trim())))
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Dispatcher with a fixed outcome that counts its calls
    pub struct ScriptedDispatcher {
        succeed: bool,
        pub calls: AtomicUsize,
    }

    impl ScriptedDispatcher {
        pub fn succeeding() -> Self {
            Self {
                succeed: true,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn failing() -> Self {
            Self {
                succeed: false,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl MessageDispatcher for ScriptedDispatcher {
        async fn dispatch(&self, _message: &ContactMessage) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.succeed {
                Ok(())
            } else {
                Err(Error::dispatch("scripted failure"))
            }
        }
    }
}
