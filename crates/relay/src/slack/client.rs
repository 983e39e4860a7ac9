//! Incoming-webhook client.
//!
//! Posts a [`WebhookMessage`] to the configured webhook URL and interprets
//! the response. There is no retry and no explicit timeout.

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument, warn};

use super::error::WebhookError;
use super::types::WebhookMessage;

/// Client for a single incoming webhook.
#[derive(Clone)]
pub struct WebhookClient {
    /// HTTP client.
    client: Client,
    /// Webhook URL (embeds the webhook's credential).
    webhook_url: SecretString,
}

impl std::fmt::Debug for WebhookClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookClient")
            .field("webhook_url", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl WebhookClient {
    /// Create a new webhook client.
    #[must_use]
    pub fn new(webhook_url: SecretString) -> Self {
        Self {
            client: Client::new(),
            webhook_url,
        }
    }

    /// Post a message to the webhook.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::Request`] if no response was received, or
    /// [`WebhookError::Rejected`] with the response body if the webhook
    /// answered with a non-success status.
    #[instrument(skip(self, message), fields(channel = %message.channel))]
    pub async fn send(&self, message: &WebhookMessage) -> Result<(), WebhookError> {
        let response = self
            .client
            .post(self.webhook_url.expose_secret())
            .json(message)
            .send()
            .await
            .map_err(|e| WebhookError::Request(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, body = %body, "Webhook rejected message");
            return Err(WebhookError::Rejected { status, body });
        }

        debug!(%status, "Message posted to webhook");

        Ok(())
    }
}
