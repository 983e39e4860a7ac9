//! Webhook relay errors.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when posting to the incoming webhook.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The request never produced a response (DNS, connect, TLS, ...).
    #[error("Webhook request failed: {0}")]
    Request(String),

    /// The webhook answered with a non-success status.
    ///
    /// Slack puts a short error code such as `invalid_token` in the body.
    #[error("Webhook rejected message ({status}): {body}")]
    Rejected {
        /// HTTP status returned by the webhook.
        status: StatusCode,
        /// Response body, as text.
        body: String,
    },
}
