//! Slack incoming-webhook integration.
//!
//! This module provides:
//! - [`WebhookClient`] for posting messages to the configured webhook
//! - Message types matching the webhook's JSON payload
//! - [`build_rule_message`] for turning a rule into a message

mod client;
mod error;
mod messages;
mod types;

pub use client::WebhookClient;
pub use error::WebhookError;
pub use messages::{PRIVATE_INTRO, PUBLIC_INTRO, build_rule_message, intro_for};
pub use types::{Attachment, WebhookMessage};
