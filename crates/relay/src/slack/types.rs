//! Incoming-webhook message types.
//!
//! These types represent the subset of a Slack webhook payload the relay
//! sends: a destination channel and one attachment.
//!
//! See: <https://api.slack.com/docs/message-attachments>
//!
//! `username`, `icon_url` and `icon_emoji` are deliberately absent so the
//! defaults configured on the webhook itself always apply.

use serde::Serialize;

/// A message posted to an incoming webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookMessage {
    /// Channel id, `#channel` name or `@user` to deliver to.
    pub channel: String,
    /// Message attachments.
    pub attachments: Vec<Attachment>,
}

/// A legacy message attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attachment {
    /// Text shown above the attachment.
    pub pretext: String,
    /// Attachment body.
    pub text: String,
    /// Bold heading.
    pub title: String,
    /// URL the heading links to.
    pub title_link: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_wire_shape() {
        let message = WebhookMessage {
            channel: "#general".to_string(),
            attachments: vec![Attachment {
                pretext: "intro".to_string(),
                text: "body".to_string(),
                title: "Title".to_string(),
                title_link: "https://example.com/#anchor".to_string(),
            }],
        };

        let value = serde_json::to_value(&message).expect("serializes");
        assert_eq!(
            value,
            json!({
                "channel": "#general",
                "attachments": [{
                    "pretext": "intro",
                    "text": "body",
                    "title": "Title",
                    "title_link": "https://example.com/#anchor",
                }],
            })
        );
    }
}
