//! Message builders for relayed social rules.

use socialrules_core::{Destination, Rule, RuleCatalog};

use super::types::{Attachment, WebhookMessage};

/// Intro used when the rule goes to a single user.
pub const PRIVATE_INTRO: &str =
    "Someone asked me to share this Recurse Center social rule with you.";

/// Intro used when the rule goes to a channel.
pub const PUBLIC_INTRO: &str =
    "Someone asked me to share this Recurse Center social rule with the group.";

/// Pick the intro sentence for a destination.
#[must_use]
pub const fn intro_for(destination: &Destination) -> &'static str {
    if destination.is_private() {
        PRIVATE_INTRO
    } else {
        PUBLIC_INTRO
    }
}

/// Build the webhook message sharing `rule` with `destination`.
///
/// The attachment is titled with the rule and links to its section of the
/// catalog's manual.
#[must_use]
pub fn build_rule_message(
    catalog: &RuleCatalog,
    rule: &Rule,
    destination: &Destination,
) -> WebhookMessage {
    WebhookMessage {
        channel: destination.as_str().to_string(),
        attachments: vec![Attachment {
            pretext: intro_for(destination).to_string(),
            text: rule.description.to_string(),
            title: rule.title.to_string(),
            title_link: catalog.uri_for(rule),
        }],
    }
}
