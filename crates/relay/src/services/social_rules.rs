//! Social rules service.
//!
//! Orchestrates one slash command:
//! 1. Answer with usage if no keyword (or `help`) was given
//! 2. Match the keyword against the rule catalog
//! 3. Format the matched rule for the destination and post it to the webhook
//! 4. Turn the result into the reply shown to the invoking user

use core::fmt;
use std::sync::Arc;

use reqwest::StatusCode;
use socialrules_core::{ParsedCommand, RuleCatalog};
use tracing::{debug, error, info, instrument, warn};

use crate::middleware::RequestId;
use crate::slack::{WebhookClient, WebhookError, build_rule_message};

/// Usage text returned for `help`, an empty command, or an unknown keyword.
pub const USAGE: &str = "Usage: `/socialrules [surprise|wellactually|backseat|subtle] [<@user>]`\n\
    Anonymously send a Recurse Center social rule either publicly to your current channel \
    or privately to a specific user.";

/// The result of handling one slash command.
///
/// Renders, via [`fmt::Display`], to the plain-text reply for the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashOutcome {
    /// No keyword, or `help`.
    Usage,
    /// The keyword matched no rule.
    Unknown(String),
    /// A rule was sent privately; the caller gets a confirmation.
    Sent {
        /// Title of the rule that was sent.
        title: String,
        /// The `@user` it was sent to.
        destination: String,
    },
    /// A rule was posted publicly; the post is its own confirmation.
    Relayed,
    /// The webhook answered with a non-success status.
    RelayRejected {
        /// Status returned by the webhook.
        status: StatusCode,
        /// Response body returned by the webhook.
        body: String,
    },
    /// The webhook could not be reached at all.
    RelayUnavailable,
}

impl fmt::Display for SlashOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage => f.write_str(USAGE),
            Self::Unknown(keyword) => write!(f, "Sorry I don't know about `{keyword}`.\n{USAGE}"),
            Self::Sent { title, destination } => {
                write!(f, "Okay, I sent \"{title}\" to <{destination}>")
            }
            Self::Relayed => Ok(()),
            Self::RelayRejected { status, body } => {
                write!(f, "Something went wrong ({status}): {body}")
            }
            Self::RelayUnavailable => {
                f.write_str("Something went wrong: the webhook could not be reached")
            }
        }
    }
}

/// Matches slash commands against the catalog and relays the result.
#[derive(Debug, Clone)]
pub struct SocialRulesService {
    catalog: Arc<RuleCatalog>,
    webhook: WebhookClient,
}

impl SocialRulesService {
    /// Create a new social rules service.
    #[must_use]
    pub const fn new(catalog: Arc<RuleCatalog>, webhook: WebhookClient) -> Self {
        Self { catalog, webhook }
    }

    /// Handle a parsed slash command.
    ///
    /// Posts to the webhook at most once, and only when the keyword matches
    /// a rule. Relay failures are reported in the outcome, never propagated.
    /// Everything logged while handling carries `request_id`.
    #[instrument(
        skip(self, command, request_id),
        fields(
            request_id = %request_id,
            keyword = %command.keyword,
            private = command.destination.is_private(),
        )
    )]
    pub async fn handle(&self, command: &ParsedCommand, request_id: &RequestId) -> SlashOutcome {
        if command.wants_usage() {
            debug!("Usage requested");
            return SlashOutcome::Usage;
        }

        let Some(rule) = self.catalog.find(&command.keyword) else {
            debug!("No rule matched");
            return SlashOutcome::Unknown(command.keyword.clone());
        };

        let message = build_rule_message(&self.catalog, rule, &command.destination);

        match self.webhook.send(&message).await {
            Ok(()) => {
                info!(rule = %rule.id, "Social rule relayed");
                if command.destination.is_private() {
                    SlashOutcome::Sent {
                        title: rule.title.to_string(),
                        destination: command.destination.to_string(),
                    }
                } else {
                    SlashOutcome::Relayed
                }
            }
            Err(WebhookError::Rejected { status, body }) => {
                warn!(rule = %rule.id, %status, body = %body, "Webhook rejected social rule");
                SlashOutcome::RelayRejected { status, body }
            }
            Err(e @ WebhookError::Request(_)) => {
                let event_id = sentry::capture_error(&e);
                error!(
                    rule = %rule.id,
                    error = %e,
                    sentry_event_id = %event_id,
                    "Webhook unreachable"
                );
                SlashOutcome::RelayUnavailable
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io;
    use std::sync::Mutex;

    use axum::http::HeaderValue;
    use httpmock::prelude::*;
    use secrecy::SecretString;
    use tracing_subscriber::fmt::MakeWriter;
    use socialrules_core::SlashCommand;

    use super::*;

    fn service_for(url: String) -> SocialRulesService {
        SocialRulesService::new(
            Arc::new(RuleCatalog::recurse_social_rules().unwrap()),
            WebhookClient::new(SecretString::from(url)),
        )
    }

    fn request_id() -> RequestId {
        RequestId::from_header(Some(&HeaderValue::from_static("req-42")))
    }

    fn parsed(text: &str) -> ParsedCommand {
        SlashCommand {
            text: text.to_string(),
            channel_id: "C024BE91L".to_string(),
        }
        .parse()
    }

    #[test]
    fn test_usage_text() {
        assert_eq!(
            SlashOutcome::Usage.to_string(),
            "Usage: `/socialrules [surprise|wellactually|backseat|subtle] [<@user>]`\n\
             Anonymously send a Recurse Center social rule either publicly to your current \
             channel or privately to a specific user."
        );
    }

    #[test]
    fn test_unknown_text() {
        assert_eq!(
            SlashOutcome::Unknown("foobar".to_string()).to_string(),
            format!("Sorry I don't know about `foobar`.\n{USAGE}")
        );
    }

    #[test]
    fn test_sent_text() {
        let outcome = SlashOutcome::Sent {
            title: "No well-actually's".to_string(),
            destination: "@alice".to_string(),
        };
        assert_eq!(
            outcome.to_string(),
            "Okay, I sent \"No well-actually's\" to <@alice>"
        );
    }

    #[test]
    fn test_relayed_text_is_empty() {
        assert_eq!(SlashOutcome::Relayed.to_string(), "");
    }

    #[test]
    fn test_rejected_text_uses_canonical_status() {
        let outcome = SlashOutcome::RelayRejected {
            status: StatusCode::FORBIDDEN,
            body: "invalid_token".to_string(),
        };
        assert_eq!(
            outcome.to_string(),
            "Something went wrong (403 Forbidden): invalid_token"
        );
    }

    #[tokio::test]
    async fn test_usage_and_unknown_never_call_webhook() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(200);
            })
            .await;
        let service = service_for(server.url("/hook"));

        assert_eq!(service.handle(&parsed(""), &request_id()).await, SlashOutcome::Usage);
        assert_eq!(service.handle(&parsed("help"), &request_id()).await, SlashOutcome::Usage);
        assert_eq!(
            service.handle(&parsed("foobar @alice"), &request_id()).await,
            SlashOutcome::Unknown("foobar".to_string())
        );

        mock.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn test_public_success_is_silent() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/hook")
                    .json_body_partial(r##"{"channel": "#general"}"##);
                then.status(200).body("ok");
            })
            .await;
        let service = service_for(server.url("/hook"));

        let outcome = service.handle(&parsed("surprise #general"), &request_id()).await;

        assert_eq!(outcome, SlashOutcome::Relayed);
        mock.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn test_private_success_confirms() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .json_body_partial(r#"{"channel": "@alice"}"#);
                then.status(200).body("ok");
            })
            .await;
        let service = service_for(server.url("/hook"));

        let outcome = service.handle(&parsed("wellactually @alice"), &request_id()).await;

        assert_eq!(
            outcome,
            SlashOutcome::Sent {
                title: "No well-actually's".to_string(),
                destination: "@alice".to_string(),
            }
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_rejection_is_reported_for_private_destination() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(403).body("invalid_token");
            })
            .await;
        let service = service_for(server.url("/hook"));

        let outcome = service.handle(&parsed("subtle @bob"), &request_id()).await;

        assert_eq!(
            outcome,
            SlashOutcome::RelayRejected {
                status: StatusCode::FORBIDDEN,
                body: "invalid_token".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_unreachable_webhook_is_recovered() {
        let service = service_for("http://127.0.0.1:1/hook".to_string());

        let outcome = service.handle(&parsed("backseat"), &request_id()).await;

        assert_eq!(outcome, SlashOutcome::RelayUnavailable);
    }

    /// Collects formatted log lines in memory.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[tokio::test]
    async fn test_relay_failure_is_logged_with_request_id() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let service = service_for("http://127.0.0.1:1/hook".to_string());
        let outcome = service.handle(&parsed("backseat"), &request_id()).await;

        assert_eq!(outcome, SlashOutcome::RelayUnavailable);
        let output = logs.contents();
        let line = output
            .lines()
            .find(|line| line.contains("Webhook unreachable"))
            .unwrap_or_else(|| panic!("no failure event in:\n{output}"));
        assert!(line.contains("request_id=req-42"), "{line}");
        assert!(line.contains("rule=no-backseat-driving"), "{line}");
    }
}
