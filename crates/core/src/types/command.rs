//! Slash command form fields and their parsed shape.

use core::fmt;

use serde::Deserialize;

/// The keyword that asks for usage instead of a rule.
pub const HELP_KEYWORD: &str = "help";

/// Form fields of an inbound slash command.
///
/// Only the fields the relay consumes are modelled; the platform sends more
/// (`token`, `team_id`, `user_id`, `response_url`, ...) and they are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SlashCommand {
    /// Everything the user typed after the command name.
    #[serde(default)]
    pub text: String,
    /// Channel the command was invoked from.
    #[serde(default)]
    pub channel_id: String,
}

impl SlashCommand {
    /// Split the command text into a keyword and a delivery destination.
    ///
    /// The keyword is the first whitespace-delimited token (empty if there is
    /// none). The destination is the second token if present, otherwise the
    /// invoking channel. Tokens past the second are ignored.
    #[must_use]
    pub fn parse(&self) -> ParsedCommand {
        let mut words = self.text.split_whitespace();
        let keyword = words.next().unwrap_or_default().to_owned();
        let destination = words
            .next()
            .map_or_else(|| Destination::from(self.channel_id.as_str()), Destination::from);

        ParsedCommand {
            keyword,
            destination,
        }
    }
}

/// Where a rule should be delivered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Destination {
    /// A user mention such as `@alice`, delivered privately.
    User(String),
    /// A channel id or name, delivered publicly.
    Channel(String),
}

impl Destination {
    /// Returns the destination exactly as the user supplied it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::User(s) | Self::Channel(s) => s,
        }
    }

    /// Returns true if the destination is a single user.
    #[must_use]
    pub const fn is_private(&self) -> bool {
        matches!(self, Self::User(_))
    }
}

impl From<&str> for Destination {
    fn from(s: &str) -> Self {
        if s.starts_with('@') {
            Self::User(s.to_owned())
        } else {
            Self::Channel(s.to_owned())
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A slash command split into its keyword and destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// The requested rule keyword (may be empty).
    pub keyword: String,
    /// Where the rule should be sent.
    pub destination: Destination,
}

impl ParsedCommand {
    /// Returns true if the user asked for usage rather than a rule.
    #[must_use]
    pub fn wants_usage(&self) -> bool {
        self.keyword.is_empty() || self.keyword == HELP_KEYWORD
    }
}
