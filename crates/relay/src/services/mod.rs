//! Business logic services for the relay.
//!
//! # Services
//!
//! - `social_rules` - Slash command orchestration: match, format, relay

pub mod social_rules;

pub use social_rules::{SlashOutcome, SocialRulesService, USAGE};
