//! Core types for the social rules relay.

pub mod command;
pub mod rule;

pub use command::{Destination, HELP_KEYWORD, ParsedCommand, SlashCommand};
pub use rule::{CatalogError, Rule, RuleCatalog};
