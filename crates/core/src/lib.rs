//! Social Rules Core - Rule catalog and slash command parsing.
//!
//! This crate provides the domain types used by the `relay` binary:
//! - [`RuleCatalog`] - the ordered list of social rules and the matcher
//! - [`SlashCommand`] - inbound form fields, parsed into a keyword and [`Destination`]
//!
//! # Architecture
//!
//! The core crate contains only types and matching logic - no I/O and no HTTP
//! clients. The relay crate owns formatting and delivery.
//!
//! # Modules
//!
//! - [`types`] - Rules, the catalog, and parsed commands
//! - [`catalog`] - The Recurse Center social rules

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod types;

pub use types::*;
