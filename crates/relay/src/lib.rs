//! Social Rules Relay library.
//!
//! Receives `/socialrules` slash commands, matches the keyword against the
//! rule catalog, and posts the rule to an incoming webhook either publicly to
//! the invoking channel or privately to a mentioned user.
//!
//! The crate is a library so the router can be driven directly in tests.
//!
//! # Security
//!
//! Inbound requests are not authenticated; anyone who can reach the endpoint
//! can post rules through the webhook. Deploy behind the chat platform's
//! network or a proxy that enforces that.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod slack;
pub mod state;
